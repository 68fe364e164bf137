use anyhow::Error;
use phonemask_config::ConfigError;
use phonemask_core::CoreError;
use std::process::ExitCode;
use thiserror::Error as ThisError;

pub const EXIT_FAILURE: u8 = 1;
pub const EXIT_INVALID_INPUT: u8 = 3;

#[derive(Debug, ThisError)]
pub enum CliError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

pub fn invalid_input(message: impl Into<String>) -> Error {
    CliError::InvalidInput(message.into()).into()
}

pub fn report_error(err: &Error, verbose: bool) {
    if verbose {
        eprintln!("error: {:#}", err);
    } else {
        eprintln!("error: {}", err);
    }
}

pub fn exit_code_for(err: &Error) -> ExitCode {
    ExitCode::from(exit_status_for(err))
}

fn exit_status_for(err: &Error) -> u8 {
    for cause in err.chain() {
        if let Some(CliError::InvalidInput(_)) = cause.downcast_ref::<CliError>() {
            return EXIT_INVALID_INPUT;
        }
        if let Some(config_err) = cause.downcast_ref::<ConfigError>() {
            return config_exit_code(config_err);
        }
        if let Some(_core_err) = cause.downcast_ref::<CoreError>() {
            return EXIT_INVALID_INPUT;
        }
    }
    EXIT_FAILURE
}

fn config_exit_code(err: &ConfigError) -> u8 {
    match err {
        ConfigError::MissingHomeDir => EXIT_FAILURE,
        ConfigError::Read { .. } => EXIT_FAILURE,
        ConfigError::InvalidConfigPath(_)
        | ConfigError::MissingConfigFile(_)
        | ConfigError::InvalidDefaultRegion(_)
        | ConfigError::UnknownDefaultRegion(_)
        | ConfigError::InvalidDefaultCallingCode(_)
        | ConfigError::InvalidRegionOverride { .. }
        | ConfigError::NoCallingCode
        | ConfigError::Core(_)
        | ConfigError::Parse { .. } => EXIT_INVALID_INPUT,
    }
}

#[cfg(test)]
mod tests {
    use super::{exit_status_for, invalid_input, EXIT_FAILURE, EXIT_INVALID_INPUT};
    use anyhow::{anyhow, Context as _};
    use phonemask_config::ConfigError;
    use phonemask_core::CoreError;

    #[test]
    fn exit_code_maps_known_errors() {
        let err = invalid_input("bad");
        assert_eq!(exit_status_for(&err), EXIT_INVALID_INPUT);

        let err = anyhow::Error::from(ConfigError::NoCallingCode).context("resolve calling code");
        assert_eq!(exit_status_for(&err), EXIT_INVALID_INPUT);

        let err = anyhow::Error::from(CoreError::InvalidCallingCode("x".to_string()));
        assert_eq!(exit_status_for(&err), EXIT_INVALID_INPUT);

        let err = anyhow::Error::from(ConfigError::MissingHomeDir);
        assert_eq!(exit_status_for(&err), EXIT_FAILURE);
    }

    #[test]
    fn exit_code_defaults_to_failure() {
        let err: anyhow::Error = Err::<(), _>(anyhow!("boom"))
            .context("outer")
            .unwrap_err();
        assert_eq!(exit_status_for(&err), EXIT_FAILURE);
    }
}
