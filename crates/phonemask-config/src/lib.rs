use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use phonemask_core::{CallingCode, CoreError, RegionCode, RegionTable};
use serde::Deserialize;
use thiserror::Error;

const APP_DIR: &str = "phonemask";
const CONFIG_FILENAME: &str = "config.toml";

#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub default_calling_code: Option<CallingCode>,
    pub regions: RegionTable,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing home directory")]
    MissingHomeDir,
    #[error("invalid config path: {0}")]
    InvalidConfigPath(PathBuf),
    #[error("config file not found: {0}")]
    MissingConfigFile(PathBuf),
    #[error("invalid default_region value: {0}")]
    InvalidDefaultRegion(String),
    #[error("unknown default_region: {0}")]
    UnknownDefaultRegion(String),
    #[error("invalid default_calling_code value: {0}")]
    InvalidDefaultCallingCode(String),
    #[error("invalid calling code for region {region}: {value}")]
    InvalidRegionOverride { region: String, value: String },
    #[error("no calling code: pass --calling-code or --region, or set a default in the config")]
    NoCallingCode,
    #[error(transparent)]
    Core(#[from] CoreError),
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    default_region: Option<String>,
    default_calling_code: Option<String>,
    regions: Option<BTreeMap<String, String>>,
}

impl AppConfig {
    /// Explicit calling code first, then explicit region, then the configured default.
    pub fn resolve_calling_code(
        &self,
        calling_code: Option<&str>,
        region: Option<&str>,
    ) -> Result<CallingCode> {
        if let Some(raw) = calling_code {
            return Ok(CallingCode::new(raw)?);
        }
        if let Some(raw) = region {
            return Ok(self.regions.resolve(raw)?);
        }
        self.default_calling_code
            .clone()
            .ok_or(ConfigError::NoCallingCode)
    }
}

pub fn load(config_path: Option<PathBuf>) -> Result<AppConfig> {
    let required = config_path.is_some();
    let path = match resolve_config_path(config_path) {
        Ok(path) => path,
        Err(ConfigError::MissingHomeDir) if !required => return Ok(AppConfig::default()),
        Err(ConfigError::InvalidConfigPath(_)) if !required => return Ok(AppConfig::default()),
        Err(err) => return Err(err),
    };
    match load_at_path(&path, required)? {
        Some(config) => Ok(config),
        None => Ok(AppConfig::default()),
    }
}

pub fn resolve_config_path(custom: Option<PathBuf>) -> Result<PathBuf> {
    match custom {
        Some(path) => {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::InvalidConfigPath(path));
            }
            Ok(path)
        }
        None => {
            let base = if let Some(dir) = env::var_os("XDG_CONFIG_HOME") {
                let path = PathBuf::from(dir);
                if path.as_os_str().is_empty() {
                    return Err(ConfigError::InvalidConfigPath(path));
                }
                path
            } else {
                let home = dirs::home_dir().ok_or(ConfigError::MissingHomeDir)?;
                home.join(".config")
            };
            Ok(base.join(APP_DIR).join(CONFIG_FILENAME))
        }
    }
}

fn load_at_path(path: &Path, required: bool) -> Result<Option<AppConfig>> {
    if !path.exists() {
        if required {
            return Err(ConfigError::MissingConfigFile(path.to_path_buf()));
        }
        return Ok(None);
    }

    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let parsed: ConfigFile = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Some(merge_config(parsed)?))
}

fn merge_config(parsed: ConfigFile) -> Result<AppConfig> {
    let mut config = AppConfig::default();

    // Overrides go in first so default_region can name a custom region.
    if let Some(regions) = parsed.regions {
        for (region, value) in regions {
            let invalid = || ConfigError::InvalidRegionOverride {
                region: region.clone(),
                value: value.clone(),
            };
            let code = RegionCode::new(&region).map_err(|_| invalid())?;
            let calling_code = CallingCode::new(&value).map_err(|_| invalid())?;
            config.regions = config.regions.with_override(code, calling_code);
        }
    }

    if let Some(region) = parsed.default_region {
        let code = RegionCode::new(&region)
            .map_err(|_| ConfigError::InvalidDefaultRegion(region.clone()))?;
        let calling_code = config
            .regions
            .lookup(&code)
            .cloned()
            .ok_or_else(|| ConfigError::UnknownDefaultRegion(code.to_string()))?;
        config.default_calling_code = Some(calling_code);
    }

    if let Some(raw) = parsed.default_calling_code {
        let calling_code =
            CallingCode::new(&raw).map_err(|_| ConfigError::InvalidDefaultCallingCode(raw))?;
        config.default_calling_code = Some(calling_code);
    }

    Ok(config)
}
