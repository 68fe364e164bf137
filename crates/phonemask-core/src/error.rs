use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("invalid calling code: {0}")]
    InvalidCallingCode(String),
    #[error("invalid region code: {0}")]
    InvalidRegionCode(String),
    #[error("unknown region: {0}")]
    UnknownRegion(String),
}
