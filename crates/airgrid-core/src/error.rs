use chrono::NaiveDate;
use thiserror::Error;

/// Validation failures for domain values.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid date range: end {end} is before start {start}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },

    #[error("invalid airport code \"{0}\": expected 3 letters")]
    InvalidAirportCode(String),

    #[error("invalid max price {0}: must be greater than zero")]
    InvalidMaxPrice(u32),

    #[error("invalid travel class \"{0}\"")]
    InvalidTravelClass(String),

    #[error("invalid duration \"{0}\"")]
    InvalidDuration(String),
}

/// Errors raised while assembling runtime configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required parameter: {0}")]
    MissingParameter(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
