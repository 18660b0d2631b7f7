//! Error types for alert delivery and configuration loading

use thiserror::Error;
use vitalguard_core::ConfigError;

/// Result type for alert operations
pub type AlertResult<T> = Result<T, AlertError>;

/// Errors raised while emitting alerts or loading limits
#[derive(Error, Debug)]
pub enum AlertError {
    /// Writing to the alert output failed
    #[error("Alert output failed: {0}")]
    Io(#[from] std::io::Error),

    /// Limits file is not valid JSON for `VitalLimits`
    #[error("Limits parse failed: {0}")]
    Parse(#[from] serde_json::Error),

    /// Limits parsed but are not usable
    #[error("Invalid limits: {0}")]
    Config(#[from] ConfigError),
}
