//! Limits configuration loading
//!
//! Reads [`VitalLimits`] from JSON. Missing fields fall back to the
//! reference defaults; the result is validated before it is returned.
//!
//! ```json
//! {
//!   "temperature_range": { "min": 96, "max": 101 },
//!   "pulse_range": { "min": 65, "max": 99 },
//!   "spo2_minimum": 92,
//!   "tolerance_percent": 1.5
//! }
//! ```

use std::fs;
use std::path::Path;

use vitalguard_core::VitalLimits;

use crate::errors::AlertResult;

/// Parse and validate limits from a JSON string
pub fn limits_from_json(json: &str) -> AlertResult<VitalLimits> {
    let limits: VitalLimits = serde_json::from_str(json)?;
    limits.validate()?;
    Ok(limits)
}

/// Read, parse and validate limits from a JSON file
pub fn load_limits(path: impl AsRef<Path>) -> AlertResult<VitalLimits> {
    let path = path.as_ref();
    let json = fs::read_to_string(path)?;
    let limits = limits_from_json(&json)?;
    log::debug!("loaded vital limits from {}: {:?}", path.display(), limits);
    Ok(limits)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AlertError;
    use vitalguard_core::{ConfigError, VitalRange};

    #[test]
    fn empty_object_gives_defaults() {
        assert_eq!(limits_from_json("{}").unwrap(), VitalLimits::default());
    }

    #[test]
    fn partial_override() {
        let limits = limits_from_json(r#"{"spo2_minimum": 92, "tolerance_percent": 2.0}"#).unwrap();
        assert_eq!(limits.spo2_minimum, 92.0);
        assert_eq!(limits.tolerance.percent(), 2.0);
        assert_eq!(limits.pulse_range, VitalRange::new_unchecked(60.0, 100.0));
    }

    #[test]
    fn inverted_range_rejected() {
        let err = limits_from_json(r#"{"pulse_range": {"min": 100, "max": 60}}"#).unwrap_err();
        assert!(matches!(
            err,
            AlertError::Config(ConfigError::InvertedRange { .. })
        ));
    }

    #[test]
    fn malformed_json_rejected() {
        assert!(matches!(
            limits_from_json("{ not json"),
            Err(AlertError::Parse(_))
        ));
    }
}
