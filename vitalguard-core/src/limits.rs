//! Limit configuration
//!
//! [`VitalLimits`] bundles every range and the shared warning tolerance.
//! It is a plain value: build one, pass it by reference to each
//! evaluation, never mutate a shared default.
//!
//! ```rust
//! use vitalguard_core::VitalLimits;
//!
//! // Tighter limits for a post-operative ward
//! let limits = VitalLimits::default()
//!     .with_temperature_range(96.0, 101.0)
//!     .with_pulse_range(65.0, 99.0)
//!     .with_spo2_minimum(92.0);
//!
//! limits.validate()?;
//! # Ok::<(), vitalguard_core::ConfigError>(())
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    constants::vitals::{
        PULSE_RATE_LABEL, PULSE_RATE_MAX_BPM, PULSE_RATE_MIN_BPM, SPO2_MIN_PCT,
        TEMPERATURE_LABEL, TEMPERATURE_MAX_F, TEMPERATURE_MIN_F,
    },
    errors::{ConfigError, ConfigResult},
    range::{Tolerance, VitalRange},
    traits::Validatable,
};

/// Ranges and tolerance for a composite evaluation
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct VitalLimits {
    /// Normal body temperature span (°F)
    pub temperature_range: VitalRange,

    /// Normal resting pulse span (bpm)
    pub pulse_range: VitalRange,

    /// Lowest acceptable SpO2 (%)
    pub spo2_minimum: f32,

    /// Warning band width as % of each range's upper bound
    #[cfg_attr(feature = "serde", serde(rename = "tolerance_percent"))]
    pub tolerance: Tolerance,
}

impl Default for VitalLimits {
    fn default() -> Self {
        Self {
            temperature_range: VitalRange::new_unchecked(TEMPERATURE_MIN_F, TEMPERATURE_MAX_F),
            pulse_range: VitalRange::new_unchecked(PULSE_RATE_MIN_BPM, PULSE_RATE_MAX_BPM),
            spo2_minimum: SPO2_MIN_PCT,
            tolerance: Tolerance::default(),
        }
    }
}

impl VitalLimits {
    /// Replace the temperature range (checked by [`validate`](Self::validate))
    pub fn with_temperature_range(mut self, min: f32, max: f32) -> Self {
        self.temperature_range = VitalRange::new_unchecked(min, max);
        self
    }

    /// Replace the pulse range (checked by [`validate`](Self::validate))
    pub fn with_pulse_range(mut self, min: f32, max: f32) -> Self {
        self.pulse_range = VitalRange::new_unchecked(min, max);
        self
    }

    /// Replace the SpO2 minimum
    pub fn with_spo2_minimum(mut self, minimum: f32) -> Self {
        self.spo2_minimum = minimum;
        self
    }

    /// Replace the warning tolerance percentage
    pub fn with_tolerance(mut self, percent: f32) -> Self {
        self.tolerance = Tolerance::new_unchecked(percent);
        self
    }

    /// Check every range, the tolerance, and that warning bands stay apart.
    ///
    /// Evaluation never calls this; run it once on untrusted configuration.
    pub fn validate(&self) -> ConfigResult<()> {
        self.tolerance.validate()?;

        if !self.spo2_minimum.is_valid() {
            return Err(ConfigError::NonFinite {
                value: self.spo2_minimum,
            });
        }

        for (label, range) in [
            (TEMPERATURE_LABEL, &self.temperature_range),
            (PULSE_RATE_LABEL, &self.pulse_range),
        ] {
            range.validate()?;
            self.check_bands(label, range)?;
        }

        Ok(())
    }

    // Requires width < (max - min) / 2 so the low and high bands never meet
    fn check_bands(&self, label: &'static str, range: &VitalRange) -> ConfigResult<()> {
        let width = self.tolerance.width(range);
        let half_span = (range.max() - range.min()) / 2.0;

        if width >= half_span {
            log_warn!(
                "{} warning bands overlap: width {} >= half span {}",
                label,
                width,
                half_span
            );
            return Err(ConfigError::OverlappingBands {
                label,
                width,
                half_span,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_ranges() {
        let limits = VitalLimits::default();
        assert_eq!(limits.temperature_range, VitalRange::new_unchecked(95.0, 102.0));
        assert_eq!(limits.pulse_range, VitalRange::new_unchecked(60.0, 100.0));
        assert_eq!(limits.spo2_minimum, 90.0);
        assert_eq!(limits.tolerance.percent(), 1.5);
        assert!(limits.validate().is_ok());
    }

    #[test]
    fn inverted_range_rejected() {
        let limits = VitalLimits::default().with_pulse_range(100.0, 60.0);
        assert_eq!(
            limits.validate(),
            Err(ConfigError::InvertedRange { min: 100.0, max: 60.0 })
        );
    }

    #[test]
    fn negative_tolerance_rejected() {
        let limits = VitalLimits::default().with_tolerance(-0.5);
        assert!(matches!(
            limits.validate(),
            Err(ConfigError::InvalidTolerance { .. })
        ));
    }

    #[test]
    fn nan_spo2_rejected() {
        let limits = VitalLimits::default().with_spo2_minimum(f32::NAN);
        assert!(matches!(limits.validate(), Err(ConfigError::NonFinite { .. })));
    }

    #[test]
    fn overlapping_bands_rejected() {
        // 10% of 102 is 10.2, more than half of the 7 degree span
        let limits = VitalLimits::default().with_tolerance(10.0);
        match limits.validate() {
            Err(ConfigError::OverlappingBands { label, .. }) => assert_eq!(label, "Temperature"),
            other => panic!("expected overlap, got {other:?}"),
        }
    }
}
