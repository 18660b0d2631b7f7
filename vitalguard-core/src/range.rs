//! Normal ranges and warning tolerance
//!
//! A [`VitalRange`] is the acceptable `[min, max]` span for one vital sign.
//! A [`Tolerance`] turns that span into two warning bands that sit just
//! inside each bound:
//!
//! ```text
//!   out of range | warn |        normal        | warn | out of range
//! ---------------)(-----]----------------------[-----)(-------------
//!               min  min+w                  max-w   max
//! ```
//!
//! The band width is `tolerance% of max`. Min-only ranges (SpO2) have no
//! upper bound, so their width is taken from `min` and there is no high band.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    constants::vitals::DEFAULT_TOLERANCE_PCT,
    errors::{ConfigError, ConfigResult},
    traits::Validatable,
};

/// Acceptable span for a single vital sign
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct VitalRange {
    min: f32,
    max: f32,
}

impl VitalRange {
    /// Create a two-sided range, rejecting inverted or non-finite bounds
    pub fn new(min: f32, max: f32) -> ConfigResult<Self> {
        let range = Self { min, max };
        range.validate()?;
        Ok(range)
    }

    /// Create a two-sided range without checking it.
    ///
    /// Callers must ensure `min <= max`.
    pub const fn new_unchecked(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Create a range with only a lower bound
    pub const fn min_only(min: f32) -> Self {
        Self { min, max: f32::INFINITY }
    }

    /// Lower bound
    pub const fn min(&self) -> f32 {
        self.min
    }

    /// Upper bound (`f32::INFINITY` for min-only ranges)
    pub const fn max(&self) -> f32 {
        self.max
    }

    /// True when the range has no upper bound
    pub fn is_min_only(&self) -> bool {
        self.max == f32::INFINITY
    }

    /// Inclusive membership test: `min <= value <= max`
    pub fn contains(&self, value: f32) -> bool {
        self.min <= value && value <= self.max
    }

    /// The bound the tolerance percentage is taken from
    pub fn anchor(&self) -> f32 {
        if self.is_min_only() {
            self.min
        } else {
            self.max
        }
    }

    /// Check bounds are finite (max may be +inf) and ordered
    pub fn validate(&self) -> ConfigResult<()> {
        if !self.min.is_valid() {
            return Err(ConfigError::NonFinite { value: self.min });
        }
        if !self.is_min_only() && !self.max.is_valid() {
            return Err(ConfigError::NonFinite { value: self.max });
        }
        if self.min > self.max {
            return Err(ConfigError::InvertedRange {
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }
}

/// Warning tolerance as a percentage of a range's upper bound
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Tolerance(f32);

impl Default for Tolerance {
    fn default() -> Self {
        Self(DEFAULT_TOLERANCE_PCT)
    }
}

impl Tolerance {
    /// Create a tolerance, rejecting negative or non-finite percentages
    pub fn new(percent: f32) -> ConfigResult<Self> {
        let tolerance = Self(percent);
        tolerance.validate()?;
        Ok(tolerance)
    }

    /// Create a tolerance without checking it
    pub const fn new_unchecked(percent: f32) -> Self {
        Self(percent)
    }

    /// The raw percentage
    pub const fn percent(&self) -> f32 {
        self.0
    }

    /// Width of each warning band for `range`.
    ///
    /// Multiplies before dividing so decimal inputs like `1.5 * 100 / 100`
    /// land exactly on `1.5`.
    pub fn width(&self, range: &VitalRange) -> f32 {
        self.0 * range.anchor() / 100.0
    }

    /// Check the percentage is finite and non-negative
    pub fn validate(&self) -> ConfigResult<()> {
        if !self.0.is_valid() || self.0 < 0.0 {
            return Err(ConfigError::InvalidTolerance { percent: self.0 });
        }
        Ok(())
    }
}

/// The warning sub-ranges adjoining each bound of a [`VitalRange`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WarningBands {
    /// `(min, min + width)`: warns for `min < v <= min + width`
    pub low: (f32, f32),
    /// `(max - width, max)`: warns for `max - width <= v < max`.
    /// `None` for min-only ranges.
    pub high: Option<(f32, f32)>,
}

impl WarningBands {
    /// True when `value` falls in the low band
    pub fn in_low(&self, value: f32) -> bool {
        let (start, end) = self.low;
        start < value && value <= end
    }

    /// True when `value` falls in the high band
    pub fn in_high(&self, value: f32) -> bool {
        match self.high {
            Some((start, end)) => start <= value && value < end,
            None => false,
        }
    }
}

/// Compute the low and high warning bands for `range`
pub fn warning_bands(range: &VitalRange, tolerance: Tolerance) -> WarningBands {
    let width = tolerance.width(range);
    let high = if range.is_min_only() {
        None
    } else {
        Some((range.max - width, range.max))
    };

    WarningBands {
        low: (range.min, range.min + width),
        high,
    }
}
