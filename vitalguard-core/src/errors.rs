//! Error Types for Limit Configuration
//!
//! ## Design Philosophy
//!
//! Classification outcomes (Normal, Warning, OutOfRange) are domain states,
//! not errors, so they never appear here. The only failures VitalGuard knows
//! about are malformed limits supplied by the caller:
//!
//! 1. **Small Size**: Variants carry a few `f32` values and `&'static str`
//!    labels only, no heap data.
//!
//! 2. **Copy Semantics**: Errors implement Copy so they can be returned from
//!    `const`-friendly constructors without move complications.
//!
//! 3. **Opt-In**: Evaluation never validates. Callers that build limits from
//!    untrusted input run [`VitalLimits::validate`](crate::VitalLimits::validate)
//!    once, up front.
//!
//! ## Error Handling Strategy
//!
//! ```rust
//! use vitalguard_core::{ConfigError, VitalRange};
//!
//! match VitalRange::new(102.0, 95.0) {
//!     Ok(_) => unreachable!(),
//!     Err(ConfigError::InvertedRange { min, max }) => {
//!         assert_eq!((min, max), (102.0, 95.0));
//!     }
//!     Err(_) => unreachable!(),
//! }
//! ```

use thiserror_no_std::Error;

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Configuration errors - kept small for embedded use
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// Lower bound is above the upper bound
    #[error("Inverted range: min {min} is greater than max {max}")]
    InvertedRange {
        /// Supplied lower bound
        min: f32,
        /// Supplied upper bound
        max: f32,
    },

    /// A range bound is NaN or infinite where a finite value is required
    #[error("Invalid bound: {value} is not a finite number")]
    NonFinite {
        /// The offending bound
        value: f32,
    },

    /// Tolerance percentage is negative or not a number
    #[error("Invalid tolerance: {percent}% must be finite and non-negative")]
    InvalidTolerance {
        /// The offending percentage
        percent: f32,
    },

    /// Low and high warning bands of one range meet or overlap
    #[error("{label} warning bands overlap: width {width} spans half the range ({half_span})")]
    OverlappingBands {
        /// Which vital the range belongs to
        label: &'static str,
        /// Computed warning band width
        width: f32,
        /// Half of `max - min`
        half_span: f32,
    },
}
