//! Core range evaluator for VitalGuard
//!
//! Classifies temperature, pulse and SpO2 readings into three zones:
//! normal, warning (close to a bound) and out of range.
//!
//! Key constraints:
//! - Pure functions, no I/O, no logging in the evaluation path
//! - No heap allocation; messages use an inline buffer
//! - Works without `std`
//!
//! ```no_run
//! use vitalguard_core::{VitalLimits, VitalSigns, VitalStatus};
//!
//! let limits = VitalLimits::default();
//! let result = VitalSigns::new(98.0, 61.5, 95.0).evaluate(&limits);
//!
//! match result.status() {
//!     VitalStatus::Normal => {}, // Nothing to report
//!     VitalStatus::Warning => {}, // Show result.message()
//!     VitalStatus::OutOfRange => {}, // Hand to an alert sink
//! }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

// Macro for optional logging
#[cfg(feature = "log")]
macro_rules! log_warn {
    ($($arg:tt)*) => { log::warn!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_warn {
    ($($arg:tt)*) => {};
}

pub mod constants;
pub mod errors;
pub mod evaluator;
pub mod limits;
pub mod range;
pub mod traits;
pub mod vitals;

// Public API
pub use errors::{ConfigError, ConfigResult};
pub use evaluator::{
    evaluate_range, evaluate_spo2, evaluate_vitals, EvaluationResult, Message, VitalStatus,
};
pub use limits::VitalLimits;
pub use range::{warning_bands, Tolerance, VitalRange, WarningBands};
pub use traits::Validatable;
pub use vitals::{VitalKind, VitalSigns};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_exists() {
        assert!(!VERSION.is_empty());
    }
}
