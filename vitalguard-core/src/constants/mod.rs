//! Constants for VitalGuard Core
//!
//! Centralized reference values used throughout the evaluator. Every bound
//! lives here with its unit and clinical meaning so no magic numbers leak
//! into the evaluation code.
//!
//! ## Organization
//!
//! - **Vitals**: Default normal ranges, warning tolerance, labels and messages
//!
//! ## Usage Guidelines
//!
//! 1. Always use these constants instead of magic numbers
//! 2. Include the unit in the constant name
//! 3. Keep user-facing text next to the bound it describes

/// Default vital-sign ranges, tolerance and alert wording.
pub mod vitals;

pub use vitals::{
    DEFAULT_TOLERANCE_PCT, PULSE_RATE_MAX_BPM, PULSE_RATE_MIN_BPM, SPO2_MIN_PCT,
    TEMPERATURE_MAX_F, TEMPERATURE_MIN_F,
};
