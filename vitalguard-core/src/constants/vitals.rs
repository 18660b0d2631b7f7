//! Vital Sign Reference Ranges
//!
//! Default adult resting ranges used when no deployment-specific
//! configuration is supplied, plus the wording attached to each zone.

// ===== TEMPERATURE =====

/// Lowest normal body temperature (°F).
///
/// Readings below this are treated as hypothermic.
pub const TEMPERATURE_MIN_F: f32 = 95.0;

/// Highest normal body temperature (°F).
///
/// Readings above this are treated as hyperthermic.
pub const TEMPERATURE_MAX_F: f32 = 102.0;

/// Display label for temperature readings.
pub const TEMPERATURE_LABEL: &str = "Temperature";

/// Warning text for temperature near the lower bound.
pub const HYPOTHERMIA_WARNING: &str = "Approaching hypothermia";

/// Warning text for temperature near the upper bound.
pub const HYPERTHERMIA_WARNING: &str = "Approaching hyperthermia";

// ===== PULSE RATE =====

/// Lowest normal resting pulse rate (beats per minute).
pub const PULSE_RATE_MIN_BPM: f32 = 60.0;

/// Highest normal resting pulse rate (beats per minute).
pub const PULSE_RATE_MAX_BPM: f32 = 100.0;

/// Display label for pulse readings.
pub const PULSE_RATE_LABEL: &str = "Pulse Rate";

/// Warning text for pulse near the lower bound.
pub const BRADYCARDIA_WARNING: &str = "Approaching bradycardia";

/// Warning text for pulse near the upper bound.
pub const TACHYCARDIA_WARNING: &str = "Approaching tachycardia";

// ===== OXYGEN SATURATION =====

/// Minimum acceptable blood oxygen saturation (%).
///
/// SpO2 has no upper limit; 100% is fully saturated.
pub const SPO2_MIN_PCT: f32 = 90.0;

/// Display label for SpO2 readings.
pub const SPO2_LABEL: &str = "Oxygen Saturation";

/// Warning text for SpO2 near the minimum.
pub const HYPOXEMIA_WARNING: &str = "Approaching hypoxemia";

// ===== WARNING BANDS =====

/// Default warning tolerance (% of the range's upper bound).
///
/// Example: 1.5% of 102°F gives a 1.53°F band inside each temperature bound.
pub const DEFAULT_TOLERANCE_PCT: f32 = 1.5;

/// Prefix added to every warning message.
pub const WARNING_PREFIX: &str = "Warning: ";

/// Longest `Display` rendering of any finite `f32` (bytes).
///
/// Values just above `f32::MIN_POSITIVE` print 37 leading zeros and up to
/// nine significant digits, plus sign and `"0."`.
pub const F32_DISPLAY_MAX_LEN: usize = 50;

/// Capacity of the `" out of range! (<min>-<max>)"` part of a message (bytes).
///
/// 16 bytes of wording, two bounds and two separators.
pub const BOUNDS_TEXT_CAPACITY: usize = 18 + 2 * F32_DISPLAY_MAX_LEN;

/// Capacity of an inline result message (bytes).
///
/// Every built-in label fits next to worst-case bounds. Longer caller labels
/// are shortened; the bounds text never is.
pub const MESSAGE_CAPACITY: usize = 160;
