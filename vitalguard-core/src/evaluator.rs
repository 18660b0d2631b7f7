//! Three-Zone Range Evaluation
//!
//! ## Overview
//!
//! Every reading lands in exactly one zone:
//!
//! | Zone         | Condition                                  | Message                         |
//! |--------------|--------------------------------------------|---------------------------------|
//! | `OutOfRange` | `v < min` or `v > max`                     | `"<label> out of range! (...)"` |
//! | `Warning`    | `min < v <= min + w` or `max - w <= v < max` | `"Warning: <text>"`           |
//! | `Normal`     | everything else, including `v == min/max`  | none                            |
//!
//! Checks run in a fixed precedence (below min, low band, high band, above
//! max) so the first matching rule decides the zone.
//!
//! ## Composition
//!
//! [`evaluate_vitals`] checks temperature, pulse and SpO2 in that order and
//! returns the first result that is not `Normal`. An early warning therefore
//! masks a later out-of-range reading; order decides which single message
//! surfaces.
//!
//! ## Purity
//!
//! Nothing here allocates, logs or performs I/O. Messages are rendered into
//! an inline [`Message`] buffer and the caller decides what to do with them.
//!
//! ```rust
//! use vitalguard_core::{evaluate_vitals, VitalLimits, VitalStatus};
//!
//! let result = evaluate_vitals(95.5, 80.0, 95.0, &VitalLimits::default());
//! assert_eq!(result.status(), VitalStatus::Warning);
//! assert_eq!(result.message(), Some("Warning: Approaching hypothermia"));
//! ```

use core::fmt::{self, Write};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    constants::vitals::{
        BOUNDS_TEXT_CAPACITY, HYPOXEMIA_WARNING, MESSAGE_CAPACITY, SPO2_LABEL, WARNING_PREFIX,
    },
    limits::VitalLimits,
    range::{warning_bands, Tolerance, VitalRange},
    vitals::VitalKind,
};

/// Inline, fixed-capacity message text
pub type Message = heapless::String<MESSAGE_CAPACITY>;

type BoundsText = heapless::String<BOUNDS_TEXT_CAPACITY>;

/// Classification zone for a reading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum VitalStatus {
    /// Comfortably inside the range (bounds included)
    Normal,
    /// Inside the range but within a warning band
    Warning,
    /// Outside the range
    OutOfRange,
}

impl VitalStatus {
    /// Get human-readable name
    pub const fn name(&self) -> &'static str {
        match self {
            VitalStatus::Normal => "normal",
            VitalStatus::Warning => "warning",
            VitalStatus::OutOfRange => "out_of_range",
        }
    }
}

impl fmt::Display for VitalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Zone plus optional human-readable message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvaluationResult {
    status: VitalStatus,
    message: Option<Message>,
}

impl Default for EvaluationResult {
    fn default() -> Self {
        Self::normal()
    }
}

impl EvaluationResult {
    /// Normal result, no message
    pub const fn normal() -> Self {
        Self {
            status: VitalStatus::Normal,
            message: None,
        }
    }

    /// Warning result; `text` gets the `"Warning: "` prefix.
    ///
    /// Text longer than the message capacity is cut on a char boundary.
    pub fn warning(text: &str) -> Self {
        let mut message = Message::new();
        push_clipped(&mut message, WARNING_PREFIX, MESSAGE_CAPACITY);
        push_clipped(&mut message, text, MESSAGE_CAPACITY);

        Self {
            status: VitalStatus::Warning,
            message: Some(message),
        }
    }

    /// Out-of-range result for `label` with the bounds spelled out.
    ///
    /// A label too long for the message is shortened so the
    /// `" out of range! (...)"` part always survives intact.
    pub fn out_of_range(label: &str, range: &VitalRange) -> Self {
        let bounds = bounds_text(range);
        let mut message = Message::new();
        push_clipped(&mut message, label, MESSAGE_CAPACITY - bounds.len());
        push_clipped(&mut message, &bounds, MESSAGE_CAPACITY);

        Self {
            status: VitalStatus::OutOfRange,
            message: Some(message),
        }
    }

    /// The classification zone
    pub const fn status(&self) -> VitalStatus {
        self.status
    }

    /// Message text, absent for `Normal`
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// True for `Normal`
    pub fn is_normal(&self) -> bool {
        self.status == VitalStatus::Normal
    }

    /// False only for `OutOfRange`; warnings are still ok
    pub fn is_ok(&self) -> bool {
        self.status != VitalStatus::OutOfRange
    }

    /// True for `OutOfRange`
    pub fn is_critical(&self) -> bool {
        !self.is_ok()
    }
}

impl fmt::Display for EvaluationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.message() {
            Some(message) => f.write_str(message),
            None => f.write_str(self.status.name()),
        }
    }
}

fn bounds_text(range: &VitalRange) -> BoundsText {
    let mut text = BoundsText::new();
    // Sized for two worst-case f32 renderings
    let written = if range.is_min_only() {
        write!(text, " out of range! (min {})", range.min())
    } else {
        write!(text, " out of range! ({}-{})", range.min(), range.max())
    };
    debug_assert!(written.is_ok());
    text
}

// Appends as much of `text` as keeps `message` within `limit` bytes
fn push_clipped(message: &mut Message, text: &str, limit: usize) {
    let room = limit.saturating_sub(message.len()).min(text.len());
    let end = (0..=room)
        .rev()
        .find(|&i| text.is_char_boundary(i))
        .unwrap_or(0);
    let pushed = message.push_str(&text[..end]);
    debug_assert!(pushed.is_ok());
}

/// Classify `value` against `range`.
///
/// `low_message`/`high_message` enable the matching warning band; pass `None`
/// to disable a band entirely. Values exactly on a bound are `Normal`.
///
/// Readings, bounds and band widths are `f32`, about seven significant
/// digits. A reading within roughly `1e-5` of a bound near 100 (say
/// `102.000001`) rounds onto the bound and classifies as `Normal`. Clinical
/// inputs carry one or two decimals, well inside that precision.
pub fn evaluate_range(
    value: f32,
    range: VitalRange,
    label: &str,
    low_message: Option<&str>,
    high_message: Option<&str>,
    tolerance: Tolerance,
) -> EvaluationResult {
    if value < range.min() {
        return EvaluationResult::out_of_range(label, &range);
    }

    let bands = warning_bands(&range, tolerance);

    if let Some(text) = low_message {
        if bands.in_low(value) {
            return EvaluationResult::warning(text);
        }
    }

    if let Some(text) = high_message {
        if bands.in_high(value) {
            return EvaluationResult::warning(text);
        }
    }

    if value > range.max() {
        return EvaluationResult::out_of_range(label, &range);
    }

    EvaluationResult::normal()
}

/// Classify an SpO2 reading against a lower bound only.
///
/// Never produces a high-side warning.
pub fn evaluate_spo2(value: f32, minimum: f32, tolerance: Tolerance) -> EvaluationResult {
    evaluate_range(
        value,
        VitalRange::min_only(minimum),
        SPO2_LABEL,
        Some(HYPOXEMIA_WARNING),
        None,
        tolerance,
    )
}

/// Evaluate temperature, pulse and SpO2 in order; first non-normal wins
pub fn evaluate_vitals(
    temperature: f32,
    pulse_rate: f32,
    spo2: f32,
    limits: &VitalLimits,
) -> EvaluationResult {
    [
        (VitalKind::Temperature, temperature),
        (VitalKind::PulseRate, pulse_rate),
        (VitalKind::Spo2, spo2),
    ]
    .into_iter()
    .map(|(kind, value)| kind.evaluate(value, limits))
    .find(|result| !result.is_normal())
    .unwrap_or_default()
}
