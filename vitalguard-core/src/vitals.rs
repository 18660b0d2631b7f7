//! Vital sign kinds and reading sets

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    constants::vitals::{
        BRADYCARDIA_WARNING, HYPERTHERMIA_WARNING, HYPOTHERMIA_WARNING,
        HYPOXEMIA_WARNING, PULSE_RATE_LABEL, SPO2_LABEL, TACHYCARDIA_WARNING,
        TEMPERATURE_LABEL,
    },
    evaluator::{evaluate_range, evaluate_spo2, evaluate_vitals, EvaluationResult},
    limits::VitalLimits,
};

/// Vital sign enumeration
///
/// Maps each metric to its label, warning wording and configured range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u8)]
pub enum VitalKind {
    /// Body temperature in °F
    Temperature = 0,
    /// Pulse rate in beats per minute
    PulseRate = 1,
    /// Blood oxygen saturation in %
    Spo2 = 2,
}

impl VitalKind {
    /// All kinds in evaluation order
    pub const ALL: [VitalKind; 3] = [
        VitalKind::Temperature,
        VitalKind::PulseRate,
        VitalKind::Spo2,
    ];

    /// Get human-readable name
    pub const fn name(&self) -> &'static str {
        match self {
            VitalKind::Temperature => "temperature",
            VitalKind::PulseRate => "pulse_rate",
            VitalKind::Spo2 => "spo2",
        }
    }

    /// Label used in out-of-range messages
    pub const fn label(&self) -> &'static str {
        match self {
            VitalKind::Temperature => TEMPERATURE_LABEL,
            VitalKind::PulseRate => PULSE_RATE_LABEL,
            VitalKind::Spo2 => SPO2_LABEL,
        }
    }

    /// Warning text for the band just above the minimum
    pub const fn low_warning(&self) -> &'static str {
        match self {
            VitalKind::Temperature => HYPOTHERMIA_WARNING,
            VitalKind::PulseRate => BRADYCARDIA_WARNING,
            VitalKind::Spo2 => HYPOXEMIA_WARNING,
        }
    }

    /// Warning text for the band just below the maximum, if the metric has one
    pub const fn high_warning(&self) -> Option<&'static str> {
        match self {
            VitalKind::Temperature => Some(HYPERTHERMIA_WARNING),
            VitalKind::PulseRate => Some(TACHYCARDIA_WARNING),
            VitalKind::Spo2 => None,
        }
    }

    /// Classify a single reading of this kind
    pub fn evaluate(&self, value: f32, limits: &VitalLimits) -> EvaluationResult {
        match self {
            VitalKind::Temperature => evaluate_range(
                value,
                limits.temperature_range,
                self.label(),
                Some(self.low_warning()),
                self.high_warning(),
                limits.tolerance,
            ),
            VitalKind::PulseRate => evaluate_range(
                value,
                limits.pulse_range,
                self.label(),
                Some(self.low_warning()),
                self.high_warning(),
                limits.tolerance,
            ),
            VitalKind::Spo2 => evaluate_spo2(value, limits.spo2_minimum, limits.tolerance),
        }
    }
}

/// One set of readings taken together
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct VitalSigns {
    /// Body temperature in °F
    pub temperature: f32,
    /// Pulse rate in beats per minute
    pub pulse_rate: f32,
    /// Blood oxygen saturation in %
    pub spo2: f32,
}

impl VitalSigns {
    /// Bundle three readings
    pub const fn new(temperature: f32, pulse_rate: f32, spo2: f32) -> Self {
        Self {
            temperature,
            pulse_rate,
            spo2,
        }
    }

    /// Reading for a given kind
    pub const fn get(&self, kind: VitalKind) -> f32 {
        match kind {
            VitalKind::Temperature => self.temperature,
            VitalKind::PulseRate => self.pulse_rate,
            VitalKind::Spo2 => self.spo2,
        }
    }

    /// Composite evaluation; first non-normal reading wins
    pub fn evaluate(&self, limits: &VitalLimits) -> EvaluationResult {
        evaluate_vitals(self.temperature, self.pulse_rate, self.spo2, limits)
    }
}
