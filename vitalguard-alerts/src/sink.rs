//! Alert sinks
//!
//! The evaluator returns a value; a sink decides what to do with it. The
//! caller composes the two explicitly:
//!
//! ```rust
//! use vitalguard_alerts::{check_and_alert, RecordingAlerter};
//! use vitalguard_core::{VitalLimits, VitalSigns};
//!
//! let mut sink = RecordingAlerter::default();
//! let signs = VitalSigns::new(104.0, 72.0, 96.0);
//! let ok = check_and_alert(&signs, &VitalLimits::default(), &mut sink)?;
//!
//! assert!(!ok);
//! assert_eq!(sink.received().len(), 1);
//! # Ok::<(), vitalguard_alerts::AlertError>(())
//! ```

use vitalguard_core::{EvaluationResult, VitalLimits, VitalSigns};

use crate::errors::AlertResult;

/// Receives evaluation results and signals them
pub trait AlertSink {
    /// Signal `result`; returns `result.is_ok()`
    fn alert(&mut self, result: &EvaluationResult) -> AlertResult<bool>;
}

/// Sink that stores every result it receives
#[derive(Debug, Default, Clone)]
pub struct RecordingAlerter {
    received: Vec<EvaluationResult>,
}

impl RecordingAlerter {
    /// Results in arrival order
    pub fn received(&self) -> &[EvaluationResult] {
        &self.received
    }

    /// Number of out-of-range results received
    pub fn critical_count(&self) -> usize {
        self.received.iter().filter(|r| r.is_critical()).count()
    }
}

impl AlertSink for RecordingAlerter {
    fn alert(&mut self, result: &EvaluationResult) -> AlertResult<bool> {
        self.received.push(result.clone());
        Ok(result.is_ok())
    }
}

/// Evaluate `signs` and hand the composite result to `sink`.
///
/// Returns false when a reading was out of range.
pub fn check_and_alert<S: AlertSink + ?Sized>(
    signs: &VitalSigns,
    limits: &VitalLimits,
    sink: &mut S,
) -> AlertResult<bool> {
    let result = signs.evaluate(limits);
    sink.alert(&result)
}
