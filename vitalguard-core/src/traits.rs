//! Core traits for the evaluator
//!
//! Keep them simple - the evaluator is a handful of pure functions.

/// Trait for values that can be used as range bounds
pub trait Validatable {
    /// Check if the value is a usable number (not NaN, infinite, etc)
    fn is_valid(&self) -> bool;
}

impl Validatable for f32 {
    fn is_valid(&self) -> bool {
        self.is_finite()
    }
}
