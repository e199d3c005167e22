use crate::math::differentiate::backward::backward_difference_quotient;
use crate::math::numericalerror::{
    NumericalError, 
    ValidationError
};
use crate::math::realfunction::RealFunction;

/// Backward-difference differentiator with a fixed, pre-validated step size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BackwardDifferentiator {
    step_size: f64
}

impl BackwardDifferentiator {
    pub fn new(step_size: f64) -> Result<BackwardDifferentiator, NumericalError> {
        if !(step_size > 0.0) {
            return Err(ValidationError::NonPositiveStepSize.into());
        }
        Ok(BackwardDifferentiator { step_size })
    }

    pub fn step_size(&self) -> f64 {
        self.step_size
    }

    /// Same value as `backward(f, x, self.step_size())`.
    pub fn derivative<F>(&self, f: &F, x: f64) -> f64
    where
        F: RealFunction + ?Sized,
    {
        backward_difference_quotient(f, x, self.step_size)
    }
}
