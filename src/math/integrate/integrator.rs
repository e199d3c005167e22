use crate::math::integrate::trapezoid::composite_trapezoid;
use crate::math::numericalerror::{
    NumericalError, 
    ValidationError
};
use crate::math::realfunction::RealFunction;

/// Composite trapezoid integrator with a fixed, pre-validated subdivision count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrapezoidIntegrator {
    subdivisions: usize
}

impl TrapezoidIntegrator {
    pub fn new(subdivisions: usize) -> Result<TrapezoidIntegrator, NumericalError> {
        if subdivisions == 0 {
            return Err(ValidationError::ZeroSubdivisions.into());
        }
        Ok(TrapezoidIntegrator { subdivisions })
    }

    pub fn subdivisions(&self) -> usize {
        self.subdivisions
    }

    /// Same value as `trapezoid(f, l, r, self.subdivisions())`.
    pub fn integral<F>(&self, f: &F, l: f64, r: f64) -> f64
    where
        F: RealFunction + ?Sized,
    {
        composite_trapezoid(f, l, r, self.subdivisions)
    }
}
