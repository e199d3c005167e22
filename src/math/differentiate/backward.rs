use crate::math::numericalerror::{
    NumericalError, 
    ValidationError
};
use crate::math::realfunction::RealFunction;

// ─────────────────────────────────────────────────────────────────────────────
// Backward difference
// ─────────────────────────────────────────────────────────────────────────────
//
//   f'(x) ≈ (f(x) - f(x - h)) / h
//
// 一階精度：誤差約與 h 成正比。h 過小時相減抵銷（cancellation）會主導誤差，
// 呼叫端不應傳入任意小的 h。

/// Approximates `f'(x)` with a backward difference of step size `h`.
///
/// `h` must be strictly greater than 0 (NaN is rejected as well); otherwise
/// [`ValidationError::NonPositiveStepSize`] is returned and `f` is never
/// evaluated. NaN or infinite values produced by `f` are returned as-is.
pub fn backward<F>(f: &F, x: f64, h: f64) -> Result<f64, NumericalError>
where
    F: RealFunction + ?Sized,
{
    if !(h > 0.0) {
        return Err(ValidationError::NonPositiveStepSize.into());
    }
    Ok(backward_difference_quotient(f, x, h))
}

/// Unchecked quotient; callers guarantee `h > 0`.
pub(crate) fn backward_difference_quotient<F>(f: &F, x: f64, h: f64) -> f64
where
    F: RealFunction + ?Sized,
{
    (f.value(x) - f.value(x - h)) / h
}
