use crate::math::numericalerror::{
    NumericalError, 
    ValidationError
};
use crate::math::realfunction::RealFunction;

// ─────────────────────────────────────────────────────────────────────────────
// Composite trapezoid rule
// ─────────────────────────────────────────────────────────────────────────────
//
//   step = (r - l) / n
//   ∫_l^r f ≈ step * ( f(l)/2 + Σ_{i=1}^{n-1} f(l + i*step) + f(r)/2 )
//
// 誤差為 O(step²)：n 加倍，誤差約為原本的四分之一。
// 不調整區間方向：l > r 時 step < 0，結果即為反向積分的負值。

/// Approximates `∫_l^r f(x) dx` with `n` equal-width trapezoids.
///
/// `n == 0` returns [`ValidationError::ZeroSubdivisions`] without evaluating
/// `f`. Otherwise `f` is evaluated exactly `n + 1` times.
pub fn trapezoid<F>(f: &F, l: f64, r: f64, n: usize) -> Result<f64, NumericalError>
where
    F: RealFunction + ?Sized,
{
    if n == 0 {
        return Err(ValidationError::ZeroSubdivisions.into());
    }
    Ok(composite_trapezoid(f, l, r, n))
}

/// Unchecked sum; callers guarantee `n > 0`.
pub(crate) fn composite_trapezoid<F>(f: &F, l: f64, r: f64, n: usize) -> f64
where
    F: RealFunction + ?Sized,
{
    let step = (r - l) / n as f64;
    let interior: f64 = (1..n)
        .map(|i| f.value(l + i as f64 * step))
        .sum();
    step * (0.5 * (f.value(l) + f.value(r)) + interior)
}
