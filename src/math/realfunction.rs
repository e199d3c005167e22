/// A function from a real number to a real number.
///
/// Closures and plain `fn` items implement it through the blanket impl, so
/// `backward(&|x: f64| x.sin(), 1.0, 0.01)` works without a wrapper type.
pub trait RealFunction {
    fn value(&self, x: f64) -> f64;
}

impl<F> RealFunction for F
where
    F: Fn(f64) -> f64,
{
    fn value(&self, x: f64) -> f64 {
        self(x)
    }
}
