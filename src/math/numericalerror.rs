use thiserror::Error;

/// Precondition violations on the scalar parameters of a numerical routine.
///
/// Raised before any evaluation of the caller's function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("step size must be greater than 0")]
    NonPositiveStepSize,

    #[error("number of subdivisions cannot be 0")]
    ZeroSubdivisions,
}

/// Errors returned by the differentiation and integration routines.
///
/// Non-finite values produced by the caller's function are not errors; they
/// propagate through the result as ordinary floating-point values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NumericalError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
}
