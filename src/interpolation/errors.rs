use thiserror::Error;

#[derive(Debug, Error)]
pub enum InterpolationError {
    #[error("unequal length: x has {x_len} elements, y has {y_len}")]
    UnequalLength { x_len: usize, y_len: usize },

    #[error("non-finite value in `{name}` at index {idx}")]
    NonFiniteVec { name: &'static str, idx: usize },

    #[error("empty input vector(s)")]
    EmptyInput,

    #[error("insufficient points: got {got}, need at least {need}")]
    InsufficientPoints { got: usize, need: usize },

    #[error("duplicate x-values detected: {x1} and {x2}")]
    DuplicateX { x1: f64, x2: f64 },

    #[error("x-values must be strictly increasing")]
    NonIncreasingX,

    #[error("invalid x_tol {got} must be finite and > 0")]
    InvalidXTol { got: f64 },

    #[error("data is not periodic: first value {first} != last value {last}")]
    NonPeriodic { first: f64, last: f64 },

    #[error("interpolant evaluated before a successful fit")]
    NotFitted,

    #[error("invalid derivative order {got}, expected 0..=3")]
    InvalidDerivativeOrder { got: u8 },

    #[error("invalid kernel shape {got} must be finite and > 0")]
    InvalidShape { got: f64 },

    #[error("linear solve failed: {0}")]
    Solver(&'static str),
}
