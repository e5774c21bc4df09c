use thiserror::Error;

/// Newton-Cotes 公式支援的最高階數；更高階會出現負權重
pub const MAX_NEWTON_COTES_DEGREE: usize = 8;

pub type QuadratureResult<T> = Result<T, QuadratureError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum QuadratureError {
    #[error("abscissas and function values differ in length ({abscissas} vs {values})")]
    LengthMismatch { abscissas: usize, values: usize },

    #[error("at least 2 sample points are required, got {0}")]
    InsufficientPoints(usize),

    #[error("The {rule} method requires the number of subintervals to be a multiple of {multiple} (got {subintervals}).")]
    SubintervalCount {
        rule: &'static str,
        multiple: usize,
        subintervals: usize,
    },

    #[error("Newton-Cotes degree {degree} is not supported (expected 1..={max})")]
    UnsupportedDegree { degree: usize, max: usize },

    #[error("Newton-Cotes weight system of degree {0} is singular")]
    SingularWeightSystem(usize),
}

impl QuadratureError {
    pub fn subinterval_count(rule: &'static str, multiple: usize, subintervals: usize) -> QuadratureError {
        QuadratureError::SubintervalCount { rule, multiple, subintervals }
    }

    pub fn unsupported_degree(degree: usize) -> QuadratureError {
        QuadratureError::UnsupportedDegree { degree, max: MAX_NEWTON_COTES_DEGREE }
    }
}
