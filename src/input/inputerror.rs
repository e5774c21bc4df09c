use thiserror::Error;

use crate::math::quadrature::quadratureerror::QuadratureError;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid input: expected {expected}, found '{token}'")]
    InvalidToken { expected: &'static str, token: String },

    #[error("invalid input: expected {expected} {count} values, stream ended after {read}")]
    UnexpectedEnd {
        expected: &'static str,
        count: usize,
        read: usize,
    },

    #[error("invalid input: {0}")]
    Quadrature(#[from] QuadratureError),
}

impl InputError {
    pub fn invalid_token(expected: &'static str, token: &str) -> InputError {
        InputError::InvalidToken { expected, token: token.to_owned() }
    }
}
