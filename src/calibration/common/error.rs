use thiserror::Error;

#[derive(Error, Debug)]
pub enum CalibrationError {
    #[error("Invalid frame: {0}")]
    InvalidFrame(String),

    #[error("Division by zero: sum of {0} channel is zero")]
    DivisionByZero(&'static str),

    #[error("Invalid matrix: expected {expected} elements, got {actual}")]
    InvalidMatrix { expected: usize, actual: usize },

    #[error("Failed to decode raw image: {0}")]
    DecodeError(String),

    #[error("Failed to read input file: {0}")]
    InputReadError(String),
}

pub type Result<T> = std::result::Result<T, CalibrationError>;
