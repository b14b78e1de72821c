use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ModelError {
    #[error("confidence threshold must be a number between 0 and 1, got {0}")]
    InvalidThreshold(f64),
}

pub type Result<T> = std::result::Result<T, ModelError>;
