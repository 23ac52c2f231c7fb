use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("not found: {0}")]
    NotFound(String),
    #[error("invalid input: {0}")]
    Invalid(String),
    #[error("invalid index: {0}")]
    InvalidIndex(String),
    #[error("invalid range: {0}")]
    InvalidRange(String),
    #[error("storage error: {0}")]
    Storage(String),
}
