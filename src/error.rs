use thiserror::Error;

#[derive(Error, Debug)]
pub enum ColumnarError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid shape: {0}. Expected ROWSxCOLS, e.g. 2x3")]
    InvalidShape(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Input is not valid UTF-8: {0}")]
    InvalidUtf8(String),
}

pub type Result<T> = std::result::Result<T, ColumnarError>;
