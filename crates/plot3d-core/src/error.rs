use thiserror::Error;

#[derive(Debug, Error)]
pub enum GraphError {
    #[error("Invalid resolution: {0} (must be at least 1)")]
    InvalidResolution(usize),

    #[error("Unknown function: {0:?}")]
    UnknownFunction(String),
}

pub type Result<T> = std::result::Result<T, GraphError>;
