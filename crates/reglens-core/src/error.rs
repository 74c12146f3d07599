use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("I/O failure: {0}")]
    Io(#[from] std::io::Error),

    #[error("Embedding failed: {0}")]
    Embedding(String),

    #[error("Chunk id {id} out of range for corpus of {len} chunks")]
    IndexOutOfRange { id: usize, len: usize },

    #[error("Operation failed: {0}")]
    Operation(String),
}

pub type Result<T> = std::result::Result<T, Error>;
