use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExplorerError {
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter { name: &'static str, reason: String },
    #[error("Database error: {0}")]
    DatabaseError(String),
    #[error("Encoding error: {0}")]
    EncodingError(#[from] bincode::Error),
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<rocksdb::Error> for ExplorerError {
    fn from(err: rocksdb::Error) -> Self {
        ExplorerError::DatabaseError(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ExplorerError>;
