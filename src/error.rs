use thiserror::Error;

#[derive(Error, Debug)]
pub enum GuidepubError {
    #[error("Manifest error: {0}")]
    Manifest(String),

    #[error("Publish error: {0}")]
    Publish(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialization(#[from] serde_json::Error),

    #[error("Generic error: {0}")]
    Generic(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, GuidepubError>;
