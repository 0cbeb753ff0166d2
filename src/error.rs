//! Error handling for the ATS scorer

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AtsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Extraction error: {0}")]
    Extraction(#[from] ExtractionError),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Invalid scoring weights: {0}")]
    InvalidWeights(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Processing error: {0}")]
    Processing(String),
}

/// Failures of the document extraction layer. The scoring engine never sees
/// these: a failed extraction means no text reaches it.
#[derive(Error, Debug)]
pub enum ExtractionError {
    #[error("File format not supported: {0}")]
    UnsupportedFormat(String),

    #[error("File has no extension: {0}")]
    MissingExtension(String),

    #[error("File does not exist: {0}")]
    NotFound(String),

    #[error("Corrupt document '{path}': {reason}")]
    Corrupt { path: String, reason: String },

    #[error("Failed to decode '{path}': {reason}")]
    Decode { path: String, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, AtsError>;

/// Convert anyhow errors to our custom error type
impl From<anyhow::Error> for AtsError {
    fn from(err: anyhow::Error) -> Self {
        AtsError::Processing(format!("{:#}", err))
    }
}
