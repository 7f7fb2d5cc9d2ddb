use thiserror::Error;

#[derive(Error, Debug)]
pub enum DqError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("TOML deserialization failed: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Configured field '{0}' not found in input columns")]
    MissingColumn(String),
}

pub type Result<T> = std::result::Result<T, DqError>;
