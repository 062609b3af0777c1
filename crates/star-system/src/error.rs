use thiserror::Error;

/// Errors that can occur while configuring or starting a generation
#[derive(Error, Debug)]
pub enum SystemError {
    #[error("invalid generator config: {0}")]
    InvalidConfig(String),

    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid system id: {0}")]
    InvalidUuid(#[from] uuid::Error),
}
