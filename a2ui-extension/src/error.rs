#[derive(Debug, thiserror::Error)]
pub enum A2uiError {
    #[error("Invalid client capabilities: {0}")]
    InvalidCapabilities(String),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, A2uiError>;
