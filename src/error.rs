//! Error types for the LLM Council

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CouncilError {
    #[error("Environment file error: {0}")]
    EnvFile(#[from] dotenvy::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Conversation not found: {0}")]
    ConversationNotFound(String),
}

pub type Result<T> = std::result::Result<T, CouncilError>;
