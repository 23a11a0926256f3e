use thiserror::Error;
use uuid::Uuid;

pub type BuilderResult<T> = Result<T, BuilderError>;

#[derive(Error, Debug)]
pub enum BuilderError {
    #[error("Campaign not found: {0}")]
    CampaignNotFound(Uuid),

    #[error("Wizard session not found: {0}")]
    SessionNotFound(Uuid),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}
