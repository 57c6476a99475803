use thiserror::Error;

#[derive(Error, Debug)]
pub enum PatrolError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Invalid command: {0}")]
    InvalidCommand(String),

    #[error("Prompt error: {0}")]
    Prompt(String),

    /// Export could not reach its destination; carries the user notice
    #[error("{0}")]
    Delivery(String),

    #[error("{0}")]
    Document(#[from] patrol_designer_common::Error),

    #[error("JSON error: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0:#}")]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, PatrolError>;
