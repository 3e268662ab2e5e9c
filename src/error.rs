use thiserror::Error;

#[derive(Debug, Error)]
pub enum PumpjackError {
    #[error("No team was found with the given identifier: {identifier:?}")]
    NotFound { identifier: String },

    #[error("Game status unknown: {state:?}")]
    UnknownGameState { state: String },

    #[error("Expected exactly one team argument, got {count}")]
    InvalidArgumentCount { count: usize },

    #[error("Request to {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: ureq::Error,
    },

    #[error("Failed to decode {what}: {source}")]
    Decode {
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to encode output: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, PumpjackError>;
