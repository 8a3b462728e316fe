use thiserror::Error;

#[derive(Error, Debug)]
pub enum ControlError {
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Malformed server response: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type ControlResult<T> = Result<T, ControlError>;
