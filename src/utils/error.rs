use thiserror::Error;

#[derive(Error, Debug)]
pub enum ActionError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for input '{name}': '{value}'")]
    InvalidInputError { name: String, value: String },

    #[error("Invalid {field}: '{value}' ({reason})")]
    InvalidKeyError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Heredoc delimiter collision while writing '{name}'")]
    DelimiterError { name: String },
}

pub type Result<T> = std::result::Result<T, ActionError>;
