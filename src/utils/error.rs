use thiserror::Error;

/// Error a listener callback may fail with.
pub type ListenerError = Box<dyn std::error::Error + Send + Sync>;

/// Return type of every listener callback.
pub type ListenerResult = std::result::Result<(), ListenerError>;

#[derive(Error, Debug)]
pub enum EmitterError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialization(#[from] serde_json::Error),

    #[error("YAML serialization error: {0}")]
    YamlSerialization(#[from] serde_yaml::Error),

    /// A listener failed during dispatch. The listener's own error is kept as-is.
    #[error(transparent)]
    Listener(ListenerError),
}

pub type Result<T> = std::result::Result<T, EmitterError>;
