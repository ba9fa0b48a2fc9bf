use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum ArbiterError {
    #[error("invalid ui name: {0:?}")]
    InvalidName(String),
}

#[derive(Debug, thiserror::Error)]
pub enum GlintError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Arbiter(#[from] ArbiterError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("ui context is not initialized")]
    NotInitialized,

    #[error("ui context is already initialized")]
    AlreadyInitialized,

    #[error("{0}")]
    Other(String),
}
