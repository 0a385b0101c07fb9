use thiserror::Error;

pub type Result<T> = std::result::Result<T, EngineError>;

#[derive(Error, Debug)]
pub enum EngineError {
    /// A pipeline stage (or the caller's advisory callback) failed. Never
    /// escapes `compress()`: the orchestrator logs it and degrades to the
    /// empty result.
    #[error("stage {stage} failed: {message}")]
    StageFailure {
        stage: &'static str,
        message: String,
    },
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}
