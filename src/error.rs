use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScoreError {
    #[error("URL file not found: {0}")]
    InputNotFound(String),

    #[error("no URLs found in file: {0}")]
    EmptyInput(String),

    #[error("URL file is not ASCII text: {0}")]
    InputDecode(String),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("metric weights must sum to 1.0 (found {0})")]
    InvalidWeights(f64),

    #[error("mode `{0}` is handled by the project tooling, not the scoring core")]
    UnsupportedMode(String),

    #[error("registry client error: {0}")]
    Registry(String),

    #[error("score out of range for {0}: {1}")]
    ScoreOutOfRange(&'static str, f64),

    #[error("operation cancelled by user")]
    Interrupted,

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ScoreError>;
