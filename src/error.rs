use thiserror::Error;

#[derive(Error, Debug)]
pub enum SkillAssessError {
    #[error("session file not found: {0}")]
    SessionNotFound(String),

    #[error("session parse error: {0}")]
    SessionParse(String),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("invalid scoring weights: {0}")]
    InvalidWeights(String),

    #[error("telemetry error: {0}")]
    Telemetry(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SkillAssessError>;
