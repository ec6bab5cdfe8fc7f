#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("storage error: {0}")]
    Storage(String),
    #[error("draw call failed: {0}")]
    Surface(String),
    #[error("grid snapshot unavailable: {0}")]
    Snapshot(String),
    #[error("invalid config: {0}")]
    Config(String),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
