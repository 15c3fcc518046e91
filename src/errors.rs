use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("call history error: {0:#}")]
    Upstream(anyhow::Error),

    #[error("data error in {}: {reason}", .path.display())]
    Data { path: PathBuf, reason: String },

    #[error("not found: {0}")]
    NotFound(String),

    #[error("mail error: {0:#}")]
    Mail(anyhow::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl PipelineError {
    pub fn data(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        PipelineError::Data {
            path: path.into(),
            reason: reason.into(),
        }
    }
}
