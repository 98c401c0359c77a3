use thiserror::Error;

/// Why the upstream review fetch did not produce data.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Upstream returned HTTP {status}: {body}")]
    Status { status: u16, body: String },
    #[error("JSON parse error: {0}")]
    JsonParse(String),
    #[error("Unexpected data shape: {0}")]
    UnexpectedShape(String),
}

impl SourceError {
    /// Short label used as a structured log field.
    pub fn kind(&self) -> &'static str {
        match self {
            SourceError::Network(_) => "network",
            SourceError::Status { .. } => "status",
            SourceError::JsonParse(_) => "json_parse",
            SourceError::UnexpectedShape(_) => "unexpected_shape",
        }
    }
}
