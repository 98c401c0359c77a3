// errors.rs
use crate::reviews::FilterError;
use astra::Response;
use thiserror::Error;

/// Errors a route handler can end in. The review pipeline itself never
/// fails; these come from routing, bad input or response building.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Not Found")]
    NotFound,
    #[error("Bad Request: {0}")]
    BadRequest(String),
    #[error("Serialization Error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Internal Server Error")]
    InternalError,
}

// Type alias commonly used by route handlers.
pub type ResultResp = Result<Response, ServerError>;

impl ServerError {
    pub fn status(&self) -> u16 {
        match self {
            ServerError::NotFound => 404,
            ServerError::BadRequest(_) => 400,
            ServerError::Serialization(_) | ServerError::InternalError => 500,
        }
    }
}

impl From<FilterError> for ServerError {
    fn from(err: FilterError) -> Self {
        ServerError::BadRequest(err.to_string())
    }
}
