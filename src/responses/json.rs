// responses/json.rs
use crate::errors::ServerError;
use crate::responses::ResultResp;
use astra::{Body, ResponseBuilder};
use serde::Serialize;

/// Serialize `value` as the JSON body of a 200 response.
pub fn json_response<T: Serialize>(value: &T) -> ResultResp {
    let body = serde_json::to_vec(value)?;

    ResponseBuilder::new()
        .status(200)
        .header("Content-Type", mime::APPLICATION_JSON.as_ref())
        .header("Cache-Control", "no-store")
        .body(Body::from(body))
        .map_err(|_| ServerError::InternalError)
}
