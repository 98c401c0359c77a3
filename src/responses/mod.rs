pub mod assets;
pub mod errors;
pub mod html;
pub mod json;

pub use assets::stylesheet;
pub use errors::error_to_response;
pub use html::{html_response, see_other};
pub use json::json_response;

pub use crate::errors::ResultResp;
