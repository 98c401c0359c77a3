// client.rs
use crate::hostaway::models::{keys, RawReview};
use crate::hostaway::{ReviewSource, SourceError};
use reqwest::blocking::Client;
use reqwest::header::{AUTHORIZATION, CACHE_CONTROL};
use serde_json::Value;
use tracing::{debug, warn};
use url::Url;

pub const DEFAULT_REVIEWS_URL: &str = "https://api.hostaway.com/v1/reviews";

/// Bearer credential, looked up on every request rather than at startup.
pub const API_KEY_VAR: &str = "HOSTAWAY_API_KEY";

const USER_AGENT: &str = concat!("review_desk/", env!("CARGO_PKG_VERSION"));

pub struct HostawayClient {
    client: Client,
    reviews_url: Url,
}

impl HostawayClient {
    pub fn new(reviews_url: Url) -> Result<Self, SourceError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| SourceError::Network(e.to_string()))?;

        Ok(Self {
            client,
            reviews_url,
        })
    }

    pub fn reviews_url(&self) -> &Url {
        &self.reviews_url
    }

    pub fn fetch_raw_reviews(&self) -> Result<Vec<RawReview>, SourceError> {
        // A missing key still goes out; upstream rejects it and we fall back.
        let api_key = std::env::var(API_KEY_VAR).unwrap_or_else(|_| {
            warn!(var = API_KEY_VAR, "provider credential not set");
            String::new()
        });

        let resp = self
            .client
            .get(self.reviews_url.clone())
            .header(AUTHORIZATION, format!("Bearer {api_key}"))
            .header(CACHE_CONTROL, "no-cache")
            .send()
            .map_err(|e| SourceError::Network(e.to_string()))?;

        let status = resp.status();
        let text = resp
            .text()
            .map_err(|e| SourceError::Network(e.to_string()))?;

        if !status.is_success() {
            return Err(SourceError::Status {
                status: status.as_u16(),
                body: truncate(&text, 200),
            });
        }

        debug!(bytes = text.len(), "received reviews body");
        parse_reviews_body(&text)
    }
}

impl ReviewSource for HostawayClient {
    fn fetch(&self) -> Result<Vec<RawReview>, SourceError> {
        self.fetch_raw_reviews()
    }
}

/// Pull the `result` array out of a reviews response body.
///
/// An absent or `null` result is an empty list, not an error.
pub fn parse_reviews_body(text: &str) -> Result<Vec<RawReview>, SourceError> {
    let data: Value =
        serde_json::from_str(text).map_err(|e| SourceError::JsonParse(e.to_string()))?;

    let entries = match data.get(keys::RESULT) {
        None | Some(Value::Null) => return Ok(Vec::new()),
        Some(Value::Array(entries)) => entries,
        Some(other) => {
            return Err(SourceError::UnexpectedShape(format!(
                "result is {}",
                json_type(other)
            )))
        }
    };

    let reviews = entries
        .iter()
        .enumerate()
        .filter_map(|(index, entry)| match RawReview::try_from(entry.clone()) {
            Ok(review) => Some(review),
            Err(other) => {
                warn!(index, kind = json_type(&other), "skipping non-object review entry");
                None
            }
        })
        .collect();

    Ok(reviews)
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn truncate(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}
