use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

// review
//  ├── id                      number | string
//  ├── type / status
//  ├── rating                  number | null
//  ├── publicReview
//  ├── reviewCategory[]
//  │    ├── category
//  │    └── rating
//  ├── submittedAt             "YYYY-MM-DD HH:MM:SS"
//  ├── guestName
//  ├── listingName
//  ├── listingId
//  ├── channel                 optional
//  └── isApprovedForDisplay    optional
//
// Anything else the provider sends is kept as-is.

pub mod keys {
    pub const ID: &str = "id";
    pub const RATING: &str = "rating";
    pub const REVIEW_CATEGORY: &str = "reviewCategory";
    pub const CHANNEL: &str = "channel";
    pub const IS_APPROVED_FOR_DISPLAY: &str = "isApprovedForDisplay";
    pub const OVERALL_RATING: &str = "overallRating";
    pub const LISTING_ID: &str = "listingId";
    pub const LISTING_NAME: &str = "listingName";
    pub const GUEST_NAME: &str = "guestName";
    pub const PUBLIC_REVIEW: &str = "publicReview";
    pub const SUBMITTED_AT: &str = "submittedAt";
    pub const CATEGORY: &str = "category";
    pub const RESULT: &str = "result";
}

/// A review record exactly as the provider (or the bundled dataset) sent it.
///
/// The schema is not ours, so the record stays an open JSON object and the
/// fields we care about are read through accessors.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawReview {
    fields: Map<String, Value>,
}

impl RawReview {
    pub fn from_fields(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    pub fn into_fields(self) -> Map<String, Value> {
        self.fields
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn id(&self) -> Option<ReviewId> {
        self.get(keys::ID).and_then(ReviewId::from_value)
    }

    /// The provider's own overall score, if it is a number.
    pub fn rating(&self) -> Option<f64> {
        self.get(keys::RATING).and_then(Value::as_f64)
    }

    pub fn categories(&self) -> Vec<ReviewCategory> {
        self.get(keys::REVIEW_CATEGORY)
            .and_then(Value::as_array)
            .map(|items| items.iter().map(ReviewCategory::from_value).collect())
            .unwrap_or_default()
    }

    pub fn channel(&self) -> Option<&str> {
        self.get(keys::CHANNEL).and_then(Value::as_str)
    }

    pub fn is_approved_for_display(&self) -> Option<bool> {
        self.get(keys::IS_APPROVED_FOR_DISPLAY)
            .and_then(Value::as_bool)
    }

    /// Listing ids arrive as numbers, occasionally as numeric strings.
    pub fn listing_id(&self) -> Option<i64> {
        match self.get(keys::LISTING_ID)? {
            Value::Number(n) => n.as_i64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    pub fn str_field(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }
}

impl TryFrom<Value> for RawReview {
    type Error = Value;

    /// Only JSON objects can carry review fields; anything else is handed back.
    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(fields) => Ok(Self::from_fields(fields)),
            other => Err(other),
        }
    }
}

/// One entry of `reviewCategory`, read leniently.
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewCategory {
    pub category: Option<String>,
    pub rating: Option<f64>,
}

impl ReviewCategory {
    fn from_value(value: &Value) -> Self {
        Self {
            category: value
                .get(keys::CATEGORY)
                .and_then(Value::as_str)
                .map(str::to_string),
            rating: value.get(keys::RATING).and_then(Value::as_f64),
        }
    }
}

/// Review ids are numeric upstream but travel through URLs as text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ReviewId(String);

impl ReviewId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Number(n) => Some(Self(n.to_string())),
            Value::String(s) if !s.is_empty() => Some(Self(s.clone())),
            _ => None,
        }
    }
}

impl fmt::Display for ReviewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
