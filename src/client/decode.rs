//! Raw responses and endpoint-shaped decoding
//!
//! Every endpoint documents exactly one body shape. Callers pick the
//! [`ResponseShape`] that matches the endpoint and get a [`Decoded`] back;
//! the decoder never guesses.

use serde::de::DeserializeOwned;
use serde_json::Value;

use super::models::{ApiEnvelope, RevueRecord};
use crate::error::ApiError;

/// Status code and body text of a single HTTP exchange
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    /// HTTP status code
    pub status: u16,

    /// Raw body text (may be empty)
    pub body: String,
}

/// Body shape expected from an endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseShape {
    /// `{msg, revueId}` message envelope
    Envelope,
    /// Bare JSON array of revue records
    Records,
    /// Any JSON value, inspected by property
    Element,
}

impl ResponseShape {
    /// Short name used in error messages
    pub fn name(self) -> &'static str {
        match self {
            ResponseShape::Envelope => "envelope",
            ResponseShape::Records => "record list",
            ResponseShape::Element => "JSON",
        }
    }

    /// Whether `value` has the top-level structure this shape requires
    fn accepts(self, value: &Value) -> bool {
        match self {
            ResponseShape::Envelope => value.is_object(),
            ResponseShape::Records => value
                .as_array()
                .is_some_and(|items| items.iter().all(Value::is_object)),
            ResponseShape::Element => true,
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// A decoded body, tagged by the shape it was decoded as
#[derive(Debug, Clone, PartialEq)]
pub enum Decoded {
    Envelope(ApiEnvelope),
    Records(Vec<RevueRecord>),
    Element(Value),
}

impl RawResponse {
    /// Create a raw response
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// True when the body is empty or whitespace only
    pub fn is_blank(&self) -> bool {
        self.body.trim().is_empty()
    }

    /// Decode the body as the given shape
    pub fn decode(&self, shape: ResponseShape) -> Result<Decoded, ApiError> {
        match shape {
            ResponseShape::Envelope => self.parse(shape).map(Decoded::Envelope),
            ResponseShape::Records => self.parse(shape).map(Decoded::Records),
            ResponseShape::Element => self.parse(shape).map(Decoded::Element),
        }
    }

    /// Decode the body as a message envelope
    pub fn envelope(&self) -> Result<ApiEnvelope, ApiError> {
        self.parse(ResponseShape::Envelope)
    }

    /// Decode the body as a list of revue records
    pub fn records(&self) -> Result<Vec<RevueRecord>, ApiError> {
        self.parse(ResponseShape::Records)
    }

    // Top-level kind is checked on the untyped value; derived structs also
    // accept sequences.
    fn parse<T: DeserializeOwned>(&self, shape: ResponseShape) -> Result<T, ApiError> {
        let decode_error = |reason: String| ApiError::Decode {
            shape: shape.name(),
            reason,
        };

        let value: Value =
            serde_json::from_str(&self.body).map_err(|e| decode_error(e.to_string()))?;
        if !shape.accepts(&value) {
            return Err(decode_error(format!(
                "unexpected top-level {}",
                json_kind(&value)
            )));
        }
        serde_json::from_value(value).map_err(|e| decode_error(e.to_string()))
    }
}
