//! The request handed to the message-sending layer.

use crate::payload::{self, Payload};
use crate::Result;

/// A prepared graph query: script, bound values, and the custom payload
/// carrying the resolved graph options.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphRequest {
    pub query: String,
    /// JSON object of bound values, `None` when the statement has none.
    pub values: Option<String>,
    pub custom_payload: Payload,
}

impl GraphRequest {
    /// Read one payload entry back as text.
    pub fn payload_str(&self, key: &str) -> Result<Option<String>> {
        self.custom_payload.get(key).map(payload::as_string).transpose()
    }
}
