//! # Custom payload encoding
//!
//! Graph options reach the server as entries of the request's custom
//! payload: a map from key to raw bytes that the core transport treats as
//! opaque. The server's graph extension matches on the exact key names
//! below.
//!
//! | Key | Value | Present |
//! |-----|-------|---------|
//! | `graph-language` | traversal language | always |
//! | `graph-name` | target graph | only when a graph is resolved |
//! | `graph-source` | traversal source | always |
//!
//! Values are the UTF-8 bytes of the string with no length prefix or
//! terminator; framing belongs to the transport.

use std::collections::HashMap;

use bytes::Bytes;

use crate::options::EffectiveOptions;
use crate::{Error, Result};

pub const GRAPH_LANGUAGE_KEY: &str = "graph-language";
pub const GRAPH_NAME_KEY: &str = "graph-name";
pub const GRAPH_SOURCE_KEY: &str = "graph-source";

/// Custom payload attached to an outgoing query request.
pub type Payload = HashMap<String, Bytes>;

/// Encode resolved options as a custom payload.
pub fn encode(effective: &EffectiveOptions) -> Payload {
    let mut payload = Payload::with_capacity(3);
    payload.insert(GRAPH_LANGUAGE_KEY.to_owned(), as_bytes(&effective.language));
    if let Some(graph_name) = &effective.graph_name {
        payload.insert(GRAPH_NAME_KEY.to_owned(), as_bytes(graph_name));
    }
    payload.insert(GRAPH_SOURCE_KEY.to_owned(), as_bytes(&effective.source));

    tracing::trace!(keys = payload.len(), "encoded graph options payload");
    payload
}

/// Payload value for a string.
#[inline]
pub fn as_bytes(value: &str) -> Bytes {
    Bytes::copy_from_slice(value.as_bytes())
}

/// Read a payload value back as a string.
pub fn as_string(value: &Bytes) -> Result<String> {
    std::str::from_utf8(value)
        .map(str::to_owned)
        .map_err(|e| Error::InvalidPayload(format!("value is not UTF-8: {e}")))
}
