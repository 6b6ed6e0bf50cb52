//! ValueMap — the named values bound to a statement.

use std::collections::BTreeMap;
use super::Value;

/// A map of parameter names to values.
///
/// Ordered, so the JSON sent for a statement is stable across calls.
pub type ValueMap = BTreeMap<String, Value>;
