//! # Bound-value model
//!
//! The values a graph statement carries alongside its query string.
//! This module is pure data — no I/O, no state.

pub mod value;
pub mod value_map;

pub use value::Value;
pub use value_map::ValueMap;
