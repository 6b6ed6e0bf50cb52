//! # Graph execution options
//!
//! Three levels decide which language, graph and traversal source a query
//! runs against:
//!
//! | Level | Type | Lifetime |
//! |-------|------|----------|
//! | Statement | [`StatementGraphOptions`] | one query |
//! | Cluster | [`ClusterGraphOptions`] | the client session |
//! | System | [`DEFAULT_GRAPH_LANGUAGE`], [`DEFAULT_GRAPH_SOURCE`] | fixed |
//!
//! [`resolve`] merges the first two into an [`EffectiveOptions`]; the
//! system defaults only matter through the cluster options' initial state.

pub mod cluster;
pub mod config;
pub mod effective;
pub mod statement;

pub use cluster::ClusterGraphOptions;
pub use config::GraphOptionsConfig;
pub use effective::{resolve, EffectiveOptions};
pub use statement::StatementGraphOptions;

// ============================================================================
// System defaults
// ============================================================================

/// Traversal language used when nothing else is configured.
pub const DEFAULT_GRAPH_LANGUAGE: &str = "gremlin-groovy";

/// Traversal source used when nothing else is configured.
pub const DEFAULT_GRAPH_SOURCE: &str = "default";
