//! # dse-graph — Graph Execution Options
//!
//! Decides which traversal language, graph and traversal source each
//! outgoing graph query runs with, and encodes that decision into the
//! request's custom payload.
//!
//! ## Design Principles
//!
//! 1. **Three levels**: statement overrides > cluster defaults > system defaults
//! 2. **System queries target no graph**: the graph name is dropped after precedence
//! 3. **Pure per-query path**: `resolve` and `encode` are free functions, no I/O
//! 4. **Field-level locking**: cluster defaults are shared and reconfigurable through `&self`
//!
//! ## Quick Start
//!
//! ```rust
//! use dse_graph::{ClusterGraphOptions, SimpleGraphStatement};
//!
//! # fn example() -> dse_graph::Result<()> {
//! let cluster = ClusterGraphOptions::new();
//! cluster.set_graph_name("social".to_owned());
//!
//! let statement = SimpleGraphStatement::new("g.V().count()");
//! let payload = cluster.build_payload(&statement);
//!
//! assert_eq!(&payload["graph-language"][..], b"gremlin-groovy");
//! assert_eq!(&payload["graph-name"][..], b"social");
//! assert_eq!(&payload["graph-source"][..], b"default");
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

// ============================================================================
// Modules
// ============================================================================

pub mod model;
pub mod options;
pub mod payload;
pub mod statement;

// ============================================================================
// Re-exports
// ============================================================================

pub use model::{Value, ValueMap};

pub use options::{
    resolve, ClusterGraphOptions, EffectiveOptions, GraphOptionsConfig,
    StatementGraphOptions, DEFAULT_GRAPH_LANGUAGE, DEFAULT_GRAPH_SOURCE,
};

pub use payload::{
    encode, Payload, GRAPH_LANGUAGE_KEY, GRAPH_NAME_KEY, GRAPH_SOURCE_KEY,
};

pub use statement::{GraphRequest, GraphStatement, SimpleGraphStatement};

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A required option was given no value. The message names the field.
    #[error("{0}")]
    InvalidArgument(String),

    #[error("Invalid payload: {0}")]
    InvalidPayload(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
