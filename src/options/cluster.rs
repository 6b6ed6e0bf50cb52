//! Cluster-wide graph options.
//!
//! One instance lives for the whole client session and is shared by every
//! query-issuing caller, while an administrative caller may reconfigure it
//! at any time.
//!
//! ## Consistency
//!
//! Each field sits behind its own lock. A reader never sees a half-written
//! field, but a reader racing a reconfiguration may see the new language
//! next to the old source. Callers that need the three fields to change
//! together must coordinate outside this type.

use std::fmt;

use parking_lot::RwLock;

use super::{resolve, GraphOptionsConfig, DEFAULT_GRAPH_LANGUAGE, DEFAULT_GRAPH_SOURCE};
use crate::payload::{self, Payload};
use crate::statement::{GraphRequest, GraphStatement};
use crate::{Error, Result};

/// Session-wide defaults for graph queries.
///
/// Setters take `&self`, so the options can be shared behind an `Arc`
/// without an outer lock.
pub struct ClusterGraphOptions {
    language: RwLock<String>,
    graph_name: RwLock<Option<String>>,
    source: RwLock<String>,
}

impl ClusterGraphOptions {
    /// Options holding the system defaults and no graph name.
    pub fn new() -> Self {
        Self {
            language: RwLock::new(DEFAULT_GRAPH_LANGUAGE.to_owned()),
            graph_name: RwLock::new(None),
            source: RwLock::new(DEFAULT_GRAPH_SOURCE.to_owned()),
        }
    }

    pub fn from_config(config: &GraphOptionsConfig) -> Self {
        Self::from(config.clone())
    }

    /// Snapshot the current values, field by field.
    pub fn to_config(&self) -> GraphOptionsConfig {
        GraphOptionsConfig {
            graph_language: self.graph_language(),
            graph_name: self.graph_name(),
            graph_source: self.graph_source(),
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn graph_language(&self) -> String {
        self.language.read().clone()
    }

    pub fn graph_name(&self) -> Option<String> {
        self.graph_name.read().clone()
    }

    pub fn graph_source(&self) -> String {
        self.source.read().clone()
    }

    /// Set the default traversal language.
    ///
    /// Fails with [`Error::InvalidArgument`] on `None`; the current value is kept.
    pub fn set_graph_language(&self, language: impl Into<Option<String>>) -> Result<&Self> {
        let language = required(language.into(), "graphLanguage")?;
        tracing::debug!(graph_language = %language, "cluster graph language changed");
        *self.language.write() = language;
        Ok(self)
    }

    /// Set the default graph name. `None` means queries target no graph
    /// unless the statement names one.
    pub fn set_graph_name(&self, graph_name: impl Into<Option<String>>) -> &Self {
        let graph_name = graph_name.into();
        tracing::debug!(graph_name = ?graph_name, "cluster graph name changed");
        *self.graph_name.write() = graph_name;
        self
    }

    /// Set the default traversal source.
    ///
    /// Fails with [`Error::InvalidArgument`] on `None`; the current value is kept.
    pub fn set_graph_source(&self, source: impl Into<Option<String>>) -> Result<&Self> {
        let source = required(source.into(), "graphSource")?;
        tracing::debug!(graph_source = %source, "cluster graph source changed");
        *self.source.write() = source;
        Ok(self)
    }

    // ========================================================================
    // Per-query entry points
    // ========================================================================

    /// Resolve the statement against these defaults and encode the result
    /// as a custom payload.
    pub fn build_payload<S: GraphStatement + ?Sized>(&self, statement: &S) -> Payload {
        let effective = resolve(self, statement.graph_options());
        payload::encode(&effective)
    }

    /// Everything the message layer needs to send `statement`.
    pub fn prepare<S: GraphStatement + ?Sized>(&self, statement: &S) -> Result<GraphRequest> {
        Ok(GraphRequest {
            query: statement.query_string().to_owned(),
            values: statement.values_json()?,
            custom_payload: self.build_payload(statement),
        })
    }
}

fn required(value: Option<String>, field: &str) -> Result<String> {
    value.ok_or_else(|| {
        tracing::debug!(field, "rejected null cluster graph option");
        Error::InvalidArgument(format!("{field} cannot be null"))
    })
}

impl Default for ClusterGraphOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for ClusterGraphOptions {
    fn clone(&self) -> Self {
        Self::from_config(&self.to_config())
    }
}

impl fmt::Debug for ClusterGraphOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClusterGraphOptions")
            .field("graph_language", &*self.language.read())
            .field("graph_name", &*self.graph_name.read())
            .field("graph_source", &*self.source.read())
            .finish()
    }
}

impl From<GraphOptionsConfig> for ClusterGraphOptions {
    fn from(config: GraphOptionsConfig) -> Self {
        Self {
            language: RwLock::new(config.graph_language),
            graph_name: RwLock::new(config.graph_name),
            source: RwLock::new(config.graph_source),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = ClusterGraphOptions::new();
        assert_eq!(options.graph_language(), "gremlin-groovy");
        assert_eq!(options.graph_source(), "default");
        assert_eq!(options.graph_name(), None);
    }

    #[test]
    fn test_null_language_rejected_and_state_kept() {
        let options = ClusterGraphOptions::new();
        options.set_graph_language("language1".to_owned()).unwrap();

        let err = options.set_graph_language(None).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
        assert_eq!(err.to_string(), "graphLanguage cannot be null");
        assert_eq!(options.graph_language(), "language1");
    }

    #[test]
    fn test_null_source_rejected_and_state_kept() {
        let options = ClusterGraphOptions::new();

        let err = options.set_graph_source(None).unwrap_err();
        assert_eq!(err.to_string(), "graphSource cannot be null");
        assert_eq!(options.graph_source(), DEFAULT_GRAPH_SOURCE);
    }

    #[test]
    fn test_graph_name_can_be_cleared() {
        let options = ClusterGraphOptions::new();
        options.set_graph_name("name1".to_owned());
        assert_eq!(options.graph_name().as_deref(), Some("name1"));

        options.set_graph_name(None);
        assert_eq!(options.graph_name(), None);
    }

    #[test]
    fn test_setters_chain() {
        let options = ClusterGraphOptions::new();
        options
            .set_graph_language("language1".to_owned())
            .and_then(|o| o.set_graph_name("name1".to_owned()).set_graph_source("source1".to_owned()))
            .unwrap();

        assert_eq!(
            options.to_config(),
            GraphOptionsConfig {
                graph_language: "language1".into(),
                graph_name: Some("name1".into()),
                graph_source: "source1".into(),
            }
        );
    }

    #[test]
    fn test_config_round_trip() {
        let config = GraphOptionsConfig {
            graph_language: "gremlin-groovy".into(),
            graph_name: Some("social".into()),
            graph_source: "a".into(),
        };
        let options = ClusterGraphOptions::from_config(&config);
        assert_eq!(options.to_config(), config);
        assert_eq!(ClusterGraphOptions::from(config.clone()).to_config(), config);
    }

    #[test]
    fn test_clone_is_detached() {
        let options = ClusterGraphOptions::new();
        let copy = options.clone();
        options.set_graph_name("name1".to_owned());
        assert_eq!(copy.graph_name(), None);
    }
}
