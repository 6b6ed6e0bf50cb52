//! Graph statements — a query plus the options that override the session's.

pub mod request;

use crate::model::{Value, ValueMap};
use crate::options::StatementGraphOptions;
use crate::Result;

pub use request::GraphRequest;

/// Anything that can be sent as a graph query.
pub trait GraphStatement {
    /// The traversal script.
    fn query_string(&self) -> &str;

    /// Per-statement overrides of the cluster graph options.
    fn graph_options(&self) -> &StatementGraphOptions;

    /// Bound values as one JSON object, or `None` when there are none.
    fn values_json(&self) -> Result<Option<String>> {
        Ok(None)
    }
}

/// A graph query given as a script string with named values.
///
/// ```
/// use dse_graph::{ClusterGraphOptions, SimpleGraphStatement};
///
/// let mut statement = SimpleGraphStatement::new("g.V().has('name', name)");
/// statement.set("name", "marko").set_graph_name("social");
///
/// let request = ClusterGraphOptions::new().prepare(&statement).unwrap();
/// assert_eq!(request.values.as_deref(), Some(r#"{"name":"marko"}"#));
/// assert!(request.custom_payload.contains_key("graph-name"));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SimpleGraphStatement {
    query: String,
    values: ValueMap,
    options: StatementGraphOptions,
}

impl SimpleGraphStatement {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            values: ValueMap::new(),
            options: StatementGraphOptions::new(),
        }
    }

    /// Bind a named value. Rebinding a name replaces the previous value.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.values.insert(name.into(), value.into());
        self
    }

    pub fn values(&self) -> &ValueMap {
        &self.values
    }

    pub fn graph_options_mut(&mut self) -> &mut StatementGraphOptions {
        &mut self.options
    }

    pub fn set_graph_language(&mut self, language: impl Into<String>) -> &mut Self {
        self.options.set_graph_language(language);
        self
    }

    pub fn set_graph_name(&mut self, graph_name: impl Into<String>) -> &mut Self {
        self.options.set_graph_name(graph_name);
        self
    }

    pub fn set_graph_source(&mut self, source: impl Into<String>) -> &mut Self {
        self.options.set_graph_source(source);
        self
    }

    pub fn set_system_query(&mut self) -> &mut Self {
        self.options.set_system_query();
        self
    }
}

impl GraphStatement for SimpleGraphStatement {
    fn query_string(&self) -> &str {
        &self.query
    }

    fn graph_options(&self) -> &StatementGraphOptions {
        &self.options
    }

    fn values_json(&self) -> Result<Option<String>> {
        if self.values.is_empty() {
            return Ok(None);
        }
        Ok(Some(serde_json::to_string(&self.values)?))
    }
}
