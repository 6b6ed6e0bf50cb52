//! Per-statement graph option overrides.

/// Overrides carried by a single query.
///
/// Every field is independent: `None` inherits the cluster value, `Some`
/// replaces it. There is no way to clear a cluster value from here; mark
/// the statement as a system query to drop the graph name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatementGraphOptions {
    graph_language: Option<String>,
    graph_name: Option<String>,
    graph_source: Option<String>,
    is_system_query: bool,
}

impl StatementGraphOptions {
    /// No overrides, not a system query.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn graph_language(&self) -> Option<&str> {
        self.graph_language.as_deref()
    }

    pub fn graph_name(&self) -> Option<&str> {
        self.graph_name.as_deref()
    }

    pub fn graph_source(&self) -> Option<&str> {
        self.graph_source.as_deref()
    }

    pub fn is_system_query(&self) -> bool {
        self.is_system_query
    }

    pub fn set_graph_language(&mut self, language: impl Into<String>) -> &mut Self {
        self.graph_language = Some(language.into());
        self
    }

    pub fn set_graph_name(&mut self, graph_name: impl Into<String>) -> &mut Self {
        self.graph_name = Some(graph_name.into());
        self
    }

    pub fn set_graph_source(&mut self, source: impl Into<String>) -> &mut Self {
        self.graph_source = Some(source.into());
        self
    }

    /// Mark the statement as a system query: it runs against engine
    /// metadata, so no graph name is ever sent for it.
    pub fn set_system_query(&mut self) -> &mut Self {
        self.is_system_query = true;
        self
    }

    /// Builder form of [`set_graph_language`](Self::set_graph_language).
    pub fn with_graph_language(mut self, language: impl Into<String>) -> Self {
        self.set_graph_language(language);
        self
    }

    pub fn with_graph_name(mut self, graph_name: impl Into<String>) -> Self {
        self.set_graph_name(graph_name);
        self
    }

    pub fn with_graph_source(mut self, source: impl Into<String>) -> Self {
        self.set_graph_source(source);
        self
    }

    pub fn system_query(mut self) -> Self {
        self.set_system_query();
        self
    }
}
