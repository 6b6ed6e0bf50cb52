//! Serializable configuration for cluster-wide graph options.

use serde::{Deserialize, Serialize};

use super::{DEFAULT_GRAPH_LANGUAGE, DEFAULT_GRAPH_SOURCE};
use crate::Result;

/// Plain-data form of [`ClusterGraphOptions`](super::ClusterGraphOptions).
///
/// Missing fields fall back to the system defaults, so `{}` is a valid
/// configuration document.
///
/// ```
/// use dse_graph::options::GraphOptionsConfig;
///
/// let config = GraphOptionsConfig::from_json_str(r#"{"graph-name": "social"}"#).unwrap();
/// assert_eq!(config.graph_language, "gremlin-groovy");
/// assert_eq!(config.graph_name.as_deref(), Some("social"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct GraphOptionsConfig {
    #[serde(default = "default_graph_language")]
    pub graph_language: String,
    #[serde(default)]
    pub graph_name: Option<String>,
    #[serde(default = "default_graph_source")]
    pub graph_source: String,
}

fn default_graph_language() -> String {
    DEFAULT_GRAPH_LANGUAGE.to_owned()
}

fn default_graph_source() -> String {
    DEFAULT_GRAPH_SOURCE.to_owned()
}

impl Default for GraphOptionsConfig {
    fn default() -> Self {
        Self {
            graph_language: default_graph_language(),
            graph_name: None,
            graph_source: default_graph_source(),
        }
    }
}

impl GraphOptionsConfig {
    /// Parse a JSON configuration document.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
