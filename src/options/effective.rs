//! Option resolution: statement > cluster > system default.

use super::{ClusterGraphOptions, StatementGraphOptions};

/// The options a single query actually runs with.
///
/// Computed per query and never cached: cluster defaults may change
/// between two queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EffectiveOptions {
    pub language: String,
    pub graph_name: Option<String>,
    pub source: String,
}

/// Merge statement overrides over cluster defaults.
///
/// Each field takes the statement's value when it has one, the cluster's
/// otherwise. A system query then has its graph name dropped, whatever
/// either level said.
pub fn resolve(cluster: &ClusterGraphOptions, statement: &StatementGraphOptions) -> EffectiveOptions {
    let mut effective = EffectiveOptions {
        language: statement
            .graph_language()
            .map_or_else(|| cluster.graph_language(), str::to_owned),
        graph_name: statement
            .graph_name()
            .map(str::to_owned)
            .or_else(|| cluster.graph_name()),
        source: statement
            .graph_source()
            .map_or_else(|| cluster.graph_source(), str::to_owned),
    };

    if statement.is_system_query() {
        effective.graph_name = None;
    }

    tracing::trace!(
        language = %effective.language,
        graph_name = ?effective.graph_name,
        source = %effective.source,
        system_query = statement.is_system_query(),
        "resolved graph options"
    );
    effective
}
