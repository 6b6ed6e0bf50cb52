//! Property tests for option resolution and payload encoding.

use std::collections::HashSet;

use dse_graph::{
    encode, resolve, ClusterGraphOptions, EffectiveOptions, StatementGraphOptions,
    GRAPH_LANGUAGE_KEY, GRAPH_NAME_KEY, GRAPH_SOURCE_KEY,
};
use proptest::prelude::*;

fn cluster_strategy() -> impl Strategy<Value = ClusterGraphOptions> {
    (".*", proptest::option::of(".*"), ".*").prop_map(|(language, name, source)| {
        let cluster = ClusterGraphOptions::new();
        cluster.set_graph_language(language).unwrap();
        cluster.set_graph_name(name);
        cluster.set_graph_source(source).unwrap();
        cluster
    })
}

fn statement_strategy() -> impl Strategy<Value = StatementGraphOptions> {
    (
        proptest::option::of(".*"),
        proptest::option::of(".*"),
        proptest::option::of(".*"),
        any::<bool>(),
    )
        .prop_map(|(language, name, source, system)| {
            let mut statement = StatementGraphOptions::new();
            if let Some(language) = language {
                statement.set_graph_language(language);
            }
            if let Some(name) = name {
                statement.set_graph_name(name);
            }
            if let Some(source) = source {
                statement.set_graph_source(source);
            }
            if system {
                statement.set_system_query();
            }
            statement
        })
}

proptest! {
    #[test]
    fn empty_statement_inherits_cluster(cluster in cluster_strategy()) {
        let effective = resolve(&cluster, &StatementGraphOptions::new());
        prop_assert_eq!(effective, EffectiveOptions {
            language: cluster.graph_language(),
            graph_name: cluster.graph_name(),
            source: cluster.graph_source(),
        });
    }

    #[test]
    fn full_statement_overrides_cluster(
        cluster in cluster_strategy(),
        language in ".*",
        name in ".*",
        source in ".*",
    ) {
        let statement = StatementGraphOptions::new()
            .with_graph_language(language.clone())
            .with_graph_name(name.clone())
            .with_graph_source(source.clone());

        let effective = resolve(&cluster, &statement);
        prop_assert_eq!(effective, EffectiveOptions {
            language,
            graph_name: Some(name),
            source,
        });
    }

    #[test]
    fn system_query_never_has_graph_name(
        cluster in cluster_strategy(),
        statement in statement_strategy(),
    ) {
        let statement = statement.system_query();
        prop_assert_eq!(resolve(&cluster, &statement).graph_name, None);
    }

    #[test]
    fn payload_keys_follow_graph_name(
        cluster in cluster_strategy(),
        statement in statement_strategy(),
    ) {
        let effective = resolve(&cluster, &statement);
        let payload = encode(&effective);

        let keys: HashSet<&str> = payload.keys().map(String::as_str).collect();
        let mut expected: HashSet<&str> = [GRAPH_LANGUAGE_KEY, GRAPH_SOURCE_KEY].into_iter().collect();
        if effective.graph_name.is_some() {
            expected.insert(GRAPH_NAME_KEY);
        }
        prop_assert_eq!(keys, expected);
    }

    #[test]
    fn payload_values_are_field_bytes(
        cluster in cluster_strategy(),
        statement in statement_strategy(),
    ) {
        let effective = resolve(&cluster, &statement);
        let payload = encode(&effective);

        prop_assert_eq!(&payload[GRAPH_LANGUAGE_KEY][..], effective.language.as_bytes());
        prop_assert_eq!(&payload[GRAPH_SOURCE_KEY][..], effective.source.as_bytes());
        if let Some(name) = &effective.graph_name {
            prop_assert_eq!(&payload[GRAPH_NAME_KEY][..], name.as_bytes());
        }
    }

    #[test]
    fn resolve_leaves_inputs_untouched(
        cluster in cluster_strategy(),
        statement in statement_strategy(),
    ) {
        let cluster_before = cluster.to_config();
        let statement_before = statement.clone();

        let _ = resolve(&cluster, &statement);

        prop_assert_eq!(cluster.to_config(), cluster_before);
        prop_assert_eq!(statement, statement_before);
    }
}
