use graphdata_contract::validation::{
    error_codes, resolve_endpoints, ReferenceValidator, Validator,
};
use graphdata_contract::{
    graph_from_value, parse_and_validate_graph, parse_graph_data, to_string, EdgeConfig,
    GraphData, GraphError, GraphFormat, MergeStrategy, NodeConfig, ValidationPolicy,
};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

// Helper to pull error codes out of any GraphError
fn codes(err: &GraphError) -> Vec<&'static str> {
    err.validation_errors().iter().map(|e| e.code).collect()
}

#[test]
fn test_absent_collections_equivalent_to_empty() {
    let absent = parse_graph_data("{}", GraphFormat::Json).unwrap();
    let empty = parse_graph_data(r#"{"nodes": [], "edges": []}"#, GraphFormat::Json).unwrap();
    let yaml_absent = parse_graph_data("nodes: ~\n", GraphFormat::Yaml).unwrap();

    assert_eq!(absent, empty);
    assert_eq!(absent, yaml_absent);
    assert_eq!(absent, GraphData::default());
}

#[test]
fn test_node_requires_id() {
    let err = parse_graph_data(r#"{"nodes": [{"clusterId": "c1"}]}"#, GraphFormat::Json).unwrap_err();
    assert_eq!(codes(&err), vec![error_codes::MISSING_REQUIRED_FIELD]);

    let accepted = parse_graph_data(r#"{"nodes": [{"id": "only"}]}"#, GraphFormat::Json).unwrap();
    assert_eq!(accepted.nodes, vec![NodeConfig::new("only")]);
}

#[test]
fn test_edge_requires_source_and_target() {
    for doc in [
        json!({"edges": [{"target": "b"}]}),
        json!({"edges": [{"source": "a"}]}),
    ] {
        let err = graph_from_value(doc).unwrap_err();
        assert_eq!(codes(&err), vec![error_codes::MISSING_REQUIRED_FIELD]);
    }

    let graph = graph_from_value(json!({"edges": [{"source": "a", "target": "b"}]})).unwrap();
    assert_eq!(graph.edges[0].weight, None);
    assert_eq!(graph.edges[0].weight_or_default(), EdgeConfig::DEFAULT_WEIGHT);
}

#[test]
fn test_unrecognized_fields_survive_round_trip() {
    let input = json!({
        "nodes": [
            {"id": "a", "label": "Alpha", "color": "#1f77b4", "meta": {"rank": 1, "tags": ["root"]}},
            {"id": "b", "clusterId": "c1", "hidden": false}
        ],
        "edges": [
            {"source": "a", "target": "b", "weight": 2.5, "directed": true, "style": null}
        ]
    });

    let graph = graph_from_value(input.clone()).unwrap();

    for format in [GraphFormat::Json, GraphFormat::Yaml] {
        let encoded = to_string(&graph, format, true).unwrap();
        let reparsed = parse_graph_data(&encoded, format).unwrap();
        assert_eq!(reparsed, graph);
    }

    let output: Value = serde_json::to_value(&graph).unwrap();
    assert_eq!(output, input);
}

#[test]
fn test_pass_through_copy_keeps_extras() {
    let graph = graph_from_value(json!({
        "nodes": [{"id": "a", "weight": 10, "x": 1.5}]
    }))
    .unwrap();

    // A consumer that clones and re-wraps the data
    let copied = GraphData::new(graph.nodes.clone(), graph.edges.clone());
    assert_eq!(copied.nodes[0].attribute("weight"), Some(&json!(10)));
    assert_eq!(copied.nodes[0].attribute("x"), Some(&json!(1.5)));
}

#[test]
fn test_example_graph_is_valid_and_resolves() {
    let input = json!({
        "nodes": [{"id": "a"}, {"id": "b", "clusterId": "c1"}],
        "edges": [{"source": "a", "target": "b", "weight": 2.5}]
    });

    let graph = graph_from_value(input.clone()).unwrap();
    let resolutions = resolve_endpoints(&graph);
    assert_eq!(resolutions.len(), 1);
    assert!(resolutions[0].source_found);
    assert!(resolutions[0].target_found);

    let text = input.to_string();
    let validated = parse_and_validate_graph(&text, GraphFormat::Json, &ValidationPolicy::default());
    assert!(validated.is_ok(), "{:?}", validated.err());
}

#[test]
fn test_edges_without_nodes_structurally_valid() {
    let yaml = r#"
edges:
  - source: x
    target: y
"#;
    let graph = parse_graph_data(yaml, GraphFormat::Yaml).unwrap();
    assert!(graph.nodes.is_empty());

    // Referential integrity is only enforced when asked for
    let errors = ReferenceValidator::new().validate(&graph);
    assert_eq!(errors.len(), 2);

    let err = parse_and_validate_graph(yaml, GraphFormat::Yaml, &ValidationPolicy::default()).unwrap_err();
    assert!(codes(&err).iter().all(|c| *c == error_codes::INVALID_REFERENCE));

    let shape_only = ValidationPolicy {
        check_references: false,
        ..ValidationPolicy::default()
    };
    assert!(parse_and_validate_graph(yaml, GraphFormat::Yaml, &shape_only).is_ok());
}

#[test]
fn test_merging_node_descriptions_keeps_every_key() {
    let mut base = NodeConfig::new("a").with_attribute("label", "A").with_attribute("x", 1);
    let update = NodeConfig::new("a")
        .with_cluster("c1")
        .with_attribute("label", "A2")
        .with_attribute("y", 2);

    let mut overwritten = base.clone();
    overwritten.merge_from(update.clone(), MergeStrategy::Overwrite);
    base.merge_from(update, MergeStrategy::KeepExisting);

    for node in [&base, &overwritten] {
        let keys: Vec<&str> = node.extra.keys().collect();
        assert_eq!(keys, vec!["label", "x", "y"]);
        assert_eq!(node.cluster_id.as_deref(), Some("c1"));
    }
    assert_eq!(base.attribute("label"), Some(&json!("A")));
    assert_eq!(overwritten.attribute("label"), Some(&json!("A2")));
}
