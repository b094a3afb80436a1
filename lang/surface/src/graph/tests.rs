use super::{err::GraphError, parse::parse_str, syntax::NodeId};
use pretty_assertions::assert_eq;
use skein_syntax::Print;

fn render(src: &str, id: u64) -> String {
    let graph = parse_str::<Print>(src).unwrap();
    graph.table.get(NodeId(id)).unwrap().render()
}

#[test]
fn module_chains_statements() {
    let src = r#"[
        { "id": 0, "attrs": { "type": "module" },
          "edges": [ { "sink": 1, "attrs": {} }, { "sink": 2, "attrs": {} } ] },
        { "id": 1, "attrs": { "type": "string", "text": "hi" }, "edges": [] },
        { "id": 2, "attrs": { "type": "identifier", "text": "x" }, "edges": [] }
    ]"#;
    let graph = parse_str::<Print>(src).unwrap();
    assert_eq!(
        graph.root.unwrap().render(),
        "(let %0 = (hi) in (let %1 = get x in (noop)))"
    );
}

#[test]
fn node_order_is_irrelevant() {
    let scrambled = r#"[
        { "id": 2, "attrs": { "type": "identifier", "text": "x" }, "edges": [] },
        { "id": 1, "attrs": { "type": "string", "text": "hi" }, "edges": [] },
        { "id": 0, "attrs": { "type": "module" },
          "edges": [ { "sink": 1, "attrs": {} }, { "sink": 2, "attrs": {} } ] }
    ]"#;
    let graph = parse_str::<Print>(scrambled).unwrap();
    assert_eq!(
        graph.root.unwrap().render(),
        "(let %0 = (hi) in (let %1 = get x in (noop)))"
    );
}

#[test]
fn block_sequences_left_to_right() {
    let src = r#"[
        { "id": 9, "attrs": { "type": "block" },
          "edges": [ { "sink": 1, "attrs": {} }, { "sink": 2, "attrs": {} },
                     { "sink": 3, "attrs": {} } ] },
        { "id": 1, "attrs": { "type": "string", "text": "a" }, "edges": [] },
        { "id": 2, "attrs": { "type": "string", "text": "b" }, "edges": [] },
        { "id": 3, "attrs": { "type": "string", "text": "c" }, "edges": [] }
    ]"#;
    assert_eq!(
        render(src, 9),
        "(let %0 = (a) in (let %1 = (b) in (let %2 = (c) in (noop))))"
    );
}

#[test]
fn iff_roles_match_by_sink_type() {
    let src = r#"[
        { "id": 10, "attrs": { "type": "if" },
          "edges": [ { "sink": 3, "attrs": { "type": "alternative" } },
                     { "sink": 1, "attrs": { "type": "condition" } },
                     { "sink": 2, "attrs": { "type": "consequence" } } ] },
        { "id": 1, "attrs": { "type": "identifier", "text": "c" }, "edges": [] },
        { "id": 2, "attrs": { "type": "true" }, "edges": [] },
        { "id": 3, "attrs": { "type": "false" }, "edges": [] }
    ]"#;
    assert_eq!(render(src, 10), "(iff get c then (true) else (false))");
}

#[test]
fn iff_fallback_is_all_or_nothing() {
    // no alternative role anywhere: the whole node degrades, not one branch
    let src = r#"[
        { "id": 10, "attrs": { "type": "if" },
          "edges": [ { "sink": 1, "attrs": { "type": "condition" } },
                     { "sink": 2, "attrs": { "type": "consequence" } } ] },
        { "id": 1, "attrs": { "type": "true" }, "edges": [] },
        { "id": 2, "attrs": { "type": "false" }, "edges": [] }
    ]"#;
    assert_eq!(render(src, 10), "(noop)");
}

#[test]
fn throw_takes_first_edge() {
    let src = r#"[
        { "id": 5, "attrs": { "type": "throw" },
          "edges": [ { "sink": 1, "attrs": {} }, { "sink": 2, "attrs": {} } ] },
        { "id": 1, "attrs": { "type": "string", "text": "boom" }, "edges": [] },
        { "id": 2, "attrs": { "type": "true" }, "edges": [] }
    ]"#;
    assert_eq!(render(src, 5), "(throw (boom))");
}

#[test]
fn import_sorts_components_by_index() {
    // components live on the sink nodes; indices arrive scrambled
    let src = r#"[
        { "id": 7, "attrs": { "type": "import" },
          "edges": [ { "sink": 1, "attrs": {} }, { "sink": 2, "attrs": {} },
                     { "sink": 3, "attrs": {} } ] },
        { "id": 1, "attrs": { "type": "identifier", "text": "c", "index": 2 }, "edges": [] },
        { "id": 2, "attrs": { "type": "identifier", "text": "a", "index": 0 }, "edges": [] },
        { "id": 3, "attrs": { "type": "identifier", "text": "b", "index": 1 }, "edges": [] }
    ]"#;
    assert_eq!(render(src, 7), "a.b.c");
}

#[test]
fn import_reads_edge_attrs_first() {
    let src = r#"[
        { "id": 7, "attrs": { "type": "import" },
          "edges": [ { "sink": 1, "attrs": { "text": "y", "index": 1 } },
                     { "sink": 1, "attrs": { "text": "x", "index": 0 } } ] },
        { "id": 1, "attrs": { "type": "true" }, "edges": [] }
    ]"#;
    assert_eq!(render(src, 7), "x.y");
}

#[test]
fn cyclic_graph_resolves_without_evaluation() {
    let src = r#"[
        { "id": 1, "attrs": { "type": "throw" },
          "edges": [ { "sink": 1, "attrs": {} } ] }
    ]"#;
    let graph = parse_str::<Print>(src).unwrap();
    assert_eq!(graph.table.len(), 1);
    assert!(graph.root.is_none());
}

#[test]
fn unknown_type_is_rejected_by_name() {
    let src = r#"[ { "id": 1, "attrs": { "type": "weird" }, "edges": [] } ]"#;
    let err = parse_str::<Print>(src).unwrap_err();
    assert!(matches!(err, GraphError::UnknownType { .. }));
    assert!(err.to_string().contains("weird"));
}

#[test]
fn rootless_graph_parses_without_root() {
    let src = r#"[ { "id": 1, "attrs": { "type": "true" }, "edges": [] } ]"#;
    let graph = parse_str::<Print>(src).unwrap();
    assert!(graph.root.is_none());
    assert_eq!(graph.table.len(), 1);

    let empty = parse_str::<Print>("[]").unwrap();
    assert!(empty.root.is_none());
    assert!(empty.table.is_empty());
}

#[test]
fn structural_failures_are_tagged() {
    let dangling = r#"[
        { "id": 1, "attrs": { "type": "throw" },
          "edges": [ { "sink": 99, "attrs": {} } ] }
    ]"#;
    assert!(matches!(
        parse_str::<Print>(dangling).unwrap_err(),
        GraphError::DanglingEdge { sink: NodeId(99), .. }
    ));

    let headless = r#"[ { "id": 1, "attrs": { "type": "throw" }, "edges": [] } ]"#;
    assert!(matches!(
        parse_str::<Print>(headless).unwrap_err(),
        GraphError::MissingEdge { .. }
    ));

    let empty_import = r#"[ { "id": 1, "attrs": { "type": "import" }, "edges": [] } ]"#;
    assert!(matches!(
        parse_str::<Print>(empty_import).unwrap_err(),
        GraphError::EmptyImport { id: NodeId(1) }
    ));

    let duplicated = r#"[
        { "id": 1, "attrs": { "type": "true" }, "edges": [] },
        { "id": 1, "attrs": { "type": "false" }, "edges": [] }
    ]"#;
    assert!(matches!(
        parse_str::<Print>(duplicated).unwrap_err(),
        GraphError::DuplicateNode(NodeId(1))
    ));

    let untyped = r#"[ { "id": 1, "attrs": { "text": "x" }, "edges": [] } ]"#;
    assert!(matches!(
        parse_str::<Print>(untyped).unwrap_err(),
        GraphError::MissingType { id: NodeId(1) }
    ));

    assert!(parse_str::<Print>("{ \"not\": \"an array\" }").is_err());
}
