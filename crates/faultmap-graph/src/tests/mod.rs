//! Unit tests for the faultmap-graph crate.

mod support;

mod symbol_tests {
    use insta::assert_snapshot;
    use rstest::rstest;

    use crate::normalise_symbol;

    #[rstest]
    #[case("example.com/api.Get", "example.com/api.Get")]
    #[case("n12:example.com/api.Get", "example.com/api.Get")]
    #[case("(*example.com/api.Handlers).Get", "example.com/api.Handlers.Get")]
    #[case("n6674:(*example.com/api.Handlers).HealthCheck", "example.com/api.Handlers.HealthCheck")]
    #[case("example.com/api.(*Handlers).HealthCheck", "example.com/api.Handlers.HealthCheck")]
    #[case("n3:example.com/api.Get$1", "example.com/api.Get$1")]
    fn strips_decorations(#[case] raw: &str, #[case] expected: &str) {
        let id = normalise_symbol(raw).expect("normalises");
        assert_eq!(id.as_str(), expected);
    }

    #[rstest]
    #[case("example.com/api.Get")]
    #[case("n12:(*example.com/api.Handlers).Get")]
    #[case("n1:")]
    #[case("")]
    fn normalisation_is_idempotent(#[case] raw: &str) {
        let once = normalise_symbol(raw).expect("normalises");
        let twice = normalise_symbol(once.as_str()).expect("normalises again");
        assert_eq!(once, twice);
    }

    #[test]
    fn more_than_one_colon_is_rejected() {
        let error = normalise_symbol("n1:pkg.F:extra").expect_err("ambiguous");
        assert_snapshot!(
            error.to_string(),
            @"ambiguous symbol 'n1:pkg.F:extra': expected at most one ':' separator"
        );
    }
}

mod classify_tests {
    use rstest::rstest;

    use super::support::{ERRORS_DIR, classifier};
    use crate::ErrorSiteClassifier;

    #[test]
    fn pattern_is_directory_plus_constructor_prefix() {
        assert_eq!(classifier().pattern(), format!("{ERRORS_DIR}.New"));
    }

    #[test]
    fn recognises_known_constructor() {
        let callee = format!("n7:{ERRORS_DIR}.NewErrNotFound");
        assert_eq!(classifier().classify(&callee), Some("ErrNotFound"));
    }

    #[rstest]
    #[case::unknown_name("n7:example.com/svc/pkg/errs.NewErrTeapot")]
    #[case::bare_constructor("n7:example.com/svc/pkg/errs.New")]
    #[case::suffix_after_name("n7:example.com/svc/pkg/errs.NewErrNotFound$1")]
    #[case::other_package("n7:example.com/svc/pkg/other.NewErrNotFound")]
    #[case::pattern_at_start("example.com/svc/pkg/errs.NewErrNotFound")]
    fn rejects_non_matching_callees(#[case] callee: &str) {
        assert_eq!(classifier().classify(callee), None);
    }
}

mod edge_tests {
    use rstest::rstest;

    use crate::RawEdge;

    #[rstest]
    #[case::plain("n1:pkg.A\tn2:pkg.B")]
    #[case::callgraph_tool("n1:pkg.A\t--static-14:9-->\tn2:pkg.B")]
    #[case::padded(" n1:pkg.A \t n2:pkg.B ")]
    fn parses_supported_layouts(#[case] line: &str) {
        let edge = RawEdge::parse(line).expect("edge parses");
        assert_eq!(edge.caller(), "n1:pkg.A");
        assert_eq!(edge.callee(), "n2:pkg.B");
    }

    #[rstest]
    #[case::single_field("n1:pkg.A")]
    #[case::arrow_without_callee("n1:pkg.A\t--static-1:1-->")]
    #[case::extra_field("n1:pkg.A\tn2:pkg.B\tn3:pkg.C")]
    fn rejects_other_layouts(#[case] line: &str) {
        assert!(RawEdge::parse(line).is_none());
    }
}

mod provider_tests {
    use std::io::Cursor;

    use crate::{EdgeList, EdgeProvider, EdgeReader, GraphError};

    fn collect(provider: &mut dyn EdgeProvider) -> Result<Vec<(String, String)>, GraphError> {
        let mut seen = Vec::new();
        provider.visit_edges(&mut |caller, callee| {
            seen.push((caller.to_owned(), callee.to_owned()));
        })?;
        Ok(seen)
    }

    #[test]
    fn edge_list_visits_in_insertion_order() {
        let mut edges: EdgeList = [("a", "b"), ("b", "c")].into_iter().collect();
        edges.push("c", "a");
        assert_eq!(edges.len(), 3);

        let seen = collect(&mut edges).expect("in-memory edges never fail");
        let callers: Vec<&str> = seen.iter().map(|(caller, _)| caller.as_str()).collect();
        assert_eq!(callers, ["a", "b", "c"]);
    }

    #[test]
    fn reader_skips_blank_and_comment_lines() {
        let text = "# generated\n\nn1:pkg.A\tn2:pkg.B\n   \nn2:pkg.B\t--dynamic-3:4-->\tn3:pkg.C\n";
        let mut reader = EdgeReader::new(Cursor::new(text));

        let seen = collect(&mut reader).expect("edges parse");
        assert_eq!(
            seen,
            [
                ("n1:pkg.A".to_owned(), "n2:pkg.B".to_owned()),
                ("n2:pkg.B".to_owned(), "n3:pkg.C".to_owned()),
            ]
        );
    }

    #[test]
    fn reader_reports_malformed_line_number() {
        let text = "n1:pkg.A\tn2:pkg.B\n\nbroken-line\n";
        let mut reader = EdgeReader::new(Cursor::new(text));

        let error = collect(&mut reader).expect_err("third line is malformed");
        assert!(
            matches!(
                error,
                GraphError::MalformedEdge { line: 3, ref content } if content == "broken-line"
            ),
            "unexpected error: {error:?}"
        );
    }
}

mod builder_tests {
    use super::support::{build, classifier, constructor, handler};
    use crate::{EdgeList, GraphBuilder};

    #[test]
    fn nodes_are_created_for_both_ends() {
        let graph = build(&[("n1:pkg.A", "n2:pkg.B")], &[]);
        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edge_count(), 1);
        assert!(graph.contains_node("pkg.A"));
        assert!(graph.contains_node("pkg.B"));
    }

    #[test]
    fn context_copies_merge_into_one_node() {
        let graph = build(
            &[("n1:pkg.A", "n2:(*pkg.T).M"), ("n9:pkg.A", "n4:(*pkg.T).M")],
            &[],
        );
        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn ingesting_an_edge_twice_is_idempotent() {
        let site = constructor(3, "ErrNotFound");
        let edges = [("n1:pkg.A", "n2:pkg.B"), ("n2:pkg.B", site.as_str())];
        let handlers = [handler("pkg.B", "/b")];

        let once = build(&edges, &handlers);
        let doubled: Vec<(&str, &str)> = edges.iter().chain(edges.iter()).copied().collect();
        let twice = build(&doubled, &handlers);

        assert_eq!(once, twice);
    }

    #[test]
    fn error_is_attributed_to_the_caller() {
        let site = constructor(3, "ErrNotFound");
        let graph = build(&[("n1:pkg.Lookup", site.as_str())], &[]);

        let caller = graph.node("pkg.Lookup").expect("caller exists");
        assert_eq!(caller.local_errors().collect::<Vec<_>>(), ["ErrNotFound"]);

        let constructor_node = graph
            .node("example.com/svc/pkg/errs.NewErrNotFound")
            .expect("constructor exists");
        assert_eq!(constructor_node.local_errors().count(), 0);
    }

    #[test]
    fn handler_is_marked_on_the_callee() {
        let handlers = [
            handler("example.com/api.(*Handlers).Get", "/items"),
            handler("example.com/api.(*Handlers).Get", "/items/legacy"),
        ];
        let graph = build(
            &[
                ("n1:example.com/api.route", "n2:(*example.com/api.Handlers).Get"),
                ("n3:example.com/api.route", "n2:(*example.com/api.Handlers).Get"),
            ],
            &handlers,
        );

        let handler_nodes: Vec<_> = graph.handler_nodes().collect();
        assert_eq!(handler_nodes.len(), 1);
        let node = handler_nodes.first().expect("one handler");
        assert!(node.is_handler());
        assert_eq!(node.handlers(), &handlers);
        assert!(!graph.node("example.com/api.route").expect("caller").is_handler());
    }

    #[test]
    fn handlers_are_listed_in_discovery_order() {
        let handlers = [handler("pkg.First", "/first"), handler("pkg.Second", "/second")];
        let graph = build(
            &[("n1:pkg.main", "n2:pkg.Second"), ("n1:pkg.main", "n3:pkg.First")],
            &handlers,
        );

        let order: Vec<&str> = graph.handler_nodes().map(|node| node.id().as_str()).collect();
        assert_eq!(order, ["pkg.Second", "pkg.First"]);
    }

    #[test]
    fn ambiguous_edges_are_rejected_and_counted() {
        let mut edges = EdgeList::new();
        edges.push("n1:pkg.A", "n2:pkg.B");
        edges.push("n1:pkg.A", "n2:pkg:B:C");
        edges.push("n2:pkg.B", "n3:pkg.C");

        let mut builder = GraphBuilder::new(classifier(), &[]);
        builder.ingest_from(&mut edges).expect("in-memory edges never fail");
        let stats = builder.stats();
        assert_eq!(stats.ingested_edges, 2);
        assert_eq!(stats.rejected_edges, 1);

        let graph = builder.finish();
        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn ambiguous_handler_names_never_match() {
        let handlers = [handler("pkg:odd:name", "/odd")];
        let graph = build(&[("n1:pkg.main", "n2:pkg.name")], &handlers);
        assert_eq!(graph.handler_count(), 0);
    }

    #[test]
    fn callers_and_callees_follow_edges() {
        let graph = build(
            &[("n1:pkg.A", "n2:pkg.B"), ("n1:pkg.A", "n3:pkg.C"), ("n4:pkg.D", "n3:pkg.C")],
            &[],
        );

        let callees: Vec<&str> = graph.callees_of("pkg.A").map(|node| node.id().as_str()).collect();
        assert_eq!(callees, ["pkg.B", "pkg.C"]);

        let mut callers: Vec<&str> = graph.callers_of("pkg.C").map(|node| node.id().as_str()).collect();
        callers.sort_unstable();
        assert_eq!(callers, ["pkg.A", "pkg.D"]);
    }
}

mod reachability_tests {
    use super::support::{build, constructor};
    use crate::{ReachabilityEngine, normalise_symbol};

    fn reachable(graph: &crate::CallGraph, start: &str) -> Vec<String> {
        let id = normalise_symbol(start).expect("normalises");
        ReachabilityEngine::new(graph)
            .collect_reachable_errors(&id)
            .into_iter()
            .collect()
    }

    #[test]
    fn collects_transitive_errors() {
        let not_found = constructor(10, "ErrNotFound");
        let conflict = constructor(11, "ErrConflict");
        let graph = build(
            &[
                ("n1:pkg.Handler", "n2:pkg.Service"),
                ("n2:pkg.Service", "n3:pkg.Repo"),
                ("n3:pkg.Repo", not_found.as_str()),
                ("n2:pkg.Service", conflict.as_str()),
            ],
            &[],
        );

        assert_eq!(reachable(&graph, "pkg.Handler"), ["ErrConflict", "ErrNotFound"]);
        assert_eq!(reachable(&graph, "pkg.Repo"), ["ErrNotFound"]);
    }

    #[test]
    fn terminates_on_mutual_recursion() {
        let forbidden = constructor(10, "ErrForbidden");
        let not_found = constructor(11, "ErrNotFound");
        let graph = build(
            &[
                ("n1:pkg.A", "n2:pkg.B"),
                ("n2:pkg.B", "n1:pkg.A"),
                ("n2:pkg.B", forbidden.as_str()),
                ("n1:pkg.A", not_found.as_str()),
            ],
            &[],
        );

        assert_eq!(reachable(&graph, "pkg.A"), ["ErrNotFound", "ErrForbidden"]);
        assert_eq!(reachable(&graph, "pkg.B"), ["ErrForbidden", "ErrNotFound"]);
    }

    #[test]
    fn terminates_on_self_recursion() {
        let conflict = constructor(10, "ErrConflict");
        let graph = build(
            &[("n1:pkg.Walk", "n1:pkg.Walk"), ("n1:pkg.Walk", conflict.as_str())],
            &[],
        );

        assert_eq!(reachable(&graph, "pkg.Walk"), ["ErrConflict"]);
    }

    #[test]
    fn shared_callees_contribute_once() {
        let not_found = constructor(10, "ErrNotFound");
        let graph = build(
            &[
                ("n1:pkg.Top", "n2:pkg.Left"),
                ("n1:pkg.Top", "n3:pkg.Right"),
                ("n2:pkg.Left", "n4:pkg.Shared"),
                ("n3:pkg.Right", "n4:pkg.Shared"),
                ("n4:pkg.Shared", not_found.as_str()),
            ],
            &[],
        );

        assert_eq!(reachable(&graph, "pkg.Top"), ["ErrNotFound"]);
    }

    #[test]
    fn missing_start_node_yields_nothing() {
        let graph = build(&[("n1:pkg.A", "n2:pkg.B")], &[]);
        assert!(reachable(&graph, "pkg.Unknown").is_empty());
    }

    #[test]
    fn queries_do_not_share_visited_state() {
        let not_found = constructor(10, "ErrNotFound");
        let graph = build(
            &[("n1:pkg.A", "n2:pkg.Common"), ("n2:pkg.Common", not_found.as_str())],
            &[],
        );
        let engine = ReachabilityEngine::new(&graph);
        let start = normalise_symbol("pkg.A").expect("normalises");

        let first = engine.collect_reachable_errors(&start);
        let second = engine.collect_reachable_errors(&start);
        assert_eq!(first, second);
        assert_eq!(first.len(), 1);
    }
}
