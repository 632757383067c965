use crate::{example_quad, example_quad_in_graph, example_triple_with_object, named_node};
use rdf_graph_model::{Literal, Quad, TermMatcher};
use rdf_graph_storage::{Graph, MutableGraph, QueryableGraph};

#[test]
fn len_counts_quads() {
    let mut graph = Graph::new();
    assert_eq!(graph.len(), 0);
    assert!(graph.is_empty());

    graph.add(example_quad());
    assert_eq!(graph.len(), 1);
    assert!(!graph.is_empty());
}

#[test]
fn add_is_idempotent() {
    let mut graph = Graph::new();

    graph.add(example_quad());
    assert!(graph.includes(&example_quad()));

    graph.add(example_quad());
    assert_eq!(graph.len(), 1);
    assert!(graph.includes(&example_quad()));
}

#[test]
fn add_deduplicates_equal_quads_from_different_sources() {
    let triple = example_triple_with_object("http://example.org/object");

    let mut graph = Graph::new();
    graph
        .add(Quad::from(triple.clone()))
        .add(triple.clone().into())
        .add(triple.to_quad(named_node("http://example.org/graph")));

    assert_eq!(graph.len(), 2);
}

#[test]
fn construct_from_quads_drops_duplicates() {
    let graph = Graph::from_quads([
        example_quad(),
        example_quad_in_graph("http://example.org/g"),
        example_quad(),
    ]);

    assert_eq!(
        graph.to_vec(),
        vec![example_quad(), example_quad_in_graph("http://example.org/g")]
    );
}

#[test]
fn remove_quad() {
    let mut graph = Graph::new();
    graph.add(example_quad());

    assert!(graph.remove(&example_quad()));
    assert_eq!(graph.len(), 0);
    assert!(!graph.includes(&example_quad()));
}

#[test]
fn remove_absent_quad_has_no_effect() {
    let mut graph = Graph::new();
    assert!(!graph.remove(&example_quad()));

    graph.add(example_quad_in_graph("http://example.org/g1"));
    assert!(!graph.remove(&example_quad()));
    assert!(!graph.remove(&example_quad_in_graph("http://example.org/g2")));
    assert_eq!(graph.len(), 1);
}

#[test]
fn remove_keeps_insertion_order_of_remaining_quads() {
    let a = example_triple_with_object("http://example.org/a");
    let b = example_triple_with_object("http://example.org/b");
    let c = example_triple_with_object("http://example.org/c");
    let mut graph: Graph = [a.clone(), b.clone(), c.clone()].into_iter().collect();

    graph.remove(&b.into());

    assert_eq!(graph.to_vec(), vec![Quad::from(a), Quad::from(c)]);
}

#[test]
fn remove_matches() {
    let subject = TermMatcher::from("http://example.org/subject");
    let predicate = TermMatcher::from("http://example.org/predicate");
    let object = TermMatcher::from(Literal::new_simple_literal("test"));
    let other_object = TermMatcher::from(Literal::new_simple_literal("example"));
    let mut graph = Graph::new();

    graph.add(example_quad());
    assert_eq!(graph.remove_matches(Some(&subject), None, None, None), 1);
    assert_eq!(graph.len(), 0);

    graph.add(example_quad());
    graph.remove_matches(None, Some(&predicate), None, None);
    assert_eq!(graph.len(), 0);

    graph.add(example_quad());
    graph.remove_matches(None, None, Some(&object), None);
    assert_eq!(graph.len(), 0);

    graph.add(example_quad());
    graph.remove_matches(None, None, Some(&TermMatcher::from("test")), None);
    assert_eq!(graph.len(), 0);

    graph.add(example_quad());
    graph.remove_matches(Some(&subject), Some(&predicate), Some(&object), None);
    assert_eq!(graph.len(), 0);

    graph.add(example_quad());
    assert_eq!(
        graph.remove_matches(Some(&subject), Some(&predicate), Some(&other_object), None),
        0
    );
    assert_eq!(graph.len(), 1);
}

#[test]
fn remove_matches_by_graph_name() {
    let mut graph = Graph::from_quads([
        example_quad(),
        example_quad_in_graph("http://example.org/g1"),
        example_quad_in_graph("http://example.org/g2"),
    ]);

    graph.remove_matches(None, None, None, Some(&TermMatcher::DefaultGraph));
    assert_eq!(graph.len(), 2);

    graph.remove_matches(None, None, None, Some(&"http://example.org/g1".into()));
    assert_eq!(graph.to_vec(), vec![example_quad_in_graph("http://example.org/g2")]);
}

#[test]
fn remove_matches_on_empty_graph() {
    let mut graph = Graph::new();
    assert_eq!(graph.remove_matches(None, None, None, None), 0);
    assert_eq!(graph.len(), 0);
}

#[test]
fn add_all_mutates_and_returns_self() {
    let mut graph_a = Graph::from_iter([example_triple_with_object("http://example.org/objectA")]);
    let graph_b = Graph::from_iter([example_triple_with_object("http://example.org/objectB")]);

    let graph_c = graph_a.add_all(&graph_b);

    assert_eq!(graph_c.len(), 2);
    assert_eq!(graph_a.len(), 2);
    assert_eq!(graph_b.len(), 1);
}

#[test]
fn extend_deduplicates() {
    let mut graph = Graph::new();
    graph.extend([example_quad(), example_quad()]);
    graph.extend([example_quad()]);
    assert_eq!(graph.len(), 1);
}

#[test]
fn quad_in_named_graph() {
    let quad = Quad::new(
        named_node("http://example.org/s"),
        named_node("http://example.org/p"),
        Literal::new_language_tagged_literal("test", "en"),
        named_node("http://example.org/g"),
    );

    let mut graph = Graph::new();
    graph.add(quad);

    assert_eq!(graph.len(), 1);
    assert_eq!(
        graph.to_vec()[0].to_string(),
        "<http://example.org/s> <http://example.org/p> \"test\"@en <http://example.org/g> ."
    );
}
