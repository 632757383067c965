use crate::{example_quad, example_quad_in_graph, example_triple_with_object};
use insta::assert_snapshot;
use rdf_graph_model::Quad;
use rdf_graph_storage::{Graph, QueryableGraph};

fn two_object_graph() -> Graph {
    Graph::from_iter([
        example_triple_with_object("http://example.org/objectA"),
        example_triple_with_object("http://example.org/objectB"),
    ])
}

#[test]
fn to_vec() {
    let graph = Graph::from_quads([example_quad()]);
    assert_eq!(graph.to_vec(), vec![example_quad()]);
}

#[test]
fn some() {
    let graph = two_object_graph();

    assert!(graph.some(|quad| quad.object.to_string() == "<http://example.org/objectB>"));
    assert!(!graph.some(|quad| quad.object.to_string() == "<http://example.org/objectC>"));
    assert!(!Graph::new().some(|_| true));
}

#[test]
fn every() {
    let graph = two_object_graph();

    assert!(graph.every(|quad| quad.subject.to_string() == "<http://example.org/subject>"));
    assert!(!graph.every(|quad| quad.object.to_string() == "<http://example.org/objectA>"));
    assert!(Graph::new().every(|_| false));
}

#[test]
fn filter_returns_new_graph() {
    let graph = two_object_graph();

    let filtered = graph.filter(|quad| quad.object.to_string() == "<http://example.org/objectB>");

    assert_eq!(filtered.len(), 1);
    assert_eq!(graph.len(), 2);
    assert_eq!(
        filtered.to_vec(),
        vec![Quad::from(example_triple_with_object("http://example.org/objectB"))]
    );
}

#[test]
fn for_each_visits_in_insertion_order() {
    let graph = two_object_graph();

    let mut objects = Vec::new();
    graph.for_each(|quad| objects.push(quad.object.to_string()));

    assert_snapshot!(
        objects.join(" "),
        @"<http://example.org/objectA> <http://example.org/objectB>"
    );
}

#[test]
fn map() {
    let graph = two_object_graph();
    let objects = graph.map(|quad| quad.object.clone());

    assert_eq!(objects.len(), 2);
    assert_eq!(objects[1].to_string(), "<http://example.org/objectB>");
}

#[test]
fn iter() {
    let graph = two_object_graph();

    assert_eq!(graph.iter().len(), 2);
    assert_eq!(
        graph.iter().next_back().map(ToString::to_string),
        Some(
            concat!(
                "<http://example.org/subject> <http://example.org/predicate> ",
                "<http://example.org/objectB> ."
            )
            .to_owned()
        )
    );
    assert_eq!((&graph).into_iter().count(), graph.len());
}

#[test]
fn display_writes_n_quads() {
    let graph = Graph::from_quads([example_quad(), example_quad_in_graph("http://example.org/g")]);

    assert_eq!(
        graph.to_string(),
        concat!(
            "<http://example.org/subject> <http://example.org/predicate> \"test\" .\n",
            "<http://example.org/subject> <http://example.org/predicate> \"test\" ",
            "<http://example.org/g> .\n",
        )
    );
    assert_eq!(Graph::new().to_string(), "");
}
