use crate::{example_quad, example_quad_in_graph, example_triple_with_object};
use rdf_graph_model::Quad;
use rdf_graph_storage::{Graph, QueryableGraph};

fn graph_a() -> Graph {
    Graph::from_quads([
        example_quad(),
        example_triple_with_object("http://example.org/objectA").into(),
        example_triple_with_object("http://example.org/shared").into(),
    ])
}

fn graph_b() -> Graph {
    Graph::from_quads([
        example_triple_with_object("http://example.org/shared").into(),
        example_triple_with_object("http://example.org/objectB").into(),
        example_quad_in_graph("http://example.org/g"),
    ])
}

#[test]
fn difference() {
    let a = graph_a();
    let b = graph_b();

    let difference = a.difference(&b);

    assert_eq!(
        difference.to_vec(),
        vec![
            example_quad(),
            example_triple_with_object("http://example.org/objectA").into()
        ]
    );
    assert!(difference.every(|quad| !b.includes(quad)));
}

#[test]
fn intersection() {
    let intersection = graph_a().intersection(&graph_b());

    assert_eq!(
        intersection.to_vec(),
        vec![Quad::from(example_triple_with_object("http://example.org/shared"))]
    );
}

#[test]
fn merge_does_not_modify_its_inputs() {
    let a = Graph::from_iter([example_triple_with_object("http://example.org/objectA")]);
    let b = Graph::from_iter([example_triple_with_object("http://example.org/objectB")]);

    let c = a.merge(&b);

    assert_eq!(a.len(), 1);
    assert_eq!(b.len(), 1);
    assert_eq!(c.len(), 2);
}

#[test]
fn merge_counts_shared_quads_once() {
    let a = graph_a();
    let b = graph_b();

    let merged = a.merge(&b);

    assert_eq!(merged.len(), a.len() + b.len() - a.intersection(&b).len());
    assert_eq!(merged.len(), 5);
    assert!(a.every(|quad| merged.includes(quad)));
    assert!(b.every(|quad| merged.includes(quad)));
}

#[test]
fn set_operations_with_empty_graph() {
    let a = graph_a();
    let empty = Graph::new();

    assert_eq!(a.difference(&empty).len(), a.len());
    assert_eq!(a.intersection(&empty).len(), 0);
    assert_eq!(empty.difference(&a).len(), 0);
    assert_eq!(empty.merge(&a).to_vec(), a.to_vec());
}
