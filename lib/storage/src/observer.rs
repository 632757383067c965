use rdf_graph_model::Quad;

/// Gets notified whenever a quad is inserted into a [`Graph`](crate::Graph).
///
/// Observers run after the quad has been committed to the graph, once per effective insertion.
/// Adding a quad that is already stored does not notify any observer.
///
/// Closures can be used as observers:
/// ```
/// use rdf_graph_model::{Literal, NamedNode, Quad, GraphName};
/// use rdf_graph_storage::{Graph, MutableGraph};
/// use std::sync::atomic::{AtomicUsize, Ordering};
/// use std::sync::Arc;
///
/// let inserted = Arc::new(AtomicUsize::new(0));
/// let counter = Arc::clone(&inserted);
///
/// let mut graph = Graph::new();
/// graph.add_observer(move |_: &Quad| {
///     counter.fetch_add(1, Ordering::Relaxed);
/// });
///
/// let quad = Quad::new(
///     NamedNode::new_unchecked("http://example.com/s"),
///     NamedNode::new_unchecked("http://example.com/p"),
///     Literal::new_simple_literal("o"),
///     GraphName::DefaultGraph,
/// );
/// graph.add(quad.clone()).add(quad);
///
/// assert_eq!(inserted.load(Ordering::Relaxed), 1);
/// ```
pub trait InsertObserver: Send + Sync {
    /// Called with the quad that was just inserted.
    fn on_insert(&self, quad: &Quad);
}

impl<F> InsertObserver for F
where
    F: Fn(&Quad) + Send + Sync,
{
    fn on_insert(&self, quad: &Quad) {
        self(quad);
    }
}
