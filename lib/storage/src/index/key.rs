use rdf_graph_model::{GraphName, Quad};

/// The position of a quad in the [`GspoIndex`](super::GspoIndex).
///
/// Each component holds the canonical form of the corresponding quad component. Two quads are
/// the same stored fact iff their keys are equal. The default graph is keyed by the empty
/// string, which is never the canonical form of a term.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct QuadKey {
    pub graph: String,
    pub subject: String,
    pub predicate: String,
    pub object: String,
}

impl QuadKey {
    /// Computes the key of `quad`.
    pub fn new(quad: &Quad) -> Self {
        let graph = match &quad.graph_name {
            GraphName::DefaultGraph => String::new(),
            graph_name => graph_name.to_string(),
        };
        Self {
            graph,
            subject: quad.subject.to_string(),
            predicate: quad.predicate.to_string(),
            object: quad.object.to_string(),
        }
    }
}
