use crate::Graph;
use rdf_graph_model::{Quad, TermMatcher};

/// Read access to a set of quads.
///
/// Each filter argument of [`QueryableGraph::match_quads`] is either `None`, which matches any
/// component, or a [`TermMatcher`] that is compared against the respective component.
pub trait QueryableGraph {
    /// Returns a new graph with the quads that match all given filters.
    ///
    /// The insertion order of the matching quads is preserved.
    fn match_quads(
        &self,
        subject: Option<&TermMatcher>,
        predicate: Option<&TermMatcher>,
        object: Option<&TermMatcher>,
        graph_name: Option<&TermMatcher>,
    ) -> Graph;

    /// Returns true if matching the components of `quad` yields exactly one quad.
    fn includes(&self, quad: &Quad) -> bool;

    /// Returns the number of quads.
    fn len(&self) -> usize;

    /// Returns true if there are no quads.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Write access to a set of quads.
///
/// None of the operations fail. Adding a stored quad or removing an absent one has no effect.
pub trait MutableGraph: QueryableGraph {
    /// Adds `quad` unless an equal quad is already stored.
    fn add(&mut self, quad: Quad) -> &mut Self;

    /// Removes `quad`. Returns true if it was stored.
    fn remove(&mut self, quad: &Quad) -> bool;

    /// Removes all quads that match the given filters and returns their number.
    fn remove_matches(
        &mut self,
        subject: Option<&TermMatcher>,
        predicate: Option<&TermMatcher>,
        object: Option<&TermMatcher>,
        graph_name: Option<&TermMatcher>,
    ) -> usize;
}
