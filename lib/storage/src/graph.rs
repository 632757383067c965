use crate::index::{GspoIndex, QuadKey};
use crate::{InsertObserver, MutableGraph, QueryableGraph};
use rdf_graph_model::{Quad, TermMatcher, Triple};
use std::fmt;
use std::iter::FusedIterator;
use std::sync::Arc;
use tracing::{debug, trace};

/// An in-memory set of quads that preserves insertion order.
///
/// Quads are deduplicated by the canonical forms of their components: adding a quad that is
/// equal to a stored quad has no effect. Stored quads are kept in two structures, a list in
/// insertion order and a [`GspoIndex`] for existence checks. Both always contain the same quad
/// instances.
///
/// The graph is not synchronized. Mutations must not run concurrently with other operations on
/// the same graph, which the borrow checker enforces unless the graph is shared through interior
/// mutability.
///
/// ```
/// use rdf_graph_model::{Literal, NamedNode, Quad};
/// use rdf_graph_storage::{Graph, MutableGraph, QueryableGraph};
///
/// let quad = Quad::new(
///     NamedNode::new("http://example.org/s")?,
///     NamedNode::new("http://example.org/p")?,
///     Literal::new_language_tagged_literal("test", "en"),
///     NamedNode::new("http://example.org/g")?,
/// );
///
/// let mut graph = Graph::new();
/// graph.add(quad.clone()).add(quad);
///
/// assert_eq!(graph.len(), 1);
/// assert_eq!(
///     graph.to_vec()[0].to_string(),
///     "<http://example.org/s> <http://example.org/p> \"test\"@en <http://example.org/g> ."
/// );
/// # Result::<_, rdf_graph_model::IriParseError>::Ok(())
/// ```
#[derive(Clone, Default)]
pub struct Graph {
    /// The stored quads in insertion order.
    quads: Vec<Arc<Quad>>,
    /// Maps the canonical key of each stored quad to its instance in `quads`.
    index: GspoIndex,
    /// Notified after every effective insertion.
    observers: Vec<Arc<dyn InsertObserver>>,
}

impl Graph {
    /// Creates a new empty [Graph].
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a graph from `quads`. Duplicates are dropped, keeping the first occurrence.
    pub fn from_quads(quads: impl IntoIterator<Item = Quad>) -> Self {
        quads.into_iter().collect()
    }

    /// Creates a graph without observers that shares the given quad instances.
    fn from_shared<'a>(quads: impl IntoIterator<Item = &'a Arc<Quad>>) -> Self {
        let mut graph = Self::new();
        for quad in quads {
            graph.insert_shared(Arc::clone(quad));
        }
        graph
    }

    /// Registers an observer that is notified about every future insertion.
    pub fn add_observer(&mut self, observer: impl InsertObserver + 'static) -> &mut Self {
        self.observers.push(Arc::new(observer));
        self
    }

    /// Returns the registered observers in registration order.
    pub fn observers(&self) -> &[Arc<dyn InsertObserver>] {
        &self.observers
    }

    /// Returns an iterator over the quads in insertion order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.quads.iter(),
        }
    }

    /// Returns a copy of all quads in insertion order.
    pub fn to_vec(&self) -> Vec<Quad> {
        self.iter().cloned().collect()
    }

    /// Returns a new graph with the quads for which `predicate` returns true.
    pub fn filter(&self, mut predicate: impl FnMut(&Quad) -> bool) -> Graph {
        Self::from_shared(self.quads.iter().filter(|quad| predicate(quad)))
    }

    /// Calls `f` for every quad in insertion order.
    pub fn for_each(&self, f: impl FnMut(&Quad)) {
        self.iter().for_each(f);
    }

    /// Returns true if `predicate` returns true for at least one quad.
    pub fn some(&self, predicate: impl FnMut(&Quad) -> bool) -> bool {
        self.iter().any(predicate)
    }

    /// Returns true if `predicate` returns true for every quad. An empty graph returns true.
    pub fn every(&self, predicate: impl FnMut(&Quad) -> bool) -> bool {
        self.iter().all(predicate)
    }

    /// Applies `f` to every quad and collects the results in insertion order.
    pub fn map<T>(&self, f: impl FnMut(&Quad) -> T) -> Vec<T> {
        self.iter().map(f).collect()
    }

    /// Returns a new graph with the quads of `self` that are not included in `other`.
    pub fn difference(&self, other: &Graph) -> Graph {
        self.filter(|quad| !other.includes(quad))
    }

    /// Returns a new graph with the quads of `self` that are also included in `other`.
    pub fn intersection(&self, other: &Graph) -> Graph {
        self.filter(|quad| other.includes(quad))
    }

    /// Returns a new graph with the quads of `self` followed by the quads of `other`.
    ///
    /// Neither graph is modified.
    pub fn merge(&self, other: &Graph) -> Graph {
        let mut merged = Self::from_shared(&self.quads);
        merged.add_all(other);
        merged
    }

    /// Adds all quads of `other` to `self`.
    pub fn add_all(&mut self, other: &Graph) -> &mut Self {
        let mut inserted = 0;
        for quad in &other.quads {
            if self.insert_shared(Arc::clone(quad)) {
                inserted += 1;
            }
        }
        debug!(inserted, offered = other.len(), "added quads from other graph");
        self
    }

    /// Inserts `quad` unless its key is occupied and notifies the observers on insertion.
    ///
    /// Returns true if the quad was inserted.
    fn insert_shared(&mut self, quad: Arc<Quad>) -> bool {
        let key = QuadKey::new(&quad);
        if self.index.contains(&key) {
            return false;
        }

        self.index.insert(key, Arc::clone(&quad));
        self.quads.push(Arc::clone(&quad));
        trace!(%quad, "inserted quad");

        for observer in &self.observers {
            observer.on_insert(&quad);
        }
        true
    }
}

fn matches_pattern(
    quad: &Quad,
    subject: Option<&TermMatcher>,
    predicate: Option<&TermMatcher>,
    object: Option<&TermMatcher>,
    graph_name: Option<&TermMatcher>,
) -> bool {
    subject.map_or(true, |matcher| matcher.matches(&quad.subject))
        && predicate.map_or(true, |matcher| matcher.matches(&quad.predicate))
        && object.map_or(true, |matcher| matcher.matches(&quad.object))
        && graph_name.map_or(true, |matcher| matcher.matches_graph_name(&quad.graph_name))
}

impl QueryableGraph for Graph {
    fn match_quads(
        &self,
        subject: Option<&TermMatcher>,
        predicate: Option<&TermMatcher>,
        object: Option<&TermMatcher>,
        graph_name: Option<&TermMatcher>,
    ) -> Graph {
        Self::from_shared(
            self.quads
                .iter()
                .filter(|quad| matches_pattern(quad, subject, predicate, object, graph_name)),
        )
    }

    fn includes(&self, quad: &Quad) -> bool {
        let subject = TermMatcher::from(quad.subject.clone());
        let predicate = TermMatcher::from(quad.predicate.clone());
        let object = TermMatcher::from(quad.object.clone());
        let graph_name = TermMatcher::from(quad.graph_name.clone());

        let matches = self.match_quads(
            Some(&subject),
            Some(&predicate),
            Some(&object),
            Some(&graph_name),
        );
        matches.len() == 1
    }

    fn len(&self) -> usize {
        self.quads.len()
    }
}

impl MutableGraph for Graph {
    fn add(&mut self, quad: Quad) -> &mut Self {
        self.insert_shared(Arc::new(quad));
        self
    }

    fn remove(&mut self, quad: &Quad) -> bool {
        let Some(removed) = self.index.remove(&QuadKey::new(quad)) else {
            return false;
        };

        // Remove the stored instance, which is not necessarily `quad` itself.
        if let Some(position) = self
            .quads
            .iter()
            .position(|stored| Arc::ptr_eq(stored, &removed))
        {
            self.quads.remove(position);
        }
        trace!(quad = %removed, "removed quad");
        true
    }

    fn remove_matches(
        &mut self,
        subject: Option<&TermMatcher>,
        predicate: Option<&TermMatcher>,
        object: Option<&TermMatcher>,
        graph_name: Option<&TermMatcher>,
    ) -> usize {
        let matches = self.match_quads(subject, predicate, object, graph_name);
        let removed = matches.iter().filter(|quad| self.remove(quad)).count();
        debug!(removed, "removed matching quads");
        removed
    }
}

impl fmt::Debug for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Graph")
            .field("quads", &self.quads)
            .field("observers", &self.observers.len())
            .finish_non_exhaustive()
    }
}

/// Writes the graph in N-Quads, one quad per line in insertion order.
impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for quad in self {
            writeln!(f, "{quad}")?;
        }
        Ok(())
    }
}

impl FromIterator<Quad> for Graph {
    fn from_iter<I: IntoIterator<Item = Quad>>(iter: I) -> Self {
        let mut graph = Self::new();
        graph.extend(iter);
        graph
    }
}

impl FromIterator<Triple> for Graph {
    fn from_iter<I: IntoIterator<Item = Triple>>(iter: I) -> Self {
        iter.into_iter().map(Quad::from).collect()
    }
}

impl Extend<Quad> for Graph {
    fn extend<I: IntoIterator<Item = Quad>>(&mut self, iter: I) {
        for quad in iter {
            self.add(quad);
        }
    }
}

impl<'a> IntoIterator for &'a Graph {
    type Item = &'a Quad;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the quads of a [`Graph`] in insertion order.
#[derive(Clone, Debug)]
pub struct Iter<'a> {
    inner: std::slice::Iter<'a, Arc<Quad>>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Quad;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(Arc::as_ref)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for Iter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(Arc::as_ref)
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}
