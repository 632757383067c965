use crate::{EncodedStr, RdfNode, Term, TermKind};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// An RDF [blank node](https://www.w3.org/TR/rdf11-concepts/#dfn-blank-node).
///
/// Fresh blank nodes are allocated by a [`BlankNodeIdGenerator`]. The canonical form is the
/// escaped identifier prefixed with `_:`.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Clone, Hash)]
pub struct BlankNode {
    id: String,
}

impl BlankNode {
    /// Builds a blank node from an existing identifier.
    ///
    /// It is the responsibility of the caller to keep identifiers unique within the scope they
    /// are used in.
    #[inline]
    pub fn new_unchecked(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }

    /// Returns the identifier of this blank node.
    #[inline]
    pub fn as_str(&self) -> &str {
        self.id.as_str()
    }

    #[inline]
    pub fn into_string(self) -> String {
        self.id
    }
}

impl fmt::Display for BlankNode {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "_:{}", EncodedStr(&self.id))
    }
}

impl RdfNode for BlankNode {
    fn kind(&self) -> TermKind {
        TermKind::BlankNode
    }

    fn value(&self) -> &str {
        self.as_str()
    }

    fn equals_term(&self, term: &Term) -> bool {
        matches!(term, Term::BlankNode(other) if other == self)
    }
}

/// Allocates blank nodes with identifiers that are unique for this generator.
///
/// The generator owns a monotonically increasing counter. The `n`-th allocated blank node has
/// the identifier `b{n}`, starting at `b1`. Sharing a generator (e.g., behind an `Arc`) shares
/// the uniqueness scope; independent generators may hand out the same identifiers.
#[derive(Debug, Default)]
pub struct BlankNodeIdGenerator {
    /// The number of identifiers handed out so far.
    last_id: AtomicU64,
}

impl BlankNodeIdGenerator {
    /// Creates a new generator that starts at `b1`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocates a fresh blank node.
    pub fn fresh(&self) -> BlankNode {
        let id = self.last_id.fetch_add(1, Ordering::Relaxed) + 1;
        BlankNode::new_unchecked(format!("b{id}"))
    }
}
