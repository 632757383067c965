use crate::{BlankNode, Literal, NamedNode, RdfNode, TermKind};
use std::fmt;

/// An RDF [term](https://www.w3.org/TR/rdf11-concepts/#dfn-rdf-term).
///
/// Two terms are equal if they have the same kind and all fields are equal.
#[derive(Eq, PartialEq, Debug, Clone, Hash)]
pub enum Term {
    NamedNode(NamedNode),
    BlankNode(BlankNode),
    Literal(Literal),
}

impl Term {
    #[inline]
    pub fn is_named_node(&self) -> bool {
        matches!(self, Self::NamedNode(_))
    }

    #[inline]
    pub fn is_blank_node(&self) -> bool {
        matches!(self, Self::BlankNode(_))
    }

    #[inline]
    pub fn is_literal(&self) -> bool {
        matches!(self, Self::Literal(_))
    }
}

impl fmt::Display for Term {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NamedNode(node) => write!(f, "{node}"),
            Self::BlankNode(node) => write!(f, "{node}"),
            Self::Literal(literal) => write!(f, "{literal}"),
        }
    }
}

impl RdfNode for Term {
    fn kind(&self) -> TermKind {
        match self {
            Self::NamedNode(node) => node.kind(),
            Self::BlankNode(node) => node.kind(),
            Self::Literal(literal) => literal.kind(),
        }
    }

    fn value(&self) -> &str {
        match self {
            Self::NamedNode(node) => node.value(),
            Self::BlankNode(node) => node.value(),
            Self::Literal(literal) => literal.value(),
        }
    }

    fn equals_term(&self, term: &Term) -> bool {
        self == term
    }
}

impl From<NamedNode> for Term {
    #[inline]
    fn from(node: NamedNode) -> Self {
        Self::NamedNode(node)
    }
}

impl From<BlankNode> for Term {
    #[inline]
    fn from(node: BlankNode) -> Self {
        Self::BlankNode(node)
    }
}

impl From<Literal> for Term {
    #[inline]
    fn from(literal: Literal) -> Self {
        Self::Literal(literal)
    }
}

impl From<Subject> for Term {
    #[inline]
    fn from(subject: Subject) -> Self {
        match subject {
            Subject::NamedNode(node) => Self::NamedNode(node),
            Subject::BlankNode(node) => Self::BlankNode(node),
        }
    }
}

/// The union of [IRIs](https://www.w3.org/TR/rdf11-concepts/#dfn-iri) and
/// [blank nodes](https://www.w3.org/TR/rdf11-concepts/#dfn-blank-node) that may appear in subject
/// position.
#[derive(Eq, PartialEq, Debug, Clone, Hash)]
pub enum Subject {
    NamedNode(NamedNode),
    BlankNode(BlankNode),
}

impl fmt::Display for Subject {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NamedNode(node) => write!(f, "{node}"),
            Self::BlankNode(node) => write!(f, "{node}"),
        }
    }
}

impl RdfNode for Subject {
    fn kind(&self) -> TermKind {
        match self {
            Self::NamedNode(node) => node.kind(),
            Self::BlankNode(node) => node.kind(),
        }
    }

    fn value(&self) -> &str {
        match self {
            Self::NamedNode(node) => node.value(),
            Self::BlankNode(node) => node.value(),
        }
    }

    fn equals_term(&self, term: &Term) -> bool {
        match self {
            Self::NamedNode(node) => node.equals_term(term),
            Self::BlankNode(node) => node.equals_term(term),
        }
    }
}

impl From<NamedNode> for Subject {
    #[inline]
    fn from(node: NamedNode) -> Self {
        Self::NamedNode(node)
    }
}

impl From<BlankNode> for Subject {
    #[inline]
    fn from(node: BlankNode) -> Self {
        Self::BlankNode(node)
    }
}

/// A possible graph name.
///
/// It is the union of [IRIs](https://www.w3.org/TR/rdf11-concepts/#dfn-iri),
/// [blank nodes](https://www.w3.org/TR/rdf11-concepts/#dfn-blank-node), and the
/// [default graph name](https://www.w3.org/TR/rdf11-concepts/#dfn-default-graph).
#[derive(Eq, PartialEq, Debug, Clone, Hash, Default)]
pub enum GraphName {
    NamedNode(NamedNode),
    BlankNode(BlankNode),
    #[default]
    DefaultGraph,
}

impl GraphName {
    #[inline]
    pub fn is_default_graph(&self) -> bool {
        matches!(self, Self::DefaultGraph)
    }

    /// Returns the graph name as a term, or `None` for the default graph.
    pub fn as_node(&self) -> Option<&dyn RdfNode> {
        match self {
            Self::NamedNode(node) => Some(node),
            Self::BlankNode(node) => Some(node),
            Self::DefaultGraph => None,
        }
    }
}

impl fmt::Display for GraphName {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NamedNode(node) => write!(f, "{node}"),
            Self::BlankNode(node) => write!(f, "{node}"),
            Self::DefaultGraph => f.write_str("DEFAULT"),
        }
    }
}

impl From<NamedNode> for GraphName {
    #[inline]
    fn from(node: NamedNode) -> Self {
        Self::NamedNode(node)
    }
}

impl From<BlankNode> for GraphName {
    #[inline]
    fn from(node: BlankNode) -> Self {
        Self::BlankNode(node)
    }
}

impl From<Subject> for GraphName {
    #[inline]
    fn from(node: Subject) -> Self {
        match node {
            Subject::NamedNode(node) => Self::NamedNode(node),
            Subject::BlankNode(node) => Self::BlankNode(node),
        }
    }
}

impl From<Option<NamedNode>> for GraphName {
    #[inline]
    fn from(node: Option<NamedNode>) -> Self {
        node.map_or(Self::DefaultGraph, Self::NamedNode)
    }
}
