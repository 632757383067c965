use crate::{BlankNode, GraphName, Literal, NamedNode, RdfNode, Subject, Term};
use regex::Regex;

/// A filter that is compared against a single component of a triple or quad.
///
/// Each variant dispatches to one of the typed comparison methods of [`RdfNode`]:
/// ```
/// use rdf_graph_model::{Literal, NamedNode, TermMatcher};
/// use regex::Regex;
///
/// let node = NamedNode::new_unchecked("http://example.org");
///
/// assert!(TermMatcher::from("http://example.org").matches(&node));
/// assert!(TermMatcher::from(Regex::new("^http")?).matches(&node));
/// assert!(TermMatcher::from(node.clone()).matches(&node));
/// assert!(!TermMatcher::from(Literal::new_simple_literal("http://example.org")).matches(&node));
/// # Result::<_, regex::Error>::Ok(())
/// ```
#[derive(Clone, Debug)]
pub enum TermMatcher {
    /// Matches terms whose nominal value is exactly this string.
    Value(String),
    /// Matches terms whose nominal value is accepted by this regular expression.
    Pattern(Regex),
    /// Matches terms of the same kind with equal fields.
    Term(Term),
    /// Matches only the default graph. No term matches this variant.
    DefaultGraph,
}

impl TermMatcher {
    /// Returns true if `node` is accepted by this matcher.
    pub fn matches<N: RdfNode + ?Sized>(&self, node: &N) -> bool {
        match self {
            Self::Value(value) => node.equals_value(value),
            Self::Pattern(pattern) => node.matches_pattern(pattern),
            Self::Term(term) => node.equals_term(term),
            Self::DefaultGraph => false,
        }
    }

    /// Returns true if `graph_name` is accepted by this matcher.
    ///
    /// The default graph has no nominal value and is only accepted by
    /// [`TermMatcher::DefaultGraph`].
    pub fn matches_graph_name(&self, graph_name: &GraphName) -> bool {
        match graph_name.as_node() {
            Some(node) => self.matches(node),
            None => matches!(self, Self::DefaultGraph),
        }
    }
}

impl From<&str> for TermMatcher {
    #[inline]
    fn from(value: &str) -> Self {
        Self::Value(value.to_owned())
    }
}

impl From<String> for TermMatcher {
    #[inline]
    fn from(value: String) -> Self {
        Self::Value(value)
    }
}

impl From<Regex> for TermMatcher {
    #[inline]
    fn from(pattern: Regex) -> Self {
        Self::Pattern(pattern)
    }
}

impl From<Term> for TermMatcher {
    #[inline]
    fn from(term: Term) -> Self {
        Self::Term(term)
    }
}

impl From<NamedNode> for TermMatcher {
    #[inline]
    fn from(node: NamedNode) -> Self {
        Self::Term(node.into())
    }
}

impl From<BlankNode> for TermMatcher {
    #[inline]
    fn from(node: BlankNode) -> Self {
        Self::Term(node.into())
    }
}

impl From<Literal> for TermMatcher {
    #[inline]
    fn from(literal: Literal) -> Self {
        Self::Term(literal.into())
    }
}

impl From<Subject> for TermMatcher {
    #[inline]
    fn from(subject: Subject) -> Self {
        Self::Term(subject.into())
    }
}

impl From<GraphName> for TermMatcher {
    #[inline]
    fn from(graph_name: GraphName) -> Self {
        match graph_name {
            GraphName::NamedNode(node) => node.into(),
            GraphName::BlankNode(node) => node.into(),
            GraphName::DefaultGraph => Self::DefaultGraph,
        }
    }
}
