use crate::Term;
use regex::Regex;
use std::fmt;

/// The kind of an RDF term.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TermKind {
    NamedNode,
    BlankNode,
    Literal,
}

impl TermKind {
    /// Returns the name of the interface implemented by terms of this kind.
    pub fn interface_name(self) -> &'static str {
        match self {
            TermKind::NamedNode => "NamedNode",
            TermKind::BlankNode => "BlankNode",
            TermKind::Literal => "Literal",
        }
    }
}

impl fmt::Display for TermKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.interface_name())
    }
}

/// The capabilities shared by all RDF terms.
///
/// The canonical string form of a term is its [`Display`](fmt::Display) implementation. The
/// comparison methods of this trait are the typed entry points used by
/// [`TermMatcher`](crate::TermMatcher):
///
/// - [`RdfNode::equals_value`] compares the raw nominal value, without any escaping.
/// - [`RdfNode::matches_pattern`] tests the nominal value against a regular expression.
/// - [`RdfNode::equals_term`] compares all fields of two terms of the same kind. Terms of
///   different kinds are never equal.
pub trait RdfNode: fmt::Display {
    /// Returns the kind of this term.
    fn kind(&self) -> TermKind;

    /// Returns the nominal value of the term: the IRI, the blank node identifier, or the lexical
    /// value of a literal.
    fn value(&self) -> &str;

    /// Returns true if `term` has the same kind as `self` and all of its fields are equal.
    fn equals_term(&self, term: &Term) -> bool;

    /// Returns true if `value` is exactly the nominal value of this term.
    fn equals_value(&self, value: &str) -> bool {
        self.value() == value
    }

    /// Returns true if `pattern` matches the nominal value of this term.
    fn matches_pattern(&self, pattern: &Regex) -> bool {
        pattern.is_match(self.value())
    }
}
