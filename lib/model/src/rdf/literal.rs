use crate::vocab::{rdf, xsd};
use crate::{EncodedStr, NamedNode, RdfNode, Term, TermKind};
use std::fmt;

/// An RDF [literal](https://www.w3.org/TR/rdf11-concepts/#dfn-literal).
///
/// A literal always carries a datatype. Language-tagged literals have the datatype
/// `rdf:langString` and literals created without a datatype default to `xsd:string`. Both
/// defaults are omitted from the canonical form:
/// ```
/// use rdf_graph_model::{Literal, NamedNode};
///
/// assert_eq!("\"foo\"", Literal::new_simple_literal("foo").to_string());
/// assert_eq!("\"foo\"@en", Literal::new_language_tagged_literal("foo", "en").to_string());
/// assert_eq!(
///     "\"1\"^^<http://www.w3.org/2001/XMLSchema#integer>",
///     Literal::new_typed_literal(
///         "1",
///         NamedNode::new_unchecked("http://www.w3.org/2001/XMLSchema#integer")
///     )
///     .to_string()
/// );
/// ```
#[derive(Eq, PartialEq, Debug, Clone, Hash)]
pub struct Literal {
    value: String,
    language: Option<String>,
    datatype: NamedNode,
}

impl Literal {
    /// Builds a literal from an optional language tag and an optional datatype.
    ///
    /// A non-empty `language` takes precedence and forces the datatype `rdf:langString`.
    /// Otherwise, `datatype` is used as given, falling back to `xsd:string`.
    pub fn new(
        value: impl Into<String>,
        language: Option<&str>,
        datatype: Option<NamedNode>,
    ) -> Self {
        match (language.filter(|language| !language.is_empty()), datatype) {
            (Some(language), _) => Self::new_language_tagged_literal(value, language),
            (None, Some(datatype)) => Self::new_typed_literal(value, datatype),
            (None, None) => Self::new_simple_literal(value),
        }
    }

    /// Builds an RDF [simple literal](https://www.w3.org/TR/rdf11-concepts/#dfn-simple-literal).
    #[inline]
    pub fn new_simple_literal(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            language: None,
            datatype: NamedNode::new_unchecked(xsd::STRING),
        }
    }

    /// Builds an RDF [literal](https://www.w3.org/TR/rdf11-concepts/#dfn-literal) with a
    /// [datatype](https://www.w3.org/TR/rdf11-concepts/#dfn-datatype-iri).
    #[inline]
    pub fn new_typed_literal(value: impl Into<String>, datatype: impl Into<NamedNode>) -> Self {
        Self {
            value: value.into(),
            language: None,
            datatype: datatype.into(),
        }
    }

    /// Builds an RDF [language-tagged string](https://www.w3.org/TR/rdf11-concepts/#dfn-language-tagged-string).
    ///
    /// A non-empty language tag is stored verbatim. An empty tag builds a simple literal.
    #[inline]
    pub fn new_language_tagged_literal(
        value: impl Into<String>,
        language: impl Into<String>,
    ) -> Self {
        let language = language.into();
        if language.is_empty() {
            return Self::new_simple_literal(value);
        }
        Self {
            value: value.into(),
            language: Some(language),
            datatype: NamedNode::new_unchecked(rdf::LANG_STRING),
        }
    }

    /// The literal [language tag](https://www.w3.org/TR/rdf11-concepts/#dfn-language-tag) if
    /// it is a [language-tagged string](https://www.w3.org/TR/rdf11-concepts/#dfn-language-tagged-string).
    #[inline]
    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    /// The literal [datatype](https://www.w3.org/TR/rdf11-concepts/#dfn-datatype-iri).
    #[inline]
    pub fn datatype(&self) -> &NamedNode {
        &self.datatype
    }

    /// Returns true if the datatype is one of the defaults that the canonical form omits.
    fn has_implicit_datatype(&self) -> bool {
        self.datatype == *xsd::STRING || self.datatype == *rdf::LANG_STRING
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\"", EncodedStr(&self.value))?;
        if let Some(language) = &self.language {
            write!(f, "@{language}")
        } else if self.has_implicit_datatype() {
            Ok(())
        } else {
            write!(f, "^^{}", self.datatype)
        }
    }
}

impl RdfNode for Literal {
    fn kind(&self) -> TermKind {
        TermKind::Literal
    }

    /// The literal [lexical form](https://www.w3.org/TR/rdf11-concepts/#dfn-lexical-form).
    fn value(&self) -> &str {
        &self.value
    }

    fn equals_term(&self, term: &Term) -> bool {
        matches!(term, Term::Literal(other) if other == self)
    }
}

impl<'a> From<&'a str> for Literal {
    #[inline]
    fn from(value: &'a str) -> Self {
        Self::new_simple_literal(value)
    }
}

impl From<String> for Literal {
    #[inline]
    fn from(value: String) -> Self {
        Self::new_simple_literal(value)
    }
}
