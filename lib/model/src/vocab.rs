//! IRIs of the vocabularies the term model depends on.

pub mod rdf {
    //! [RDF](https://www.w3.org/TR/rdf11-concepts/) vocabulary.

    /// The datatype of language-tagged string literals.
    pub const LANG_STRING: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#langString";
}

pub mod xsd {
    //! [XML Schema](https://www.w3.org/TR/xmlschema11-2/) datatypes.

    /// The default datatype of literals without a language tag.
    pub const STRING: &str = "http://www.w3.org/2001/XMLSchema#string";
}
