#![doc(test(attr(deny(warnings))))]

//! The RDF data model of RDF Graph: terms, triples and quads.
//!
//! Every type implements [`Display`](std::fmt::Display) with its canonical N-Triples / N-Quads
//! form. The escaping rules of that form live in [`encode`].

mod codec;
mod error;
mod matcher;
mod rdf;
pub mod vocab;

pub use codec::*;
pub use error::*;
pub use matcher::*;
pub use rdf::*;

// Re-export some oxiri types.
pub use oxiri::{Iri, IriParseError};
