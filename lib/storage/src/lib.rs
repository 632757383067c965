#![doc(test(attr(deny(warnings))))]

//! Contains the in-memory quad store of RDF Graph.
//!
//! The primary type is the [`Graph`], which implements the [`QueryableGraph`] and
//! [`MutableGraph`] capabilities on top of a GSPO index.

mod graph;
pub(crate) mod index;
mod observer;
mod traits;

pub use graph::{Graph, Iter};
pub use observer::InsertObserver;
pub use traits::{MutableGraph, QueryableGraph};
