//! Contains the GSPO index that enforces the uniqueness of stored quads.
//!
//! The index has four levels, ordered by graph name, subject, predicate, and object. Each level
//! is keyed by the canonical form of the respective component, and the leaves hold the stored
//! quad instances. Levels that become empty after a removal are pruned, so the number of leaves
//! is always the number of stored quads.

mod key;

pub use key::QuadKey;

use rdf_graph_model::Quad;
use rustc_hash::FxHashMap;
use std::collections::hash_map::Entry;
use std::sync::Arc;

type Level<T> = FxHashMap<String, T>;
type ObjectLevel = Level<Arc<Quad>>;
type PredicateLevel = Level<ObjectLevel>;
type SubjectLevel = Level<PredicateLevel>;

/// A four-level graph, subject, predicate, object index over quads.
#[derive(Clone, Debug, Default)]
pub struct GspoIndex {
    graphs: Level<SubjectLevel>,
}

impl GspoIndex {
    /// Creates a new empty [GspoIndex].
    #[cfg(test)]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the quad stored at `key`.
    pub fn get(&self, key: &QuadKey) -> Option<&Arc<Quad>> {
        self.graphs
            .get(&key.graph)?
            .get(&key.subject)?
            .get(&key.predicate)?
            .get(&key.object)
    }

    /// Returns true if a quad is stored at `key`.
    pub fn contains(&self, key: &QuadKey) -> bool {
        self.get(key).is_some()
    }

    /// Stores `quad` at `key`.
    ///
    /// Returns false and leaves the index unchanged if `key` is already occupied.
    pub fn insert(&mut self, key: QuadKey, quad: Arc<Quad>) -> bool {
        let objects = self
            .graphs
            .entry(key.graph)
            .or_default()
            .entry(key.subject)
            .or_default()
            .entry(key.predicate)
            .or_default();
        match objects.entry(key.object) {
            Entry::Occupied(_) => false,
            Entry::Vacant(entry) => {
                entry.insert(quad);
                true
            }
        }
    }

    /// Removes the quad stored at `key` and returns it.
    ///
    /// Every level is checked before it is traversed. Removing an absent key is a no-op.
    pub fn remove(&mut self, key: &QuadKey) -> Option<Arc<Quad>> {
        let subjects = self.graphs.get_mut(&key.graph)?;
        let predicates = subjects.get_mut(&key.subject)?;
        let objects = predicates.get_mut(&key.predicate)?;
        let removed = objects.remove(&key.object)?;

        if objects.is_empty() {
            predicates.remove(&key.predicate);
        }
        if predicates.is_empty() {
            subjects.remove(&key.subject);
        }
        if subjects.is_empty() {
            self.graphs.remove(&key.graph);
        }

        Some(removed)
    }

    /// Returns the number of stored quads (i.e., the number of leaves).
    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.graphs
            .values()
            .flat_map(FxHashMap::values)
            .flat_map(FxHashMap::values)
            .map(FxHashMap::len)
            .sum()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.graphs.is_empty()
    }
}
