//! Per-unit documentation indices
//!
//! Each metadata unit gets one flat identifier → documentation map, built
//! once on first access and immutable afterwards. The registry owns every
//! per-unit index for the lifetime of the process; units never unload
//! mid-run.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use tracing::warn;

use crate::metadata::MetadataUnit;
use crate::xmldoc::{parse_doc_source, MemberDoc};

/// The documentation index for one metadata unit.
///
/// Append-only during construction, read-only once published; shared
/// references are safe to read concurrently.
#[derive(Debug, Default)]
pub struct DocIndex {
    map: HashMap<String, MemberDoc>,
    indexed: bool,
}

impl DocIndex {
    /// Build the index for a unit.
    ///
    /// A missing documentation source is the normal case: the unit is
    /// marked unindexed and every lookup misses. A malformed source is
    /// fatal for this unit only; the error is reported as a warning and
    /// the unit is likewise left unindexed.
    pub fn build(unit: &MetadataUnit) -> Self {
        let Some(source) = &unit.doc_source else {
            return Self::default();
        };

        match parse_doc_source(source) {
            Ok(map) => Self { map, indexed: true },
            Err(e) => {
                warn!(unit = %unit.name, error = %e, "documentation source unusable, unit treated as undocumented");
                Self::default()
            }
        }
    }

    /// Look up a member's documentation by canonical identifier
    pub fn get(&self, id: &str) -> Option<&MemberDoc> {
        self.map.get(id)
    }

    /// Whether this unit's documentation source was located and parsed.
    ///
    /// The renderer uses this to decide between a hyperlink and plain
    /// inline code for cross-references into the unit.
    pub fn is_indexed(&self) -> bool {
        self.indexed
    }

    /// Number of documented symbols
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Whether the index holds no entries
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

/// Registry of per-unit documentation indices.
///
/// Lifecycle per unit: empty → build on first access → read-only. The
/// build is idempotent and guarded with a double-checked write lock, so a
/// future parallel pipeline gets safe first-access for free; today's flow
/// is strictly sequential.
#[derive(Debug, Default)]
pub struct DocRegistry {
    units: RwLock<HashMap<String, Arc<DocIndex>>>,
}

impl DocRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// The index for a unit, building it on first access
    pub fn index_for(&self, unit: &MetadataUnit) -> Arc<DocIndex> {
        {
            let units = self.units.read().expect("registry lock poisoned");
            if let Some(index) = units.get(&unit.name) {
                return Arc::clone(index);
            }
        }

        let mut units = self.units.write().expect("registry lock poisoned");
        // Double-check after acquiring the write lock
        if let Some(index) = units.get(&unit.name) {
            return Arc::clone(index);
        }

        let index = Arc::new(DocIndex::build(unit));
        units.insert(unit.name.clone(), Arc::clone(&index));
        index
    }

    /// Look up a member's documentation in a unit, building the unit's
    /// index if this is the first access. Misses are `None`, never an
    /// error.
    pub fn get(&self, unit: &MetadataUnit, id: &str) -> Option<MemberDoc> {
        self.index_for(unit).get(id).cloned()
    }

    /// Whether a unit's documentation source was located and parsed
    pub fn is_indexed(&self, unit: &MetadataUnit) -> bool {
        self.index_for(unit).is_indexed()
    }
}
