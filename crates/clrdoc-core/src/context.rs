//! Process-level context
//!
//! Owns the loaded metadata units, a type lookup table across them, and the
//! documentation registry. Everything downstream (resolver, renderer) takes
//! the context by reference; there is no ambient global state, so tests run
//! against fabricated units.

use std::collections::HashMap;
use std::sync::Arc;

use crate::ident::{encode, owner_type_name};
use crate::index::{DocIndex, DocRegistry};
use crate::metadata::{MetadataUnit, NamedType, Symbol, TypeDef};
use crate::xmldoc::MemberDoc;

/// The outcome of resolving a cross-reference target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CrossRef {
    /// The owner's unit is indexed: the target can be hyperlinked
    Documented,
    /// The owner is known metadata but its unit has no usable
    /// documentation source: a valid target in principle, not linkable
    Known,
    /// Nothing in the loaded metadata matches the identifier
    Unknown,
}

/// Process-level context: loaded units, type lookup, documentation registry.
#[derive(Debug, Default)]
pub struct Context {
    units: Vec<MetadataUnit>,
    /// Canonical dotted type name → (unit index, type index)
    type_lookup: HashMap<String, (usize, usize)>,
    registry: DocRegistry,
}

impl Context {
    /// Create an empty context
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a loaded unit. Units process strictly sequentially; the first
    /// definition wins when two units declare the same dotted type name.
    pub fn add_unit(&mut self, unit: MetadataUnit) {
        let unit_idx = self.units.len();
        for (type_idx, ty) in unit.types.iter().enumerate() {
            self.type_lookup
                .entry(ty.ty.dotted_name())
                .or_insert((unit_idx, type_idx));
        }
        self.units.push(unit);
    }

    /// All loaded units, in load order
    pub fn units(&self) -> &[MetadataUnit] {
        &self.units
    }

    /// The documentation registry
    pub fn registry(&self) -> &DocRegistry {
        &self.registry
    }

    /// Find a type definition by canonical dotted name
    pub fn find_type(&self, dotted: &str) -> Option<(&MetadataUnit, &TypeDef)> {
        let &(unit_idx, type_idx) = self.type_lookup.get(dotted)?;
        let unit = &self.units[unit_idx];
        Some((unit, &unit.types[type_idx]))
    }

    /// Find a type definition from a metadata name reference
    pub fn find_named(&self, name: &NamedType) -> Option<(&MetadataUnit, &TypeDef)> {
        self.find_type(&name.dotted_name())
    }

    /// The unit that declares a symbol's owning type
    pub fn unit_of(&self, symbol: &Symbol) -> Option<&MetadataUnit> {
        self.find_named(symbol.declaring_type()).map(|(unit, _)| unit)
    }

    /// The built documentation index for a symbol's unit
    pub fn index_of(&self, symbol: &Symbol) -> Option<Arc<DocIndex>> {
        self.unit_of(symbol)
            .map(|unit| self.registry.index_for(unit))
    }

    /// A symbol's raw indexed documentation, without inheritance
    /// substitution. Misses are `None`.
    pub fn doc_for(&self, symbol: &Symbol) -> Option<MemberDoc> {
        let unit = self.unit_of(symbol)?;
        self.registry.get(unit, encode(symbol).as_str())
    }

    /// Classify a raw cross-reference target for the renderer
    pub fn cross_ref(&self, id: &str) -> CrossRef {
        let Some(owner) = owner_type_name(id) else {
            return CrossRef::Unknown;
        };
        let Some((unit, _)) = self.find_type(&owner) else {
            return CrossRef::Unknown;
        };
        if self.registry.is_indexed(unit) {
            CrossRef::Documented
        } else {
            CrossRef::Known
        }
    }
}
