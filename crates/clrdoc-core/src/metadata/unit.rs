//! Metadata units - one compiled binary's reflected definitions

use super::symbol::Symbol;
use super::types::{NamedType, TypeRef};

/// One compiled binary's reflected type definitions plus its optional
/// paired documentation source.
///
/// Units are produced by the loader collaborator at load time and are
/// read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct MetadataUnit {
    /// Unit (assembly) name, unique within a run
    pub name: String,
    /// Reflected type definitions
    pub types: Vec<TypeDef>,
    /// Raw text of the paired documentation source, if one was located
    pub doc_source: Option<String>,
}

impl MetadataUnit {
    /// Create an empty unit
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            types: Vec::new(),
            doc_source: None,
        }
    }

    /// Attach the raw documentation source text
    #[must_use]
    pub fn with_doc_source(mut self, source: impl Into<String>) -> Self {
        self.doc_source = Some(source.into());
        self
    }

    /// Add a type definition
    pub fn add_type(&mut self, ty: TypeDef) {
        self.types.push(ty);
    }
}

/// A reflected type definition.
///
/// `base` and `interfaces` are the hierarchy edges: read-only adjacency
/// derived from metadata at load time, with interfaces kept in metadata
/// enumeration order.
#[derive(Debug, Clone)]
pub struct TypeDef {
    /// The type itself (name as metadata spells it, no arguments)
    pub ty: NamedType,
    /// Base type, if any
    pub base: Option<NamedType>,
    /// Implemented interfaces, in metadata enumeration order
    pub interfaces: Vec<NamedType>,
    /// Whether this definition is itself an interface
    pub is_interface: bool,
    /// Declared methods (constructors included, flagged)
    pub methods: Vec<MethodDef>,
    /// Declared properties
    pub properties: Vec<PropertyDef>,
    /// Declared fields
    pub fields: Vec<FieldDef>,
    /// Declared events
    pub events: Vec<EventDef>,
}

impl TypeDef {
    /// Create a type definition with no members
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            ty: NamedType::new(name),
            base: None,
            interfaces: Vec::new(),
            is_interface: false,
            methods: Vec::new(),
            properties: Vec::new(),
            fields: Vec::new(),
            events: Vec::new(),
        }
    }

    /// Set the base type
    #[must_use]
    pub fn with_base(mut self, base: impl Into<String>) -> Self {
        self.base = Some(NamedType::new(base));
        self
    }

    /// Add an implemented interface (enumeration order is preserved)
    #[must_use]
    pub fn with_interface(mut self, name: impl Into<String>) -> Self {
        self.interfaces.push(NamedType::new(name));
        self
    }

    /// Mark this definition as an interface
    #[must_use]
    pub fn as_interface(mut self) -> Self {
        self.is_interface = true;
        self
    }

    /// Add a method
    #[must_use]
    pub fn with_method(mut self, method: MethodDef) -> Self {
        self.methods.push(method);
        self
    }

    /// Add a property
    #[must_use]
    pub fn with_property(mut self, property: PropertyDef) -> Self {
        self.properties.push(property);
        self
    }

    /// Add a field
    #[must_use]
    pub fn with_field(mut self, name: impl Into<String>) -> Self {
        self.fields.push(FieldDef { name: name.into() });
        self
    }

    /// Add an event
    #[must_use]
    pub fn with_event(mut self, name: impl Into<String>) -> Self {
        self.events.push(EventDef { name: name.into() });
        self
    }

    /// Find a declared method by name, generic arity, and parameter types
    pub fn find_method(&self, name: &str, arity: u32, params: &[TypeRef]) -> Option<&MethodDef> {
        self.methods
            .iter()
            .find(|m| m.name == name && m.arity == arity && m.params == params)
    }

    /// Find a declared method by name only (first match)
    pub fn find_method_named(&self, name: &str) -> Option<&MethodDef> {
        self.methods.iter().find(|m| m.name == name)
    }

    /// Find a declared property by name
    pub fn find_property(&self, name: &str) -> Option<&PropertyDef> {
        self.properties.iter().find(|p| p.name == name)
    }

    /// Build the symbol descriptor for a declared method
    pub fn method_symbol(&self, method: &MethodDef) -> Symbol {
        if method.is_ctor {
            Symbol::Constructor {
                owner: self.ty.clone(),
                params: method.params.clone(),
            }
        } else {
            Symbol::Method {
                owner: self.ty.clone(),
                name: method.name.clone(),
                arity: method.arity,
                params: method.params.clone(),
            }
        }
    }

    /// Build the symbol descriptor for a declared property
    pub fn property_symbol(&self, property: &PropertyDef) -> Symbol {
        Symbol::Property {
            owner: self.ty.clone(),
            name: property.name.clone(),
        }
    }

    /// Symbol descriptors for every declared member, in declaration order
    pub fn member_symbols(&self) -> Vec<Symbol> {
        let mut symbols = Vec::new();
        for m in &self.methods {
            symbols.push(self.method_symbol(m));
        }
        for p in &self.properties {
            symbols.push(self.property_symbol(p));
        }
        for f in &self.fields {
            symbols.push(Symbol::Field {
                owner: self.ty.clone(),
                name: f.name.clone(),
            });
        }
        for e in &self.events {
            symbols.push(Symbol::Event {
                owner: self.ty.clone(),
                name: e.name.clone(),
            });
        }
        symbols
    }
}

/// A reflected method definition
#[derive(Debug, Clone)]
pub struct MethodDef {
    /// Method name (`.ctor` is not used here; see `is_ctor`)
    pub name: String,
    /// Number of generic parameters declared on the method
    pub arity: u32,
    /// Ordered parameter types
    pub params: Vec<TypeRef>,
    /// Declared virtual (or an interface slot)
    pub is_virtual: bool,
    /// Overrides a base-chain declaration
    pub is_override: bool,
    /// This method is a constructor
    pub is_ctor: bool,
}

impl MethodDef {
    /// Create a non-virtual method
    pub fn new(name: impl Into<String>, params: Vec<TypeRef>) -> Self {
        Self {
            name: name.into(),
            arity: 0,
            params,
            is_virtual: false,
            is_override: false,
            is_ctor: false,
        }
    }

    /// Create a constructor
    pub fn ctor(params: Vec<TypeRef>) -> Self {
        Self {
            name: String::new(),
            arity: 0,
            params,
            is_virtual: false,
            is_override: false,
            is_ctor: true,
        }
    }

    /// Set the generic arity
    #[must_use]
    pub fn with_arity(mut self, arity: u32) -> Self {
        self.arity = arity;
        self
    }

    /// Mark as a virtual declaration
    #[must_use]
    pub fn virtual_(mut self) -> Self {
        self.is_virtual = true;
        self
    }

    /// Mark as an override of a base declaration
    #[must_use]
    pub fn override_(mut self) -> Self {
        self.is_virtual = true;
        self.is_override = true;
        self
    }
}

/// A reflected property definition.
///
/// `accessor` names the get (or, for set-only properties, set) accessor
/// method declared on the same type; the inheritance resolver walks the
/// accessor's override chain to re-derive base and interface properties.
#[derive(Debug, Clone)]
pub struct PropertyDef {
    /// Property name
    pub name: String,
    /// Name of the accessor method on the declaring type
    pub accessor: Option<String>,
}

impl PropertyDef {
    /// Create a property without a recorded accessor
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            accessor: None,
        }
    }

    /// Record the accessor method name
    #[must_use]
    pub fn with_accessor(mut self, accessor: impl Into<String>) -> Self {
        self.accessor = Some(accessor.into());
        self
    }
}

/// A reflected field definition
#[derive(Debug, Clone)]
pub struct FieldDef {
    /// Field name
    pub name: String,
}

/// A reflected event definition
#[derive(Debug, Clone)]
pub struct EventDef {
    /// Event name
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_method_discriminates_overloads() {
        let ty = TypeDef::new("Foo.Bar")
            .with_method(MethodDef::new("Run", vec![]))
            .with_method(MethodDef::new("Run", vec![TypeRef::named("System.Int32")]));

        assert!(ty.find_method("Run", 0, &[]).is_some());
        assert!(ty
            .find_method("Run", 0, &[TypeRef::named("System.Int32")])
            .is_some());
        assert!(ty
            .find_method("Run", 0, &[TypeRef::named("System.String")])
            .is_none());
    }

    #[test]
    fn test_ctor_maps_to_constructor_symbol() {
        let ty = TypeDef::new("Foo.Bar")
            .with_method(MethodDef::ctor(vec![TypeRef::named("System.String")]));
        let sym = ty.method_symbol(&ty.methods[0]);
        assert_eq!(sym.kind_label(), "Constructor");
    }

    #[test]
    fn test_member_symbols_order() {
        let ty = TypeDef::new("Foo.Bar")
            .with_method(MethodDef::new("Run", vec![]))
            .with_property(PropertyDef::new("Speed"))
            .with_field("count")
            .with_event("Changed");

        let symbols = ty.member_symbols();
        assert_eq!(symbols.len(), 4);
        assert_eq!(symbols[0].kind_label(), "Method");
        assert_eq!(symbols[3].kind_label(), "Event");
    }
}
