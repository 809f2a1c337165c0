//! Symbol descriptors for reflected members

use super::types::{NamedType, TypeRef};

/// A descriptor for a reflected symbol.
///
/// This is a closed set: the identifier encoder and the inheritance resolver
/// match exhaustively over it, so adding a kind is a compile-time check
/// rather than a runtime default branch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Symbol {
    /// A type definition or standalone type reference
    Type { ty: NamedType },
    /// A method, with its overload-discriminating signature
    Method {
        owner: NamedType,
        name: String,
        /// Number of generic parameters declared on the method itself
        arity: u32,
        /// Ordered parameter types
        params: Vec<TypeRef>,
    },
    /// An instance or static constructor
    Constructor {
        owner: NamedType,
        params: Vec<TypeRef>,
    },
    /// A field
    Field { owner: NamedType, name: String },
    /// A property
    Property { owner: NamedType, name: String },
    /// An event
    Event { owner: NamedType, name: String },
    /// A parameter of an owning member.
    ///
    /// Parameters have no standalone identifier: they are addressed through
    /// the owning member's documentation node.
    Parameter { owner: Box<Symbol>, name: String },
}

impl Symbol {
    /// Create a type symbol
    pub fn ty(name: impl Into<String>) -> Self {
        Symbol::Type {
            ty: NamedType::new(name),
        }
    }

    /// Create a method symbol without generic parameters
    pub fn method(owner: impl Into<String>, name: impl Into<String>, params: Vec<TypeRef>) -> Self {
        Symbol::Method {
            owner: NamedType::new(owner),
            name: name.into(),
            arity: 0,
            params,
        }
    }

    /// Create a generic method symbol
    pub fn generic_method(
        owner: impl Into<String>,
        name: impl Into<String>,
        arity: u32,
        params: Vec<TypeRef>,
    ) -> Self {
        Symbol::Method {
            owner: NamedType::new(owner),
            name: name.into(),
            arity,
            params,
        }
    }

    /// Create a constructor symbol
    pub fn constructor(owner: impl Into<String>, params: Vec<TypeRef>) -> Self {
        Symbol::Constructor {
            owner: NamedType::new(owner),
            params,
        }
    }

    /// Create a field symbol
    pub fn field(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Symbol::Field {
            owner: NamedType::new(owner),
            name: name.into(),
        }
    }

    /// Create a property symbol
    pub fn property(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Symbol::Property {
            owner: NamedType::new(owner),
            name: name.into(),
        }
    }

    /// Create an event symbol
    pub fn event(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Symbol::Event {
            owner: NamedType::new(owner),
            name: name.into(),
        }
    }

    /// Create a parameter symbol addressed through `owner`
    pub fn parameter(owner: Symbol, name: impl Into<String>) -> Self {
        Symbol::Parameter {
            owner: Box::new(owner),
            name: name.into(),
        }
    }

    /// The type that declares this symbol.
    ///
    /// For a type symbol this is the type itself; for a parameter it is the
    /// declaring type of the owning member.
    pub fn declaring_type(&self) -> &NamedType {
        match self {
            Symbol::Type { ty } => ty,
            Symbol::Method { owner, .. }
            | Symbol::Constructor { owner, .. }
            | Symbol::Field { owner, .. }
            | Symbol::Property { owner, .. }
            | Symbol::Event { owner, .. } => owner,
            Symbol::Parameter { owner, .. } => owner.declaring_type(),
        }
    }

    /// Display label for the symbol's kind (used for badges)
    pub fn kind_label(&self) -> &'static str {
        match self {
            Symbol::Type { .. } => "Type",
            Symbol::Method { .. } => "Method",
            Symbol::Constructor { .. } => "Constructor",
            Symbol::Field { .. } => "Field",
            Symbol::Property { .. } => "Property",
            Symbol::Event { .. } => "Event",
            Symbol::Parameter { .. } => "Parameter",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declaring_type_of_member() {
        let m = Symbol::method("Foo.Bar", "Run", vec![]);
        assert_eq!(m.declaring_type().dotted_name(), "Foo.Bar");
    }

    #[test]
    fn test_declaring_type_of_parameter() {
        let m = Symbol::method("Foo.Bar", "Run", vec![TypeRef::named("System.Int32")]);
        let p = Symbol::parameter(m, "count");
        assert_eq!(p.declaring_type().dotted_name(), "Foo.Bar");
    }
}
