//! Type references as they appear in reflected metadata

/// A reference to a type, as recorded in a member signature or a
/// type definition.
///
/// Shapes mirror what the metadata reader produces: named types (possibly
/// generic instantiations), arrays, by-ref and pointer wrappers, and
/// positional generic parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeRef {
    /// A named type, possibly nested and possibly carrying generic arguments.
    Named(NamedType),
    /// An array of an element type. The rank is recorded but identifier
    /// encoding discards it (a known ambiguity of the upstream scheme).
    Array { elem: Box<TypeRef>, rank: u32 },
    /// A by-ref (managed reference) to a referent type.
    ByRef(Box<TypeRef>),
    /// An unmanaged pointer to a referent type.
    Pointer(Box<TypeRef>),
    /// A generic parameter declared on a type, by declaration position.
    TypeParam(u32),
    /// A generic parameter declared on a method, by declaration position.
    MethodParam(u32),
}

impl TypeRef {
    /// Create a reference to a plain named type
    pub fn named(name: impl Into<String>) -> Self {
        TypeRef::Named(NamedType::new(name))
    }

    /// Create a reference to a generic instantiation
    pub fn generic(name: impl Into<String>, args: Vec<TypeRef>) -> Self {
        TypeRef::Named(NamedType::with_args(name, args))
    }

    /// Create a single-dimensional array reference
    pub fn array(elem: TypeRef) -> Self {
        TypeRef::Array {
            elem: Box::new(elem),
            rank: 1,
        }
    }

    /// Create an array reference with an explicit rank
    pub fn array_of_rank(elem: TypeRef, rank: u32) -> Self {
        TypeRef::Array {
            elem: Box::new(elem),
            rank,
        }
    }

    /// Create a by-ref reference
    pub fn by_ref(referent: TypeRef) -> Self {
        TypeRef::ByRef(Box::new(referent))
    }

    /// Create a pointer reference
    pub fn pointer(referent: TypeRef) -> Self {
        TypeRef::Pointer(Box::new(referent))
    }
}

/// A named type reference.
///
/// `name` is the fully-qualified name exactly as metadata spells it: it may
/// carry arity markers (`` List`1 ``) and source-specific nesting separators
/// (`Outer+Inner` or `Outer/Inner`). [`NamedType::dotted_name`] produces the
/// canonical dotted form used by the identifier scheme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedType {
    /// Fully-qualified name as recorded in metadata
    pub name: String,
    /// Generic arguments when this reference is an instantiation
    pub args: Vec<TypeRef>,
}

impl NamedType {
    /// Create a named type without generic arguments
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            args: Vec::new(),
        }
    }

    /// Create a named type with generic arguments
    pub fn with_args(name: impl Into<String>, args: Vec<TypeRef>) -> Self {
        Self {
            name: name.into(),
            args,
        }
    }

    /// The canonical dotted name: nesting separators normalized to `.`,
    /// arity markers stripped.
    pub fn dotted_name(&self) -> String {
        let mut out = String::with_capacity(self.name.len());
        let mut chars = self.name.chars().peekable();

        while let Some(c) = chars.next() {
            match c {
                '+' | '/' => out.push('.'),
                '`' => {
                    // Arity marker: one or two backticks followed by digits
                    while chars.peek() == Some(&'`') {
                        chars.next();
                    }
                    while chars.peek().is_some_and(char::is_ascii_digit) {
                        chars.next();
                    }
                }
                _ => out.push(c),
            }
        }

        out
    }

    /// The simple (unqualified) name: last dotted segment, arity stripped
    pub fn simple_name(&self) -> String {
        let dotted = self.dotted_name();
        dotted
            .rsplit('.')
            .next()
            .unwrap_or(dotted.as_str())
            .to_string()
    }
}
