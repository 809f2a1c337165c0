//! Canonical identifier encoding
//!
//! Maps a symbol descriptor to the single canonical string that keys its
//! documentation entry. Encoding is pure and deterministic: within one
//! metadata unit, distinct symbols always produce distinct identifiers.

use std::fmt;

use crate::metadata::{NamedType, Symbol, TypeRef};

/// A canonical identifier string.
///
/// Kind-tagged: `T:` for types, `M:` for methods and constructors, `F:` for
/// fields, `P:` for properties. Events carry no kind letter; this asymmetry
/// is inherited from the upstream identifier scheme and indices depend on
/// the literal string, so it is preserved exactly.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CanonicalId(String);

impl CanonicalId {
    /// View the identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CanonicalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<CanonicalId> for String {
    fn from(id: CanonicalId) -> Self {
        id.0
    }
}

impl PartialEq<&str> for CanonicalId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Encode a symbol descriptor into its canonical identifier.
///
/// # Panics
/// Panics when given a [`Symbol::Parameter`]: parameters have no standalone
/// identifier and are addressed through their owning member's documentation
/// node. Reaching this panic is a caller bug, not an input condition.
pub fn encode(symbol: &Symbol) -> CanonicalId {
    let id = match symbol {
        Symbol::Type { ty } => format!("T:{}", named_key(ty, false)),
        Symbol::Method {
            owner,
            name,
            arity,
            params,
        } => format!(
            "M:{}.{}{}",
            named_key(owner, false),
            name,
            member_suffix(*arity, params)
        ),
        Symbol::Constructor { owner, params } => format!(
            "M:{}.#ctor{}",
            named_key(owner, false),
            member_suffix(0, params)
        ),
        Symbol::Field { owner, name } => format!("F:{}.{}", named_key(owner, false), name),
        Symbol::Property { owner, name } => format!("P:{}.{}", named_key(owner, false), name),
        Symbol::Event { owner, name } => format!("{}.{}", named_key(owner, false), name),
        Symbol::Parameter { .. } => {
            panic!("parameter symbols are addressed through their owning member and have no standalone identifier")
        }
    };
    CanonicalId(id)
}

/// Canonicalize a type reference.
///
/// `param_site` selects the parameter-site form: generic instantiations are
/// spelled out with brace-delimited arguments and by-ref referents gain a
/// trailing `@`. At a non-parameter site the name is truncated before the
/// argument list and by-ref marks are dropped.
pub fn type_key(ty: &TypeRef, param_site: bool) -> String {
    match ty {
        TypeRef::Named(named) => named_key(named, param_site),
        // Rank and bounds are discarded; arrays differing only in rank
        // collide to one identifier (upstream scheme ambiguity).
        TypeRef::Array { elem, .. } => type_key(elem, param_site),
        TypeRef::ByRef(referent) => {
            let key = type_key(referent, param_site);
            if param_site {
                format!("{key}@")
            } else {
                key
            }
        }
        TypeRef::Pointer(referent) => type_key(referent, param_site),
        TypeRef::TypeParam(n) => format!("`{n}"),
        TypeRef::MethodParam(n) => format!("``{n}"),
    }
}

fn named_key(named: &NamedType, param_site: bool) -> String {
    let dotted = named.dotted_name();
    if param_site && !named.args.is_empty() {
        let args: Vec<String> = named.args.iter().map(|a| type_key(a, true)).collect();
        format!("{dotted}{{{}}}", args.join(","))
    } else {
        dotted
    }
}

/// The member-name suffix shared by method identifiers and interface
/// dispatch keys: generic arity marker plus parenthesized parameter keys.
/// Zero parameters omit the parentheses entirely.
pub fn member_suffix(arity: u32, params: &[TypeRef]) -> String {
    let mut out = String::new();
    if arity > 0 {
        out.push_str(&format!("``{arity}"));
    }
    if !params.is_empty() {
        let keys: Vec<String> = params.iter().map(|p| type_key(p, true)).collect();
        out.push('(');
        out.push_str(&keys.join(","));
        out.push(')');
    }
    out
}

/// A declaring-type-agnostic signature key for a method: name, generic
/// arity, and parameter-site parameter keys. Used by interface dispatch maps.
pub fn signature_key(name: &str, arity: u32, params: &[TypeRef]) -> String {
    format!("{name}{}", member_suffix(arity, params))
}

/// Split a canonical identifier into its kind letter (empty for events) and
/// the remainder.
fn split_prefix(id: &str) -> (&str, &str) {
    match id.split_once(':') {
        Some((kind @ ("T" | "M" | "F" | "P" | "E"), rest)) => (kind, rest),
        _ => ("", id),
    }
}

/// Strip the overload suffix (parameter list and method arity marker) from
/// the member portion of an identifier.
fn strip_overload(rest: &str) -> &str {
    let rest = rest.split('(').next().unwrap_or(rest);
    rest.split("``").next().unwrap_or(rest)
}

/// The dotted name of the type a canonical identifier belongs to.
///
/// For a type identifier this is the type itself; for member identifiers it
/// is everything before the member name. Returns `None` when the identifier
/// has no recognizable owner (for example a bare name with no dots).
pub fn owner_type_name(id: &str) -> Option<String> {
    let (kind, rest) = split_prefix(id);
    let bare = strip_overload(rest);
    match kind {
        "T" => Some(bare.to_string()),
        "M" | "F" | "P" | "E" | "" => {
            let (owner, _) = bare.rsplit_once('.')?;
            Some(owner.to_string())
        }
        _ => None,
    }
}

/// A human-readable label for a canonical identifier, used for hyperlinks.
///
/// Strips the kind prefix and overload suffix and keeps the trailing name
/// segment; `#ctor` maps back to the constructor's type name.
pub fn display_name(id: &str) -> String {
    let (kind, rest) = split_prefix(id);
    let bare = strip_overload(rest);

    if kind == "T" {
        return bare.rsplit('.').next().unwrap_or(bare).to_string();
    }

    match bare.rsplit_once('.') {
        Some((owner, member)) if member == "#ctor" => {
            owner.rsplit('.').next().unwrap_or(owner).to_string()
        }
        Some((_, member)) => member.to_string(),
        None => bare.to_string(),
    }
}

/// The output page name for a canonical identifier: a sanitized slug safe
/// for downstream encoders to use as a file or anchor name.
pub fn page_name(id: &str) -> String {
    id.chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '.' || c == '-' {
                c
            } else {
                '-'
            }
        })
        .collect()
}
