//! Inherited documentation resolution
//!
//! A symbol whose documentation is defer-marked carries no usable content of
//! its own; the resolver walks the override chain and the implemented
//! interfaces to the nearest ancestor that actually documents the member.
//! Missing documentation anywhere along the way is the normal case, never an
//! error.

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use tracing::warn;

use crate::context::Context;
use crate::ident::{encode, signature_key};
use crate::metadata::{NamedType, Symbol, TypeDef, TypeRef};
use crate::xmldoc::MemberDoc;

/// Resolves the effective documentation for a symbol, substituting
/// defer-marked nodes with ancestor content.
pub struct Resolver<'a> {
    ctx: &'a Context,
    /// Interface dispatch maps, built on first use and reused:
    /// interface dotted name → signature key → method index
    dispatch_cache: RefCell<HashMap<String, Arc<HashMap<String, usize>>>>,
}

impl<'a> Resolver<'a> {
    /// Create a resolver over a context
    pub fn new(ctx: &'a Context) -> Self {
        Self {
            ctx,
            dispatch_cache: RefCell::new(HashMap::new()),
        }
    }

    /// The effective documentation for a symbol.
    ///
    /// Looks up the symbol's own entry first; when that entry defers to an
    /// ancestor, methods walk their override root and then the implemented
    /// interfaces (metadata enumeration order), and properties do the same
    /// through their accessor method. A parameter resolves through its
    /// owning member's node. Returns `None` when nothing documented is
    /// found anywhere.
    pub fn resolve(&self, symbol: &Symbol) -> Option<MemberDoc> {
        if let Symbol::Parameter { owner, name } = symbol {
            let owner_doc = self.resolve(owner)?;
            let node = owner_doc.param(name)?;
            return Some(MemberDoc::new(node.children().to_vec()));
        }

        let mut visited = HashSet::new();
        self.resolve_member(symbol, &mut visited)
    }

    fn resolve_member(&self, symbol: &Symbol, visited: &mut HashSet<String>) -> Option<MemberDoc> {
        let id = encode(symbol);
        if !visited.insert(id.as_str().to_string()) {
            warn!(id = %id, "cyclic deferred documentation, treated as unresolved");
            return None;
        }

        let found = self.ctx.doc_for(symbol)?;
        if !found.is_deferred() {
            return Some(found);
        }

        match symbol {
            Symbol::Method {
                owner,
                name,
                arity,
                params,
            } => self
                .from_override_root(owner, name, *arity, params, visited)
                .or_else(|| self.from_interfaces(owner, name, *arity, params, visited)),
            Symbol::Property { owner, name } => self.from_accessor(owner, name, visited),
            _ => {
                warn!(
                    id = %id,
                    "deferred documentation on a symbol kind with no substitution strategy"
                );
                Some(found)
            }
        }
    }

    /// Substitute from the override root: the topmost base-chain type that
    /// declares a matching signature. Only applies when the method is an
    /// override; a root declaration falls through to the interface search.
    fn from_override_root(
        &self,
        owner: &NamedType,
        name: &str,
        arity: u32,
        params: &[TypeRef],
        visited: &mut HashSet<String>,
    ) -> Option<MemberDoc> {
        let root = self.override_root(owner, name, arity, params)?;
        let symbol = Symbol::Method {
            owner: root,
            name: name.to_string(),
            arity,
            params: params.to_vec(),
        };
        self.resolve_member(&symbol, visited)
    }

    /// The topmost base-chain type declaring a matching method, when the
    /// method on `owner` is an override.
    fn override_root(
        &self,
        owner: &NamedType,
        name: &str,
        arity: u32,
        params: &[TypeRef],
    ) -> Option<NamedType> {
        let (_, tydef) = self.ctx.find_named(owner)?;
        let method = tydef.find_method(name, arity, params)?;
        if !method.is_override {
            return None;
        }

        let mut root = None;
        let mut current = tydef;
        let mut seen_bases = HashSet::new();
        while let Some(base_name) = &current.base {
            if !seen_bases.insert(base_name.dotted_name()) {
                // Malformed hierarchy; stop walking rather than loop
                break;
            }
            let Some((_, base_def)) = self.ctx.find_named(base_name) else {
                break;
            };
            if base_def.find_method(name, arity, params).is_some() {
                root = Some(base_def.ty.clone());
            }
            current = base_def;
        }
        root
    }

    /// Substitute from the first implemented interface (metadata
    /// enumeration order) whose dispatch map carries a matching signature
    /// and whose documentation has content.
    fn from_interfaces(
        &self,
        owner: &NamedType,
        name: &str,
        arity: u32,
        params: &[TypeRef],
        visited: &mut HashSet<String>,
    ) -> Option<MemberDoc> {
        let (_, tydef) = self.ctx.find_named(owner)?;
        let key = signature_key(name, arity, params);

        for iface_name in &tydef.interfaces {
            let Some((_, iface_def)) = self.ctx.find_named(iface_name) else {
                continue;
            };
            let map = self.dispatch_map(iface_def);
            let Some(&idx) = map.get(&key) else {
                continue;
            };
            let symbol = iface_def.method_symbol(&iface_def.methods[idx]);
            if let Some(doc) = self.resolve_member(&symbol, visited) {
                if doc.has_content() {
                    return Some(doc);
                }
            }
        }
        None
    }

    /// Property substitution: walk the accessor method's override chain,
    /// then the interfaces, re-deriving the corresponding property by name.
    fn from_accessor(
        &self,
        owner: &NamedType,
        name: &str,
        visited: &mut HashSet<String>,
    ) -> Option<MemberDoc> {
        let (_, tydef) = self.ctx.find_named(owner)?;
        let property = tydef.find_property(name)?;
        let accessor_name = property.accessor.as_deref()?;
        let accessor = tydef.find_method_named(accessor_name)?;

        if let Some(root) =
            self.override_root(owner, &accessor.name, accessor.arity, &accessor.params)
        {
            if let Some((_, root_def)) = self.ctx.find_named(&root) {
                if root_def.find_property(name).is_some() {
                    let symbol = Symbol::Property {
                        owner: root,
                        name: name.to_string(),
                    };
                    if let Some(doc) = self.resolve_member(&symbol, visited) {
                        return Some(doc);
                    }
                }
            }
        }

        let key = signature_key(&accessor.name, accessor.arity, &accessor.params);
        for iface_name in &tydef.interfaces {
            let Some((_, iface_def)) = self.ctx.find_named(iface_name) else {
                continue;
            };
            if !self.dispatch_map(iface_def).contains_key(&key) {
                continue;
            }
            if iface_def.find_property(name).is_none() {
                continue;
            }
            let symbol = Symbol::Property {
                owner: iface_def.ty.clone(),
                name: name.to_string(),
            };
            if let Some(doc) = self.resolve_member(&symbol, visited) {
                if doc.has_content() {
                    return Some(doc);
                }
            }
        }
        None
    }

    /// The dispatch map for an interface: signature key → method index.
    /// Built once per interface and reused across resolutions.
    fn dispatch_map(&self, iface: &TypeDef) -> Arc<HashMap<String, usize>> {
        let dotted = iface.ty.dotted_name();
        if let Some(map) = self.dispatch_cache.borrow().get(&dotted) {
            return Arc::clone(map);
        }

        let mut map = HashMap::new();
        for (idx, method) in iface.methods.iter().enumerate() {
            if method.is_ctor {
                continue;
            }
            map.entry(signature_key(&method.name, method.arity, &method.params))
                .or_insert(idx);
        }
        let map = Arc::new(map);
        self.dispatch_cache
            .borrow_mut()
            .insert(dotted, Arc::clone(&map));
        map
    }
}
