//! Clrdoc Core - documentation engine for compiled assembly metadata
//!
//! This crate provides the core functionality:
//! - Metadata: read-only symbol descriptors and hierarchy edges
//! - Ident: canonical identifier encoding for the documentation scheme
//! - Xmldoc: documentation source trees and parsing
//! - Index: per-unit identifier → documentation maps with lazy build
//! - Inherit: deferred-documentation resolution over the hierarchy
//! - Render: the style-agnostic document model and rendering engine
//!
//! Loading binaries and documentation files from disk, and the concrete
//! output encodings that consume the document model, live in collaborating
//! crates; this core is pure data-in, data-out.

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Reflected metadata model - symbols, type references, units
pub mod metadata;

/// Canonical identifier encoding
pub mod ident;

/// Documentation source trees and parsing
pub mod xmldoc;

/// Per-unit documentation indices and the registry
pub mod index;

/// Inherited documentation resolution
pub mod inherit;

/// Document model and rendering engine
pub mod render;

/// Process-level context owning units and the registry
pub mod context;

/// Convenience re-export of the context
pub use context::{Context, CrossRef};

/// Convenience re-export of the metadata model
pub use metadata::{
    EventDef, FieldDef, MetadataUnit, MethodDef, NamedType, PropertyDef, Symbol, TypeDef, TypeRef,
};

/// Convenience re-export of identifier encoding
pub use ident::{display_name, encode, page_name, type_key, CanonicalId};

/// Convenience re-export of the documentation tree
pub use xmldoc::{parse_doc_source, DocNode, DocSourceError, MemberDoc};

/// Convenience re-export of the index layer
pub use index::{DocIndex, DocRegistry};

/// Convenience re-export of the resolver
pub use inherit::Resolver;

/// Convenience re-export of the rendering engine
pub use render::{Block, Document, Inline, LinkTarget, RenderMode, Renderer};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_exists() {
        assert!(!VERSION.is_empty());
    }

    /// End to end: a unit with a documented virtual method and an override
    /// marked as inherited renders the ancestor's summary verbatim.
    #[test]
    fn test_inherited_documentation_end_to_end() {
        let source = r#"<doc>
            <assembly><name>Zoo</name></assembly>
            <members>
                <member name="T:Zoo.Animal"><summary>A living creature.</summary></member>
                <member name="M:Zoo.Animal.Speak"><summary>Makes a sound.</summary></member>
                <member name="M:Zoo.Dog.Speak"><inheritdoc/></member>
            </members>
        </doc>"#;

        let mut unit = MetadataUnit::new("Zoo").with_doc_source(source);
        unit.add_type(
            TypeDef::new("Zoo.Animal").with_method(MethodDef::new("Speak", vec![]).virtual_()),
        );
        unit.add_type(
            TypeDef::new("Zoo.Dog")
                .with_base("Zoo.Animal")
                .with_method(MethodDef::new("Speak", vec![]).override_()),
        );

        let mut ctx = Context::new();
        ctx.add_unit(unit);

        let resolver = Resolver::new(&ctx);
        let doc = resolver
            .resolve(&Symbol::method("Zoo.Dog", "Speak", vec![]))
            .expect("inherited documentation");

        let mut renderer = Renderer::new(&ctx);
        let blocks = renderer.render(doc.summary(), RenderMode::Normal);
        assert_eq!(
            blocks,
            vec![Block::Paragraph(vec![Inline::Text(
                "Makes a sound.".to_string()
            )])]
        );
    }
}
