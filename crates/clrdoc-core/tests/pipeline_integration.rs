//! Integration tests for the documentation pipeline (units through rendering)

use clrdoc_core::{
    Block, Context, Inline, MetadataUnit, MethodDef, RenderMode, Renderer, Resolver, Symbol,
    TypeDef,
};

fn zoo_unit() -> MetadataUnit {
    let source = r#"<doc>
        <assembly><name>Zoo</name></assembly>
        <members>
            <member name="T:Zoo.Dog">
                <summary>Works best with a <see cref="T:Tools.Hammer"/>, another
                <see cref="T:Tools.Hammer"/>, a <see cref="T:Bare.Widget"/>,
                and a <see cref="T:Missing.Thing"/>.</summary>
            </member>
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
    unit
}

fn tools_unit() -> MetadataUnit {
    let source = r#"<doc><members>
        <member name="T:Tools.Hammer"><summary>Hits things.</summary></member>
    </members></doc>"#;

    let mut unit = MetadataUnit::new("Tools").with_doc_source(source);
    unit.add_type(TypeDef::new("Tools.Hammer"));
    unit
}

fn build_context() -> Context {
    let mut ctx = Context::new();
    ctx.add_unit(zoo_unit());
    ctx.add_unit(tools_unit());

    // Metadata without a documentation source
    let mut bare = MetadataUnit::new("Bare");
    bare.add_type(TypeDef::new("Bare.Widget"));
    ctx.add_unit(bare);

    ctx
}

#[test]
fn test_inherited_summary_flows_through_the_pipeline() {
    let ctx = build_context();
    let mut renderer = Renderer::new(&ctx);

    let page = renderer.member_page(&Symbol::method("Zoo.Dog", "Speak", vec![]));

    assert_eq!(
        page.blocks[0],
        Block::Heading {
            level: 1,
            inlines: vec![Inline::Text("Speak".to_string())],
        }
    );
    assert_eq!(
        page.blocks[1],
        Block::Paragraph(vec![Inline::Badge("Method".to_string())])
    );
    assert_eq!(
        page.blocks[2],
        Block::Paragraph(vec![Inline::Text("Makes a sound.".to_string())])
    );
}

#[test]
fn test_cross_unit_references_classify_per_unit() {
    let ctx = build_context();
    let mut renderer = Renderer::new(&ctx);

    let page = renderer.member_page(&Symbol::ty("Zoo.Dog"));
    let Block::Paragraph(inlines) = &page.blocks[2] else {
        panic!("expected the summary paragraph");
    };

    // Documented in another unit: a hyperlink
    assert!(inlines
        .iter()
        .any(|i| matches!(i, Inline::Link { label, .. } if label == "Hammer")));
    // Known metadata, no documentation source: inline code of the name
    assert!(inlines
        .iter()
        .any(|i| matches!(i, Inline::Code(c) if c == "Widget")));
    // Nothing loaded matches: inline code of the raw identifier
    assert!(inlines
        .iter()
        .any(|i| matches!(i, Inline::Code(c) if c == "T:Missing.Thing")));

    // Two references to the hammer, one recorded link target
    assert_eq!(page.links.len(), 1);
    assert_eq!(page.links[0].id, "T:Tools.Hammer");
}

#[test]
fn test_malformed_unit_degrades_without_stopping_the_run() {
    let mut ctx = Context::new();

    let mut broken = MetadataUnit::new("Broken").with_doc_source("<doc><members>");
    broken.add_type(
        TypeDef::new("Broken.Widget").with_method(MethodDef::new("Spin", vec![])),
    );
    ctx.add_unit(broken);
    ctx.add_unit(zoo_unit());

    // The broken unit renders as undocumented
    let mut renderer = Renderer::new(&ctx);
    let page = renderer.member_page(&Symbol::method("Broken.Widget", "Spin", vec![]));
    assert_eq!(page.blocks.len(), 2);
    assert!(page.links.is_empty());

    // The healthy unit still resolves
    let resolver = Resolver::new(&ctx);
    let doc = resolver
        .resolve(&Symbol::method("Zoo.Dog", "Speak", vec![]))
        .expect("inherited documentation");
    let blocks = renderer.render(doc.summary(), RenderMode::Normal);
    assert_eq!(
        blocks,
        vec![Block::Paragraph(vec![Inline::Text(
            "Makes a sound.".to_string()
        )])]
    );
}

#[test]
fn test_document_model_serializes_for_downstream_encoders() {
    let ctx = build_context();
    let mut renderer = Renderer::new(&ctx);

    let page = renderer.member_page(&Symbol::method("Zoo.Dog", "Speak", vec![]));
    let json = serde_json::to_value(&page).unwrap();

    assert_eq!(json["blocks"][0]["heading"]["level"], 1);
    assert_eq!(json["blocks"][1]["paragraph"][0]["badge"], "Method");
}
