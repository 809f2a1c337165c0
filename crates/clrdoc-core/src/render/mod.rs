//! Rendering engine
//!
//! Turns resolved documentation trees into the style-agnostic document
//! model. Cross-references resolve back through the identifier scheme:
//! a target whose unit is indexed becomes a hyperlink, a known but
//! unindexed target degrades to inline code, and an unknown identifier is
//! echoed as inline code rather than failing the run.

mod model;

pub use model::{Block, Document, Inline, LinkTarget};

use std::collections::HashSet;

use tracing::warn;

use crate::context::{Context, CrossRef};
use crate::ident::{display_name, encode, page_name};
use crate::inherit::Resolver;
use crate::metadata::{Symbol, TypeDef};
use crate::xmldoc::DocNode;

/// Character budget for short-summary slots (table cells, member lists)
pub const SUMMARY_BUDGET: usize = 120;

/// How a fragment is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    /// Full block structure
    Normal,
    /// Structural decoration stripped, for embedding in table cells and
    /// short-summary slots
    TextOnly,
}

/// Renders documentation trees into documents.
///
/// Owns the per-document link-deduplication table; it is reset at the
/// start of each rendered document and lives only for that document.
pub struct Renderer<'a> {
    ctx: &'a Context,
    resolver: Resolver<'a>,
    seen_links: HashSet<String>,
    links: Vec<LinkTarget>,
}

impl<'a> Renderer<'a> {
    /// Create a renderer over a context
    pub fn new(ctx: &'a Context) -> Self {
        Self {
            ctx,
            resolver: Resolver::new(ctx),
            seen_links: HashSet::new(),
            links: Vec::new(),
        }
    }

    /// Reset the per-document link table
    pub fn begin_document(&mut self) {
        self.seen_links.clear();
        self.links.clear();
    }

    /// Render one documentation node into blocks.
    ///
    /// `None` renders as the empty fragment: unresolved documentation is
    /// the normal case, not an error.
    pub fn render(&mut self, node: Option<&DocNode>, mode: RenderMode) -> Vec<Block> {
        let Some(node) = node else {
            return Vec::new();
        };
        match mode {
            RenderMode::TextOnly => {
                let text = self.flatten(node);
                if text.is_empty() {
                    Vec::new()
                } else {
                    vec![Block::Paragraph(vec![Inline::Text(text)])]
                }
            }
            RenderMode::Normal => {
                let mut builder = BlockBuilder::default();
                self.render_node(node, &mut builder);
                builder.finish()
            }
        }
    }

    fn render_children(&mut self, node: &DocNode, builder: &mut BlockBuilder) {
        for child in node.children() {
            self.render_node(child, builder);
        }
    }

    fn render_node(&mut self, node: &DocNode, builder: &mut BlockBuilder) {
        let DocNode::Element { tag, .. } = node else {
            if let DocNode::Text(t) = node {
                builder.push_text(&collapse_ws(t));
            }
            return;
        };

        match tag.as_str() {
            // Section wrappers recurse; their children carry the content
            "summary" | "remarks" | "example" | "returns" | "value" | "param" | "typeparam" => {
                self.render_children(node, builder);
            }
            "para" => {
                let has_markup =
                    node.has_text() || node.children().iter().any(|c| c.tag().is_some());
                if has_markup {
                    builder.flush();
                    self.render_children(node, builder);
                    builder.flush();
                } else {
                    // An empty break element; avoid producing an empty block
                    builder.push(Inline::LineBreak);
                }
            }
            "code" => {
                let content = node.plain_text();
                builder.block(Block::CodeBlock(
                    content.trim_matches(|c| c == '\n' || c == '\r').to_string(),
                ));
            }
            "c" => builder.push(Inline::Code(node.plain_text().trim().to_string())),
            "paramref" | "typeparamref" => {
                let name = node
                    .attr("name")
                    .map(ToString::to_string)
                    .unwrap_or_else(|| node.plain_text());
                builder.push(Inline::Code(name));
            }
            "see" | "seealso" => {
                if let Some(cref) = node.attr("cref") {
                    let cref = cref.to_string();
                    let inline = self.cross_reference(&cref);
                    builder.push(inline);
                } else if let Some(word) = node.attr("langword") {
                    builder.push(Inline::Code(word.to_string()));
                } else {
                    builder.push_text(&collapse_ws(&node.plain_text()));
                }
            }
            // Defer markers reaching the renderer have nothing to show;
            // substitution is the resolver's job
            "inheritdoc" => {}
            other => {
                warn!(tag = other, "unrecognized markup tag, passing content through verbatim");
                builder.push_text(&node.to_markup());
            }
        }
    }

    /// Resolve a cross-reference target into an inline.
    ///
    /// Distinct link targets are recorded once per document, in first-use
    /// order, for reference-style emission by downstream encoders.
    pub fn cross_reference(&mut self, id: &str) -> Inline {
        match self.ctx.cross_ref(id) {
            CrossRef::Documented => {
                let label = display_name(id);
                let path = page_name(id);
                if self.seen_links.insert(id.to_string()) {
                    self.links.push(LinkTarget {
                        id: id.to_string(),
                        label: label.clone(),
                        path: path.clone(),
                    });
                }
                Inline::Link {
                    label,
                    target: path,
                }
            }
            CrossRef::Known => Inline::Code(display_name(id)),
            CrossRef::Unknown => Inline::Code(id.to_string()),
        }
    }

    /// Flatten a subtree to plain text: markup stripped, cross-references
    /// reduced to their display labels.
    fn flatten(&self, node: &DocNode) -> String {
        let mut out = String::new();
        self.flatten_into(node, &mut out);
        collapse_ws(&out).trim().to_string()
    }

    fn flatten_into(&self, node: &DocNode, out: &mut String) {
        match node {
            DocNode::Text(t) => out.push_str(t),
            DocNode::Element { tag, children, .. } => match tag.as_str() {
                "paramref" | "typeparamref" => {
                    if let Some(name) = node.attr("name") {
                        out.push_str(name);
                    }
                }
                "see" | "seealso" => {
                    if let Some(cref) = node.attr("cref") {
                        match self.ctx.cross_ref(cref) {
                            CrossRef::Documented | CrossRef::Known => {
                                out.push_str(&display_name(cref));
                            }
                            CrossRef::Unknown => out.push_str(cref),
                        }
                    } else if let Some(word) = node.attr("langword") {
                        out.push_str(word);
                    }
                }
                "para" => {
                    out.push(' ');
                    for child in children {
                        self.flatten_into(child, out);
                    }
                    out.push(' ');
                }
                "inheritdoc" => {}
                _ => {
                    for child in children {
                        self.flatten_into(child, out);
                    }
                }
            },
        }
    }

    /// A truncated text-only summary cell for a section node
    fn cell_text(&self, node: &DocNode) -> String {
        truncate(&self.flatten(node), SUMMARY_BUDGET)
    }

    /// Render a member's full page: heading, kind badge, summary,
    /// parameter tables, returns, examples, remarks, and see-also list.
    ///
    /// # Panics
    /// Panics for [`Symbol::Parameter`]: parameters have no page of their
    /// own.
    pub fn member_page(&mut self, symbol: &Symbol) -> Document {
        self.begin_document();
        let id = encode(symbol);
        let doc = self.resolver.resolve(symbol);

        let mut blocks = vec![
            Block::Heading {
                level: 1,
                inlines: vec![Inline::Text(display_name(id.as_str()))],
            },
            Block::Paragraph(vec![Inline::Badge(symbol.kind_label().to_string())]),
        ];

        if let Some(doc) = doc {
            blocks.extend(self.render(doc.summary(), RenderMode::Normal));

            let type_params: Vec<Vec<Vec<Inline>>> = doc
                .type_params()
                .map(|(name, node)| {
                    vec![
                        vec![Inline::Code(name.to_string())],
                        vec![Inline::Text(self.cell_text(node))],
                    ]
                })
                .collect();
            if !type_params.is_empty() {
                blocks.push(Block::Table {
                    header: vec!["Type parameter".to_string(), "Description".to_string()],
                    rows: type_params,
                });
            }

            let params: Vec<Vec<Vec<Inline>>> = doc
                .params()
                .map(|(name, node)| {
                    vec![
                        vec![Inline::Code(name.to_string())],
                        vec![Inline::Text(self.cell_text(node))],
                    ]
                })
                .collect();
            if !params.is_empty() {
                blocks.push(Block::Table {
                    header: vec!["Parameter".to_string(), "Description".to_string()],
                    rows: params,
                });
            }

            if let Some(returns) = doc.returns() {
                blocks.extend(self.labeled("Returns:", returns));
            }

            for example in doc.examples() {
                blocks.push(Block::Paragraph(vec![Inline::Bold("Example:".to_string())]));
                let rendered = {
                    let mut builder = BlockBuilder::default();
                    self.render_children(example, &mut builder);
                    builder.finish()
                };
                blocks.extend(rendered);
            }

            if let Some(remarks) = doc.remarks() {
                blocks.extend(self.render(Some(remarks), RenderMode::Normal));
            }

            let see_also: Vec<String> = doc.see_also().map(ToString::to_string).collect();
            if !see_also.is_empty() {
                let items = see_also
                    .iter()
                    .map(|cref| vec![self.cross_reference(cref)])
                    .collect();
                blocks.push(Block::Paragraph(vec![Inline::Bold("See also:".to_string())]));
                blocks.push(Block::List(items));
            }
        }

        Document {
            blocks,
            links: std::mem::take(&mut self.links),
        }
    }

    /// Render a type's full page: heading, badge, summary, remarks, and a
    /// table per member category with linked names and short summaries.
    pub fn type_page(&mut self, tydef: &TypeDef) -> Document {
        self.begin_document();
        let symbol = Symbol::Type {
            ty: tydef.ty.clone(),
        };
        let id = encode(&symbol);

        let badge = if tydef.is_interface { "Interface" } else { "Type" };
        let mut blocks = vec![
            Block::Heading {
                level: 1,
                inlines: vec![Inline::Text(display_name(id.as_str()))],
            },
            Block::Paragraph(vec![Inline::Badge(badge.to_string())]),
        ];

        if let Some(doc) = self.resolver.resolve(&symbol) {
            blocks.extend(self.render(doc.summary(), RenderMode::Normal));
            if let Some(remarks) = doc.remarks() {
                blocks.extend(self.render(Some(remarks), RenderMode::Normal));
            }
        }

        let mut sections: Vec<(&str, Vec<Symbol>)> = vec![
            ("Constructors", Vec::new()),
            ("Methods", Vec::new()),
            ("Properties", Vec::new()),
            ("Fields", Vec::new()),
            ("Events", Vec::new()),
        ];
        for member in tydef.member_symbols() {
            let slot = match member {
                Symbol::Constructor { .. } => 0,
                Symbol::Method { .. } => 1,
                Symbol::Property { .. } => 2,
                Symbol::Field { .. } => 3,
                Symbol::Event { .. } => 4,
                Symbol::Type { .. } | Symbol::Parameter { .. } => continue,
            };
            sections[slot].1.push(member);
        }

        for (title, members) in sections {
            if members.is_empty() {
                continue;
            }
            blocks.push(Block::Heading {
                level: 2,
                inlines: vec![Inline::Text(title.to_string())],
            });

            let mut rows = Vec::new();
            for member in members {
                let member_id = encode(&member);
                let summary = self
                    .resolver
                    .resolve(&member)
                    .and_then(|doc| doc.summary().map(|s| self.cell_text(s)))
                    .unwrap_or_default();
                let name_cell = vec![self.cross_reference(member_id.as_str())];
                let summary_cell = if summary.is_empty() {
                    Vec::new()
                } else {
                    vec![Inline::Text(summary)]
                };
                rows.push(vec![name_cell, summary_cell]);
            }
            blocks.push(Block::Table {
                header: vec!["Name".to_string(), "Summary".to_string()],
                rows,
            });
        }

        Document {
            blocks,
            links: std::mem::take(&mut self.links),
        }
    }

    /// Render a section with a bold label fused into its first paragraph
    fn labeled(&mut self, label: &str, node: &DocNode) -> Vec<Block> {
        let rendered = self.render(Some(node), RenderMode::Normal);
        let mut out = Vec::new();
        let mut iter = rendered.into_iter();
        match iter.next() {
            Some(Block::Paragraph(inlines)) => {
                let mut fused = vec![Inline::Bold(label.to_string()), Inline::Text(" ".to_string())];
                fused.extend(inlines);
                out.push(Block::Paragraph(fused));
            }
            Some(other) => {
                out.push(Block::Paragraph(vec![Inline::Bold(label.to_string())]));
                out.push(other);
            }
            None => {}
        }
        out.extend(iter);
        out
    }
}

/// Truncate to a character budget, appending an ellipsis when cut
pub fn truncate(text: &str, budget: usize) -> String {
    if text.chars().count() <= budget {
        text.to_string()
    } else {
        let mut out: String = text.chars().take(budget).collect();
        out.push('…');
        out
    }
}

/// Collapse whitespace runs to single spaces, keeping boundary spaces so
/// adjacent inline elements stay separated.
fn collapse_ws(text: &str) -> String {
    let body = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if body.is_empty() {
        return if text.is_empty() { body } else { " ".to_string() };
    }
    let mut out = String::with_capacity(body.len() + 2);
    if text.starts_with(char::is_whitespace) {
        out.push(' ');
    }
    out.push_str(&body);
    if text.ends_with(char::is_whitespace) {
        out.push(' ');
    }
    out
}

/// Accumulates inline runs and flushes them into trimmed paragraphs.
#[derive(Default)]
struct BlockBuilder {
    blocks: Vec<Block>,
    current: Vec<Inline>,
}

impl BlockBuilder {
    fn push(&mut self, inline: Inline) {
        self.current.push(inline);
    }

    fn push_text(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        if let Some(Inline::Text(last)) = self.current.last_mut() {
            if last.ends_with(' ') && text.starts_with(' ') {
                last.push_str(text.trim_start());
            } else {
                last.push_str(text);
            }
            return;
        }
        self.current.push(Inline::Text(text.to_string()));
    }

    fn flush(&mut self) {
        let mut inlines = std::mem::take(&mut self.current);

        // Trim the paragraph edges: leading/trailing whitespace and breaks
        loop {
            let keep = match inlines.first_mut() {
                Some(Inline::Text(t)) => {
                    *t = t.trim_start().to_string();
                    !t.is_empty()
                }
                Some(Inline::LineBreak) => false,
                _ => true,
            };
            if keep {
                break;
            }
            inlines.remove(0);
        }
        loop {
            let keep = match inlines.last_mut() {
                Some(Inline::Text(t)) => {
                    *t = t.trim_end().to_string();
                    !t.is_empty()
                }
                Some(Inline::LineBreak) => false,
                _ => true,
            };
            if keep {
                break;
            }
            inlines.pop();
        }

        if !inlines.is_empty() {
            self.blocks.push(Block::Paragraph(inlines));
        }
    }

    fn block(&mut self, block: Block) {
        self.flush();
        self.blocks.push(block);
    }

    fn finish(mut self) -> Vec<Block> {
        self.flush();
        self.blocks
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::{MetadataUnit, MethodDef, TypeRef};
    use crate::xmldoc::DocNode;

    fn zoo_context() -> Context {
        let source = r#"<doc><members>
            <member name="T:Zoo.Animal">
                <summary>A living creature. See <see cref="T:Zoo.Dog"/> and <see cref="T:Zoo.Dog"/>.</summary>
            </member>
            <member name="T:Zoo.Dog">
                <summary>Best friend of <see cref="T:Bare.Widget"/> and <see cref="T:Nowhere.Thing"/>.</summary>
            </member>
            <member name="M:Zoo.Animal.Speak">
                <summary>Makes a sound.</summary>
            </member>
            <member name="M:Zoo.Dog.Speak">
                <inheritdoc/>
            </member>
            <member name="M:Zoo.Dog.Fetch(System.Int32)">
                <summary>Fetches the stick.</summary>
                <param name="distance">How far to run, in meters, before giving up and coming back with or without the stick in question.</param>
                <returns>Whether the stick came back.</returns>
                <example><code>dog.Fetch(3)</code></example>
            </member>
        </members></doc>"#;

        let mut unit = MetadataUnit::new("Zoo").with_doc_source(source);
        unit.add_type(TypeDef::new("Zoo.Animal").with_method(MethodDef::new("Speak", vec![]).virtual_()));
        unit.add_type(
            TypeDef::new("Zoo.Dog")
                .with_base("Zoo.Animal")
                .with_method(MethodDef::new("Speak", vec![]).override_())
                .with_method(MethodDef::new(
                    "Fetch",
                    vec![TypeRef::named("System.Int32")],
                )),
        );

        // A unit with metadata but no documentation source
        let mut bare = MetadataUnit::new("Bare");
        bare.add_type(TypeDef::new("Bare.Widget"));

        let mut ctx = Context::new();
        ctx.add_unit(unit);
        ctx.add_unit(bare);
        ctx
    }

    #[test]
    fn test_indexed_reference_becomes_link() {
        let ctx = zoo_context();
        let mut renderer = Renderer::new(&ctx);
        let doc = ctx.doc_for(&Symbol::ty("Zoo.Animal")).unwrap();

        let blocks = renderer.render(doc.summary(), RenderMode::Normal);
        let Block::Paragraph(inlines) = &blocks[0] else {
            panic!("expected a paragraph");
        };
        assert!(inlines.iter().any(|i| matches!(
            i,
            Inline::Link { label, .. } if label == "Dog"
        )));
    }

    #[test]
    fn test_link_targets_deduplicated() {
        let ctx = zoo_context();
        let mut renderer = Renderer::new(&ctx);
        renderer.begin_document();
        let doc = ctx.doc_for(&Symbol::ty("Zoo.Animal")).unwrap();

        // Two references to Zoo.Dog in the summary; one table entry
        renderer.render(doc.summary(), RenderMode::Normal);
        assert_eq!(renderer.links.len(), 1);
        assert_eq!(renderer.links[0].id, "T:Zoo.Dog");
    }

    #[test]
    fn test_unindexed_and_unknown_references_degrade() {
        let ctx = zoo_context();
        let mut renderer = Renderer::new(&ctx);
        let doc = ctx.doc_for(&Symbol::ty("Zoo.Dog")).unwrap();

        let blocks = renderer.render(doc.summary(), RenderMode::Normal);
        let Block::Paragraph(inlines) = &blocks[0] else {
            panic!("expected a paragraph");
        };
        // Known but unindexed: display name as inline code, no link
        assert!(inlines
            .iter()
            .any(|i| matches!(i, Inline::Code(c) if c == "Widget")));
        // Unknown: the raw id as inline code
        assert!(inlines
            .iter()
            .any(|i| matches!(i, Inline::Code(c) if c == "T:Nowhere.Thing")));
        assert!(!inlines.iter().any(|i| matches!(
            i,
            Inline::Link { label, .. } if label == "Widget"
        )));
    }

    #[test]
    fn test_unknown_tag_passes_through() {
        let ctx = zoo_context();
        let mut renderer = Renderer::new(&ctx);

        let node = DocNode::element(
            "summary",
            vec![DocNode::element_with_attrs(
                "blink",
                vec![("rate".into(), "2".into())],
                vec![DocNode::text("surprise")],
            )],
        );
        let blocks = renderer.render(Some(&node), RenderMode::Normal);
        let Block::Paragraph(inlines) = &blocks[0] else {
            panic!("expected a paragraph");
        };
        let Inline::Text(text) = &inlines[0] else {
            panic!("expected verbatim text");
        };
        assert!(text.contains("surprise"));
        assert!(text.contains("<blink"));
    }

    #[test]
    fn test_para_with_content_splits_paragraphs() {
        let ctx = zoo_context();
        let mut renderer = Renderer::new(&ctx);

        let node = DocNode::element(
            "summary",
            vec![
                DocNode::text("First."),
                DocNode::element("para", vec![DocNode::text("Second.")]),
            ],
        );
        let blocks = renderer.render(Some(&node), RenderMode::Normal);
        assert_eq!(blocks.len(), 2);
        assert_eq!(
            blocks[1],
            Block::Paragraph(vec![Inline::Text("Second.".to_string())])
        );
    }

    #[test]
    fn test_empty_para_is_a_line_break() {
        let ctx = zoo_context();
        let mut renderer = Renderer::new(&ctx);

        let node = DocNode::element(
            "summary",
            vec![
                DocNode::text("First."),
                DocNode::element("para", vec![]),
                DocNode::text("Second."),
            ],
        );
        let blocks = renderer.render(Some(&node), RenderMode::Normal);
        assert_eq!(blocks.len(), 1);
        let Block::Paragraph(inlines) = &blocks[0] else {
            panic!("expected a paragraph");
        };
        assert!(inlines.contains(&Inline::LineBreak));
    }

    #[test]
    fn test_render_none_is_empty() {
        let ctx = zoo_context();
        let mut renderer = Renderer::new(&ctx);
        assert!(renderer.render(None, RenderMode::Normal).is_empty());
        assert!(renderer.render(None, RenderMode::TextOnly).is_empty());
    }

    #[test]
    fn test_text_only_strips_structure() {
        let ctx = zoo_context();
        let mut renderer = Renderer::new(&ctx);

        let node = DocNode::element(
            "summary",
            vec![
                DocNode::text("See "),
                DocNode::element_with_attrs(
                    "see",
                    vec![("cref".into(), "T:Zoo.Dog".into())],
                    vec![],
                ),
                DocNode::text(" for details."),
            ],
        );
        let blocks = renderer.render(Some(&node), RenderMode::TextOnly);
        assert_eq!(
            blocks,
            vec![Block::Paragraph(vec![Inline::Text(
                "See Dog for details.".to_string()
            )])]
        );
    }

    #[test]
    fn test_truncate_applies_budget_with_ellipsis() {
        assert_eq!(truncate("short", 10), "short");
        let cut = truncate("abcdefghij", 4);
        assert_eq!(cut, "abcd…");
        assert_eq!(cut.chars().count(), 5);
    }

    #[test]
    fn test_member_page_layout() {
        let ctx = zoo_context();
        let mut renderer = Renderer::new(&ctx);

        let symbol = Symbol::method("Zoo.Dog", "Fetch", vec![TypeRef::named("System.Int32")]);
        let page = renderer.member_page(&symbol);

        assert_eq!(
            page.blocks[0],
            Block::Heading {
                level: 1,
                inlines: vec![Inline::Text("Fetch".to_string())],
            }
        );
        assert_eq!(
            page.blocks[1],
            Block::Paragraph(vec![Inline::Badge("Method".to_string())])
        );
        // Parameter table present, cell text within the summary budget
        let table = page.blocks.iter().find_map(|b| match b {
            Block::Table { header, rows } if header[0] == "Parameter" => Some(rows),
            _ => None,
        });
        let rows = table.expect("parameter table");
        assert_eq!(rows[0][0], vec![Inline::Code("distance".to_string())]);
        let Inline::Text(cell) = &rows[0][1][0] else {
            panic!("expected text cell");
        };
        assert!(cell.chars().count() <= SUMMARY_BUDGET + 1);
        // Example code block survives
        assert!(page
            .blocks
            .iter()
            .any(|b| matches!(b, Block::CodeBlock(c) if c.contains("Fetch(3)"))));
    }

    #[test]
    fn test_langword_reference_is_inline_code() {
        let ctx = zoo_context();
        let mut renderer = Renderer::new(&ctx);

        let node = DocNode::element(
            "summary",
            vec![
                DocNode::text("Returns "),
                DocNode::element_with_attrs(
                    "see",
                    vec![("langword".into(), "null".into())],
                    vec![],
                ),
                DocNode::text(" on failure."),
            ],
        );
        let blocks = renderer.render(Some(&node), RenderMode::Normal);
        let Block::Paragraph(inlines) = &blocks[0] else {
            panic!("expected a paragraph");
        };
        assert!(inlines
            .iter()
            .any(|i| matches!(i, Inline::Code(c) if c == "null")));
    }

    #[test]
    fn test_member_page_omits_empty_sections() {
        let ctx = zoo_context();
        let mut renderer = Renderer::new(&ctx);

        // Speak carries only a summary: no tables, no labeled sections
        let page = renderer.member_page(&Symbol::method("Zoo.Dog", "Speak", vec![]));
        assert!(!page
            .blocks
            .iter()
            .any(|b| matches!(b, Block::Table { .. } | Block::CodeBlock(_) | Block::List(_))));
        assert!(!page.blocks.iter().any(|b| matches!(
            b,
            Block::Paragraph(inlines) if inlines.iter().any(|i| matches!(i, Inline::Bold(_)))
        )));
    }

    #[test]
    fn test_inherited_summary_renders_exactly() {
        let ctx = zoo_context();
        let mut renderer = Renderer::new(&ctx);

        // Dog.Speak defers to Animal.Speak; the rendered summary is the
        // ancestor's text, verbatim
        let page = renderer.member_page(&Symbol::method("Zoo.Dog", "Speak", vec![]));
        assert_eq!(
            page.blocks[2],
            Block::Paragraph(vec![Inline::Text("Makes a sound.".to_string())])
        );
    }

    #[test]
    fn test_type_page_member_tables() {
        let ctx = zoo_context();
        let mut renderer = Renderer::new(&ctx);

        let (_, tydef) = ctx.find_type("Zoo.Dog").unwrap();
        let page = renderer.type_page(tydef);

        let rows = page
            .blocks
            .iter()
            .find_map(|b| match b {
                Block::Table { header, rows } if header[0] == "Name" => Some(rows),
                _ => None,
            })
            .expect("methods table");
        assert_eq!(rows.len(), 2);
        // Member names link back through the identifier scheme
        assert!(matches!(&rows[0][0][0], Inline::Link { label, .. } if label == "Speak"));
        // The inherited summary fills the cell
        assert_eq!(
            rows[0][1],
            vec![Inline::Text("Makes a sound.".to_string())]
        );
        // Each member target lands in the link table once
        assert_eq!(page.links.len(), 2);
    }
}
