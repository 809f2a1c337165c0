//! Style-agnostic document model
//!
//! The ordered block operations handed to downstream output encoders
//! (markdown, hypertext, ...). Everything here is plain data: the model
//! serializes so encoders and tests can consume it without touching the
//! engine.

use serde::Serialize;

/// An inline span within a block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Inline {
    /// Plain text
    Text(String),
    /// Inline code
    Code(String),
    /// Bold text
    Bold(String),
    /// A short kind label (rendered as a badge or tag by encoders)
    Badge(String),
    /// A hyperlink to another symbol's page
    Link { label: String, target: String },
    /// A forced line break within a paragraph
    LineBreak,
}

/// One block-level operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Block {
    /// A section heading
    Heading { level: u8, inlines: Vec<Inline> },
    /// A paragraph of inline content
    Paragraph(Vec<Inline>),
    /// A preformatted code block
    CodeBlock(String),
    /// A table with a header row; cells are inline runs
    Table {
        header: Vec<String>,
        rows: Vec<Vec<Vec<Inline>>>,
    },
    /// An unordered list; items are inline runs
    List(Vec<Vec<Inline>>),
}

/// A deduplicated link target recorded while rendering one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkTarget {
    /// Canonical identifier of the target symbol
    pub id: String,
    /// Display label
    pub label: String,
    /// Output page path (sanitized slug, extension left to the encoder)
    pub path: String,
}

/// A rendered document: ordered blocks plus the distinct link targets they
/// reference, each recorded once in first-use order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Document {
    pub blocks: Vec<Block>,
    pub links: Vec<LinkTarget>,
}
