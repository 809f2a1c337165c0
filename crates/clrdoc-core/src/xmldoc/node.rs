//! Documentation tree nodes

use std::fmt::Write;

/// One node of a documentation markup tree.
///
/// The tree is deliberately untyped beyond element/text: recognized tags
/// (`summary`, `param`, `see`, ...) are interpreted by the index and the
/// renderer, and everything else passes through verbatim so the markup
/// grammar can grow without failing a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocNode {
    /// A markup element: tag name, attributes in document order, children
    Element {
        tag: String,
        attrs: Vec<(String, String)>,
        children: Vec<DocNode>,
    },
    /// A run of raw text
    Text(String),
}

impl DocNode {
    /// Create a text node
    pub fn text(content: impl Into<String>) -> Self {
        DocNode::Text(content.into())
    }

    /// Create an element node without attributes
    pub fn element(tag: impl Into<String>, children: Vec<DocNode>) -> Self {
        DocNode::Element {
            tag: tag.into(),
            attrs: Vec::new(),
            children,
        }
    }

    /// Create an element node with attributes
    pub fn element_with_attrs(
        tag: impl Into<String>,
        attrs: Vec<(String, String)>,
        children: Vec<DocNode>,
    ) -> Self {
        DocNode::Element {
            tag: tag.into(),
            attrs,
            children,
        }
    }

    /// The element tag, or `None` for text nodes
    pub fn tag(&self) -> Option<&str> {
        match self {
            DocNode::Element { tag, .. } => Some(tag),
            DocNode::Text(_) => None,
        }
    }

    /// Look up an attribute value by name
    pub fn attr(&self, name: &str) -> Option<&str> {
        match self {
            DocNode::Element { attrs, .. } => attrs
                .iter()
                .find(|(k, _)| k == name)
                .map(|(_, v)| v.as_str()),
            DocNode::Text(_) => None,
        }
    }

    /// Child nodes (empty for text nodes)
    pub fn children(&self) -> &[DocNode] {
        match self {
            DocNode::Element { children, .. } => children,
            DocNode::Text(_) => &[],
        }
    }

    /// Concatenated text content of this subtree, markup stripped
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            DocNode::Text(t) => out.push_str(t),
            DocNode::Element { children, .. } => {
                for child in children {
                    child.collect_text(out);
                }
            }
        }
    }

    /// Whether this subtree carries any non-whitespace text
    pub fn has_text(&self) -> bool {
        match self {
            DocNode::Text(t) => !t.trim().is_empty(),
            DocNode::Element { children, .. } => children.iter().any(DocNode::has_text),
        }
    }

    /// Re-serialize this subtree as markup text.
    ///
    /// Used when the renderer meets an unrecognized tag: the construct
    /// degrades to its verbatim spelling instead of failing the run.
    pub fn to_markup(&self) -> String {
        let mut out = String::new();
        self.write_markup(&mut out);
        out
    }

    fn write_markup(&self, out: &mut String) {
        match self {
            DocNode::Text(t) => out.push_str(t),
            DocNode::Element {
                tag,
                attrs,
                children,
            } => {
                let _ = write!(out, "<{tag}");
                for (k, v) in attrs {
                    let _ = write!(out, " {k}=\"{v}\"");
                }
                if children.is_empty() {
                    out.push_str("/>");
                } else {
                    out.push('>');
                    for child in children {
                        child.write_markup(out);
                    }
                    let _ = write!(out, "</{tag}>");
                }
            }
        }
    }
}

/// The documentation attached to one symbol: the children of its `member`
/// element, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemberDoc {
    nodes: Vec<DocNode>,
}

impl MemberDoc {
    /// Wrap a list of nodes as one member's documentation
    pub fn new(nodes: Vec<DocNode>) -> Self {
        Self { nodes }
    }

    /// All top-level nodes
    pub fn nodes(&self) -> &[DocNode] {
        &self.nodes
    }

    /// First top-level element with the given tag
    pub fn section(&self, tag: &str) -> Option<&DocNode> {
        self.nodes.iter().find(|n| n.tag() == Some(tag))
    }

    /// The `summary` section, if present
    pub fn summary(&self) -> Option<&DocNode> {
        self.section("summary")
    }

    /// The `remarks` section, if present
    pub fn remarks(&self) -> Option<&DocNode> {
        self.section("remarks")
    }

    /// The `returns` section, if present
    pub fn returns(&self) -> Option<&DocNode> {
        self.section("returns")
    }

    /// All `example` sections, in document order
    pub fn examples(&self) -> impl Iterator<Item = &DocNode> {
        self.nodes.iter().filter(|n| n.tag() == Some("example"))
    }

    /// All `param` sections with their recorded names, in document order
    pub fn params(&self) -> impl Iterator<Item = (&str, &DocNode)> {
        self.nodes
            .iter()
            .filter(|n| n.tag() == Some("param"))
            .filter_map(|n| n.attr("name").map(|name| (name, n)))
    }

    /// All `typeparam` sections with their recorded names
    pub fn type_params(&self) -> impl Iterator<Item = (&str, &DocNode)> {
        self.nodes
            .iter()
            .filter(|n| n.tag() == Some("typeparam"))
            .filter_map(|n| n.attr("name").map(|name| (name, n)))
    }

    /// All `seealso` references, in document order
    pub fn see_also(&self) -> impl Iterator<Item = &str> {
        self.nodes
            .iter()
            .filter(|n| n.tag() == Some("seealso"))
            .filter_map(|n| n.attr("cref"))
    }

    /// The documentation for a named parameter. First match wins when a
    /// name is recorded twice.
    pub fn param(&self, name: &str) -> Option<&DocNode> {
        self.params().find(|(n, _)| *n == name).map(|(_, node)| node)
    }

    /// Whether this node defers its content to an ancestor.
    ///
    /// A defer-marked node carries no directly usable content; the
    /// inheritance resolver must substitute.
    pub fn is_deferred(&self) -> bool {
        self.nodes.iter().any(|n| n.tag() == Some("inheritdoc"))
    }

    /// Whether any section carries usable (non-whitespace, non-defer)
    /// content.
    pub fn has_content(&self) -> bool {
        self.nodes
            .iter()
            .any(|n| n.tag() != Some("inheritdoc") && n.has_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> MemberDoc {
        MemberDoc::new(vec![
            DocNode::element("summary", vec![DocNode::text("Does a thing.")]),
            DocNode::element_with_attrs(
                "param",
                vec![("name".into(), "count".into())],
                vec![DocNode::text("How many.")],
            ),
            DocNode::element_with_attrs(
                "param",
                vec![("name".into(), "count".into())],
                vec![DocNode::text("Duplicate, ignored.")],
            ),
            DocNode::element("returns", vec![DocNode::text("The result.")]),
        ])
    }

    #[test]
    fn test_section_lookup() {
        let doc = sample();
        assert!(doc.summary().is_some());
        assert!(doc.remarks().is_none());
        assert_eq!(doc.returns().unwrap().plain_text(), "The result.");
    }

    #[test]
    fn test_param_first_match_wins() {
        let doc = sample();
        let node = doc.param("count").unwrap();
        assert_eq!(node.plain_text(), "How many.");
    }

    #[test]
    fn test_defer_marker() {
        let doc = MemberDoc::new(vec![DocNode::element("inheritdoc", vec![])]);
        assert!(doc.is_deferred());
        assert!(!doc.has_content());
        assert!(!sample().is_deferred());
    }

    #[test]
    fn test_markup_round_trip() {
        let node = DocNode::element_with_attrs(
            "custom",
            vec![("id".into(), "x".into())],
            vec![DocNode::text("inner")],
        );
        assert_eq!(node.to_markup(), "<custom id=\"x\">inner</custom>");

        let empty = DocNode::element("br", vec![]);
        assert_eq!(empty.to_markup(), "<br/>");
    }
}
