//! Documentation source parsing
//!
//! Turns the raw XML text of a unit's documentation source into per-symbol
//! node trees. The caller hands over the text; no file I/O happens here.

use std::collections::HashMap;

use sxd_document::dom::{ChildOfElement, ChildOfRoot, Element};
use sxd_document::parser;
use thiserror::Error;

use super::node::{DocNode, MemberDoc};

/// A structurally invalid documentation source.
///
/// Fatal for the affected metadata unit only: the unit is reported as
/// undocumented and other units continue processing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DocSourceError {
    #[error("documentation source is not well-formed XML: {0}")]
    Xml(String),

    #[error("documentation source has no <members> element")]
    MissingMembers,
}

/// Parse a documentation source into its flat key → node map.
///
/// Expects the upstream layout: a `doc` root with a `members` child holding
/// one `member` element per documented symbol, keyed by the `name`
/// attribute. `member` elements without a `name` attribute are skipped.
pub fn parse_doc_source(source: &str) -> Result<HashMap<String, MemberDoc>, DocSourceError> {
    let package = parser::parse(source).map_err(|e| DocSourceError::Xml(e.to_string()))?;
    let document = package.as_document();

    let root = document
        .root()
        .children()
        .into_iter()
        .find_map(|child| match child {
            ChildOfRoot::Element(e) => Some(e),
            _ => None,
        })
        .ok_or(DocSourceError::MissingMembers)?;

    let members = find_members(root).ok_or(DocSourceError::MissingMembers)?;

    let mut map = HashMap::new();
    for child in members.children() {
        let ChildOfElement::Element(member) = child else {
            continue;
        };
        if member.name().local_part() != "member" {
            continue;
        }
        let Some(name) = member.attribute("name").map(|a| a.value().to_string()) else {
            continue;
        };
        let nodes = convert_children(member);
        // First definition wins on duplicate keys
        map.entry(name).or_insert_with(|| MemberDoc::new(nodes));
    }

    Ok(map)
}

/// Locate the `members` element: either the root itself or a direct child
/// of a `doc` root.
fn find_members(root: Element<'_>) -> Option<Element<'_>> {
    if root.name().local_part() == "members" {
        return Some(root);
    }
    root.children().into_iter().find_map(|child| match child {
        ChildOfElement::Element(e) if e.name().local_part() == "members" => Some(e),
        _ => None,
    })
}

fn convert_children(element: Element<'_>) -> Vec<DocNode> {
    let mut nodes = Vec::new();
    for child in element.children() {
        match child {
            ChildOfElement::Element(e) => nodes.push(convert_element(e)),
            ChildOfElement::Text(t) => {
                let text = t.text();
                // Drop pure indentation between sections; keep mixed content
                if !text.trim().is_empty() {
                    nodes.push(DocNode::Text(text.to_string()));
                }
            }
            _ => {}
        }
    }
    nodes
}

fn convert_element(element: Element<'_>) -> DocNode {
    let tag = element.name().local_part().to_string();
    let attrs = element
        .attributes()
        .into_iter()
        .map(|a| (a.name().local_part().to_string(), a.value().to_string()))
        .collect();

    let mut children = Vec::new();
    for child in element.children() {
        match child {
            ChildOfElement::Element(e) => children.push(convert_element(e)),
            ChildOfElement::Text(t) => children.push(DocNode::Text(t.text().to_string())),
            _ => {}
        }
    }

    DocNode::Element {
        tag,
        attrs,
        children,
    }
}
