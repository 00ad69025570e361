//! DOM Service - Main entry point for building a tree from markup
//!
//! This handles:
//! - HTML5 parsing with browser-grade error recovery (via `scraper`/html5ever)
//! - Conversion of the parsed tree into the arena
//!
//! Malformed input is never an error: unclosed tags, stray text and
//! misnested markup are repaired by the tree builder exactly as a browser
//! would. Parser complaints are only logged.

use crate::arena::DomArena;
use crate::error::{DomError, Result};
use crate::types::*;
use scraper::{Html, Node};
use tracing::debug;

/// Configuration for DOM service
#[derive(Debug, Clone)]
pub struct DomServiceConfig {
    /// Initial arena capacity (nodes)
    pub initial_capacity: usize,
    /// Log every recoverable parse error at debug level
    pub log_parse_errors: bool,
}

impl Default for DomServiceConfig {
    fn default() -> Self {
        Self {
            initial_capacity: 1024,
            log_parse_errors: false,
        }
    }
}

/// Main DOM service
pub struct DomService {
    config: DomServiceConfig,
    arena: DomArena,
}

impl DomService {
    /// Create new DOM service with default config
    pub fn new() -> Self {
        Self::with_config(DomServiceConfig::default())
    }

    /// Create DOM service with custom config
    pub fn with_config(config: DomServiceConfig) -> Self {
        let arena = DomArena::with_capacity(config.initial_capacity);
        Self { config, arena }
    }

    /// Get reference to internal arena
    pub fn arena(&self) -> &DomArena {
        &self.arena
    }

    /// Get mutable reference to internal arena
    pub fn arena_mut(&mut self) -> &mut DomArena {
        &mut self.arena
    }

    /// Parse a full HTML document and rebuild the arena from it
    ///
    /// The resulting tree always has `<html>`, `<head>` and `<body>` (or
    /// `<frameset>`), inserted by the parser when the input lacks them.
    /// Parsed nodes are stored in document order, so a node's id is also its
    /// position in a pre-order walk.
    pub fn parse_html(&mut self, html: &str) -> Result<NodeId> {
        let document = Html::parse_document(html);

        debug!(
            bytes = html.len(),
            parse_errors = document.errors.len(),
            "parsed html document"
        );
        if self.config.log_parse_errors {
            for error in &document.errors {
                debug!(%error, "recovered from parse error");
            }
        }

        self.arena.clear();

        let mut stack = vec![(document.tree.root(), None)];
        let mut root_id = None;

        while let Some((source, parent_id)) = stack.pop() {
            let mut node = convert_node(source.value());
            node.parent_id = parent_id;
            let node_id = self.arena.add_node(node);

            // Fresh nodes cannot form cycles, so link directly
            match parent_id {
                Some(parent_id) => self.arena.get_mut(parent_id)?.children_ids.push(node_id),
                None => root_id = Some(node_id),
            }

            let children: Vec<_> = source.children().collect();
            for child in children.into_iter().rev() {
                stack.push((child, Some(node_id)));
            }
        }

        let root_id = root_id.ok_or(DomError::MissingElement("document"))?;
        self.arena.set_root(root_id)?;

        debug!(nodes = self.arena.len(), "built document arena");
        Ok(root_id)
    }
}

impl Default for DomService {
    fn default() -> Self {
        Self::new()
    }
}

/// Map one parsed node onto an arena node (without links)
fn convert_node(source: &Node) -> DomNode {
    match source {
        Node::Document => DomNode::new(NodeType::Document, "#document"),
        Node::Fragment => DomNode::new(NodeType::DocumentFragment, "#document-fragment"),
        Node::Doctype(doctype) => DomNode::new(NodeType::DocumentType, doctype.name()),
        Node::Comment(comment) => DomNode::comment(&**comment),
        Node::Text(text) => DomNode::text(&**text),
        Node::Element(element) => {
            let mut node = DomNode::element(element.name());
            node.attributes = element
                .attrs
                .iter()
                .map(|(name, value)| {
                    Attribute::new(qualified_attr_name(&name.ns, &name.local), &**value)
                })
                .collect();
            node
        }
        Node::ProcessingInstruction(pi) => {
            let mut node = DomNode::new(NodeType::ProcessingInstruction, &*pi.target);
            node.node_value = pi.data.to_string();
            node
        }
    }
}

const XML_NS: &str = "http://www.w3.org/XML/1998/namespace";
const XMLNS_NS: &str = "http://www.w3.org/2000/xmlns/";
const XLINK_NS: &str = "http://www.w3.org/1999/xlink";

/// Serialized attribute name, as `outerHTML` writes it
///
/// The parser moves `xlink:`, `xml:` and `xmlns:` prefixes on foreign
/// elements into the namespace, leaving only the local name.
fn qualified_attr_name(ns: &str, local: &str) -> String {
    match ns {
        XML_NS => format!("xml:{local}"),
        XMLNS_NS if local == "xmlns" => local.to_string(),
        XMLNS_NS => format!("xmlns:{local}"),
        XLINK_NS => format!("xlink:{local}"),
        _ => local.to_string(),
    }
}
