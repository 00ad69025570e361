//! HTML Serializer - Convert an arena tree back to markup
//!
//! Output follows the HTML fragment serialization algorithm, i.e. what a
//! browser returns from `outerHTML`:
//! - Void elements get no end tag
//! - Text under raw-text elements (`<style>`, `<script>`, ...) is verbatim
//! - Everything else is escaped
//!
//! The walk uses an explicit stack, so nesting depth is bounded by heap,
//! not by the call stack.

use crate::arena::DomArena;
use crate::error::{DomError, Result};
use crate::types::*;
use crate::utils;

/// Serializer configuration
#[derive(Debug, Clone)]
pub struct SerializerConfig {
    /// Line written before the root element by `serialize_document`
    pub doctype: String,
}

impl Default for SerializerConfig {
    fn default() -> Self {
        Self {
            doctype: "<!DOCTYPE html>".to_string(),
        }
    }
}

enum Step {
    Open(NodeId),
    Close(NodeId),
}

/// Document Tree Serializer
pub struct HtmlSerializer {
    config: SerializerConfig,
}

impl HtmlSerializer {
    pub fn new() -> Self {
        Self::with_config(SerializerConfig::default())
    }

    pub fn with_config(config: SerializerConfig) -> Self {
        Self { config }
    }

    /// Doctype line, a newline, then the `<html>` element
    ///
    /// The doctype is written whether or not the parsed input had one.
    pub fn serialize_document(&self, arena: &DomArena) -> Result<String> {
        let html_id = arena
            .document_element()
            .ok_or(DomError::MissingElement("html"))?;

        let mut output = String::with_capacity(4096);
        output.push_str(&self.config.doctype);
        output.push('\n');
        self.write_node(arena, html_id, &mut output)?;

        Ok(output)
    }

    /// Serialize a node and its subtree (`outerHTML` for elements)
    pub fn serialize_node(&self, arena: &DomArena, node_id: NodeId) -> Result<String> {
        let mut output = String::new();
        self.write_node(arena, node_id, &mut output)?;
        Ok(output)
    }

    fn write_node(&self, arena: &DomArena, start_id: NodeId, output: &mut String) -> Result<()> {
        let mut stack = vec![Step::Open(start_id)];

        while let Some(step) = stack.pop() {
            let node_id = match step {
                Step::Open(id) => id,
                Step::Close(id) => {
                    let node = arena.get(id)?;
                    output.push_str("</");
                    output.push_str(&node.node_name);
                    output.push('>');
                    continue;
                }
            };

            let node = arena.get(node_id)?;
            match node.node_type {
                NodeType::Element => {
                    output.push('<');
                    output.push_str(&node.node_name);
                    for attr in &node.attributes {
                        output.push(' ');
                        output.push_str(&attr.name);
                        output.push_str("=\"");
                        utils::escape_attribute(&attr.value, output);
                        output.push('"');
                    }
                    output.push('>');

                    if utils::is_void_element(&node.node_name) {
                        continue;
                    }

                    stack.push(Step::Close(node_id));
                    for &child_id in node.children_ids.iter().rev() {
                        stack.push(Step::Open(child_id));
                    }
                }
                NodeType::Text => {
                    let raw = arena
                        .parent(node_id)?
                        .and_then(|parent| parent.tag_name())
                        .is_some_and(utils::is_raw_text_element);
                    if raw {
                        output.push_str(&node.node_value);
                    } else {
                        utils::escape_text(&node.node_value, output);
                    }
                }
                NodeType::Comment => {
                    output.push_str("<!--");
                    output.push_str(&node.node_value);
                    output.push_str("-->");
                }
                NodeType::ProcessingInstruction => {
                    output.push_str("<?");
                    output.push_str(&node.node_name);
                    output.push(' ');
                    output.push_str(&node.node_value);
                    output.push('>');
                }
                NodeType::DocumentType => {
                    output.push_str("<!DOCTYPE ");
                    output.push_str(&node.node_name);
                    output.push('>');
                }
                NodeType::Document | NodeType::DocumentFragment => {
                    for &child_id in node.children_ids.iter().rev() {
                        stack.push(Step::Open(child_id));
                    }
                }
            }
        }

        Ok(())
    }
}

impl Default for HtmlSerializer {
    fn default() -> Self {
        Self::new()
    }
}
