//! Arena-based document tree storage
//!
//! One arena per parse call. Nodes are never freed individually: removing a
//! node from the tree only unlinks it, and the whole arena is dropped when
//! the operation finishes.
//!
//! ## Memory Layout
//!
//! ```text
//! Arena: Vec<DomNode>
//!        [Node0][Node1][Node2]...
//!         ↑ 4-byte index, not 8-byte pointer
//! ```
//!
//! Every query walks the tree from the root, so unlinked nodes are
//! invisible even though they still occupy a slot.

use crate::error::{DomError, Result};
use crate::types::{Attribute, DomNode, NodeId, NodeType};

/// Arena allocator for document nodes
#[derive(Debug)]
pub struct DomArena {
    /// All nodes stored sequentially (cache-friendly)
    nodes: Vec<DomNode>,

    /// Root (document) node ID, if set
    root_id: Option<NodeId>,
}

impl DomArena {
    /// Create a new empty arena
    pub fn new() -> Self {
        Self::with_capacity(1024)
    }

    /// Create arena with specific capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            root_id: None,
        }
    }

    /// Add a node to the arena, returns its ID
    pub fn add_node(&mut self, mut node: DomNode) -> NodeId {
        let node_id = self.nodes.len() as NodeId;
        node.node_id = node_id;
        self.nodes.push(node);
        node_id
    }

    /// Get node by ID (immutable)
    pub fn get(&self, node_id: NodeId) -> Result<&DomNode> {
        self.nodes
            .get(node_id as usize)
            .ok_or(DomError::NodeNotFound(node_id))
    }

    /// Get node by ID (mutable)
    pub fn get_mut(&mut self, node_id: NodeId) -> Result<&mut DomNode> {
        self.nodes
            .get_mut(node_id as usize)
            .ok_or(DomError::NodeNotFound(node_id))
    }

    /// Set root node
    pub fn set_root(&mut self, node_id: NodeId) -> Result<()> {
        self.get(node_id)?;
        self.root_id = Some(node_id);
        Ok(())
    }

    /// Get root node ID
    pub fn root_id(&self) -> Option<NodeId> {
        self.root_id
    }

    /// Get root node
    pub fn root(&self) -> Result<&DomNode> {
        let root_id = self.root_id.ok_or(DomError::MissingElement("root"))?;
        self.get(root_id)
    }

    /// Total number of nodes, including unlinked ones
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if arena is empty
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Get children of a node
    pub fn children(&self, node_id: NodeId) -> Result<Vec<&DomNode>> {
        let node = self.get(node_id)?;
        node.children_ids
            .iter()
            .map(|&child_id| self.get(child_id))
            .collect()
    }

    /// Get parent of a node
    pub fn parent(&self, node_id: NodeId) -> Result<Option<&DomNode>> {
        let node = self.get(node_id)?;
        match node.parent_id {
            Some(parent_id) => Ok(Some(self.get(parent_id)?)),
            None => Ok(None),
        }
    }

    /// Traverse tree depth-first (iterative, no recursion)
    pub fn traverse_df<F>(&self, start_id: NodeId, mut visit: F) -> Result<()>
    where
        F: FnMut(&DomNode) -> Result<()>,
    {
        let mut stack = vec![start_id];

        while let Some(node_id) = stack.pop() {
            let node = self.get(node_id)?;
            visit(node)?;

            // Push children in reverse order (so they're visited left-to-right)
            for &child_id in node.children_ids.iter().rev() {
                stack.push(child_id);
            }
        }

        Ok(())
    }

    /// Find attached elements matching predicate, in tree order
    ///
    /// Like `querySelectorAll`, this does not look inside `<template>`
    /// contents.
    pub fn find_elements<F>(&self, predicate: F) -> Vec<NodeId>
    where
        F: Fn(&DomNode) -> bool,
    {
        let mut found = Vec::new();
        let Some(root_id) = self.root_id else {
            return found;
        };

        let mut stack = vec![root_id];
        while let Some(node_id) = stack.pop() {
            let Ok(node) = self.get(node_id) else {
                continue;
            };
            if node.is_element() && predicate(node) {
                found.push(node_id);
            }
            if node.is_tag("template") {
                continue;
            }
            stack.extend(node.children_ids.iter().rev().copied());
        }

        found
    }

    /// Find all attached elements by tag name
    pub fn find_by_tag(&self, tag: &str) -> Vec<NodeId> {
        self.find_elements(|node| node.is_tag(tag))
    }

    /// The `<html>` element: first element child of the document
    pub fn document_element(&self) -> Option<NodeId> {
        let root = self.root().ok()?;
        self.first_child_where(root, |child| child.is_element())
    }

    /// First `<head>` child of the document element
    pub fn head(&self) -> Option<NodeId> {
        let html = self.get(self.document_element()?).ok()?;
        self.first_child_where(html, |child| child.is_tag("head"))
    }

    /// First `<body>` (or `<frameset>`) child of the document element
    pub fn body(&self) -> Option<NodeId> {
        let html = self.get(self.document_element()?).ok()?;
        self.first_child_where(html, |child| {
            child.is_tag("body") || child.is_tag("frameset")
        })
    }

    fn first_child_where<F>(&self, parent: &DomNode, predicate: F) -> Option<NodeId>
    where
        F: Fn(&DomNode) -> bool,
    {
        parent
            .children_ids
            .iter()
            .copied()
            .find(|&id| self.get(id).map(&predicate).unwrap_or(false))
    }

    /// Create an unattached element with the given attributes
    pub fn create_element(&mut self, name: &str, attrs: &[(&str, &str)]) -> NodeId {
        let mut node = DomNode::element(name.to_ascii_lowercase());
        node.attributes = attrs
            .iter()
            .map(|&(name, value)| Attribute::new(name, value))
            .collect();
        self.add_node(node)
    }

    /// Create an unattached text node
    pub fn create_text(&mut self, text: &str) -> NodeId {
        self.add_node(DomNode::text(text))
    }

    /// Append `child` as the last child of `parent`, moving it if attached
    pub fn append_child(&mut self, parent_id: NodeId, child_id: NodeId) -> Result<()> {
        let parent = self.get(parent_id)?;
        if matches!(parent.node_type, NodeType::Text | NodeType::Comment) {
            return Err(DomError::InvalidNodeType {
                expected: "element or document".to_string(),
                actual: format!("{:?}", parent.node_type),
            });
        }
        self.get(child_id)?;

        // Refuse to create a cycle
        let mut cursor = Some(parent_id);
        while let Some(id) = cursor {
            if id == child_id {
                return Err(DomError::HierarchyRequest {
                    parent: parent_id,
                    child: child_id,
                });
            }
            cursor = self.get(id)?.parent_id;
        }

        self.detach(child_id)?;
        self.get_mut(parent_id)?.children_ids.push(child_id);
        self.get_mut(child_id)?.parent_id = Some(parent_id);
        Ok(())
    }

    /// Unlink a node (and its subtree) from its parent
    pub fn detach(&mut self, node_id: NodeId) -> Result<()> {
        let Some(parent_id) = self.get(node_id)?.parent_id else {
            return Ok(());
        };
        self.get_mut(parent_id)?
            .children_ids
            .retain(|id| *id != node_id);
        self.get_mut(node_id)?.parent_id = None;
        Ok(())
    }

    /// Concatenated data of all descendant text nodes (DOM `textContent`)
    pub fn text_content(&self, node_id: NodeId) -> Result<String> {
        let mut text = String::new();

        self.traverse_df(node_id, |node| {
            if node.is_text() {
                text.push_str(&node.node_value);
            }
            Ok(())
        })?;

        Ok(text)
    }

    /// Replace all children of a node with a single text node
    pub fn set_text_content(&mut self, node_id: NodeId, text: &str) -> Result<()> {
        let children = self.get(node_id)?.children_ids.clone();
        for child_id in children {
            self.detach(child_id)?;
        }
        if !text.is_empty() {
            let text_id = self.create_text(text);
            self.append_child(node_id, text_id)?;
        }
        Ok(())
    }

    /// Clear arena (reuse allocation)
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.root_id = None;
    }
}

impl Default for DomArena {
    fn default() -> Self {
        Self::new()
    }
}
