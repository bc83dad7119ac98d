//! Arena-based DOM tree storage
//!
//! Nodes live in one `Vec` and refer to each other by index. No Rc/Arc, no
//! recursive ownership, and a `&DomNode` handed out by the arena is a plain
//! `'static` type that can be inspected through `&dyn Any`.
//!
//! ```text
//! Arena: Vec<DomNode>
//!        [Node0][Node1][Node2]...
//!         ↑ 4-byte index, not 8-byte pointer
//! ```

use crate::error::{DomError, Result};
use crate::types::{DomNode, NodeId, NodeType};
use ahash::AHashMap;

/// Arena allocator for DOM nodes
#[derive(Debug)]
pub struct DomArena {
    /// All nodes stored sequentially
    nodes: Vec<DomNode>,

    /// `id` attribute → first element carrying it
    id_index: AHashMap<String, NodeId>,

    /// Root node ID (if set)
    root_id: Option<NodeId>,
}

impl DomArena {
    pub fn new() -> Self {
        Self::with_capacity(1024) // typical page
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            id_index: AHashMap::new(),
            root_id: None,
        }
    }

    /// Add a node to the arena, returns its ID
    ///
    /// The node's `node_id` is overwritten with its arena index.
    pub fn add_node(&mut self, mut node: DomNode) -> NodeId {
        let node_id = self.nodes.len() as NodeId;
        node.node_id = node_id;
        if node.node_type == NodeType::Element {
            if let Some(id) = node.attributes.get("id") {
                self.id_index.entry(id.clone()).or_insert(node_id);
            }
        }
        self.nodes.push(node);
        node_id
    }

    pub fn get(&self, node_id: NodeId) -> Result<&DomNode> {
        self.nodes
            .get(node_id as usize)
            .ok_or(DomError::NodeNotFound(node_id))
    }

    pub fn get_mut(&mut self, node_id: NodeId) -> Result<&mut DomNode> {
        self.nodes
            .get_mut(node_id as usize)
            .ok_or(DomError::NodeNotFound(node_id))
    }

    /// Attach `child` as the last child of `parent`
    pub fn append_child(&mut self, parent_id: NodeId, child_id: NodeId) -> Result<()> {
        if parent_id == child_id {
            return Err(DomError::InvalidNodeType {
                expected: "distinct parent and child".to_string(),
                actual: format!("node {} appended to itself", child_id),
            });
        }
        let child = self.get(child_id)?;
        if child.node_type == NodeType::Document {
            return Err(DomError::InvalidNodeType {
                expected: "non-Document child".to_string(),
                actual: format!("{:?}", child.node_type),
            });
        }

        let parent = self.get(parent_id)?;
        if !matches!(
            parent.node_type,
            NodeType::Element | NodeType::Document | NodeType::DocumentFragment
        ) {
            return Err(DomError::InvalidNodeType {
                expected: "Element, Document or DocumentFragment".to_string(),
                actual: format!("{:?}", parent.node_type),
            });
        }

        // A node cannot move under its own descendant
        let mut ancestor = Some(parent_id);
        while let Some(node_id) = ancestor {
            if node_id == child_id {
                return Err(DomError::InvalidNodeType {
                    expected: "child outside the parent's ancestor chain".to_string(),
                    actual: format!("node {} is an ancestor of node {}", child_id, parent_id),
                });
            }
            ancestor = self.get(node_id)?.parent_id;
        }

        // Detach from the previous parent first
        let old_parent = self.get(child_id)?.parent_id;
        if let Some(old_parent) = old_parent {
            let old = self.get_mut(old_parent)?;
            old.children_ids.retain(|id| *id != child_id);
        }

        self.get_mut(parent_id)?.children_ids.push(child_id);
        self.get_mut(child_id)?.parent_id = Some(parent_id);
        Ok(())
    }

    /// Set an attribute, keeping the id index current
    pub fn set_attribute(&mut self, node_id: NodeId, name: &str, value: &str) -> Result<()> {
        let node = self.get_mut(node_id)?;
        if node.node_type != NodeType::Element {
            return Err(DomError::InvalidNodeType {
                expected: "Element".to_string(),
                actual: format!("{:?}", node.node_type),
            });
        }
        let previous = node.attributes.insert(name.to_string(), value.to_string());

        if name == "id" {
            if let Some(old_id) = previous {
                if self.id_index.get(&old_id) == Some(&node_id) {
                    self.id_index.remove(&old_id);
                }
            }
            self.id_index.entry(value.to_string()).or_insert(node_id);
        }
        Ok(())
    }

    /// Add a node and make it the root
    pub fn add_root(&mut self, node: DomNode) -> NodeId {
        let node_id = self.add_node(node);
        self.root_id = Some(node_id);
        node_id
    }

    /// Set root node
    pub fn set_root(&mut self, node_id: NodeId) -> Result<()> {
        self.get(node_id)?;
        self.root_id = Some(node_id);
        Ok(())
    }

    pub fn root_id(&self) -> Option<NodeId> {
        self.root_id
    }

    pub fn root(&self) -> Result<&DomNode> {
        let root_id = self
            .root_id
            .ok_or_else(|| DomError::CdpError("No root node set".to_string()))?;
        self.get(root_id)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DomNode> {
        self.nodes.iter()
    }

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

    /// Find element by ID attribute
    pub fn find_by_id(&self, id: &str) -> Option<NodeId> {
        self.id_index.get(id).copied()
    }
}

impl Default for DomArena {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn element(name: &str) -> DomNode {
        DomNode::new(0, NodeType::Element, name.to_string())
    }

    #[test]
    fn test_arena_basic() {
        let mut arena = DomArena::new();

        let first = arena.add_node(element("DIV"));
        let second = arena.add_node(element("SPAN"));
        assert_eq!(first, 0);
        assert_eq!(second, 1);

        let retrieved = arena.get(second).unwrap();
        assert_eq!(retrieved.node_name, "SPAN");
        assert_eq!(retrieved.node_id, 1);
        assert!(matches!(arena.get(7), Err(DomError::NodeNotFound(7))));
    }

    #[test]
    fn test_append_child_reparents() {
        let mut arena = DomArena::new();
        let a = arena.add_node(element("DIV"));
        let b = arena.add_node(element("DIV"));
        let child = arena.add_node(element("SPAN"));

        arena.append_child(a, child).unwrap();
        arena.append_child(b, child).unwrap();

        assert!(arena.get(a).unwrap().children_ids.is_empty());
        assert_eq!(arena.get(b).unwrap().children_ids.as_slice(), &[child]);
        assert_eq!(arena.parent(child).unwrap().unwrap().node_id, b);
    }

    #[test]
    fn test_append_child_to_text_fails() {
        let mut arena = DomArena::new();
        let text = arena.add_node(DomNode::new(0, NodeType::Text, "#text".to_string()));
        let child = arena.add_node(element("B"));

        assert!(matches!(
            arena.append_child(text, child),
            Err(DomError::InvalidNodeType { .. })
        ));
        assert!(arena.append_child(child, child).is_err());
    }

    #[test]
    fn test_append_child_rejects_cycles() {
        let mut arena = DomArena::new();
        let outer = arena.add_node(element("DIV"));
        let inner = arena.add_node(element("DIV"));
        arena.append_child(outer, inner).unwrap();

        assert!(matches!(
            arena.append_child(inner, outer),
            Err(DomError::InvalidNodeType { .. })
        ));
        assert_eq!(arena.get(outer).unwrap().parent_id, None);
        assert_eq!(arena.get(inner).unwrap().parent_id, Some(outer));
    }

    #[test]
    fn test_append_child_rejects_document() {
        let mut arena = DomArena::new();
        let root = arena.add_root(DomNode::new(0, NodeType::Document, "#document".to_string()));
        let html = arena.add_node(element("HTML"));
        arena.append_child(root, html).unwrap();

        assert!(matches!(
            arena.append_child(html, root),
            Err(DomError::InvalidNodeType { .. })
        ));

        let mut visited = 0;
        arena
            .traverse_df(root, |_| {
                visited += 1;
                Ok(())
            })
            .unwrap();
        assert_eq!(visited, 2);
    }

    #[test]
    fn test_changing_id_drops_old_key() {
        let mut arena = DomArena::new();
        let div = arena.add_node(element("DIV"));

        arena.set_attribute(div, "id", "old").unwrap();
        arena.set_attribute(div, "id", "new").unwrap();

        assert_eq!(arena.find_by_id("old"), None);
        assert_eq!(arena.find_by_id("new"), Some(div));
    }

    #[test]
    fn test_changing_id_keeps_other_owner() {
        let mut arena = DomArena::new();
        let first = arena.add_node(element("DIV"));
        let second = arena.add_node(element("DIV"));

        arena.set_attribute(first, "id", "shared").unwrap();
        arena.set_attribute(second, "id", "shared").unwrap();
        arena.set_attribute(second, "id", "other").unwrap();

        assert_eq!(arena.find_by_id("shared"), Some(first));
        assert_eq!(arena.find_by_id("other"), Some(second));
    }

    #[test]
    fn test_id_index_keeps_first() {
        let mut arena = DomArena::new();
        let first = arena.add_node(element("DIV"));
        let second = arena.add_node(element("DIV"));

        arena.set_attribute(first, "id", "main").unwrap();
        arena.set_attribute(second, "id", "main").unwrap();

        assert_eq!(arena.find_by_id("main"), Some(first));
        assert_eq!(arena.find_by_id("missing"), None);
    }

    #[test]
    fn test_traverse_df() {
        let mut arena = DomArena::new();

        let root = arena.add_node(element("DIV"));
        let child1 = arena.add_node(element("SPAN"));
        let child2 = arena.add_node(element("P"));
        arena.append_child(root, child1).unwrap();
        arena.append_child(root, child2).unwrap();

        let mut visited = Vec::new();
        arena
            .traverse_df(root, |node| {
                visited.push(node.node_name.clone());
                Ok(())
            })
            .unwrap();

        assert_eq!(visited, vec!["DIV", "SPAN", "P"]);
    }
}
