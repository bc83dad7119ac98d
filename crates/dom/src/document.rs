//! Document - node factory and owner of the arena
//!
//! This handles:
//! - Creating element, text, comment and fragment nodes
//! - Building trees (append, attributes)
//! - Lookups by id and tag
//! - Hydrating a tree from a CDP `DOM.getDocument` response

use crate::arena::DomArena;
use crate::error::{DomError, Result};
use crate::types::*;
use serde_json::Value;
use std::collections::HashMap;
use tracing::debug;

/// Configuration for a document
#[derive(Debug, Clone)]
pub struct DocumentConfig {
    /// Initial arena capacity
    pub capacity: usize,
    /// Store element names in ASCII upper case, as HTML documents do
    pub uppercase_tag_names: bool,
}

impl Default for DocumentConfig {
    fn default() -> Self {
        Self {
            capacity: 1024,
            uppercase_tag_names: true,
        }
    }
}

/// An HTML document
#[derive(Debug)]
pub struct Document {
    config: DocumentConfig,
    arena: DomArena,
}

impl Document {
    /// Create new empty document with default config
    pub fn new() -> Self {
        Self::with_config(DocumentConfig::default())
    }

    /// Create document with custom config
    pub fn with_config(config: DocumentConfig) -> Self {
        let mut arena = DomArena::with_capacity(config.capacity);
        arena.add_root(DomNode::new(0, NodeType::Document, "#document".to_string()));
        Self { config, arena }
    }

    pub fn config(&self) -> &DocumentConfig {
        &self.config
    }

    pub fn arena(&self) -> &DomArena {
        &self.arena
    }

    /// The `#document` node (or the root of a hydrated CDP tree)
    pub fn document_node(&self) -> Result<&DomNode> {
        self.arena.root()
    }

    pub fn node(&self, node_id: NodeId) -> Result<&DomNode> {
        self.arena.get(node_id)
    }

    /// Create a detached element.
    ///
    /// Any name that is not rejected becomes an element; names outside the
    /// standard tag set still produce elements (custom or unknown ones).
    pub fn create_element(&mut self, local_name: &str) -> Result<NodeId> {
        validate_element_name(local_name)?;

        let node_name = if self.config.uppercase_tag_names {
            local_name.to_ascii_uppercase()
        } else {
            local_name.to_string()
        };

        let node_id = self
            .arena
            .add_node(DomNode::new(0, NodeType::Element, node_name));
        debug!(node_id, local_name, "created element");
        Ok(node_id)
    }

    pub fn create_text_node(&mut self, data: &str) -> NodeId {
        self.create_character_data(NodeType::Text, data)
    }

    pub fn create_comment(&mut self, data: &str) -> NodeId {
        self.create_character_data(NodeType::Comment, data)
    }

    pub fn create_document_fragment(&mut self) -> NodeId {
        self.create_character_data(NodeType::DocumentFragment, "")
    }

    fn create_character_data(&mut self, node_type: NodeType, data: &str) -> NodeId {
        let name = node_type.fixed_node_name().unwrap_or_default();
        let mut node = DomNode::new(0, node_type, name.to_string());
        node.node_value = data.to_string();
        self.arena.add_node(node)
    }

    pub fn append_child(&mut self, parent_id: NodeId, child_id: NodeId) -> Result<()> {
        self.arena.append_child(parent_id, child_id)
    }

    pub fn set_attribute(&mut self, node_id: NodeId, name: &str, value: &str) -> Result<()> {
        self.arena.set_attribute(node_id, name, value)
    }

    /// First element given this id, attached to the tree or not
    pub fn get_element_by_id(&self, id: &str) -> Option<&DomNode> {
        self.arena
            .find_by_id(id)
            .and_then(|node_id| self.arena.get(node_id).ok())
    }

    /// Elements under the root whose tag matches `name` ignoring ASCII case,
    /// in tree order
    pub fn get_elements_by_tag_name(&self, name: &str) -> Result<Vec<&DomNode>> {
        let root_id = self.document_node()?.node_id;
        let mut found = Vec::new();
        self.arena.traverse_df(root_id, |node| {
            if node.is_element() && node.node_name.eq_ignore_ascii_case(name) {
                found.push(node.node_id);
            }
            Ok(())
        })?;
        found.into_iter().map(|node_id| self.arena.get(node_id)).collect()
    }

    /// Build a document from a CDP `DOM.getDocument` response
    ///
    /// Input format:
    /// ```json
    /// {
    ///   "root": {
    ///     "nodeId": 1,
    ///     "nodeType": 9,
    ///     "nodeName": "#document",
    ///     "children": [...]
    ///   }
    /// }
    /// ```
    pub fn from_cdp(cdp_response: &Value) -> Result<Self> {
        let root = cdp_response
            .get("root")
            .ok_or_else(|| DomError::CdpError("Missing 'root' in CDP response".to_string()))?;

        let mut document = Self {
            config: DocumentConfig::default(),
            arena: DomArena::new(),
        };
        let root_id = document.parse_node(root, None)?;
        document.arena.set_root(root_id)?;

        debug!(nodes = document.arena.len(), "hydrated document from CDP");
        Ok(document)
    }

    /// Same as [`Document::from_cdp`], from raw JSON text
    pub fn from_cdp_str(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_cdp(&value)
    }

    /// Recursively parse a CDP node
    fn parse_node(&mut self, cdp_node: &Value, parent_id: Option<NodeId>) -> Result<NodeId> {
        let node_type_val = cdp_node["nodeType"]
            .as_u64()
            .ok_or_else(|| DomError::CdpError("Missing nodeType".to_string()))?;

        let node_type = u8::try_from(node_type_val)
            .ok()
            .and_then(NodeType::from_u8)
            .ok_or_else(|| DomError::InvalidNodeType {
                expected: "valid NodeType".to_string(),
                actual: format!("{}", node_type_val),
            })?;

        let node_name = cdp_node["nodeName"].as_str().unwrap_or("").to_string();
        let node_value = cdp_node["nodeValue"].as_str().unwrap_or("").to_string();

        // Attributes arrive flattened: [name0, value0, name1, value1, ...]
        let mut attributes = HashMap::new();
        if let Some(attrs) = cdp_node["attributes"].as_array() {
            for pair in attrs.chunks_exact(2) {
                if let (Some(key), Some(value)) = (pair[0].as_str(), pair[1].as_str()) {
                    attributes.insert(key.to_string(), value.to_string());
                }
            }
        }

        let mut node = DomNode::new(0, node_type, node_name);
        node.node_value = node_value;
        node.attributes = attributes;
        node.parent_id = parent_id;

        let current_node_id = self.arena.add_node(node);

        let nested = ["children", "shadowRoots"]
            .iter()
            .filter_map(|key| cdp_node[*key].as_array())
            .flatten()
            .chain(cdp_node.get("contentDocument"));

        let mut child_ids = smallvec::SmallVec::new();
        for child in nested {
            child_ids.push(self.parse_node(child, Some(current_node_id))?);
        }
        self.arena.get_mut(current_node_id)?.children_ids = child_ids;

        Ok(current_node_id)
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

/// Reject names `createElement` would throw `InvalidCharacterError` for
fn validate_element_name(name: &str) -> Result<()> {
    let first = name
        .chars()
        .next()
        .ok_or_else(|| DomError::InvalidCharacter(name.to_string()))?;

    let bad_start = first.is_ascii_digit() || first == '-' || first == '.';
    let bad_char = name.chars().any(|c| {
        c.is_whitespace() || matches!(c, '<' | '>' | '/' | '=' | '"' | '\'' | '\0')
    });

    if bad_start || bad_char {
        return Err(DomError::InvalidCharacter(name.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_element_uppercases() {
        let mut doc = Document::new();
        let id = doc.create_element("article").unwrap();

        let node = doc.node(id).unwrap();
        assert!(node.is_element());
        assert_eq!(node.tag_name(), Some("ARTICLE"));
        assert_eq!(node.parent_id, None);
    }

    #[test]
    fn test_create_element_keeps_case_when_configured() {
        let mut doc = Document::with_config(DocumentConfig {
            uppercase_tag_names: false,
            ..DocumentConfig::default()
        });
        let id = doc.create_element("svg").unwrap();
        assert_eq!(doc.node(id).unwrap().tag_name(), Some("svg"));
    }

    #[test]
    fn test_create_element_invalid_names() {
        let mut doc = Document::new();
        for name in ["", "1div", "a b", "<div>", "x=y", "-x"] {
            assert!(
                matches!(doc.create_element(name), Err(DomError::InvalidCharacter(_))),
                "accepted {:?}",
                name
            );
        }
        assert!(doc.create_element("my-widget").is_ok());
    }

    #[test]
    fn test_character_data_nodes() {
        let mut doc = Document::new();
        let text = doc.create_text_node("hello");
        let comment = doc.create_comment("note");
        let fragment = doc.create_document_fragment();

        assert_eq!(doc.node(text).unwrap().node_name, "#text");
        assert_eq!(doc.node(text).unwrap().node_value, "hello");
        assert_eq!(doc.node(comment).unwrap().node_type, NodeType::Comment);
        assert_eq!(doc.node(fragment).unwrap().node_name, "#document-fragment");
        assert_eq!(doc.document_node().unwrap().node_type, NodeType::Document);
    }

    #[test]
    fn test_lookup_by_id_and_tag() {
        let mut doc = Document::new();
        let root = doc.document_node().unwrap().node_id;
        let nav = doc.create_element("nav").unwrap();
        let link = doc.create_element("a").unwrap();
        doc.append_child(root, nav).unwrap();
        doc.append_child(nav, link).unwrap();
        doc.set_attribute(link, "id", "home").unwrap();

        assert_eq!(doc.get_element_by_id("home").unwrap().node_id, link);
        assert_eq!(doc.get_elements_by_tag_name("NAV").unwrap().len(), 1);
        assert!(doc.get_elements_by_tag_name("section").unwrap().is_empty());

        // Detached elements are not part of the tree
        doc.create_element("nav").unwrap();
        assert_eq!(doc.get_elements_by_tag_name("nav").unwrap().len(), 1);
    }

    #[test]
    fn test_cycles_rejected_and_lookup_terminates() {
        let mut doc = Document::new();
        let root = doc.document_node().unwrap().node_id;
        let outer = doc.create_element("div").unwrap();
        let inner = doc.create_element("div").unwrap();
        doc.append_child(root, outer).unwrap();
        doc.append_child(outer, inner).unwrap();

        assert!(doc.append_child(outer, root).is_err());
        assert!(doc.append_child(inner, outer).is_err());
        assert_eq!(doc.get_elements_by_tag_name("div").unwrap().len(), 2);
    }

    #[test]
    fn test_get_element_by_id_follows_id_changes() {
        let mut doc = Document::new();
        let div = doc.create_element("div").unwrap();
        doc.set_attribute(div, "id", "old").unwrap();
        doc.set_attribute(div, "id", "new").unwrap();

        assert!(doc.get_element_by_id("old").is_none());
        assert_eq!(doc.get_element_by_id("new").unwrap().attr("id"), Some("new"));
    }

    #[test]
    fn test_from_cdp() {
        let cdp_json = serde_json::json!({
            "root": {
                "nodeId": 1,
                "backendNodeId": 1,
                "nodeType": 9,
                "nodeName": "#document",
                "nodeValue": "",
                "children": [{
                    "nodeId": 2,
                    "backendNodeId": 2,
                    "nodeType": 1,
                    "nodeName": "HTML",
                    "nodeValue": "",
                    "attributes": ["lang", "en"],
                    "children": [{
                        "nodeId": 3,
                        "nodeType": 8,
                        "nodeName": "#comment",
                        "nodeValue": "generated"
                    }]
                }]
            }
        });

        let doc = Document::from_cdp(&cdp_json).unwrap();
        assert_eq!(doc.arena().len(), 3);

        let html = doc.get_elements_by_tag_name("html").unwrap()[0];
        assert_eq!(html.attr("lang"), Some("en"));
        assert_eq!(html.parent_id, Some(0));
        assert_eq!(doc.node(2).unwrap().node_value, "generated");
    }

    #[test]
    fn test_from_cdp_errors() {
        assert!(matches!(
            Document::from_cdp(&serde_json::json!({})),
            Err(DomError::CdpError(_))
        ));
        assert!(matches!(
            Document::from_cdp(&serde_json::json!({"root": {"nodeType": 42}})),
            Err(DomError::InvalidNodeType { .. })
        ));
        assert!(matches!(
            Document::from_cdp_str("{not json"),
            Err(DomError::ParseError(_))
        ));
    }
}
