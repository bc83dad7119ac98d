//! Typed element views
//!
//! `Element<'a, I>` borrows an element node and records, in its type, which
//! interface the node is known to implement. Interface-specific accessors are
//! only available on the matching view, so holding an
//! `Element<'_, HtmlAnchorElement>` is what makes `href()` callable.

use crate::tags::interfaces::{HtmlAnchorElement, HtmlElement, HtmlHeadingElement};
use crate::tags::{HtmlInterface, TagName};
use crate::types::DomNode;
use std::fmt;
use std::marker::PhantomData;

/// Borrowed element node, statically typed by interface `I`
pub struct Element<'a, I: HtmlInterface = HtmlElement> {
    node: &'a DomNode,
    interface: PhantomData<fn() -> I>,
}

impl<'a, I: HtmlInterface> Element<'a, I> {
    /// View `node` as `I`.
    ///
    /// Returns `None` for non-element nodes and for elements constructed with
    /// an interface `I` does not accept.
    pub fn from_node(node: &'a DomNode) -> Option<Self> {
        let interface_name = node.interface_name()?;
        if I::accepts(interface_name) {
            Some(Self {
                node,
                interface: PhantomData,
            })
        } else {
            None
        }
    }

    /// Underlying node
    pub fn node(&self) -> &'a DomNode {
        self.node
    }

    /// Tag name as stored by the document (upper case in HTML documents)
    pub fn tag_name(&self) -> &'a str {
        &self.node.node_name
    }

    /// Lower-case tag name
    pub fn local_name(&self) -> String {
        self.node.node_name.to_ascii_lowercase()
    }

    /// Standard tag, `None` for custom or unknown elements
    pub fn tag(&self) -> Option<TagName> {
        TagName::lookup(&self.node.node_name)
    }

    /// Static interface name of this view
    pub fn interface_name(&self) -> &'static str {
        I::NAME
    }

    pub fn attr(&self, name: &str) -> Option<&'a str> {
        self.node.attributes.get(name).map(|s| s.as_str())
    }

    /// Forget the specific interface
    pub fn upcast(self) -> Element<'a, HtmlElement> {
        Element {
            node: self.node,
            interface: PhantomData,
        }
    }
}

impl<I: HtmlInterface> Clone for Element<'_, I> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<I: HtmlInterface> Copy for Element<'_, I> {}

impl<I: HtmlInterface> fmt::Debug for Element<'_, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct(I::NAME)
            .field("node_id", &self.node.node_id)
            .field("tag_name", &self.node.node_name)
            .finish()
    }
}

impl<'a> Element<'a, HtmlAnchorElement> {
    pub fn href(&self) -> Option<&'a str> {
        self.attr("href")
    }
}

impl<'a> Element<'a, HtmlHeadingElement> {
    /// Heading rank, 1 for `<h1>` through 6 for `<h6>`
    pub fn level(&self) -> u8 {
        match self.tag() {
            Some(TagName::H1) => 1,
            Some(TagName::H2) => 2,
            Some(TagName::H3) => 3,
            Some(TagName::H4) => 4,
            Some(TagName::H5) => 5,
            _ => 6,
        }
    }
}
