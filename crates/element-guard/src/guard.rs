//! The element type guard
//!
//! Every entry point takes the candidate as `&dyn Any`, so any `'static`
//! value can be checked: `()`, `None::<T>`, numbers, strings, collections,
//! `serde_json::Value`, and DOM nodes of any kind. Only an element-kind
//! [`DomNode`] can pass.
//!
//! Two steps, nothing else:
//! 1. the value must be an element node
//! 2. if a tag was given, the element's tag, lower-cased, must equal it
//!
//! The interface check ([`is_instance_of`]) is kept beside it because it is
//! the one a type system gives you for free, and it cannot tell `<nav>` from
//! `<summary>`: both are plain `HTMLElement`s.

use dom::interfaces::HtmlElement;
use dom::{DomNode, Element, HtmlInterface, KnownTag, TagName};
use std::any::Any;
use tracing::trace;

/// The value as an element node, if it is one
fn element_node(value: &dyn Any) -> Option<&DomNode> {
    value.downcast_ref::<DomNode>().filter(|node| node.is_element())
}

/// Full Unicode lower-casing, so `"X-É"` and `"x-é"` fold to the same text
fn lowercase(name: &str) -> impl Iterator<Item = char> + '_ {
    name.chars().flat_map(char::to_lowercase)
}

/// Compare the element's own tag, lower-cased, against a lower-case token
fn has_tag(node: &DomNode, tag_name: TagName) -> bool {
    lowercase(&node.node_name).eq(tag_name.as_str().chars())
}

/// Check whether `value` is an HTML element, optionally of a given tag.
///
/// Never panics; anything that is not an element yields `false`.
///
/// ```
/// use dom::{Document, TagName};
/// use element_guard::is_html_element;
///
/// let mut doc = Document::new();
/// let div = doc.create_element("div").unwrap();
/// let div = doc.node(div).unwrap();
///
/// assert!(is_html_element(div, None));
/// assert!(is_html_element(div, Some(TagName::Div)));
/// assert!(!is_html_element(div, Some(TagName::Span)));
/// assert!(!is_html_element(&"<div>", None));
/// ```
pub fn is_html_element(value: &dyn Any, tag_name: Option<TagName>) -> bool {
    let Some(node) = element_node(value) else {
        return false;
    };

    match tag_name {
        None => true,
        Some(tag) => {
            let matched = has_tag(node, tag);
            if !matched {
                trace!(expected = tag.as_str(), actual = %node.node_name, "tag mismatch");
            }
            matched
        }
    }
}

/// Check with a tag given as runtime text.
///
/// Both sides are lower-cased with full Unicode rules before comparing, so
/// `"X-É"` matches an element created as `x-é`. Text outside the standard tag
/// set is not an error, it simply matches nothing standard (a custom element
/// named `my-widget` still matches `"my-widget"`).
pub fn is_html_element_named(value: &dyn Any, tag_name: &str) -> bool {
    element_node(value).is_some_and(|node| lowercase(&node.node_name).eq(lowercase(tag_name)))
}

/// Narrow `value` to the generic element view.
pub fn as_html_element(value: &dyn Any) -> Option<Element<'_, HtmlElement>> {
    element_node(value).and_then(Element::from_node)
}

/// Narrow `value` to the view of tag `T`'s interface.
///
/// ```
/// use dom::{tag, Document};
/// use element_guard::as_html_element_of;
///
/// let mut doc = Document::new();
/// let a = doc.create_element("a").unwrap();
/// doc.set_attribute(a, "href", "/home").unwrap();
///
/// let link = as_html_element_of::<tag::A>(doc.node(a).unwrap()).unwrap();
/// assert_eq!(link.href(), Some("/home"));
/// ```
///
/// Tags outside the standard set have no marker type:
///
/// ```compile_fail
/// use element_guard::as_html_element_of;
///
/// let _ = as_html_element_of::<dom::tag::NotARealTag>(&());
/// ```
pub fn as_html_element_of<T: KnownTag>(value: &dyn Any) -> Option<Element<'_, T::Interface>> {
    element_node(value)
        .filter(|node| has_tag(node, T::TAG))
        .and_then(Element::from_node)
}

/// Interface-only check, the `instanceof` of this model.
///
/// True when `value` is an element constructed with interface `I`. Every
/// element is an [`HtmlElement`], so this cannot single out tags that have no
/// interface of their own.
pub fn is_instance_of<I: HtmlInterface>(value: &dyn Any) -> bool {
    element_node(value)
        .and_then(DomNode::interface_name)
        .is_some_and(I::accepts)
}
