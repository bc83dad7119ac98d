//! HTML element type guard
//!
//! Many HTML tags (`<article>`, `<summary>`, `<nav>`, ...) share the generic
//! `HTMLElement` interface, so checking the interface alone cannot tell them
//! apart. This crate checks the tag instead, and hands back a view typed by
//! the tag's interface when the check passes.
//!
//! ```text
//! &dyn Any ──element?──▶ false
//!     │ yes
//!     ├─ no tag ─────────▶ true / Element<'_, HtmlElement>
//!     └─ tag ──lower(tag) == token?──▶ true / Element<'_, T::Interface>
//! ```
//!
//! The document model (nodes, tag catalog, interface map) lives in the `dom`
//! crate; this crate only reads it.

pub mod guard;
pub mod report;

pub use dom::{interfaces, tag, Element, TagName};
pub use guard::{
    as_html_element, as_html_element_of, is_html_element, is_html_element_named, is_instance_of,
};
pub use report::{AccuracyReport, ReportConfig};

#[cfg(test)]
mod tests {
    use super::*;
    use dom::Document;

    #[test]
    fn test_anchor_scenario() {
        let mut doc = Document::new();
        let id = doc.create_element("a").unwrap();
        let element = doc.node(id).unwrap();

        assert!(is_html_element(element, Some(TagName::A)));
        assert!(!is_html_element(element, Some(TagName::Div)));
        assert!(is_html_element(element, None));
    }

    #[test]
    fn test_cdp_snapshot_elements() {
        let cdp_json = serde_json::json!({
            "root": {
                "nodeId": 1,
                "nodeType": 9,
                "nodeName": "#document",
                "children": [{
                    "nodeId": 2,
                    "nodeType": 1,
                    "nodeName": "HTML",
                    "children": [{
                        "nodeId": 3,
                        "nodeType": 1,
                        "nodeName": "BODY",
                        "children": [
                            {
                                "nodeId": 4,
                                "nodeType": 1,
                                "nodeName": "NAV",
                                "attributes": ["id", "menu"]
                            },
                            {
                                "nodeId": 5,
                                "nodeType": 3,
                                "nodeName": "#text",
                                "nodeValue": "hello"
                            }
                        ]
                    }]
                }]
            }
        });

        let doc = Document::from_cdp(&cdp_json).unwrap();

        let nav = doc.get_element_by_id("menu").unwrap();
        assert!(is_html_element(nav, Some(TagName::Nav)));
        assert!(!is_html_element(nav, Some(TagName::Section)));
        assert!(as_html_element_of::<tag::Nav>(nav).is_some());

        let root = doc.document_node().unwrap();
        assert!(!is_html_element(root, None));

        let elements = doc
            .arena()
            .iter()
            .filter(|node| is_html_element(*node, None))
            .count();
        assert_eq!(elements, 3);
    }
}
