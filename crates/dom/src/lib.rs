//! Host DOM object model
//!
//! A small document/element model for code that needs to reason about HTML
//! elements outside a browser: node kinds, an index-based arena, a document
//! factory, the closed catalog of standard HTML tags and the interface each
//! one is constructed with.
//!
//! ## Core Design
//!
//! ```text
//! Document ──owns──▶ DomArena: Vec<DomNode>
//!                                  │
//!                          NodeId (u32 index)
//!
//! TagName ─┬─ as_str()     "a"
//!          └─ interface()  "HTMLAnchorElement"
//!
//! tag::A: KnownTag ──Interface──▶ Element<'_, HtmlAnchorElement>
//! ```

pub mod arena;
pub mod document;
pub mod element;
pub mod error;
pub mod tags;
pub mod types;

pub use arena::DomArena;
pub use document::{Document, DocumentConfig};
pub use element::Element;
pub use error::{DomError, Result};
pub use tags::{interface_for, interfaces, tag, HtmlInterface, KnownTag, TagName};
pub use types::*;
