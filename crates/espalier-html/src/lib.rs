//! Element tree model for **pug-rendered HTML**.
//!
//! This crate is intentionally dependency-free so the markup parser and
//! editor tooling can consume it without pulling in any compiler code.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`element`] | `Element`, `Tag`, `Attribute`, `Text` |
//!
//! # Quick start
//!
//! ```rust
//! use espalier_html::{Element, Tag, Text};
//!
//! let card = Tag::new("card")
//!     .with_attr("title", "Hello")
//!     .with_bare_attr("raised")
//!     .with_child(Text::new("body copy"));
//!
//! assert_eq!(card.attr_value("title"), Some("Hello"));
//! assert!(card.has_attr("raised"));
//!
//! let root: Element = card.into();
//! assert_eq!(root.as_tag().unwrap().children.len(), 1);
//! ```

pub mod element;

pub use element::{Attribute, Element, Tag, Text};
