//! Compiler core for **espalier**: turns a pug-rendered HTML element tree
//! into a language-agnostic widget-descriptor tree for declarative-UI code
//! generation.
//!
//! The element model lives in [`espalier_html`] so parsers and editor
//! tooling can share it without depending on this crate.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`compile`] | `compile`, `extract_imports`, `CompileResult` |
//! | [`config`] | `CompileConfig` |
//! | [`diagnostics`] | `Diagnostic` |
//! | [`logging`] | `init_logging`, `LoggingConfig` |
//! | [`widget`] | `Widget`, `Param`, `ParamKind`, `ParamValue` |
//!
//! # Quick start
//!
//! ```rust
//! use espalier_compiler::{compile, CompileConfig};
//! use espalier_html::{Tag, Text};
//!
//! let button = Tag::new("raised-button")
//!     .with_attr(":on-pressed", "save()")
//!     .with_child(Text::new("Save"));
//!
//! let result = compile(&[button.into()], &CompileConfig::default());
//! let button = &result.widgets[0];
//!
//! assert_eq!(button.name, "RaisedButton");
//! assert_eq!(button.param("onPressed").unwrap().value.as_str(), Some("save()"));
//! assert_eq!(button.children()[0].name, "Text");
//! ```

pub mod compile;
pub mod config;
pub mod diagnostics;
pub mod logging;
mod text;
pub mod widget;

pub use compile::{compile, extract_imports, CompileResult};
pub use config::CompileConfig;
pub use diagnostics::Diagnostic;
pub use widget::{Param, ParamKind, ParamValue, Widget};
