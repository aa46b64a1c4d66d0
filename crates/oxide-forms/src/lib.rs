//! # oxide-forms
//!
//! Form descriptors and pluggable form styles.
//!
//! This crate provides:
//! - Field descriptors and value maps
//! - A small mutable markup tree ([`Node`], [`Tag`])
//! - Default widgets for each field kind
//! - The [`FormStyle`] contract and the [`render_form`] driver
//! - Validation error handling
//!
//! ## Quick Start
//!
//! ```rust
//! use oxide_forms::{
//!     render_form, DefaultFormStyle, FormAttrs, FormBuilder, FormField,
//!     FormValues, ValidationErrors,
//! };
//!
//! let fields = FormBuilder::new()
//!     .field(FormField::string("username").comment("Choose a unique username"))
//!     .field(FormField::boolean("newsletter"))
//!     .build()
//!     .unwrap();
//!
//! let values = FormValues::new().with("username", "ada");
//! let html = render_form(
//!     &DefaultFormStyle,
//!     &fields,
//!     &values,
//!     &ValidationErrors::new(),
//!     FormAttrs::new("/signup"),
//! )
//! .unwrap();
//! assert!(html.contains(r#"value="ada""#));
//! ```
//!
//! ## Custom Styles
//!
//! Implement [`FormStyle`] and override the phases you need:
//!
//! ```rust
//! use oxide_forms::{FormStyle, Node};
//!
//! struct Compact;
//!
//! impl FormStyle for Compact {
//!     fn style_widget(&self, widget: &mut Node) {
//!         if let Some(tag) = widget.as_tag_mut() {
//!             tag.add_class("compact");
//!         }
//!     }
//! }
//! ```

mod error;
pub mod fields;
mod form;
pub mod html;
mod style;
pub mod widgets;

pub use error::{FormError, Result, ValidationErrors};
pub use fields::{FieldKind, FormBuilder, FormField, FormValues};
pub use form::{assemble_form, FormAttrs};
pub use html::{Node, Tag};
pub use style::{render_form, DefaultFormStyle, FieldElement, FormStyle, RenderContext};
