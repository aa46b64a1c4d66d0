//! # oxide-app
//!
//! The application shell extensions plug into.
//!
//! This crate provides:
//! - [`App`]: static files location, UI settings and loaded extensions
//! - The [`Extension`] lifecycle hook
//! - A template tag registry expanding `{{ tag }}` directives
//!
//! ## Quick Start
//!
//! ```rust
//! use oxide_app::{App, TemplateExtension, TemplateTag};
//! use oxide_forms::Node;
//!
//! struct Analytics;
//!
//! impl TemplateTag for Analytics {
//!     fn process(&self, top: &mut Vec<Node>) {
//!         top.push(Node::raw(r#"<script src="/static/stats.js"></script>"#));
//!     }
//! }
//!
//! let mut app = App::new("blog", "/srv/blog");
//! app.add_template_extension(TemplateExtension::new("Stats").tag("include_stats", Analytics))
//!     .unwrap();
//!
//! let page = app.templates().expand("<head>{{ include_stats }}</head>");
//! assert!(page.contains("stats.js"));
//! ```

mod app;
mod error;
mod extension;
mod template;

pub use app::{App, UiConfig};
pub use error::{AppError, Result};
pub use extension::Extension;
pub use template::{TemplateExtension, TemplateRegistry, TemplateTag};
