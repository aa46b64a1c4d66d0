//! # oxide-bs3
//!
//! Bootstrap 3 integration for oxide applications.
//!
//! Loading the [`Bs3`] extension:
//! - copies the Bootstrap, moment.js and bootstrap-datetimepicker files into
//!   the application's static directory (never overwriting existing files)
//! - makes [`Bs3FormStyle`] the default form style, unless disabled
//! - registers the `{{ include_bs3 }}` template directive
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use oxide_app::App;
//! use oxide_bs3::{Bs3, Bs3Config};
//! use oxide_forms::{FormAttrs, FormField, FormValues, ValidationErrors};
//!
//! let mut app = App::new("blog", "/srv/blog");
//! app.use_extension(Bs3::new(Bs3Config::default())).unwrap();
//!
//! let html = app
//!     .render_form(
//!         &[FormField::string("title"), FormField::date("published")],
//!         &FormValues::new(),
//!         &ValidationErrors::new(),
//!         FormAttrs::new("/posts"),
//!     )
//!     .unwrap();
//! assert!(html.contains("form-horizontal"));
//!
//! let head = app.templates().expand("<head>{{ include_bs3 }}</head>");
//! assert!(head.contains("/static/bs3/bootstrap.min.css"));
//! ```
//!
//! ## Configuration
//!
//! [`Bs3Config`] is read from JSON; missing keys keep their defaults:
//!
//! ```rust
//! use oxide_bs3::Bs3Config;
//!
//! let config = Bs3Config::from_json(r#"{"date_format": "YYYY-MM-DD"}"#).unwrap();
//! assert_eq!(config.date_format, "YYYY-MM-DD");
//! assert_eq!(config.static_folder, "bs3");
//! ```
//!
//! Individual forms and fields may override formats, icons and date bounds
//! through [`Bs3Overrides`].

mod assets;
mod config;
mod error;
mod ext;
pub mod scripts;
mod style;
mod template;
mod widgets;

pub use assets::{install_assets, AssetSource, InstallReport, ASSETS};
pub use config::{Bs3Config, Bs3Overrides, PickerSettings};
pub use error::{Bs3Error, Result};
pub use ext::Bs3;
pub use style::Bs3FormStyle;
pub use template::{Bs3Tag, FONT_AWESOME_URL};
pub use widgets::{strip_seconds, Bs3Widgets, BOOL_CLASS};
