//! The application shell extensions are loaded into.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use oxide_forms::{
    render_form, DefaultFormStyle, FormAttrs, FormField, FormStyle, FormValues, ValidationErrors,
};
use tracing::info;

use crate::error::{AppError, Result};
use crate::extension::Extension;
use crate::template::{TemplateExtension, TemplateRegistry};

/// User-interface settings shared by every request.
#[derive(Clone, Default)]
pub struct UiConfig {
    forms_style: Option<Arc<dyn FormStyle>>,
}

impl std::fmt::Debug for UiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UiConfig")
            .field("custom_forms_style", &self.forms_style.is_some())
            .finish()
    }
}

impl UiConfig {
    /// Replaces the default form style.
    pub fn set_forms_style(&mut self, style: Arc<dyn FormStyle>) {
        self.forms_style = Some(style);
    }

    /// Returns whether a custom form style is registered.
    pub fn has_custom_forms_style(&self) -> bool {
        self.forms_style.is_some()
    }

    /// Returns the form style used for forms without an explicit one.
    pub fn forms_style(&self) -> Arc<dyn FormStyle> {
        self.forms_style
            .clone()
            .unwrap_or_else(|| Arc::new(DefaultFormStyle))
    }
}

/// An application instance.
#[derive(Debug)]
pub struct App {
    name: String,
    static_path: PathBuf,
    ui: UiConfig,
    templates: TemplateRegistry,
    extensions: Vec<String>,
}

impl App {
    /// Creates an application rooted at `root`; static files live in
    /// `<root>/static`.
    pub fn new(name: impl Into<String>, root: impl AsRef<Path>) -> Self {
        Self {
            name: name.into(),
            static_path: root.as_ref().join("static"),
            ui: UiConfig::default(),
            templates: TemplateRegistry::new(),
            extensions: Vec::new(),
        }
    }

    /// Overrides the static files directory.
    #[must_use]
    pub fn with_static_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.static_path = path.into();
        self
    }

    /// Returns the application name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the static files directory.
    pub fn static_path(&self) -> &Path {
        &self.static_path
    }

    /// Returns the UI settings.
    pub fn ui(&self) -> &UiConfig {
        &self.ui
    }

    /// Returns the UI settings mutably.
    pub fn ui_mut(&mut self) -> &mut UiConfig {
        &mut self.ui
    }

    /// Returns the template registry.
    pub fn templates(&self) -> &TemplateRegistry {
        &self.templates
    }

    /// Registers a template extension.
    pub fn add_template_extension(&mut self, extension: TemplateExtension) -> Result<()> {
        self.templates.add(extension)
    }

    /// Loads an extension and returns it once set up.
    pub fn use_extension<E: Extension>(&mut self, mut extension: E) -> Result<E> {
        let name = extension.name().to_string();
        if self.extensions.contains(&name) {
            return Err(AppError::ExtensionLoaded(name));
        }
        extension
            .on_load(self)
            .map_err(|e| AppError::Extension {
                name: name.clone(),
                source: Box::new(e),
            })?;
        info!(app = %self.name, extension = %name, "loaded extension");
        self.extensions.push(name);
        Ok(extension)
    }

    /// Returns whether an extension is loaded.
    pub fn has_extension(&self, name: &str) -> bool {
        self.extensions.iter().any(|e| e == name)
    }

    /// Renders a form with the default form style.
    pub fn render_form(
        &self,
        fields: &[FormField],
        values: &FormValues,
        errors: &ValidationErrors,
        attrs: FormAttrs,
    ) -> oxide_forms::Result<String> {
        let style = self.ui.forms_style();
        render_form(style.as_ref(), fields, values, errors, attrs)
    }
}
