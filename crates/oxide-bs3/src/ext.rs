//! The extension loaded into an [`App`].

use std::path::{Path, PathBuf};
use std::sync::Arc;

use oxide_app::{App, Extension, TemplateExtension};
use tracing::info;

use crate::assets::{install_assets, AssetSource, InstallReport, ASSETS};
use crate::config::Bs3Config;
use crate::error::{Bs3Error, Result};
use crate::style::Bs3FormStyle;
use crate::template::Bs3Tag;

/// Bootstrap 3 extension.
///
/// On load it installs the asset bundle into
/// `<static path>/<static_folder>`, optionally makes [`Bs3FormStyle`] the
/// application's form style, and registers the `include_bs3` template tag.
#[derive(Debug)]
pub struct Bs3 {
    config: Arc<Bs3Config>,
    assets_source: AssetSource,
    report: Option<InstallReport>,
}

impl Bs3 {
    /// Extension name.
    pub const NAME: &'static str = "BS3";
    /// Template namespace.
    pub const NAMESPACE: &'static str = "BS3";
    /// Template directive emitting the asset tags.
    pub const INCLUDE_TAG: &'static str = "include_bs3";

    /// Creates the extension.
    pub fn new(config: Bs3Config) -> Self {
        Self {
            config: Arc::new(config),
            assets_source: AssetSource::Bundled,
            report: None,
        }
    }

    /// Creates the extension from a JSON configuration object.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(Self::new(Bs3Config::from_json(json)?))
    }

    /// Reads the assets from a directory instead of the compiled bundle.
    #[must_use]
    pub fn assets_source(mut self, dir: impl Into<PathBuf>) -> Self {
        self.assets_source = AssetSource::Dir(dir.into());
        self
    }

    /// Returns the configuration.
    pub fn config(&self) -> &Arc<Bs3Config> {
        &self.config
    }

    /// Returns the asset installation outcome, once loaded.
    pub fn install_report(&self) -> Option<&InstallReport> {
        self.report.as_ref()
    }

    /// Returns the directory assets were installed into, once loaded.
    pub fn folder(&self) -> Option<&Path> {
        self.report.as_ref().map(|r| r.folder.as_path())
    }

    /// Builds a form style sharing this extension's configuration.
    pub fn form_style(&self) -> Result<Bs3FormStyle> {
        Bs3FormStyle::new(Arc::clone(&self.config))
    }
}

impl Extension for Bs3 {
    type Error = Bs3Error;

    fn name(&self) -> &str {
        Self::NAME
    }

    fn on_load(&mut self, app: &mut App) -> Result<()> {
        let folder = app.static_path().join(&self.config.static_folder);
        let report = install_assets(&self.assets_source, &folder, ASSETS)?;
        info!(
            copied = report.copied.len(),
            skipped = report.skipped.len(),
            "bootstrap 3 assets ready"
        );
        self.report = Some(report);

        if self.config.set_as_default_style {
            app.ui_mut().set_forms_style(Arc::new(self.form_style()?));
        }

        app.add_template_extension(
            TemplateExtension::new(Self::NAMESPACE)
                .tag(Self::INCLUDE_TAG, Bs3Tag::new(Arc::clone(&self.config))),
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn source_with_assets() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        for asset in ASSETS {
            fs::write(dir.path().join(asset), format!("/* {asset} */")).unwrap();
        }
        dir
    }

    #[test]
    fn test_on_load_registers_everything() {
        let source = source_with_assets();
        let root = tempfile::tempdir().unwrap();
        let mut app = App::new("demo", root.path());

        let bs3 = app
            .use_extension(Bs3::new(Bs3Config::default()).assets_source(source.path()))
            .unwrap();

        let folder = root.path().join("static").join("bs3");
        assert_eq!(bs3.folder(), Some(folder.as_path()));
        assert_eq!(bs3.install_report().unwrap().copied.len(), ASSETS.len());
        assert!(app.has_extension(Bs3::NAME));
        assert!(app.ui().has_custom_forms_style());
        assert!(app.templates().has_namespace(Bs3::NAMESPACE));
        assert!(app.templates().find(Bs3::INCLUDE_TAG).is_some());
    }

    #[test]
    fn test_default_style_opt_out() {
        let source = source_with_assets();
        let root = tempfile::tempdir().unwrap();
        let mut app = App::new("demo", root.path());
        let config = Bs3Config {
            set_as_default_style: false,
            ..Bs3Config::default()
        };

        app.use_extension(Bs3::new(config).assets_source(source.path()))
            .unwrap();

        assert!(!app.ui().has_custom_forms_style());
        assert!(app.templates().find(Bs3::INCLUDE_TAG).is_some());
    }

    #[test]
    fn test_missing_assets_fail_load() {
        let root = tempfile::tempdir().unwrap();
        let mut app = App::new("demo", root.path());

        let err = app
            .use_extension(Bs3::new(Bs3Config::default()).assets_source(root.path().join("none")))
            .unwrap_err();

        assert!(matches!(err, oxide_app::AppError::Extension { ref name, .. } if name == "BS3"));
        assert!(!app.has_extension(Bs3::NAME));
    }

    #[test]
    fn test_from_json() {
        let bs3 = Bs3::from_json(r#"{"static_folder": "ui"}"#).unwrap();
        assert_eq!(bs3.config().static_folder, "ui");
        assert!(bs3.install_report().is_none());
        assert!(Bs3::from_json("[").is_err());
    }
}
