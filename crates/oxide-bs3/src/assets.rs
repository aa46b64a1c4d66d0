//! Installation of the bundled static assets.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{Bs3Error, Result};

/// Files shipped with the extension, in inclusion order.
pub const ASSETS: &[&str] = &[
    "bootstrap.min.js",
    "bootstrap.min.css",
    "moment.min.js",
    "bootstrap-datetimepicker.min.js",
    "bootstrap-datetimepicker.min.css",
];

/// Release files compiled into the binary.
#[derive(rust_embed::RustEmbed)]
#[folder = "assets/"]
struct Bundle;

/// Where asset files are read from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum AssetSource {
    /// The copies compiled into the extension.
    #[default]
    Bundled,
    /// A directory on disk holding files named as in [`ASSETS`].
    Dir(PathBuf),
}

impl AssetSource {
    /// Returns whether `asset` can be installed from this source.
    pub fn contains(&self, asset: &str) -> bool {
        match self {
            Self::Bundled => Bundle::get(asset).is_some(),
            Self::Dir(dir) => dir.join(asset).is_file(),
        }
    }

    fn install(&self, asset: &str, target: &Path) -> Result<()> {
        match self {
            Self::Bundled => {
                let file =
                    Bundle::get(asset).ok_or_else(|| Bs3Error::MissingAsset(asset.to_string()))?;
                fs::write(target, file.data.as_ref()).map_err(|e| Bs3Error::io(target, e))
            }
            Self::Dir(dir) => {
                let origin = dir.join(asset);
                fs::copy(&origin, target)
                    .map(|_| ())
                    .map_err(|e| Bs3Error::io(&origin, e))
            }
        }
    }
}

/// Outcome of an installation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstallReport {
    /// Destination directory.
    pub folder: PathBuf,
    /// Files written by this run.
    pub copied: Vec<String>,
    /// Files already present and left alone.
    pub skipped: Vec<String>,
}

/// Installs `assets` from `source` into `dest`.
///
/// `dest` is created when missing. Files already present in `dest` are
/// never overwritten, so running this again is a no-op.
pub fn install_assets(source: &AssetSource, dest: &Path, assets: &[&str]) -> Result<InstallReport> {
    fs::create_dir_all(dest).map_err(|e| Bs3Error::io(dest, e))?;

    let mut report = InstallReport {
        folder: dest.to_path_buf(),
        ..Default::default()
    };
    for asset in assets {
        let target = dest.join(asset);
        if target.try_exists().map_err(|e| Bs3Error::io(&target, e))? {
            debug!(asset, "asset already installed");
            report.skipped.push((*asset).to_string());
            continue;
        }
        source.install(asset, &target)?;
        info!(asset, folder = %dest.display(), "installed asset");
        report.copied.push((*asset).to_string());
    }
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_dir_source_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let source = AssetSource::Dir(dir.path().join("nowhere"));
        let err = install_assets(&source, &dir.path().join("out"), &["a.js"]).unwrap_err();

        match err {
            Bs3Error::Io { path, .. } => assert!(path.ends_with("nowhere/a.js")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_unknown_bundled_asset() {
        let dir = tempfile::tempdir().unwrap();
        let err = install_assets(&AssetSource::Bundled, dir.path(), &["jquery.min.js"])
            .unwrap_err();

        assert!(matches!(err, Bs3Error::MissingAsset(name) if name == "jquery.min.js"));
        assert!(!dir.path().join("jquery.min.js").exists());
    }

    #[test]
    fn test_bundle_holds_every_asset() {
        for asset in ASSETS {
            assert!(AssetSource::Bundled.contains(asset), "{asset} is not bundled");
        }
    }

    #[test]
    fn test_bundled_install_writes_embedded_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let report = install_assets(&AssetSource::Bundled, dir.path(), ASSETS).unwrap();

        assert_eq!(report.copied, ASSETS);
        for asset in ASSETS {
            let written = fs::read(dir.path().join(asset)).unwrap();
            assert_eq!(written, Bundle::get(asset).unwrap().data.as_ref());
        }
    }
}
