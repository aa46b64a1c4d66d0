//! Shared fixtures for the integration tests.

use std::fs;
use std::path::Path;

use oxide_app::App;
use oxide_bs3::{Bs3, Bs3Config, ASSETS};
use tempfile::TempDir;

/// A directory with a small stand-in for every bundled asset.
pub fn asset_source() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    for asset in ASSETS {
        fs::write(dir.path().join(asset), format!("/* {asset} */")).unwrap();
    }
    dir
}

/// An application rooted at `root` with the extension loaded.
pub fn app_with_bs3(root: &Path, source: &Path, config: Bs3Config) -> (App, Bs3) {
    let mut app = App::new("test", root);
    let bs3 = app
        .use_extension(Bs3::new(config).assets_source(source))
        .unwrap();
    (app, bs3)
}
