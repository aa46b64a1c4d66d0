//! Extension lifecycle.

use crate::app::App;

/// A plugin loaded into an [`App`].
///
/// `on_load` runs once, when the extension is handed to
/// [`App::use_extension`]. Errors abort loading.
pub trait Extension {
    /// Error raised while loading.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Unique extension name.
    fn name(&self) -> &str;

    /// Sets the extension up inside the application.
    fn on_load(&mut self, app: &mut App) -> Result<(), Self::Error>;
}
