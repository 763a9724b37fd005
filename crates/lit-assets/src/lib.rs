//! Stylesheet assets for lit documentation pages.
//!
//! Provides a single API for accessing assets in both embedded and
//! filesystem modes:
//!
//! - **`embed` feature on**: Assets are compiled into the binary via `rust-embed`
//! - **`embed` feature off**: Assets are read from this crate's `assets/` at runtime

use std::borrow::Cow;
#[cfg(not(feature = "embed"))]
use std::path::Path;

/// File name of the page stylesheet, both in `assets/` and in the output directory.
pub const STYLESHEET: &str = "lit.css";

/// Embedded assets (only available with `embed` feature).
#[cfg(feature = "embed")]
#[derive(rust_embed::RustEmbed)]
#[folder = "assets"]
struct Assets;

/// Directory for filesystem-based asset loading.
#[cfg(not(feature = "embed"))]
const ASSETS_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/assets");

/// Get an asset by path (relative to `assets/`).
///
/// Returns the file contents if the asset exists, `None` otherwise.
#[cfg(feature = "embed")]
pub fn get(path: &str) -> Option<Cow<'static, [u8]>> {
    Assets::get(path).map(|f| f.data)
}

/// Get an asset by path (relative to `assets/`).
///
/// Returns the file contents if the asset exists, `None` otherwise.
#[cfg(not(feature = "embed"))]
pub fn get(path: &str) -> Option<Cow<'static, [u8]>> {
    let full_path = Path::new(ASSETS_DIR).join(path);
    std::fs::read(&full_path).ok().map(Cow::Owned)
}

/// Get the page stylesheet.
pub fn stylesheet() -> Option<Cow<'static, [u8]>> {
    get(STYLESHEET)
}
