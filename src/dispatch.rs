use crate::patcher;
use anyhow::Result;
use std::path::Path;

/// Result of routing a file through the patchers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The file matched a supported format and was processed
    Patched,
    /// The extension is not supported and the file was left untouched
    Skipped,
}

/// Route a desktop asset file to its patcher
///
/// Dispatches on the lower-cased file extension. Unknown extensions are not
/// an error; patcher failures are returned for the caller to log.
///
/// # Arguments
/// * `path` - File to process
///
/// # Returns
/// * `Result<Outcome>` - Whether the file was patched or skipped
pub fn recode_ui(path: &Path) -> Result<Outcome> {
    match file_extension(path).as_str() {
        "json" => patcher::update_json(path).map(|_| Outcome::Patched),
        "css" => patcher::update_css(path).map(|_| Outcome::Patched),
        "ui" => patcher::update_ui(path).map(|_| Outcome::Patched),
        _ => Ok(Outcome::Skipped),
    }
}

/// Route an engine config file to its patcher
///
/// Same policy as [`recode_ui`], with the format set of the engine-side
/// pass.
///
/// # Arguments
/// * `path` - File to process
///
/// # Returns
/// * `Result<Outcome>` - Whether the file was patched or skipped
pub fn recode_hexa(path: &Path) -> Result<Outcome> {
    match file_extension(path).as_str() {
        "json" => patcher::update_json(path).map(|_| Outcome::Patched),
        "hexa" => patcher::update_hexa(path).map(|_| Outcome::Patched),
        _ => Ok(Outcome::Skipped),
    }
}

/// Lower-cased extension of a path, empty when there is none
fn file_extension(path: &Path) -> String {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .unwrap_or_default()
}
