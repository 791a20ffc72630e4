use crate::theme;
use anyhow::{anyhow, Context, Result};
use regex::Regex;
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Patch a JSON config file in place
///
/// Parses the whole file, overwrites the theme-related top-level fields and
/// writes it back with two-space indentation. Every other field is kept
/// untouched.
///
/// # Arguments
/// * `path` - File to patch
///
/// # Returns
/// * `Result<()>` - Result of the operation
pub fn update_json(path: &Path) -> Result<()> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))?;

    let mut doc: Value = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse JSON in {}", path.display()))?;

    let fields = doc
        .as_object_mut()
        .ok_or_else(|| anyhow!("Top-level JSON value is not an object: {}", path.display()))?;

    // Add or update the Windows 11 specific styles
    fields.insert("theme".to_string(), Value::String(theme::THEME_NAME.to_string()));
    fields.insert(
        "borderRadius".to_string(),
        Value::String(theme::BORDER_RADIUS.to_string()),
    );
    fields.insert("shadow".to_string(), Value::String(theme::SHADOW.to_string()));

    let serialized = serde_json::to_string_pretty(&doc)
        .with_context(|| format!("Failed to serialize JSON for {}", path.display()))?;

    fs::write(path, serialized)
        .with_context(|| format!("Failed to write file: {}", path.display()))?;

    println!("Updated JSON file: {}", path.display());

    Ok(())
}

/// Patch a CSS file in place
///
/// Appends the Windows 11 styling block unless the marker substring shows it
/// is already there. Running this twice on the same file is a no-op.
///
/// # Arguments
/// * `path` - File to patch
///
/// # Returns
/// * `Result<()>` - Result of the operation
pub fn update_css(path: &Path) -> Result<()> {
    let mut content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))?;

    if content.contains(theme::CSS_MARKER) {
        return Ok(());
    }

    content.push_str(theme::CSS_BLOCK);

    fs::write(path, &content)
        .with_context(|| format!("Failed to write file: {}", path.display()))?;

    println!("Updated CSS file: {}", path.display());

    Ok(())
}

/// Patch a UI markup file in place
///
/// Rewrites the first `theme="..."` and `borderRadius="..."` attributes to
/// the fixed values. The file is rewritten even when neither attribute was
/// present.
///
/// # Arguments
/// * `path` - File to patch
///
/// # Returns
/// * `Result<()>` - Result of the operation
pub fn update_ui(path: &Path) -> Result<()> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))?;

    let replaced = replace_attribute(&content, "theme", theme::THEME_NAME)?;
    let replaced = replace_attribute(&replaced, "borderRadius", theme::BORDER_RADIUS)?;

    fs::write(path, replaced)
        .with_context(|| format!("Failed to write file: {}", path.display()))?;

    println!("Updated UI file: {}", path.display());

    Ok(())
}

/// Patch a HEXA config file in place
///
/// The format looks like JSON but is treated as raw text. Rewrites the first
/// `"theme": "..."` and `"borderRadius": "..."` pairs to the fixed values
/// and always writes the file back.
///
/// # Arguments
/// * `path` - File to patch
///
/// # Returns
/// * `Result<()>` - Result of the operation
pub fn update_hexa(path: &Path) -> Result<()> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))?;

    let replaced = replace_key_value(&content, "theme", theme::THEME_NAME)?;
    let replaced = replace_key_value(&replaced, "borderRadius", theme::BORDER_RADIUS)?;

    fs::write(path, replaced)
        .with_context(|| format!("Failed to write file: {}", path.display()))?;

    println!("Updated HEXA file: {}", path.display());

    Ok(())
}

/// Replace the first `name="..."` attribute with a fixed value
fn replace_attribute(content: &str, name: &str, value: &str) -> Result<String> {
    let pattern = Regex::new(&format!(r#"{}=".*?""#, name))?;
    let replacement = format!(r#"{}="{}""#, name, value);

    Ok(pattern.replace(content, replacement.as_str()).into_owned())
}

/// Replace the first `"key": "..."` pair with a fixed value
fn replace_key_value(content: &str, key: &str, value: &str) -> Result<String> {
    let pattern = Regex::new(&format!(r#""{}"\s*:\s*".*?""#, key))?;
    let replacement = format!(r#""{}": "{}""#, key, value);

    Ok(pattern.replace(content, replacement.as_str()).into_owned())
}
