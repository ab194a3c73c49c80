//! I/O helpers for the demo binaries.
//!
//! - `load_rgba_image`: read a PNG/JPEG/etc. base map into an RGBA buffer.
//! - `save_rgba_image`: write the mutated canvas back to disk.
//! - `load_label_font`: parse a TTF/OTF file for marker labels.
//! - `write_json_file`: pretty-print a serializable value to disk.
//!
//! The clustering core itself performs no I/O; everything here belongs to
//! the glue layer around it.

use ab_glyph::FontVec;
use image::RgbaImage;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Load an image from disk and convert to 8-bit RGBA.
pub fn load_rgba_image(path: &Path) -> Result<RgbaImage, String> {
    Ok(image::open(path)
        .map_err(|e| format!("Failed to open {}: {e}", path.display()))?
        .into_rgba8())
}

/// Save an RGBA canvas, creating parent directories as needed.
pub fn save_rgba_image(image: &RgbaImage, path: &Path) -> Result<(), String> {
    ensure_parent_dir(path)?;
    image
        .save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// Parse a TTF/OTF font file for marker labels.
pub fn load_label_font(path: &Path) -> Result<FontVec, String> {
    let bytes =
        fs::read(path).map_err(|e| format!("Failed to read font {}: {e}", path.display()))?;
    FontVec::try_from_vec(bytes)
        .map_err(|e| format!("Failed to parse font {}: {e}", path.display()))
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}

fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}
