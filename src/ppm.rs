//! Binary PPM (`P6`) writing

use anyhow::{Context, Result};
use std::{fs::create_dir_all, path::Path};

/// Header for a square `size`x`size` 8-bit RGB pixel-map
pub fn header(size: u32) -> String {
    format!("P6\n{size} {size}\n255\n")
}

/// Encodes a square RGB buffer as a complete P6 file in memory
///
/// # Errors
/// Returns an error if `pixels` is not exactly `size * size * 3` bytes long
pub fn encode_ppm(pixels: &[u8], size: u32) -> Result<Vec<u8>> {
    let expected = size as usize * size as usize * 3;
    if pixels.len() != expected {
        anyhow::bail!(
            "Pixel buffer has {} bytes, expected {} for a {}x{} image",
            pixels.len(),
            expected,
            size,
            size
        );
    }

    let header = header(size);
    let mut bytes = Vec::with_capacity(header.len() + pixels.len());
    bytes.extend_from_slice(header.as_bytes());
    bytes.extend_from_slice(pixels);
    Ok(bytes)
}

/// Writes a P6 file, creating missing parent directories first
///
/// An existing file at `path` is overwritten.
pub fn write_ppm(path: &Path, pixels: &[u8], size: u32) -> Result<()> {
    let bytes = encode_ppm(pixels, size)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        create_dir_all(parent)
            .with_context(|| format!("Can't create output directory {}", parent.display()))?;
    }

    std::fs::write(path, bytes).with_context(|| format!("Failed to write {}", path.display()))
}
