//! Web app manifest icon list
//!
//! Mirrors the `icons` member of a web app manifest so the exported PNGs can
//! be pasted straight into `manifest.json`.

use anyhow::{Context, Result};
use serde::Serialize;
use std::path::Path;

/// Root of the generated icon list
#[derive(Serialize, Debug, Clone, Default)]
pub struct ManifestIcons {
    /// One entry per exported PNG
    pub icons: Vec<IconEntry>,
}

/// A single manifest icon
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct IconEntry {
    /// URL of the image, relative to the site root (e.g. "/icons/icon-192.png")
    pub src: String,

    /// Space separated dimensions (e.g. "192x192")
    pub sizes: String,

    /// MIME type of the image
    #[serde(rename = "type")]
    pub mime_type: String,

    /// How the platform may use the icon (e.g. "any maskable")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purpose: Option<String>,
}

impl IconEntry {
    /// Creates a PNG icon entry for a square image
    ///
    /// # Arguments
    /// * `src` - The URL the icon is served from
    /// * `size` - Edge length in pixels
    pub fn png(src: String, size: u32) -> Self {
        Self {
            src,
            sizes: format!("{size}x{size}"),
            mime_type: "image/png".to_string(),
            purpose: None,
        }
    }

    /// Sets the purpose, returning self for chaining
    pub fn with_purpose(mut self, purpose: String) -> Self {
        self.purpose = Some(purpose);
        self
    }
}

impl ManifestIcons {
    pub fn add_icon(&mut self, icon: IconEntry) {
        self.icons.push(icon);
    }
}

/// Writes the icon list as pretty-printed JSON to `path`
pub fn write_manifest_icons(path: &Path, manifest: &ManifestIcons) -> Result<()> {
    let json =
        serde_json::to_string_pretty(manifest).context("Failed to serialize manifest icons")?;
    std::fs::write(path, json)
        .with_context(|| format!("Failed to write manifest icons {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_png_entry() {
        let icon = IconEntry::png("/icons/icon-192.png".to_string(), 192);
        assert_eq!(icon.sizes, "192x192");
        assert_eq!(icon.mime_type, "image/png");
        assert!(icon.purpose.is_none());
    }

    #[test]
    fn test_serialization() {
        let mut manifest = ManifestIcons::default();
        manifest.add_icon(IconEntry::png("/icons/icon-192.png".to_string(), 192));
        manifest.add_icon(
            IconEntry::png("/icons/maskable-512.png".to_string(), 512)
                .with_purpose("any maskable".to_string()),
        );

        let json = serde_json::to_string_pretty(&manifest).unwrap();
        let parsed: serde_json::Value =
            serde_json::from_str(&json).expect("Generated JSON should be valid");

        let icons = parsed["icons"].as_array().unwrap();
        assert_eq!(icons.len(), 2);
        assert_eq!(icons[0]["src"], "/icons/icon-192.png");
        assert_eq!(icons[0]["type"], "image/png");
        assert!(icons[0].get("purpose").is_none());
        assert_eq!(icons[1]["sizes"], "512x512");
        assert_eq!(icons[1]["purpose"], "any maskable");
    }
}
