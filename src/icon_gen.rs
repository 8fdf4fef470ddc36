use crate::compositor::Compositor;
use crate::manifest_json::{write_manifest_icons, IconEntry, ManifestIcons};
use crate::palette::{Palette, DEFAULT_PALETTE};
use crate::ppm::write_ppm;
use anyhow::{Context, Result};
use image::{
    codecs::png::{CompressionType, FilterType as PngFilterType, PngEncoder},
    imageops::FilterType,
    ColorType, ImageEncoder, RgbImage,
};
use log::{debug, info};
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
    time::Instant,
};

pub const DEFAULT_SCALE: f64 = 0.9;
pub const DEFAULT_SIZE: u32 = 1024;

/// Base URL the exported PNGs are listed under in the manifest icon list
const MANIFEST_ICON_BASE: &str = "/icons/";

/// Options for one render, as collected by the CLI
#[derive(Debug, Clone)]
pub struct Args {
    pub output: PathBuf,
    pub scale: f64,
    pub size: u32,
    pub palette: Option<PathBuf>,
    pub png: Option<Vec<u32>>,
    pub manifest: bool,
    pub maskable: bool,
}

impl Args {
    pub fn new(output: PathBuf) -> Self {
        Self {
            output,
            scale: DEFAULT_SCALE,
            size: DEFAULT_SIZE,
            palette: None,
            png: None,
            manifest: false,
            maskable: false,
        }
    }

    /// Rejects parameters the renderer has no defined output for
    ///
    /// `scale` must be finite and in `(0, 1]`, `size` at least 2, and PNG
    /// export sizes non-zero.
    pub fn validate(&self) -> Result<()> {
        if !self.scale.is_finite() || self.scale <= 0.0 || self.scale > 1.0 {
            anyhow::bail!("Scale must be in (0, 1], got {}", self.scale);
        }
        if self.size < 2 {
            anyhow::bail!("Size must be at least 2 pixels, got {}", self.size);
        }
        if let Some(sizes) = &self.png {
            if sizes.iter().any(|&s| s == 0) {
                anyhow::bail!("PNG export sizes must be non-zero");
            }
        }
        if self.manifest && self.png.is_none() {
            anyhow::bail!("--manifest requires --png sizes to list");
        }
        Ok(())
    }
}

/// Renders the icon to a row-major RGB buffer of `size * size * 3` bytes
pub fn render(palette: Palette, scale: f64, size: u32) -> Vec<u8> {
    let compositor = Compositor::new(palette, scale, size);
    debug!("Layout for {size}x{size} at scale {scale}: {:?}", compositor.layout());
    compositor.render()
}

pub fn generate_icon(args: Args) -> Result<()> {
    args.validate()?;

    let palette = match &args.palette {
        Some(path) => {
            info!("Loading palette overrides from {}", path.display());
            Palette::load(path)?
        }
        None => DEFAULT_PALETTE,
    };
    debug!("Palette: {:?}", palette);

    println!("Rendering {}x{} icon...", args.size, args.size);
    let started = Instant::now();
    let pixels = render(palette, args.scale, args.size);
    info!("Rendered {} bytes in {:?}", pixels.len(), started.elapsed());

    write_ppm(&args.output, &pixels, args.size)?;
    println!("✓ Generated {}", args.output.display());

    if let Some(sizes) = &args.png {
        let exported = generate_pngs(pixels, args.size, sizes, &args.output)?;

        if args.manifest {
            let manifest = build_manifest_icons(&exported, args.maskable);
            let manifest_path = sibling_path(&args.output, "icons.json");
            write_manifest_icons(&manifest_path, &manifest)?;
            println!("✓ Generated {}", manifest_path.display());
        }
    }

    Ok(())
}

/// `<dir>/<stem>-<suffix>` next to the PPM output
fn sibling_path(output: &Path, suffix: &str) -> PathBuf {
    let stem = output
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "icon".to_string());
    output.with_file_name(format!("{stem}-{suffix}"))
}

/// Writes one PNG per requested size, returning `(file name, size)` pairs
fn generate_pngs(
    pixels: Vec<u8>,
    size: u32,
    sizes: &[u32],
    output: &Path,
) -> Result<Vec<(String, u32)>> {
    println!("Generating PNG exports...");
    let source = RgbImage::from_raw(size, size, pixels)
        .context("Pixel buffer does not match the canvas size")?;

    let mut exported = Vec::new();
    for &png_size in sizes {
        let path = sibling_path(output, &format!("{png_size}.png"));
        if png_size == size {
            save_png(&source, &path)?;
        } else {
            let resized =
                image::imageops::resize(&source, png_size, png_size, FilterType::Lanczos3);
            save_png(&resized, &path)?;
        }

        let filename = path
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        println!("  ✓ Generated {filename}");
        exported.push((filename, png_size));
    }
    Ok(exported)
}

fn save_png(image: &RgbImage, path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create PNG file {}", path.display()))?;
    let mut out_file = BufWriter::new(file);
    write_png(image.as_raw(), &mut out_file, image.width())?;
    out_file.flush().context("Failed to write PNG")?;
    Ok(())
}

// Encode image data as PNG with compression
fn write_png<W: Write>(image_data: &[u8], w: W, size: u32) -> Result<()> {
    let encoder = PngEncoder::new_with_quality(w, CompressionType::Best, PngFilterType::Adaptive);
    encoder.write_image(image_data, size, size, ColorType::Rgb8)?;
    Ok(())
}

fn build_manifest_icons(exported: &[(String, u32)], maskable: bool) -> ManifestIcons {
    let mut manifest = ManifestIcons::default();
    for (filename, size) in exported {
        let mut entry = IconEntry::png(format!("{MANIFEST_ICON_BASE}{filename}"), *size);
        if maskable {
            entry = entry.with_purpose("any maskable".to_string());
        }
        manifest.add_icon(entry);
    }
    manifest
}
