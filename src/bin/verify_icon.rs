use anyhow::{Context, Result};
use std::path::PathBuf;
use temperance_icon::layout::Layout;

fn main() -> Result<()> {
    let path = match std::env::args().nth(1) {
        Some(path) => PathBuf::from(path),
        None => anyhow::bail!("Usage: verify-icon <PATH> [SCALE]"),
    };
    let scale: f64 = match std::env::args().nth(2) {
        Some(value) => value.parse().context("SCALE must be a number")?,
        None => 0.9,
    };

    let img = image::open(&path)
        .with_context(|| format!("Failed to decode {}", path.display()))?
        .to_rgb8();
    let width = img.width();
    let height = img.height();

    println!("Checking icon in: {}", path.display());
    println!("Image dimensions: {}x{}", width, height);

    if width != height {
        anyhow::bail!("Icon must be square");
    }

    let layout = Layout::plan(scale, width);
    let center_x = layout.stem_center() as u32;
    let center_y = ((layout.stem.top + layout.stem.bottom) / 2) as u32;
    let stem = img.get_pixel(center_x, center_y).0;
    let corner = img.get_pixel(0, 0).0;

    println!("\nStem center pixel (x={}, y={}):", center_x, center_y);
    println!("  RGB: [{}, {}, {}]", stem[0], stem[1], stem[2]);
    println!("Top-left pixel:");
    println!("  RGB: [{}, {}, {}]", corner[0], corner[1], corner[2]);

    let luma = |p: [u8; 3]| p.iter().map(|&c| c as u32).sum::<u32>();
    if luma(stem) > luma(corner) {
        println!("✓ Glyph detected!");
    } else {
        println!("⚠ Glyph may not be rendered at scale {}", scale);
    }

    Ok(())
}
