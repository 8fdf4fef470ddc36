//! Per-pixel color compositing
//!
//! Every pixel is computed independently from its own coordinate, the
//! [`Layout`] and the [`Palette`]. Layers are applied bottom to top:
//! background gradient, radial glow, ring, accent ridge, bar, stem and the
//! highlight stripe on the stem.

use crate::layout::{Layout, Transform};
use crate::palette::{Color, Palette};

const GLOW_RADIUS: f64 = 0.48;
const GLOW_STRENGTH: f64 = 0.25;
const RING_INNER: f64 = 0.32;
const RING_OUTER: f64 = 0.40;
const INNER_CORE: f64 = 0.26;
const RIDGE: f64 = 0.55;

/// Everything needed to color a pixel, fixed for the whole render
#[derive(Debug, Clone, Copy)]
pub struct Compositor {
    palette: Palette,
    layout: Layout,
    size: u32,
    ring_inner: f64,
    ring_outer: f64,
    inner_core: f64,
    ridge: f64,
}

impl Compositor {
    pub fn new(palette: Palette, scale: f64, size: u32) -> Self {
        let transform = Transform::new(scale, size);
        Self {
            palette,
            layout: Layout::plan(scale, size),
            size,
            ring_inner: RING_INNER * scale,
            ring_outer: RING_OUTER * scale,
            inner_core: INNER_CORE * scale,
            ridge: transform.apply(RIDGE),
        }
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    fn normalize(&self, v: u32) -> f64 {
        let extent = self.size.saturating_sub(1).max(1) as f64;
        v as f64 / extent
    }

    /// Final color of the pixel at `(x, y)`
    pub fn pixel(&self, x: u32, y: u32) -> Color {
        let p = &self.palette;
        let xn = self.normalize(x);
        let yn = self.normalize(y);

        let mut color = p
            .background_start
            .mix(p.background_end, 0.35 * xn + 0.65 * yn);

        let dist = (xn - 0.5).hypot(yn - 0.5);
        if dist < GLOW_RADIUS {
            let strength = (GLOW_RADIUS - dist) / GLOW_RADIUS;
            color = color.mix(p.glow, GLOW_STRENGTH * strength);
        }

        if dist < self.ring_outer {
            if dist <= self.ring_inner {
                color = color.mix(p.inner_ring, 0.15);
            } else {
                let band = (self.ring_outer - self.ring_inner).max(1e-6);
                let ring_mix = 1.0 - (dist - self.ring_inner) / band;
                color = color.mix(p.ring, 0.5 * ring_mix);
            }
        }
        if dist < self.inner_core {
            color = color.mix(p.inner_ring, 0.2);
        }

        if yn < self.ridge && xn > self.ridge {
            let accent_mix = (1.0 - (xn - self.ridge) * 2.5).max(0.0);
            color = color.mix(p.accent, 0.2 * accent_mix);
        }

        let (x, y) = (x as i64, y as i64);
        let layout = &self.layout;

        if layout.bar.contains(x, y) {
            let t = (y - layout.bar.top) as f64 / layout.bar_height as f64;
            color = p.stem_light.mix(p.stem_shadow, (t * 0.8).min(1.0));
        }

        let in_stem = layout.stem.contains(x, y);
        if in_stem {
            let t = (y - layout.stem.top) as f64 / layout.stem_height as f64;
            color = p.stem_light.mix(p.stem_shadow, (0.3 + t * 0.6).min(1.0));
        }

        if in_stem && (x as f64 - layout.stem_center()).abs() < layout.stem_width as f64 * 0.1 {
            color = color.mix(p.stem_light, 0.6);
        }

        color
    }

    /// Appends one row of RGB bytes to `out`
    pub fn render_row(&self, y: u32, out: &mut Vec<u8>) {
        for x in 0..self.size {
            out.extend_from_slice(&self.pixel(x, y).to_bytes());
        }
    }

    /// Renders the whole canvas as row-major RGB bytes
    pub fn render(&self) -> Vec<u8> {
        let size = self.size as usize;
        let mut pixels = Vec::with_capacity(size * size * 3);
        for y in 0..self.size {
            self.render_row(y, &mut pixels);
        }
        pixels
    }
}
