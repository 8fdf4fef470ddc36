//! Glyph geometry in pixel space
//!
//! The glyph is defined on a unit square and shrunk by `scale` around the
//! canvas center, leaving a margin of `(1 - scale) / 2` on every side.

// Normalized glyph definition, before scaling.
const TOP_Y: f64 = 0.32;
const BAR_THICKNESS: f64 = 0.10;
const BAR_LEFT: f64 = 0.18;
const BAR_RIGHT: f64 = 0.82;
const STEM_WIDTH: f64 = 0.16;
const STEM_OVERLAP: f64 = 0.02;
const STEM_BOTTOM: f64 = 0.78;

/// Maps normalized glyph coordinates onto the canvas
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    scale: f64,
    margin: f64,
    size: u32,
}

impl Transform {
    pub fn new(scale: f64, size: u32) -> Self {
        Self {
            scale,
            margin: (1.0 - scale) / 2.0,
            size,
        }
    }

    pub fn margin(&self) -> f64 {
        self.margin
    }

    /// Normalized glyph coordinate to normalized canvas coordinate
    pub fn apply(&self, value: f64) -> f64 {
        self.margin + value * self.scale
    }

    /// Normalized canvas coordinate to a pixel index
    pub fn to_px(&self, value: f64) -> i64 {
        let value = value.clamp(0.0, 1.0);
        (value * self.size.saturating_sub(1) as f64).round_ties_even() as i64
    }
}

/// Inclusive pixel bounds of a rectangle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub left: i64,
    pub right: i64,
    pub top: i64,
    pub bottom: i64,
}

impl Rect {
    pub fn contains(&self, x: i64, y: i64) -> bool {
        self.left <= x && x <= self.right && self.top <= y && y <= self.bottom
    }
}

/// Pixel-space bounds of the bar and stem for one render
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    pub bar: Rect,
    pub stem: Rect,
    /// Bar height in pixels, at least 1
    pub bar_height: i64,
    /// Stem height in pixels, at least 1
    pub stem_height: i64,
    /// Stem width in pixels, at least 1
    pub stem_width: i64,
}

impl Layout {
    /// Plans the glyph for a `size`x`size` canvas
    ///
    /// Never fails: out-of-range values are clamped to the canvas.
    pub fn plan(scale: f64, size: u32) -> Self {
        let t = Transform::new(scale, size);
        let px = |value: f64| t.to_px(t.apply(value));

        let bar = Rect {
            left: px(BAR_LEFT),
            right: px(BAR_RIGHT),
            top: px(TOP_Y - BAR_THICKNESS / 2.0),
            bottom: px(TOP_Y + BAR_THICKNESS / 2.0),
        };
        let stem = Rect {
            left: px(0.5 - STEM_WIDTH / 2.0),
            right: px(0.5 + STEM_WIDTH / 2.0),
            top: px(TOP_Y + BAR_THICKNESS / 2.0 - STEM_OVERLAP),
            bottom: px(STEM_BOTTOM),
        };

        Self {
            bar,
            stem,
            bar_height: (bar.bottom - bar.top).max(1),
            stem_height: (stem.bottom - stem.top).max(1),
            stem_width: (stem.right - stem.left).max(1),
        }
    }

    /// Horizontal center of the stem, in pixels
    pub fn stem_center(&self) -> f64 {
        (self.stem.left + self.stem.right) as f64 / 2.0
    }
}
