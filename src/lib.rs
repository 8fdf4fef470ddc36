//! Procedural renderer for the Temperance app icon
//!
//! The icon is computed analytically, pixel by pixel, and written as a binary
//! PPM. See [`icon_gen::generate_icon`] for the full pipeline.

pub mod compositor;
pub mod icon_gen;
pub mod layout;
pub mod manifest_json;
pub mod palette;
pub mod ppm;
