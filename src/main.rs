use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use temperance_icon::icon_gen::{self, DEFAULT_SCALE, DEFAULT_SIZE};

#[derive(Debug, Parser)]
#[clap(
    name = "temperance-icon",
    about = "Render the Temperance app icon as a PPM pixel-map"
)]
struct Args {
    /// Destination PPM path. Missing parent directories are created.
    #[clap(value_name = "OUTPUT")]
    output: PathBuf,

    /// Glyph scale factor (0-1] to add safe padding around the glyph
    #[clap(long, default_value_t = DEFAULT_SCALE)]
    scale: f64,

    /// Canvas size in pixels (square)
    #[clap(long, default_value_t = DEFAULT_SIZE, value_parser = clap::value_parser!(u32).range(2..))]
    size: u32,

    /// JSON file overriding palette colors (CSS color strings)
    #[clap(long, value_name = "FILE")]
    palette: Option<PathBuf>,

    /// PNG sizes to export next to the PPM, e.g. 192,512
    #[clap(long, value_delimiter = ',', value_name = "SIZES")]
    png: Option<Vec<u32>>,

    /// Write a web manifest icon list for the exported PNGs
    #[clap(long, requires = "png")]
    manifest: bool,

    /// Mark the exported PNGs as "any maskable" in the manifest icon list
    #[clap(long)]
    maskable: bool,
}

impl From<Args> for icon_gen::Args {
    fn from(args: Args) -> Self {
        Self {
            output: args.output,
            scale: args.scale,
            size: args.size,
            palette: args.palette,
            png: args.png,
            manifest: args.manifest,
            maskable: args.maskable,
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    icon_gen::generate_icon(args.into())
}
