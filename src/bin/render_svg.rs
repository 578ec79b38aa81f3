//! Render a saved event export to SVG and print its trip statistics.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use movebank_tracker::svg::{SvgStyle, render_svg};
use movebank_tracker::track::{Viewport, loader};

#[derive(Parser, Debug)]
#[command(name = "render-svg")]
#[command(about = "Render a Movebank event export as an SVG trajectory", long_about = None)]
#[command(version)]
struct Args {
    /// Event export (`entity_type=event` direct-read response)
    #[arg(short, long, value_name = "FILE")]
    input: PathBuf,

    /// Output SVG file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    #[arg(long, default_value_t = 600.0)]
    width: f64,

    #[arg(long, default_value_t = 300.0)]
    height: f64,

    #[arg(long, default_value_t = Viewport::DEFAULT_MARGIN)]
    margin: f64,

    /// Also write points, projection and summary as JSON
    #[arg(long, value_name = "FILE")]
    json: Option<PathBuf>,

    /// Colour track segments from oldest to newest
    #[arg(long)]
    color_by_time: bool,

    /// Verbosity level (can be repeated: -v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let viewport = Viewport::new(args.width, args.height).with_margin(args.margin);
    let result = loader::load_track(&args.input, &viewport)?;

    let style = SvgStyle {
        color_by_time: args.color_by_time,
        ..SvgStyle::default()
    };
    let svg = render_svg(&result, &viewport, &style);

    match &args.output {
        Some(path) => {
            std::fs::write(path, &svg).with_context(|| format!("writing {}", path.display()))?;
            log::info!("Wrote {}", path.display());
        }
        None => print!("{svg}"),
    }

    if let Some(path) = &args.json {
        let json = result.to_json().context("serializing track")?;
        std::fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
        log::info!("Wrote {}", path.display());
    }

    // stdout carries only the SVG document.
    match &result.summary {
        Some(summary) => eprintln!("{summary}"),
        None => eprintln!("No tracking data available"),
    }
    Ok(())
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        _ => log::LevelFilter::Debug,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .init();
}
