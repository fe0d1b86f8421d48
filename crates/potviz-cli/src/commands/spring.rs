use crate::cli::SpringArgs;
use crate::config::DefaultsConfig;
use crate::error::Result;
use potviz::render::style::RenderStyle;
use potviz::workflows::spring::draw_spiral_named;
use std::path::PathBuf;
use tracing::info;

pub fn run(args: SpringArgs, style: &RenderStyle, defaults: &DefaultsConfig) -> Result<PathBuf> {
    let loops = args.loops.unwrap_or(defaults.loops);
    info!(axis = %args.axis, loops, centerline = args.centerline, "Drawing spring.");

    let written = draw_spiral_named(&args.output, loops, &args.axis, args.centerline, style)?;

    println!("Wrote {}", written.display());
    Ok(written)
}
