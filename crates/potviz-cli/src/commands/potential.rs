use crate::cli::PotentialArgs;
use crate::error::{CliError, Result};
use crate::utils::parser::parse_potential_kind;
use potviz::core::potentials::Potential;
use potviz::render::style::RenderStyle;
use potviz::workflows::potential::PotentialRenderer;
use std::path::PathBuf;
use tracing::info;

pub fn run(args: PotentialArgs, style: &RenderStyle) -> Result<PathBuf> {
    let kind = parse_potential_kind(&args.kind).map_err(|e| CliError::Argument(e.to_string()))?;
    let potential = Potential::with_defaults(kind);
    let domain = potential.default_domain();

    info!(%kind, ?domain, "Rendering single potential.");
    let written =
        PotentialRenderer::new(&args.output, None, style.clone()).plot(potential, &domain)?;

    println!("Wrote {}", written.display());
    Ok(written)
}
