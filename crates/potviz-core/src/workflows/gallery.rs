use super::potential::PotentialRenderer;
use super::progress::{Progress, ProgressReporter};
use super::spring::{DEFAULT_LOOPS, draw_spiral};
use crate::core::potentials::{Potential, PotentialKind};
use crate::core::spiral::Axis;
use crate::render::error::RenderError;
use crate::render::export::OutputFormat;
use crate::render::style::RenderStyle;
use std::path::{Path, PathBuf};
use tracing::{info, instrument};

/// One figure of the illustration set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Figure {
    Potential(PotentialKind),
    Spring { axis: Axis, centerline: bool },
}

impl Figure {
    /// File name without extension, e.g. `potential_vdw` or `spring_x_centerline`.
    pub fn stem(&self) -> String {
        match self {
            Self::Potential(kind) => format!("potential_{}", kind.name()),
            Self::Spring { axis, centerline } => {
                let suffix = if *centerline { "_centerline" } else { "" };
                format!("spring_{}{suffix}", axis.name())
            }
        }
    }

    pub fn file_name(&self, format: OutputFormat) -> String {
        format!("{}.{}", self.stem(), format.extension())
    }

    fn render(&self, path: &Path, style: &RenderStyle) -> Result<PathBuf, RenderError> {
        match *self {
            Self::Potential(kind) => {
                let potential = Potential::with_defaults(kind);
                PotentialRenderer::new(path, None, style.clone())
                    .plot(potential, &potential.default_domain())
            }
            Self::Spring { axis, centerline } => {
                draw_spiral(path, DEFAULT_LOOPS, axis, centerline, style)
            }
        }
    }
}

/// The full illustration set in rendering order: the seven potentials,
/// then a plain and a centerline spring along each axis.
pub fn figures() -> Vec<Figure> {
    let potentials = PotentialKind::ALL.into_iter().map(Figure::Potential);
    let springs = Axis::ALL.into_iter().flat_map(|axis| {
        [false, true].map(|centerline| Figure::Spring { axis, centerline })
    });
    potentials.chain(springs).collect()
}

/// Renders every figure into `output_dir`, creating it if needed.
///
/// Stops at the first failure. Returns the written paths in order.
#[instrument(skip_all, name = "gallery_workflow", fields(dir = %output_dir.display()))]
pub fn render_gallery(
    output_dir: &Path,
    style: &RenderStyle,
    format: OutputFormat,
    reporter: &ProgressReporter,
) -> Result<Vec<PathBuf>, RenderError> {
    std::fs::create_dir_all(output_dir).map_err(|source| RenderError::Io {
        path: output_dir.to_path_buf(),
        source,
    })?;

    let figures = figures();
    info!(count = figures.len(), ?format, "Rendering gallery.");
    reporter.report(Progress::TaskStart {
        total_steps: figures.len() as u64,
    });

    let mut written = Vec::with_capacity(figures.len());
    for figure in &figures {
        let file_name = figure.file_name(format);
        reporter.report(Progress::Message(file_name.clone()));
        written.push(figure.render(&output_dir.join(file_name), style)?);
        reporter.report(Progress::TaskIncrement);
    }

    reporter.report(Progress::TaskFinish);
    info!("Gallery complete.");
    Ok(written)
}
