use crate::core::spiral::{Axis, Helix, SpiralError};
use crate::render::canvas::{Aspect, Canvas};
use crate::render::error::RenderError;
use crate::render::projection::{DataBox, View3d};
use crate::render::style::{RenderStyle, Stroke};
use nalgebra::Point3;
use std::path::{Path, PathBuf};
use tracing::{info, instrument};

pub const DEFAULT_LOOPS: f64 = 3.3333;

/// Draws a coil spring along `axis` and writes it to `filename`.
///
/// The helix is projected orthographically from the default 3D viewpoint
/// onto a frameless canvas. With `centerline` set, a thin black rod is
/// drawn through the coil after the helix.
#[instrument(skip(filename, style), fields(path = %filename.as_ref().display()))]
pub fn draw_spiral(
    filename: impl AsRef<Path>,
    loops: f64,
    axis: Axis,
    centerline: bool,
    style: &RenderStyle,
) -> Result<PathBuf, RenderError> {
    let filename = filename.as_ref();
    let helix = Helix::new(loops, axis)?;
    let rod = centerline.then(|| helix.centerline());

    let canvas = project_spring(&helix, rod.as_ref())?;
    canvas.save(filename, style)?;

    info!(samples = helix.points().len(), "Spring written.");
    Ok(filename.to_path_buf())
}

/// Like [`draw_spiral`], with the axis given as `"x"`, `"y"` or `"z"`.
pub fn draw_spiral_named(
    filename: impl AsRef<Path>,
    loops: f64,
    axis: &str,
    centerline: bool,
    style: &RenderStyle,
) -> Result<PathBuf, RenderError> {
    let axis: Axis = axis.parse().map_err(SpiralError::from)?;
    draw_spiral(filename, loops, axis, centerline, style)
}

fn project_spring(helix: &Helix, rod: Option<&[Point3<f64>; 2]>) -> Result<Canvas, RenderError> {
    let bounds = DataBox::enclosing(helix.points().iter().chain(rod.into_iter().flatten()))
        .ok_or(RenderError::EmptyFigure)?;
    let view = View3d::default();

    let mut canvas = Canvas::new();
    canvas.axis_off();
    canvas.set_aspect(Aspect::Equal);
    canvas.plot(view.project_all(helix.points(), &bounds), Stroke::curve());
    if let Some(rod) = rod {
        canvas.plot(view.project_all(rod, &bounds), Stroke::centerline());
    }
    Ok(canvas)
}
