use super::style::ConfigError;
use crate::core::curve::CurveError;
use crate::core::spiral::SpiralError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Curve sampling failed: {0}")]
    Curve(#[from] CurveError),

    #[error("Spring geometry failed: {0}")]
    Spiral(#[from] SpiralError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Unsupported output format for '{path}': expected a .png or .svg file", path = path.display())]
    UnsupportedFormat { path: PathBuf },

    #[error("Invalid {axis}-axis limits [{min}, {max}]")]
    InvalidLimits { axis: char, min: f64, max: f64 },

    #[error("Figure contains nothing to draw")]
    EmptyFigure,

    #[error("Figure of {width:.0}x{height:.0} px exceeds the {max} px limit")]
    CanvasTooLarge { width: f64, height: f64, max: u32 },

    #[error("I/O error for '{path}': {source}", path = path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to encode image '{path}': {source}", path = path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Drawing backend error: {0}")]
    Backend(String),
}
