use crate::cli::{ImageFormat, StyleArgs};
use crate::error::Result;
use potviz::render::export::OutputFormat;
use potviz::render::style::{RenderStyle, SketchParams};
use potviz::workflows::spring::DEFAULT_LOOPS;
use std::path::PathBuf;
use tracing::debug;

/// Values used when the command line leaves an option out.
#[derive(Debug, Clone)]
pub struct DefaultsConfig {
    pub output_dir: PathBuf,
    pub format: OutputFormat,
    pub loops: f64,
    pub transparent: bool,
    pub sketch: SketchParams,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            format: OutputFormat::Png,
            loops: DEFAULT_LOOPS,
            transparent: true,
            sketch: SketchParams::default(),
        }
    }
}

impl From<ImageFormat> for OutputFormat {
    fn from(format: ImageFormat) -> Self {
        match format {
            ImageFormat::Png => Self::Png,
            ImageFormat::Svg => Self::Svg,
        }
    }
}

/// Builds the render style from the global command line flags.
pub fn render_style(args: &StyleArgs, defaults: &DefaultsConfig) -> Result<RenderStyle> {
    let mut builder = RenderStyle::builder().transparent(defaults.transparent && !args.opaque);

    if let Some(dpi) = args.dpi {
        builder = builder.dpi(dpi);
    }
    if args.sketch {
        let seed = args.sketch_seed.unwrap_or(defaults.sketch.seed);
        builder = builder.sketch(SketchParams {
            seed,
            ..defaults.sketch
        });
    }

    let style = builder.build()?;
    debug!(?style, "Resolved render style.");
    Ok(style)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;

    fn style_args() -> StyleArgs {
        StyleArgs {
            sketch: false,
            sketch_seed: None,
            opaque: false,
            dpi: None,
        }
    }

    #[test]
    fn default_flags_produce_transparent_plain_style() {
        let style = render_style(&style_args(), &DefaultsConfig::default()).unwrap();
        assert_eq!(style, RenderStyle::default());
    }

    #[test]
    fn sketch_flag_enables_seeded_sketch() {
        let args = StyleArgs {
            sketch: true,
            sketch_seed: Some(42),
            ..style_args()
        };
        let style = render_style(&args, &DefaultsConfig::default()).unwrap();
        let sketch = style.sketch.unwrap();
        assert_eq!(sketch.seed, 42);
        assert_eq!(sketch.length, SketchParams::default().length);
    }

    #[test]
    fn opaque_flag_disables_transparency() {
        let args = StyleArgs {
            opaque: true,
            ..style_args()
        };
        let style = render_style(&args, &DefaultsConfig::default()).unwrap();
        assert!(!style.transparent);
    }

    #[test]
    fn non_positive_dpi_is_a_configuration_error() {
        let args = StyleArgs {
            dpi: Some(0.0),
            ..style_args()
        };
        assert!(matches!(
            render_style(&args, &DefaultsConfig::default()),
            Err(CliError::Config(_))
        ));
    }
}
