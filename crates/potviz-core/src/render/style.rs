use plotters::style::RGBColor;
use thiserror::Error;

pub const DEFAULT_WIDTH_PX: u32 = 640;
pub const DEFAULT_HEIGHT_PX: u32 = 480;
pub const DEFAULT_DPI: f64 = 100.0;
pub const DEFAULT_PAD_PX: f64 = 10.0;

pub const CURVE_COLOR: RGBColor = RGBColor(0, 0, 255);
pub const INK_COLOR: RGBColor = RGBColor(0, 0, 0);

pub const CURVE_WIDTH_PT: f64 = 8.0;
pub const REFERENCE_LINE_WIDTH_PT: f64 = 8.0;
pub const CENTERLINE_WIDTH_PT: f64 = 2.0;
pub const DEFAULT_SPINE_WIDTH_PT: f64 = 0.8;
pub const FINAL_SPINE_WIDTH_PT: f64 = 8.0;

const POINTS_PER_INCH: f64 = 72.0;

#[derive(Debug, Error, PartialEq, Clone)]
pub enum ConfigError {
    #[error("Invalid value for '{name}': {reason}")]
    InvalidParameter { name: &'static str, reason: String },
}

/// Line color and width in points.
#[derive(Debug, Clone, Copy)]
pub struct Stroke {
    pub color: RGBColor,
    pub width_pt: f64,
}

impl Stroke {
    pub const fn new(color: RGBColor, width_pt: f64) -> Self {
        Self { color, width_pt }
    }

    pub const fn curve() -> Self {
        Self::new(CURVE_COLOR, CURVE_WIDTH_PT)
    }

    pub const fn reference_line() -> Self {
        Self::new(INK_COLOR, REFERENCE_LINE_WIDTH_PT)
    }

    pub const fn centerline() -> Self {
        Self::new(INK_COLOR, CENTERLINE_WIDTH_PT)
    }
}

/// Hand-drawn wiggle applied to every stroke.
///
/// `scale` is the amplitude perpendicular to the line and `length` the
/// wavelength along it, both in points; `randomness` stretches or shrinks
/// the wavelength from sample to sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SketchParams {
    pub scale: f64,
    pub length: f64,
    pub randomness: f64,
    pub seed: u64,
}

impl Default for SketchParams {
    fn default() -> Self {
        Self {
            scale: 1.0,
            length: 100.0,
            randomness: 2.0,
            seed: 0,
        }
    }
}

/// Everything that affects how a figure is turned into pixels.
///
/// Passed explicitly to every save call; there is no global style.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderStyle {
    pub width_px: u32,
    pub height_px: u32,
    pub dpi: f64,
    pub pad_px: f64,
    pub transparent: bool,
    pub sketch: Option<SketchParams>,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            width_px: DEFAULT_WIDTH_PX,
            height_px: DEFAULT_HEIGHT_PX,
            dpi: DEFAULT_DPI,
            pad_px: DEFAULT_PAD_PX,
            transparent: true,
            sketch: None,
        }
    }
}

impl RenderStyle {
    pub fn builder() -> RenderStyleBuilder {
        RenderStyleBuilder::new()
    }

    #[inline]
    pub fn points_to_px(&self, points: f64) -> f64 {
        points * self.dpi / POINTS_PER_INCH
    }
}

#[derive(Default)]
pub struct RenderStyleBuilder {
    width_px: Option<u32>,
    height_px: Option<u32>,
    dpi: Option<f64>,
    pad_px: Option<f64>,
    transparent: Option<bool>,
    sketch: Option<SketchParams>,
}

impl RenderStyleBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn size(mut self, width_px: u32, height_px: u32) -> Self {
        self.width_px = Some(width_px);
        self.height_px = Some(height_px);
        self
    }
    pub fn dpi(mut self, dpi: f64) -> Self {
        self.dpi = Some(dpi);
        self
    }
    pub fn pad_px(mut self, pad: f64) -> Self {
        self.pad_px = Some(pad);
        self
    }
    pub fn transparent(mut self, transparent: bool) -> Self {
        self.transparent = Some(transparent);
        self
    }
    pub fn sketch(mut self, params: SketchParams) -> Self {
        self.sketch = Some(params);
        self
    }

    pub fn build(self) -> Result<RenderStyle, ConfigError> {
        let defaults = RenderStyle::default();
        let style = RenderStyle {
            width_px: self.width_px.unwrap_or(defaults.width_px),
            height_px: self.height_px.unwrap_or(defaults.height_px),
            dpi: self.dpi.unwrap_or(defaults.dpi),
            pad_px: self.pad_px.unwrap_or(defaults.pad_px),
            transparent: self.transparent.unwrap_or(defaults.transparent),
            sketch: self.sketch,
        };

        if style.width_px == 0 || style.height_px == 0 {
            return Err(invalid(
                "size",
                format!("{}x{} has a zero dimension", style.width_px, style.height_px),
            ));
        }
        if !(style.dpi.is_finite() && style.dpi > 0.0) {
            return Err(invalid("dpi", format!("{} is not a positive number", style.dpi)));
        }
        if !(style.pad_px.is_finite() && style.pad_px >= 0.0) {
            return Err(invalid(
                "pad_px",
                format!("{} is not a non-negative number", style.pad_px),
            ));
        }
        if let Some(sketch) = &style.sketch {
            let finite = [sketch.scale, sketch.length, sketch.randomness]
                .iter()
                .all(|v| v.is_finite());
            if !finite || sketch.length <= 0.0 || sketch.randomness <= 0.0 {
                return Err(invalid(
                    "sketch",
                    "length and randomness must be positive and all values finite".to_string(),
                ));
            }
        }

        Ok(style)
    }
}

fn invalid(name: &'static str, reason: String) -> ConfigError {
    ConfigError::InvalidParameter { name, reason }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_without_overrides_matches_default() {
        assert_eq!(RenderStyle::builder().build().unwrap(), RenderStyle::default());
    }

    #[test]
    fn builder_applies_overrides() {
        let style = RenderStyle::builder()
            .size(800, 600)
            .dpi(200.0)
            .transparent(false)
            .sketch(SketchParams::default())
            .build()
            .unwrap();
        assert_eq!((style.width_px, style.height_px), (800, 600));
        assert_eq!(style.dpi, 200.0);
        assert!(!style.transparent);
        assert_eq!(style.sketch, Some(SketchParams::default()));
    }

    #[test]
    fn builder_rejects_zero_size() {
        let result = RenderStyle::builder().size(0, 480).build();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidParameter { name: "size", .. })
        ));
    }

    #[test]
    fn builder_rejects_non_positive_dpi() {
        assert!(RenderStyle::builder().dpi(0.0).build().is_err());
        assert!(RenderStyle::builder().dpi(f64::NAN).build().is_err());
    }

    #[test]
    fn builder_rejects_degenerate_sketch_parameters() {
        let sketch = SketchParams {
            length: 0.0,
            ..SketchParams::default()
        };
        assert!(RenderStyle::builder().sketch(sketch).build().is_err());
    }

    #[test]
    fn points_convert_to_pixels_through_dpi() {
        let style = RenderStyle::default();
        assert!((style.points_to_px(72.0) - 100.0).abs() < 1e-12);
        assert!((style.points_to_px(8.0) - 11.111_111_111_111).abs() < 1e-9);
    }
}
