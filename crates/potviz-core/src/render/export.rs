use super::canvas::Scene;
use super::error::RenderError;
use super::layout::PixelRect;
use super::style::RenderStyle;
use image::{ImageFormat, RgbImage, RgbaImage};
use plotters::coord::Shift;
use plotters::prelude::*;
use std::io::Cursor;
use std::path::Path;
use tracing::debug;

pub const MAX_CANVAS_PX: u32 = 16_384;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Png,
    Svg,
}

impl OutputFormat {
    pub fn from_path(path: &Path) -> Result<Self, RenderError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);
        match extension.as_deref() {
            Some("png") => Ok(Self::Png),
            Some("svg") => Ok(Self::Svg),
            _ => Err(RenderError::UnsupportedFormat {
                path: path.to_path_buf(),
            }),
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Svg => "svg",
        }
    }
}

fn output_size(bounds: &PixelRect, pad_px: f64) -> (f64, f64) {
    (
        (bounds.width() + 2.0 * pad_px).ceil().max(1.0),
        (bounds.height() + 2.0 * pad_px).ceil().max(1.0),
    )
}

pub fn check_extent(bounds: &PixelRect, style: &RenderStyle) -> Result<(), RenderError> {
    let (width, height) = output_size(bounds, style.pad_px);
    let max = MAX_CANVAS_PX as f64;
    if !(width.is_finite() && height.is_finite()) || width > max || height > max {
        return Err(RenderError::CanvasTooLarge {
            width,
            height,
            max: MAX_CANVAS_PX,
        });
    }
    Ok(())
}

/// Writes a laid-out scene, cropped to its bounds plus padding.
pub fn write(scene: &Scene, path: &Path, style: &RenderStyle) -> Result<(), RenderError> {
    let format = OutputFormat::from_path(path)?;
    check_extent(&scene.bounds, style)?;

    let (width, height) = output_size(&scene.bounds, style.pad_px);
    let size = (width as u32, height as u32);
    let offset = (
        style.pad_px - scene.bounds.left,
        style.pad_px - scene.bounds.top,
    );
    debug!(?format, width = size.0, height = size.1, "Writing figure.");

    match format {
        OutputFormat::Png => write_png(scene, path, size, offset, style.transparent),
        OutputFormat::Svg => write_svg(scene, path, size, offset, style.transparent),
    }
}

fn backend_error(e: impl std::fmt::Display) -> RenderError {
    RenderError::Backend(e.to_string())
}

fn io_error(path: &Path) -> impl FnOnce(std::io::Error) -> RenderError + '_ {
    move |source| RenderError::Io {
        path: path.to_path_buf(),
        source,
    }
}

fn draw_scene<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    scene: &Scene,
    offset: (f64, f64),
) -> Result<(), RenderError> {
    for path in &scene.paths {
        let points: Vec<(i32, i32)> = path
            .points
            .iter()
            .map(|&(x, y)| ((x + offset.0).round() as i32, (y + offset.1).round() as i32))
            .collect();
        let width = path.width_px.round().max(1.0) as u32;

        area.draw(&PathElement::new(
            points.clone(),
            ShapeStyle::from(&path.color).stroke_width(width),
        ))
        .map_err(backend_error)?;

        if path.round_joins && width > 2 && points.len() > 2 {
            // Same diameter as the stroke.
            let radius = (width / 2) as i32;
            for &joint in &points[1..points.len() - 1] {
                area.draw(&Circle::new(joint, radius, path.color.filled()))
                    .map_err(backend_error)?;
            }
        }
    }
    Ok(())
}

fn rasterize(
    scene: &Scene,
    size: (u32, u32),
    offset: (f64, f64),
    background: &RGBColor,
) -> Result<Vec<u8>, RenderError> {
    let mut buffer = vec![0u8; size.0 as usize * size.1 as usize * 3];
    {
        let area = BitMapBackend::with_buffer(&mut buffer, size).into_drawing_area();
        area.fill(background).map_err(backend_error)?;
        draw_scene(&area, scene, offset)?;
        area.present().map_err(backend_error)?;
    }
    Ok(buffer)
}

/// Recovers straight RGBA from the same scene drawn over white and over
/// black. Coverage shows up as the difference between the two passes.
pub(crate) fn recover_alpha(over_white: &[u8], over_black: &[u8]) -> Vec<u8> {
    let mut rgba = Vec::with_capacity(over_white.len() / 3 * 4);
    for (w, b) in over_white.chunks_exact(3).zip(over_black.chunks_exact(3)) {
        let coverage: u32 = (0..3)
            .map(|c| 255 - u32::from(w[c].saturating_sub(b[c])))
            .sum();
        let alpha = (coverage as f64 / 3.0).round() as u32;
        if alpha == 0 {
            rgba.extend_from_slice(&[0, 0, 0, 0]);
            continue;
        }
        for &channel in b {
            let straight = (u32::from(channel) * 255 + alpha / 2) / alpha;
            rgba.push(straight.min(255) as u8);
        }
        rgba.push(alpha as u8);
    }
    rgba
}

/// Encodes the scene as PNG bytes without touching the filesystem.
fn encode_png(
    scene: &Scene,
    path: &Path,
    size: (u32, u32),
    offset: (f64, f64),
    transparent: bool,
) -> Result<Vec<u8>, RenderError> {
    let over_white = rasterize(scene, size, offset, &WHITE)?;
    let size_mismatch = || backend_error("pixel buffer does not match image size");

    let mut encoded = Cursor::new(Vec::new());
    let result = if transparent {
        let over_black = rasterize(scene, size, offset, &BLACK)?;
        let rgba = recover_alpha(&over_white, &over_black);
        RgbaImage::from_raw(size.0, size.1, rgba)
            .ok_or_else(size_mismatch)?
            .write_to(&mut encoded, ImageFormat::Png)
    } else {
        RgbImage::from_raw(size.0, size.1, over_white)
            .ok_or_else(size_mismatch)?
            .write_to(&mut encoded, ImageFormat::Png)
    };
    result.map_err(|source| RenderError::Encode {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(encoded.into_inner())
}

fn write_png(
    scene: &Scene,
    path: &Path,
    size: (u32, u32),
    offset: (f64, f64),
    transparent: bool,
) -> Result<(), RenderError> {
    let bytes = encode_png(scene, path, size, offset, transparent)?;
    std::fs::write(path, bytes).map_err(io_error(path))
}

fn write_svg(
    scene: &Scene,
    path: &Path,
    size: (u32, u32),
    offset: (f64, f64),
    transparent: bool,
) -> Result<(), RenderError> {
    let mut content = String::new();
    {
        let area = SVGBackend::with_string(&mut content, size).into_drawing_area();
        if !transparent {
            area.fill(&WHITE).map_err(backend_error)?;
        }
        draw_scene(&area, scene, offset)?;
        area.present().map_err(backend_error)?;
    }
    std::fs::write(path, content).map_err(io_error(path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::canvas::ScenePath;
    use crate::render::style::CURVE_COLOR;
    use std::path::PathBuf;
    use tempfile::tempdir;

    fn diagonal_scene() -> Scene {
        Scene {
            paths: vec![ScenePath {
                points: vec![(0.0, 0.0), (40.0, 20.0), (80.0, 0.0)],
                color: CURVE_COLOR,
                width_px: 6.0,
                round_joins: true,
            }],
            bounds: PixelRect::new(-3.0, -3.0, 83.0, 23.0),
        }
    }

    #[test]
    fn format_follows_extension_ignoring_case() {
        assert_eq!(
            OutputFormat::from_path(Path::new("a/b/plot.PNG")).unwrap(),
            OutputFormat::Png
        );
        assert_eq!(
            OutputFormat::from_path(Path::new("plot.svg")).unwrap(),
            OutputFormat::Svg
        );
    }

    #[test]
    fn unknown_or_missing_extension_is_unsupported() {
        for name in ["plot.jpg", "plot", "plot.png.txt"] {
            assert!(matches!(
                OutputFormat::from_path(&PathBuf::from(name)),
                Err(RenderError::UnsupportedFormat { .. })
            ));
        }
    }

    #[test]
    fn recover_alpha_separates_coverage_from_color() {
        let over_white = [255, 255, 255, 0, 0, 255, 128, 128, 255];
        let over_black = [0, 0, 0, 0, 0, 255, 0, 0, 127];
        let rgba = recover_alpha(&over_white, &over_black);
        assert_eq!(&rgba[0..4], &[0, 0, 0, 0]);
        assert_eq!(&rgba[4..8], &[0, 0, 255, 255]);
        assert_eq!(&rgba[8..12], &[0, 0, 255, 127]);
    }

    #[test]
    fn extent_beyond_limit_is_rejected() {
        let bounds = PixelRect::new(0.0, 0.0, 1e6, 10.0);
        assert!(matches!(
            check_extent(&bounds, &RenderStyle::default()),
            Err(RenderError::CanvasTooLarge { .. })
        ));
    }

    #[test]
    fn png_is_cropped_to_bounds_with_transparent_background() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("scene.png");
        write(&diagonal_scene(), &path, &RenderStyle::default()).unwrap();

        let image = image::open(&path).unwrap().to_rgba8();
        assert_eq!(image.dimensions(), (106, 46));
        assert_eq!(image.get_pixel(0, 0).0[3], 0);
        assert!(image.pixels().any(|p| p.0 == [0, 0, 255, 255]));
    }

    #[test]
    fn opaque_png_has_white_background() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("scene.png");
        let style = RenderStyle::builder().transparent(false).build().unwrap();
        write(&diagonal_scene(), &path, &style).unwrap();

        let image = image::open(&path).unwrap().to_rgba8();
        assert_eq!(image.get_pixel(0, 0).0, [255, 255, 255, 255]);
    }

    #[test]
    fn svg_output_contains_the_stroke() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("scene.svg");
        write(&diagonal_scene(), &path, &RenderStyle::default()).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("<svg"));
        assert!(content.contains("polyline") || content.contains("path"));
    }

    #[test]
    fn writing_twice_overwrites_the_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("scene.png");
        write(&diagonal_scene(), &path, &RenderStyle::default()).unwrap();
        write(&diagonal_scene(), &path, &RenderStyle::default()).unwrap();
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn missing_parent_directory_is_an_io_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("scene.png");
        assert!(matches!(
            write(&diagonal_scene(), &path, &RenderStyle::default()),
            Err(RenderError::Io { .. })
        ));
    }

    #[test]
    fn png_bytes_are_complete_before_any_file_exists() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("scene.png");
        let bytes = encode_png(&diagonal_scene(), &path, (106, 46), (13.0, 13.0), true).unwrap();

        assert!(!path.exists());
        let decoded = image::load_from_memory(&bytes).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (106, 46));
    }

    #[test]
    fn failed_write_leaves_no_file_behind() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("scene.png");
        let _ = write(&diagonal_scene(), &path, &RenderStyle::default());
        assert!(!path.exists());
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    fn painted_rows_in_column(scene: &Scene, column: u32) -> usize {
        let dir = tempdir().unwrap();
        let path = dir.path().join("line.png");
        let style = RenderStyle::builder().transparent(false).build().unwrap();
        write(scene, &path, &style).unwrap();

        let image = image::open(&path).unwrap().to_rgb8();
        (0..image.height())
            .filter(|&y| image.get_pixel(column, y).0[0] < 128)
            .count()
    }

    #[test]
    fn round_joins_do_not_thicken_densely_sampled_lines() {
        let line = |points: Vec<(f64, f64)>| Scene {
            paths: vec![ScenePath {
                points,
                color: CURVE_COLOR,
                width_px: 11.1,
                round_joins: true,
            }],
            bounds: PixelRect::new(0.0, 0.0, 100.0, 40.0),
        };
        let sparse = line(vec![(10.0, 20.0), (90.0, 20.0)]);
        let dense = line((10..=90).map(|x| (x as f64, 20.0)).collect());

        let sparse_rows = painted_rows_in_column(&sparse, 60);
        let dense_rows = painted_rows_in_column(&dense, 60);
        assert!(sparse_rows >= 10, "stroke covers {sparse_rows} rows");
        assert!(
            dense_rows <= sparse_rows + 1,
            "joins widen the stroke from {sparse_rows} to {dense_rows} rows"
        );
    }
}
