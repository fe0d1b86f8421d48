use super::error::RenderError;
use super::export;
use super::layout::{self, AUTOSCALE_MARGIN, PixelRect, Viewport};
use super::sketch;
use super::style::{DEFAULT_SPINE_WIDTH_PT, INK_COLOR, RenderStyle, Stroke};
use plotters::style::RGBColor;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::Path;
use tracing::{debug, instrument};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Spine {
    Left,
    Right,
    Top,
    Bottom,
}

impl Spine {
    pub const ALL: [Spine; 4] = [Spine::Left, Spine::Right, Spine::Top, Spine::Bottom];

    fn index(self) -> usize {
        match self {
            Self::Left => 0,
            Self::Right => 1,
            Self::Top => 2,
            Self::Bottom => 3,
        }
    }

    fn endpoints(self, rect: &PixelRect) -> [(f64, f64); 2] {
        match self {
            Self::Left => [(rect.left, rect.top), (rect.left, rect.bottom)],
            Self::Right => [(rect.right, rect.top), (rect.right, rect.bottom)],
            Self::Top => [(rect.left, rect.top), (rect.right, rect.top)],
            Self::Bottom => [(rect.left, rect.bottom), (rect.right, rect.bottom)],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct SpineState {
    visible: bool,
    width_pt: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Aspect {
    Auto,
    Equal,
}

#[derive(Debug, Clone)]
pub enum Element {
    Polyline {
        points: Vec<(f64, f64)>,
        stroke: Stroke,
        clip: bool,
    },
    /// Spans the full axes width at a data y value.
    HorizontalLine { y: f64, stroke: Stroke },
}

/// A stroke in output pixel space, ready to rasterize.
#[derive(Debug, Clone)]
pub struct ScenePath {
    pub points: Vec<(f64, f64)>,
    pub color: RGBColor,
    pub width_px: f64,
    pub round_joins: bool,
}

/// The laid-out figure: strokes in drawing order and the tight bounds
/// around them.
#[derive(Debug, Clone)]
pub struct Scene {
    pub paths: Vec<ScenePath>,
    pub bounds: PixelRect,
}

/// A single figure with one set of axes.
///
/// Drawing calls only record elements; nothing is rasterized until
/// [`Canvas::save`] lays the figure out against a [`RenderStyle`].
#[derive(Debug, Clone)]
pub struct Canvas {
    x_limits: Option<(f64, f64)>,
    y_limits: Option<(f64, f64)>,
    spines: [SpineState; 4],
    frame_visible: bool,
    aspect: Aspect,
    elements: Vec<Element>,
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new()
    }
}

impl Canvas {
    pub fn new() -> Self {
        Self {
            x_limits: None,
            y_limits: None,
            spines: [SpineState {
                visible: true,
                width_pt: DEFAULT_SPINE_WIDTH_PT,
            }; 4],
            frame_visible: true,
            aspect: Aspect::Auto,
            elements: Vec::new(),
        }
    }

    pub fn set_xlim(&mut self, min: f64, max: f64) {
        self.x_limits = Some((min, max));
    }

    pub fn set_ylim(&mut self, min: f64, max: f64) {
        self.y_limits = Some((min, max));
    }

    pub fn x_limits(&self) -> Option<(f64, f64)> {
        self.x_limits
    }

    pub fn y_limits(&self) -> Option<(f64, f64)> {
        self.y_limits
    }

    pub fn set_aspect(&mut self, aspect: Aspect) {
        self.aspect = aspect;
    }

    pub fn hide_spine(&mut self, spine: Spine) {
        self.spines[spine.index()].visible = false;
    }

    pub fn is_spine_visible(&self, spine: Spine) -> bool {
        self.spines[spine.index()].visible
    }

    pub fn spine_width_pt(&self, spine: Spine) -> f64 {
        self.spines[spine.index()].width_pt
    }

    /// Sets the width of every spine; hidden spines stay hidden.
    pub fn set_spine_width(&mut self, width_pt: f64) {
        for state in &mut self.spines {
            state.width_pt = width_pt;
        }
    }

    /// Removes the frame, spines and the axes box from the output.
    pub fn axis_off(&mut self) {
        for spine in Spine::ALL {
            self.hide_spine(spine);
        }
        self.frame_visible = false;
    }

    pub fn plot(&mut self, points: Vec<(f64, f64)>, stroke: Stroke) {
        self.elements.push(Element::Polyline {
            points,
            stroke,
            clip: true,
        });
    }

    /// Like [`Canvas::plot`], but the line may run outside the axes box.
    pub fn plot_unclipped(&mut self, points: Vec<(f64, f64)>, stroke: Stroke) {
        self.elements.push(Element::Polyline {
            points,
            stroke,
            clip: false,
        });
    }

    pub fn axhline(&mut self, y: f64, stroke: Stroke) {
        self.elements.push(Element::HorizontalLine { y, stroke });
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    fn resolve_limits(&self) -> Result<((f64, f64), (f64, f64)), RenderError> {
        let mut data_x: Option<(f64, f64)> = None;
        let mut data_y: Option<(f64, f64)> = None;
        let extend = |range: &mut Option<(f64, f64)>, v: f64| {
            *range = Some(match *range {
                Some((lo, hi)) => (lo.min(v), hi.max(v)),
                None => (v, v),
            });
        };

        for element in &self.elements {
            match element {
                Element::Polyline { points, .. } => {
                    for &(x, y) in points {
                        extend(&mut data_x, x);
                        extend(&mut data_y, y);
                    }
                }
                Element::HorizontalLine { y, .. } => extend(&mut data_y, *y),
            }
        }

        let resolve = |axis: char, fixed: Option<(f64, f64)>, data: Option<(f64, f64)>| {
            let (min, max) = match (fixed, data) {
                (Some(limits), _) => limits,
                (None, Some((lo, hi))) => layout::autoscale(lo, hi, AUTOSCALE_MARGIN),
                (None, None) => (0.0, 1.0),
            };
            if !min.is_finite() || !max.is_finite() || min == max {
                return Err(RenderError::InvalidLimits { axis, min, max });
            }
            Ok((min, max))
        };

        Ok((
            resolve('x', self.x_limits, data_x)?,
            resolve('y', self.y_limits, data_y)?,
        ))
    }

    pub fn viewport(&self, style: &RenderStyle) -> Result<Viewport, RenderError> {
        let (x, y) = self.resolve_limits()?;
        let base = layout::axes_rect(style.width_px, style.height_px);
        let rect = match self.aspect {
            Aspect::Auto => base,
            Aspect::Equal => layout::equal_aspect(&base, x, y),
        };
        Ok(Viewport::new(x, y, &rect))
    }

    /// Lays the figure out in pixel space: clipping, spines, sketch effect
    /// and tight bounds.
    pub fn layout(&self, style: &RenderStyle) -> Result<Scene, RenderError> {
        let viewport = self.viewport(style)?;
        let rect = viewport.rect;
        let mut paths = Vec::new();

        for element in &self.elements {
            match element {
                Element::Polyline {
                    points,
                    stroke,
                    clip,
                } => {
                    let runs = if *clip {
                        layout::clip_polyline(points, viewport.x, viewport.y)
                    } else if points.len() >= 2 {
                        vec![points.clone()]
                    } else {
                        Vec::new()
                    };
                    paths.extend(runs.into_iter().map(|run| ScenePath {
                        points: run.into_iter().map(|p| viewport.to_pixel(p)).collect(),
                        color: stroke.color,
                        width_px: style.points_to_px(stroke.width_pt),
                        round_joins: true,
                    }));
                }
                Element::HorizontalLine { y, stroke } => {
                    let (_, py) = viewport.to_pixel((viewport.x.0, *y));
                    if py >= rect.top && py <= rect.bottom {
                        paths.push(ScenePath {
                            points: vec![(rect.left, py), (rect.right, py)],
                            color: stroke.color,
                            width_px: style.points_to_px(stroke.width_pt),
                            round_joins: false,
                        });
                    }
                }
            }
        }

        for spine in Spine::ALL {
            let state = self.spines[spine.index()];
            if state.visible {
                paths.push(ScenePath {
                    points: spine.endpoints(&rect).to_vec(),
                    color: INK_COLOR,
                    width_px: style.points_to_px(state.width_pt),
                    round_joins: false,
                });
            }
        }

        let frame = self.frame_visible.then_some(rect);
        let mut bounds = tight_bounds(&paths, frame)?;
        export::check_extent(&bounds, style)?;

        if let Some(params) = &style.sketch {
            let mut rng = StdRng::seed_from_u64(params.seed);
            let px_per_pt = style.points_to_px(1.0);
            for path in &mut paths {
                path.points = sketch::roughen(&path.points, params, px_per_pt, &mut rng);
                path.round_joins = false;
            }
            bounds = tight_bounds(&paths, frame)?;
        }

        debug!(
            paths = paths.len(),
            width = bounds.width(),
            height = bounds.height(),
            "Laid out figure."
        );
        Ok(Scene { paths, bounds })
    }

    /// Lays out and writes the figure to `path`; the format follows the
    /// file extension. An existing file is overwritten.
    #[instrument(level = "debug", skip_all, fields(path = %path.display()))]
    pub fn save(&self, path: &Path, style: &RenderStyle) -> Result<(), RenderError> {
        let scene = self.layout(style)?;
        export::write(&scene, path, style)
    }
}

fn tight_bounds(paths: &[ScenePath], frame: Option<PixelRect>) -> Result<PixelRect, RenderError> {
    paths
        .iter()
        .filter_map(|path| PixelRect::enclosing(&path.points).map(|r| r.grow(path.width_px / 2.0)))
        .chain(frame)
        .reduce(|acc, r| acc.union(&r))
        .ok_or(RenderError::EmptyFigure)
}
