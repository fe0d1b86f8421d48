use plotters::coord::CoordTranslate;
use plotters::coord::cartesian::Cartesian2d;
use plotters::coord::types::RangedCoordf64;

/// Subplot fractions of the figure occupied by the axes box.
pub const AXES_LEFT: f64 = 0.125;
pub const AXES_RIGHT: f64 = 0.9;
pub const AXES_BOTTOM: f64 = 0.11;
pub const AXES_TOP: f64 = 0.88;

pub const AUTOSCALE_MARGIN: f64 = 0.05;
const NONSINGULAR_EXPANDER: f64 = 0.05;

/// Axis-aligned rectangle in pixel space, y growing downwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelRect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl PixelRect {
    pub fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    pub fn union(&self, other: &PixelRect) -> PixelRect {
        PixelRect::new(
            self.left.min(other.left),
            self.top.min(other.top),
            self.right.max(other.right),
            self.bottom.max(other.bottom),
        )
    }

    pub fn grow(&self, by: f64) -> PixelRect {
        PixelRect::new(
            self.left - by,
            self.top - by,
            self.right + by,
            self.bottom + by,
        )
    }

    /// Bounding box of a point set, `None` when the set is empty.
    pub fn enclosing(points: &[(f64, f64)]) -> Option<PixelRect> {
        let (&(x0, y0), rest) = points.split_first()?;
        Some(rest.iter().fold(
            PixelRect::new(x0, y0, x0, y0),
            |acc, &(x, y)| {
                PixelRect::new(acc.left.min(x), acc.top.min(y), acc.right.max(x), acc.bottom.max(y))
            },
        ))
    }
}

pub fn axes_rect(width_px: u32, height_px: u32) -> PixelRect {
    let w = width_px as f64;
    let h = height_px as f64;
    PixelRect::new(
        AXES_LEFT * w,
        (1.0 - AXES_TOP) * h,
        AXES_RIGHT * w,
        (1.0 - AXES_BOTTOM) * h,
    )
}

/// Maps data coordinates onto an axes rectangle through the plotters
/// coordinate spec a `build_cartesian_2d` chart would install.
///
/// The rectangle is snapped to whole pixels so strokes and spines share a
/// grid.
#[derive(Clone)]
pub struct Viewport {
    pub x: (f64, f64),
    pub y: (f64, f64),
    pub rect: PixelRect,
    coord: Cartesian2d<RangedCoordf64, RangedCoordf64>,
}

impl Viewport {
    pub fn new(x: (f64, f64), y: (f64, f64), rect: &PixelRect) -> Self {
        let rect = PixelRect::new(
            rect.left.round(),
            rect.top.round(),
            rect.right.round(),
            rect.bottom.round(),
        );
        let coord = Cartesian2d::new(
            x.0..x.1,
            y.0..y.1,
            (
                rect.left as i32..rect.right as i32,
                rect.bottom as i32..rect.top as i32,
            ),
        );
        Self { x, y, rect, coord }
    }

    pub fn to_pixel(&self, point: (f64, f64)) -> (f64, f64) {
        let (px, py) = self.coord.translate(&point);
        (f64::from(px), f64::from(py))
    }
}

impl std::fmt::Debug for Viewport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Viewport")
            .field("x", &self.x)
            .field("y", &self.y)
            .field("rect", &self.rect)
            .finish()
    }
}

/// Widens a zero-width or near-zero-width interval so it can be mapped.
pub fn nonsingular(min: f64, max: f64) -> (f64, f64) {
    let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
    let scale = lo.abs().max(hi.abs());
    if hi - lo > 1e-12 * scale.max(1e-300) {
        return (lo, hi);
    }
    if scale < 1e-300 {
        (-NONSINGULAR_EXPANDER, NONSINGULAR_EXPANDER)
    } else {
        (
            lo - NONSINGULAR_EXPANDER * lo.abs(),
            hi + NONSINGULAR_EXPANDER * hi.abs(),
        )
    }
}

pub fn autoscale(min: f64, max: f64, margin: f64) -> (f64, f64) {
    let (lo, hi) = nonsingular(min, max);
    let pad = (hi - lo) * margin;
    (lo - pad, hi + pad)
}

/// Shrinks `rect` around its centre so one data unit spans the same number
/// of pixels horizontally and vertically.
pub fn equal_aspect(rect: &PixelRect, x: (f64, f64), y: (f64, f64)) -> PixelRect {
    let sx = rect.width() / (x.1 - x.0).abs();
    let sy = rect.height() / (y.1 - y.0).abs();
    let scale = sx.min(sy);
    let w = scale * (x.1 - x.0).abs();
    let h = scale * (y.1 - y.0).abs();
    let cx = (rect.left + rect.right) / 2.0;
    let cy = (rect.top + rect.bottom) / 2.0;
    PixelRect::new(cx - w / 2.0, cy - h / 2.0, cx + w / 2.0, cy + h / 2.0)
}

/// Liang-Barsky clipping of the segment `a -> b` against the data window
/// `x` by `y`. plotters clamps out-of-range coordinates onto the drawing
/// area instead of cutting them, so lines leaving the axes are cut here.
pub fn clip_segment(
    a: (f64, f64),
    b: (f64, f64),
    x: (f64, f64),
    y: (f64, f64),
) -> Option<((f64, f64), (f64, f64))> {
    let (x_min, x_max) = (x.0.min(x.1), x.0.max(x.1));
    let (y_min, y_max) = (y.0.min(y.1), y.0.max(y.1));
    let dx = b.0 - a.0;
    let dy = b.1 - a.1;
    let mut t0 = 0.0_f64;
    let mut t1 = 1.0_f64;

    let edges = [
        (-dx, a.0 - x_min),
        (dx, x_max - a.0),
        (-dy, a.1 - y_min),
        (dy, y_max - a.1),
    ];
    for (p, q) in edges {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
            continue;
        }
        let t = q / p;
        if p < 0.0 {
            if t > t1 {
                return None;
            }
            t0 = t0.max(t);
        } else {
            if t < t0 {
                return None;
            }
            t1 = t1.min(t);
        }
    }

    let start = if t0 == 0.0 {
        a
    } else {
        (a.0 + t0 * dx, a.1 + t0 * dy)
    };
    let end = if t1 == 1.0 {
        b
    } else {
        (a.0 + t1 * dx, a.1 + t1 * dy)
    };
    Some((start, end))
}

/// Clips a data-space polyline to the window `x` by `y`, splitting it into
/// the runs that stay visible.
pub fn clip_polyline(
    points: &[(f64, f64)],
    x: (f64, f64),
    y: (f64, f64),
) -> Vec<Vec<(f64, f64)>> {
    let mut runs = Vec::new();
    let mut current: Vec<(f64, f64)> = Vec::new();

    for pair in points.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        match clip_segment(a, b, x, y) {
            None => flush(&mut current, &mut runs),
            Some((start, end)) => {
                if current.last() != Some(&start) {
                    flush(&mut current, &mut runs);
                    current.push(start);
                }
                current.push(end);
                if end != b {
                    flush(&mut current, &mut runs);
                }
            }
        }
    }
    flush(&mut current, &mut runs);
    runs
}

fn flush(current: &mut Vec<(f64, f64)>, runs: &mut Vec<Vec<(f64, f64)>>) {
    if current.len() >= 2 {
        runs.push(std::mem::take(current));
    } else {
        current.clear();
    }
}
