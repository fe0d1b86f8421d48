use super::layout::nonsingular;
use nalgebra::{Point3, Vector3};
use plotters::coord::CoordTranslate;
use plotters::coord::cartesian::Cartesian3d;
use plotters::coord::types::RangedCoordf64;
use std::ops::Range;

/// Pixels per unit of box aspect in the virtual 3D pane.
pub const PIXELS_PER_UNIT: f64 = 250.0;
const PANE_PX: i32 = 4096;

type Coord3d = Cartesian3d<RangedCoordf64, RangedCoordf64, RangedCoordf64>;

/// Orthographic camera looking at a data box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct View3d {
    pub azimuth_deg: f64,
    pub elevation_deg: f64,
    pub box_aspect: Vector3<f64>,
}

impl Default for View3d {
    fn default() -> Self {
        Self {
            azimuth_deg: -60.0,
            elevation_deg: 30.0,
            box_aspect: Vector3::new(4.0, 4.0, 3.0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DataBox {
    pub min: Point3<f64>,
    pub max: Point3<f64>,
}

impl DataBox {
    pub fn enclosing<'a>(points: impl IntoIterator<Item = &'a Point3<f64>>) -> Option<Self> {
        let mut iter = points.into_iter();
        let first = *iter.next()?;
        let (min, max) = iter.fold((first, first), |(lo, hi), p| {
            (
                Point3::new(lo.x.min(p.x), lo.y.min(p.y), lo.z.min(p.z)),
                Point3::new(hi.x.max(p.x), hi.y.max(p.y), hi.z.max(p.z)),
            )
        });
        Some(Self { min, max })
    }

    fn range(lo: f64, hi: f64) -> Range<f64> {
        let (lo, hi) = nonsingular(lo, hi);
        lo..hi
    }
}

impl View3d {
    /// Builds the plotters coordinate system for `bounds`.
    ///
    /// plotters keeps its vertical axis second, so data `(x, y, z)` is
    /// handed over as `(y, z, x)`; with that order its yaw and pitch are the
    /// azimuth and elevation.
    fn coord(&self, bounds: &DataBox) -> Coord3d {
        let pane = || (0..PANE_PX, 0..PANE_PX);
        let size = |aspect: f64| (aspect * PIXELS_PER_UNIT).round() as i32;

        let mut coord = Coord3d::with_projection(
            DataBox::range(bounds.min.y, bounds.max.y),
            DataBox::range(bounds.min.z, bounds.max.z),
            DataBox::range(bounds.min.x, bounds.max.x),
            pane(),
            |pb| pb.into_matrix(),
        );
        let (xs, ys) = pane();
        coord.set_coord_pixel_range(
            xs,
            ys,
            (
                size(self.box_aspect.y),
                size(self.box_aspect.z),
                size(self.box_aspect.x),
            ),
        );

        let (yaw, pitch) = (
            self.azimuth_deg.to_radians(),
            self.elevation_deg.to_radians(),
        );
        let (xs, ys) = pane();
        coord.set_projection(xs, ys, |mut pb| {
            pb.yaw = yaw;
            pb.pitch = pitch;
            pb.into_matrix()
        });
        coord
    }

    fn screen(coord: &Coord3d, p: &Point3<f64>) -> (f64, f64) {
        let (sx, sy) = coord.translate(&(p.y, p.z, p.x));
        let centre = PANE_PX / 2;
        (f64::from(sx - centre), f64::from(centre - sy))
    }

    /// Projects to screen pixels relative to the box centre, y pointing up.
    pub fn project(&self, p: &Point3<f64>, bounds: &DataBox) -> (f64, f64) {
        Self::screen(&self.coord(bounds), p)
    }

    pub fn project_all(&self, points: &[Point3<f64>], bounds: &DataBox) -> Vec<(f64, f64)> {
        let coord = self.coord(bounds);
        points.iter().map(|p| Self::screen(&coord, p)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Projected coordinates are whole pixels.
    const PIXEL_TOLERANCE: f64 = 1.5;

    fn unit_box() -> DataBox {
        DataBox {
            min: Point3::new(-1.0, -1.0, -1.0),
            max: Point3::new(1.0, 1.0, 1.0),
        }
    }

    #[test]
    fn box_centre_projects_to_origin() {
        let (x, y) = View3d::default().project(&Point3::origin(), &unit_box());
        assert!(x.abs() < PIXEL_TOLERANCE && y.abs() < PIXEL_TOLERANCE);
    }

    #[test]
    fn vertical_axis_projects_straight_up() {
        let view = View3d::default();
        let (x, y) = view.project(&Point3::new(0.0, 0.0, 1.0), &unit_box());
        assert!(x.abs() < PIXEL_TOLERANCE);
        let expected = 0.5 * 3.0 * PIXELS_PER_UNIT * 30f64.to_radians().cos();
        assert!((y - expected).abs() < PIXEL_TOLERANCE, "y = {y}");
    }

    #[test]
    fn default_view_looks_from_the_front_right() {
        let view = View3d::default();
        let (x_axis, _) = view.project(&Point3::new(1.0, 0.0, 0.0), &unit_box());
        let (y_axis, _) = view.project(&Point3::new(0.0, 1.0, 0.0), &unit_box());
        let half = 0.5 * 4.0 * PIXELS_PER_UNIT;
        assert!((x_axis - half * 60f64.to_radians().sin()).abs() < PIXEL_TOLERANCE);
        assert!((y_axis - half * 60f64.to_radians().cos()).abs() < PIXEL_TOLERANCE);
    }

    #[test]
    fn top_view_keeps_horizontal_plane_undistorted() {
        let view = View3d {
            azimuth_deg: -90.0,
            elevation_deg: 90.0,
            box_aspect: Vector3::new(1.0, 1.0, 1.0),
        };
        let (x, y) = view.project(&Point3::new(1.0, 0.0, 0.0), &unit_box());
        assert!((x - 0.5 * PIXELS_PER_UNIT).abs() < PIXEL_TOLERANCE);
        assert!(y.abs() < PIXEL_TOLERANCE);
    }

    #[test]
    fn enclosing_box_covers_all_points() {
        let points = [
            Point3::new(1.0, -2.0, 3.0),
            Point3::new(-1.0, 4.0, 0.0),
        ];
        let bounds = DataBox::enclosing(points.iter()).unwrap();
        assert_eq!(bounds.min, Point3::new(-1.0, -2.0, 0.0));
        assert_eq!(bounds.max, Point3::new(1.0, 4.0, 3.0));
        assert!(DataBox::enclosing(std::iter::empty()).is_none());
    }

    #[test]
    fn flat_box_is_widened_before_projection() {
        let flat = DataBox {
            min: Point3::new(-1.0, -1.0, 2.0),
            max: Point3::new(1.0, 1.0, 2.0),
        };
        let (x, y) = View3d::default().project(&Point3::new(0.0, 0.0, 2.0), &flat);
        assert!(x.is_finite() && y.is_finite());
        assert!(y.abs() < PIXEL_TOLERANCE);
    }

    #[test]
    fn project_all_matches_pointwise_projection() {
        let view = View3d::default();
        let points = [Point3::new(0.5, -0.25, 0.75), Point3::new(-1.0, 1.0, 0.0)];
        let all = view.project_all(&points, &unit_box());
        for (p, q) in points.iter().zip(all) {
            assert_eq!(view.project(p, &unit_box()), q);
        }
    }
}
