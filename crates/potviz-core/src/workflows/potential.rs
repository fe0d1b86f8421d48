use crate::core::curve::{Abscissa, Curve};
use crate::core::domain::Domain;
use crate::core::potentials::{Potential, PotentialKind};
use crate::render::canvas::{Canvas, Spine};
use crate::render::error::RenderError;
use crate::render::style::{FINAL_SPINE_WIDTH_PT, RenderStyle, Stroke};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// How a potential is placed on its axes.
#[derive(Debug, Clone, Copy)]
struct Framing {
    x_limits: Option<(f64, f64)>,
    y_limits: (f64, f64),
    abscissa: Abscissa,
    clip: bool,
    reference_line: Option<f64>,
    hidden_spines: &'static [Spine],
}

impl Framing {
    const fn indexed(x_limits: (f64, f64), y_limits: (f64, f64)) -> Self {
        Self {
            x_limits: Some(x_limits),
            y_limits,
            abscissa: Abscissa::SampleIndex,
            clip: true,
            reference_line: None,
            hidden_spines: &[],
        }
    }

    const fn for_kind(kind: PotentialKind) -> Self {
        match kind {
            PotentialKind::Bond => Self::indexed((-50.0, 200.0), (-2.0, 100.0)),
            PotentialKind::Angle => Self::indexed((-50.0, 200.0), (-2.0, 200.0)),
            PotentialKind::Improper => Self {
                clip: false,
                ..Self::indexed((40.0, 200.0), (-2.0, 200.0))
            },
            PotentialKind::Torsion => Self {
                abscissa: Abscissa::Coordinate,
                ..Self::indexed((0.0, 15.0), (0.0, 2.5))
            },
            PotentialKind::VanDerWaals => Self {
                abscissa: Abscissa::Coordinate,
                reference_line: Some(0.3),
                hidden_spines: &[Spine::Bottom],
                ..Self::indexed((3.0, 12.0), (-2.0, 2.0))
            },
            PotentialKind::Electrostatic => Self {
                x_limits: None,
                y_limits: (-10.0, 2.0),
                abscissa: Abscissa::Coordinate,
                clip: true,
                reference_line: Some(0.5),
                hidden_spines: &[Spine::Bottom],
            },
            PotentialKind::Morse => Self {
                abscissa: Abscissa::Coordinate,
                hidden_spines: &[Spine::Left, Spine::Bottom],
                ..Self::indexed((-5.0, 14.0), (-2.0, 2.0))
            },
        }
    }
}

/// Draws one potential energy curve into one image file.
///
/// Each formula method consumes the renderer, so every instance produces
/// exactly one figure. Bond, angle and improper curves put the sample
/// index rather than the displacement on the horizontal axis.
#[derive(Debug, Clone)]
pub struct PotentialRenderer {
    filename: PathBuf,
    x_range: Option<(f64, f64)>,
    style: RenderStyle,
    canvas: Canvas,
}

impl PotentialRenderer {
    pub fn new(
        filename: impl Into<PathBuf>,
        x_range: Option<(f64, f64)>,
        style: RenderStyle,
    ) -> Self {
        let mut canvas = Canvas::new();
        canvas.hide_spine(Spine::Top);
        canvas.hide_spine(Spine::Right);
        Self {
            filename: filename.into(),
            x_range,
            style,
            canvas,
        }
    }

    pub fn filename(&self) -> &Path {
        &self.filename
    }

    /// Stored for callers; no formula reads it.
    pub fn x_range(&self) -> Option<(f64, f64)> {
        self.x_range
    }

    pub fn style(&self) -> &RenderStyle {
        &self.style
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn bond(self, domain: &Domain, k: f64) -> Result<PathBuf, RenderError> {
        self.plot(Potential::Bond { k }, domain)
    }

    pub fn angle(self, domain: &Domain, k: f64) -> Result<PathBuf, RenderError> {
        self.plot(Potential::Angle { k }, domain)
    }

    pub fn torsion(self, domain: &Domain) -> Result<PathBuf, RenderError> {
        self.plot(Potential::Torsion, domain)
    }

    pub fn improper(self, domain: &Domain) -> Result<PathBuf, RenderError> {
        self.plot(Potential::Improper, domain)
    }

    pub fn vdw(self, domain: &Domain, epsilon: f64, sigma: f64) -> Result<PathBuf, RenderError> {
        self.plot(Potential::VanDerWaals { epsilon, sigma }, domain)
    }

    pub fn electrostatic(self, domain: &Domain) -> Result<PathBuf, RenderError> {
        self.plot(Potential::Electrostatic, domain)
    }

    pub fn morse(
        self,
        domain: &Domain,
        well_depth: f64,
        width: f64,
        equilibrium: f64,
    ) -> Result<PathBuf, RenderError> {
        self.plot(
            Potential::Morse {
                well_depth,
                width,
                equilibrium,
            },
            domain,
        )
    }

    /// Draws `potential` over `domain` and writes the figure.
    #[instrument(skip_all, fields(kind = %potential.kind(), path = %self.filename.display()))]
    pub fn plot(mut self, potential: Potential, domain: &Domain) -> Result<PathBuf, RenderError> {
        let curve = self.draw(potential, domain)?;
        info!(samples = curve.len(), "Rendering potential.");
        self.finalize()
    }

    fn draw(&mut self, potential: Potential, domain: &Domain) -> Result<Curve, RenderError> {
        let framing = Framing::for_kind(potential.kind());
        let curve = Curve::sample(domain, framing.abscissa, |x| potential.evaluate(x))?;

        if let Some((min, max)) = framing.x_limits {
            self.canvas.set_xlim(min, max);
        }
        let (y_min, y_max) = framing.y_limits;
        self.canvas.set_ylim(y_min, y_max);
        for &spine in framing.hidden_spines {
            self.canvas.hide_spine(spine);
        }

        if let Some(y) = framing.reference_line {
            self.canvas.axhline(y, Stroke::reference_line());
        }
        let points = curve.points().to_vec();
        if framing.clip {
            self.canvas.plot(points, Stroke::curve());
        } else {
            self.canvas.plot_unclipped(points, Stroke::curve());
        }

        debug!(first = ?curve.first(), last = ?curve.last(), "Sampled curve.");
        Ok(curve)
    }

    fn finalize(mut self) -> Result<PathBuf, RenderError> {
        self.canvas.set_spine_width(FINAL_SPINE_WIDTH_PT);
        self.canvas.save(&self.filename, &self.style)?;
        Ok(self.filename)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::potentials::{DEFAULT_BOND_K, DEFAULT_LJ_EPSILON, DEFAULT_LJ_SIGMA};
    use crate::core::curve::CurveError;
    use crate::core::domain::DomainError;
    use crate::render::canvas::Element;
    use tempfile::tempdir;

    fn renderer(path: &Path) -> PotentialRenderer {
        PotentialRenderer::new(path, None, RenderStyle::default())
    }

    fn curve_points(canvas: &Canvas) -> (&[(f64, f64)], bool) {
        canvas
            .elements()
            .iter()
            .find_map(|element| match element {
                Element::Polyline { points, clip, .. } => Some((points.as_slice(), *clip)),
                Element::HorizontalLine { .. } => None,
            })
            .unwrap()
    }

    #[test]
    fn new_renderer_hides_top_and_right_spines() {
        let renderer = PotentialRenderer::new("out.png", Some((-1.0, 1.0)), RenderStyle::default());
        let canvas = renderer.canvas();
        assert!(!canvas.is_spine_visible(Spine::Top));
        assert!(!canvas.is_spine_visible(Spine::Right));
        assert!(canvas.is_spine_visible(Spine::Left));
        assert!(canvas.is_spine_visible(Spine::Bottom));
        assert_eq!(renderer.x_range(), Some((-1.0, 1.0)));
        assert_eq!(renderer.filename(), Path::new("out.png"));
    }

    #[test]
    fn bond_plots_values_against_sample_index() {
        let mut renderer = renderer(Path::new("unused.png"));
        let potential = Potential::Bond { k: DEFAULT_BOND_K };
        let curve = renderer
            .draw(potential, &potential.default_domain())
            .unwrap();

        assert_eq!(curve.len(), 41);
        assert_eq!(curve.first(), Some((0.0, 80.0)));
        let (last_x, last_y) = curve.last().unwrap();
        assert_eq!(last_x, 40.0);
        assert!((last_y - 80.0).abs() < 1e-6);
        assert_eq!(renderer.canvas().x_limits(), Some((-50.0, 200.0)));
        assert_eq!(renderer.canvas().y_limits(), Some((-2.0, 100.0)));
    }

    #[test]
    fn vdw_draws_reference_line_before_curve_and_hides_bottom_spine() {
        let mut renderer = renderer(Path::new("unused.png"));
        let potential = Potential::VanDerWaals {
            epsilon: DEFAULT_LJ_EPSILON,
            sigma: DEFAULT_LJ_SIGMA,
        };
        renderer.draw(potential, &potential.default_domain()).unwrap();

        let elements = renderer.canvas().elements();
        assert!(matches!(elements[0], Element::HorizontalLine { y, .. } if y == 0.3));
        assert!(matches!(elements[1], Element::Polyline { .. }));
        assert!(!renderer.canvas().is_spine_visible(Spine::Bottom));
        assert!(renderer.canvas().is_spine_visible(Spine::Left));
    }

    #[test]
    fn electrostatic_leaves_horizontal_limits_to_autoscale() {
        let mut renderer = renderer(Path::new("unused.png"));
        renderer
            .draw(Potential::Electrostatic, &Domain::arange(0.2, 8.3, 0.2))
            .unwrap();
        assert_eq!(renderer.canvas().x_limits(), None);
        assert_eq!(renderer.canvas().y_limits(), Some((-10.0, 2.0)));
    }

    #[test]
    fn improper_curve_is_not_clipped() {
        let mut renderer = renderer(Path::new("unused.png"));
        renderer
            .draw(Potential::Improper, &Domain::arange(-8.0, 8.2, 0.2))
            .unwrap();
        let (points, clip) = curve_points(renderer.canvas());
        assert!(!clip);
        assert_eq!(points.len(), 81);
    }

    #[test]
    fn morse_hides_left_and_bottom_spines() {
        let mut renderer = renderer(Path::new("unused.png"));
        renderer
            .draw(
                Potential::with_defaults(PotentialKind::Morse),
                &Domain::arange(-3.0, 12.0, 0.1),
            )
            .unwrap();
        for spine in Spine::ALL {
            assert!(!renderer.canvas().is_spine_visible(spine));
        }
    }

    #[test]
    fn torsion_writes_png_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("potential_torsion.png");
        let written = renderer(&path)
            .torsion(&Domain::linspace(0.0, 4.0 * std::f64::consts::PI, 1000))
            .unwrap();
        assert_eq!(written, path);
        let image = image::open(&path).unwrap();
        assert!(image.width() > 0 && image.height() > 0);
    }

    #[test]
    fn every_default_potential_renders() {
        let dir = tempdir().unwrap();
        for kind in PotentialKind::ALL {
            let potential = Potential::with_defaults(kind);
            let path = dir.path().join(format!("potential_{}.png", kind.name()));
            renderer(&path)
                .plot(potential, &potential.default_domain())
                .unwrap();
            assert!(path.is_file(), "{kind} was not written");
        }
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 7);
    }

    #[test]
    fn rendering_same_path_twice_overwrites() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("potential_bond.png");
        let domain = Domain::arange(-4.0, 4.2, 0.2);
        renderer(&path).bond(&domain, 10.0).unwrap();
        renderer(&path).bond(&domain, 5.0).unwrap();
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn division_by_zero_in_domain_is_reported() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("potential_electrostatic.png");
        let result = renderer(&path).electrostatic(&Domain::arange(-1.0, 1.0, 0.5));
        assert!(matches!(result, Err(RenderError::Curve(_))));
        assert!(!path.exists());
    }

    #[test]
    fn oversized_domain_is_refused_without_writing() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("potential_bond.png");
        let result = renderer(&path).bond(&Domain::arange(-4.0, 4.2, 1e-30), 10.0);
        assert!(matches!(
            result,
            Err(RenderError::Curve(CurveError::Domain(
                DomainError::TooManySamples { .. }
            )))
        ));
        assert!(!path.exists());
    }

    #[test]
    fn unsupported_extension_is_reported() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("potential_bond.jpg");
        let result = renderer(&path).bond(&Domain::arange(-4.0, 4.2, 0.2), 10.0);
        assert!(matches!(result, Err(RenderError::UnsupportedFormat { .. })));
    }
}
