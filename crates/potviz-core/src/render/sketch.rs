use super::style::SketchParams;
use rand::Rng;
use std::f64::consts::TAU;

const RESAMPLE_STEP_PX: f64 = 1.0;

/// Resamples a pixel-space path every pixel and pushes each sample off the
/// line along its normal by a sine wave with a randomly advancing phase.
///
/// `px_per_pt` converts the sketch parameters from points to pixels. The
/// first and last points move like every other sample; paths shorter than
/// one pixel are returned unchanged.
pub fn roughen(
    points: &[(f64, f64)],
    params: &SketchParams,
    px_per_pt: f64,
    rng: &mut impl Rng,
) -> Vec<(f64, f64)> {
    if points.len() < 2 {
        return points.to_vec();
    }

    let amplitude = params.scale * px_per_pt;
    let wavelength = params.length * px_per_pt;
    let mut phase = 0.0_f64;
    let mut out = Vec::with_capacity(points.len());

    let segments = points.len() - 1;
    for (k, pair) in points.windows(2).enumerate() {
        let (a, b) = (pair[0], pair[1]);
        let (dx, dy) = (b.0 - a.0, b.1 - a.1);
        let length = dx.hypot(dy);
        if length < f64::EPSILON {
            continue;
        }
        let normal = (-dy / length, dx / length);
        let steps = (length / RESAMPLE_STEP_PX).ceil().max(1.0) as usize;

        // The last segment also emits its end point.
        let last = if k + 1 == segments { steps } else { steps - 1 };
        for i in 0..=last {
            let t = i as f64 / steps as f64;
            phase += params.randomness.powf(rng.gen_range(-1.0..1.0));
            let offset = amplitude * (phase * TAU / wavelength).sin();
            out.push((
                a.0 + t * dx + normal.0 * offset,
                a.1 + t * dy + normal.1 * offset,
            ));
        }
    }

    if out.len() < 2 {
        return points.to_vec();
    }
    out
}
