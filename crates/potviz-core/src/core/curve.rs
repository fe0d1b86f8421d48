use super::domain::{Domain, DomainError};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Clone)]
pub enum CurveError {
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error("Function value at x = {x} is not finite ({value})")]
    NonFinite { x: f64, value: f64 },
}

/// What goes on the horizontal axis of a sampled curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Abscissa {
    /// The sample's position in the sequence: 0, 1, 2, ...
    SampleIndex,
    /// The domain value the function was evaluated at.
    Coordinate,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Curve {
    points: Vec<(f64, f64)>,
}

impl Curve {
    pub fn sample<F>(domain: &Domain, abscissa: Abscissa, f: F) -> Result<Self, CurveError>
    where
        F: Fn(f64) -> f64,
    {
        let xs = domain.samples()?;
        let mut points = Vec::with_capacity(xs.len());

        for (i, &x) in xs.iter().enumerate() {
            let value = f(x);
            if !value.is_finite() {
                return Err(CurveError::NonFinite { x, value });
            }
            let h = match abscissa {
                Abscissa::SampleIndex => i as f64,
                Abscissa::Coordinate => x,
            };
            points.push((h, value));
        }

        Ok(Self { points })
    }

    pub fn points(&self) -> &[(f64, f64)] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first(&self) -> Option<(f64, f64)> {
        self.points.first().copied()
    }

    pub fn last(&self) -> Option<(f64, f64)> {
        self.points.last().copied()
    }
}
