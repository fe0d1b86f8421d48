use super::domain::{DomainError, linspace};
use nalgebra::Point3;
use std::f64::consts::{PI, TAU};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub const HELIX_SAMPLES: usize = 1000;
pub const HELIX_START_ANGLE: f64 = -PI / 3.0;

const CENTERLINE_LEAD: f64 = -0.2;
const CENTERLINE_TRAIL: f64 = 1.2;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
#[error("Unsupported axis selector '{0}': expected one of 'x', 'y' or 'z'")]
pub struct AxisParseError(pub String);

#[derive(Debug, Error, PartialEq, Clone)]
pub enum SpiralError {
    #[error("Loop count must be finite, got {0}")]
    InvalidLoops(f64),
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error(transparent)]
    Axis(#[from] AxisParseError),
}

/// Principal axis a spring is drawn along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    pub fn name(&self) -> &'static str {
        match self {
            Self::X => "x",
            Self::Y => "y",
            Self::Z => "z",
        }
    }

    /// Places `along` on this axis and the circular cross-section on the
    /// other two, cycling x -> y -> z.
    fn arrange(&self, along: f64, cos: f64, sin: f64) -> Point3<f64> {
        match self {
            Self::X => Point3::new(along, cos, sin),
            Self::Y => Point3::new(sin, along, cos),
            Self::Z => Point3::new(cos, sin, along),
        }
    }
}

impl FromStr for Axis {
    type Err = AxisParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "x" => Ok(Self::X),
            "y" => Ok(Self::Y),
            "z" => Ok(Self::Z),
            _ => Err(AxisParseError(s.to_string())),
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Helix {
    axis: Axis,
    theta_max: f64,
    points: Vec<Point3<f64>>,
}

impl Helix {
    pub fn new(loops: f64, axis: Axis) -> Result<Self, SpiralError> {
        if !loops.is_finite() {
            return Err(SpiralError::InvalidLoops(loops));
        }
        let theta_max = loops * TAU;
        let points = linspace(HELIX_START_ANGLE, theta_max, HELIX_SAMPLES)?
            .into_iter()
            .map(|theta| axis.arrange(theta, theta.cos(), theta.sin()))
            .collect();

        Ok(Self {
            axis,
            theta_max,
            points,
        })
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    pub fn theta_max(&self) -> f64 {
        self.theta_max
    }

    pub fn points(&self) -> &[Point3<f64>] {
        &self.points
    }

    /// Straight segment through the middle of the coil, overhanging it by
    /// 20% of the angle span on both ends.
    pub fn centerline(&self) -> [Point3<f64>; 2] {
        [
            self.axis.arrange(CENTERLINE_LEAD * self.theta_max, 0.0, 0.0),
            self.axis.arrange(CENTERLINE_TRAIL * self.theta_max, 0.0, 0.0),
        ]
    }
}
