use thiserror::Error;

/// Upper bound on the number of samples a domain may produce.
pub const MAX_SAMPLES: usize = 10_000_000;

#[derive(Debug, Error, PartialEq, Clone)]
pub enum DomainError {
    #[error("Domain bounds must be finite, got [{start}, {stop}]")]
    NonFiniteBounds { start: f64, stop: f64 },
    #[error("Invalid step {0}: step must be finite and non-zero")]
    InvalidStep(f64),
    #[error("Domain [{start}, {stop}) with step {step} contains no samples")]
    Empty { start: f64, stop: f64, step: f64 },
    #[error("Linearly spaced domain requires at least one sample")]
    ZeroCount,
    #[error("Domain would produce {count} samples, more than the limit of {max}")]
    TooManySamples { count: f64, max: usize },
}

/// A one-dimensional sampling domain.
///
/// `Arange` is half-open and yields `ceil((stop - start) / step)` values
/// `start + i * step`; `Linspace` includes both endpoints.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Domain {
    Arange { start: f64, stop: f64, step: f64 },
    Linspace { start: f64, stop: f64, count: usize },
}

impl Domain {
    pub fn arange(start: f64, stop: f64, step: f64) -> Self {
        Self::Arange { start, stop, step }
    }

    pub fn linspace(start: f64, stop: f64, count: usize) -> Self {
        Self::Linspace { start, stop, count }
    }

    pub fn samples(&self) -> Result<Vec<f64>, DomainError> {
        match *self {
            Self::Arange { start, stop, step } => arange(start, stop, step),
            Self::Linspace { start, stop, count } => linspace(start, stop, count),
        }
    }

    /// Number of samples, validated without materializing them.
    pub fn len(&self) -> Result<usize, DomainError> {
        match *self {
            Self::Arange { start, stop, step } => arange_count(start, stop, step),
            Self::Linspace { start, stop, count } => linspace_count(start, stop, count),
        }
    }
}

fn arange_count(start: f64, stop: f64, step: f64) -> Result<usize, DomainError> {
    if !start.is_finite() || !stop.is_finite() {
        return Err(DomainError::NonFiniteBounds { start, stop });
    }
    if !step.is_finite() || step == 0.0 {
        return Err(DomainError::InvalidStep(step));
    }

    let span = (stop - start) / step;
    if span <= 0.0 {
        return Err(DomainError::Empty { start, stop, step });
    }

    // Compared as f64 so an astronomically small step cannot wrap the cast.
    let count = span.ceil();
    if count > MAX_SAMPLES as f64 {
        return Err(DomainError::TooManySamples {
            count,
            max: MAX_SAMPLES,
        });
    }
    Ok(count as usize)
}

fn linspace_count(start: f64, stop: f64, count: usize) -> Result<usize, DomainError> {
    if !start.is_finite() || !stop.is_finite() {
        return Err(DomainError::NonFiniteBounds { start, stop });
    }
    match count {
        0 => Err(DomainError::ZeroCount),
        n if n > MAX_SAMPLES => Err(DomainError::TooManySamples {
            count: n as f64,
            max: MAX_SAMPLES,
        }),
        n => Ok(n),
    }
}

pub fn arange(start: f64, stop: f64, step: f64) -> Result<Vec<f64>, DomainError> {
    let count = arange_count(start, stop, step)?;
    Ok((0..count).map(|i| start + i as f64 * step).collect())
}

pub fn linspace(start: f64, stop: f64, count: usize) -> Result<Vec<f64>, DomainError> {
    match linspace_count(start, stop, count)? {
        1 => Ok(vec![start]),
        _ => {
            let delta = (stop - start) / (count - 1) as f64;
            let mut values: Vec<f64> = (0..count).map(|i| start + i as f64 * delta).collect();
            // Pin the endpoint so accumulated rounding never overshoots `stop`.
            values[count - 1] = stop;
            Ok(values)
        }
    }
}
