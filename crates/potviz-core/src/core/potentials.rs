use super::domain::Domain;
use phf::{Map, phf_map};
use std::f64::consts::PI;
use std::fmt;

pub const DEFAULT_BOND_K: f64 = 10.0;
pub const DEFAULT_ANGLE_K: f64 = 5.0;
pub const IMPROPER_K: f64 = 5.0;
pub const DEFAULT_LJ_EPSILON: f64 = 1.77;
pub const DEFAULT_LJ_SIGMA: f64 = 4.10;
pub const ELECTROSTATIC_CHARGE_PRODUCT: f64 = -2.0;
pub const DEFAULT_MORSE_WELL_DEPTH: f64 = 1.0;
pub const DEFAULT_MORSE_WIDTH: f64 = 0.5;
pub const DEFAULT_MORSE_EQUILIBRIUM: f64 = 0.0;

#[inline]
pub fn harmonic(x: f64, k: f64) -> f64 {
    0.5 * k * x * x
}

#[inline]
pub fn cosine_torsion(phi: f64) -> f64 {
    phi.cos() + 1.0
}

/// Lennard-Jones 12-6 in the sigma form; zero at `dist == sigma`.
#[inline]
pub fn lennard_jones_12_6(dist: f64, epsilon: f64, sigma: f64) -> f64 {
    let rho = sigma / dist;
    let rho6 = rho.powi(6);
    let rho12 = rho6 * rho6;
    4.0 * epsilon * (rho12 - rho6)
}

/// Unscreened Coulomb term in reduced units. Non-finite at `dist == 0`.
#[inline]
pub fn coulomb(dist: f64, charge_product: f64) -> f64 {
    charge_product / dist
}

#[inline]
pub fn morse(r: f64, well_depth: f64, width: f64, equilibrium: f64) -> f64 {
    let dr = r - equilibrium;
    well_depth * ((-2.0 * width * dr).exp() - 2.0 * (-width * dr).exp())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PotentialKind {
    Bond,
    Angle,
    Torsion,
    Improper,
    VanDerWaals,
    Electrostatic,
    Morse,
}

static KIND_NAMES: Map<&'static str, PotentialKind> = phf_map! {
    "bond" => PotentialKind::Bond,
    "stretch" => PotentialKind::Bond,
    "angle" => PotentialKind::Angle,
    "bend" => PotentialKind::Angle,
    "torsion" => PotentialKind::Torsion,
    "dihedral" => PotentialKind::Torsion,
    "improper" => PotentialKind::Improper,
    "vdw" => PotentialKind::VanDerWaals,
    "lj" => PotentialKind::VanDerWaals,
    "lennard-jones" => PotentialKind::VanDerWaals,
    "electrostatic" => PotentialKind::Electrostatic,
    "coulomb" => PotentialKind::Electrostatic,
    "morse" => PotentialKind::Morse,
};

impl PotentialKind {
    pub const ALL: [PotentialKind; 7] = [
        Self::Bond,
        Self::Angle,
        Self::Torsion,
        Self::Improper,
        Self::VanDerWaals,
        Self::Electrostatic,
        Self::Morse,
    ];

    /// Looks up a kind by name or alias, ignoring ASCII case.
    pub fn from_name(name: &str) -> Option<Self> {
        KIND_NAMES.get(name.to_ascii_lowercase().as_str()).copied()
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Bond => "bond",
            Self::Angle => "angle",
            Self::Torsion => "torsion",
            Self::Improper => "improper",
            Self::VanDerWaals => "vdw",
            Self::Electrostatic => "electrostatic",
            Self::Morse => "morse",
        }
    }
}

impl fmt::Display for PotentialKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A potential energy function together with its constants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Potential {
    Bond {
        k: f64,
    },
    Angle {
        k: f64,
    },
    Torsion,
    Improper,
    VanDerWaals {
        epsilon: f64,
        sigma: f64,
    },
    Electrostatic,
    Morse {
        well_depth: f64,
        width: f64,
        equilibrium: f64,
    },
}

impl Potential {
    pub fn with_defaults(kind: PotentialKind) -> Self {
        match kind {
            PotentialKind::Bond => Self::Bond { k: DEFAULT_BOND_K },
            PotentialKind::Angle => Self::Angle { k: DEFAULT_ANGLE_K },
            PotentialKind::Torsion => Self::Torsion,
            PotentialKind::Improper => Self::Improper,
            PotentialKind::VanDerWaals => Self::VanDerWaals {
                epsilon: DEFAULT_LJ_EPSILON,
                sigma: DEFAULT_LJ_SIGMA,
            },
            PotentialKind::Electrostatic => Self::Electrostatic,
            PotentialKind::Morse => Self::Morse {
                well_depth: DEFAULT_MORSE_WELL_DEPTH,
                width: DEFAULT_MORSE_WIDTH,
                equilibrium: DEFAULT_MORSE_EQUILIBRIUM,
            },
        }
    }

    pub fn kind(&self) -> PotentialKind {
        match self {
            Self::Bond { .. } => PotentialKind::Bond,
            Self::Angle { .. } => PotentialKind::Angle,
            Self::Torsion => PotentialKind::Torsion,
            Self::Improper => PotentialKind::Improper,
            Self::VanDerWaals { .. } => PotentialKind::VanDerWaals,
            Self::Electrostatic => PotentialKind::Electrostatic,
            Self::Morse { .. } => PotentialKind::Morse,
        }
    }

    #[inline]
    pub fn evaluate(&self, x: f64) -> f64 {
        match *self {
            Self::Bond { k } | Self::Angle { k } => harmonic(x, k),
            Self::Torsion => cosine_torsion(x),
            Self::Improper => harmonic(x, IMPROPER_K),
            Self::VanDerWaals { epsilon, sigma } => lennard_jones_12_6(x, epsilon, sigma),
            Self::Electrostatic => coulomb(x, ELECTROSTATIC_CHARGE_PRODUCT),
            Self::Morse {
                well_depth,
                width,
                equilibrium,
            } => morse(x, well_depth, width, equilibrium),
        }
    }

    /// The sampling domain the reference illustrations were drawn with.
    pub fn default_domain(&self) -> Domain {
        match self.kind() {
            PotentialKind::Bond => Domain::arange(-4.0, 4.2, 0.2),
            PotentialKind::Angle | PotentialKind::Improper => Domain::arange(-8.0, 8.2, 0.2),
            PotentialKind::Torsion => Domain::linspace(0.0, 4.0 * PI, 1000),
            PotentialKind::VanDerWaals => Domain::arange(0.1, 10.0, 0.1),
            PotentialKind::Electrostatic => Domain::arange(0.2, 8.3, 0.2),
            PotentialKind::Morse => Domain::arange(-3.0, 12.0, 0.1),
        }
    }
}
