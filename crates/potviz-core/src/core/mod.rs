//! # Core Module
//!
//! Pure mathematics behind every figure: sampling domains, sampled curves,
//! the potential energy formulas and the helix geometry used for springs.
//! Nothing in this layer draws or touches the filesystem.
//!
//! ## Overview
//!
//! - **Domains** ([`domain`]) - Half-open arithmetic ranges and inclusive linear spacing
//! - **Curves** ([`curve`]) - Formula evaluation over a domain with a choice of abscissa
//! - **Potentials** ([`potentials`]) - Harmonic, cosine torsion, Lennard-Jones, Coulomb and Morse terms
//! - **Springs** ([`spiral`]) - Helix points and centerline along a principal axis
//!
//! ## Numerical Behaviour
//!
//! Formulas are evaluated as written and may produce non-finite values at
//! singular points (for example `x = 0` for the Coulomb and Lennard-Jones
//! terms). [`curve::Curve::sample`] rejects such values with the offending
//! coordinate instead of passing them on to the renderer.

pub mod curve;
pub mod domain;
pub mod potentials;
pub mod spiral;
