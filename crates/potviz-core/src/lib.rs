//! # potviz Core Library
//!
//! Renders illustrative potential energy curves of molecular mechanics
//! (bond stretch, angle bend, torsion, improper, van der Waals,
//! electrostatic, Morse) and coil springs for teaching material.
//!
//! ## Architectural Philosophy
//!
//! The library keeps a strict three-layer split so that the mathematics can
//! be tested without touching the file system.
//!
//! - **[`core`]: The Foundation.** Pure functions and value types: sampling
//!   domains, sampled curves, the potential formulas and helix geometry.
//!
//! - **[`render`]: The Drawing Layer.** An explicit `Canvas` figure handle,
//!   pixel layout, clipping, the optional hand-drawn sketch effect, 3D
//!   projection and PNG/SVG export. All styling travels in a `RenderStyle`
//!   value; there is no global plotting state.
//!
//! - **[`workflows`]: The Public API.** `PotentialRenderer`, `draw_spiral`
//!   and `render_gallery` tie the two lower layers together into complete
//!   figures written to disk.

pub mod core;
pub mod render;
pub mod workflows;
