//! # Workflows Module
//!
//! High-level entry points that turn formulas and geometry into finished
//! image files. Each workflow owns its figure from creation to save and
//! reports failures as a [`RenderError`](crate::render::error::RenderError).
//!
//! ## Architecture
//!
//! - **Potential Renderer** ([`potential`]) - one energy curve per instance,
//!   framed the way the reference illustrations are
//! - **Spring Drawer** ([`spring`]) - a projected 3D coil with an optional
//!   centerline
//! - **Gallery** ([`gallery`]) - the complete set of thirteen illustrations
//!   rendered into one directory
//! - **Progress** ([`progress`]) - callback-based reporting for front ends

pub mod gallery;
pub mod potential;
pub mod progress;
pub mod spring;
