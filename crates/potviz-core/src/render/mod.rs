//! # Render Module
//!
//! Turns recorded figures into image files. A [`canvas::Canvas`] is an
//! explicit figure handle: drawing calls append elements to it, and
//! [`canvas::Canvas::save`] lays it out against a [`style::RenderStyle`]
//! and writes it. No rendering state lives outside these two values.
//!
//! ## Pipeline
//!
//! 1. **Layout** ([`layout`]) - resolve axis limits, map data to pixels, clip
//! 2. **Sketch** ([`sketch`]) - optional hand-drawn wiggle on every stroke
//! 3. **Export** ([`export`]) - crop to the tight bounds and encode PNG or SVG
//!
//! Three-dimensional figures are flattened beforehand with
//! [`projection::View3d`] and drawn on an ordinary canvas with its axes off.

pub mod canvas;
pub mod error;
pub mod export;
pub mod layout;
pub mod projection;
pub mod sketch;
pub mod style;
