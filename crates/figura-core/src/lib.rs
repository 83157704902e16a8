//! Figura Core Types
//!
//! This crate provides the value types the Figura scene graph is built from.
//! It includes:
//!
//! - **Geometry**: points and bounding boxes ([`geometry`] module)
//! - **Transforms**: point-mapping builders ([`transform`] module)
//! - **Paths**: copy-on-write polylines with arc-length sampling ([`path::Path`])
//! - **Colors**: CSS color handling ([`color::Color`], [`color::Paint`])
//! - **Style**: partial stroke, fill and text attributes ([`style`] module)

pub mod color;
pub mod error;
pub mod geometry;
pub mod path;
pub mod style;
pub mod transform;
