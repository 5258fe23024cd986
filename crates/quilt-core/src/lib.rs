//! Core types for the quilt renderer.
//!
//! This crate provides the foundations shared by every rendering stage:
//! - Geometric primitives: [`Point`], [`Size`], [`Rect`]
//! - Color representation: [`Color`] with hex parsing
//! - Scene-graph primitives: [`DrawCommand`] and its styles
//! - Value scales: [`LinearScale`]
//! - Curve smoothing: [`CatmullRom`]

mod color;
mod draw;
mod geometry;
mod scale;
mod spline;

pub use color::{Color, ColorParseError};
pub use draw::{BoxStyle, DrawCommand, StrokeStyle, TextAnchor, TextStyle, Translate};
pub use geometry::{Point, Rect, Size};
pub use scale::{extent, LinearScale};
pub use spline::CatmullRom;
