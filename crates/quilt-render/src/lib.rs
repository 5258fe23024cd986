//! The quilt rendering pipeline.
//!
//! Control flow mirrors a resize: [`QuiltRenderer`] derives a [`Layout`]
//! from the surface size, builds a [`ScaleRegistry`], assembles the cell
//! grid / annotations / legend into a [`Scene`], and finishes with the
//! font-size post-pass. Data flows one way: the immutable
//! `quilt_data::AppState` is threaded through every stage.

pub mod annotate;
mod grid;
mod layout;
mod legend;
mod renderer;
mod scales;
mod scene;
mod sparkline;

pub use grid::build_quilt;
pub use layout::{Layout, Margin};
pub use legend::build_legend;
pub use renderer::{QuiltRenderer, SURFACE_HEIGHT_FRACTION};
pub use scales::ScaleRegistry;
pub use scene::{Scene, FONT_SCALE};
pub use sparkline::{sparkline, x_scale};
