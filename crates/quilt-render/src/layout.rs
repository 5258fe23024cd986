//! Container-size-driven geometry.
//!
//! Every pixel measurement downstream of the container derives from the
//! numbers computed here; no other component does raw pixel math.

use quilt_core::Size;
use quilt_data::GRID_SIZE;

/// Margins around the quilt content, in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Margin {
    /// Top margin (10% of container height)
    pub top: f32,
    /// Right margin (1% of container width)
    pub right: f32,
    /// Bottom margin (5% of container height)
    pub bottom: f32,
    /// Left margin (1% of container width)
    pub left: f32,
}

/// Derived layout for one render pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    /// Margins inside the container
    pub margin: Margin,
    /// Content width (container minus left/right margins)
    pub width: f32,
    /// Content height (container minus top/bottom margins)
    pub height: f32,
    /// Width of one grid cell
    pub cell_width: f32,
    /// Height of one grid cell
    pub cell_height: f32,
    /// Border inset between a cell's outer and inner rectangles
    pub strip: f32,
    /// Cell border stroke width
    pub border_width: f32,
    /// Sparkline stroke width
    pub line_width: f32,
    /// Outer cell corner radius
    pub outer_radius: f32,
    /// Inner panel corner radius
    pub inner_radius: f32,
}

impl Layout {
    /// Compute the layout for a container size.
    ///
    /// A zero-area container yields an all-zero layout; nothing here can
    /// produce a non-finite number from finite input.
    #[must_use]
    pub fn compute(container: Size) -> Self {
        let margin = Margin {
            top: 0.10 * container.height,
            right: 0.01 * container.width,
            bottom: 0.05 * container.height,
            left: 0.01 * container.width,
        };
        let width = container.width - (margin.left + margin.right);
        let height = container.height - (margin.top + margin.bottom);
        let cells = GRID_SIZE as f32;

        Self {
            margin,
            width,
            height,
            cell_width: width / cells,
            cell_height: height / cells,
            strip: height / 72.0,
            border_width: width / 500.0,
            line_width: width / 400.0,
            outer_radius: width * 0.002,
            inner_radius: width * 0.006,
        }
    }
}
