//! The 6x6 cell tree: backgrounds, inset panels, and sparklines.

use crate::{sparkline, Layout, ScaleRegistry};
use quilt_core::{BoxStyle, Color, DrawCommand, Rect, Size, StrokeStyle, Translate};
use quilt_data::Dataset;

/// Fill opacity of the outer cell rectangle.
const OUTER_OPACITY: f32 = 0.9;

/// Dash pattern of the cell border.
const BORDER_DASH: [f32; 2] = [10.0, 10.0];

/// Build the quilt cell tree in content coordinates: one group per era
/// column, one nested group per cell, column-major.
#[must_use]
pub fn build_quilt(dataset: &Dataset, layout: &Layout, scales: &ScaleRegistry) -> Vec<DrawCommand> {
    dataset
        .ordering
        .iter()
        .enumerate()
        .map(|(era, rows)| {
            let cells = rows
                .iter()
                .enumerate()
                .map(|(row, &category)| {
                    let mut children = cell_rects(category.palette(), layout);
                    if let Some(scale) = scales.get(category) {
                        if let Some(line) =
                            sparkline(dataset.samples(category, era), layout, scale)
                        {
                            children.push(line);
                        }
                    }
                    DrawCommand::group(
                        Translate::new(0.0, row as f32 * layout.cell_height),
                        children,
                    )
                })
                .collect();
            DrawCommand::group(Translate::new(era as f32 * layout.cell_width, 0.0), cells)
        })
        .collect()
}

/// The outer (dashed, translucent) and inner (opaque, inset by one strip)
/// rectangles of a cell, in cell-local coordinates.
fn cell_rects((outer, inner): (Color, Color), layout: &Layout) -> Vec<DrawCommand> {
    let cell = Rect::from_size(Size::new(layout.cell_width, layout.cell_height));
    vec![
        DrawCommand::Rect {
            bounds: cell,
            radius: layout.outer_radius,
            style: BoxStyle::fill(outer.with_alpha(OUTER_OPACITY)).with_stroke(
                StrokeStyle::solid(Color::BLACK, layout.border_width)
                    .with_dash(BORDER_DASH.to_vec()),
            ),
        },
        DrawCommand::Rect {
            bounds: cell.inset(layout.strip),
            radius: layout.inner_radius,
            style: BoxStyle::fill(inner),
        },
    ]
}
