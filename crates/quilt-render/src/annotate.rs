//! Annotation, era-label, and title text placement.

use crate::Layout;
use quilt_core::{DrawCommand, Point, TextAnchor};
use quilt_data::Annotation;

/// Font multiplier for cell annotations.
const ANNOTATION_MULTIPLIER: f32 = 0.4;

/// Font multiplier for era labels and legend text.
pub(crate) const LABEL_MULTIPLIER: f32 = 0.6;

/// Font multiplier for the title.
const TITLE_MULTIPLIER: f32 = 1.3;

/// Vertical anchor inside the cell: top third or bottom fifth.
fn vertical_anchor(bottom: bool) -> f32 {
    if bottom {
        0.8
    } else {
        0.2
    }
}

/// Place every annotation at its target cell, in content coordinates.
///
/// Anchor = ((column + 0.5) * cellWidth, (row + v) * cellHeight). There is
/// no collision avoidance; overlapping labels are the document's business.
#[must_use]
pub fn place_annotations(annotations: &[Annotation], layout: &Layout) -> Vec<DrawCommand> {
    annotations
        .iter()
        .map(|a| {
            let (column, row) = a.cell;
            let position = Point::new(
                (column as f32 + 0.5) * layout.cell_width,
                (row as f32 + vertical_anchor(a.bottom)) * layout.cell_height,
            );
            DrawCommand::text(a.text.clone(), position, ANNOTATION_MULTIPLIER)
        })
        .collect()
}

/// Centered era labels under each column, in content coordinates.
#[must_use]
pub fn place_era_labels(labels: &[String], layout: &Layout) -> Vec<DrawCommand> {
    labels
        .iter()
        .enumerate()
        .map(|(i, label)| {
            let position = Point::new(
                (i as f32 + 0.5) * layout.cell_width,
                layout.height + layout.margin.bottom / 2.0,
            );
            DrawCommand::text(label.clone(), position, LABEL_MULTIPLIER)
        })
        .collect()
}

/// The quilt title in the top margin, in surface coordinates.
#[must_use]
pub fn place_title(title: &str, layout: &Layout) -> DrawCommand {
    let mut cmd = DrawCommand::text(
        title,
        Point::new(3.0 * layout.margin.left, layout.margin.top / 2.0),
        TITLE_MULTIPLIER,
    );
    if let DrawCommand::Text { style, .. } = &mut cmd {
        style.anchor = TextAnchor::Start;
    }
    cmd
}
