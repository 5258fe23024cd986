//! Category legend: one swatch + label per category in a 3x2 sub-grid.

use crate::annotate::LABEL_MULTIPLIER;
use crate::Layout;
use quilt_core::{BoxStyle, DrawCommand, Point, StrokeStyle, TextAnchor, Translate};
use quilt_data::Category;

/// Legend sub-grid columns.
const COLUMNS: usize = 3;

/// Build legend items in surface coordinates, in category declaration
/// order (not alphabetical).
#[must_use]
pub fn build_legend(categories: &[Category], layout: &Layout) -> Vec<DrawCommand> {
    let swatch = layout.margin.top / 5.0;
    categories
        .iter()
        .enumerate()
        .map(|(i, &category)| {
            let column = (i % COLUMNS) as f32;
            let row = (i / COLUMNS) as f32;
            let offset = Translate::new(
                layout.margin.left + 2.0 * layout.width / 5.0 + column * 2.0 * layout.width / 9.0,
                swatch + row * 2.0 * swatch,
            );
            let (outer, inner) = category.palette();

            let circle = DrawCommand::Circle {
                center: Point::new(swatch / 4.0, swatch / 4.0),
                radius: swatch / 2.0,
                style: BoxStyle::fill(inner)
                    .with_stroke(StrokeStyle::solid(outer, swatch / 4.0)),
            };
            let mut label = DrawCommand::text(
                category.display_name(),
                Point::new(layout.margin.top / 4.0, swatch / 4.0),
                LABEL_MULTIPLIER,
            );
            if let DrawCommand::Text { style, .. } = &mut label {
                style.anchor = TextAnchor::Start;
            }

            DrawCommand::group(offset, vec![circle, label])
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use quilt_core::Size;

    #[test]
    fn test_declaration_order_preserved() {
        let layout = Layout::compute(Size::new(1200.0, 900.0));
        let categories = [Category::Stress, Category::Weight, Category::Sleep];
        let items = build_legend(&categories, &layout);
        assert_eq!(items.len(), 3);

        let mut names = Vec::new();
        for item in &items {
            item.visit(&mut |cmd| {
                if let DrawCommand::Text { content, .. } = cmd {
                    names.push(content.clone());
                }
            });
        }
        assert_eq!(names, vec!["stress score", "body weight", "sleep score"]);
    }

    #[test]
    fn test_sub_grid_wraps_after_three() {
        let layout = Layout::compute(Size::new(1200.0, 900.0));
        let items = build_legend(&Category::ALL, &layout);
        let offsets: Vec<Translate> = items
            .iter()
            .map(|item| match item {
                DrawCommand::Group { offset, .. } => *offset,
                other => panic!("expected Group, got {other:?}"),
            })
            .collect();
        // first row shares y, second row sits lower
        assert_eq!(offsets[0].y, offsets[1].y);
        assert_eq!(offsets[1].y, offsets[2].y);
        assert!(offsets[3].y > offsets[0].y);
        // columns repeat across rows
        assert_eq!(offsets[0].x, offsets[3].x);
        assert_eq!(offsets[1].x, offsets[4].x);
        assert!(offsets[1].x > offsets[0].x);
    }

    #[test]
    fn test_swatch_uses_two_tone_palette() {
        let layout = Layout::compute(Size::new(1200.0, 900.0));
        let items = build_legend(&[Category::Sleep], &layout);
        let DrawCommand::Group { children, .. } = &items[0] else {
            panic!("expected Group");
        };
        let (outer, inner) = Category::Sleep.palette();
        match &children[0] {
            DrawCommand::Circle { radius, style, .. } => {
                assert_eq!(*radius, layout.margin.top / 10.0);
                assert_eq!(style.fill, Some(inner));
                assert_eq!(style.stroke.as_ref().unwrap().color, outer);
            }
            other => panic!("expected Circle, got {other:?}"),
        }
        match &children[1] {
            DrawCommand::Text { style, .. } => {
                assert_eq!(style.anchor, TextAnchor::Start);
            }
            other => panic!("expected Text, got {other:?}"),
        }
    }
}
