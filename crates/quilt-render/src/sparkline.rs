//! Per-cell smoothed time-series glyphs.

use crate::Layout;
use quilt_core::{CatmullRom, Color, DrawCommand, LinearScale, Point, StrokeStyle};

/// Polyline resolution of the smoothed curve.
const SEGMENTS_PER_SPAN: usize = 16;

/// Local index-to-pixel x mapping for a cell with `n` samples.
///
/// Domain [0, n-1] maps onto [strip, cellWidth - strip]; a single sample
/// degenerates to the range midpoint rather than NaN.
#[must_use]
pub fn x_scale(n: usize, layout: &Layout) -> LinearScale {
    LinearScale::new(
        (0.0, n.saturating_sub(1) as f32),
        (layout.strip, layout.cell_width - layout.strip),
    )
}

/// Build the sparkline path for one cell's samples, in cell-local
/// coordinates. Returns `None` for an empty era.
#[must_use]
pub fn sparkline(samples: &[f32], layout: &Layout, scale: LinearScale) -> Option<DrawCommand> {
    if samples.is_empty() {
        return None;
    }
    let xs = x_scale(samples.len(), layout);
    let points: Vec<Point> = samples
        .iter()
        .enumerate()
        .map(|(i, &v)| Point::new(xs.map(i as f32), scale.map(v)))
        .collect();
    let path = CatmullRom::from_points(&points).to_path(SEGMENTS_PER_SPAN);
    Some(DrawCommand::Path {
        points: path,
        style: StrokeStyle::solid(Color::BLACK, layout.line_width),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use quilt_core::Size;

    fn layout_with(cell_width: f32, strip: f32) -> Layout {
        let mut layout = Layout::compute(Size::new(1000.0, 800.0));
        layout.cell_width = cell_width;
        layout.strip = strip;
        layout
    }

    #[test]
    fn test_x_scale_endpoints() {
        let layout = layout_with(120.0, 10.0);
        let xs = x_scale(5, &layout);
        assert_eq!(xs.map(0.0), 10.0);
        assert_eq!(xs.map(4.0), 110.0);
        assert_eq!(xs.map(2.0), 60.0);
    }

    #[test]
    fn test_x_scale_single_sample_hits_midpoint() {
        let layout = layout_with(120.0, 10.0);
        let xs = x_scale(1, &layout);
        let x = xs.map(0.0);
        assert_eq!(x, 60.0);
        assert!(x.is_finite());
    }

    #[test]
    fn test_empty_era_draws_nothing() {
        let layout = layout_with(120.0, 10.0);
        let scale = LinearScale::new((0.0, 1.0), (100.0, 0.0));
        assert!(sparkline(&[], &layout, scale).is_none());
    }

    #[test]
    fn test_sparkline_is_stroke_only() {
        let layout = layout_with(120.0, 10.0);
        let scale = LinearScale::new((0.0, 10.0), (100.0, 20.0));
        let cmd = sparkline(&[1.0, 5.0, 9.0], &layout, scale).unwrap();
        match cmd {
            DrawCommand::Path { points, style } => {
                assert!(points.len() > 3, "curve should be flattened");
                assert_eq!(style.color, Color::BLACK);
                assert_eq!(style.width, layout.line_width);
                for p in points {
                    assert!(p.is_finite());
                }
            }
            other => panic!("expected Path, got {other:?}"),
        }
    }

    #[test]
    fn test_sparkline_endpoints_match_scales() {
        let layout = layout_with(120.0, 10.0);
        let scale = LinearScale::new((0.0, 10.0), (100.0, 20.0));
        let samples = [0.0, 10.0];
        match sparkline(&samples, &layout, scale).unwrap() {
            DrawCommand::Path { points, .. } => {
                let first = points.first().copied().unwrap();
                let last = points.last().copied().unwrap();
                assert_eq!(first, Point::new(10.0, 100.0));
                assert_eq!(last, Point::new(110.0, 20.0));
            }
            other => panic!("expected Path, got {other:?}"),
        }
    }
}
