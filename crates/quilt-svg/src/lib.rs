//! SVG surface adapter.
//!
//! Consumes a [`Scene`] and emits standalone SVG markup. The adapter is a
//! straight transcription of draw commands; all layout decisions were made
//! upstream, so this stays a dumb serializer.

use quilt_core::{BoxStyle, DrawCommand, StrokeStyle, TextAnchor};
use quilt_render::Scene;
use std::fmt::Write as _;

/// Render a scene as a standalone SVG document.
#[must_use]
pub fn to_svg(scene: &Scene) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "<svg xmlns='http://www.w3.org/2000/svg' width='{}' height='{}' viewBox='0 0 {} {}'>",
        fmt(scene.size.width),
        fmt(scene.size.height),
        fmt(scene.size.width),
        fmt(scene.size.height),
    );
    for cmd in &scene.commands {
        write_command(&mut out, cmd, 1);
    }
    out.push_str("</svg>\n");
    out
}

fn write_command(out: &mut String, cmd: &DrawCommand, depth: usize) {
    let pad = "  ".repeat(depth);
    match cmd {
        DrawCommand::Rect {
            bounds,
            radius,
            style,
        } => {
            let _ = write!(
                out,
                "{pad}<rect x='{}' y='{}' width='{}' height='{}' rx='{}' ry='{}'",
                fmt(bounds.x),
                fmt(bounds.y),
                fmt(bounds.width),
                fmt(bounds.height),
                fmt(*radius),
                fmt(*radius),
            );
            write_box_style(out, style);
            out.push_str("/>\n");
        }
        DrawCommand::Path { points, style } => {
            let _ = write!(out, "{pad}<path d='");
            for (i, p) in points.iter().enumerate() {
                let op = if i == 0 { 'M' } else { 'L' };
                let _ = write!(out, "{}{} {}", op, fmt(p.x), fmt(p.y));
            }
            out.push_str("' fill='none'");
            write_stroke(out, style);
            out.push_str("/>\n");
        }
        DrawCommand::Circle {
            center,
            radius,
            style,
        } => {
            let _ = write!(
                out,
                "{pad}<circle cx='{}' cy='{}' r='{}'",
                fmt(center.x),
                fmt(center.y),
                fmt(*radius),
            );
            write_box_style(out, style);
            out.push_str("/>\n");
        }
        DrawCommand::Text {
            content,
            position,
            style,
            ..
        } => {
            let anchor = match style.anchor {
                TextAnchor::Start => "start",
                TextAnchor::Middle => "middle",
            };
            let _ = writeln!(
                out,
                "{pad}<text x='{}' y='{}' font-size='{}' fill='{}' \
                 text-anchor='{anchor}' dominant-baseline='middle'>{}</text>",
                fmt(position.x),
                fmt(position.y),
                fmt(style.size),
                style.color.to_hex(),
                escape(content),
            );
        }
        DrawCommand::Group { offset, children } => {
            let _ = writeln!(
                out,
                "{pad}<g transform='translate({}, {})'>",
                fmt(offset.x),
                fmt(offset.y),
            );
            for child in children {
                write_command(out, child, depth + 1);
            }
            let _ = writeln!(out, "{pad}</g>");
        }
    }
}

fn write_box_style(out: &mut String, style: &BoxStyle) {
    match &style.fill {
        Some(color) => {
            let _ = write!(out, " fill='{}'", color.to_hex());
            if color.a < 1.0 {
                let _ = write!(out, " fill-opacity='{}'", fmt(color.a));
            }
        }
        None => out.push_str(" fill='none'"),
    }
    if let Some(stroke) = &style.stroke {
        write_stroke(out, stroke);
    }
}

fn write_stroke(out: &mut String, stroke: &StrokeStyle) {
    let _ = write!(
        out,
        " stroke='{}' stroke-width='{}'",
        stroke.color.to_hex(),
        fmt(stroke.width),
    );
    if !stroke.dash.is_empty() {
        let dash: Vec<String> = stroke.dash.iter().map(|d| fmt(*d)).collect();
        let _ = write!(out, " stroke-dasharray='{}'", dash.join(" "));
    }
}

/// Format a coordinate with a fixed, trailing-zero-free precision so scene
/// equality implies markup equality.
fn fmt(v: f32) -> String {
    let s = format!("{v:.3}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s.is_empty() || s == "-" {
        "0".to_string()
    } else {
        s.to_string()
    }
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use quilt_core::{BoxStyle, Color, DrawCommand, Point, Rect, Size, StrokeStyle, Translate};

    fn scene_with(commands: Vec<DrawCommand>) -> Scene {
        let mut scene = Scene::new(Size::new(100.0, 50.0));
        scene.commands = commands;
        scene
    }

    #[test]
    fn test_svg_envelope() {
        let svg = to_svg(&scene_with(vec![]));
        assert!(svg.starts_with("<svg "));
        assert!(svg.contains("width='100' height='50'"));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn test_rect_with_dash_and_opacity() {
        let cmd = DrawCommand::Rect {
            bounds: Rect::new(1.0, 2.0, 30.0, 20.0),
            radius: 0.5,
            style: BoxStyle::fill(Color::rgb8(0xef, 0x47, 0x6f).with_alpha(0.9)).with_stroke(
                StrokeStyle::solid(Color::BLACK, 2.0).with_dash(vec![10.0, 10.0]),
            ),
        };
        let svg = to_svg(&scene_with(vec![cmd]));
        assert!(svg.contains("<rect x='1' y='2' width='30' height='20' rx='0.5'"));
        assert!(svg.contains("fill='#ef476f'"));
        assert!(svg.contains("fill-opacity='0.9'"));
        assert!(svg.contains("stroke-dasharray='10 10'"));
    }

    #[test]
    fn test_path_is_stroke_only() {
        let cmd = DrawCommand::Path {
            points: vec![Point::new(0.0, 0.0), Point::new(10.0, 5.0)],
            style: StrokeStyle::solid(Color::BLACK, 1.5),
        };
        let svg = to_svg(&scene_with(vec![cmd]));
        assert!(svg.contains("d='M0 0L10 5'"));
        assert!(svg.contains("fill='none'"));
        assert!(svg.contains("stroke-width='1.5'"));
    }

    #[test]
    fn test_group_nesting_and_translate() {
        let cmd = DrawCommand::group(
            Translate::new(7.0, 8.0),
            vec![DrawCommand::Circle {
                center: Point::new(1.0, 1.0),
                radius: 2.0,
                style: BoxStyle::fill(Color::WHITE),
            }],
        );
        let svg = to_svg(&scene_with(vec![cmd]));
        assert!(svg.contains("<g transform='translate(7, 8)'>"));
        assert!(svg.contains("<circle cx='1' cy='1' r='2'"));
        assert!(svg.contains("</g>"));
    }

    #[test]
    fn test_text_anchor_and_escaping() {
        let cmd = DrawCommand::text("a < b & c", Point::new(3.0, 4.0), 0.4);
        let svg = to_svg(&scene_with(vec![cmd]));
        assert!(svg.contains("text-anchor='middle'"));
        assert!(svg.contains("dominant-baseline='middle'"));
        assert!(svg.contains("a &lt; b &amp; c"));
    }

    #[test]
    fn test_one_element_per_command() {
        let cmds = vec![
            DrawCommand::text("t", Point::ORIGIN, 1.0),
            DrawCommand::Circle {
                center: Point::ORIGIN,
                radius: 1.0,
                style: BoxStyle::fill(Color::BLACK),
            },
        ];
        let svg = to_svg(&scene_with(cmds));
        assert_eq!(svg.matches("<text").count(), 1);
        assert_eq!(svg.matches("<circle").count(), 1);
    }
}
