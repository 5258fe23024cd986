//! Scene-graph draw commands.
//!
//! Every render pass reduces to a tree of these primitives; adapters
//! (SVG, tests) consume the tree without any live display.

use crate::{Color, Point, Rect};
use serde::{Deserialize, Serialize};

/// Stroke style for paths and outlines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrokeStyle {
    /// Stroke color
    pub color: Color,
    /// Stroke width in pixels
    pub width: f32,
    /// Dash pattern (empty = solid)
    pub dash: Vec<f32>,
}

impl StrokeStyle {
    /// Solid stroke of the given color and width.
    #[must_use]
    pub fn solid(color: Color, width: f32) -> Self {
        Self {
            color,
            width,
            dash: Vec::new(),
        }
    }

    /// Add a dash pattern.
    #[must_use]
    pub fn with_dash(mut self, dash: Vec<f32>) -> Self {
        self.dash = dash;
        self
    }
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self::solid(Color::BLACK, 1.0)
    }
}

/// Fill and stroke for rectangles and circles.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BoxStyle {
    /// Fill color (None = no fill); alpha carries fill opacity
    pub fill: Option<Color>,
    /// Stroke (None = no stroke)
    pub stroke: Option<StrokeStyle>,
}

impl BoxStyle {
    /// Fill only.
    #[must_use]
    pub fn fill(color: Color) -> Self {
        Self {
            fill: Some(color),
            stroke: None,
        }
    }

    /// Add a stroke.
    #[must_use]
    pub fn with_stroke(mut self, stroke: StrokeStyle) -> Self {
        self.stroke = Some(stroke);
        self
    }
}

/// Horizontal anchoring of a text command around its position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TextAnchor {
    /// Text starts at the position
    Start,
    /// Text is centered on the position
    #[default]
    Middle,
}

/// Text style for rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    /// Font size in pixels; the resize controller's post-pass overwrites
    /// this from the multiplier once the surface height is known
    pub size: f32,
    /// Text color
    pub color: Color,
    /// Horizontal anchor
    pub anchor: TextAnchor,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            size: 16.0,
            color: Color::BLACK,
            anchor: TextAnchor::Middle,
        }
    }
}

/// Translation-only 2D transform.
///
/// The quilt positions every cell, annotation, and legend item by
/// translating nested groups; nothing rotates or scales.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Translate {
    /// Horizontal offset
    pub x: f32,
    /// Vertical offset
    pub y: f32,
}

impl Translate {
    /// Create a translation.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Apply to a point.
    #[must_use]
    pub fn apply(&self, point: Point) -> Point {
        Point::new(point.x + self.x, point.y + self.y)
    }
}

/// Drawing primitive - all rendering reduces to these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    /// Draw a rectangle
    Rect {
        /// Rectangle bounds
        bounds: Rect,
        /// Uniform corner radius
        radius: f32,
        /// Fill and stroke
        style: BoxStyle,
    },

    /// Stroke an open polyline
    Path {
        /// Points defining the path
        points: Vec<Point>,
        /// Stroke style
        style: StrokeStyle,
    },

    /// Draw a circle
    Circle {
        /// Center point
        center: Point,
        /// Radius
        radius: f32,
        /// Fill and stroke
        style: BoxStyle,
    },

    /// Draw text
    Text {
        /// Text content
        content: String,
        /// Anchor position
        position: Point,
        /// Size multiplier consumed by the font post-pass
        multiplier: f32,
        /// Text style
        style: TextStyle,
    },

    /// Group of commands sharing a translation
    Group {
        /// Offset applied to every child
        offset: Translate,
        /// Child commands
        children: Vec<DrawCommand>,
    },
}

impl DrawCommand {
    /// Create a text command with the given multiplier, centered.
    #[must_use]
    pub fn text(content: impl Into<String>, position: Point, multiplier: f32) -> Self {
        Self::Text {
            content: content.into(),
            position,
            multiplier,
            style: TextStyle::default(),
        }
    }

    /// Wrap commands in a translated group.
    #[must_use]
    pub fn group(offset: Translate, children: Vec<Self>) -> Self {
        Self::Group { offset, children }
    }

    /// Visit every command in the tree, depth-first.
    pub fn visit<'a>(&'a self, f: &mut impl FnMut(&'a Self)) {
        f(self);
        if let Self::Group { children, .. } = self {
            for child in children {
                child.visit(f);
            }
        }
    }

    /// Visit every command in the tree mutably, depth-first.
    pub fn visit_mut(&mut self, f: &mut impl FnMut(&mut Self)) {
        f(self);
        if let Self::Group { children, .. } = self {
            for child in children {
                child.visit_mut(f);
            }
        }
    }
}
