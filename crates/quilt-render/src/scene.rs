//! The rebuilt-each-pass scene value.

use quilt_core::{DrawCommand, Size};
use serde::{Deserialize, Serialize};

/// Fraction of the surface height one multiplier unit of font occupies.
pub const FONT_SCALE: f32 = 0.03;

/// A complete render pass: the surface size and every draw command.
///
/// Scenes are plain values; a resize discards the old scene wholesale and
/// builds a new one. Two passes over the same inputs produce equal scenes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    /// Surface size the commands were laid out for
    pub size: Size,
    /// Top-level draw commands in paint order
    pub commands: Vec<DrawCommand>,
}

impl Scene {
    /// Create an empty scene for a surface size.
    #[must_use]
    pub fn new(size: Size) -> Self {
        Self {
            size,
            commands: Vec::new(),
        }
    }

    /// Visit every command in the scene, depth-first.
    pub fn visit<'a>(&'a self, f: &mut impl FnMut(&'a DrawCommand)) {
        for cmd in &self.commands {
            cmd.visit(f);
        }
    }

    /// Font-size post-pass: set every text command's size from its stored
    /// multiplier and the surface height.
    ///
    /// Runs once, after the whole scene exists, because it reads the
    /// per-element multiplier written during rendering.
    pub fn apply_font_scale(&mut self) {
        let height = self.size.height;
        for cmd in &mut self.commands {
            cmd.visit_mut(&mut |c| {
                if let DrawCommand::Text {
                    multiplier, style, ..
                } = c
                {
                    style.size = *multiplier * FONT_SCALE * height;
                }
            });
        }
    }

    /// Number of text commands, at any nesting depth.
    #[must_use]
    pub fn text_count(&self) -> usize {
        let mut count = 0;
        self.visit(&mut |c| {
            if matches!(c, DrawCommand::Text { .. }) {
                count += 1;
            }
        });
        count
    }
}
