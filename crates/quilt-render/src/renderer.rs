//! Resize controller: the full teardown-and-rebuild pipeline.

use crate::{
    annotate, build_legend, build_quilt, Layout, ScaleRegistry, Scene,
};
use quilt_core::{DrawCommand, Size, Translate};
use quilt_data::AppState;

/// Fraction of the viewport height the surface occupies.
pub const SURFACE_HEIGHT_FRACTION: f32 = 0.6;

/// Renders the whole quilt from the immutable application state.
///
/// Every call rebuilds the scene from scratch; nothing is cached between
/// passes.
#[derive(Debug, Clone, Copy)]
pub struct QuiltRenderer<'a> {
    state: &'a AppState,
}

impl<'a> QuiltRenderer<'a> {
    /// Create a renderer over loaded state.
    #[must_use]
    pub const fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    /// Handle a resize: size the surface to the full viewport width and
    /// [`SURFACE_HEIGHT_FRACTION`] of its height, then rebuild.
    #[must_use]
    pub fn render(&self, viewport: Size) -> Scene {
        self.render_surface(Size::new(
            viewport.width,
            SURFACE_HEIGHT_FRACTION * viewport.height,
        ))
    }

    /// Rebuild the scene for an explicit surface size.
    ///
    /// Pipeline: layout, scales, cell grid, annotations, era labels, title,
    /// legend, then the font-size post-pass over the finished scene.
    #[must_use]
    pub fn render_surface(&self, surface: Size) -> Scene {
        let dataset = &self.state.dataset;
        let layout = Layout::compute(surface);
        let scales = ScaleRegistry::build(dataset, &layout);

        let mut content = build_quilt(dataset, &layout, &scales);
        content.extend(annotate::place_annotations(&self.state.annotations, &layout));
        if let Some(labels) = &dataset.era_labels {
            content.extend(annotate::place_era_labels(labels, &layout));
        }

        let mut scene = Scene::new(surface);
        scene.commands.push(DrawCommand::group(
            Translate::new(layout.margin.left, layout.margin.top),
            content,
        ));
        if let Some(title) = &dataset.title {
            scene.commands.push(annotate::place_title(title, &layout));
        }
        scene
            .commands
            .extend(build_legend(&dataset.categories, &layout));

        // must run last: it reads the multipliers set above
        scene.apply_font_scale();
        scene
    }
}
