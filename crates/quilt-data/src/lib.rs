//! Documents and immutable state for the quilt renderer.
//!
//! Both input documents (dataset and annotations) are parsed and validated
//! here, once, at startup. Everything downstream of [`AppState`] is
//! infallible: unknown categories, malformed grids, and empty sample
//! sequences are rejected before any rendering begins.

mod category;
mod document;
mod error;

pub use category::Category;
pub use document::{
    annotations_from_json, Annotation, AppState, Dataset, ERA_COUNT, GRID_SIZE,
};
pub use error::DataError;
