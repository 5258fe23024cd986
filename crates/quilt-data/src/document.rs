//! JSON document types, load-time validation, and the immutable state.

use crate::{Category, DataError};
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};

/// Number of eras (grid columns).
pub const ERA_COUNT: usize = 6;

/// Grid dimension; the quilt is always `GRID_SIZE` x `GRID_SIZE`.
pub const GRID_SIZE: usize = 6;

/// Raw dataset document as it appears on disk.
///
/// Per-category sample series sit next to the structural keys, so they are
/// collected through a flattened map and resolved during validation.
#[derive(Debug, Deserialize)]
struct DatasetDoc {
    categories: Vec<String>,
    ordering: Vec<Vec<String>>,
    #[serde(default)]
    eras: Option<Vec<String>>,
    #[serde(default)]
    title: Option<String>,
    #[serde(flatten)]
    series: HashMap<String, Vec<Vec<f32>>>,
}

/// Raw annotation entry as it appears on disk.
#[derive(Debug, Deserialize)]
struct AnnotationDoc {
    cell: [usize; 2],
    text: String,
    #[serde(default)]
    bottom: bool,
}

/// Validated dataset: declaration-ordered categories, a column-major 6x6
/// ordering grid, and six eras of samples per category.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    /// Categories in declaration order (drives the legend)
    pub categories: Vec<Category>,
    /// `ordering[era][row]` names the category shown in that cell
    pub ordering: Vec<Vec<Category>>,
    /// Era display labels, exactly 6 when present
    pub era_labels: Option<Vec<String>>,
    /// Optional quilt title
    pub title: Option<String>,
    series: BTreeMap<Category, Vec<Vec<f32>>>,
}

impl Dataset {
    /// Parse and validate a dataset document.
    ///
    /// # Errors
    ///
    /// Returns a [`DataError`] describing the first structural problem:
    /// malformed JSON, unknown or undeclared category keys, a non-6x6
    /// ordering grid, wrong era arity, or a category with no samples.
    pub fn from_json(json: &str) -> Result<Self, DataError> {
        let doc: DatasetDoc = serde_json::from_str(json)?;

        let mut categories = Vec::with_capacity(doc.categories.len());
        for key in &doc.categories {
            let category = Category::from_key(key).ok_or_else(|| DataError::UnknownCategory {
                key: key.clone(),
                place: "categories list",
            })?;
            categories.push(category);
        }

        let mut series = BTreeMap::new();
        for &category in &categories {
            let eras = doc
                .series
                .get(category.key())
                .ok_or(DataError::MissingSeries(category))?;
            if eras.len() != ERA_COUNT {
                return Err(DataError::EraCount {
                    category,
                    found: eras.len(),
                });
            }
            if eras.iter().all(Vec::is_empty) {
                return Err(DataError::InsufficientData(category));
            }
            series.insert(category, eras.clone());
        }

        if doc.ordering.len() != GRID_SIZE {
            return Err(DataError::OrderingColumns {
                found: doc.ordering.len(),
            });
        }
        let mut ordering = Vec::with_capacity(GRID_SIZE);
        for (column, keys) in doc.ordering.iter().enumerate() {
            if keys.len() != GRID_SIZE {
                return Err(DataError::OrderingRows {
                    column,
                    found: keys.len(),
                });
            }
            let mut rows = Vec::with_capacity(GRID_SIZE);
            for key in keys {
                let category =
                    Category::from_key(key).ok_or_else(|| DataError::UnknownCategory {
                        key: key.clone(),
                        place: "ordering grid",
                    })?;
                if !series.contains_key(&category) {
                    return Err(DataError::UnknownCategory {
                        key: key.clone(),
                        place: "ordering grid (undeclared category)",
                    });
                }
                rows.push(category);
            }
            ordering.push(rows);
        }

        if let Some(labels) = &doc.eras {
            if labels.len() != ERA_COUNT {
                return Err(DataError::EraLabelCount {
                    found: labels.len(),
                });
            }
        }

        Ok(Self {
            categories,
            ordering,
            era_labels: doc.eras,
            title: doc.title,
            series,
        })
    }

    /// Samples for one category in one era.
    #[must_use]
    pub fn samples(&self, category: Category, era: usize) -> &[f32] {
        self.series
            .get(&category)
            .and_then(|eras| eras.get(era))
            .map_or(&[], Vec::as_slice)
    }

    /// All samples of a category across every era, in era order.
    pub fn all_samples(&self, category: Category) -> impl Iterator<Item = f32> + '_ {
        self.series
            .get(&category)
            .into_iter()
            .flatten()
            .flatten()
            .copied()
    }
}

/// One static text overlay on the grid.
#[derive(Debug, Clone, PartialEq)]
pub struct Annotation {
    /// Target cell (column, row)
    pub cell: (usize, usize),
    /// Literal label text
    pub text: String,
    /// Anchor in the bottom fifth of the cell instead of the top third
    pub bottom: bool,
}

/// Parse and validate the annotation document.
///
/// # Errors
///
/// Returns a [`DataError`] for malformed JSON or a cell outside the grid.
pub fn annotations_from_json(json: &str) -> Result<Vec<Annotation>, DataError> {
    let docs: Vec<AnnotationDoc> = serde_json::from_str(json)?;
    let mut annotations = Vec::with_capacity(docs.len());
    for (index, doc) in docs.into_iter().enumerate() {
        let [column, row] = doc.cell;
        if column >= GRID_SIZE || row >= GRID_SIZE {
            return Err(DataError::AnnotationCell { index, column, row });
        }
        annotations.push(Annotation {
            cell: (column, row),
            text: doc.text,
            bottom: doc.bottom,
        });
    }
    Ok(annotations)
}

/// The write-once application state: both documents, loaded and validated.
///
/// Constructed exactly once at startup; every render pass borrows it
/// immutably.
#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    /// The validated dataset
    pub dataset: Dataset,
    /// The validated annotation list
    pub annotations: Vec<Annotation>,
}

impl AppState {
    /// Build the state from both JSON documents.
    ///
    /// No rendering can observe a partially loaded state: this is the only
    /// constructor, and it requires both documents to validate.
    ///
    /// # Errors
    ///
    /// Returns the first [`DataError`] from either document.
    pub fn from_json(dataset_json: &str, annotations_json: &str) -> Result<Self, DataError> {
        Ok(Self {
            dataset: Dataset::from_json(dataset_json)?,
            annotations: annotations_from_json(annotations_json)?,
        })
    }
}
