//! Error types for document loading and validation.

use crate::Category;
use std::fmt;

/// Error type for loading the dataset and annotation documents.
///
/// Every variant is a load-time failure; once `AppState` exists, rendering
/// cannot fail.
#[derive(Debug)]
pub enum DataError {
    /// JSON parsing error
    Json(serde_json::Error),
    /// A document key does not name a known category
    UnknownCategory {
        /// The offending key
        key: String,
        /// Where the key appeared (categories list, ordering grid, ...)
        place: &'static str,
    },
    /// A declared category has no sample series
    MissingSeries(Category),
    /// A category's series does not hold exactly 6 eras
    EraCount {
        /// The offending category
        category: Category,
        /// Number of eras found
        found: usize,
    },
    /// A category's samples are empty across all eras
    InsufficientData(Category),
    /// The ordering grid does not have exactly 6 columns
    OrderingColumns {
        /// Number of columns found
        found: usize,
    },
    /// An ordering column does not have exactly 6 rows
    OrderingRows {
        /// Column index
        column: usize,
        /// Number of rows found
        found: usize,
    },
    /// The era label list does not hold exactly 6 entries
    EraLabelCount {
        /// Number of labels found
        found: usize,
    },
    /// An annotation targets a cell outside the 6x6 grid
    AnnotationCell {
        /// Annotation index in the document
        index: usize,
        /// Target column
        column: usize,
        /// Target row
        row: usize,
    },
}

impl fmt::Display for DataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json(e) => write!(f, "JSON error: {e}"),
            Self::UnknownCategory { key, place } => {
                write!(f, "unknown category '{key}' in {place}")
            }
            Self::MissingSeries(category) => {
                write!(f, "category '{category}' is declared but has no samples")
            }
            Self::EraCount { category, found } => {
                write!(f, "category '{category}' has {found} eras, expected 6")
            }
            Self::InsufficientData(category) => {
                write!(f, "insufficient data: category '{category}' has no samples in any era")
            }
            Self::OrderingColumns { found } => {
                write!(f, "ordering grid has {found} columns, expected 6")
            }
            Self::OrderingRows { column, found } => {
                write!(f, "ordering column {column} has {found} rows, expected 6")
            }
            Self::EraLabelCount { found } => {
                write!(f, "era label list has {found} entries, expected 6")
            }
            Self::AnnotationCell { index, column, row } => {
                write!(f, "annotation {index} targets cell ({column}, {row}) outside the 6x6 grid")
            }
        }
    }
}

impl std::error::Error for DataError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for DataError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}
