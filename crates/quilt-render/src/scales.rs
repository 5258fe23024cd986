//! Per-category value scales.

use crate::Layout;
use quilt_core::{extent, LinearScale};
use quilt_data::{Category, Dataset};
use std::collections::BTreeMap;

/// One vertical scale per category, shared by every cell showing that
/// category regardless of era.
///
/// The range is deliberately inverted (first endpoint is the larger pixel
/// value) so increasing values plot upward inside the panel; cell drawing
/// assumes this orientation.
#[derive(Debug, Clone, PartialEq)]
pub struct ScaleRegistry {
    scales: BTreeMap<Category, LinearScale>,
}

impl ScaleRegistry {
    /// Build scales for every declared category.
    ///
    /// The domain is the (min, max) over the union of all samples across
    /// all six eras. Validation guarantees at least one sample per
    /// category; a hypothetical empty sequence is simply skipped rather
    /// than given a non-finite domain.
    #[must_use]
    pub fn build(dataset: &Dataset, layout: &Layout) -> Self {
        let range = (
            layout.cell_height - 2.0 * layout.strip,
            2.0 * layout.strip,
        );
        let scales = dataset
            .categories
            .iter()
            .filter_map(|&category| {
                extent(dataset.all_samples(category))
                    .map(|domain| (category, LinearScale::new(domain, range)))
            })
            .collect();
        Self { scales }
    }

    /// The scale for a category, if it was declared with samples.
    #[must_use]
    pub fn get(&self, category: Category) -> Option<LinearScale> {
        self.scales.get(&category).copied()
    }

    /// Number of registered scales.
    #[must_use]
    pub fn len(&self) -> usize {
        self.scales.len()
    }

    /// Whether no scale was registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scales.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quilt_core::Size;

    fn dataset(samples: &str) -> Dataset {
        let json = format!(
            r#"{{
                "categories": ["steps"],
                "ordering": [{0}, {0}, {0}, {0}, {0}, {0}],
                "steps": {samples}
            }}"#,
            r#"["steps", "steps", "steps", "steps", "steps", "steps"]"#
        );
        Dataset::from_json(&json).unwrap()
    }

    #[test]
    fn test_domain_spans_all_eras() {
        let ds = dataset("[[1, 9], [4], [2, 7], [3], [5], [6, 0]]");
        let layout = Layout::compute(Size::new(1000.0, 800.0));
        let registry = ScaleRegistry::build(&ds, &layout);
        let scale = registry.get(Category::Steps).unwrap();
        assert_eq!(scale.domain, (0.0, 9.0));
    }

    #[test]
    fn test_range_is_inverted() {
        let ds = dataset("[[1, 2], [3], [4], [5], [6], [7]]");
        let layout = Layout::compute(Size::new(1000.0, 800.0));
        let scale = ScaleRegistry::build(&ds, &layout)
            .get(Category::Steps)
            .unwrap();
        let (r0, r1) = scale.range;
        assert_eq!(r0, layout.cell_height - 2.0 * layout.strip);
        assert_eq!(r1, 2.0 * layout.strip);
        assert!(r0 > r1, "range must run high-to-low");
        // the larger domain value maps to the smaller pixel value (upward)
        assert!(scale.map(7.0) < scale.map(1.0));
    }

    #[test]
    fn test_domain_reacts_to_an_outlying_sample() {
        let layout = Layout::compute(Size::new(1000.0, 800.0));
        let before = ScaleRegistry::build(&dataset("[[1, 2], [3], [4], [5], [6], [7]]"), &layout)
            .get(Category::Steps)
            .unwrap();
        let after = ScaleRegistry::build(&dataset("[[1, 2], [3], [4], [5], [6], [99]]"), &layout)
            .get(Category::Steps)
            .unwrap();
        assert_eq!(before.domain.1, 7.0);
        assert_eq!(after.domain.1, 99.0);
        assert_eq!(before.domain.0, after.domain.0);
    }

    #[test]
    fn test_undeclared_category_has_no_scale() {
        let ds = dataset("[[1], [2], [3], [4], [5], [6]]");
        let layout = Layout::compute(Size::new(1000.0, 800.0));
        let registry = ScaleRegistry::build(&ds, &layout);
        assert_eq!(registry.len(), 1);
        assert!(registry.get(Category::Sleep).is_none());
    }
}
