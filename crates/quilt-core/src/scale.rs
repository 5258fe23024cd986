//! Linear value-to-pixel scales.

use serde::{Deserialize, Serialize};

/// Linear mapping from a value domain to a pixel range.
///
/// The range may be inverted (first endpoint larger than the second); the
/// quilt's vertical scales rely on this to plot increasing values upward.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearScale {
    /// Input domain (min, max)
    pub domain: (f32, f32),
    /// Output range; may run high-to-low
    pub range: (f32, f32),
}

impl LinearScale {
    /// Create a scale from domain and range.
    #[must_use]
    pub const fn new(domain: (f32, f32), range: (f32, f32)) -> Self {
        Self { domain, range }
    }

    /// Map a domain value to the range.
    ///
    /// A zero-width domain maps every value to the range midpoint, so a
    /// single-sample series never produces NaN.
    #[must_use]
    pub fn map(&self, value: f32) -> f32 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let span = d1 - d0;
        if span.abs() < f32::EPSILON {
            return (r0 + r1) / 2.0;
        }
        r0 + (value - d0) * (r1 - r0) / span
    }
}

/// Compute the (min, max) extent of a value sequence.
///
/// Returns `None` for an empty sequence rather than a non-finite pair.
#[must_use]
pub fn extent<I>(values: I) -> Option<(f32, f32)>
where
    I: IntoIterator<Item = f32>,
{
    let mut iter = values.into_iter();
    let first = iter.next()?;
    let mut min = first;
    let mut max = first;
    for v in iter {
        min = min.min(v);
        max = max.max(v);
    }
    Some((min, max))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_scale_endpoints() {
        let s = LinearScale::new((0.0, 4.0), (10.0, 110.0));
        assert_eq!(s.map(0.0), 10.0);
        assert_eq!(s.map(4.0), 110.0);
        assert_eq!(s.map(2.0), 60.0);
    }

    #[test]
    fn test_scale_inverted_range() {
        let s = LinearScale::new((0.0, 10.0), (100.0, 0.0));
        assert_eq!(s.map(0.0), 100.0);
        assert_eq!(s.map(10.0), 0.0);
        assert_eq!(s.map(5.0), 50.0);
    }

    #[test]
    fn test_scale_zero_width_domain_maps_to_midpoint() {
        let s = LinearScale::new((3.0, 3.0), (10.0, 110.0));
        assert_eq!(s.map(3.0), 60.0);
        assert_eq!(s.map(99.0), 60.0);
        assert!(s.map(3.0).is_finite());
    }

    #[test]
    fn test_extent_basic() {
        assert_eq!(extent([3.0, 1.0, 2.0]), Some((1.0, 3.0)));
        assert_eq!(extent([5.0]), Some((5.0, 5.0)));
    }

    #[test]
    fn test_extent_empty() {
        assert_eq!(extent(std::iter::empty()), None);
    }

    proptest! {
        #[test]
        fn prop_extent_bounds_all_values(values in prop::collection::vec(-1e6f32..1e6, 1..50)) {
            let (min, max) = extent(values.iter().copied()).unwrap();
            for v in &values {
                prop_assert!(min <= *v && *v <= max);
            }
        }

        #[test]
        fn prop_scale_output_finite(
            d0 in -1e5f32..1e5, d1 in -1e5f32..1e5,
            r0 in -1e5f32..1e5, r1 in -1e5f32..1e5,
            v in -1e5f32..1e5
        ) {
            let s = LinearScale::new((d0, d1), (r0, r1));
            prop_assert!(s.map(v).is_finite());
        }

        #[test]
        fn prop_scale_maps_domain_into_range(v in 0.0f32..1.0) {
            let s = LinearScale::new((0.0, 1.0), (120.0, 20.0));
            let y = s.map(v);
            prop_assert!((20.0..=120.0).contains(&y));
        }
    }
}
