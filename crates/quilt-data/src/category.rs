//! Measurement categories and their exhaustive display/palette tables.

use quilt_core::Color;

/// One measurement category of the health dataset.
///
/// The name and color tables below are exhaustive `match`es, so adding a
/// variant without its mappings is a compile error rather than a runtime
/// lookup failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    /// Body weight
    Weight,
    /// Sleep score
    Sleep,
    /// Steps taken
    Steps,
    /// Resting heart rate
    RestingHeartRate,
    /// Intensity minutes
    IntensityMinutes,
    /// Stress score
    Stress,
}

impl Category {
    /// All categories in canonical order.
    pub const ALL: [Self; 6] = [
        Self::Weight,
        Self::Sleep,
        Self::Steps,
        Self::RestingHeartRate,
        Self::IntensityMinutes,
        Self::Stress,
    ];

    /// The category's key in the JSON documents.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Weight => "weight",
            Self::Sleep => "sleep",
            Self::Steps => "steps",
            Self::RestingHeartRate => "rhr",
            Self::IntensityMinutes => "intmin",
            Self::Stress => "stress",
        }
    }

    /// Resolve a document key to a category.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.key() == key)
    }

    /// Human-readable name, used by the legend.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Weight => "body weight",
            Self::Sleep => "sleep score",
            Self::Steps => "steps taken",
            Self::RestingHeartRate => "resting heart rate",
            Self::IntensityMinutes => "intensity minutes",
            Self::Stress => "stress score",
        }
    }

    /// Two-tone palette: (outer cell color, inner panel color).
    #[must_use]
    pub fn palette(self) -> (Color, Color) {
        match self {
            Self::Weight => (Color::rgb8(0xef, 0x47, 0x6f), Color::rgb8(0xfa, 0xd2, 0xe1)),
            Self::Sleep => (Color::rgb8(0x03, 0x04, 0x5e), Color::rgb8(0x8e, 0xca, 0xe6)),
            Self::Steps => (Color::rgb8(0x00, 0x47, 0x33), Color::rgb8(0xa5, 0xc1, 0xae)),
            Self::RestingHeartRate => {
                (Color::rgb8(0x27, 0x18, 0x7e), Color::rgb8(0xc8, 0xb6, 0xff))
            }
            Self::IntensityMinutes => {
                (Color::rgb8(0x78, 0x01, 0x16), Color::rgb8(0xdf, 0x80, 0x80))
            }
            Self::Stress => (Color::rgb8(0xe3, 0x64, 0x14), Color::rgb8(0xff, 0xbf, 0x69)),
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}
