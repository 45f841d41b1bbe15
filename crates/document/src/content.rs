use serde::{Deserialize, Serialize};
use strata_types::Color;

pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Default accent color per month slot.
const DEFAULT_ACCENTS: [Color; 12] = [
    Color::new(0x1e, 0x40, 0xaf), // Jan - blue
    Color::new(0xbe, 0x12, 0x3c), // Feb - pink/red
    Color::new(0x15, 0x80, 0x3d), // Mar - green
    Color::new(0xa2, 0x1c, 0xaf), // Apr - purple
    Color::new(0x04, 0x78, 0x57), // May - emerald
    Color::new(0xca, 0x8a, 0x04), // Jun - gold
    Color::new(0xc2, 0x41, 0x0c), // Jul - orange
    Color::new(0xb9, 0x1c, 0x1c), // Aug - red
    Color::new(0x85, 0x4d, 0x0e), // Sep - brown
    Color::new(0xea, 0x58, 0x0c), // Oct - orange
    Color::new(0x37, 0x41, 0x51), // Nov - grey
    Color::new(0x1d, 0x4e, 0xd8), // Dec - blue
];

/// An opaque reference to a photo: a URL or a data URI. The core never
/// interprets it; only the rasterization layer resolves it to pixels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageRef(String);

impl ImageRef {
    pub fn new(reference: impl Into<String>) -> Self {
        Self(reference.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ImageRef {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Where the month title sits on a cover page: a preset corner, or an
/// explicit position in page percentages.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextAnchor {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
    /// 0-100 on each axis, measured from the top-left corner.
    Percent { x: f32, y: f32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontFamily {
    Handwriting,
    Serif,
    Display,
}

/// One month's worth of user-chosen content, owned by the state layer and
/// read-only to the core. Style attributes arrive already resolved; how
/// they were chosen is not this crate's concern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthContent {
    /// Slot identity, 0 = January. Stays fixed when photo content is
    /// permuted between slots.
    pub month_index: u32,
    #[serde(default)]
    pub image: Option<ImageRef>,
    pub accent: Color,
    pub anchor: TextAnchor,
    pub font: FontFamily,
}

impl MonthContent {
    /// The default state of a slot before the user assigns a photo: no
    /// image, the stock palette color, title bottom-right, fonts cycled
    /// for variety.
    pub fn placeholder(month_index: u32) -> Self {
        let slot = (month_index % 12) as usize;
        const FONT_CYCLE: [FontFamily; 3] =
            [FontFamily::Display, FontFamily::Serif, FontFamily::Handwriting];
        Self {
            month_index,
            image: None,
            accent: DEFAULT_ACCENTS[slot],
            anchor: TextAnchor::BottomRight,
            font: FONT_CYCLE[slot % 3],
        }
    }

    pub fn has_image(&self) -> bool {
        self.image.is_some()
    }

    /// The English month name for this slot.
    pub fn name(&self) -> &'static str {
        MONTH_NAMES[(self.month_index % 12) as usize]
    }
}

/// Slots that still have no photo assigned. Callers use this to warn the
/// user before export; the pipeline itself renders such months with a
/// placeholder and never skips them.
pub fn months_without_images(months: &[MonthContent]) -> Vec<u32> {
    months
        .iter()
        .filter(|m| !m.has_image())
        .map(|m| m.month_index)
        .collect()
}
