use serde::{Deserialize, Serialize};
use strata_types::Size;

/// The physical sheet every page of the document is produced on. One
/// format is reused for the whole document.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PageSize {
    /// 297 x 210 mm.
    A4Landscape,
    /// 11 x 8.5 in.
    LetterLandscape,
    Custom { width: f32, height: f32 },
}

impl PageSize {
    /// Sheet dimensions in PDF points (1/72 in).
    pub fn dimensions_pt(self) -> Size {
        match self {
            PageSize::A4Landscape => Size::new(842.0, 595.0),
            PageSize::LetterLandscape => Size::new(792.0, 612.0),
            PageSize::Custom { width, height } => Size::new(width, height),
        }
    }
}

impl Default for PageSize {
    fn default() -> Self {
        PageSize::A4Landscape
    }
}
