//! The in-memory model of a photo calendar document.
//!
//! A calendar is twelve ordered [`MonthContent`] slots plus a year. From
//! those this crate assembles the renderable [`CalendarDocument`]: one
//! cover page and one grid page per month, in month order. Reordering of
//! photo content between slots is a pure permutation over the content
//! fields; slot identity never moves.

mod content;
mod page;
pub mod reorder;

pub use content::{
    FontFamily, ImageRef, MONTH_NAMES, MonthContent, TextAnchor, months_without_images,
};
pub use page::{CalendarDocument, PageModel};
