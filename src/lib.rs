//! Photo calendar composition engine with print-ready PDF export.
//!
//! The workspace builds a 12-month photo calendar from user-supplied month
//! content and exports it as one landscape PDF, two pages per month (photo
//! cover + day grid). This crate is the integration layer: it wires the
//! pure calendar/document model to a caller-supplied page rasterizer and
//! the PDF assembler, and exposes the export pipeline with progress
//! reporting and atomic failure.

pub mod error;
pub mod pipeline;

pub use error::ExportError;
pub use pipeline::{ExportOptions, ExportPipeline, ExportResult};

// Re-exports so callers only need this crate.
pub use strata_calendar::{
    DayCell, GRID_CELLS, Holiday, HolidayIndex, HolidayKind, easter_sunday, holidays_for_year,
    month_grid, month_grid_with,
};
pub use strata_document::{
    CalendarDocument, FontFamily, ImageRef, MONTH_NAMES, MonthContent, PageModel, TextAnchor,
    months_without_images, reorder,
};
pub use strata_render_core::{PageRasterizer, RasterSurface, RasterizeError};
pub use strata_render_pdf::{PageSize, PdfError};
pub use strata_types::{Color, Size};
