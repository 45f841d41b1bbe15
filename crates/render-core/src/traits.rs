use crate::error::RasterizeError;
use crate::surface::RasterSurface;
use strata_document::PageModel;

/// A capability to turn one page model into pixels, supplied by the
/// presentation layer.
///
/// The exporter treats implementations as opaque, possibly slow and
/// possibly failing. A page whose content has no photo must still be
/// rasterized (with a placeholder), never skipped; a failure here aborts
/// the whole export.
pub trait PageRasterizer {
    fn rasterize(&mut self, page: &PageModel) -> Result<RasterSurface, RasterizeError>;
}
