use strata_render_core::RasterizeError;
use strata_render_pdf::PdfError;
use thiserror::Error;

/// A comprehensive error type for the whole export pipeline.
///
/// Any variant aborts the export as a whole; partial output is discarded
/// and the only recovery is a full re-invocation.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("page rasterization failed: {0}")]
    Rasterize(#[from] RasterizeError),

    #[error("PDF assembly failed: {0}")]
    Pdf(#[from] PdfError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
