//! PDF assembly for rasterized calendar pages.
//!
//! This crate turns a sequence of pixel surfaces into one multi-page PDF:
//! each surface is JPEG-compressed (lossy, bounded file size) and embedded
//! as a DCTDecode image XObject on its own page, scaled to exactly fill
//! the page width with the height following the image's native aspect
//! ratio.

mod error;
mod format;
mod jpeg;
mod writer;

pub use error::PdfError;
pub use format::PageSize;
pub use jpeg::{JpegImage, encode_surface};
pub use writer::PdfAssembler;
