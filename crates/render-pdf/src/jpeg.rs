use crate::error::PdfError;
use image::ExtendedColorType;
use image::codecs::jpeg::JpegEncoder;
use strata_render_core::RasterSurface;

/// A JPEG-compressed page image ready for embedding.
#[derive(Debug, Clone)]
pub struct JpegImage {
    pub data: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

/// Compresses a raster surface to JPEG at the given quality (1-100).
///
/// The stored bytes are the complete JPEG stream, suitable for a
/// DCTDecode-filtered PDF image XObject without re-encoding.
pub fn encode_surface(surface: &RasterSurface, quality: u8) -> Result<JpegImage, PdfError> {
    let mut data = Vec::new();
    let mut encoder = JpegEncoder::new_with_quality(&mut data, quality);
    encoder.encode(
        surface.data(),
        surface.width(),
        surface.height(),
        ExtendedColorType::Rgb8,
    )?;
    Ok(JpegImage {
        data,
        width: surface.width(),
        height: surface.height(),
    })
}
