use crate::error::RasterizeError;

/// A rasterized page: tightly packed 8-bit RGB rows, top-down.
///
/// For print quality, rasterizers should produce at least 2x the logical
/// page resolution; the exporter scales by aspect ratio, not pixel count,
/// so any resolution fills the page without distortion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterSurface {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl RasterSurface {
    pub const BYTES_PER_PIXEL: usize = 3;

    /// Wraps an RGB8 buffer, validating it against the declared
    /// dimensions.
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> Result<Self, RasterizeError> {
        let expected = width as usize * height as usize * Self::BYTES_PER_PIXEL;
        if data.len() != expected {
            return Err(RasterizeError::MalformedSurface {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self { width, height, data })
    }

    /// A surface filled with a single color. Rasterizers use this as the
    /// placeholder for months with no photo assigned.
    pub fn filled(width: u32, height: u32, rgb: [u8; 3]) -> Self {
        let pixels = width as usize * height as usize;
        let mut data = Vec::with_capacity(pixels * Self::BYTES_PER_PIXEL);
        for _ in 0..pixels {
            data.extend_from_slice(&rgb);
        }
        Self { width, height, data }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }
}
