use thiserror::Error;

#[derive(Error, Debug)]
pub enum RasterizeError {
    /// A source image could not be fetched or decoded, most commonly a
    /// cross-origin fetch the host environment refused.
    #[error("source image unavailable: {0}")]
    SourceUnavailable(String),
    /// The produced pixel buffer does not match its declared dimensions.
    #[error("malformed raster surface: expected {expected} bytes, got {actual}")]
    MalformedSurface { expected: usize, actual: usize },
    #[error("rasterization failed: {0}")]
    Other(String),
}

impl From<&str> for RasterizeError {
    fn from(s: &str) -> Self {
        RasterizeError::Other(s.to_string())
    }
}
