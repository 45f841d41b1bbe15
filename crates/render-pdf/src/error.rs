use thiserror::Error;

#[derive(Error, Debug)]
pub enum PdfError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JPEG encoding error: {0}")]
    JpegEncode(#[from] image::ImageError),
    #[error("PDF generation error: {0}")]
    Pdf(String),
}

impl From<lopdf::Error> for PdfError {
    fn from(err: lopdf::Error) -> Self {
        PdfError::Pdf(err.to_string())
    }
}
