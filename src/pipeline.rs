use crate::error::ExportError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use strata_document::CalendarDocument;
use strata_render_core::PageRasterizer;
use strata_render_pdf::{PageSize, PdfAssembler, encode_surface};

/// Tunables for one export run, deserializable from caller configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExportOptions {
    pub page: PageSize,
    /// JPEG quality 1-100 for the embedded page images. Lossy on purpose,
    /// to bound file size.
    pub jpeg_quality: u8,
    /// The output file name becomes `<file_stem>-<year>.pdf`.
    pub file_stem: String,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            page: PageSize::default(),
            jpeg_quality: 90,
            file_stem: "calendar".to_string(),
        }
    }
}

/// The outcome of a successful export. No partial or resumable state is
/// ever returned.
#[derive(Debug, Clone)]
pub struct ExportResult {
    pub bytes: Vec<u8>,
    pub page_count: usize,
    /// Suggested file name with the target year embedded,
    /// e.g. `calendar-2025.pdf`.
    pub file_name: String,
}

impl ExportResult {
    /// Writes the document into `dir` under its suggested file name and
    /// returns the full path.
    pub fn write_to_dir(&self, dir: &Path) -> Result<PathBuf, ExportError> {
        let path = dir.join(&self.file_name);
        std::fs::write(&path, &self.bytes)?;
        Ok(path)
    }
}

/// Turns a [`CalendarDocument`] into a single PDF by rasterizing its pages
/// strictly in order, one at a time.
///
/// Sequential processing is a contract, not an optimization choice: the
/// output page order must match the document's declared order, and the
/// assembler is stateful and single-use. All mutable state lives inside
/// one `export` call; the pipeline itself can be reused across exports.
pub struct ExportPipeline {
    options: ExportOptions,
}

impl ExportPipeline {
    pub fn new() -> Self {
        Self::with_options(ExportOptions::default())
    }

    pub fn with_options(options: ExportOptions) -> Self {
        Self { options }
    }

    /// Exports the whole document, invoking `on_progress(done, total)`
    /// after each completed page - exactly `total` times on success, with
    /// strictly increasing `done`.
    ///
    /// Every page is rendered and appended before the next one starts. A
    /// failure on any page aborts the export: the accumulated document is
    /// dropped and the error is surfaced as a whole. Pages without a
    /// source photo are not special-cased here; the rasterizer substitutes
    /// a placeholder and warning the user beforehand is the caller's job.
    pub fn export<R, F>(
        &self,
        document: &CalendarDocument,
        rasterizer: &mut R,
        mut on_progress: F,
    ) -> Result<ExportResult, ExportError>
    where
        R: PageRasterizer + ?Sized,
        F: FnMut(usize, usize),
    {
        let total = document.page_count();
        log::info!("exporting {total} page calendar for {}", document.year);

        let mut assembler = PdfAssembler::new(self.options.page);
        for (index, page) in document.pages.iter().enumerate() {
            let surface = match rasterizer.rasterize(page) {
                Ok(surface) => surface,
                Err(err) => {
                    log::error!(
                        "aborting export: page {} of {total} failed to rasterize: {err}",
                        index + 1
                    );
                    return Err(err.into());
                }
            };
            let jpeg = encode_surface(&surface, self.options.jpeg_quality)?;
            assembler.append_image_page(&jpeg)?;
            on_progress(index + 1, total);
        }

        let bytes = assembler.finish()?;
        Ok(ExportResult {
            bytes,
            page_count: total,
            file_name: format!("{}-{}.pdf", self.options.file_stem, document.year),
        })
    }

    /// [`export`](Self::export) without progress reporting.
    pub fn export_quiet<R>(
        &self,
        document: &CalendarDocument,
        rasterizer: &mut R,
    ) -> Result<ExportResult, ExportError>
    where
        R: PageRasterizer + ?Sized,
    {
        self.export(document, rasterizer, |_, _| {})
    }
}

impl Default for ExportPipeline {
    fn default() -> Self {
        Self::new()
    }
}
