use strata::{
    CalendarDocument, ImageRef, MonthContent, PageModel, PageRasterizer, RasterSurface,
    RasterizeError,
};

/// Twelve slots, every one with a photo assigned.
pub fn months_with_photos() -> [MonthContent; 12] {
    std::array::from_fn(|i| MonthContent {
        image: Some(ImageRef::new(format!("https://photos.example/{i}.jpg"))),
        ..MonthContent::placeholder(i as u32)
    })
}

pub fn sample_document(year: i32) -> CalendarDocument {
    CalendarDocument::assemble(year, &months_with_photos())
}

/// A page as seen by a test rasterizer: which month, and which of the two
/// page kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeenPage {
    Cover(u32),
    Grid(u32),
}

fn observe(page: &PageModel) -> SeenPage {
    match page {
        PageModel::Cover { content } => SeenPage::Cover(content.month_index),
        PageModel::Grid { month_index, .. } => SeenPage::Grid(*month_index),
    }
}

/// Renders every page as a small solid-color surface and records the order
/// in which pages were handed over. Pages without a photo get a neutral
/// placeholder fill, mirroring the real presentation layer.
pub struct RecordingRasterizer {
    pub seen: Vec<SeenPage>,
    pub surface_size: (u32, u32),
}

impl RecordingRasterizer {
    pub fn new() -> Self {
        Self {
            seen: Vec::new(),
            // 2x a 160x113pt thumbnail; any size fills the page by aspect.
            surface_size: (320, 226),
        }
    }
}

impl PageRasterizer for RecordingRasterizer {
    fn rasterize(&mut self, page: &PageModel) -> Result<RasterSurface, RasterizeError> {
        self.seen.push(observe(page));
        let (width, height) = self.surface_size;
        let fill = match page {
            PageModel::Cover { content } if !content.has_image() => [230, 230, 230],
            PageModel::Cover { content } => {
                [content.accent.r, content.accent.g, content.accent.b]
            }
            PageModel::Grid { accent, .. } => [accent.r, accent.g, accent.b],
        };
        Ok(RasterSurface::filled(width, height, fill))
    }
}

/// Fails on the `fail_on`th page (1-based), succeeding before it - the
/// shape of a cross-origin image fetch being refused mid-export.
pub struct FailingRasterizer {
    pub fail_on: usize,
    rendered: usize,
}

impl FailingRasterizer {
    pub fn new(fail_on: usize) -> Self {
        Self { fail_on, rendered: 0 }
    }
}

impl PageRasterizer for FailingRasterizer {
    fn rasterize(&mut self, page: &PageModel) -> Result<RasterSurface, RasterizeError> {
        self.rendered += 1;
        if self.rendered == self.fail_on {
            return Err(RasterizeError::SourceUnavailable(format!(
                "cross-origin fetch blocked for month {}",
                page.month_index()
            )));
        }
        Ok(RasterSurface::filled(64, 48, [0, 0, 0]))
    }
}
