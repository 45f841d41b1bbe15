use crate::error::PdfError;
use crate::format::PageSize;
use crate::jpeg::JpegImage;
use lopdf::content::{Content, Operation};
use lopdf::{Dictionary, Document, Object, ObjectId, Stream, dictionary};
use strata_types::Size;

/// Builds a multi-page PDF by appending one image-bearing page at a time.
///
/// Pages land in the document in exactly the order they are appended; the
/// assembler is single-use state private to one export and must not be
/// shared between exports.
pub struct PdfAssembler {
    doc: Document,
    pages_id: ObjectId,
    page_ids: Vec<ObjectId>,
    sheet: Size,
}

impl PdfAssembler {
    pub fn new(page: PageSize) -> Self {
        let mut doc = Document::with_version("1.7");
        // Reserved up front so every page can reference its parent; the
        // actual Pages dictionary is written in finish().
        let pages_id = doc.new_object_id();
        Self {
            doc,
            pages_id,
            page_ids: Vec::new(),
            sheet: page.dimensions_pt(),
        }
    }

    /// Appends one page whose JPEG fills the sheet width, height following
    /// the image's native aspect ratio, anchored to the top-left corner.
    pub fn append_image_page(&mut self, image: &JpegImage) -> Result<(), PdfError> {
        if image.width == 0 || image.height == 0 {
            return Err(PdfError::Pdf(format!(
                "degenerate image dimensions {}x{}",
                image.width, image.height
            )));
        }

        let xobject_id = self.doc.add_object(Stream::new(
            dictionary! {
                "Type" => "XObject",
                "Subtype" => "Image",
                "Width" => i64::from(image.width),
                "Height" => i64::from(image.height),
                "ColorSpace" => "DeviceRGB",
                "BitsPerComponent" => 8,
                "Filter" => "DCTDecode",
            },
            image.data.clone(),
        ));

        let display_width = self.sheet.width;
        let display_height = display_width * image.height as f32 / image.width as f32;
        let offset_y = self.sheet.height - display_height;

        let name = format!("Im{}", self.page_ids.len());
        let content = Content {
            operations: vec![
                Operation::new("q", vec![]),
                Operation::new(
                    "cm",
                    vec![
                        display_width.into(),
                        0f32.into(),
                        0f32.into(),
                        display_height.into(),
                        0f32.into(),
                        offset_y.into(),
                    ],
                ),
                Operation::new("Do", vec![Object::Name(name.clone().into_bytes())]),
                Operation::new("Q", vec![]),
            ],
        };
        let content_id = self
            .doc
            .add_object(Stream::new(dictionary! {}, content.encode()?));

        let mut xobjects = Dictionary::new();
        xobjects.set(name.into_bytes(), Object::Reference(xobject_id));

        let page_id = self.doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => self.pages_id,
            "MediaBox" => vec![0f32.into(), 0f32.into(), self.sheet.width.into(), self.sheet.height.into()],
            "Contents" => content_id,
            "Resources" => dictionary! { "XObject" => xobjects },
        });
        self.page_ids.push(page_id);
        log::debug!(
            "appended page {} ({}x{} px, {} byte jpeg)",
            self.page_ids.len(),
            image.width,
            image.height,
            image.data.len()
        );
        Ok(())
    }

    pub fn page_count(&self) -> usize {
        self.page_ids.len()
    }

    /// Writes the page tree, catalog and trailer and serializes the whole
    /// document to memory.
    pub fn finish(mut self) -> Result<Vec<u8>, PdfError> {
        let pages_dict = dictionary! {
            "Type" => "Pages",
            "Kids" => self.page_ids.iter().map(|id| Object::Reference(*id)).collect::<Vec<Object>>(),
            "Count" => self.page_ids.len() as i64,
        };
        self.doc
            .objects
            .insert(self.pages_id, Object::Dictionary(pages_dict));

        let catalog_id = self
            .doc
            .add_object(dictionary! { "Type" => "Catalog", "Pages" => self.pages_id });
        self.doc.trailer.set("Root", catalog_id);

        let mut bytes = Vec::new();
        self.doc.save_to(&mut bytes)?;
        log::debug!(
            "finished document: {} pages, {} bytes",
            self.page_ids.len(),
            bytes.len()
        );
        Ok(bytes)
    }
}
