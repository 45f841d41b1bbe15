use lopdf::Document as LopdfDocument;

/// Get page dimensions (width, height) in points.
pub fn get_page_dimensions(doc: &LopdfDocument, page_num: u32) -> Option<(f32, f32)> {
    let pages = doc.get_pages();
    let page_id = pages.get(&page_num)?;
    let page_dict = doc.get_object(*page_id).ok()?.as_dict().ok()?;
    let media_box = page_dict.get(b"MediaBox").ok()?.as_array().ok()?;
    if media_box.len() < 4 {
        return None;
    }
    let width = media_box[2].as_f32().ok()? - media_box[0].as_f32().ok()?;
    let height = media_box[3].as_f32().ok()? - media_box[1].as_f32().ok()?;
    Some((width, height))
}

/// The Filter names of every image XObject in the document, in page order.
pub fn image_filters(doc: &LopdfDocument) -> Vec<String> {
    let mut filters = Vec::new();
    let pages = doc.get_pages();
    for page_num in 1..=pages.len() as u32 {
        let Some(page_id) = pages.get(&page_num) else {
            continue;
        };
        let Ok(page_dict) = doc.get_object(*page_id).and_then(|o| o.as_dict().map(Clone::clone))
        else {
            continue;
        };
        let Ok(resources) = page_dict.get(b"Resources").and_then(|o| o.as_dict()) else {
            continue;
        };
        let Ok(xobjects) = resources.get(b"XObject").and_then(|o| o.as_dict()) else {
            continue;
        };
        for (_, value) in xobjects.iter() {
            let Ok(stream_id) = value.as_reference() else {
                continue;
            };
            if let Ok(lopdf::Object::Stream(stream)) = doc.get_object(stream_id) {
                if let Ok(filter) = stream.dict.get(b"Filter").and_then(|o| o.as_name()) {
                    filters.push(String::from_utf8_lossy(filter).to_string());
                }
            }
        }
    }
    filters
}

/// Assert the number of pages in a PDF.
#[macro_export]
macro_rules! assert_pdf_page_count {
    ($pdf:expr, $count:expr) => {
        assert_eq!(
            $pdf.page_count(),
            $count,
            "Expected {} pages, got {}",
            $count,
            $pdf.page_count()
        );
    };
}

/// Assert page dimensions within tolerance.
#[macro_export]
macro_rules! assert_pdf_page_size {
    ($pdf:expr, $page:expr, $width:expr, $height:expr) => {
        let dims = $crate::common::pdf_assertions::get_page_dimensions(&$pdf.doc, $page);
        assert!(dims.is_some(), "Could not get dimensions for page {}", $page);
        let (w, h) = dims.unwrap();
        assert!(
            (w - $width).abs() < 1.0,
            "Page {} width expected ~{}, got {}",
            $page,
            $width,
            w
        );
        assert!(
            (h - $height).abs() < 1.0,
            "Page {} height expected ~{}, got {}",
            $page,
            $height,
            h
        );
    };
}
