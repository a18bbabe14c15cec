//! PDF output via printpdf

use super::PageEncoder;
use crate::constants::mm_to_pt;
use crate::layout::PlacementRect;
use crate::types::{DuplexError, Result};
use printpdf::image::RawImage;
use printpdf::ops::Op;
use printpdf::xobject::{XObject, XObjectTransform};
use printpdf::{Mm, PdfDocument, PdfPage, PdfSaveOptions, Pt, XObjectId};
use std::collections::HashMap;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Encodes pages into a PDF document.
///
/// Each distinct image is embedded once and referenced from every page
/// that draws it, so a 100-copy job does not carry 100 copies of each image.
pub struct PdfEncoder {
    title: String,
    open: Option<OpenDocument>,
}

struct OpenDocument {
    document: PdfDocument,
    page_width_mm: f32,
    page_height_mm: f32,
    ops: Vec<Op>,
    /// Embedded images keyed by content hash, with their pixel size
    images: HashMap<u64, (XObjectId, (u32, u32))>,
}

impl OpenDocument {
    fn finish_page(&mut self) {
        let ops = std::mem::take(&mut self.ops);
        self.document.pages.push(PdfPage::new(
            Mm(self.page_width_mm),
            Mm(self.page_height_mm),
            ops,
        ));
    }

    fn image_xobject(&mut self, image: &[u8]) -> Result<(XObjectId, (u32, u32))> {
        let key = content_hash(image);
        if let Some(cached) = self.images.get(&key) {
            return Ok(cached.clone());
        }

        let mut warnings = Vec::new();
        let raw_image = RawImage::decode_from_bytes(image, &mut warnings)
            .map_err(|e| DuplexError::Encoder(format!("Failed to decode image data: {}", e)))?;
        let dims = (raw_image.width as u32, raw_image.height as u32);
        let xobj_id = XObjectId::new();
        self.document
            .resources
            .xobjects
            .map
            .insert(xobj_id.clone(), XObject::Image(raw_image));
        self.images.insert(key, (xobj_id.clone(), dims));
        log::debug!("Embedded {}x{}px image as XObject", dims.0, dims.1);
        Ok((xobj_id, dims))
    }
}

impl PdfEncoder {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            open: None,
        }
    }

    fn open_document(&mut self) -> Result<&mut OpenDocument> {
        self.open
            .as_mut()
            .ok_or_else(|| DuplexError::Encoder("No document started".to_string()))
    }
}

impl PageEncoder for PdfEncoder {
    fn new_document(&mut self, page_width_mm: f32, page_height_mm: f32) -> Result<()> {
        self.open = Some(OpenDocument {
            document: PdfDocument::new(&self.title),
            page_width_mm,
            page_height_mm,
            ops: Vec::new(),
            images: HashMap::new(),
        });
        Ok(())
    }

    fn add_page(&mut self) -> Result<()> {
        self.open_document()?.finish_page();
        Ok(())
    }

    fn draw_image(&mut self, image: &[u8], rect: PlacementRect) -> Result<()> {
        let open = self.open_document()?;
        let (xobj_id, (img_w, img_h)) = open.image_xobject(image)?;

        // Placement is top-left based, PDF user space is bottom-left based
        let page_height_pt = mm_to_pt(open.page_height_mm);
        let width_pt = mm_to_pt(rect.width);
        let height_pt = mm_to_pt(rect.height);
        let x_pt = mm_to_pt(rect.x);
        let y_pt = page_height_pt - mm_to_pt(rect.y) - height_pt;

        // At 72 dpi one image pixel is one point
        let transform = XObjectTransform {
            translate_x: Some(Pt(x_pt)),
            translate_y: Some(Pt(y_pt)),
            scale_x: Some(width_pt / img_w as f32),
            scale_y: Some(height_pt / img_h as f32),
            rotate: None,
            dpi: Some(72.0),
        };
        open.ops.push(Op::UseXobject {
            id: xobj_id,
            transform,
        });
        Ok(())
    }

    fn serialize(&mut self) -> Result<Vec<u8>> {
        let mut open = self
            .open
            .take()
            .ok_or_else(|| DuplexError::Encoder("No document started".to_string()))?;
        open.finish_page();

        let mut warnings = Vec::new();
        let bytes = open
            .document
            .save(&PdfSaveOptions::default(), &mut warnings);
        if !warnings.is_empty() {
            log::debug!("PDF serializer reported {} warnings", warnings.len());
        }
        Ok(bytes)
    }
}

fn content_hash(bytes: &[u8]) -> u64 {
    let mut hasher = DefaultHasher::new();
    bytes.hash(&mut hasher);
    hasher.finish()
}
