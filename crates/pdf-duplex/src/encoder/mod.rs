//! Page-description encoding
//!
//! The exporter only needs four operations from an encoder, captured by
//! [`PageEncoder`]. [`PdfEncoder`] produces real PDF output;
//! [`RecordingEncoder`] just remembers what it was asked to do, for dry
//! runs and tests.

mod pdf;

pub use pdf::PdfEncoder;

use crate::layout::PlacementRect;
use crate::types::{DuplexError, Result};
use std::fmt;

/// Capability consumed by the exporter.
///
/// A document starts with one open page; `add_page` closes the current page
/// and opens the next one.
pub trait PageEncoder {
    /// Start a document whose pages all have the given size
    fn new_document(&mut self, page_width_mm: f32, page_height_mm: f32) -> Result<()>;

    fn add_page(&mut self) -> Result<()>;

    /// Draw encoded image bytes on the current page, stretched to `rect`
    fn draw_image(&mut self, image: &[u8], rect: PlacementRect) -> Result<()>;

    /// Finish the document and return its encoded bytes
    fn serialize(&mut self) -> Result<Vec<u8>>;
}

/// A call received by a [`RecordingEncoder`]
#[derive(Debug, Clone, PartialEq)]
pub enum EncoderCall {
    NewDocument {
        page_width_mm: f32,
        page_height_mm: f32,
    },
    AddPage,
    DrawImage {
        image: Vec<u8>,
        rect: PlacementRect,
    },
    Serialize,
}

impl fmt::Display for EncoderCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EncoderCall::NewDocument {
                page_width_mm,
                page_height_mm,
            } => write!(f, "new_document({}x{}mm)", page_width_mm, page_height_mm),
            EncoderCall::AddPage => f.write_str("add_page()"),
            EncoderCall::DrawImage { image, rect } => write!(
                f,
                "draw_image({} bytes, x={:.2}, y={:.2}, w={:.2}, h={:.2})",
                image.len(),
                rect.x,
                rect.y,
                rect.width,
                rect.height
            ),
            EncoderCall::Serialize => f.write_str("serialize()"),
        }
    }
}

/// Encoder that records calls instead of encoding.
///
/// `serialize` returns the call log, one call per line.
#[derive(Debug, Default)]
pub struct RecordingEncoder {
    calls: Vec<EncoderCall>,
    fail_on_draw: bool,
}

impl RecordingEncoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// An encoder whose `draw_image` always fails
    pub fn failing_on_draw() -> Self {
        Self {
            calls: Vec::new(),
            fail_on_draw: true,
        }
    }

    pub fn calls(&self) -> &[EncoderCall] {
        &self.calls
    }
}

impl PageEncoder for RecordingEncoder {
    fn new_document(&mut self, page_width_mm: f32, page_height_mm: f32) -> Result<()> {
        self.calls.push(EncoderCall::NewDocument {
            page_width_mm,
            page_height_mm,
        });
        Ok(())
    }

    fn add_page(&mut self) -> Result<()> {
        self.calls.push(EncoderCall::AddPage);
        Ok(())
    }

    fn draw_image(&mut self, image: &[u8], rect: PlacementRect) -> Result<()> {
        if self.fail_on_draw {
            return Err(DuplexError::Encoder("draw_image rejected".to_string()));
        }
        self.calls.push(EncoderCall::DrawImage {
            image: image.to_vec(),
            rect,
        });
        Ok(())
    }

    fn serialize(&mut self) -> Result<Vec<u8>> {
        self.calls.push(EncoderCall::Serialize);
        let log = self
            .calls
            .iter()
            .map(|call| call.to_string())
            .collect::<Vec<_>>()
            .join("\n");
        Ok(log.into_bytes())
    }
}
