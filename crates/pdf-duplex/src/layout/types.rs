//! Layout data types
//!
//! These types sit between the configuration and the encoder: the
//! engine produces them, previews display them and the exporter feeds
//! them to the page encoder.

use crate::types::Side;

/// Position and size of an image on a page, in millimeters.
///
/// The origin is the top-left corner of the page, y grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PlacementRect {
    /// Distance from the left page edge
    pub x: f32,
    /// Distance from the top page edge
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl PlacementRect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge x coordinate
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Bottom edge y coordinate
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn aspect_ratio(&self) -> f32 {
        self.width / self.height
    }
}

/// One physical page of the output
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageEntry {
    /// 1-based page number
    pub page_index: usize,
    pub side: Side,
    /// Where the side's image goes (None = no image for this side)
    pub placement: Option<PlacementRect>,
}

/// Ordered pages of a print job, front/back alternating
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PageSequence {
    entries: Vec<PageEntry>,
}

impl PageSequence {
    pub(crate) fn from_entries(entries: Vec<PageEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[PageEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PageEntry> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a PageSequence {
    type Item = &'a PageEntry;
    type IntoIter = std::slice::Iter<'a, PageEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl IntoIterator for PageSequence {
    type Item = PageEntry;
    type IntoIter = std::vec::IntoIter<PageEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
