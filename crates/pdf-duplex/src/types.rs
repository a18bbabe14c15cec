use std::fmt;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DuplexError {
    #[error("Invalid layout: {0}")]
    InvalidLayout(String),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("Missing {0} image")]
    MissingAsset(Side),
    #[error("Could not decode image: {0}")]
    AssetDecode(String),
    #[error("Encoder error: {0}")]
    Encoder(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, DuplexError>;

/// How an export failure should be reported to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// One or both images were never provided
    MissingInput,
    /// Everything else: bad geometry, decode or encoder failures, I/O
    GenerationFailed,
}

impl DuplexError {
    pub fn failure_kind(&self) -> FailureKind {
        match self {
            DuplexError::MissingAsset(_) => FailureKind::MissingInput,
            _ => FailureKind::GenerationFailed,
        }
    }
}

/// Supported output paper sizes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PaperSize {
    #[default]
    A4,
    A3,
}

impl PaperSize {
    /// Portrait dimensions (width, height) in millimeters
    pub fn dimensions_mm(self) -> (f32, f32) {
        match self {
            PaperSize::A4 => (210.0, 297.0),
            PaperSize::A3 => (297.0, 420.0),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            PaperSize::A4 => "A4",
            PaperSize::A3 => "A3",
        }
    }
}

impl fmt::Display for PaperSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Which image a page carries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Front,
    Back,
}

impl Side {
    /// Odd pages carry the front image, even pages the back.
    ///
    /// `page_index` is 1-based.
    pub fn for_page(page_index: usize) -> Self {
        if page_index % 2 == 1 {
            Side::Front
        } else {
            Side::Back
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Side::Front => "front",
            Side::Back => "back",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// One edge of the page, used to address a single margin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarginSide {
    Top,
    Right,
    Bottom,
    Left,
}

/// Page margins in millimeters.
/// The printable area is whatever remains of the page inside these.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Margins {
    pub top_mm: f32,
    pub right_mm: f32,
    pub bottom_mm: f32,
    pub left_mm: f32,
}

impl Default for Margins {
    fn default() -> Self {
        Self::uniform(crate::constants::FIT_MARGIN_MM)
    }
}

impl Margins {
    /// Create uniform margins on all sides
    pub fn uniform(margin_mm: f32) -> Self {
        Self {
            top_mm: margin_mm,
            right_mm: margin_mm,
            bottom_mm: margin_mm,
            left_mm: margin_mm,
        }
    }

    pub fn get(&self, side: MarginSide) -> f32 {
        match side {
            MarginSide::Top => self.top_mm,
            MarginSide::Right => self.right_mm,
            MarginSide::Bottom => self.bottom_mm,
            MarginSide::Left => self.left_mm,
        }
    }

    /// Copy of these margins with one side replaced
    pub fn with(self, side: MarginSide, value_mm: f32) -> Self {
        let mut margins = self;
        match side {
            MarginSide::Top => margins.top_mm = value_mm,
            MarginSide::Right => margins.right_mm = value_mm,
            MarginSide::Bottom => margins.bottom_mm = value_mm,
            MarginSide::Left => margins.left_mm = value_mm,
        }
        margins
    }

    pub fn iter(&self) -> impl Iterator<Item = (MarginSide, f32)> + '_ {
        [
            MarginSide::Top,
            MarginSide::Right,
            MarginSide::Bottom,
            MarginSide::Left,
        ]
        .into_iter()
        .map(|side| (side, self.get(side)))
    }
}
