use crate::asset::ImageAsset;
use crate::config::PrintConfig;
use crate::constants::{MAX_MARGIN_MM, PREVIEW_LISTED_PAGES};
use crate::layout::{
    PageEntry, PageSequence, PlacementRect, build_page_sequence, compute_placement,
};
use crate::types::*;

/// Margins as a percentage of the adjustable margin range, per side
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarginBox {
    pub top_pct: f32,
    pub right_pct: f32,
    pub bottom_pct: f32,
    pub left_pct: f32,
}

impl From<&Margins> for MarginBox {
    fn from(margins: &Margins) -> Self {
        let pct = |value: f32| value / MAX_MARGIN_MM * 100.0;
        Self {
            top_pct: pct(margins.top_mm),
            right_pct: pct(margins.right_mm),
            bottom_pct: pct(margins.bottom_mm),
            left_pct: pct(margins.left_mm),
        }
    }
}

/// Everything needed to show what an export would produce
#[derive(Debug, Clone, PartialEq)]
pub struct PrintPreview {
    pub paper_size: PaperSize,
    pub copies: u32,
    pub total_pages: usize,
    pub fit_to_printable_area: bool,
    pub margin_box: MarginBox,
    pub front_placement: Option<PlacementRect>,
    pub back_placement: Option<PlacementRect>,
    pub sequence: PageSequence,
    /// Pages beyond the listed ones
    pub remaining_pages: usize,
    /// Both images are present
    pub ready_to_generate: bool,
}

impl PrintPreview {
    /// The first few pages, shown individually
    pub fn listed_pages(&self) -> &[PageEntry] {
        let entries = self.sequence.entries();
        &entries[..entries.len().min(PREVIEW_LISTED_PAGES)]
    }
}

/// Generate a preview of a print job.
///
/// Uses the same placement math as export; sides without an image are
/// marked rather than treated as errors.
pub fn generate_preview(
    front: Option<&ImageAsset>,
    back: Option<&ImageAsset>,
    config: &PrintConfig,
) -> Result<PrintPreview> {
    config.validate()?;

    let (page_width_mm, page_height_mm) = config.paper_size.dimensions_mm();
    let place = |asset: Option<&ImageAsset>| {
        asset
            .map(|asset| {
                compute_placement(
                    asset.width_px(),
                    asset.height_px(),
                    page_width_mm,
                    page_height_mm,
                    &config.margins,
                )
            })
            .transpose()
    };
    let front_placement = place(front)?;
    let back_placement = place(back)?;

    let sequence = build_page_sequence(config.copies, front_placement, back_placement)?;
    let total_pages = sequence.len();

    Ok(PrintPreview {
        paper_size: config.paper_size,
        copies: config.copies,
        total_pages,
        fit_to_printable_area: config.fit_to_printable_area,
        margin_box: MarginBox::from(&config.margins),
        front_placement,
        back_placement,
        sequence,
        remaining_pages: total_pages.saturating_sub(PREVIEW_LISTED_PAGES),
        ready_to_generate: front.is_some() && back.is_some(),
    })
}
