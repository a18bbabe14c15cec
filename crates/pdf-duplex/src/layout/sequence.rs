//! Page ordering for double-sided printing
//!
//! Each copy contributes two consecutive pages: the front image on the
//! odd page, the back image on the even page that follows it. Printers
//! rely on this parity to line the two sides up, so the order is fixed.

use crate::constants::{MAX_COPIES, MIN_COPIES, PAGES_PER_COPY};
use crate::types::{DuplexError, Result, Side};

use super::{PageEntry, PageSequence, PlacementRect};

/// Build the page sequence for `copies` front/back pairs.
///
/// The same placement is reused for every page of a side. Pass `None`
/// for a side whose image is not available yet.
pub fn build_page_sequence(
    copies: u32,
    front: Option<PlacementRect>,
    back: Option<PlacementRect>,
) -> Result<PageSequence> {
    if !(MIN_COPIES..=MAX_COPIES).contains(&copies) {
        return Err(DuplexError::InvalidConfig(format!(
            "Copies must be between {} and {}, got {}",
            MIN_COPIES, MAX_COPIES, copies
        )));
    }

    let total_pages = copies as usize * PAGES_PER_COPY;
    let entries = (1..=total_pages)
        .map(|page_index| {
            let side = Side::for_page(page_index);
            let placement = match side {
                Side::Front => front,
                Side::Back => back,
            };
            PageEntry {
                page_index,
                side,
                placement,
            }
        })
        .collect();

    Ok(PageSequence::from_entries(entries))
}
