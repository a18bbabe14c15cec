//! Document export
//!
//! This module orchestrates producing the printable document:
//! 1. Check that both images are present
//! 2. Place each side's image once
//! 3. Lay the placements out over the front/back page sequence
//! 4. Drive the encoder page by page

use crate::asset::ImageAsset;
use crate::config::PrintConfig;
use crate::encoder::{PageEncoder, PdfEncoder};
use crate::layout::{build_page_sequence, compute_placement};
use crate::types::*;
use std::path::Path;

/// Produce the double-sided document with the given encoder.
///
/// Fails with `MissingAsset` before touching the encoder if either image is
/// absent. Encoder errors are returned as-is.
pub fn generate_document<E: PageEncoder>(
    front: Option<&ImageAsset>,
    back: Option<&ImageAsset>,
    config: &PrintConfig,
    encoder: &mut E,
) -> Result<Vec<u8>> {
    let front = front.ok_or(DuplexError::MissingAsset(Side::Front))?;
    let back = back.ok_or(DuplexError::MissingAsset(Side::Back))?;

    config.validate()?;

    let (page_width_mm, page_height_mm) = config.paper_size.dimensions_mm();
    let place = |asset: &ImageAsset| {
        compute_placement(
            asset.width_px(),
            asset.height_px(),
            page_width_mm,
            page_height_mm,
            &config.margins,
        )
    };
    let front_placement = place(front)?;
    let back_placement = place(back)?;

    let sequence =
        build_page_sequence(config.copies, Some(front_placement), Some(back_placement))?;

    encoder.new_document(page_width_mm, page_height_mm)?;
    for entry in &sequence {
        if entry.page_index > 1 {
            encoder.add_page()?;
        }
        let (asset, placement) = match entry.side {
            Side::Front => (front, front_placement),
            Side::Back => (back, back_placement),
        };
        encoder.draw_image(asset.bytes(), placement)?;
    }

    let bytes = encoder.serialize()?;
    log::info!(
        "Generated {} pages on {} ({} copies, {} bytes)",
        sequence.len(),
        config.paper_size,
        config.copies,
        bytes.len()
    );
    Ok(bytes)
}

/// Generate the PDF for a print job
pub async fn generate_pdf(
    front: Option<ImageAsset>,
    back: Option<ImageAsset>,
    config: &PrintConfig,
) -> Result<Vec<u8>> {
    let config = config.clone();

    // PDF generation is CPU-bound, spawn blocking
    tokio::task::spawn_blocking(move || {
        let mut encoder = PdfEncoder::new("Double-sided print");
        generate_document(front.as_ref(), back.as_ref(), &config, &mut encoder)
    })
    .await?
}

/// Write an exported document to disk
pub async fn save_pdf(bytes: &[u8], path: impl AsRef<Path>) -> Result<()> {
    tokio::fs::write(path.as_ref(), bytes).await?;
    log::info!("Saved {}", path.as_ref().display());
    Ok(())
}
