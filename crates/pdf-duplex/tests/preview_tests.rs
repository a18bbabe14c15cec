use pdf_duplex::*;
use std::io::Cursor;

fn asset(width: u32, height: u32) -> ImageAsset {
    let img = image::RgbImage::new(width, height);
    let mut bytes = Vec::new();
    image::DynamicImage::ImageRgb8(img)
        .write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
        .unwrap();
    ImageAsset::ingest(bytes, "image/png").unwrap().unwrap()
}

#[test]
fn test_preview_without_images() {
    let preview = generate_preview(None, None, &PrintConfig::default()).unwrap();

    assert_eq!(preview.total_pages, 2);
    assert!(!preview.ready_to_generate);
    assert_eq!(preview.front_placement, None);
    assert_eq!(preview.back_placement, None);
    assert!(preview.sequence.iter().all(|e| e.placement.is_none()));
}

#[test]
fn test_preview_with_front_only() {
    let front = asset(800, 600);
    let preview = generate_preview(Some(&front), None, &PrintConfig::default()).unwrap();

    assert!(!preview.ready_to_generate);
    let placement = preview.front_placement.unwrap();
    assert!((placement.y - 77.25).abs() < 0.01);
    assert_eq!(preview.sequence.entries()[0].placement, Some(placement));
    assert_eq!(preview.sequence.entries()[1].placement, None);
}

#[test]
fn test_preview_lists_first_six_pages() {
    let front = asset(10, 10);
    let back = asset(10, 20);
    let config = PrintConfig::default().apply_copies_change(5);
    let preview = generate_preview(Some(&front), Some(&back), &config).unwrap();

    assert!(preview.ready_to_generate);
    assert_eq!(preview.total_pages, 10);
    assert_eq!(preview.listed_pages().len(), 6);
    assert_eq!(preview.remaining_pages, 4);
    assert_eq!(preview.listed_pages()[5].page_index, 6);
    assert_eq!(preview.listed_pages()[5].side, Side::Back);
}

#[test]
fn test_preview_short_job_has_no_remaining_pages() {
    let config = PrintConfig::default().apply_copies_change(2);
    let preview = generate_preview(None, None, &config).unwrap();
    assert_eq!(preview.listed_pages().len(), 4);
    assert_eq!(preview.remaining_pages, 0);
}

#[test]
fn test_preview_margin_box() {
    let config = PrintConfig::default()
        .apply_margin_edit(MarginSide::Top, 25.0)
        .apply_margin_edit(MarginSide::Right, 50.0)
        .apply_margin_edit(MarginSide::Bottom, 0.0);
    let preview = generate_preview(None, None, &config).unwrap();

    let margin_box = preview.margin_box;
    assert!((margin_box.top_pct - 50.0).abs() < 0.001);
    assert!((margin_box.right_pct - 100.0).abs() < 0.001);
    assert!(margin_box.bottom_pct.abs() < 0.001);
    assert!((margin_box.left_pct - 20.0).abs() < 0.001);
}

#[test]
fn test_preview_matches_export_geometry() {
    let front = asset(640, 480);
    let config = PrintConfig::default()
        .apply_paper_size_change(PaperSize::A3)
        .apply_margin_edit(MarginSide::Left, 40.0);
    let preview = generate_preview(Some(&front), None, &config).unwrap();

    let expected = compute_placement(640, 480, 297.0, 420.0, &config.margins).unwrap();
    assert_eq!(preview.front_placement, Some(expected));
}
