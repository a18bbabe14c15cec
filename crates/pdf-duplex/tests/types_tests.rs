use pdf_duplex::*;

#[test]
fn test_paper_size_dimensions() {
    assert_eq!(PaperSize::A4.dimensions_mm(), (210.0, 297.0));
    assert_eq!(PaperSize::A3.dimensions_mm(), (297.0, 420.0));
}

#[test]
fn test_paper_size_display() {
    assert_eq!(PaperSize::A4.to_string(), "A4");
    assert_eq!(PaperSize::A3.to_string(), "A3");
    assert_eq!(format!("{:<4}|", PaperSize::A3), "A3  |");
}

#[test]
fn test_side_parity() {
    assert_eq!(Side::for_page(1), Side::Front);
    assert_eq!(Side::for_page(2), Side::Back);
    assert_eq!(Side::for_page(99), Side::Front);
    assert_eq!(Side::for_page(100), Side::Back);
}

#[test]
fn test_margins_default() {
    let margins = Margins::default();
    assert_eq!(margins, Margins::uniform(10.0));
    assert_eq!(margins.get(MarginSide::Left), 10.0);
}

#[test]
fn test_margins_with_replaces_one_side() {
    let margins = Margins::uniform(10.0).with(MarginSide::Bottom, 25.0);
    assert_eq!(margins.top_mm, 10.0);
    assert_eq!(margins.right_mm, 10.0);
    assert_eq!(margins.bottom_mm, 25.0);
    assert_eq!(margins.left_mm, 10.0);
}

#[test]
fn test_failure_kind() {
    assert_eq!(
        DuplexError::MissingAsset(Side::Back).failure_kind(),
        FailureKind::MissingInput
    );
    assert_eq!(
        DuplexError::InvalidLayout("no room".to_string()).failure_kind(),
        FailureKind::GenerationFailed
    );
    assert_eq!(
        DuplexError::Encoder("boom".to_string()).failure_kind(),
        FailureKind::GenerationFailed
    );
}
