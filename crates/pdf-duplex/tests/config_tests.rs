use pdf_duplex::*;

#[test]
fn test_default_config() {
    let config = PrintConfig::default();
    assert_eq!(config.paper_size, PaperSize::A4);
    assert_eq!(config.copies, 1);
    assert_eq!(config.margins, Margins::uniform(10.0));
    assert!(!config.fit_to_printable_area);
    assert!(config.validate().is_ok());
}

#[test]
fn test_fit_toggle_on_pins_margins() {
    let config = PrintConfig::default()
        .apply_margin_edit(MarginSide::Top, 42.0)
        .apply_margin_edit(MarginSide::Left, 3.0)
        .apply_fit_toggle(true);

    assert!(config.fit_to_printable_area);
    assert_eq!(config.margins, Margins::uniform(10.0));
}

#[test]
fn test_fit_toggle_off_keeps_current_margins() {
    let custom = PrintConfig::default()
        .apply_margin_edit(MarginSide::Right, 33.0)
        .apply_margin_edit(MarginSide::Bottom, 0.0);

    // Custom margins before the toggle are not restored afterwards
    let toggled = custom.apply_fit_toggle(true).apply_fit_toggle(false);
    assert!(!toggled.fit_to_printable_area);
    assert_eq!(toggled.margins, Margins::uniform(10.0));

    // Turning off without turning on leaves margins exactly as they were
    let off = custom.apply_fit_toggle(false);
    assert_eq!(off.margins, custom.margins);
}

#[test]
fn test_margin_edit_ignored_in_fit_mode() {
    let config = PrintConfig::default().apply_fit_toggle(true);
    let edited = config.apply_margin_edit(MarginSide::Top, 30.0);
    assert_eq!(edited, config);
}

#[test]
fn test_paper_size_change_keeps_other_fields() {
    let config = PrintConfig::default()
        .apply_copies_change(4)
        .apply_margin_edit(MarginSide::Left, 20.0);
    let changed = config.apply_paper_size_change(PaperSize::A3);

    assert_eq!(changed.paper_size, PaperSize::A3);
    assert_eq!(changed.copies, 4);
    assert_eq!(changed.margins, config.margins);
}

#[test]
fn test_validation_rejects_unclamped_values() {
    let mut config = PrintConfig::default();
    config.copies = 0;
    assert!(matches!(config.validate(), Err(DuplexError::InvalidConfig(_))));

    config.copies = 101;
    assert!(matches!(config.validate(), Err(DuplexError::InvalidConfig(_))));

    let mut config = PrintConfig::default();
    config.margins.left_mm = 51.0;
    assert!(matches!(config.validate(), Err(DuplexError::InvalidConfig(_))));

    config.margins.left_mm = f32::INFINITY;
    assert!(matches!(config.validate(), Err(DuplexError::InvalidConfig(_))));
}

#[test]
fn test_total_pages_and_filename() {
    let config = PrintConfig::default()
        .apply_paper_size_change(PaperSize::A3)
        .apply_copies_change(12);
    assert_eq!(config.total_pages(), 24);
    assert_eq!(
        config.output_filename(),
        "papion-double-sided-print-A3-12copies.pdf"
    );
}

#[cfg(feature = "serde")]
#[tokio::test]
async fn test_save_and_load_config() {
    use tempfile::NamedTempFile;

    let config = PrintConfig::default()
        .apply_paper_size_change(PaperSize::A3)
        .apply_copies_change(7)
        .apply_margin_edit(MarginSide::Top, 15.0)
        .apply_margin_edit(MarginSide::Left, 0.0);

    let temp_file = NamedTempFile::new().unwrap();
    let path = temp_file.path();

    config.save(path).await.unwrap();
    let loaded = PrintConfig::load(path).await.unwrap();

    assert_eq!(loaded, config);
}

#[cfg(feature = "serde")]
#[tokio::test]
async fn test_load_clamps_out_of_range_values() {
    use tempfile::NamedTempFile;

    let json = r#"{
        "paper_size": "A4",
        "copies": 500,
        "margins": { "top_mm": 80.0, "right_mm": 10.0, "bottom_mm": -5.0, "left_mm": 10.0 }
    }"#;
    let temp_file = NamedTempFile::new().unwrap();
    std::fs::write(temp_file.path(), json).unwrap();

    let loaded = PrintConfig::load(temp_file.path()).await.unwrap();
    assert_eq!(loaded.copies, 100);
    assert_eq!(loaded.margins.top_mm, 50.0);
    assert_eq!(loaded.margins.bottom_mm, 0.0);
    assert!(!loaded.fit_to_printable_area);
    assert!(loaded.validate().is_ok());
}

#[cfg(feature = "serde")]
#[tokio::test]
async fn test_load_rejects_malformed_file() {
    use tempfile::NamedTempFile;

    let temp_file = NamedTempFile::new().unwrap();
    std::fs::write(temp_file.path(), "{ not json").unwrap();

    let result = PrintConfig::load(temp_file.path()).await;
    assert!(matches!(result, Err(DuplexError::InvalidConfig(_))));
}
