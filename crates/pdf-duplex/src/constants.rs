//! Shared constants for duplex print preparation
//!
//! Configuration bounds and unit conversion live here so the reducer,
//! the layout engine and the encoder all agree on them.

// =============================================================================
// Unit Conversion
// =============================================================================

/// Points per millimeter (1 inch = 72 points, 1 inch = 25.4mm)
pub const POINTS_PER_MM: f32 = 72.0 / 25.4; // ≈ 2.83465

/// Convert millimeters to points
#[inline]
pub fn mm_to_pt(mm: f32) -> f32 {
    mm * POINTS_PER_MM
}

// =============================================================================
// Configuration Bounds
// =============================================================================

/// Smallest accepted copy count
pub const MIN_COPIES: u32 = 1;

/// Largest accepted copy count
pub const MAX_COPIES: u32 = 100;

/// Smallest accepted margin (mm)
pub const MIN_MARGIN_MM: f32 = 0.0;

/// Largest accepted margin (mm)
pub const MAX_MARGIN_MM: f32 = 50.0;

/// Margin pinned on every side in fit-to-printable-area mode (mm)
pub const FIT_MARGIN_MM: f32 = 10.0;

/// Pages printed per copy (one front, one back)
pub const PAGES_PER_COPY: usize = 2;

// =============================================================================
// Preview & Output
// =============================================================================

/// Number of pages listed individually in a preview
pub const PREVIEW_LISTED_PAGES: usize = 6;

/// Product prefix used when naming exported files
pub const PRODUCT_NAME: &str = "papion";
