mod asset;
mod config;
pub mod constants;
pub mod encoder;
mod export;
pub mod layout;
mod preview;
mod types;

pub use asset::{ImageAsset, load_image};
pub use config::PrintConfig;
pub use export::{generate_document, generate_pdf, save_pdf};
pub use layout::{PageEntry, PageSequence, PlacementRect, build_page_sequence, compute_placement};
pub use preview::{MarginBox, PrintPreview, generate_preview};
pub use types::*;
