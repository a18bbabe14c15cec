//! Layout calculation for duplex printing
//!
//! This module handles the geometry of a print job:
//! - Content placement (aspect-preserving fit inside the margins)
//! - Page sequencing (front/back alternation across copies)

mod placement;
mod sequence;
mod types;

pub use placement::*;
pub use sequence::*;
pub use types::*;
