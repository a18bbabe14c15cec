use crate::constants::*;
use crate::types::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Print job configuration.
///
/// Treated as a value: every edit goes through one of the `apply_*`
/// methods, which leave `self` untouched and return the edited copy.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PrintConfig {
    pub paper_size: PaperSize,
    pub copies: u32,
    pub margins: Margins,

    /// When set, margins are pinned to `FIT_MARGIN_MM` on every side
    #[cfg_attr(feature = "serde", serde(default))]
    pub fit_to_printable_area: bool,
}

impl Default for PrintConfig {
    fn default() -> Self {
        Self {
            paper_size: PaperSize::A4,
            copies: MIN_COPIES,
            margins: Margins::uniform(FIT_MARGIN_MM),
            fit_to_printable_area: false,
        }
    }
}

impl PrintConfig {
    /// Set one margin, rounded to whole millimeters and clamped into [0, 50].
    ///
    /// Ignored while fit-to-printable-area mode pins the margins.
    pub fn apply_margin_edit(&self, side: MarginSide, value_mm: f32) -> Self {
        if self.fit_to_printable_area {
            return self.clone();
        }
        Self {
            margins: self.margins.with(side, clamp_margin(value_mm)),
            ..self.clone()
        }
    }

    /// Turning fit mode on pins all margins to 10 mm. Turning it off keeps
    /// whatever margins are current; custom margins from before the toggle
    /// are not restored.
    pub fn apply_fit_toggle(&self, enabled: bool) -> Self {
        let margins = if enabled {
            Margins::uniform(FIT_MARGIN_MM)
        } else {
            self.margins
        };
        Self {
            fit_to_printable_area: enabled,
            margins,
            ..self.clone()
        }
    }

    pub fn apply_paper_size_change(&self, paper_size: PaperSize) -> Self {
        Self {
            paper_size,
            ..self.clone()
        }
    }

    /// Set the copy count, clamped into [1, 100]
    pub fn apply_copies_change(&self, requested: i64) -> Self {
        let copies = requested.clamp(MIN_COPIES as i64, MAX_COPIES as i64) as u32;
        Self {
            copies,
            ..self.clone()
        }
    }

    /// Run every field back through the reducer so the result satisfies
    /// `validate`. Used for configurations that did not come from edits.
    pub fn normalized(&self) -> Self {
        let base = Self {
            paper_size: self.paper_size,
            fit_to_printable_area: false,
            ..Self::default()
        };
        let with_margins = self
            .margins
            .iter()
            .fold(base, |config, (side, value)| config.apply_margin_edit(side, value));
        with_margins
            .apply_copies_change(self.copies as i64)
            .apply_fit_toggle(self.fit_to_printable_area)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if !(MIN_COPIES..=MAX_COPIES).contains(&self.copies) {
            return Err(DuplexError::InvalidConfig(format!(
                "Copies must be between {} and {}, got {}",
                MIN_COPIES, MAX_COPIES, self.copies
            )));
        }

        for (side, value) in self.margins.iter() {
            if !value.is_finite() || !(MIN_MARGIN_MM..=MAX_MARGIN_MM).contains(&value) {
                return Err(DuplexError::InvalidConfig(format!(
                    "{:?} margin must be between {} and {} mm, got {}",
                    side, MIN_MARGIN_MM, MAX_MARGIN_MM, value
                )));
            }
        }

        Ok(())
    }

    /// Number of physical pages in the exported document
    pub fn total_pages(&self) -> usize {
        self.copies as usize * PAGES_PER_COPY
    }

    /// Suggested file name for the exported document
    pub fn output_filename(&self) -> String {
        format!(
            "{}-double-sided-print-{}-{}copies.pdf",
            PRODUCT_NAME, self.paper_size, self.copies
        )
    }

    /// Load configuration from a JSON file.
    ///
    /// Out-of-range values are clamped rather than rejected.
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let parsed: Self = serde_json::from_slice(&bytes)
            .map_err(|e| DuplexError::InvalidConfig(format!("Failed to parse config: {}", e)))?;
        let config = parsed.normalized();
        if config != parsed {
            log::warn!("Configuration file contained out-of-range values; they were clamped");
        }
        Ok(config)
    }

    /// Save configuration to a JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| DuplexError::InvalidConfig(format!("Failed to serialize config: {}", e)))?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }
}

fn clamp_margin(value_mm: f32) -> f32 {
    if value_mm.is_finite() {
        value_mm.round().clamp(MIN_MARGIN_MM, MAX_MARGIN_MM)
    } else {
        MIN_MARGIN_MM
    }
}
