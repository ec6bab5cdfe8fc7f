use serde::Deserialize;

use crate::error::{Error, Result};

/// Page-level settings. Every field has a default, so the page may pass a
/// partial JSON object or nothing at all.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct FrontendConfig {
    /// Side of a tile in px.
    pub cell_size: f64,
    /// Gap around each tile in px, on every side.
    pub cell_padding: f64,
    /// Slide animation length in ms.
    pub animation_ms: f64,
    /// Local storage key holding the best score.
    pub high_score_key: String,
    pub score_element: String,
    pub best_element: String,
    pub status_element: String,
    pub reset_button: String,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            cell_size: 80.0,
            cell_padding: 4.0,
            animation_ms: 100.0,
            high_score_key: "2048-high-score".to_string(),
            score_element: "score".to_string(),
            best_element: "best".to_string(),
            status_element: "status".to_string(),
            reset_button: "new-game".to_string(),
        }
    }
}

impl FrontendConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.cell_size.is_finite() && self.cell_size > 0.0) {
            return Err(Error::Config(format!(
                "cell_size must be positive, got {}",
                self.cell_size
            )));
        }

        if !(self.cell_padding.is_finite() && self.cell_padding >= 0.0) {
            return Err(Error::Config(format!(
                "cell_padding must not be negative, got {}",
                self.cell_padding
            )));
        }

        if !(self.animation_ms.is_finite() && self.animation_ms > 0.0) {
            return Err(Error::Config(format!(
                "animation_ms must be positive, got {}",
                self.animation_ms
            )));
        }

        if self.high_score_key.is_empty() {
            return Err(Error::Config("high_score_key is empty".to_string()));
        }

        Ok(())
    }
}
