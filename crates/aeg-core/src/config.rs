//! Proof engine configuration
//!
//! Loaded from TOML; keys left out take their defaults.
//!
//! ```toml
//! inner_cut_ratio = 0.8
//! min_cut_radius = 15.0
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{AegError, Result};

pub const DEFAULT_INNER_CUT_RATIO: f64 = 0.8;
pub const DEFAULT_MIN_CUT_RADIUS: f64 = 15.0;

/// Tunables for the double-cut rules
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProofConfig {
    /// Inner cut radii as a fraction of the outer cut's radii
    pub inner_cut_ratio: f64,

    /// Both cuts of a double cut must exceed this radius on both axes
    pub min_cut_radius: f64,
}

impl Default for ProofConfig {
    fn default() -> Self {
        Self {
            inner_cut_ratio: DEFAULT_INNER_CUT_RATIO,
            min_cut_radius: DEFAULT_MIN_CUT_RADIUS,
        }
    }
}

impl ProofConfig {
    /// Parse and validate a TOML document
    ///
    /// # Errors
    /// * `InvalidConfig` - If the document does not parse or a value is out of range
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: ProofConfig = toml::from_str(source).map_err(|e| AegError::InvalidConfig {
            reason: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// # Errors
    /// * `InvalidConfig` - If `inner_cut_ratio` is outside (0, 1) or
    ///   `min_cut_radius` is negative or not finite
    pub fn validate(&self) -> Result<()> {
        if !(self.inner_cut_ratio > 0.0 && self.inner_cut_ratio < 1.0) {
            return Err(AegError::InvalidConfig {
                reason: format!(
                    "inner_cut_ratio must be between 0 and 1 (exclusive), got {}",
                    self.inner_cut_ratio
                ),
            });
        }
        if !self.min_cut_radius.is_finite() || self.min_cut_radius < 0.0 {
            return Err(AegError::InvalidConfig {
                reason: format!(
                    "min_cut_radius must be a non-negative number, got {}",
                    self.min_cut_radius
                ),
            });
        }
        Ok(())
    }
}
