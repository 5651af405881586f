use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::{CoreError, Result};

/// Highest BLEU n-gram order used when none is configured.
pub const DEFAULT_BLEU_MAX_N: usize = 4;

/// Highest ChrF character n-gram order used when none is configured.
pub const DEFAULT_CHRF_N_MAX: usize = 6;

/// ChrF recall weight; 2.0 weights recall twice as much as precision.
pub const DEFAULT_CHRF_BETA: f64 = 2.0;

/// Largest accepted n-gram order for BLEU and ChrF.
pub const MAX_NGRAM_ORDER: usize = 256;

// ===== BLEU Configuration =====

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Validate)]
#[serde(default)]
pub struct BleuConfig {
    #[validate(range(min = 1, max = MAX_NGRAM_ORDER))]
    pub max_n: usize,
}

impl Default for BleuConfig {
    fn default() -> Self {
        Self {
            max_n: DEFAULT_BLEU_MAX_N,
        }
    }
}

impl BleuConfig {
    pub fn new(max_n: usize) -> Result<Self> {
        let config = Self { max_n };
        config.validate()?;
        Ok(config)
    }
}

// ===== ChrF Configuration =====

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Validate)]
#[serde(default)]
pub struct ChrfConfig {
    #[validate(range(min = 1, max = MAX_NGRAM_ORDER))]
    pub n_max: usize,
    #[validate(range(exclusive_min = 0.0))]
    pub beta: f64,
}

impl Default for ChrfConfig {
    fn default() -> Self {
        Self {
            n_max: DEFAULT_CHRF_N_MAX,
            beta: DEFAULT_CHRF_BETA,
        }
    }
}

impl ChrfConfig {
    pub fn new(n_max: usize, beta: f64) -> Result<Self> {
        let config = Self { n_max, beta };
        config.check()?;
        Ok(config)
    }

    /// Runs the declarative rules plus the finiteness checks on `beta`,
    /// which a range rule cannot express. `beta²` must stay finite too.
    pub fn check(&self) -> Result<()> {
        if !(self.beta * self.beta).is_finite() {
            return Err(CoreError::invalid_configuration(format!(
                "chrf beta must be finite with a finite square, got {}",
                self.beta
            )));
        }
        self.validate()?;
        Ok(())
    }
}

// ===== Scoring Configuration =====

/// Configuration for the classical scorers.
///
/// ROUGE has no tunable parameters: orders 1 and 2 and the ROUGE-L beta of
/// 1.2 are fixed.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Validate)]
#[serde(default)]
pub struct ScoringConfig {
    #[validate(nested)]
    pub bleu: BleuConfig,
    #[validate(nested)]
    pub chrf: ChrfConfig,
}

impl ScoringConfig {
    /// Validates every section, mapping failures to
    /// [`CoreError::InvalidConfiguration`].
    pub fn check(&self) -> Result<()> {
        self.chrf.check()?;
        self.validate()?;
        Ok(())
    }
}
