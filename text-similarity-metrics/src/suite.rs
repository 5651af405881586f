//! Runs the classical scorers over one candidate/reference pair and merges
//! their records into a single report keyed by metric family.

use serde::{Deserialize, Serialize};
use text_similarity_core::{Result, ScoringConfig};

use crate::calculators::{
    BleuCalculator, BleuResult, ChrfCalculator, ChrfResult, RougeCalculator, RougeResult,
};
use crate::timing::Stopwatch;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimilarityReport {
    pub bleu: BleuResult,
    pub rouge: RougeResult,
    pub chrf: ChrfResult,
    /// Wall-clock time for the whole comparison.
    pub elapsed_time_sec: f64,
}

impl SimilarityReport {
    pub fn to_json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }
}

#[derive(Debug, Clone, Default)]
pub struct SimilaritySuite {
    bleu: BleuCalculator,
    rouge: RougeCalculator,
    chrf: ChrfCalculator,
}

impl SimilaritySuite {
    pub fn from_config(config: &ScoringConfig) -> Result<Self> {
        config.check()?;
        Ok(Self {
            bleu: BleuCalculator::from_config(config.bleu.clone())?,
            rouge: RougeCalculator::default(),
            chrf: ChrfCalculator::from_config(config.chrf.clone())?,
        })
    }

    /// Score `candidate` against `reference` with every scorer.
    #[tracing::instrument(
        skip_all,
        fields(candidate_bytes = candidate.len(), reference_bytes = reference.len())
    )]
    pub fn compare(&self, candidate: &str, reference: &str) -> SimilarityReport {
        let watch = Stopwatch::start();

        let bleu = self.bleu.score(candidate, reference);
        let rouge = self.rouge.score(candidate, reference);
        let chrf = self.chrf.evaluate(candidate, reference);

        tracing::debug!(elapsed_ms = watch.elapsed_ms(), "similarity suite complete");

        SimilarityReport {
            bleu,
            rouge,
            chrf,
            elapsed_time_sec: watch.elapsed_secs(),
        }
    }
}
