use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::json;
use text_similarity_core::{ChrfConfig, MetricCalculator, Result};

use super::{f_beta, ratio, to_decimal, MetricInput, MetricOutput};
use crate::ngram::{boundary_marked_chars, NgramCounts};
use crate::timing::Stopwatch;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChrfResult {
    #[serde(rename = "ChrF")]
    pub score: f64,
    pub elapsed_time_sec: f64,
}

/// Character n-gram F-score.
///
/// Grams of every order `1..=n_max` are pooled into one multiset per side
/// rather than scored per order and averaged.
#[derive(Debug, Clone)]
pub struct ChrfCalculator {
    config: ChrfConfig,
}

impl ChrfCalculator {
    pub fn new(n_max: usize, beta: f64) -> Result<Self> {
        Ok(Self {
            config: ChrfConfig::new(n_max, beta)?,
        })
    }

    pub fn from_config(config: ChrfConfig) -> Result<Self> {
        config.check()?;
        Ok(Self { config })
    }

    pub fn score(&self, candidate: &str, reference: &str) -> f64 {
        let cand_chars = boundary_marked_chars(candidate);
        let ref_chars = boundary_marked_chars(reference);

        let cand_counts = NgramCounts::pooled(&cand_chars, self.config.n_max);
        let ref_counts = NgramCounts::pooled(&ref_chars, self.config.n_max);

        let overlap = cand_counts.overlap(&ref_counts);
        let precision = ratio(overlap, cand_counts.total());
        let recall = ratio(overlap, ref_counts.total());
        let score = f_beta(precision, recall, self.config.beta);

        tracing::debug!(
            candidate_grams = cand_counts.total(),
            reference_grams = ref_counts.total(),
            overlap,
            score,
            "computed ChrF"
        );

        score
    }

    /// Score with timing, as reported by the similarity suite.
    pub fn evaluate(&self, candidate: &str, reference: &str) -> ChrfResult {
        let watch = Stopwatch::start();
        let score = self.score(candidate, reference);
        ChrfResult {
            score,
            elapsed_time_sec: watch.elapsed_secs(),
        }
    }
}

impl Default for ChrfCalculator {
    fn default() -> Self {
        Self {
            config: ChrfConfig::default(),
        }
    }
}

/// Score `candidate` against `reference` with char-grams up to `n_max`.
pub fn score_chrf(candidate: &str, reference: &str, n_max: usize, beta: f64) -> Result<f64> {
    Ok(ChrfCalculator::new(n_max, beta)?.score(candidate, reference))
}

#[async_trait]
impl MetricCalculator for ChrfCalculator {
    type Input = MetricInput;
    type Output = MetricOutput;

    async fn calculate(&self, input: Self::Input) -> Result<Self::Output> {
        let score = match input.reference {
            Some(reference) => self.score(&input.candidate, &reference),
            None => 0.0,
        };

        Ok(MetricOutput {
            score: to_decimal(score),
            metadata: json!({
                "metric": "chrf",
                "n_max": self.config.n_max,
                "beta": self.config.beta,
            }),
        })
    }
}
