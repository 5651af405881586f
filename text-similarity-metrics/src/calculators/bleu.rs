use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::json;
use text_similarity_core::{BleuConfig, MetricCalculator, Result};

use super::{to_decimal, MetricInput, MetricOutput};
use crate::ngram::{tokenize, NgramCounts};
use crate::timing::Stopwatch;

/// BLEU score of one candidate against one reference, with the
/// intermediate values it was built from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BleuResult {
    #[serde(rename = "BLEU")]
    pub score: f64,
    /// Modified precision for each order `1..=max_n`.
    pub precisions: Vec<f64>,
    pub brevity_penalty: f64,
    pub candidate_length: usize,
    pub reference_length: usize,
    pub elapsed_time_sec: f64,
}

#[derive(Debug, Clone)]
pub struct BleuCalculator {
    config: BleuConfig,
}

impl BleuCalculator {
    /// Fails with `InvalidConfiguration` when `max_n` is zero.
    pub fn new(max_n: usize) -> Result<Self> {
        Ok(Self {
            config: BleuConfig::new(max_n)?,
        })
    }

    pub fn from_config(config: BleuConfig) -> Result<Self> {
        Self::new(config.max_n)
    }

    pub fn max_n(&self) -> usize {
        self.config.max_n
    }

    /// Calculate BLEU without smoothing: any zero precision makes the
    /// score zero.
    pub fn score(&self, candidate: &str, reference: &str) -> BleuResult {
        let watch = Stopwatch::start();

        let cand_tokens = tokenize(candidate);
        let ref_tokens = tokenize(reference);

        let precisions: Vec<f64> = (1..=self.config.max_n)
            .map(|n| modified_precision(&cand_tokens, &ref_tokens, n))
            .collect();

        let geo_mean = geometric_mean(&precisions);
        let bp = brevity_penalty(cand_tokens.len(), ref_tokens.len());
        let score = bp * geo_mean;

        tracing::debug!(
            candidate_length = cand_tokens.len(),
            reference_length = ref_tokens.len(),
            brevity_penalty = bp,
            score,
            "computed BLEU"
        );

        BleuResult {
            score,
            precisions,
            brevity_penalty: bp,
            candidate_length: cand_tokens.len(),
            reference_length: ref_tokens.len(),
            elapsed_time_sec: watch.elapsed_secs(),
        }
    }
}

impl Default for BleuCalculator {
    fn default() -> Self {
        Self {
            config: BleuConfig::default(),
        }
    }
}

/// Clipped n-gram precision of order `n`.
///
/// The denominator is floored at one, so a candidate shorter than `n`
/// tokens gets precision 0 instead of an error.
pub fn modified_precision(candidate: &[&str], reference: &[&str], n: usize) -> f64 {
    let cand_counts = NgramCounts::from_sequence(candidate, n);
    let ref_counts = NgramCounts::from_sequence(reference, n);

    let overlap = cand_counts.overlap(&ref_counts);
    overlap as f64 / cand_counts.total().max(1) as f64
}

/// `exp(mean(ln p))`, or exactly 0.0 when any precision is zero.
pub fn geometric_mean(precisions: &[f64]) -> f64 {
    if precisions.is_empty() || precisions.iter().any(|p| *p <= 0.0) {
        return 0.0;
    }

    let log_sum: f64 = precisions.iter().map(|p| p.ln()).sum();
    (log_sum / precisions.len() as f64).exp()
}

/// Penalty for candidates no longer than the reference.
pub fn brevity_penalty(candidate_len: usize, reference_len: usize) -> f64 {
    if candidate_len > reference_len {
        1.0
    } else if candidate_len == 0 {
        0.0
    } else {
        (1.0 - reference_len as f64 / candidate_len as f64).exp()
    }
}

/// Score `candidate` against `reference` with n-gram orders `1..=max_n`.
pub fn score_bleu(candidate: &str, reference: &str, max_n: usize) -> Result<BleuResult> {
    Ok(BleuCalculator::new(max_n)?.score(candidate, reference))
}

#[async_trait]
impl MetricCalculator for BleuCalculator {
    type Input = MetricInput;
    type Output = MetricOutput;

    async fn calculate(&self, input: Self::Input) -> Result<Self::Output> {
        let Some(reference) = input.reference else {
            return Ok(MetricOutput {
                score: Decimal::ZERO,
                metadata: json!({
                    "metric": "bleu",
                    "max_n": self.config.max_n,
                }),
            });
        };

        let result = self.score(&input.candidate, &reference);

        Ok(MetricOutput {
            score: to_decimal(result.score),
            metadata: json!({
                "metric": "bleu",
                "max_n": self.config.max_n,
                "precisions": result.precisions,
                "brevity_penalty": result.brevity_penalty,
                "candidate_length": result.candidate_length,
                "reference_length": result.reference_length,
                "elapsed_time_sec": result.elapsed_time_sec,
            }),
        })
    }
}
