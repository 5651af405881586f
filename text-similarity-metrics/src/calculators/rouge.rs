use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::json;
use text_similarity_core::{CoreError, MetricCalculator, Result};

use super::{f_beta, ratio, to_decimal, MetricInput, MetricOutput};
use crate::ngram::{tokenize, NgramCounts};
use crate::timing::Stopwatch;

/// Recall weight of the ROUGE-L F-measure. Not configurable.
pub const ROUGE_L_BETA: f64 = 1.2;

/// Which ROUGE value a calculator reports as its headline score.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RougeVariant {
    RougeN { n: usize },
    RougeL,
}

/// LCS-based recall, precision and F-measure.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct LcsScore {
    pub recall: f64,
    pub precision: f64,
    pub f1: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RougeResult {
    #[serde(rename = "ROUGE-1")]
    pub rouge_1: f64,
    #[serde(rename = "ROUGE-2")]
    pub rouge_2: f64,
    #[serde(rename = "ROUGE-L")]
    pub rouge_l: LcsScore,
    pub elapsed_time_sec: f64,
}

#[derive(Debug, Clone)]
pub struct RougeCalculator {
    pub variant: RougeVariant,
}

impl RougeCalculator {
    /// Fails with `InvalidConfiguration` for `RougeN { n: 0 }`.
    pub fn new(variant: RougeVariant) -> Result<Self> {
        if let RougeVariant::RougeN { n: 0 } = variant {
            return Err(CoreError::invalid_configuration(
                "rouge n-gram order must be at least 1",
            ));
        }
        Ok(Self { variant })
    }

    pub fn rouge_1() -> Self {
        Self {
            variant: RougeVariant::RougeN { n: 1 },
        }
    }

    pub fn rouge_2() -> Self {
        Self {
            variant: RougeVariant::RougeN { n: 2 },
        }
    }

    pub fn rouge_l() -> Self {
        Self {
            variant: RougeVariant::RougeL,
        }
    }

    /// Calculate ROUGE-1, ROUGE-2 and ROUGE-L.
    pub fn score(&self, candidate: &str, reference: &str) -> RougeResult {
        let watch = Stopwatch::start();

        let cand_tokens = tokenize(candidate);
        let ref_tokens = tokenize(reference);

        let rouge_1 = rouge_n(&cand_tokens, &ref_tokens, 1);
        let rouge_2 = rouge_n(&cand_tokens, &ref_tokens, 2);
        let rouge_l = rouge_l(&cand_tokens, &ref_tokens);

        tracing::debug!(
            candidate_length = cand_tokens.len(),
            reference_length = ref_tokens.len(),
            rouge_1,
            rouge_2,
            rouge_l_f1 = rouge_l.f1,
            "computed ROUGE"
        );

        RougeResult {
            rouge_1,
            rouge_2,
            rouge_l,
            elapsed_time_sec: watch.elapsed_secs(),
        }
    }
}

impl Default for RougeCalculator {
    fn default() -> Self {
        Self::rouge_l()
    }
}

/// Recall-oriented n-gram overlap; the reference total is floored at one.
pub fn rouge_n(candidate: &[&str], reference: &[&str], n: usize) -> f64 {
    let cand_counts = NgramCounts::from_sequence(candidate, n);
    let ref_counts = NgramCounts::from_sequence(reference, n);

    let overlap = cand_counts.overlap(&ref_counts);
    overlap as f64 / ref_counts.total().max(1) as f64
}

/// Length of the longest common subsequence of two sequences.
///
/// Fills the full `(m + 1) x (n + 1)` table, so time and memory grow with
/// the product of the lengths.
pub fn lcs_length<T: PartialEq>(first: &[T], second: &[T]) -> usize {
    let m = first.len();
    let n = second.len();

    if m == 0 || n == 0 {
        return 0;
    }

    let mut dp = vec![vec![0usize; n + 1]; m + 1];

    for i in 1..=m {
        for j in 1..=n {
            if first[i - 1] == second[j - 1] {
                dp[i][j] = dp[i - 1][j - 1] + 1;
            } else {
                dp[i][j] = dp[i - 1][j].max(dp[i][j - 1]);
            }
        }
    }

    dp[m][n]
}

/// ROUGE-L over token sequences.
pub fn rouge_l(candidate: &[&str], reference: &[&str]) -> LcsScore {
    let lcs = lcs_length(candidate, reference);

    let recall = ratio(lcs, reference.len());
    let precision = ratio(lcs, candidate.len());

    LcsScore {
        recall,
        precision,
        f1: f_beta(precision, recall, ROUGE_L_BETA),
    }
}

/// Score `candidate` against `reference`.
pub fn score_rouge(candidate: &str, reference: &str) -> RougeResult {
    RougeCalculator::default().score(candidate, reference)
}

#[async_trait]
impl MetricCalculator for RougeCalculator {
    type Input = MetricInput;
    type Output = MetricOutput;

    async fn calculate(&self, input: Self::Input) -> Result<Self::Output> {
        let (score, precision, recall) = match input.reference {
            Some(reference) => match self.variant {
                RougeVariant::RougeN { n } => {
                    let cand_tokens = tokenize(&input.candidate);
                    let ref_tokens = tokenize(&reference);
                    (rouge_n(&cand_tokens, &ref_tokens, n), None, None)
                }
                RougeVariant::RougeL => {
                    let lcs = rouge_l(&tokenize(&input.candidate), &tokenize(&reference));
                    (lcs.f1, Some(lcs.precision), Some(lcs.recall))
                }
            },
            None => (0.0, None, None),
        };

        Ok(MetricOutput {
            score: to_decimal(score),
            metadata: json!({
                "metric": "rouge",
                "variant": self.variant,
                "score": score,
                "precision": precision,
                "recall": recall,
            }),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lcs_with_gaps() {
        let a = ["a", "b", "c", "d", "e"];
        let b = ["a", "c", "e"];
        assert_eq!(lcs_length(&a, &b), 3);
        assert_eq!(lcs_length(&b, &a), 3);
    }

    #[test]
    fn test_lcs_empty() {
        let empty: [&str; 0] = [];
        assert_eq!(lcs_length(&empty, &["a"]), 0);
    }

    #[test]
    fn test_lcs_order_matters() {
        assert_eq!(lcs_length(&["a", "b"], &["b", "a"]), 1);
    }

    #[test]
    fn test_rouge_n_zero_order_rejected() {
        assert!(RougeCalculator::new(RougeVariant::RougeN { n: 0 }).is_err());
        assert!(RougeCalculator::new(RougeVariant::RougeN { n: 3 }).is_ok());
    }
}
