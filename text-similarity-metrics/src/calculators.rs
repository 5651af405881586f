pub mod bleu;
pub mod rouge;
pub mod chrf;

pub use bleu::*;
pub use rouge::*;
pub use chrf::*;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricInput {
    pub candidate: String,
    pub reference: Option<String>,
}

impl MetricInput {
    pub fn new(candidate: impl Into<String>, reference: impl Into<String>) -> Self {
        Self {
            candidate: candidate.into(),
            reference: Some(reference.into()),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricOutput {
    pub score: Decimal,
    pub metadata: serde_json::Value,
}

/// Weighted harmonic mean of precision and recall; `beta > 1` favours
/// recall. Zero unless both inputs are positive.
pub fn f_beta(precision: f64, recall: f64, beta: f64) -> f64 {
    if !(precision > 0.0 && recall > 0.0) {
        return 0.0;
    }

    if beta.abs() > 1.0 {
        // divided through by beta² so a large beta cannot overflow
        let inv_sq = (1.0 / beta).powi(2);
        (1.0 + inv_sq) * precision * recall / (precision + inv_sq * recall)
    } else {
        let beta_sq = beta * beta;
        (1.0 + beta_sq) * precision * recall / (beta_sq * precision + recall)
    }
}

/// Ratio with an explicit zero for an empty denominator.
pub(crate) fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}

pub(crate) fn to_decimal(value: f64) -> Decimal {
    Decimal::try_from(value).unwrap_or(Decimal::ZERO)
}
