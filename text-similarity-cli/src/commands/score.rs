//! Scoring commands

use anyhow::Result;
use clap::Args;
use comfy_table::Cell;
use text_similarity_core::{BleuConfig, ChrfConfig, ScoringConfig};
use text_similarity_metrics::{
    BleuCalculator, BleuResult, ChrfCalculator, ChrfResult, RougeCalculator, RougeResult,
    SimilarityReport, SimilaritySuite,
};

use crate::context::Context;
use crate::input::PairArgs;
use crate::output::{format_elapsed, format_score, score_cell, TableDisplay};

/// Arguments for the merged report
#[derive(Debug, Args)]
pub struct ScoreArgs {
    #[command(flatten)]
    pub pair: PairArgs,

    /// Highest BLEU n-gram order
    #[arg(long)]
    pub max_n: Option<usize>,

    /// Highest ChrF character n-gram order
    #[arg(long)]
    pub n_max: Option<usize>,

    /// ChrF recall weight
    #[arg(long)]
    pub beta: Option<f64>,
}

#[derive(Debug, Args)]
pub struct BleuArgs {
    #[command(flatten)]
    pub pair: PairArgs,

    /// Highest n-gram order
    #[arg(long)]
    pub max_n: Option<usize>,
}

#[derive(Debug, Args)]
pub struct RougeArgs {
    #[command(flatten)]
    pub pair: PairArgs,
}

#[derive(Debug, Args)]
pub struct ChrfArgs {
    #[command(flatten)]
    pub pair: PairArgs,

    /// Highest character n-gram order
    #[arg(long)]
    pub n_max: Option<usize>,

    /// Recall weight
    #[arg(long)]
    pub beta: Option<f64>,
}

/// Layer command-line overrides over the loaded configuration
fn bleu_config(base: &BleuConfig, max_n: Option<usize>) -> Result<BleuConfig> {
    Ok(BleuConfig::new(max_n.unwrap_or(base.max_n))?)
}

fn chrf_config(base: &ChrfConfig, n_max: Option<usize>, beta: Option<f64>) -> Result<ChrfConfig> {
    Ok(ChrfConfig::new(
        n_max.unwrap_or(base.n_max),
        beta.unwrap_or(base.beta),
    )?)
}

pub fn score(ctx: &Context, args: ScoreArgs) -> Result<()> {
    let config = ScoringConfig {
        bleu: bleu_config(&ctx.scoring.bleu, args.max_n)?,
        chrf: chrf_config(&ctx.scoring.chrf, args.n_max, args.beta)?,
    };
    let suite = SimilaritySuite::from_config(&config)?;

    let pair = args.pair.resolve()?;
    let report = suite.compare(&pair.candidate, &pair.reference);
    tracing::info!(
        bleu = report.bleu.score,
        rouge_l = report.rouge.rouge_l.f1,
        chrf = report.chrf.score,
        "scored pair"
    );

    ctx.output.write(&report)
}

pub fn bleu(ctx: &Context, args: BleuArgs) -> Result<()> {
    let calculator = BleuCalculator::from_config(bleu_config(&ctx.scoring.bleu, args.max_n)?)?;

    let pair = args.pair.resolve()?;
    let result = calculator.score(&pair.candidate, &pair.reference);

    ctx.output.write(&result)
}

pub fn rouge(ctx: &Context, args: RougeArgs) -> Result<()> {
    let pair = args.pair.resolve()?;
    let result = RougeCalculator::default().score(&pair.candidate, &pair.reference);

    ctx.output.write(&result)
}

pub fn chrf(ctx: &Context, args: ChrfArgs) -> Result<()> {
    let calculator =
        ChrfCalculator::from_config(chrf_config(&ctx.scoring.chrf, args.n_max, args.beta)?)?;

    let pair = args.pair.resolve()?;
    let result = calculator.evaluate(&pair.candidate, &pair.reference);

    ctx.output.write(&result)
}

// ===== Table rendering =====

fn bleu_rows(result: &BleuResult) -> Vec<Vec<Cell>> {
    let mut rows = vec![vec![Cell::new("BLEU"), score_cell(result.score)]];
    for (i, precision) in result.precisions.iter().enumerate() {
        rows.push(vec![
            Cell::new(format!("precision@{}", i + 1)),
            Cell::new(format_score(*precision)),
        ]);
    }
    rows.push(vec![
        Cell::new("brevity penalty"),
        Cell::new(format_score(result.brevity_penalty)),
    ]);
    rows.push(vec![
        Cell::new("candidate length"),
        Cell::new(result.candidate_length),
    ]);
    rows.push(vec![
        Cell::new("reference length"),
        Cell::new(result.reference_length),
    ]);
    rows
}

fn rouge_rows(result: &RougeResult) -> Vec<Vec<Cell>> {
    vec![
        vec![Cell::new("ROUGE-1"), score_cell(result.rouge_1)],
        vec![Cell::new("ROUGE-2"), score_cell(result.rouge_2)],
        vec![Cell::new("ROUGE-L f1"), score_cell(result.rouge_l.f1)],
        vec![
            Cell::new("ROUGE-L recall"),
            Cell::new(format_score(result.rouge_l.recall)),
        ],
        vec![
            Cell::new("ROUGE-L precision"),
            Cell::new(format_score(result.rouge_l.precision)),
        ],
    ]
}

fn elapsed_row(secs: f64) -> Vec<Cell> {
    vec![Cell::new("elapsed"), Cell::new(format_elapsed(secs))]
}

impl TableDisplay for BleuResult {
    fn to_rows(&self) -> Vec<Vec<Cell>> {
        let mut rows = bleu_rows(self);
        rows.push(elapsed_row(self.elapsed_time_sec));
        rows
    }

    fn to_compact(&self) -> String {
        format!(
            "BLEU={} BP={} c={} r={}",
            format_score(self.score),
            format_score(self.brevity_penalty),
            self.candidate_length,
            self.reference_length
        )
    }
}

impl TableDisplay for RougeResult {
    fn to_rows(&self) -> Vec<Vec<Cell>> {
        let mut rows = rouge_rows(self);
        rows.push(elapsed_row(self.elapsed_time_sec));
        rows
    }

    fn to_compact(&self) -> String {
        format!(
            "ROUGE-1={} ROUGE-2={} ROUGE-L={}",
            format_score(self.rouge_1),
            format_score(self.rouge_2),
            format_score(self.rouge_l.f1)
        )
    }
}

impl TableDisplay for ChrfResult {
    fn to_rows(&self) -> Vec<Vec<Cell>> {
        vec![
            vec![Cell::new("ChrF"), score_cell(self.score)],
            elapsed_row(self.elapsed_time_sec),
        ]
    }

    fn to_compact(&self) -> String {
        format!("ChrF={}", format_score(self.score))
    }
}

impl TableDisplay for SimilarityReport {
    fn headers(&self) -> Vec<&'static str> {
        vec!["Family", "Metric", "Value"]
    }

    fn to_rows(&self) -> Vec<Vec<Cell>> {
        let families = [
            ("bleu", bleu_rows(&self.bleu)),
            ("rouge", rouge_rows(&self.rouge)),
            ("chrf", vec![vec![Cell::new("ChrF"), score_cell(self.chrf.score)]]),
        ];

        let mut rows = Vec::new();
        for (family, family_rows) in families {
            for (i, row) in family_rows.into_iter().enumerate() {
                let label = if i == 0 { family } else { "" };
                let mut cells = vec![Cell::new(label)];
                cells.extend(row);
                rows.push(cells);
            }
        }

        let mut elapsed = vec![Cell::new("")];
        elapsed.extend(elapsed_row(self.elapsed_time_sec));
        rows.push(elapsed);
        rows
    }

    fn to_compact(&self) -> String {
        format!(
            "{} {} {}",
            self.bleu.to_compact(),
            self.rouge.to_compact(),
            self.chrf.to_compact()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_replace_loaded_values() {
        let base = BleuConfig::default();
        assert_eq!(bleu_config(&base, Some(2)).unwrap().max_n, 2);
        assert_eq!(bleu_config(&base, None).unwrap().max_n, 4);
    }

    #[test]
    fn test_invalid_override_rejected() {
        assert!(bleu_config(&BleuConfig::default(), Some(0)).is_err());
        assert!(chrf_config(&ChrfConfig::default(), None, Some(0.0)).is_err());
    }

    #[test]
    fn test_report_rows_cover_every_family() {
        let report = SimilaritySuite::default().compare("a b c", "a b c");
        let rows = report.to_rows();

        // 1 BLEU + 4 precisions + BP + 2 lengths, 5 ROUGE, 1 ChrF, elapsed
        assert_eq!(rows.len(), 8 + 5 + 1 + 1);
        assert!(rows.iter().all(|row| row.len() == 3));
    }

    #[test]
    fn test_compact_lines() {
        let report = SimilaritySuite::default().compare("a b c", "a b c");
        assert_eq!(
            report.to_compact(),
            "BLEU=0.0000 BP=1.0000 c=3 r=3 ROUGE-1=1.0000 ROUGE-2=1.0000 ROUGE-L=1.0000 ChrF=1.0000"
        );
    }
}
