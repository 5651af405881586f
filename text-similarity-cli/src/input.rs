//! Candidate and reference text resolution

use anyhow::{bail, Context as _, Result};
use clap::Args;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Marker meaning "read this text from stdin"
pub const STDIN_MARKER: &str = "-";

/// The two texts being compared
#[derive(Debug, Args)]
pub struct PairArgs {
    /// Candidate (hypothesis) text, or "-" to read it from stdin
    #[arg(
        short,
        long,
        conflicts_with = "candidate_file",
        required_unless_present = "candidate_file"
    )]
    pub candidate: Option<String>,

    /// Read the candidate text from a file
    #[arg(long, value_name = "PATH")]
    pub candidate_file: Option<PathBuf>,

    /// Reference text, or "-" to read it from stdin
    #[arg(
        short,
        long,
        conflicts_with = "reference_file",
        required_unless_present = "reference_file"
    )]
    pub reference: Option<String>,

    /// Read the reference text from a file
    #[arg(long, value_name = "PATH")]
    pub reference_file: Option<PathBuf>,
}

/// Resolved candidate/reference pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextPair {
    pub candidate: String,
    pub reference: String,
}

impl PairArgs {
    pub fn resolve(&self) -> Result<TextPair> {
        self.resolve_with(std::io::stdin())
    }

    /// Resolve both texts, taking at most one of them from `stdin`
    pub fn resolve_with(&self, mut stdin: impl Read) -> Result<TextPair> {
        let candidate_from_stdin = self.candidate.as_deref() == Some(STDIN_MARKER);
        let reference_from_stdin = self.reference.as_deref() == Some(STDIN_MARKER);
        if candidate_from_stdin && reference_from_stdin {
            bail!("Only one of --candidate and --reference can be read from stdin");
        }

        let candidate = resolve_one(
            "candidate",
            self.candidate.as_deref(),
            self.candidate_file.as_deref(),
            &mut stdin,
        )?;
        let reference = resolve_one(
            "reference",
            self.reference.as_deref(),
            self.reference_file.as_deref(),
            &mut stdin,
        )?;

        Ok(TextPair {
            candidate,
            reference,
        })
    }
}

fn resolve_one(
    label: &str,
    inline: Option<&str>,
    file: Option<&Path>,
    stdin: &mut impl Read,
) -> Result<String> {
    match (inline, file) {
        (Some(STDIN_MARKER), _) => {
            let mut text = String::new();
            stdin
                .read_to_string(&mut text)
                .with_context(|| format!("Failed to read {} from stdin", label))?;
            Ok(strip_line_ending(text))
        }
        (Some(text), _) => Ok(text.to_string()),
        (None, Some(path)) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("Failed to read {} from {:?}", label, path))?;
            Ok(strip_line_ending(text))
        }
        (None, None) => bail!("No {} text given", label),
    }
}

/// Drop the trailing line terminator a file or pipe usually carries; ChrF
/// would otherwise count it as a character.
fn strip_line_ending(mut text: String) -> String {
    let trimmed_len = text.trim_end_matches(&['\n', '\r'][..]).len();
    text.truncate(trimmed_len);
    text
}
