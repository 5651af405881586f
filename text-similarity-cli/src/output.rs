//! Output formatting for CLI

use anyhow::Result;
use clap::ValueEnum;
use colored::Colorize;
use comfy_table::{modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, Cell, Color, Table};
use serde::Serialize;

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    /// Table format (default)
    #[default]
    Table,
    /// JSON format
    Json,
    /// YAML format
    Yaml,
    /// Compact format (single line)
    Compact,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Table => write!(f, "table"),
            Self::Json => write!(f, "json"),
            Self::Yaml => write!(f, "yaml"),
            Self::Compact => write!(f, "compact"),
        }
    }
}

/// Output writer that handles different formats
pub struct OutputWriter {
    format: OutputFormat,
}

impl OutputWriter {
    /// Create a new output writer
    pub fn new(format: OutputFormat, no_color: bool) -> Self {
        if no_color {
            colored::control::set_override(false);
        }
        Self { format }
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Write a single item
    pub fn write<T: Serialize + TableDisplay>(&self, item: &T) -> Result<()> {
        match self.format {
            OutputFormat::Table => {
                println!("{}", item.to_table());
            }
            OutputFormat::Json => {
                let json = serde_json::to_string_pretty(item)?;
                println!("{}", json);
            }
            OutputFormat::Yaml => {
                let yaml = serde_yaml::to_string(item)?;
                print!("{}", yaml);
            }
            OutputFormat::Compact => {
                println!("{}", item.to_compact());
            }
        }
        Ok(())
    }

    /// Write an info message
    pub fn info(&self, message: &str) {
        if self.format == OutputFormat::Table {
            println!("{} {}", "ℹ".blue(), message);
        } else {
            println!("{}", message);
        }
    }
}

/// Trait for rendering score records as a table or a single line
pub trait TableDisplay {
    /// Rows of (metric, value) cells
    fn to_rows(&self) -> Vec<Vec<Cell>>;

    /// Column headers for the detail table
    fn headers(&self) -> Vec<&'static str> {
        vec!["Metric", "Value"]
    }

    /// Single-line summary
    fn to_compact(&self) -> String;

    /// Detail table
    fn to_table(&self) -> Table {
        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        table.apply_modifier(UTF8_ROUND_CORNERS);

        let header_cells: Vec<Cell> = self
            .headers()
            .into_iter()
            .map(|h| Cell::new(h).fg(Color::Cyan))
            .collect();
        table.set_header(header_cells);

        for row in self.to_rows() {
            table.add_row(row);
        }
        table
    }
}

/// Format a score for display
pub fn format_score(score: f64) -> String {
    format!("{:.4}", score)
}

/// Score cell colored by band
pub fn score_cell(score: f64) -> Cell {
    let color = if score >= 0.75 {
        Color::Green
    } else if score >= 0.25 {
        Color::Yellow
    } else {
        Color::Red
    };
    Cell::new(format_score(score)).fg(color)
}

/// Format an elapsed time given in seconds
pub fn format_elapsed(secs: f64) -> String {
    let micros = secs * 1_000_000.0;
    if micros < 1000.0 {
        format!("{:.1} µs", micros)
    } else if micros < 1_000_000.0 {
        format!("{:.2} ms", micros / 1000.0)
    } else {
        format!("{:.2} s", secs)
    }
}

/// Print a key-value pair in detail format
pub fn print_field(key: &str, value: &str) {
    println!("  {}: {}", key.cyan(), value);
}

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", title.bold().underline());
}

/// Print an error to stderr
pub fn print_error(message: &str) {
    eprintln!("{} {}", "✗".red(), message);
}
