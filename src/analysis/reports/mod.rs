//! Report formatting and output generation
//!
//! Provides formatting for analysis results via the [`ReportFormatter`] facade.
//! Supports Console and JSON output formats.

pub mod utils;

use crate::errors::AppResult;
use crate::types::{FamilySummary, LetterCount};
use serde_json::json;
use std::str::FromStr;

/// Output format options for analysis reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Console,
    Json,
}

impl FromStr for OutputFormat {
    type Err = std::convert::Infallible;

    /// Unrecognised strings fall back to `OutputFormat::Console`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.to_lowercase().as_str() {
            "json" => OutputFormat::Json,
            _ => OutputFormat::Console,
        })
    }
}

/// Facade for all report formatting operations
pub struct ReportFormatter;

impl ReportFormatter {
    /// Format a generated number sequence
    pub fn format_numbers(
        title: &str,
        values: &[i32],
        format: &OutputFormat,
    ) -> AppResult<String> {
        match format {
            OutputFormat::Json => utils::export_json(&json!({
                "title": title,
                "count": values.len(),
                "values": values,
            })),
            OutputFormat::Console => {
                let mut output = String::new();
                output.push_str(&format!("=== {} ===\n", title));
                output.push_str(&format!("Count: {}\n", utils::format_number(values.len())));
                if !values.is_empty() {
                    let rendered: Vec<String> =
                        values.iter().map(|v| utils::format_number(*v)).collect();
                    output.push_str(&format!("Values: {}\n", rendered.join(" ")));
                }
                Ok(output)
            }
        }
    }

    /// Format per-family statistics as a table or JSON array
    pub fn format_family_statistics(
        summaries: &[FamilySummary],
        format: &OutputFormat,
    ) -> AppResult<String> {
        match format {
            OutputFormat::Json => utils::export_json(&summaries),
            OutputFormat::Console => {
                let total_members: usize = summaries.iter().map(|s| s.member_count).sum();

                let mut output = String::new();
                output.push_str("=== Family Statistics ===\n");
                output.push_str(&format!(
                    "Families: {}\n",
                    utils::format_number(summaries.len())
                ));
                output.push_str(&format!(
                    "Total members: {}\n",
                    utils::format_number(total_members)
                ));

                if summaries.is_empty() {
                    return Ok(output);
                }

                output.push('\n');
                output.push_str(&format!(
                    "{:<12} {:>10} {:>14}\n",
                    "Family ID", "Members", "Average Age"
                ));
                output.push_str(&format!("{}\n", "-".repeat(38)));
                for summary in summaries {
                    output.push_str(&format!(
                        "{:<12} {:>10} {:>14}\n",
                        summary.family_id,
                        utils::format_number(summary.member_count),
                        summary.average_age.round_dp(2).normalize().to_string()
                    ));
                }
                Ok(output)
            }
        }
    }

    /// Format letter counts as a table or JSON array
    pub fn format_letter_frequency(
        counts: &[LetterCount],
        format: &OutputFormat,
    ) -> AppResult<String> {
        match format {
            OutputFormat::Json => utils::export_json(&counts),
            OutputFormat::Console => {
                let total: usize = counts.iter().map(|c| c.count).sum();

                let mut output = String::new();
                output.push_str("=== Letter Frequency ===\n");
                output.push_str(&format!(
                    "Distinct letters: {}\n",
                    utils::format_number(counts.len())
                ));
                output.push_str(&format!("Total letters: {}\n", utils::format_number(total)));

                if counts.is_empty() {
                    return Ok(output);
                }

                output.push('\n');
                output.push_str(&format!("{:<8} {:>10}\n", "Letter", "Count"));
                output.push_str(&format!("{}\n", "-".repeat(19)));
                for entry in counts {
                    output.push_str(&format!(
                        "{:<8} {:>10}\n",
                        entry.letter,
                        utils::format_number(entry.count)
                    ));
                }
                Ok(output)
            }
        }
    }
}
