use anyhow::{Context, Result};
use serde::Serialize;
use std::io::IsTerminal;
use owo_colors::OwoColorize;
use terminal_size::{Width, terminal_size};

use crate::catalog::Metric;
use crate::compare::WinnersReport;
use crate::scoring::RankedCandidate;

const MISSING: &str = "—";

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Format a composite score with one decimal ("55.7", "-8.0")
pub fn format_score(score: f64) -> String {
    // Avoid printing "-0.0" for tiny negatives
    let rounded = (score * 10.0).round() / 10.0;
    if rounded == 0.0 {
        "0.0".to_string()
    } else {
        format!("{:.1}", rounded)
    }
}

/// Display a metric value with its unit: "10%", "20", "-5%", "6 wks".
/// Missing values render as an em-dash.
pub fn format_metric_value(metric: Metric, value: Option<f64>) -> String {
    match value {
        None => MISSING.to_string(),
        Some(v) => match metric {
            Metric::RevenueLift | Metric::CacChange => format!("{}%", v),
            Metric::LeadDelta => format!("{}", v),
            Metric::TimeToFirstLead => format!("{} wks", v),
        },
    }
}

/// Get terminal width, defaulting to None for pipes (unlimited)
fn get_terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize)
}

/// Truncate text to fit available width, accounting for Unicode
fn truncate(text: &str, max_width: usize) -> String {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() <= max_width {
        text.to_string()
    } else if max_width > 3 {
        format!("{}...", chars[..max_width - 3].iter().collect::<String>())
    } else {
        chars[..max_width].iter().collect()
    }
}

/// Format ranked candidates, one per line: index, score, id, badges.
/// The best-overall candidate gets a "best overall" badge, and every
/// metric a candidate wins is listed after it.
pub fn format_ranked_table(
    ranked: &[RankedCandidate],
    best_id: Option<&str>,
    winners: &WinnersReport,
    use_colors: bool,
) -> String {
    if ranked.is_empty() {
        return "No candidates to compare.".to_string();
    }

    let term_width = get_terminal_width();
    let score_width = 8;
    let separator = "  ";

    ranked
        .iter()
        .enumerate()
        .map(|(idx, candidate)| {
            let index_str = format!("{:>2}.", idx + 1);
            let score_padded = format!("{:>width$}", format_score(candidate.score), width = score_width);

            let won = winners.winning_metrics(&candidate.id);
            let won_str = if won.is_empty() {
                String::new()
            } else {
                format!("{}[{}]", separator, won.join(", "))
            };
            let is_best = best_id == Some(candidate.id.as_str());
            let best_str = if is_best { "  best overall" } else { "" };

            let fixed_width = 3 + 1 + score_width + separator.len() + won_str.len() + best_str.len();
            let id = match term_width {
                Some(width) if width > fixed_width + 10 => truncate(&candidate.id, width - fixed_width),
                Some(_) => truncate(&candidate.id, 20),
                None => candidate.id.clone(),
            };

            if use_colors {
                format!(
                    "{} {}{}{}{}{}",
                    index_str.dimmed(),
                    score_padded.bold(),
                    separator,
                    id,
                    best_str.green().bold(),
                    won_str.cyan()
                )
            } else {
                format!("{} {}{}{}{}{}", index_str, score_padded, separator, id, best_str, won_str)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format the per-metric winners report: label, best value, winner ids
pub fn format_winners_table(winners: &WinnersReport, use_colors: bool) -> String {
    if winners.is_empty() {
        return "No metric winners (need at least two candidates with data).".to_string();
    }

    let label_width = winners.iter().map(|w| w.label.len()).max().unwrap_or(0);

    winners
        .iter()
        .map(|winner| {
            let label = format!("{:<width$}", winner.label, width = label_width);
            let value = format!("{:>10}", format_metric_value(winner.metric, Some(winner.best_value)));
            let ids = winner.winner_ids.join(", ");
            if use_colors {
                format!("{}  {}  {}", label.bold(), value, ids.yellow())
            } else {
                format!("{}  {}  {}", label, value, ids)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format ranked candidates as tab-separated values for scripting
/// Columns: id, score (no headers, no colors)
pub fn format_tsv(ranked: &[RankedCandidate]) -> String {
    ranked
        .iter()
        .map(|candidate| format!("{}\t{}", candidate.id, candidate.score))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Pretty-printed JSON for machine consumers
pub fn format_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).context("Failed to serialize output as JSON")
}
