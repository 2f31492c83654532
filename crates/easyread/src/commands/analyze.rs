//! Analyze command: Flesch Reading-Ease and CEFR estimate.

use anyhow::bail;
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument};

use easyread_core::readability::{self, ReadabilityMetrics};

use super::{read_input, source_name};

/// Arguments for the `analyze` subcommand.
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// File to analyze (reads standard input when omitted or `-`).
    pub file: Option<Utf8PathBuf>,

    /// Fail when the estimated level is above this step (1 = A1 … 6 = C2).
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=6))]
    pub max_level: Option<u8>,
}

#[derive(Serialize)]
struct AnalyzeReport<'a> {
    source: &'a str,
    #[serde(flatten)]
    metrics: ReadabilityMetrics,
    level_label: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_level: Option<u8>,
    over_max: bool,
}

/// Score the readability of a file or standard input.
#[instrument(name = "cmd_analyze", skip_all, fields(file = ?args.file))]
pub fn cmd_analyze(
    args: AnalyzeArgs,
    global_json: bool,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = ?args.file, max_level = ?args.max_level, "executing analyze command");

    let content = read_input(args.file.as_deref(), max_input_bytes)?;
    let source = source_name(args.file.as_deref());

    let metrics = readability::analyze(&content);
    let over_max = args
        .max_level
        .is_some_and(|max| metrics.estimated_level > max);

    let report = AnalyzeReport {
        source,
        metrics,
        level_label: metrics.level_label(),
        max_level: args.max_level,
        over_max,
    };

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        if over_max {
            bail!("{source} is above the maximum level");
        }
        return Ok(());
    }

    if metrics.estimated_level == 0 {
        println!(
            "{}: {}",
            source,
            "no complete sentences to score".yellow()
        );
        return Ok(());
    }

    println!("{}", source.bold());
    print_metrics(&metrics);

    if let Some(max) = args.max_level {
        let max_label = readability::level_label(max);
        if over_max {
            bail!(
                "{} reads at {} (max: {}). Shorten sentences or simplify vocabulary.",
                source,
                metrics.level_label(),
                max_label,
            );
        }
        println!(
            "{} {} reads at {} (max: {})",
            "PASS:".green(),
            source,
            metrics.level_label(),
            max_label,
        );
    }

    Ok(())
}

/// Print the human-readable metrics block shared with `simplify`.
pub(crate) fn print_metrics(metrics: &ReadabilityMetrics) {
    println!(
        "  {}       {:.0}",
        "Flesch score:".dimmed(),
        metrics.flesch_score
    );
    println!(
        "  {} {:.0}",
        "Words/sentence:".dimmed(),
        metrics.average_words_per_sentence
    );
    println!(
        "  {}    {}",
        "Estimated level:".dimmed(),
        level_colored(metrics.estimated_level)
    );
}

fn level_colored(level: u8) -> String {
    let label = readability::level_label(level);
    match level {
        1 | 2 => label.green().to_string(),
        3 | 4 => label.yellow().to_string(),
        5 | 6 => label.red().to_string(),
        _ => label.dimmed().to_string(),
    }
}
