//! Simplify command: rewrite text for a target proficiency level.

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, info, instrument};

use easyread_core::readability::{self, ReadabilityMetrics};
use easyread_core::{Article, Config, ProficiencyLevel, Simplifier};

use super::analyze::print_metrics;
use super::{read_input, source_name};

/// Arguments for the `simplify` subcommand.
#[derive(Args, Debug)]
pub struct SimplifyArgs {
    /// File to simplify (reads standard input when omitted or `-`).
    pub file: Option<Utf8PathBuf>,

    /// Target level (defaults to the configured level).
    #[arg(short, long, value_enum)]
    pub level: Option<ProficiencyLevel>,

    /// Write the simplified text to FILE instead of printing it.
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<Utf8PathBuf>,

    /// Do not show a progress bar.
    #[arg(long)]
    pub no_progress: bool,
}

#[derive(Serialize)]
struct SimplifyReport<'a> {
    source: &'a str,
    cefr: &'static str,
    #[serde(flatten)]
    article: &'a Article,
    original_metrics: ReadabilityMetrics,
    simplified_metrics: ReadabilityMetrics,
}

/// Simplify a file or standard input for a beginner or elementary reader.
#[instrument(name = "cmd_simplify", skip_all, fields(file = ?args.file))]
pub fn cmd_simplify(
    args: SimplifyArgs,
    global_json: bool,
    quiet: bool,
    config: &Config,
) -> anyhow::Result<()> {
    let level = args.level.unwrap_or(config.level);
    debug!(file = ?args.file, %level, "executing simplify command");

    let content = read_input(args.file.as_deref(), config.input_limit())?;
    let source = source_name(args.file.as_deref());

    let mut simplifier = Simplifier::with_lexicon(level, config.vocabulary(level));
    let bar = if global_json || quiet || args.no_progress {
        ProgressBar::hidden()
    } else {
        progress_bar()?
    };
    let sink = bar.clone();
    simplifier.set_progress(move |done: usize, total: usize| {
        sink.set_length(total as u64);
        sink.set_position(done as u64);
    });

    let article = simplifier.run(&content);
    bar.finish_and_clear();

    let original_metrics = readability::analyze(&article.original);
    let simplified_metrics = readability::analyze(&article.simplified);
    info!(
        %level,
        before = original_metrics.flesch_score,
        after = simplified_metrics.flesch_score,
        "text simplified"
    );

    if let Some(ref output) = args.output {
        std::fs::write(output.as_std_path(), format!("{}\n", article.simplified))
            .with_context(|| format!("failed to write {output}"))?;
    }

    if global_json {
        let report = SimplifyReport {
            source,
            cefr: level.cefr_label(),
            article: &article,
            original_metrics,
            simplified_metrics,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{}", "Original".bold().underline());
    print_metrics(&original_metrics);
    println!();
    println!(
        "{}",
        format!("Simplified ({})", level.cefr_label()).bold().underline()
    );
    print_metrics(&simplified_metrics);
    println!();

    match args.output {
        Some(ref output) => println!("{} {}", "Wrote".green(), output),
        None => println!("{}", article.simplified),
    }

    Ok(())
}

fn progress_bar() -> anyhow::Result<ProgressBar> {
    let style = ProgressStyle::with_template("  processing... {pos}/{len} {wide_bar}")
        .context("invalid progress bar template")?;
    Ok(ProgressBar::new(0).with_style(style))
}
