//! Vocab command: list the word substitutions in effect.

use clap::Args;
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument};

use easyread_core::{Config, ProficiencyLevel};

/// Arguments for the `vocab` subcommand.
#[derive(Args, Debug)]
pub struct VocabArgs {
    /// Level whose table to list (defaults to the configured level).
    #[arg(short, long, value_enum)]
    pub level: Option<ProficiencyLevel>,

    /// Only look up this word instead of listing the whole table.
    #[arg(long, value_name = "WORD")]
    pub word: Option<String>,
}

#[derive(Serialize)]
struct Substitution<'a> {
    hard: &'a str,
    simple: &'a str,
}

#[derive(Serialize)]
struct VocabReport<'a> {
    level: ProficiencyLevel,
    substitutions: Vec<Substitution<'a>>,
}

/// Print the substitution table for a level.
#[instrument(name = "cmd_vocab", skip_all)]
pub fn cmd_vocab(args: VocabArgs, global_json: bool, config: &Config) -> anyhow::Result<()> {
    let level = args.level.unwrap_or(config.level);
    debug!(%level, word = ?args.word, "executing vocab command");

    let vocabulary = config.vocabulary(level);
    let entries = vocabulary.entries();
    let selected: Vec<Substitution<'_>> = match args.word {
        Some(ref word) => {
            let wanted = word.to_lowercase();
            entries
                .iter()
                .filter(|(hard, _)| *hard == wanted)
                .map(|&(hard, simple)| Substitution { hard, simple })
                .collect()
        }
        None => entries
            .iter()
            .map(|&(hard, simple)| Substitution { hard, simple })
            .collect(),
    };

    if global_json {
        let report = VocabReport {
            level,
            substitutions: selected,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    if let Some(ref word) = args.word
        && selected.is_empty()
    {
        println!("{} {}", word, "has no simpler replacement".dimmed());
        return Ok(());
    }

    let width = selected.iter().map(|s| s.hard.len()).max().unwrap_or(0);
    for substitution in &selected {
        println!(
            "{:width$}  {}  {}",
            substitution.hard,
            "→".dimmed(),
            substitution.simple.green(),
        );
    }

    Ok(())
}
