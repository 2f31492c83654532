//! Readability scoring using Flesch Reading-Ease.
//!
//! Formula: `206.835 - 1.015 * (words/sentences) - 84.6 * (syllables/words)`
//!
//! Higher score = easier text. The score is then bucketed into a rough
//! six-step CEFR estimate (1 = A1 … 6 = C2). The buckets are coarse
//! calibrations, good enough to show whether a rewrite moved the needle.

use serde::{Deserialize, Serialize};

use crate::text;

/// CEFR labels indexed by [`ReadabilityMetrics::estimated_level`].
const LEVEL_LABELS: [&str; 7] = ["?", "A1", "A2", "B1", "B2", "C1", "C2"];

/// Result of readability analysis.
///
/// A zero-valued report (`estimated_level == 0`) means no terminated
/// sentence was found.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ReadabilityMetrics {
    /// Number of terminated sentences scored.
    pub sentences: usize,
    /// Number of alphabetic words scored.
    pub words: usize,
    /// Total estimated syllables.
    pub syllables: usize,
    /// Mean words per sentence.
    pub average_words_per_sentence: f64,
    /// Mean syllables per word (0 when there are no words).
    pub average_syllables_per_word: f64,
    /// Flesch Reading-Ease score.
    pub flesch_score: f64,
    /// Estimated CEFR step, 1 through 6, or 0 when undetermined.
    pub estimated_level: u8,
}

impl ReadabilityMetrics {
    /// CEFR label for the estimated level (`"?"` when undetermined).
    pub fn level_label(&self) -> &'static str {
        level_label(self.estimated_level)
    }
}

/// Analyze the readability of `text`.
///
/// Only sentences closed by `.`, `!` or `?` are scored; unterminated
/// trailing text is ignored.
#[tracing::instrument(skip(text), fields(text_len = text.len()))]
pub fn analyze(text: &str) -> ReadabilityMetrics {
    let sentences = text::split_terminated(text);
    if sentences.is_empty() {
        tracing::debug!("no terminated sentences, returning empty metrics");
        return ReadabilityMetrics::default();
    }

    let mut words = 0usize;
    let mut syllables = 0usize;
    for sentence in &sentences {
        for word in text::alphabetic_words(sentence) {
            words += 1;
            syllables += count_syllables(&word);
        }
    }

    let average_words_per_sentence = words as f64 / sentences.len() as f64;
    let average_syllables_per_word = if words > 0 {
        syllables as f64 / words as f64
    } else {
        0.0
    };
    let flesch_score = flesch_reading_ease(average_words_per_sentence, average_syllables_per_word);

    let metrics = ReadabilityMetrics {
        sentences: sentences.len(),
        words,
        syllables,
        average_words_per_sentence,
        average_syllables_per_word,
        flesch_score,
        estimated_level: estimate_level(flesch_score),
    };
    tracing::debug!(
        sentences = metrics.sentences,
        words = metrics.words,
        flesch = metrics.flesch_score,
        level = metrics.estimated_level,
        "readability analyzed"
    );
    metrics
}

/// Flesch Reading-Ease from words-per-sentence and syllables-per-word.
pub fn flesch_reading_ease(words_per_sentence: f64, syllables_per_word: f64) -> f64 {
    1.015f64.mul_add(-words_per_sentence, 84.6f64.mul_add(-syllables_per_word, 206.835))
}

/// Map a Flesch score onto the 1–6 CEFR scale.
///
/// Thresholds are inclusive lower bounds checked from easiest down.
pub fn estimate_level(flesch_score: f64) -> u8 {
    match flesch_score {
        f if f >= 80.0 => 1,
        f if f >= 65.0 => 2,
        f if f >= 50.0 => 3,
        f if f >= 40.0 => 4,
        f if f >= 25.0 => 5,
        _ => 6,
    }
}

/// CEFR label for an estimated level; anything outside 1–6 is `"?"`.
pub fn level_label(level: u8) -> &'static str {
    LEVEL_LABELS
        .get(usize::from(level))
        .copied()
        .unwrap_or(LEVEL_LABELS[0])
}

/// Estimate the syllables in a single word.
///
/// Counts runs of `a e i o u y`, then takes one off for a silent final
/// `e` on words longer than two letters. Never returns less than 1.
pub fn count_syllables(word: &str) -> usize {
    let word = word.to_lowercase();

    let mut count = 0usize;
    let mut last_was_vowel = false;
    for ch in word.chars() {
        let vowel = matches!(ch, 'a' | 'e' | 'i' | 'o' | 'u' | 'y');
        if vowel && !last_was_vowel {
            count += 1;
        }
        last_was_vowel = vowel;
    }

    if word.chars().count() > 2 && word.ends_with('e') {
        count = count.saturating_sub(1);
    }

    count.max(1)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn syllables_never_below_one(word in "[a-zA-Z]{1,20}") {
            prop_assert!(count_syllables(&word) >= 1);
        }

        #[test]
        fn estimated_level_in_range(text in "[a-z .!?]{0,200}") {
            let metrics = analyze(&text);
            prop_assert!(metrics.estimated_level <= 6);
            if metrics.sentences > 0 {
                prop_assert!(metrics.estimated_level >= 1);
            }
        }

        #[test]
        fn level_matches_threshold_table(score in -200.0f64..250.0) {
            let expected = if score >= 80.0 { 1 }
                else if score >= 65.0 { 2 }
                else if score >= 50.0 { 3 }
                else if score >= 40.0 { 4 }
                else if score >= 25.0 { 5 }
                else { 6 };
            prop_assert_eq!(estimate_level(score), expected);
        }
    }
}
