//! Sentence-level rewriting.
//!
//! Each sentence passes through four stages in a fixed order:
//!
//! 1. [`strip_parens`](SentenceRewriter::strip_parens) drops `( ... )` asides
//!    (beginner only).
//! 2. [`swap_words`](SentenceRewriter::swap_words) replaces hard words.
//! 3. [`fix_passive`](SentenceRewriter::fix_passive) is a placeholder for
//!    passive-to-active conversion and currently returns its input.
//! 4. [`try_split`](SentenceRewriter::try_split) breaks long sentences at
//!    conjunctions.

use std::sync::LazyLock;

use regex::Regex;

use crate::level::ProficiencyLevel;
use crate::vocabulary::{Lexicon, Vocabulary};

/// Regex for a parenthetical aside. Stops at the first `)`, so nested
/// parentheses leave a stray tail behind.
static PARENTHETICAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\([^)]*\)").expect("valid regex"));

/// Conjunctions a long sentence may be split after.
const SPLIT_CONJUNCTIONS: &[&str] = &["and", "but", "because"];

/// Rewrites single sentences for a target level.
///
/// Borrows its lexicon; the lexicon must outlive the rewriter.
#[derive(Debug)]
pub struct SentenceRewriter<'a, L: ?Sized = Vocabulary> {
    level: ProficiencyLevel,
    lexicon: &'a L,
}

impl<L: ?Sized> Clone for SentenceRewriter<'_, L> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<L: ?Sized> Copy for SentenceRewriter<'_, L> {}

impl<'a, L: Lexicon + ?Sized> SentenceRewriter<'a, L> {
    /// Create a rewriter for `level` backed by `lexicon`.
    pub const fn new(level: ProficiencyLevel, lexicon: &'a L) -> Self {
        Self { level, lexicon }
    }

    /// The level this rewriter targets.
    pub const fn level(&self) -> ProficiencyLevel {
        self.level
    }

    /// Run every stage over `sentence` and return the resulting chunks.
    #[tracing::instrument(level = "trace", skip_all, fields(level = %self.level))]
    pub fn rewrite(&self, sentence: &str) -> Vec<String> {
        let stripped = self.strip_parens(sentence);
        let swapped = self.swap_words(&stripped);
        let active = self.fix_passive(&swapped);
        let chunks = self.try_split(&active);
        tracing::trace!(chunks = chunks.len(), "sentence rewritten");
        chunks
    }

    /// Remove parenthetical asides when the level calls for it.
    pub fn strip_parens(&self, sentence: &str) -> String {
        if !self.level.strips_parentheticals() {
            return sentence.to_owned();
        }
        PARENTHETICAL.replace_all(sentence, "").into_owned()
    }

    /// Replace hard words with simpler ones.
    ///
    /// Trailing ASCII punctuation is peeled off before the lookup and put
    /// back afterwards; leading punctuation is left attached, so `"utilize`
    /// is not recognised. Whitespace collapses to single spaces.
    pub fn swap_words(&self, sentence: &str) -> String {
        sentence
            .split_whitespace()
            .map(|token| {
                let word = token.trim_end_matches(|c: char| c.is_ascii_punctuation());
                let punctuation = &token[word.len()..];
                let mut swapped = self.lexicon.simpler_word(word).into_owned();
                swapped.push_str(punctuation);
                swapped
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Passive-to-active conversion hook. Returns `sentence` unchanged.
    pub fn fix_passive(&self, sentence: &str) -> String {
        sentence.to_owned()
    }

    /// Split a sentence that exceeds the level's word limit.
    ///
    /// A chunk closes after `and`, `but` or `because` once it holds at
    /// least half the limit; the conjunction stays in the closed chunk.
    /// Words inside a chunk are joined by single spaces. Without a suitable
    /// conjunction the sentence comes back as one oversized chunk.
    pub fn try_split(&self, sentence: &str) -> Vec<String> {
        let limit = self.level.sentence_word_limit();
        let words: Vec<&str> = sentence.split_whitespace().collect();
        if words.len() <= limit {
            return vec![sentence.to_owned()];
        }

        let mut chunks = Vec::new();
        let mut chunk: Vec<&str> = Vec::new();
        for word in words {
            chunk.push(word);

            let lowered = word.to_lowercase();
            if SPLIT_CONJUNCTIONS.contains(&lowered.as_str()) && chunk.len() >= limit / 2 {
                chunks.push(chunk.join(" "));
                chunk.clear();
            }
        }
        if !chunk.is_empty() {
            chunks.push(chunk.join(" "));
        }
        chunks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn beginner() -> Vocabulary {
        Vocabulary::new(ProficiencyLevel::Beginner)
    }

    #[test]
    fn beginner_strips_parentheticals() {
        let vocab = beginner();
        let rewriter = SentenceRewriter::new(ProficiencyLevel::Beginner, &vocab);
        assert_eq!(
            rewriter.strip_parens("The city (founded in 1850) is big (very)."),
            "The city  is big ."
        );
    }

    #[test]
    fn elementary_keeps_parentheticals() {
        let vocab = Vocabulary::new(ProficiencyLevel::Elementary);
        let rewriter = SentenceRewriter::new(ProficiencyLevel::Elementary, &vocab);
        let sentence = "The city (founded in 1850) is big.";
        assert_eq!(rewriter.strip_parens(sentence), sentence);
    }

    #[test]
    fn nested_parentheses_leave_a_tail() {
        let vocab = beginner();
        let rewriter = SentenceRewriter::new(ProficiencyLevel::Beginner, &vocab);
        assert_eq!(rewriter.strip_parens("a (b (c) d) e"), "a  d) e");
    }

    #[test]
    fn swap_words_keeps_trailing_punctuation() {
        let vocab = beginner();
        let rewriter = SentenceRewriter::new(ProficiencyLevel::Beginner, &vocab);
        assert_eq!(
            rewriter.swap_words("However, we must  utilize it!?"),
            "but, we must use it!?"
        );
    }

    #[test]
    fn swap_words_ignores_leading_punctuation() {
        let vocab = beginner();
        let rewriter = SentenceRewriter::new(ProficiencyLevel::Beginner, &vocab);
        assert_eq!(rewriter.swap_words("\"utilize\" it"), "\"utilize\" it");
    }

    #[test]
    fn swap_words_on_blank_input() {
        let vocab = beginner();
        let rewriter = SentenceRewriter::new(ProficiencyLevel::Beginner, &vocab);
        assert_eq!(rewriter.swap_words("   "), "");
    }

    #[test]
    fn fix_passive_is_identity() {
        let vocab = beginner();
        let rewriter = SentenceRewriter::new(ProficiencyLevel::Beginner, &vocab);
        let sentence = "The ball was kicked by John.";
        assert_eq!(rewriter.fix_passive(sentence), sentence);
    }

    #[test]
    fn sentence_at_limit_is_not_split() {
        let vocab = beginner();
        let rewriter = SentenceRewriter::new(ProficiencyLevel::Beginner, &vocab);
        let sentence = "one two three four five and  six seven eight nine";
        assert_eq!(sentence.split_whitespace().count(), 10);
        assert_eq!(rewriter.try_split(sentence), vec![sentence]);
    }

    #[test]
    fn long_sentence_splits_at_conjunction() {
        let vocab = beginner();
        let rewriter = SentenceRewriter::new(ProficiencyLevel::Beginner, &vocab);
        let chunks = rewriter.try_split("A A A A A A and B B B B B B");
        assert_eq!(chunks, vec!["A A A A A A and", "B B B B B B"]);
    }

    #[test]
    fn early_conjunction_does_not_split() {
        let vocab = beginner();
        let rewriter = SentenceRewriter::new(ProficiencyLevel::Beginner, &vocab);
        // "and" at position 2 is below limit / 2.
        let chunks = rewriter.try_split("A and B C D E F G H I J K");
        assert_eq!(chunks.len(), 1);
    }

    #[test]
    fn conjunction_match_is_case_insensitive_but_exact() {
        let vocab = beginner();
        let rewriter = SentenceRewriter::new(ProficiencyLevel::Beginner, &vocab);
        let chunks = rewriter.try_split("a b c d e BECAUSE f g h i j k");
        assert_eq!(chunks.len(), 2);
        let chunks = rewriter.try_split("a b c d e and, f g h i j k");
        assert_eq!(chunks.len(), 1);
    }

    #[test]
    fn elementary_limit_is_fifteen() {
        let vocab = Vocabulary::new(ProficiencyLevel::Elementary);
        let rewriter = SentenceRewriter::new(ProficiencyLevel::Elementary, &vocab);
        let chunks = rewriter.try_split("A A A A A A and B B B B B B");
        assert_eq!(chunks, vec!["A A A A A A and B B B B B B"]);
    }

    #[test]
    fn rewrite_runs_stages_in_order() {
        let vocab = beginner();
        let rewriter = SentenceRewriter::new(ProficiencyLevel::Beginner, &vocab);
        let chunks = rewriter.rewrite(
            "We will commence (at noon) the long walk to the old residence and then we \
             will purchase food because we are hungry.",
        );
        assert_eq!(
            chunks,
            vec![
                "We will start the long walk to the old home and",
                "then we will buy food because",
                "we are hungry.",
            ]
        );
    }

    #[test]
    fn works_with_custom_lexicon() {
        struct Shout;
        impl Lexicon for Shout {
            fn lookup(&self, word: &str) -> Option<&str> {
                (word == "quiet").then_some("LOUD")
            }
        }
        let rewriter = SentenceRewriter::new(ProficiencyLevel::Elementary, &Shout);
        assert_eq!(rewriter.rewrite("be quiet."), vec!["be LOUD."]);
    }
}
