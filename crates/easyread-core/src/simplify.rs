//! Article simplification pipeline.
//!
//! [`Simplifier::run`] segments an article into sentences, rewrites each
//! one with a [`SentenceRewriter`], and reassembles the chunks into
//! capitalized, punctuated sentences.

use std::fmt;
use std::sync::mpsc;

use serde::{Deserialize, Serialize};

use crate::level::ProficiencyLevel;
use crate::rewrite::SentenceRewriter;
use crate::text;
use crate::vocabulary::{Lexicon, Vocabulary};

/// A progress notification: `completed` of `total` source sentences done.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progress {
    /// Sentences rewritten so far.
    pub completed: usize,
    /// Sentences in the article.
    pub total: usize,
}

/// Receives a notification after each source sentence is rewritten.
///
/// Called inline on the thread running the pipeline. Implemented for
/// closures taking `(completed, total)` and for channel senders, so a
/// caller can drain [`Progress`] values from elsewhere.
pub trait ProgressSink {
    /// Called once per source sentence, in order.
    fn on_sentence(&self, completed: usize, total: usize);
}

impl<F> ProgressSink for F
where
    F: Fn(usize, usize),
{
    fn on_sentence(&self, completed: usize, total: usize) {
        self(completed, total);
    }
}

impl ProgressSink for mpsc::Sender<Progress> {
    fn on_sentence(&self, completed: usize, total: usize) {
        // A dropped receiver just means nobody is listening any more.
        let _ = self.send(Progress { completed, total });
    }
}

/// The outcome of a simplification run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    /// Input text, verbatim.
    pub original: String,
    /// Reassembled, simplified text.
    pub simplified: String,
    /// Level the text was simplified for.
    pub level: ProficiencyLevel,
}

/// Simplifies whole articles for one proficiency level.
///
/// Owns its lexicon; the lexicon is never modified during a run.
pub struct Simplifier<L = Vocabulary> {
    level: ProficiencyLevel,
    lexicon: L,
    progress: Option<Box<dyn ProgressSink + Send + Sync>>,
}

impl Simplifier<Vocabulary> {
    /// Create a simplifier using the built-in vocabulary for `level`.
    pub fn new(level: ProficiencyLevel) -> Self {
        Self::with_lexicon(level, Vocabulary::new(level))
    }
}

impl<L: Lexicon> Simplifier<L> {
    /// Create a simplifier backed by a custom lexicon.
    pub fn with_lexicon(level: ProficiencyLevel, lexicon: L) -> Self {
        Self {
            level,
            lexicon,
            progress: None,
        }
    }

    /// Register a progress sink, replacing any previous one.
    pub fn set_progress<P>(&mut self, sink: P)
    where
        P: ProgressSink + Send + Sync + 'static,
    {
        self.progress = Some(Box::new(sink));
    }

    /// Builder form of [`set_progress`](Self::set_progress).
    #[must_use]
    pub fn with_progress<P>(mut self, sink: P) -> Self
    where
        P: ProgressSink + Send + Sync + 'static,
    {
        self.set_progress(sink);
        self
    }

    /// The target level.
    pub const fn level(&self) -> ProficiencyLevel {
        self.level
    }

    /// The lexicon used for word substitution.
    pub const fn lexicon(&self) -> &L {
        &self.lexicon
    }

    /// A sentence rewriter borrowing this simplifier's lexicon.
    pub const fn rewriter(&self) -> SentenceRewriter<'_, L> {
        SentenceRewriter::new(self.level, &self.lexicon)
    }

    /// Split an article into sentences, keeping any unterminated tail.
    pub fn split_sentences(text: &str) -> Vec<String> {
        text::split_sentences(text)
    }

    /// Simplify `text`.
    ///
    /// Sentence order is preserved. The progress sink, if any, fires after
    /// each source sentence, not after each output chunk.
    #[tracing::instrument(skip(self, text), fields(level = %self.level, text_len = text.len()))]
    pub fn run(&self, text: &str) -> Article {
        let sentences = Self::split_sentences(text);
        let total = sentences.len();
        let rewriter = self.rewriter();

        let mut chunks = Vec::new();
        for (idx, sentence) in sentences.iter().enumerate() {
            chunks.extend(rewriter.rewrite(sentence));
            if let Some(ref sink) = self.progress {
                sink.on_sentence(idx + 1, total);
            }
        }

        tracing::debug!(sentences = total, chunks = chunks.len(), "article rewritten");

        Article {
            original: text.to_owned(),
            simplified: rejoin(chunks.as_slice()),
            level: self.level,
        }
    }
}

impl<L: fmt::Debug> fmt::Debug for Simplifier<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Simplifier")
            .field("level", &self.level)
            .field("lexicon", &self.lexicon)
            .field("progress", &self.progress.is_some())
            .finish()
    }
}

/// Reassemble rewritten chunks into running text.
///
/// Leading spaces, tabs and newlines are trimmed from each chunk, blank
/// chunks are dropped, the first letter is capitalized and a period is
/// added unless the chunk already ends in `.`, `!` or `?`. Chunks are
/// joined by single spaces.
pub fn rejoin<S: AsRef<str>>(chunks: &[S]) -> String {
    chunks
        .iter()
        .filter_map(|chunk| finish_chunk(chunk.as_ref()))
        .collect::<Vec<_>>()
        .join(" ")
}

fn finish_chunk(chunk: &str) -> Option<String> {
    let trimmed = chunk.trim_start_matches([' ', '\t', '\n']);
    let mut chars = trimmed.chars();
    let first = chars.next()?;

    let mut finished: String = first.to_uppercase().collect();
    finished.push_str(chars.as_str());
    if !finished.ends_with(text::is_sentence_terminator) {
        finished.push('.');
    }
    Some(finished)
}
