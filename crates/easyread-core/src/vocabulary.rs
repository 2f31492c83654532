//! Level-specific vocabulary substitution.
//!
//! A [`Lexicon`] answers one question: is there a simpler word for this
//! one? [`Vocabulary`] is the built-in lexicon, a small curated table per
//! [`ProficiencyLevel`]. Larger word lists plug in by implementing
//! [`Lexicon`] and handing the result to
//! [`Simplifier::with_lexicon`](crate::simplify::Simplifier::with_lexicon).

use std::borrow::Cow;
use std::collections::HashMap;

use crate::level::ProficiencyLevel;

/// Substitutions every level applies.
const BEGINNER_SUBSTITUTIONS: &[(&str, &str)] = &[
    ("utilize", "use"),
    ("commence", "start"),
    ("terminate", "end"),
    ("residence", "home"),
    ("purchase", "buy"),
    ("inquire", "ask"),
    ("observe", "see"),
    ("obtain", "get"),
    ("assistance", "help"),
    ("demonstrate", "show"),
    ("approximately", "about"),
    ("sufficient", "enough"),
    ("however", "but"),
    ("therefore", "so"),
    ("additionally", "also"),
    ("attempt", "try"),
    ("require", "need"),
];

/// Extra substitutions layered on top for elementary readers.
const ELEMENTARY_SUBSTITUTIONS: &[(&str, &str)] = &[
    ("facilitate", "help"),
    ("construct", "build"),
    ("complete", "finish"),
    ("numerous", "many"),
    ("previously", "before"),
];

/// A source of simpler replacements for hard words.
///
/// Implementations receive the word as written and are responsible for
/// their own case folding.
pub trait Lexicon {
    /// Returns the simpler replacement for `word`, if one is registered.
    fn lookup(&self, word: &str) -> Option<&str>;

    /// Returns `true` if `word` needs no simplification.
    fn is_simple(&self, word: &str) -> bool {
        self.lookup(word).is_none()
    }

    /// Returns the replacement for `word`, or `word` itself untouched.
    fn simpler_word<'w>(&self, word: &'w str) -> Cow<'w, str> {
        match self.lookup(word) {
            Some(simple) => Cow::Owned(simple.to_owned()),
            None => Cow::Borrowed(word),
        }
    }
}

impl<L: Lexicon + ?Sized> Lexicon for &L {
    fn lookup(&self, word: &str) -> Option<&str> {
        (**self).lookup(word)
    }
}

/// Built-in hard-word → simple-word table for one proficiency level.
///
/// Keys and values are stored lowercase; lookups fold the query to
/// lowercase first. Only exact word forms match, so `utilized` is not
/// rewritten even though `utilize` is.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    level: ProficiencyLevel,
    words: HashMap<String, String>,
}

impl Vocabulary {
    /// Build the table for `level`.
    ///
    /// The elementary table extends the beginner one.
    pub fn new(level: ProficiencyLevel) -> Self {
        let mut words: HashMap<String, String> = BEGINNER_SUBSTITUTIONS
            .iter()
            .map(|&(hard, simple)| (hard.to_owned(), simple.to_owned()))
            .collect();

        if level == ProficiencyLevel::Elementary {
            words.extend(
                ELEMENTARY_SUBSTITUTIONS
                    .iter()
                    .map(|&(hard, simple)| (hard.to_owned(), simple.to_owned())),
            );
        }

        tracing::debug!(level = %level, entries = words.len(), "vocabulary built");
        Self { level, words }
    }

    /// Layer additional substitutions over the level table.
    ///
    /// Later entries replace earlier ones for the same hard word. Blank
    /// keys are ignored.
    #[must_use]
    pub fn with_entries<I, K, V>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        for (hard, simple) in entries {
            let hard = hard.as_ref().trim().to_lowercase();
            if hard.is_empty() {
                continue;
            }
            self.words.insert(hard, simple.as_ref().trim().to_lowercase());
        }
        self
    }

    /// The level this table was built for.
    pub const fn level(&self) -> ProficiencyLevel {
        self.level
    }

    /// Number of registered substitutions.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns `true` if the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// All substitutions, sorted by hard word.
    pub fn entries(&self) -> Vec<(&str, &str)> {
        let mut entries: Vec<_> = self
            .words
            .iter()
            .map(|(hard, simple)| (hard.as_str(), simple.as_str()))
            .collect();
        entries.sort_unstable();
        entries
    }
}

impl Lexicon for Vocabulary {
    fn lookup(&self, word: &str) -> Option<&str> {
        self.words.get(&word.to_lowercase()).map(String::as_str)
    }
}
