//! Target proficiency levels.

use serde::{Deserialize, Serialize};

/// Reader proficiency a simplification run targets.
///
/// Chosen once per run. The level picks the vocabulary table, the sentence
/// word limit, and whether parenthetical asides are removed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum ProficiencyLevel {
    /// CEFR A1. Shortest sentences, parentheticals removed.
    #[default]
    #[serde(alias = "a1")]
    #[cfg_attr(feature = "clap", value(alias = "a1"))]
    Beginner,
    /// CEFR A2. Longer sentences allowed, parentheticals kept.
    #[serde(alias = "a2")]
    #[cfg_attr(feature = "clap", value(alias = "a2"))]
    Elementary,
}

impl ProficiencyLevel {
    /// Returns the level as a lowercase identifier.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Elementary => "elementary",
        }
    }

    /// Returns the CEFR label for this level.
    pub const fn cefr_label(&self) -> &'static str {
        match self {
            Self::Beginner => "A1",
            Self::Elementary => "A2",
        }
    }

    /// Maximum words per sentence before the rewriter tries to split it.
    pub const fn sentence_word_limit(&self) -> usize {
        match self {
            Self::Beginner => 10,
            Self::Elementary => 15,
        }
    }

    /// Whether `( ... )` asides are removed at this level.
    pub const fn strips_parentheticals(&self) -> bool {
        matches!(self, Self::Beginner)
    }
}

impl std::fmt::Display for ProficiencyLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
