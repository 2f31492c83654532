//! Core library for easyread.
//!
//! Scores how hard a passage is to read and rewrites it for beginner or
//! elementary language learners.
//!
//! # Modules
//!
//! - [`readability`] - Syllable counting, Flesch Reading-Ease and CEFR estimate
//! - [`vocabulary`] - Level-specific hard → simple word tables
//! - [`rewrite`] - Per-sentence rewriting stages
//! - [`simplify`] - Whole-article pipeline with progress reporting
//! - [`text`] - Sentence segmentation
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```
//! use easyread_core::{ProficiencyLevel, Simplifier, readability};
//!
//! let text = "We must utilize the tools. However, it is sufficient.";
//! let before = readability::analyze(text);
//!
//! let article = Simplifier::new(ProficiencyLevel::Beginner).run(text);
//! assert_eq!(article.simplified, "We must use the tools. But, it is enough.");
//!
//! let after = readability::analyze(&article.simplified);
//! assert!(after.flesch_score > before.flesch_score);
//! ```
#![deny(unsafe_code)]

pub mod config;
pub mod error;
pub mod level;
pub mod readability;
pub mod rewrite;
pub mod simplify;
pub mod text;
pub mod vocabulary;

pub use config::{Config, ConfigLoader, ConfigSources, LogLevel};
pub use error::{ConfigError, ConfigResult};
pub use level::ProficiencyLevel;
pub use readability::ReadabilityMetrics;
pub use rewrite::SentenceRewriter;
pub use simplify::{Article, Progress, ProgressSink, Simplifier};
pub use vocabulary::{Lexicon, Vocabulary};

/// Default maximum input size in bytes (5 MiB).
pub const DEFAULT_MAX_INPUT_BYTES: usize = 5 * 1024 * 1024;
