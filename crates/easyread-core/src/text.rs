//! Text segmentation utilities.
//!
//! Sentences are closed by a plain terminator scan: every `.`, `!` or `?`
//! ends the current sentence and stays attached to it. There is no
//! abbreviation or decimal awareness.
//!
//! Two flavours exist and they disagree on unterminated trailing text:
//!
//! - [`split_terminated`] drops it. Readability scoring uses this one.
//! - [`split_sentences`] keeps it as a final sentence. The simplification
//!   pipeline uses this one so no input text is lost.
//!
//! Keep them separate. Scores reported for existing documents depend on
//! the dropping behaviour.

/// Returns `true` for characters that close a sentence.
pub const fn is_sentence_terminator(ch: char) -> bool {
    matches!(ch, '.' | '!' | '?')
}

/// Split text into terminated sentences, discarding any trailing fragment.
///
/// Whitespace is preserved verbatim inside each sentence.
pub fn split_terminated(text: &str) -> Vec<String> {
    scan(text).0
}

/// Split text into sentences, keeping a trailing unterminated fragment.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn split_sentences(text: &str) -> Vec<String> {
    let (mut sentences, rest) = scan(text);
    if !rest.is_empty() {
        sentences.push(rest);
    }
    sentences
}

fn scan(text: &str) -> (Vec<String>, String) {
    let mut sentences = Vec::new();
    let mut current = String::new();

    for ch in text.chars() {
        current.push(ch);
        if is_sentence_terminator(ch) {
            sentences.push(std::mem::take(&mut current));
        }
    }

    (sentences, current)
}

/// Extract the alphabetic words of a sentence.
///
/// Splits on whitespace, removes every non-alphabetic character from each
/// token (so `don't` becomes `dont`), and skips tokens left empty.
pub fn alphabetic_words(sentence: &str) -> impl Iterator<Item = String> + '_ {
    sentence
        .split_whitespace()
        .map(|token| token.chars().filter(|c| c.is_alphabetic()).collect::<String>())
        .filter(|word| !word.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminators_stay_attached() {
        let sentences = split_sentences("Hi there. How are you? Great!");
        assert_eq!(sentences, vec!["Hi there.", " How are you?", " Great!"]);
    }

    #[test]
    fn terminated_split_drops_trailing_fragment() {
        let sentences = split_terminated("One. Two. no end");
        assert_eq!(sentences, vec!["One.", " Two."]);
    }

    #[test]
    fn pipeline_split_keeps_trailing_fragment() {
        let sentences = split_sentences("One. Two. no end");
        assert_eq!(sentences, vec!["One.", " Two.", " no end"]);
    }

    #[test]
    fn trailing_whitespace_is_still_a_fragment() {
        // Only the empty string is discarded; rejoin filters blank chunks later.
        assert_eq!(split_sentences("Done.\n"), vec!["Done.", "\n"]);
        assert_eq!(split_terminated("Done.\n"), vec!["Done."]);
    }

    #[test]
    fn every_terminator_closes_a_sentence() {
        assert_eq!(split_terminated("Wait..."), vec!["Wait.", ".", "."]);
        assert_eq!(split_terminated("Pi is 3.14 today."), vec!["Pi is 3.", "14 today."]);
    }

    #[test]
    fn empty_input() {
        assert!(split_sentences("").is_empty());
        assert!(split_terminated("").is_empty());
        assert!(split_terminated("no terminator at all").is_empty());
    }

    #[test]
    fn alphabetic_words_strip_symbols() {
        let words: Vec<String> = alphabetic_words("Don't stop -- 42 times, ok?").collect();
        assert_eq!(words, vec!["Dont", "stop", "times", "ok"]);
    }
}
