//! Descriptive statistics over a block of free text.
//!
//! Counting rules:
//! - Words are maximal runs of non-whitespace (Unicode `White_Space`).
//! - `longest_word` compares words with leading/trailing ASCII punctuation
//!   trimmed (`"world."` measures as `"world"`); the first longest wins.
//!   A token that is all punctuation is measured and reported as-is.
//! - Character counts are in Unicode scalar values, not bytes.
//! - Only U+0020 is removed for `character_count_no_spaces`; tabs and
//!   newlines still count.
//! - A sentence is a maximal run of `.`, `!`, `?`; unpunctuated text is one sentence.
//! - Paragraphs are separated by a blank line (`"\n\n"`); blank segments are skipped.
//! - Rational fields are rounded to one decimal, ties to even.

use serde::{Deserialize, Serialize};

/// Words per minute used for `reading_time_minutes`.
pub const READING_WORDS_PER_MINUTE: f64 = 200.0;

const PARAGRAPH_SEPARATOR: &str = "\n\n";

/// Computed statistics for one text. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextMetrics {
    pub word_count: u64,
    pub character_count: u64,
    pub character_count_no_spaces: u64,
    pub sentence_count: u64,
    pub paragraph_count: u64,
    pub average_word_length: f64,
    pub longest_word: String,
    pub reading_time_minutes: f64,
}

impl TextMetrics {
    /// Compute metrics for `text`. Total: any input, including `""`, yields a value.
    pub fn compute(text: &str) -> Self {
        let mut word_count: u64 = 0;
        let mut longest_word = "";
        let mut longest_len = 0usize;
        for token in text.split_whitespace() {
            word_count += 1;
            let word = match token.trim_matches(|c: char| c.is_ascii_punctuation()) {
                "" => token,
                trimmed => trimmed,
            };
            let len = word.chars().count();
            // strictly greater keeps the first token on ties
            if len > longest_len {
                longest_len = len;
                longest_word = word;
            }
        }

        let character_count = text.chars().count() as u64;
        let character_count_no_spaces = text.chars().filter(|&c| c != ' ').count() as u64;

        let average_word_length = if word_count == 0 {
            0.0
        } else {
            round1(character_count_no_spaces as f64 / word_count as f64)
        };

        Self {
            word_count,
            character_count,
            character_count_no_spaces,
            sentence_count: sentence_count(text),
            paragraph_count: paragraph_count(text),
            average_word_length,
            longest_word: longest_word.to_string(),
            reading_time_minutes: round1(word_count as f64 / READING_WORDS_PER_MINUTE),
        }
    }
}

fn is_terminator(c: char) -> bool {
    matches!(c, '.' | '!' | '?')
}

/// Number of maximal terminator runs, never less than 1.
fn sentence_count(text: &str) -> u64 {
    let mut runs = 0u64;
    let mut in_run = false;
    for c in text.chars() {
        let t = is_terminator(c);
        if t && !in_run {
            runs += 1;
        }
        in_run = t;
    }
    runs.max(1)
}

fn paragraph_count(text: &str) -> u64 {
    text.split(PARAGRAPH_SEPARATOR)
        .filter(|p| !p.trim().is_empty())
        .count() as u64
}

/// Round to one decimal place, ties to even.
fn round1(v: f64) -> f64 {
    (v * 10.0).round_ties_even() / 10.0
}
