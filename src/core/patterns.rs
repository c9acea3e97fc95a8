/// Pattern definitions for the book analyzer
///
/// This module contains the four regular expressions the analysis passes are
/// built on. Each pattern is compiled exactly once on first use.

use lazy_static::lazy_static;
use regex::Regex;

/// Uppercase letters accepted inside a character name.
///
/// Plain `A-Z` plus an enumerated set of accented capitals. Other Unicode
/// uppercase letters never count.
pub const NAME_LETTERS: &str = "A-ZÀÁČĎÉĚÍŇÓŘŠŤÚŮÝŽ";

/// Word boundary, the case-sensitive root `Robot`, then any word characters.
///
/// Word characters are ASCII only; accented letters act as separators.
pub const ROOT_WORD_PATTERN: &str = r"(?-u:\b)Robot[0-9A-Za-z_]*";

/// A double-quoted span; group 1 holds the text between the quotes.
pub const QUOTED_SPAN_PATTERN: &str = r#""([^"]+)""#;

/// Exactly four ASCII digits standing alone as an ASCII word.
pub const YEAR_PATTERN: &str = r"(?-u:\b)[0-9]{4}(?-u:\b)";

lazy_static! {
    pub static ref ROOT_WORD: Regex = Regex::new(ROOT_WORD_PATTERN).unwrap();
    pub static ref QUOTED_SPAN: Regex = Regex::new(QUOTED_SPAN_PATTERN).unwrap();
    pub static ref YEAR: Regex = Regex::new(YEAR_PATTERN).unwrap();

    /// Start of text or a newline, optional whitespace, a run of name letters
    /// (group 1), then `.` or `:`.
    pub static ref CHARACTER_CUE: Regex = Regex::new(&character_cue_pattern()).unwrap();
}

/// Build the character cue pattern from [`NAME_LETTERS`]
fn character_cue_pattern() -> String {
    format!(r"(?:^|\n)\s*([{}]+)[.:]", NAME_LETTERS)
}

/// Check whether a captured cue is long enough to be a name.
///
/// Single letters followed by `.` or `:` are list markers or initials.
pub fn is_character_name(candidate: &str) -> bool {
    candidate.chars().count() > 1
}
