/// Core text analyzer implementation
///
/// Four independent passes over the document text. Each pass is a pure
/// function of the text; [`analyze`] runs all of them and bundles the results.

use std::collections::BTreeSet;
use std::time::Instant;

use log::debug;

use crate::core::patterns::{self, CHARACTER_CUE, QUOTED_SPAN, ROOT_WORD, YEAR};

/// Maximum number of quoted spans reported
pub const QUOTED_SENTENCE_LIMIT: usize = 5;

/// Results of all four passes over one document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnalysisReport {
    /// Occurrences of words starting with `Robot`
    pub root_word_count: usize,

    /// First quoted spans in reading order, at most [`QUOTED_SENTENCE_LIMIT`]
    pub quoted_sentences: Vec<String>,

    /// Distinct four-digit tokens, ascending
    pub years: BTreeSet<String>,

    /// Distinct character cues, ascending
    pub character_names: BTreeSet<String>,
}

/// Count non-overlapping words with the root `Robot`
pub fn count_root_words(text: &str) -> usize {
    ROOT_WORD.find_iter(text).count()
}

/// Collect the contents of the first quoted spans
///
/// # Arguments
///
/// * `text` - Document text
///
/// # Returns
///
/// Up to [`QUOTED_SENTENCE_LIMIT`] captures, in the order they appear
pub fn quoted_sentences(text: &str) -> Vec<&str> {
    QUOTED_SPAN
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
        .take(QUOTED_SENTENCE_LIMIT)
        .collect()
}

/// Collect the distinct four-digit tokens
pub fn collect_years(text: &str) -> BTreeSet<&str> {
    YEAR.find_iter(text).map(|m| m.as_str()).collect()
}

/// Collect character names from script-style cue lines
///
/// A cue is a line that starts (after optional whitespace) with a run of
/// uppercase name letters immediately followed by `.` or `:`. Single-letter
/// cues are dropped.
///
/// # Arguments
///
/// * `text` - Document text
///
/// # Returns
///
/// Distinct names, sorted
pub fn collect_character_names(text: &str) -> BTreeSet<&str> {
    CHARACTER_CUE
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
        .filter(|name| patterns::is_character_name(name))
        .collect()
}

/// Run every pass over the text
pub fn analyze(text: &str) -> AnalysisReport {
    let start_time = Instant::now();

    let root_word_count = count_root_words(text);
    debug!("Root word matches: {}", root_word_count);

    let quoted_sentences: Vec<String> = quoted_sentences(text)
        .into_iter()
        .map(str::to_string)
        .collect();
    debug!("Quoted spans kept: {}", quoted_sentences.len());

    let years: BTreeSet<String> = collect_years(text)
        .into_iter()
        .map(str::to_string)
        .collect();
    debug!("Distinct years: {}", years.len());

    let character_names: BTreeSet<String> = collect_character_names(text)
        .into_iter()
        .map(str::to_string)
        .collect();
    debug!("Distinct character names: {}", character_names.len());

    debug!("Analysis passes finished in {:?}", start_time.elapsed());

    AnalysisReport {
        root_word_count,
        quoted_sentences,
        years,
        character_names,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCENARIO: &str =
        "Robot Robotek. \"Ahoj\" rekl Robot v roce 1999 a 2000. JAN: Kde jsi?\n";

    #[test]
    fn test_count_root_words() {
        assert_eq!(count_root_words("Robot a Robotics"), 2);
        assert_eq!(count_root_words("robot ROBOT"), 0);
        assert_eq!(count_root_words(""), 0);
        assert_eq!(count_root_words("Robotů, Robotovi; Robot_1"), 3);
    }

    #[test]
    fn test_count_root_words_next_to_accented_letters() {
        assert_eq!(count_root_words("čRobot"), 1);
        assert_eq!(count_root_words("čRobot žRoboti"), 2);
    }

    #[test]
    fn test_count_root_words_scenario() {
        assert_eq!(count_root_words(SCENARIO), 3);
    }

    #[test]
    fn test_quoted_sentences_in_order() {
        let text = r#""jedna" a "dva" pak "tri""#;
        assert_eq!(quoted_sentences(text), vec!["jedna", "dva", "tri"]);
    }

    #[test]
    fn test_quoted_sentences_capped() {
        let text = (1..=8).map(|i| format!("\"q{}\" ", i)).collect::<String>();
        let found = quoted_sentences(&text);
        assert_eq!(found.len(), QUOTED_SENTENCE_LIMIT);
        assert_eq!(found[0], "q1");
        assert_eq!(found[4], "q5");
    }

    #[test]
    fn test_quoted_sentences_skip_empty_quotes() {
        // `""` has nothing to capture; the scan continues from the second quote
        let text = r#"a "" b "x" c"#;
        assert_eq!(quoted_sentences(text), vec![" b "]);
    }

    #[test]
    fn test_quoted_sentences_span_lines() {
        let text = "\"prvni\nradek\" konec";
        assert_eq!(quoted_sentences(text), vec!["prvni\nradek"]);
    }

    #[test]
    fn test_quoted_sentences_unclosed() {
        assert!(quoted_sentences("\"nikdy nekonci").is_empty());
    }

    #[test]
    fn test_collect_years_dedup_and_sorted() {
        let years = collect_years("2000, 1999, 1999 a 1999; 1066");
        let years: Vec<_> = years.into_iter().collect();
        assert_eq!(years, vec!["1066", "1999", "2000"]);
    }

    #[test]
    fn test_collect_years_next_to_accented_letters() {
        let years: Vec<_> = collect_years("1999ý").into_iter().collect();
        assert_eq!(years, vec!["1999"]);

        let years: Vec<_> = collect_years("roku 1999ý a 2000č").into_iter().collect();
        assert_eq!(years, vec!["1999", "2000"]);
    }

    #[test]
    fn test_collect_years_none() {
        assert!(collect_years("rok 99 nebo 12345").is_empty());
    }

    #[test]
    fn test_collect_character_names_drops_single_letters() {
        let names = collect_character_names("A.\nJAN: Ahoj\n");
        let names: Vec<_> = names.into_iter().collect();
        assert_eq!(names, vec!["JAN"]);
    }

    #[test]
    fn test_collect_character_names_dedup_and_sorted() {
        let text = "PETR: ahoj\n  JAN. nazdar\nPETR: jak se mas\nŠIMON: dobre\n";
        let names: Vec<_> = collect_character_names(text).into_iter().collect();
        assert_eq!(names, vec!["JAN", "PETR", "ŠIMON"]);
    }

    #[test]
    fn test_collect_character_names_ignores_inline_cues() {
        assert!(collect_character_names(SCENARIO).is_empty());
    }

    #[test]
    fn test_analyze_scenario() {
        let report = analyze(SCENARIO);
        assert!(report.root_word_count >= 2);
        assert_eq!(report.quoted_sentences, vec!["Ahoj".to_string()]);
        assert_eq!(
            report.years.iter().map(String::as_str).collect::<Vec<_>>(),
            vec!["1999", "2000"]
        );
    }

    #[test]
    fn test_analyze_is_repeatable() {
        let text = "JAN: \"Robot\" 1921\nEVA. \"Robotka\" 1921\n";
        assert_eq!(analyze(text), analyze(text));
    }

    #[test]
    fn test_analyze_empty_text() {
        assert_eq!(analyze(""), AnalysisReport::default());
    }
}
