/// Output formatter for analysis results
///
/// Turns an [`AnalysisReport`] into the console text. Every section is a
/// header line, its body, and a blank line.

use colored::Colorize;

use crate::core::analyzer::AnalysisReport;

pub const ROOT_WORD_HEADER: &str = "--- ANALYZA SLOVA ROBOT ---";
pub const QUOTED_HEADER: &str = "--- PRVNICH 5 VET V UVOZOVKACH ---";
pub const YEARS_HEADER: &str = "--- NALEZENE LETOPOCTY ---";
pub const CHARACTERS_HEADER: &str = "--- POSTAVY (DLE SCENARE) ---";

pub const NO_QUOTES: &str = "Zadne vety v uvozovkach nenalezeny.";
pub const NO_YEARS: &str = "Zadne letopocty nenalezeny.";
pub const NO_CHARACTERS: &str = "Zadne postavy nenalezeny.";

/// Console formatting switches
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormatOptions {
    /// Wrap the whole output in a markdown code fence
    pub markdown: bool,
    /// Highlight section headers
    pub color: bool,
}

/// Banner printed before the document is read
pub fn loading_message() -> String {
    "Nacitam knihu...".to_string()
}

/// Banner printed once the document is in memory
pub fn loaded_message(char_len: usize) -> String {
    format!("Kniha nactena. Velikost: {} znaku.\n", char_len)
}

fn header(title: &str, options: &FormatOptions) -> String {
    if options.color {
        format!("{}\n", title.yellow().bold())
    } else {
        format!("{}\n", title)
    }
}

pub fn format_root_words(count: usize, options: &FormatOptions) -> String {
    let mut output = header(ROOT_WORD_HEADER, options);
    output.push_str(&format!(
        "Pocet vyskytu slov s korenem 'Robot': {}\n",
        count
    ));
    output.push('\n');
    output
}

/// Numbered list of quoted spans, starting at 1
pub fn format_quoted_sentences(sentences: &[String], options: &FormatOptions) -> String {
    let mut output = header(QUOTED_HEADER, options);

    if sentences.is_empty() {
        output.push_str(NO_QUOTES);
        output.push('\n');
    }
    for (index, sentence) in sentences.iter().enumerate() {
        output.push_str(&format!("{}. {}\n", index + 1, sentence));
    }

    output.push('\n');
    output
}

/// Years on one line, separated by spaces
pub fn format_years<'a, I>(years: I, options: &FormatOptions) -> String
where
    I: IntoIterator<Item = &'a String>,
{
    let mut output = header(YEARS_HEADER, options);

    let line = years
        .into_iter()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(" ");

    if line.is_empty() {
        output.push_str(NO_YEARS);
    } else {
        output.push_str(&line);
    }
    output.push_str("\n\n");
    output
}

/// One character name per line
pub fn format_character_names<'a, I>(names: I, options: &FormatOptions) -> String
where
    I: IntoIterator<Item = &'a String>,
{
    let mut output = header(CHARACTERS_HEADER, options);

    let mut found = false;
    for name in names {
        found = true;
        output.push_str(name);
        output.push('\n');
    }
    if !found {
        output.push_str(NO_CHARACTERS);
        output.push('\n');
    }

    output.push('\n');
    output
}

/// Format the whole report in the fixed section order
///
/// # Arguments
///
/// * `report` - Results of the four passes
/// * `options` - Markdown and color switches
///
/// # Returns
///
/// Formatted string for console output
pub fn format_report(report: &AnalysisReport, options: &FormatOptions) -> String {
    let mut output = String::new();

    if options.markdown {
        output.push_str("```\n");
    }

    output.push_str(&format_root_words(report.root_word_count, options));
    output.push_str(&format_quoted_sentences(&report.quoted_sentences, options));
    output.push_str(&format_years(&report.years, options));
    output.push_str(&format_character_names(&report.character_names, options));

    if options.markdown {
        output.push_str("```\n");
    }

    output
}
