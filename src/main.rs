/// Book Analyzer - regex-driven analysis of a single plain-text book
///
/// The main entry point. It parses command-line arguments, loads the book and
/// prints the four analysis sections.

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use colored::Colorize;
use log::{error, info, LevelFilter};
use std::fs::File;
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::process;
use std::time::Instant;

use book_analyzer::config::AppConfig;
use book_analyzer::core::analyzer;
use book_analyzer::utils::file_utils;
use book_analyzer::utils::output_formatter::{self, FormatOptions};

/// Command line argument structure
#[derive(Parser, Debug)]
#[command(
    name = "book_analyzer",
    version,
    about = "Regex-driven analysis of a single plain-text book",
    long_about = "Loads one book and reports:
- how many words start with the root 'Robot'
- the first five quoted sentences
- all distinct four-digit years
- character names taken from script-style cue lines"
)]
struct Args {
    /// Path to the book (default: kniha.txt)
    input: Option<PathBuf>,

    /// Output in markdown format (wrapped in triple backticks)
    #[arg(long = "md", action = ArgAction::SetTrue)]
    md: bool,

    /// Disable colored section headers
    #[arg(long = "no-color", action = ArgAction::SetTrue)]
    no_color: bool,

    /// Path to JSON configuration file
    #[arg(long = "config")]
    config: Option<PathBuf>,

    /// Set logging level (default: WARN)
    #[arg(long = "log-level", default_value = "warn")]
    log_level: LevelFilter,

    /// Write log lines to this file instead of stderr
    #[arg(long = "log-file")]
    log_file: Option<PathBuf>,
}

/// Main entry point function
fn main() -> Result<()> {
    let start_time = Instant::now();

    let args = Args::parse();

    setup_logging(&args)?;

    let mut config = resolve_config(&args)?;
    if !io::stdout().is_terminal() {
        config.color = false;
    }
    if !config.color {
        colored::control::set_override(false);
    }

    println!("{}", output_formatter::loading_message());

    let document = match file_utils::read_document(&config.input) {
        Ok(document) => document,
        Err(e) => {
            error!("Failed to read {}: {:?}", e.path().display(), e);
            eprintln!("{} {}", "CHYBA:".red().bold(), e);
            process::exit(1);
        }
    };

    println!("{}", output_formatter::loaded_message(document.char_len()));

    let report = analyzer::analyze(&document.content);

    let options = FormatOptions {
        markdown: config.markdown,
        color: config.color,
    };
    print!("{}", output_formatter::format_report(&report, &options));

    info!("Analysis completed in {:?}", start_time.elapsed());

    Ok(())
}

/// Merge the configuration file with command line overrides
fn resolve_config(args: &Args) -> Result<AppConfig> {
    let mut config = AppConfig::load(args.config.as_deref())
        .context("Failed to load configuration")?;

    if let Some(input) = &args.input {
        config.input = input.clone();
    }
    if args.md {
        config.markdown = true;
    }
    if args.no_color {
        config.color = false;
    }

    Ok(config)
}

/// Set up logging to stderr or a log file
fn setup_logging(args: &Args) -> Result<()> {
    let mut builder = env_logger::Builder::new();

    builder.filter_level(args.log_level);

    builder.format(|buf, record| {
        use chrono::Local;
        use std::io::Write;
        writeln!(
            buf,
            "{} - {} - {} - {}",
            Local::now().format("%Y-%m-%d %H:%M:%S"),
            record.level(),
            record.target(),
            record.args()
        )
    });

    if let Some(log_file) = &args.log_file {
        let file = File::create(log_file)
            .with_context(|| format!("Failed to create log file: {}", log_file.display()))?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }

    builder.init();

    Ok(())
}
