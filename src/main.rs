/// Regex Checker - Regex Pattern Finder & Checker
/// This tool splits text files into valid and invalid entries
///
/// The main entry point for the checker application. It parses the logging
/// flags, sets up logging and runs the interactive menu on stdin/stdout.

use anyhow::Result;
use clap::Parser;
use log::{debug, info, LevelFilter};
use std::fs::File;
use std::io;

use regex_checker::app;
use regex_checker::config::ClassifierConfig;
use regex_checker::core::patterns;
use regex_checker::{FileClassifier, VERSION};

/// Command line argument structure
#[derive(Parser, Debug)]
#[command(
    name = "regex_checker",
    version,
    about = "Regex Pattern Finder & Checker",
    long_about = "Interactive tool that checks currency.txt, phones.txt, htmltags.txt,
emails.txt and urls.txt in the working directory line by line and writes
valid and invalid entries to separate files under output/."
)]
struct Args {
    /// Set logging level (default: WARN)
    #[arg(long = "log-level", default_value = "warn")]
    log_level: LevelFilter,

    /// Write logs to this file instead of stderr
    #[arg(long = "log-file")]
    log_file: Option<String>,
}

/// Main entry point function
fn main() -> Result<()> {
    let args = Args::parse();

    // Set up logging
    let _ = setup_logging(&args);

    info!("Starting regex_checker {}", VERSION);
    for (name, pattern) in patterns::all_patterns() {
        debug!("Pattern {}: {}", name, pattern);
    }

    let classifier = FileClassifier::new(ClassifierConfig::default());
    info!(
        "Reading inputs from {}, writing outputs to {}",
        classifier.config().input_dir.display(),
        classifier.config().output_dir.display()
    );

    let stdin = io::stdin();
    app::run_menu(stdin.lock(), io::stdout().lock(), &classifier)?;

    Ok(())
}

/// Set up logging with stderr or file output
fn setup_logging(args: &Args) -> Result<()> {
    let mut builder = env_logger::Builder::new();

    // Set log level from arguments
    builder.filter_level(args.log_level);

    // Set format
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

    // Add file output
    if let Some(log_file) = &args.log_file {
        let file = File::create(log_file)?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }

    builder.try_init()?;

    Ok(())
}
