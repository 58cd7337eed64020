/// Interactive menu
///
/// The numbered 1-7 menu loop of the command-line application. Options 1-5
/// check a single category, 6 checks every category and 7 quits. The loop is
/// generic over its input and output so it can run against stdin/stdout or
/// in-memory buffers.

use std::io::{BufRead, Write};
use std::str::FromStr;

use anyhow::{Context, Result};
use log::{error, info, warn};

use crate::core::category::Category;
use crate::core::classifier::{ClassifyError, FileClassifier};
use crate::utils::output_formatter::{self, ConsoleReporter, PROMPT};

/// Menu number of "check all files"
pub const CHECK_ALL_OPTION: i64 = 6;

/// Menu number of "close the program"
pub const EXIT_OPTION: i64 = 7;

/// A selection from the menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// Options 1-5
    Check(Category),
    CheckAll,
    Exit,
}

/// Rejected menu input
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MenuError {
    #[error("Invalid input! Please enter a number between 1 and 7.")]
    NotANumber(String),

    /// A whole number outside 1-7, kept as typed since it may not fit an `i64`
    #[error("Invalid choice! Please select a number between 1 and 7.")]
    OutOfRange(String),
}

impl FromStr for MenuChoice {
    type Err = MenuError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        let number: i64 = match input.parse() {
            Ok(number) => number,
            Err(_) if is_integer(input) => return Err(MenuError::OutOfRange(input.to_string())),
            Err(_) => return Err(MenuError::NotANumber(input.to_string())),
        };

        match number {
            CHECK_ALL_OPTION => Ok(MenuChoice::CheckAll),
            EXIT_OPTION => Ok(MenuChoice::Exit),
            _ => Category::from_menu_number(number)
                .map(MenuChoice::Check)
                .ok_or_else(|| MenuError::OutOfRange(input.to_string())),
        }
    }
}

/// Optional sign followed by one or more ASCII digits
fn is_integer(input: &str) -> bool {
    let digits = input.strip_prefix(['+', '-']).unwrap_or(input);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Run the menu loop until the user picks "close" or the input ends
///
/// # Arguments
///
/// * `input` - Source of menu selections, one per line
/// * `out` - Where the menu, results and messages are printed
/// * `classifier` - Classifier used for every pass
pub fn run_menu<R: BufRead, W: Write>(
    mut input: R,
    mut out: W,
    classifier: &FileClassifier,
) -> Result<()> {
    write!(out, "{}", output_formatter::format_banner())?;

    loop {
        writeln!(out, "{}", output_formatter::format_menu())?;
        write!(out, "{}", PROMPT)?;
        out.flush()?;

        let mut line = String::new();
        let read = input
            .read_line(&mut line)
            .context("Failed to read menu selection")?;
        if read == 0 {
            info!("Reached end of input, closing");
            write!(out, "{}", output_formatter::format_goodbye())?;
            break;
        }

        let choice = match line.parse::<MenuChoice>() {
            Ok(choice) => choice,
            Err(e) => {
                warn!("Rejected menu input {:?}: {}", line.trim(), e);
                write!(out, "{}", output_formatter::format_error(&e.to_string()))?;
                continue;
            }
        };

        match choice {
            MenuChoice::Check(category) => {
                let outcome = {
                    let mut reporter = ConsoleReporter::new(&mut out);
                    classifier.classify_category(category, &mut reporter)
                };
                if let Err(e) = outcome {
                    report_failure(&mut out, category, &e)?;
                }
            }
            MenuChoice::CheckAll => {
                write!(out, "{}", output_formatter::format_processing_all())?;
                let outcomes = {
                    let mut reporter = ConsoleReporter::new(&mut out);
                    classifier.classify_all(&mut reporter)
                };
                for (category, outcome) in outcomes {
                    if let Err(e) = outcome {
                        report_failure(&mut out, category, &e)?;
                    }
                }
            }
            MenuChoice::Exit => {
                write!(out, "{}", output_formatter::format_goodbye())?;
                break;
            }
        }
    }

    out.flush()?;
    Ok(())
}

/// Print a failed pass; missing inputs were already reported by the reporter
fn report_failure<W: Write>(out: &mut W, category: Category, e: &ClassifyError) -> Result<()> {
    if matches!(e, ClassifyError::InputNotFound { .. }) {
        return Ok(());
    }
    error!("Error checking {}: {}", category, e);
    write!(
        out,
        "{}",
        output_formatter::format_error(&format!("Could not check {}: {}", category, e))
    )?;
    Ok(())
}
