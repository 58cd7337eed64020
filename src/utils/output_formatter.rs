/// Output formatter for the console
///
/// This module renders classification results and the interactive menu for a
/// terminal with green, red, cyan and blue highlights. The
/// [`ConsoleReporter`] is the [`Reporter`] used by the interactive program.

use std::io::{self, Write};
use std::path::Path;

use colored::Colorize;

use crate::core::category::Category;
use crate::core::report::{ClassificationResult, LineResult, Reporter};

pub const BANNER: &str = "Welcome To The Regex Pattern Finder & Checker!";
pub const PROMPT: &str = "Please select an option from the menu (1-7): ";
pub const CHECK_ALL_ENTRY: &str = "Check All Files";
pub const EXIT_ENTRY: &str = "Close The Program";
pub const GOODBYE: &str = "Thank you for using the Regex Pattern Finder & Checker. Goodbye!";

/// Format the verdict for a single line
///
/// # Example output
///
/// `Line 3: ✅ '$1,234.56'`
pub fn format_line_result(result: &LineResult<'_>) -> String {
    let mark = if result.accepted {
        "✅".green()
    } else {
        "❌".red()
    };
    format!("Line {}: {} '{}'", result.line_number, mark, result.text)
}

/// Format the summary printed after a pass
pub fn format_summary(result: &ClassificationResult) -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "\n{} {}\n",
        "📄 Total lines processed:".cyan(),
        result.total()
    ));
    output.push_str(&format!(
        "{} {} ➜ {}\n",
        "✅ Valid entries:".green(),
        result.valid_count,
        result.valid_path.display()
    ));
    output.push_str(&format!(
        "{} {} ➜ {}\n",
        "❌ Invalid entries:".red(),
        result.invalid_count,
        result.invalid_path.display()
    ));
    output
}

pub fn format_missing_input(path: &Path) -> String {
    format!(
        "{} ({})\n",
        "❌ File not found. Please check the path.".red(),
        path.display()
    )
}

/// Format the numbered menu (categories, "check all", exit)
pub fn format_menu() -> String {
    let entries = Category::ALL
        .iter()
        .map(|category| category.menu_entry())
        .chain([CHECK_ALL_ENTRY, EXIT_ENTRY]);

    let mut output = String::new();
    for (idx, entry) in entries.enumerate() {
        output.push_str(&format!("{}. {}\n", idx + 1, entry));
    }
    output
}

pub fn format_banner() -> String {
    format!("\n\t\t{}\n", BANNER.blue())
}

pub fn format_goodbye() -> String {
    format!("\n{}\n", GOODBYE.green())
}

pub fn format_processing_all() -> String {
    format!("\n{}\n", "🔁 Processing all files...".cyan())
}

/// Format an error message shown between menu prompts
pub fn format_error(message: &str) -> String {
    let text = format!("❌ {}", message);
    format!("\n{}\n", text.as_str().red())
}

/// Reporter that prints colored results to any writer
pub struct ConsoleReporter<W: Write> {
    out: W,
}

impl<W: Write> ConsoleReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Return the underlying writer
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Reporter for ConsoleReporter<W> {
    fn line(&mut self, result: &LineResult<'_>) -> io::Result<()> {
        writeln!(self.out, "{}", format_line_result(result))
    }

    fn summary(&mut self, result: &ClassificationResult) -> io::Result<()> {
        writeln!(self.out, "{}", format_summary(result))?;
        self.out.flush()
    }

    fn missing_input(&mut self, path: &Path) -> io::Result<()> {
        writeln!(self.out, "{}", format_missing_input(path))?;
        self.out.flush()
    }
}
