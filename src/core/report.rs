/// Reporting interface for classification passes
///
/// The classifier only talks to a [`Reporter`]; how results are rendered
/// (colors, emoji, plain text) is up to the implementation.

use std::io;
use std::path::{Path, PathBuf};

/// Verdict for one non-empty input line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineResult<'a> {
    /// 1-based line number in the input file, counting empty lines
    pub line_number: usize,
    pub accepted: bool,
    /// The trimmed line
    pub text: &'a str,
}

/// Aggregate outcome of one classification pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassificationResult {
    /// Label of the category that was checked
    pub label: String,
    pub valid_count: usize,
    pub invalid_count: usize,
    /// File holding the accepted lines
    pub valid_path: PathBuf,
    /// File holding the rejected lines
    pub invalid_path: PathBuf,
}

impl ClassificationResult {
    /// Number of non-empty lines processed
    pub fn total(&self) -> usize {
        self.valid_count + self.invalid_count
    }
}

/// Sink for per-line and summary output of a pass
pub trait Reporter {
    /// Called once per non-empty line, in input order
    fn line(&mut self, result: &LineResult<'_>) -> io::Result<()>;

    /// Called once after the input is exhausted
    fn summary(&mut self, result: &ClassificationResult) -> io::Result<()>;

    /// Called instead of everything else when the input file is missing
    fn missing_input(&mut self, path: &Path) -> io::Result<()>;
}
