/// Core file classifier implementation
///
/// This file contains the FileClassifier, which reads an input file line by
/// line, runs a validator on every non-empty line and splits the lines into
/// a "valid" and an "invalid" output file while reporting progress.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use log::{debug, info, warn};

use crate::config::ClassifierConfig;
use crate::core::category::Category;
use crate::core::report::{ClassificationResult, LineResult, Reporter};
use crate::utils::file_utils;

/// Errors that abort a single classification pass
#[derive(Debug, thiserror::Error)]
pub enum ClassifyError {
    /// The input file does not exist; nothing was written
    #[error("input file not found: {}", path.display())]
    InputNotFound { path: PathBuf },

    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The reporter could not emit its output
    #[error("failed to report progress: {0}")]
    Report(#[source] io::Error),
}

/// Splits input files into accepted and rejected lines
#[derive(Debug, Clone)]
pub struct FileClassifier {
    /// Where inputs are read from and outputs are written to
    config: ClassifierConfig,
}

impl FileClassifier {
    /// Create a new FileClassifier instance
    ///
    /// # Arguments
    ///
    /// * `config` - Input and output directories
    pub fn new(config: ClassifierConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    /// Run one classification pass over `input_path`.
    ///
    /// Accepted lines go to `extracted_<label>.txt` and rejected lines to
    /// `invalid_<label>.txt` in the output directory, with spaces in the label
    /// replaced by underscores. Both files are truncated first. Lines that are
    /// empty after trimming are skipped and never counted.
    ///
    /// # Arguments
    ///
    /// * `input_path` - File to read, one candidate entry per line
    /// * `validator` - Predicate applied to each trimmed line
    /// * `label` - Category label used for reporting and output file names
    /// * `reporter` - Receives per-line results and the final summary
    ///
    /// # Returns
    ///
    /// The counts and output paths of the pass, or
    /// [`ClassifyError::InputNotFound`] when the input file is missing (in
    /// which case no output file is created or touched)
    pub fn classify<F>(
        &self,
        input_path: &Path,
        validator: F,
        label: &str,
        reporter: &mut dyn Reporter,
    ) -> Result<ClassificationResult, ClassifyError>
    where
        F: Fn(&str) -> bool,
    {
        let stem = file_utils::stem_for_label(label);
        self.run_pass(input_path, validator, label, &stem, reporter)
    }

    /// Classify the fixed input file of `category` from the input directory.
    ///
    /// Output files are named from [`Category::file_stem`].
    pub fn classify_category(
        &self,
        category: Category,
        reporter: &mut dyn Reporter,
    ) -> Result<ClassificationResult, ClassifyError> {
        let input_path = self.config.input_dir.join(category.input_file());
        self.run_pass(
            &input_path,
            category.validator(),
            category.label(),
            category.file_stem(),
            reporter,
        )
    }

    fn run_pass<F>(
        &self,
        input_path: &Path,
        validator: F,
        label: &str,
        stem: &str,
        reporter: &mut dyn Reporter,
    ) -> Result<ClassificationResult, ClassifyError>
    where
        F: Fn(&str) -> bool,
    {
        let output_dir = &self.config.output_dir;
        file_utils::ensure_output_dir(output_dir).map_err(|source| ClassifyError::Write {
            path: output_dir.clone(),
            source,
        })?;

        // The input is opened before any output so a missing file leaves outputs alone
        let reader = match file_utils::open_input(input_path) {
            Ok(reader) => reader,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                warn!("Input file not found: {}", input_path.display());
                reporter
                    .missing_input(input_path)
                    .map_err(ClassifyError::Report)?;
                return Err(ClassifyError::InputNotFound {
                    path: input_path.to_path_buf(),
                });
            }
            Err(source) => {
                return Err(ClassifyError::Read {
                    path: input_path.to_path_buf(),
                    source,
                })
            }
        };

        let (valid_path, invalid_path) = file_utils::output_paths(output_dir, stem);
        let mut valid_file = open_output(&valid_path)?;
        let mut invalid_file = open_output(&invalid_path)?;

        info!("Checking {} entries from {}", label, input_path.display());

        let mut valid_count = 0;
        let mut invalid_count = 0;

        for (index, line) in reader.lines().enumerate() {
            let line = line.map_err(|source| ClassifyError::Read {
                path: input_path.to_path_buf(),
                source,
            })?;
            let text = line.trim();
            if text.is_empty() {
                continue;
            }

            let accepted = validator(text);
            let (file, path) = if accepted {
                valid_count += 1;
                (&mut valid_file, &valid_path)
            } else {
                invalid_count += 1;
                (&mut invalid_file, &invalid_path)
            };
            writeln!(file, "{}", text).map_err(|source| ClassifyError::Write {
                path: path.clone(),
                source,
            })?;

            debug!("{} line {}: accepted={}", label, index + 1, accepted);
            reporter
                .line(&LineResult {
                    line_number: index + 1,
                    accepted,
                    text,
                })
                .map_err(ClassifyError::Report)?;
        }

        flush_output(&mut valid_file, &valid_path)?;
        flush_output(&mut invalid_file, &invalid_path)?;

        let result = ClassificationResult {
            label: label.to_string(),
            valid_count,
            invalid_count,
            valid_path,
            invalid_path,
        };
        info!(
            "Finished {}: {} valid, {} invalid",
            label, result.valid_count, result.invalid_count
        );
        reporter.summary(&result).map_err(ClassifyError::Report)?;

        Ok(result)
    }

    /// Classify every category in menu order.
    ///
    /// A failing category does not stop the remaining ones.
    ///
    /// # Returns
    ///
    /// One outcome per category, in [`Category::ALL`] order
    pub fn classify_all(
        &self,
        reporter: &mut dyn Reporter,
    ) -> Vec<(Category, Result<ClassificationResult, ClassifyError>)> {
        let mut outcomes = Vec::with_capacity(Category::ALL.len());
        for category in Category::ALL {
            outcomes.push((category, self.classify_category(category, reporter)));
        }
        outcomes
    }
}

fn open_output(path: &Path) -> Result<io::BufWriter<std::fs::File>, ClassifyError> {
    file_utils::create_output(path).map_err(|source| ClassifyError::Write {
        path: path.to_path_buf(),
        source,
    })
}

fn flush_output(file: &mut impl Write, path: &Path) -> Result<(), ClassifyError> {
    file.flush().map_err(|source| ClassifyError::Write {
        path: path.to_path_buf(),
        source,
    })
}
