/// Regex Checker - splits text files into valid and invalid entries
///
/// This library checks every line of a text file against one of five fixed
/// grammars (currency amounts, phone numbers, HTML tags, email addresses and
/// URLs) and writes accepted and rejected lines to separate output files.

// Re-export core modules
pub mod app;
pub mod core;
pub mod utils;

// Re-export main classifier types for convenience
pub use crate::core::category::{validate, Category};
pub use crate::core::classifier::{ClassifyError, FileClassifier};
pub use crate::core::report::{ClassificationResult, LineResult, Reporter};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library configuration
pub mod config {
    use std::path::PathBuf;

    /// Directory, relative to the working directory, that receives output files
    pub const DEFAULT_OUTPUT_DIR: &str = "output";

    /// Where the classifier looks for inputs and writes outputs
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct ClassifierConfig {
        /// Directory holding `currency.txt`, `phones.txt`, ...
        pub input_dir: PathBuf,
        /// Directory receiving `extracted_*.txt` and `invalid_*.txt`
        pub output_dir: PathBuf,
    }

    impl ClassifierConfig {
        /// Read inputs from `dir` and write outputs to `dir/output`
        pub fn rooted_at(dir: impl Into<PathBuf>) -> Self {
            let input_dir = dir.into();
            let output_dir = input_dir.join(DEFAULT_OUTPUT_DIR);
            Self {
                input_dir,
                output_dir,
            }
        }
    }

    impl Default for ClassifierConfig {
        fn default() -> Self {
            Self {
                input_dir: PathBuf::from("."),
                output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            }
        }
    }
}
