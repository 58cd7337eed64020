/// File handling utilities
///
/// This module provides the small file helpers used by the classifier:
/// creating the output directory, naming output files and opening the
/// buffered input and output handles.

use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter};
use std::path::{Path, PathBuf};

/// Prefix of the file that receives accepted lines
pub const VALID_PREFIX: &str = "extracted";

/// Prefix of the file that receives rejected lines
pub const INVALID_PREFIX: &str = "invalid";

/// Create the output directory (and parents) if it does not exist yet.
///
/// # Arguments
///
/// * `dir` - Directory that will hold the output files
pub fn ensure_output_dir(dir: &Path) -> io::Result<()> {
    fs::create_dir_all(dir)
}

/// Derive an output file stem from a label: spaces become underscores,
/// so `"phone number"` gives `phone_number`.
pub fn stem_for_label(label: &str) -> String {
    label.replace(' ', "_")
}

/// Build an output file name from a prefix and a file stem
/// (`extracted` + `phone_number` gives `extracted_phone_number.txt`).
pub fn output_file_name(prefix: &str, stem: &str) -> String {
    format!("{}_{}.txt", prefix, stem)
}

/// Paths of the valid and invalid output files for a file stem.
///
/// # Returns
///
/// A `(valid, invalid)` tuple of paths under `output_dir`
pub fn output_paths(output_dir: &Path, stem: &str) -> (PathBuf, PathBuf) {
    (
        output_dir.join(output_file_name(VALID_PREFIX, stem)),
        output_dir.join(output_file_name(INVALID_PREFIX, stem)),
    )
}

/// Open a file for buffered line reading.
pub fn open_input(path: &Path) -> io::Result<BufReader<File>> {
    File::open(path).map(BufReader::new)
}

/// Create (or truncate) a file for buffered writing.
pub fn create_output(path: &Path) -> io::Result<BufWriter<File>> {
    File::create(path).map(BufWriter::new)
}
