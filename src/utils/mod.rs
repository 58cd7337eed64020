/// Utility modules for the checker
///
/// This module contains utility functions for file handling and console
/// output formatting.

pub mod file_utils;
pub mod output_formatter;
