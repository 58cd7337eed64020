/// Core module for line classification
///
/// This module contains the pattern grammars, the category type tying each
/// grammar to its files, the reporting interface and the file classifier.

pub mod category;
pub mod classifier;
pub mod patterns;
pub mod report;
