/// Integration tests for the file classifier
///
/// These tests run classification passes over the fixture files in
/// `tests/test_data` inside temporary directories and check the output files,
/// the counts and what the reporter receives.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use regex_checker::config::ClassifierConfig;
use regex_checker::core::patterns;
use regex_checker::{
    Category, ClassificationResult, ClassifyError, FileClassifier, LineResult, Reporter,
};

/// Reporter that keeps everything it is told
#[derive(Default)]
struct RecordingReporter {
    lines: Vec<(usize, bool, String)>,
    summaries: Vec<ClassificationResult>,
    missing: Vec<PathBuf>,
}

impl Reporter for RecordingReporter {
    fn line(&mut self, result: &LineResult<'_>) -> io::Result<()> {
        self.lines
            .push((result.line_number, result.accepted, result.text.to_string()));
        Ok(())
    }

    fn summary(&mut self, result: &ClassificationResult) -> io::Result<()> {
        self.summaries.push(result.clone());
        Ok(())
    }

    fn missing_input(&mut self, path: &Path) -> io::Result<()> {
        self.missing.push(path.to_path_buf());
        Ok(())
    }
}

fn fixture_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests").join("test_data")
}

/// Temp dir holding copies of the fixtures for the given categories
fn workspace(categories: &[Category]) -> tempfile::TempDir {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    for category in categories {
        fs::copy(
            fixture_dir().join(category.input_file()),
            temp_dir.path().join(category.input_file()),
        )
        .expect("Failed to copy fixture");
    }
    temp_dir
}

fn read_lines(path: &Path) -> Vec<String> {
    fs::read_to_string(path)
        .expect("Failed to read output file")
        .lines()
        .map(str::to_string)
        .collect()
}

fn non_empty_lines(path: &Path) -> Vec<String> {
    fs::read_to_string(path)
        .expect("Failed to read input file")
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

#[test]
fn test_classify_currency_fixture() {
    let temp_dir = workspace(&[Category::Currency]);
    let classifier = FileClassifier::new(ClassifierConfig::rooted_at(temp_dir.path()));
    let mut reporter = RecordingReporter::default();

    let result = classifier
        .classify_category(Category::Currency, &mut reporter)
        .expect("Failed to classify currency");

    assert_eq!(result.label, "currency amount");
    assert_eq!(result.valid_count, 4);
    assert_eq!(result.invalid_count, 3);
    assert_eq!(result.total(), 7);

    let output_dir = temp_dir.path().join("output");
    assert_eq!(result.valid_path, output_dir.join("extracted_currency_amount.txt"));
    assert_eq!(result.invalid_path, output_dir.join("invalid_currency_amount.txt"));

    assert_eq!(
        read_lines(&result.valid_path),
        ["$1,234.56", "$1234", "$999.99", "$1,234,567.89"]
    );
    assert_eq!(read_lines(&result.invalid_path), ["$1,23", "1234", "$12,34"]);

    // Line numbers count the blank line but the blank line is never reported
    let numbers: Vec<_> = reporter.lines.iter().map(|(n, _, _)| *n).collect();
    assert_eq!(numbers, [1, 2, 4, 5, 6, 7, 8]);
    assert_eq!(reporter.lines[4], (6, true, "$999.99".to_string()));
    assert_eq!(reporter.summaries, vec![result]);
    assert!(reporter.missing.is_empty());
}

#[test]
fn test_every_category_splits_lines_consistently() {
    let temp_dir = workspace(&Category::ALL);
    let classifier = FileClassifier::new(ClassifierConfig::rooted_at(temp_dir.path()));

    for category in Category::ALL {
        let mut reporter = RecordingReporter::default();
        let result = classifier
            .classify_category(category, &mut reporter)
            .expect("Failed to classify");

        let valid = read_lines(&result.valid_path);
        let invalid = read_lines(&result.invalid_path);
        let input = non_empty_lines(&temp_dir.path().join(category.input_file()));

        assert_eq!(valid.len(), result.valid_count, "{}", category);
        assert_eq!(invalid.len(), result.invalid_count, "{}", category);
        assert_eq!(result.total(), input.len(), "{}", category);

        for line in &valid {
            assert!(category.validate(line), "{} wrote {:?} as valid", category, line);
            assert!(!invalid.contains(line));
        }
        for line in &invalid {
            assert!(!category.validate(line), "{} wrote {:?} as invalid", category, line);
        }
        assert!(valid.iter().chain(invalid.iter()).all(|line| !line.is_empty()));

        // Reported lines follow input order
        let reported: Vec<_> = reporter.lines.iter().map(|(_, _, text)| text.clone()).collect();
        assert_eq!(reported, input, "{}", category);
    }
}

#[test]
fn test_category_outputs_use_file_stem() {
    let temp_dir = workspace(&Category::ALL);
    let classifier = FileClassifier::new(ClassifierConfig::rooted_at(temp_dir.path()));
    let output_dir = temp_dir.path().join("output");

    for category in Category::ALL {
        let result = classifier
            .classify_category(category, &mut RecordingReporter::default())
            .expect("Failed to classify");
        assert_eq!(
            result.valid_path,
            output_dir.join(format!("extracted_{}.txt", category.file_stem()))
        );
        assert_eq!(
            result.invalid_path,
            output_dir.join(format!("invalid_{}.txt", category.file_stem()))
        );
    }
}

#[test]
fn test_classification_is_idempotent() {
    let temp_dir = workspace(&[Category::Phone]);
    let classifier = FileClassifier::new(ClassifierConfig::rooted_at(temp_dir.path()));

    let first = classifier
        .classify_category(Category::Phone, &mut RecordingReporter::default())
        .expect("First pass failed");
    let valid_before = fs::read(&first.valid_path).expect("Failed to read valid output");
    let invalid_before = fs::read(&first.invalid_path).expect("Failed to read invalid output");

    let second = classifier
        .classify_category(Category::Phone, &mut RecordingReporter::default())
        .expect("Second pass failed");

    assert_eq!(first, second);
    assert_eq!(fs::read(&second.valid_path).unwrap(), valid_before);
    assert_eq!(fs::read(&second.invalid_path).unwrap(), invalid_before);
}

#[test]
fn test_outputs_are_truncated() {
    let temp_dir = workspace(&[Category::Email]);
    let output_dir = temp_dir.path().join("output");
    fs::create_dir_all(&output_dir).unwrap();
    fs::write(output_dir.join("extracted_email_address.txt"), "stale@old.com\n").unwrap();
    fs::write(output_dir.join("invalid_email_address.txt"), "stale\n").unwrap();

    let classifier = FileClassifier::new(ClassifierConfig::rooted_at(temp_dir.path()));
    let result = classifier
        .classify_category(Category::Email, &mut RecordingReporter::default())
        .expect("Failed to classify");

    assert_eq!(
        read_lines(&result.valid_path),
        ["user.name+tag@example.co", "admin@mail.example.org"]
    );
    assert_eq!(read_lines(&result.invalid_path), ["user@domain", "@example.com"]);
}

#[test]
fn test_missing_input_creates_no_outputs() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let classifier = FileClassifier::new(ClassifierConfig::rooted_at(temp_dir.path()));
    let mut reporter = RecordingReporter::default();

    let err = classifier
        .classify_category(Category::Url, &mut reporter)
        .expect_err("Missing input should fail");

    let expected = temp_dir.path().join("urls.txt");
    match err {
        ClassifyError::InputNotFound { path } => assert_eq!(path, expected),
        other => panic!("Unexpected error: {}", other),
    }
    assert_eq!(reporter.missing, vec![expected]);
    assert!(reporter.lines.is_empty());
    assert!(reporter.summaries.is_empty());

    let output_dir = temp_dir.path().join("output");
    assert!(output_dir.is_dir());
    assert_eq!(fs::read_dir(&output_dir).unwrap().count(), 0);
}

#[test]
fn test_missing_input_leaves_previous_outputs_alone() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let output_dir = temp_dir.path().join("output");
    fs::create_dir_all(&output_dir).unwrap();
    let previous = output_dir.join("extracted_URL_address.txt");
    fs::write(&previous, "https://kept.example.com\n").unwrap();

    let classifier = FileClassifier::new(ClassifierConfig::rooted_at(temp_dir.path()));
    assert!(classifier
        .classify_category(Category::Url, &mut RecordingReporter::default())
        .is_err());

    assert_eq!(read_lines(&previous), ["https://kept.example.com"]);
    assert!(!output_dir.join("invalid_URL_address.txt").exists());
}

#[test]
fn test_classify_with_custom_validator_and_label() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let input = temp_dir.path().join("words.txt");
    fs::write(&input, "alpha\n\n  beta  \n\t\ngamma\r\n").unwrap();

    let config = ClassifierConfig {
        input_dir: temp_dir.path().to_path_buf(),
        output_dir: temp_dir.path().join("nested").join("out"),
    };
    let classifier = FileClassifier::new(config);
    let mut reporter = RecordingReporter::default();

    let result = classifier
        .classify(
            &input,
            |line: &str| line.starts_with('a') || line.starts_with('g'),
            "word list",
            &mut reporter,
        )
        .expect("Failed to classify");

    assert_eq!(
        result.valid_path,
        temp_dir.path().join("nested/out/extracted_word_list.txt")
    );
    assert_eq!(read_lines(&result.valid_path), ["alpha", "gamma"]);
    assert_eq!(read_lines(&result.invalid_path), ["beta"]);
    assert_eq!(
        reporter.lines,
        vec![
            (1, true, "alpha".to_string()),
            (3, false, "beta".to_string()),
            (5, true, "gamma".to_string()),
        ]
    );
}

#[test]
fn test_empty_file() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let input = temp_dir.path().join("empty.txt");
    fs::write(&input, "\n   \n").unwrap();

    let classifier = FileClassifier::new(ClassifierConfig::rooted_at(temp_dir.path()));
    let result = classifier
        .classify(
            &input,
            patterns::check_email,
            "email address",
            &mut RecordingReporter::default(),
        )
        .expect("Failed to classify empty file");

    assert_eq!(result.total(), 0);
    assert_eq!(fs::read_to_string(&result.valid_path).unwrap(), "");
    assert_eq!(fs::read_to_string(&result.invalid_path).unwrap(), "");
}

#[test]
fn test_classify_all_continues_past_missing_inputs() {
    let temp_dir = workspace(&[Category::Currency, Category::Email]);
    let classifier = FileClassifier::new(ClassifierConfig::rooted_at(temp_dir.path()));
    let mut reporter = RecordingReporter::default();

    let outcomes = classifier.classify_all(&mut reporter);

    let order: Vec<_> = outcomes.iter().map(|(category, _)| *category).collect();
    assert_eq!(order, Category::ALL);

    for (category, outcome) in &outcomes {
        match category {
            Category::Currency | Category::Email => assert!(outcome.is_ok(), "{}", category),
            _ => assert!(
                matches!(outcome, Err(ClassifyError::InputNotFound { .. })),
                "{}",
                category
            ),
        }
    }
    assert_eq!(reporter.summaries.len(), 2);
    assert_eq!(reporter.missing.len(), 3);

    let output_dir = temp_dir.path().join("output");
    assert!(output_dir.join("extracted_email_address.txt").exists());
    assert!(!output_dir.join("extracted_phone_number.txt").exists());
}
