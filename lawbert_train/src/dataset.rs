//! Training-data preparation from extracted record files.
//!
//! Records saved by the extraction step are reloaded from their key-per-line
//! files, composed into a Korean-labeled input text, and paired with a class
//! label. A file only becomes a training example when all six fields are
//! present; anything else is logged and skipped.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;
use tracing::{info, warn};

use lawbert_core::{CaseField, CaseRecord};
use lawbert_extract::strip_watermark;

/// One labeled input for the classifier.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TrainingExample {
    pub text: String,
    pub label: u32,
}

/// Parse a key-per-line record file back into a `CaseRecord`.
///
/// Returns `None` unless every one of the six field keys is present.
#[must_use]
pub fn parse_record(text: &str) -> Option<CaseRecord> {
    let mut record = CaseRecord::default();
    let mut seen = [false; 6];

    for line in text.lines() {
        let Some((key, value)) = line.split_once(": ") else {
            continue;
        };
        let Ok(field) = CaseField::from_str(key) else {
            continue;
        };
        record.set(field, value.trim().to_string());
        seen[field as usize] = true;
    }

    if seen.iter().all(|s| *s) {
        Some(record)
    } else {
        None
    }
}

/// Compose the labeled input text fed to the model.
#[must_use]
pub fn compose_input(record: &CaseRecord) -> String {
    let lines: Vec<String> = record
        .iter()
        .map(|(field, value)| format!("{}: {value}", field.label()))
        .collect();
    lines.join("\n")
}

/// Load every record file from `records_dir` and build training examples.
///
/// Empty files and files missing any field are skipped with a warning,
/// matching the tolerance of the extraction step. Files are visited in
/// sorted order so the dataset is deterministic.
///
/// # Errors
/// Returns an error if the records directory itself cannot be read.
pub fn load_training_data(records_dir: &Path, label: u32) -> anyhow::Result<Vec<TrainingExample>> {
    let mut paths: Vec<_> = std::fs::read_dir(records_dir)?
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .collect();
    paths.sort();

    let mut examples = Vec::new();
    for path in paths {
        let content = match std::fs::read_to_string(&path) {
            Ok(c) => c,
            Err(e) => {
                warn!("Cannot read {}: {e}", path.display());
                continue;
            }
        };

        if content.trim().is_empty() {
            warn!("Skipping empty file: {}", path.display());
            continue;
        }

        match parse_record(&content) {
            Some(record) => {
                let text = strip_watermark(&compose_input(&record));
                examples.push(TrainingExample { text, label });
            }
            None => {
                warn!("Skipping incomplete record: {}", path.display());
            }
        }
    }

    info!(
        "Loaded {} training examples from {}",
        examples.len(),
        records_dir.display()
    );
    Ok(examples)
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL_RECORD: &str = "case_number: 2020나12345\n\n\
        judgment_date: 2021.3.18\n\n\
        court: 서울고등법원\n\n\
        background: 원고는 피고에게 보증금을 지급하였다\n\n\
        legal_issue: 법적 쟁점 없음\n\n\
        decision: 피고는 원고에게 지급하라\n\n";

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn test_parse_full_record() {
        let record = parse_record(FULL_RECORD).expect("complete record should parse");
        assert_eq!(record.case_number, "2020나12345");
        assert_eq!(record.court, "서울고등법원");
        // Sentinel values still count as present fields
        assert_eq!(record.legal_issue, CaseField::LegalIssue.sentinel());
    }

    #[test]
    fn test_parse_rejects_missing_field() {
        let partial = "case_number: 2020나12345\n\ncourt: 대법원\n\n";
        assert!(parse_record(partial).is_none());
    }

    #[test]
    fn test_parse_ignores_unknown_keys() {
        let with_extra = format!("{FULL_RECORD}note: 내부 메모\n");
        assert!(parse_record(&with_extra).is_some());
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn test_compose_input_uses_korean_labels() {
        let record = parse_record(FULL_RECORD).expect("complete record should parse");
        let input = compose_input(&record);

        assert!(input.starts_with("사건 번호: 2020나12345"));
        assert!(input.contains("법원: 서울고등법원"));
        assert!(input.contains("결정: 피고는 원고에게 지급하라"));
        assert_eq!(input.lines().count(), 6);
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn test_load_training_data() {
        let dir = std::env::temp_dir().join(format!("lawbert_dataset_{}", std::process::id()));
        std::fs::create_dir_all(&dir).expect("temp dir should be creatable");
        std::fs::write(dir.join("2020나12345.txt"), FULL_RECORD).expect("write should succeed");
        std::fs::write(dir.join("empty.txt"), "").expect("write should succeed");
        std::fs::write(dir.join("partial.txt"), "court: 대법원\n").expect("write should succeed");

        let examples = load_training_data(&dir, 1).expect("load should succeed");
        assert_eq!(examples.len(), 1);
        assert_eq!(examples[0].label, 1);
        assert!(examples[0].text.contains("사건 번호: 2020나12345"));

        std::fs::remove_dir_all(&dir).expect("cleanup should succeed");
    }
}
