//! Extraction engine for structured case records.
//!
//! The engine applies configured regex patterns to the decision body of one
//! judgment document and fills a `CaseRecord`. Extraction is total: a field
//! whose patterns never match keeps its sentinel value.

use lawbert_core::{CaseField, CaseRecord};

use crate::patterns::{BuildError, FieldPattern, PatternDef, default_patterns};

/// Extraction engine holding a compiled pattern set.
///
/// Patterns are compiled once at construction; the corpus loop applies them
/// to every file.
pub struct CaseExtractor {
    patterns: Vec<FieldPattern>,
}

impl CaseExtractor {
    /// Create an extractor from pattern definitions.
    ///
    /// # Errors
    /// Returns an error if any pattern fails to compile. Compilation failures
    /// surface here, never per document.
    pub fn new(defs: &[PatternDef]) -> Result<Self, BuildError> {
        let patterns = defs
            .iter()
            .map(PatternDef::build)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { patterns })
    }

    /// Create an extractor with the default corpus-tuned patterns.
    ///
    /// # Errors
    /// Returns an error if default pattern compilation fails.
    pub fn with_defaults() -> Result<Self, BuildError> {
        Self::new(&default_patterns())
    }

    /// Extract a case record from a decision body.
    ///
    /// For each field, patterns are tried in definition order and the first
    /// match supplies the value. Missing fields degrade to sentinels.
    #[must_use]
    pub fn extract(&self, content: &str) -> CaseRecord {
        let mut record = CaseRecord::default();

        for pattern in &self.patterns {
            if record.has_field(pattern.field) {
                continue;
            }
            if let Some(value) = Self::apply_pattern(pattern, content) {
                record.set(pattern.field, value);
            }
        }

        record
    }

    /// Apply a single pattern. A match whose capture group did not
    /// participate counts as no match.
    fn apply_pattern(pattern: &FieldPattern, content: &str) -> Option<String> {
        let caps = pattern.regex.captures(content)?;
        let value = caps.get(pattern.group)?.as_str().trim();
        if value.is_empty() {
            return None;
        }
        Some(value.to_string())
    }

    /// Number of compiled patterns.
    #[must_use]
    pub fn pattern_count(&self) -> usize {
        self.patterns.len()
    }

    /// Fields that at least one compiled pattern targets.
    #[must_use]
    pub fn covered_fields(&self) -> Vec<CaseField> {
        let mut fields: Vec<CaseField> = Vec::new();
        for pattern in &self.patterns {
            if !fields.contains(&pattern.field) {
                fields.push(pattern.field);
            }
        }
        fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "서울고등법원 제3민사부 판결 2020나12345 \
        선고일 2021.3.18. \
        인정사실 원고는 2019.5.1. 피고에게 임대차보증금을 지급하였다. \
        주 문 피고는 원고에게 3,000만 원을 지급하라. \
        판 단 위 인정사실에 의하면 피고의 반환 의무가 인정된다.";

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn test_extractor_with_defaults() {
        let extractor = CaseExtractor::with_defaults().expect("default extractor should build");
        assert_eq!(extractor.pattern_count(), 6);
        assert_eq!(extractor.covered_fields().len(), 6);
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn test_extract_metadata() {
        let extractor = CaseExtractor::with_defaults().expect("default extractor should build");
        let record = extractor.extract(SAMPLE);

        assert_eq!(record.case_number, "2020나12345");
        assert_eq!(record.court, "서울고등법원");
        assert_eq!(record.judgment_date, "2021.3.18");
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn test_extract_sections() {
        let extractor = CaseExtractor::with_defaults().expect("default extractor should build");
        let record = extractor.extract(SAMPLE);

        assert!(record.background.contains("임대차보증금을 지급하였다"));
        assert!(!record.background.contains("주 문"));
        assert!(record.decision.contains("3,000만 원을 지급하라"));
        assert!(!record.decision.contains("판 단"));
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn test_missing_fields_keep_sentinels() {
        let extractor = CaseExtractor::with_defaults().expect("default extractor should build");
        let record = extractor.extract(SAMPLE);

        // No 쟁점 section in the sample
        assert_eq!(record.legal_issue, CaseField::LegalIssue.sentinel());
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn test_unrelated_text_is_all_sentinels() {
        let extractor = CaseExtractor::with_defaults().expect("default extractor should build");
        let record = extractor.extract("오늘 날씨가 맑다");

        assert_eq!(record, CaseRecord::default());
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn test_first_match_wins() {
        let defs = vec![
            PatternDef {
                id: "first".to_string(),
                field: "court".to_string(),
                pattern: "(대법원)".to_string(),
                group: 1,
            },
            PatternDef {
                id: "second".to_string(),
                field: "court".to_string(),
                pattern: "(서울고등법원)".to_string(),
                group: 1,
            },
        ];
        let extractor = CaseExtractor::new(&defs).expect("extractor should build");
        let record = extractor.extract("서울고등법원을 거쳐 대법원에 상고하였다");

        assert_eq!(record.court, "대법원");
    }

    #[test]
    fn test_bad_pattern_fails_construction() {
        let defs = vec![PatternDef {
            id: "bad".to_string(),
            field: "court".to_string(),
            pattern: "(unclosed".to_string(),
            group: 1,
        }];
        assert!(CaseExtractor::new(&defs).is_err());
    }
}
