//! Structured case record types.
//!
//! A case record is the six-field representation extracted from one XML
//! judgment document. Fields that cannot be located by pattern matching keep
//! their sentinel value, so a record is always complete and printable.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// One of the six extracted fields of a case record.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum CaseField {
    /// Docket number, e.g. "2020나12345"
    CaseNumber = 0,
    /// Judgment date, e.g. "2020.5.12"
    JudgmentDate = 1,
    /// Deciding court, e.g. "서울고등법원"
    Court = 2,
    /// Established facts section (인정사실)
    Background = 3,
    /// Contested legal issue section (쟁점)
    LegalIssue = 4,
    /// Order / conclusion section (주문)
    Decision = 5,
}

impl CaseField {
    /// All fields in canonical persistence order.
    pub const ALL: [Self; 6] = [
        Self::CaseNumber,
        Self::JudgmentDate,
        Self::Court,
        Self::Background,
        Self::LegalIssue,
        Self::Decision,
    ];

    /// Stable key used in the key-per-line persistence format.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::CaseNumber => "case_number",
            Self::JudgmentDate => "judgment_date",
            Self::Court => "court",
            Self::Background => "background",
            Self::LegalIssue => "legal_issue",
            Self::Decision => "decision",
        }
    }

    /// Korean label used when composing training inputs.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::CaseNumber => "사건 번호",
            Self::JudgmentDate => "판결 날짜",
            Self::Court => "법원",
            Self::Background => "배경",
            Self::LegalIssue => "법적 쟁점",
            Self::Decision => "결정",
        }
    }

    /// Placeholder substituted when the extraction pattern fails to match.
    #[must_use]
    pub const fn sentinel(&self) -> &'static str {
        match self {
            Self::CaseNumber => "사건 번호 없음",
            Self::JudgmentDate => "판결 날짜 없음",
            Self::Court => "법원 정보 없음",
            Self::Background => "사건 개요 없음",
            Self::LegalIssue => "법적 쟁점 없음",
            Self::Decision => "판결 요약 없음",
        }
    }
}

impl FromStr for CaseField {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "case_number" => Ok(Self::CaseNumber),
            "judgment_date" => Ok(Self::JudgmentDate),
            "court" => Ok(Self::Court),
            "background" => Ok(Self::Background),
            "legal_issue" => Ok(Self::LegalIssue),
            "decision" => Ok(Self::Decision),
            _ => Err("unknown case field"),
        }
    }
}

/// The six-field structured representation of one judgment document.
///
/// Every field defaults to its sentinel, so partially matched documents still
/// produce a usable record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CaseRecord {
    pub case_number: String,
    pub judgment_date: String,
    pub court: String,
    pub background: String,
    pub legal_issue: String,
    pub decision: String,
}

impl Default for CaseRecord {
    fn default() -> Self {
        Self {
            case_number: CaseField::CaseNumber.sentinel().to_string(),
            judgment_date: CaseField::JudgmentDate.sentinel().to_string(),
            court: CaseField::Court.sentinel().to_string(),
            background: CaseField::Background.sentinel().to_string(),
            legal_issue: CaseField::LegalIssue.sentinel().to_string(),
            decision: CaseField::Decision.sentinel().to_string(),
        }
    }
}

impl CaseRecord {
    /// Get the value of a field.
    #[must_use]
    pub fn get(&self, field: CaseField) -> &str {
        match field {
            CaseField::CaseNumber => &self.case_number,
            CaseField::JudgmentDate => &self.judgment_date,
            CaseField::Court => &self.court,
            CaseField::Background => &self.background,
            CaseField::LegalIssue => &self.legal_issue,
            CaseField::Decision => &self.decision,
        }
    }

    /// Set the value of a field.
    pub fn set(&mut self, field: CaseField, value: String) {
        match field {
            CaseField::CaseNumber => self.case_number = value,
            CaseField::JudgmentDate => self.judgment_date = value,
            CaseField::Court => self.court = value,
            CaseField::Background => self.background = value,
            CaseField::LegalIssue => self.legal_issue = value,
            CaseField::Decision => self.decision = value,
        }
    }

    /// Whether the field holds a real extracted value, not its sentinel.
    #[must_use]
    pub fn has_field(&self, field: CaseField) -> bool {
        self.get(field) != field.sentinel()
    }

    /// Iterate fields and values in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (CaseField, &str)> {
        CaseField::ALL.into_iter().map(|f| (f, self.get(f)))
    }

    /// Apply a string transformation to every field value.
    pub fn map_values<F>(&mut self, mut f: F)
    where
        F: FnMut(&str) -> String,
    {
        for field in CaseField::ALL {
            let cleaned = f(self.get(field));
            self.set(field, cleaned);
        }
    }
}
