//! Whole-document corpus normalization.
//!
//! This is the coarse preprocessing path used before tokenization: strip
//! URLs, keep only Korean / ASCII-alphanumeric / whitespace characters,
//! lowercase, and drop stopwords. The stopword table is a static lookup
//! tuned to this corpus, extendable via configuration.

use once_cell::sync::Lazy;
use regex::Regex;

/// Built-in Korean stopwords (particles and high-frequency verbs).
pub const KOREAN_STOPWORDS: &[&str] = &[
    "을", "를", "이", "가", "은", "는", "에", "하다", "있다", "되다",
];

#[expect(clippy::unwrap_used, reason = "Pattern literals are known valid")]
static URL: Lazy<Regex> = Lazy::new(|| Regex::new(r"http[s]?://\S+").unwrap());

#[expect(clippy::unwrap_used, reason = "Pattern literals are known valid")]
static NON_TEXT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^ㄱ-ㅎㅏ-ㅣ가-힣a-zA-Z0-9\s]").unwrap());

/// Normalize one raw document for tokenization.
///
/// `extra_stopwords` extends the built-in table; both are matched against
/// whole whitespace-separated words after lowercasing.
#[must_use]
pub fn normalize_document(text: &str, extra_stopwords: &[String]) -> String {
    let text = URL.replace_all(text, "");
    let text = NON_TEXT.replace_all(&text, "");
    let text = text.to_lowercase();

    let words: Vec<&str> = text
        .split_whitespace()
        .filter(|word| {
            !KOREAN_STOPWORDS.contains(word) && !extra_stopwords.iter().any(|s| s == word)
        })
        .collect();

    words.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_removes_stopwords() {
        let out = normalize_document("원고 는 피고 에 지급 하다", &[]);
        assert_eq!(out, "원고 피고 지급");
    }

    #[test]
    fn test_extra_stopwords() {
        let extra = vec!["원고".to_string()];
        let out = normalize_document("원고 피고", &extra);
        assert_eq!(out, "피고");
    }

    #[test]
    fn test_strips_special_characters() {
        let out = normalize_document("주문: 피고(법인)는 3,000만원!", &[]);
        assert_eq!(out, "주문 피고법인는 3000만원");
    }

    #[test]
    fn test_strips_urls() {
        let out = normalize_document("판례 https://example.com/x?y=1 검색", &[]);
        assert_eq!(out, "판례 검색");
    }

    #[test]
    fn test_lowercases_ascii() {
        let out = normalize_document("Seoul High COURT", &[]);
        assert_eq!(out, "seoul high court");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(normalize_document("   ", &[]), "");
    }
}
