//! Text cleaning for extracted field values.
//!
//! Two layers: `clean_field` flattens one extracted value into a single
//! normalized line, `strip_watermark` removes the search-service pagination
//! watermark that leaks into the decision bodies of this corpus.

use once_cell::sync::Lazy;
use regex::Regex;

#[expect(clippy::unwrap_used, reason = "Pattern literals are known valid")]
static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

#[expect(clippy::unwrap_used, reason = "Pattern literals are known valid")]
static URL: Lazy<Regex> = Lazy::new(|| Regex::new(r"http[s]?://\S+").unwrap());

#[expect(clippy::unwrap_used, reason = "Pattern literals are known valid")]
static WATERMARK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\| 리걸엔진 AI 판례 검색 \d+/\d+").unwrap());

#[expect(clippy::unwrap_used, reason = "Pattern literals are known valid")]
static NEWLINE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n+").unwrap());

/// Flatten an extracted field value into one normalized line.
///
/// URLs are dropped, newlines become spaces, and whitespace runs collapse to
/// a single space.
#[must_use]
pub fn clean_field(value: &str) -> String {
    let flat = URL.replace_all(value, "");
    let flat = flat.replace('\n', " ");
    let flat = WHITESPACE_RUN.replace_all(&flat, " ");
    flat.trim().to_string()
}

/// Remove the pagination watermark and normalize whitespace.
#[must_use]
pub fn strip_watermark(text: &str) -> String {
    let text = WATERMARK.replace_all(text, "");
    let text = NEWLINE_RUN.replace_all(&text, "\n");
    let text = WHITESPACE_RUN.replace_all(&text, " ");
    text.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_field_flattens_newlines() {
        assert_eq!(clean_field("원고는\n피고에게\n지급하였다"), "원고는 피고에게 지급하였다");
    }

    #[test]
    fn test_clean_field_collapses_whitespace() {
        assert_eq!(clean_field("  주   문\t피고는  "), "주 문 피고는");
    }

    #[test]
    fn test_clean_field_strips_urls() {
        assert_eq!(
            clean_field("판례 원문 https://example.com/case/123 참조"),
            "판례 원문 참조"
        );
        assert_eq!(clean_field("http://example.com 앞부분"), "앞부분");
    }

    #[test]
    fn test_strip_watermark() {
        let text = "주문 내용 | 리걸엔진 AI 판례 검색 3/12 이어지는 내용";
        assert_eq!(strip_watermark(text), "주문 내용 이어지는 내용");
    }

    #[test]
    fn test_strip_watermark_normalizes_whitespace() {
        assert_eq!(strip_watermark("첫 줄\n\n\n둘째   줄"), "첫 줄 둘째 줄");
    }

    #[test]
    fn test_clean_field_empty() {
        assert_eq!(clean_field("   "), "");
    }
}
