//! Streaming extraction of the decision body from judgment XML files.
//!
//! Judgment documents carry the full decision text in a `<cn>` element. The
//! reader below streams events and accumulates text and CDATA inside the
//! first non-empty `<cn>`; surrounding structure is ignored.

use quick_xml::Reader;
use quick_xml::events::Event;
use std::path::Path;

/// Errors raised while reading a single judgment file.
///
/// These are reported per file by the corpus loop; they never abort a run.
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    #[error("cannot read file: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed XML: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("document has no <cn> content")]
    MissingContent,
}

const CONTENT_TAG: &[u8] = b"cn";

/// Read the decision body from the first non-empty `<cn>` element of an XML
/// file.
///
/// # Errors
/// Returns an error if the file is unreadable, the XML is malformed, or the
/// document has no non-empty `<cn>` element.
pub fn read_case_content(path: &Path) -> Result<String, ExtractError> {
    let raw = std::fs::read_to_string(path)?;
    parse_case_content(&raw)
}

/// Parse the decision body out of an XML document string.
///
/// # Errors
/// Returns an error if the XML is malformed or `<cn>` is missing or empty.
pub fn parse_case_content(xml: &str) -> Result<String, ExtractError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut depth = 0_usize;
    let mut content = String::new();

    loop {
        match reader.read_event()? {
            Event::Start(ref e) if e.name().as_ref() == CONTENT_TAG => depth += 1,
            Event::End(ref e) if e.name().as_ref() == CONTENT_TAG => {
                depth = depth.saturating_sub(1);
                if depth == 0 && !content.trim().is_empty() {
                    break;
                }
            }
            Event::Text(ref e) if depth > 0 => {
                if let Ok(text) = e.unescape() {
                    if !text.is_empty() {
                        if !content.is_empty() {
                            content.push(' ');
                        }
                        content.push_str(&text);
                    }
                }
            }
            Event::CData(e) if depth > 0 => {
                let bytes = e.into_inner();
                if !content.is_empty() {
                    content.push(' ');
                }
                content.push_str(&String::from_utf8_lossy(&bytes));
            }
            Event::Eof => break,
            _ => {}
        }
    }

    let content = content.trim().to_string();
    if content.is_empty() {
        return Err(ExtractError::MissingContent);
    }
    Ok(content)
}
