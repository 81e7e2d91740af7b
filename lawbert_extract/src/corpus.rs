//! Corpus traversal and per-file processing.
//!
//! A corpus run walks the configured judgment directories, extracts one case
//! record per XML file, and writes it out in the key-per-line format. Files
//! that cannot be read or parsed are logged and skipped; a run never aborts
//! on a bad document.

use rayon::prelude::*;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use lawbert_core::{CaseField, CaseRecord};

use crate::clean::{clean_field, strip_watermark};
use crate::engine::CaseExtractor;
use crate::normalize::normalize_document;
use crate::xml::read_case_content;

/// Summary of one corpus processing run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CorpusReport {
    /// Records written to the output directory.
    pub written: usize,
    /// Files skipped because of read/parse failures.
    pub skipped: usize,
}

/// Recursively collect `*.xml` files under the given directories.
///
/// Hidden directories are skipped. The result is sorted so runs are
/// deterministic regardless of filesystem iteration order.
#[must_use]
pub fn collect_xml_files(dirs: &[PathBuf]) -> Vec<PathBuf> {
    let mut files = Vec::new();
    for dir in dirs {
        if let Err(e) = collect_recursive(dir, &mut files) {
            warn!("Cannot read directory {}: {e}", dir.display());
        }
    }
    files.sort();
    files
}

fn collect_recursive(path: &Path, files: &mut Vec<PathBuf>) -> std::io::Result<()> {
    for entry in std::fs::read_dir(path)? {
        let entry = entry?;
        let entry_path = entry.path();
        let name = entry.file_name().to_string_lossy().to_string();

        if name.starts_with('.') {
            continue;
        }

        if entry_path.is_dir() {
            collect_recursive(&entry_path, files)?;
        } else if entry_path.extension().is_some_and(|ext| ext == "xml") {
            files.push(entry_path);
        }
    }
    Ok(())
}

/// Process every XML file under `input_dirs` and write one record file per
/// document into `output_dir`.
///
/// # Errors
/// Returns an error only if the output directory cannot be created.
/// Per-file failures are logged with `warn!` and counted in the report.
pub fn process_corpus(
    extractor: &CaseExtractor,
    input_dirs: &[PathBuf],
    output_dir: &Path,
) -> std::io::Result<CorpusReport> {
    std::fs::create_dir_all(output_dir)?;

    let files = collect_xml_files(input_dirs);
    info!("Processing {} judgment files", files.len());

    let report = files
        .par_iter()
        .map(|file| match process_file(extractor, file, output_dir) {
            Ok(()) => CorpusReport {
                written: 1,
                skipped: 0,
            },
            Err(e) => {
                warn!("Skipping {}: {e}", file.display());
                CorpusReport {
                    written: 0,
                    skipped: 1,
                }
            }
        })
        .reduce(CorpusReport::default, |a, b| CorpusReport {
            written: a.written + b.written,
            skipped: a.skipped + b.skipped,
        });

    info!(
        "Corpus run complete: {} written, {} skipped",
        report.written, report.skipped
    );
    Ok(report)
}

fn process_file(
    extractor: &CaseExtractor,
    file: &Path,
    output_dir: &Path,
) -> Result<(), crate::xml::ExtractError> {
    let content = read_case_content(file)?;

    let mut record = extractor.extract(&content);
    record.map_values(|v| strip_watermark(&clean_field(v)));

    let out_path = output_dir.join(output_name(&record, file));
    std::fs::write(&out_path, render_record(&record))?;
    debug!("Wrote {}", out_path.display());
    Ok(())
}

/// Output filename for a record.
///
/// Named after the docket number; when that is missing the source file stem
/// is used instead, so unnumbered records do not clobber each other.
#[must_use]
pub fn output_name(record: &CaseRecord, source: &Path) -> String {
    if record.has_field(CaseField::CaseNumber) {
        format!("{}.txt", record.case_number)
    } else {
        let stem = source
            .file_stem()
            .map_or_else(|| "unknown".to_string(), |s| s.to_string_lossy().to_string());
        format!("{stem}.txt")
    }
}

/// Render a record in the key-per-line persistence format.
#[must_use]
pub fn render_record(record: &CaseRecord) -> String {
    let mut out = String::new();
    for (field, value) in record.iter() {
        out.push_str(field.as_str());
        out.push_str(": ");
        out.push_str(value);
        out.push_str("\n\n");
    }
    out
}

/// Read every XML file raw and normalize it for tokenization.
///
/// Mirrors the coarse preprocessing path: the whole file text (markup
/// included) is normalized, one output string per input file, in sorted
/// file order. Unreadable files are logged and skipped.
#[must_use]
pub fn normalize_corpus(input_dirs: &[PathBuf], extra_stopwords: &[String]) -> Vec<String> {
    let files = collect_xml_files(input_dirs);
    info!("Normalizing {} files", files.len());

    files
        .iter()
        .filter_map(|file| match std::fs::read_to_string(file) {
            Ok(raw) => Some(normalize_document(&raw, extra_stopwords)),
            Err(e) => {
                warn!("Skipping {}: {e}", file.display());
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use std::sync::atomic::{AtomicUsize, Ordering};

    static TEST_DIR_SEQ: AtomicUsize = AtomicUsize::new(0);

    fn temp_dir(tag: &str) -> PathBuf {
        let seq = TEST_DIR_SEQ.fetch_add(1, Ordering::SeqCst);
        let dir = std::env::temp_dir().join(format!(
            "lawbert_corpus_{tag}_{}_{seq}",
            std::process::id()
        ));
        #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
        std::fs::create_dir_all(&dir).expect("temp dir should be creatable");
        dir
    }

    const SAMPLE_XML: &str = "<doc><cn>서울고등법원 2020나12345 2021.3.18. \
        인정사실 원고는 피고에게 보증금을 지급하였다. \
        주 문 피고는 원고에게 지급하라. 판 단 이유는 다음과 같다.</cn></doc>";

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn test_collect_xml_files_recursive_sorted() {
        let root = temp_dir("collect");
        let sub = root.join("2020");
        std::fs::create_dir_all(&sub).expect("subdir should be creatable");
        std::fs::write(root.join("b.xml"), "<doc/>").expect("write should succeed");
        std::fs::write(sub.join("a.xml"), "<doc/>").expect("write should succeed");
        std::fs::write(root.join("notes.txt"), "x").expect("write should succeed");

        let files = collect_xml_files(&[root.clone()]);
        assert_eq!(files.len(), 2);
        assert!(files[0].ends_with("2020/a.xml"));
        assert!(files[1].ends_with("b.xml"));

        std::fs::remove_dir_all(&root).expect("cleanup should succeed");
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn test_process_corpus_roundtrip() {
        let input = temp_dir("in");
        let output = temp_dir("out");
        std::fs::write(input.join("case1.xml"), SAMPLE_XML).expect("write should succeed");
        std::fs::write(input.join("broken.xml"), "<doc><cn>x</doc>").expect("write should succeed");

        let extractor = CaseExtractor::with_defaults().expect("default extractor should build");
        let report =
            process_corpus(&extractor, &[input.clone()], &output).expect("run should succeed");

        assert_eq!(report, CorpusReport { written: 1, skipped: 1 });

        let saved = std::fs::read_to_string(output.join("2020나12345.txt"))
            .expect("record file should exist");
        assert!(saved.contains("case_number: 2020나12345"));
        assert!(saved.contains("court: 서울고등법원"));
        assert!(saved.contains("legal_issue: 법적 쟁점 없음"));

        std::fs::remove_dir_all(&input).expect("cleanup should succeed");
        std::fs::remove_dir_all(&output).expect("cleanup should succeed");
    }

    #[test]
    fn test_output_name_falls_back_to_stem() {
        let record = CaseRecord::default();
        let name = output_name(&record, Path::new("/corpus/2020/doc_17.xml"));
        assert_eq!(name, "doc_17.txt");
    }

    #[test]
    fn test_output_name_uses_case_number() {
        let mut record = CaseRecord::default();
        record.set(CaseField::CaseNumber, "2020나12345".to_string());
        let name = output_name(&record, Path::new("doc.xml"));
        assert_eq!(name, "2020나12345.txt");
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn test_render_record_parses_back() {
        let mut record = CaseRecord::default();
        record.set(CaseField::Court, "대법원".to_string());
        let rendered = render_record(&record);

        for line in rendered.lines().filter(|l| !l.is_empty()) {
            let (key, value) = line.split_once(": ").expect("line should be key: value");
            let field = CaseField::from_str(key).expect("key should parse");
            assert_eq!(record.get(field), value);
        }
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn test_normalize_corpus() {
        let input = temp_dir("norm");
        std::fs::write(input.join("a.xml"), "<doc><cn>원고 는 피고</cn></doc>")
            .expect("write should succeed");

        let docs = normalize_corpus(&[input.clone()], &[]);
        assert_eq!(docs.len(), 1);
        // Markup brackets are stripped, the stopword 는 is dropped
        assert_eq!(docs[0], "doccn원고 피고cndoc");

        std::fs::remove_dir_all(&input).expect("cleanup should succeed");
    }
}
