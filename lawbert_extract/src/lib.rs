#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

pub mod clean;
pub mod corpus;
pub mod engine;
pub mod normalize;
pub mod patterns;
pub mod xml;

pub use clean::{clean_field, strip_watermark};
pub use corpus::{CorpusReport, collect_xml_files, normalize_corpus, process_corpus};
pub use engine::CaseExtractor;
pub use normalize::{KOREAN_STOPWORDS, normalize_document};
pub use patterns::{BuildError, PatternDef, default_patterns};
pub use xml::{ExtractError, read_case_content};
