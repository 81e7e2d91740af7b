use lawbert_config::Config;
use lawbert_extract::{CaseExtractor, process_corpus};
use std::path::PathBuf;
use tracing::info;

/// Input parameters for the Extract command strategy.
#[derive(Debug, Clone)]
pub struct ExtractInput {
    /// Input directory overrides; empty means use the config.
    pub input: Vec<PathBuf>,
    /// Output directory override.
    pub output: Option<PathBuf>,
}

/// Strategy for extracting case records from judgment XML files.
///
/// Loads the configuration, builds the extraction engine from the effective
/// pattern set, and runs the corpus processor.
#[derive(Debug, Clone, Copy)]
pub struct ExtractStrategy;

impl super::CommandStrategy for ExtractStrategy {
    type Input = ExtractInput;

    fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let config = Config::load()?;

        let input_dirs = if input.input.is_empty() {
            config.corpus.input_dirs.clone()
        } else {
            input.input
        };
        anyhow::ensure!(
            !input_dirs.is_empty(),
            "No input directories: set corpus.input_dirs in the config or pass --input"
        );

        let output_dir = input.output.unwrap_or_else(|| config.corpus.output_dir.clone());

        let patterns = config.extraction.effective_patterns();
        let extractor = CaseExtractor::new(&patterns)?;
        info!("Extraction engine ready with {} patterns", extractor.pattern_count());

        let report = process_corpus(&extractor, &input_dirs, &output_dir)?;

        println!(
            "Extracted {} records into {} ({} files skipped)",
            report.written,
            output_dir.display(),
            report.skipped
        );
        Ok(())
    }
}
