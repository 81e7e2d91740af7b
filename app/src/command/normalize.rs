use lawbert_config::Config;
use lawbert_extract::normalize_corpus;
use std::io::Write;
use std::path::PathBuf;

/// Input parameters for the Normalize command strategy.
#[derive(Debug, Clone)]
pub struct NormalizeInput {
    /// Output file override.
    pub output: Option<PathBuf>,
}

/// Strategy for normalizing the raw corpus.
///
/// Writes one normalized document per line so downstream tokenization can
/// stream the corpus.
#[derive(Debug, Clone, Copy)]
pub struct NormalizeStrategy;

impl super::CommandStrategy for NormalizeStrategy {
    type Input = NormalizeInput;

    fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let config = Config::load()?;
        anyhow::ensure!(
            !config.corpus.input_dirs.is_empty(),
            "No input directories: set corpus.input_dirs in the config"
        );

        let output = input
            .output
            .unwrap_or_else(|| config.corpus.normalized_output.clone());

        let documents = normalize_corpus(
            &config.corpus.input_dirs,
            &config.normalize.extra_stopwords,
        );

        let mut file = std::fs::File::create(&output)?;
        for doc in &documents {
            writeln!(file, "{doc}")?;
        }

        println!(
            "Normalized {} documents into {}",
            documents.len(),
            output.display()
        );
        Ok(())
    }
}
