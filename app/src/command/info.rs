use lawbert_config::Config;
use lawbert_extract::collect_xml_files;

/// Strategy for displaying configuration information.
///
/// Outputs the resolved corpus paths, extraction pattern count, training
/// hyperparameters, and how many judgment files the input directories
/// currently hold.
#[derive(Debug, Clone, Copy)]
pub struct InfoStrategy;

impl super::CommandStrategy for InfoStrategy {
    type Input = ();

    fn execute(&self, (): Self::Input) -> anyhow::Result<()> {
        let config = Config::load()?;

        println!("=== lawbert Configuration ===\n");

        println!("Corpus:");
        if config.corpus.input_dirs.is_empty() {
            println!("  Input Dirs: (none configured)");
        } else {
            for dir in &config.corpus.input_dirs {
                println!("  Input Dir: {}", dir.display());
            }
            let files = collect_xml_files(&config.corpus.input_dirs);
            println!("  Judgment Files: {}", files.len());
        }
        println!("  Output Dir: {}", config.corpus.output_dir.display());
        println!(
            "  Normalized Output: {}",
            config.corpus.normalized_output.display()
        );
        println!();

        println!("Extraction:");
        let patterns = config.extraction.effective_patterns();
        let source = if config.extraction.patterns.is_empty() {
            "built-in defaults"
        } else {
            "config override"
        };
        println!("  Patterns: {} ({source})", patterns.len());
        println!();

        println!("Normalize:");
        println!(
            "  Extra Stopwords: {}",
            config.normalize.extra_stopwords.len()
        );
        println!();

        println!("Training:");
        println!("  Model: {}", config.training.model_id);
        println!("  Labels: {}", config.training.num_labels);
        println!("  Epochs: {}", config.training.epochs);
        println!("  Batch Size: {}", config.training.batch_size);
        println!("  Learning Rate: {}", config.training.learning_rate);
        println!("  Weight Decay: {}", config.training.weight_decay);
        println!("  Max Length: {}", config.training.max_length);
        println!("  Output Dir: {}", config.training.output_dir.display());

        Ok(())
    }
}
