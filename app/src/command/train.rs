use lawbert_config::Config;
use lawbert_train::{load_training_data, run_finetune};
use tracing::info;

/// Input parameters for the Train command strategy.
#[derive(Debug, Clone)]
pub struct TrainInput {
    /// Pretrained model id override.
    pub model: Option<String>,
}

/// Strategy for fine-tuning the classifier.
///
/// Prepares the labeled dataset from the extraction output, then hands it to
/// the candle fine-tuning glue.
#[derive(Debug, Clone, Copy)]
pub struct TrainStrategy;

impl super::CommandStrategy for TrainStrategy {
    type Input = TrainInput;

    fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let config = Config::load()?;

        let mut training = config.training.clone();
        if let Some(model) = input.model {
            training.model_id = model;
        }

        info!(
            "Preparing training data from {}",
            config.corpus.output_dir.display()
        );
        let examples = load_training_data(&config.corpus.output_dir, training.default_label)?;
        anyhow::ensure!(
            !examples.is_empty(),
            "No training examples found in {}: run 'lawbert extract' first",
            config.corpus.output_dir.display()
        );

        run_finetune(&training, &examples)?;

        println!(
            "Fine-tuning complete; classifier saved under {}",
            training.output_dir.display()
        );
        Ok(())
    }
}
