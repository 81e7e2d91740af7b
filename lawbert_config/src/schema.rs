use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// Pattern definitions live in lawbert_extract; the config only carries them
use lawbert_extract::PatternDef;

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub corpus: CorpusConfig,
    #[serde(default)]
    pub extraction: ExtractionConfig,
    #[serde(default)]
    pub normalize: NormalizeConfig,
    #[serde(default)]
    pub training: TrainingConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct CorpusConfig {
    /// Directories scanned recursively for judgment XML files.
    #[serde(default)]
    pub input_dirs: Vec<PathBuf>,
    #[serde(default = "CorpusConfig::default_output_dir")]
    pub output_dir: PathBuf,
    #[serde(default = "CorpusConfig::default_normalized_output")]
    pub normalized_output: PathBuf,
}

impl Default for CorpusConfig {
    fn default() -> Self {
        Self {
            input_dirs: Vec::new(),
            output_dir: Self::default_output_dir(),
            normalized_output: Self::default_normalized_output(),
        }
    }
}

impl CorpusConfig {
    fn default_output_dir() -> PathBuf {
        PathBuf::from("preprocess_result")
    }

    fn default_normalized_output() -> PathBuf {
        PathBuf::from("normalized_corpus.txt")
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct ExtractionConfig {
    /// Pattern override; when empty the built-in default set is used.
    #[serde(default)]
    pub patterns: Vec<PatternDef>,
}

impl ExtractionConfig {
    /// The effective pattern set: the override when given, otherwise the
    /// built-in defaults.
    #[must_use]
    pub fn effective_patterns(&self) -> Vec<PatternDef> {
        if self.patterns.is_empty() {
            lawbert_extract::default_patterns()
        } else {
            self.patterns.clone()
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct NormalizeConfig {
    /// Stopwords added on top of the built-in table.
    #[serde(default)]
    pub extra_stopwords: Vec<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct TrainingConfig {
    #[serde(default = "TrainingConfig::default_model_id")]
    pub model_id: String,
    #[serde(default = "TrainingConfig::default_num_labels")]
    pub num_labels: usize,
    /// Class label assigned to every prepared example.
    #[serde(default)]
    pub default_label: u32,
    #[serde(default = "TrainingConfig::default_epochs")]
    pub epochs: usize,
    #[serde(default = "TrainingConfig::default_batch_size")]
    pub batch_size: usize,
    #[serde(default = "TrainingConfig::default_learning_rate")]
    pub learning_rate: f64,
    #[serde(default = "TrainingConfig::default_weight_decay")]
    pub weight_decay: f64,
    #[serde(default = "TrainingConfig::default_max_length")]
    pub max_length: usize,
    #[serde(default = "TrainingConfig::default_output_dir")]
    pub output_dir: PathBuf,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            model_id: Self::default_model_id(),
            num_labels: Self::default_num_labels(),
            default_label: 0,
            epochs: Self::default_epochs(),
            batch_size: Self::default_batch_size(),
            learning_rate: Self::default_learning_rate(),
            weight_decay: Self::default_weight_decay(),
            max_length: Self::default_max_length(),
            output_dir: Self::default_output_dir(),
        }
    }
}

impl TrainingConfig {
    fn default_model_id() -> String {
        "nlpaueb/legal-bert-base-uncased".to_string()
    }

    const fn default_num_labels() -> usize {
        2
    }

    const fn default_epochs() -> usize {
        3
    }

    const fn default_batch_size() -> usize {
        8
    }

    const fn default_learning_rate() -> f64 {
        2e-5
    }

    const fn default_weight_decay() -> f64 {
        0.01
    }

    const fn default_max_length() -> usize {
        512
    }

    fn default_output_dir() -> PathBuf {
        PathBuf::from("results")
    }
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            anyhow::bail!(
                "Config file not found at: {}. Please run 'lawbert init' to create config.",
                config_path.display()
            );
        }

        let content = std::fs::read_to_string(&config_path)?;
        let config: Self = serde_json::from_str(&content)?;
        tracing::debug!("Loaded config from {}", config_path.display());

        Ok(config)
    }

    pub fn config_path() -> anyhow::Result<PathBuf> {
        let config_dir = dirs::home_dir()
            .ok_or_else(|| anyhow::anyhow!("Cannot find home directory"))?
            .join("lawbert");
        Ok(config_dir.join("config.json"))
    }

    pub fn ensure_config_dir() -> anyhow::Result<PathBuf> {
        let config_dir = dirs::home_dir()
            .ok_or_else(|| anyhow::anyhow!("Cannot find home directory"))?
            .join("lawbert");

        std::fs::create_dir_all(&config_dir)?;
        Ok(config_dir)
    }

    pub fn create_config() -> anyhow::Result<()> {
        let config_dir = Self::ensure_config_dir()?;
        let config_path = config_dir.join("config.json");

        if config_path.exists() {
            anyhow::bail!(
                "Config file already exists at: {}. Please edit it directly.",
                config_path.display()
            );
        }

        let config_template = r#"{
  "corpus": {
    "input_dirs": [
      "data/judgments/01.civil",
      "data/judgments/02.criminal",
      "data/judgments/03.administrative"
    ],
    "output_dir": "preprocess_result",
    "normalized_output": "normalized_corpus.txt"
  },
  "extraction": {
    "patterns": []
  },
  "normalize": {
    "extra_stopwords": []
  },
  "training": {
    "model_id": "nlpaueb/legal-bert-base-uncased",
    "num_labels": 2,
    "default_label": 0,
    "epochs": 3,
    "batch_size": 8,
    "learning_rate": 2e-5,
    "weight_decay": 0.01,
    "max_length": 512,
    "output_dir": "results"
  }
}"#;

        std::fs::write(&config_path, config_template)?;

        println!("✅ Created config file at: {}", config_path.display());
        println!();
        println!("📝 Next steps:");
        println!("   1. Point corpus.input_dirs at your judgment XML directories");
        println!("   2. Run 'lawbert extract' to build the record files");
        println!("   3. Run 'lawbert train' to fine-tune the classifier");
        println!();
        println!("🔧 Configuration options:");
        println!("   - extraction.patterns: override the built-in field patterns");
        println!("   - normalize.extra_stopwords: extend the stopword table");
        println!("   - training.model_id: pretrained model to fine-tune");
        println!();
        Ok(())
    }
}
