use lawbert_config::Config;

/// Strategy for initializing the configuration.
///
/// Creates the default configuration file at `~/lawbert/config.json`.
#[derive(Debug, Clone, Copy)]
pub struct InitStrategy;

impl super::CommandStrategy for InitStrategy {
    type Input = ();

    fn execute(&self, (): Self::Input) -> anyhow::Result<()> {
        Config::create_config()
    }
}
