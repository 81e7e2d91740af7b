//! Static strategy pattern for CLI commands.
//!
//! Each command is a separate strategy with its own input type, dispatched
//! statically from `main`. The pipeline is synchronous end to end, so the
//! strategies are plain functions behind a trait.

mod extract;
mod info;
mod init;
mod normalize;
mod train;
mod version;

pub use extract::{ExtractInput, ExtractStrategy};
pub use info::InfoStrategy;
pub use init::InitStrategy;
pub use normalize::{NormalizeInput, NormalizeStrategy};
pub use train::{TrainInput, TrainStrategy};
pub use version::VersionStrategy;

/// Core trait defining the contract for all command strategies.
///
/// Each strategy defines its own input type via an associated type, enabling
/// type-safe parameter passing without runtime casting or boxing.
pub trait CommandStrategy {
    /// The input type this strategy accepts.
    type Input;

    /// Execute the command with the given input.
    ///
    /// # Errors
    /// Returns an error if command execution fails.
    fn execute(&self, input: Self::Input) -> anyhow::Result<()>;
}
