//! Fetch command implementation.
//!
//! The `modelprep fetch` command downloads one caller-specified file. It
//! exposes the same primitive the bulk download uses, but since the caller
//! asked for exactly this artifact, a failure is reflected in the exit
//! code.

use crate::cli::args::FetchArgs;
use crate::config::Settings;
use crate::error::Result;
use crate::hub::HubClient;
use crate::ui::Console;

use super::dispatcher::{Command, CommandResult};

/// The fetch command implementation.
pub struct FetchCommand {
    settings: Settings,
    args: FetchArgs,
}

impl FetchCommand {
    /// Create a new fetch command, applying CLI overrides to settings.
    pub fn new(settings: &Settings, args: FetchArgs) -> Self {
        let mut settings = settings.clone();
        if let Some(root) = &args.models_root {
            settings.models_root = root.clone();
        }
        Self { settings, args }
    }
}

impl Command for FetchCommand {
    fn execute(&self, console: &Console) -> Result<CommandResult> {
        let client = HubClient::new(&self.settings)?;

        tracing::info!("Fetching {}/{}", self.args.repo, self.args.file);
        let outcome = client.fetch(
            &self.args.repo,
            &self.args.file,
            self.args.category,
            &self.settings.models_root,
        );

        if outcome.success {
            console.success(&outcome.message);
            Ok(CommandResult::success())
        } else {
            console.error(&outcome.message);
            Ok(CommandResult::failure(1))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::{BuildProfile, Category};
    use std::path::PathBuf;

    #[test]
    fn models_root_override_applies() {
        let settings = Settings {
            hf_token: None,
            build_profile: BuildProfile::Standard,
            models_root: PathBuf::from("/workspace/models"),
            endpoint: "https://huggingface.co".to_string(),
        };
        let args = FetchArgs {
            repo: "acme/repo".to_string(),
            file: "model.bin".to_string(),
            category: Category::Checkpoints,
            models_root: Some(PathBuf::from("/tmp/models")),
        };
        let cmd = FetchCommand::new(&settings, args);
        assert_eq!(cmd.settings.models_root, PathBuf::from("/tmp/models"));
    }
}
