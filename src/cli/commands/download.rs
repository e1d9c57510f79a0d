//! Download command implementation.
//!
//! The `modelprep download` command fetches the artifact set for the
//! configured build profile, sequentially, continuing past individual
//! failures. It always exits 0: this runs as one step of an image build
//! pipeline where a missing optional weight should not fail the build.

use crate::cli::args::DownloadArgs;
use crate::config::Settings;
use crate::error::Result;
use crate::hub::HubClient;
use crate::manifest::{artifacts_for, BuildProfile};
use crate::ui::{Console, StatusKind};

use super::dispatcher::{Command, CommandResult};

/// The download command implementation.
pub struct DownloadCommand {
    settings: Settings,
}

impl DownloadCommand {
    /// Create a new download command, applying CLI overrides to settings.
    pub fn new(settings: &Settings, args: DownloadArgs) -> Self {
        let mut settings = settings.clone();
        if let Some(profile) = args.profile {
            settings.build_profile = profile;
        }
        if let Some(root) = args.models_root {
            settings.models_root = root;
        }
        Self { settings }
    }

    /// Get the effective settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }
}

impl Command for DownloadCommand {
    fn execute(&self, console: &Console) -> Result<CommandResult> {
        let profile = self.settings.build_profile;
        console.header(&format!("Model downloads (profile: {})", profile));

        if profile == BuildProfile::Minimal {
            console.status(
                StatusKind::Info,
                "Minimal build - skipping model downloads",
            );
            return Ok(CommandResult::success());
        }

        let artifacts = artifacts_for(profile);
        let client = HubClient::new(&self.settings)?;

        let mut failed = 0usize;
        for artifact in &artifacts {
            tracing::info!("Fetching {}/{}", artifact.repo, artifact.file);
            let outcome = client.fetch(
                artifact.repo,
                artifact.file,
                artifact.category,
                &self.settings.models_root,
            );
            if outcome.success {
                console.success(&outcome.message);
            } else {
                // Non-fatal: report and move on to the next artifact.
                console.warning(&outcome.message);
                failed += 1;
            }
        }

        if failed == 0 {
            console.success("Model download complete");
        } else {
            console.warning(&format!(
                "Model download complete with {} of {} artifacts failed",
                failed,
                artifacts.len()
            ));
        }

        Ok(CommandResult::success())
    }
}
