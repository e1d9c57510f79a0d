//! Validate command implementation.
//!
//! The `modelprep validate` command probes the installed PyTorch/CUDA
//! stack, prints an environment info block, and checks the reported
//! versions against the pins the worker images are built with. Exit code 0
//! iff all checks pass.

use crate::audit::{probe_runtime, run_checks, RuntimeSnapshot};
use crate::cli::args::ValidateArgs;
use crate::error::{PrepError, Result};
use crate::ui::{Console, StatusKind};

use super::dispatcher::{Command, CommandResult};

/// The validate command implementation.
pub struct ValidateCommand {
    args: ValidateArgs,
}

impl ValidateCommand {
    /// Create a new validate command.
    pub fn new(args: ValidateArgs) -> Self {
        Self { args }
    }

    /// Print the environment info block.
    fn show_snapshot(&self, console: &Console, snapshot: &RuntimeSnapshot) {
        console.kv("PyTorch version", &snapshot.torch_version);
        console.kv(
            "CUDA available",
            if snapshot.cuda_available { "yes" } else { "no" },
        );
        if let Some(cuda) = &snapshot.cuda_version {
            console.kv("CUDA version", cuda);
        }
        if let Some(cudnn) = snapshot.cudnn_version {
            console.kv("cuDNN version", &cudnn.to_string());
        }
        console.kv("GPU count", &snapshot.device_count.to_string());
        for (i, name) in snapshot.device_names.iter().enumerate() {
            console.kv(&format!("GPU {}", i), name);
        }
    }
}

impl Command for ValidateCommand {
    fn execute(&self, console: &Console) -> Result<CommandResult> {
        console.header("Environment validation");

        let snapshot = match probe_runtime(&self.args.python) {
            Ok(snapshot) => snapshot,
            Err(PrepError::ProbeFailed { message }) => {
                console.error(&format!("Runtime probe failed: {}", message));
                return Ok(CommandResult::failure(1));
            }
            Err(e) => return Err(e),
        };

        self.show_snapshot(console, &snapshot);
        console.message("");

        let checks = run_checks(&snapshot);
        let mut all_ok = true;
        for check in &checks {
            if check.passed {
                console.status(StatusKind::Success, &check.detail);
            } else {
                console.status(StatusKind::Warning, &check.detail);
                all_ok = false;
            }
        }

        console.message("");
        if all_ok {
            console.success("All checks passed, environment is correctly set up");
            Ok(CommandResult::success())
        } else {
            console.error("Environment validation found problems");
            Ok(CommandResult::failure(1))
        }
    }
}
