//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::manifest::{BuildProfile, Category};

/// modelprep - model weight provisioning and runtime validation.
#[derive(Debug, Parser)]
#[command(name = "modelprep")]
#[command(author, version, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Download the model weights for the configured build profile
    Download(DownloadArgs),

    /// Download a single file from a Hugging Face repository
    Fetch(FetchArgs),

    /// Validate the installed PyTorch/CUDA runtime
    Validate(ValidateArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `download` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct DownloadArgs {
    /// Build profile (overrides BUILD_TYPE)
    #[arg(long, value_name = "PROFILE")]
    pub profile: Option<BuildProfile>,

    /// Destination root for model weights (overrides MODELS_ROOT)
    #[arg(long, value_name = "DIR")]
    pub models_root: Option<PathBuf>,
}

/// Arguments for the `fetch` command.
#[derive(Debug, Clone, clap::Args)]
pub struct FetchArgs {
    /// Hugging Face repository id (e.g. "Comfy-Org/flux1-dev")
    pub repo: String,

    /// File name within the repository
    pub file: String,

    /// Destination category under the models root
    #[arg(short, long, default_value = "checkpoints")]
    pub category: Category,

    /// Destination root for model weights (overrides MODELS_ROOT)
    #[arg(long, value_name = "DIR")]
    pub models_root: Option<PathBuf>,
}

/// Arguments for the `validate` command.
#[derive(Debug, Clone, clap::Args)]
pub struct ValidateArgs {
    /// Python interpreter used to probe the runtime
    #[arg(long, env = "PYTHON", default_value = "python3")]
    pub python: String,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
