//! modelprep - model weight provisioning and runtime validation.
//!
//! modelprep is the provisioning companion for containerized ComfyUI
//! workers: it downloads the model weights a build profile calls for from
//! Hugging Face, and validates that the image's PyTorch/CUDA stack matches
//! the versions the deployment pins.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface, commands, and dispatching
//! - [`config`] - Process-wide settings resolved from the environment
//! - [`manifest`] - Build profiles and the fixed artifact sets
//! - [`hub`] - Hugging Face artifact fetching with resume support
//! - [`audit`] - Runtime probing and version checks
//! - [`ui`] - Themed terminal output
//! - [`error`] - Error types and result aliases
//!
//! # Example
//!
//! ```
//! use modelprep::manifest::{artifacts_for, BuildProfile};
//!
//! // The artifact set is a fixed function of the build profile.
//! let standard = artifacts_for(BuildProfile::Standard);
//! assert_eq!(standard.len(), 4);
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod error;
pub mod hub;
pub mod manifest;
pub mod ui;

pub use error::{PrepError, Result};
