//! Runtime environment auditing.
//!
//! The worker images pin PyTorch 2.8 built against CUDA 12.8. This module
//! probes the installed runtime ([`snapshot`]) and checks what it reports
//! against those pins ([`checks`]). The probe does process I/O; the checks
//! are pure functions over the snapshot so they can be tested without a
//! GPU in sight.

pub mod checks;
pub mod snapshot;

pub use checks::{run_checks, Check};
pub use snapshot::{probe_runtime, RuntimeSnapshot};
