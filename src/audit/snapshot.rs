//! Runtime snapshot probing.
//!
//! The numerical runtime lives in Python, so introspection means running
//! the interpreter: a one-shot `python -c` script imports torch and prints
//! a JSON object on stdout, which is parsed into [`RuntimeSnapshot`]. The
//! snapshot is queried fresh on every invocation and never cached.

use std::process::Command;

use serde::Deserialize;

use crate::error::{PrepError, Result};

/// Inline introspection script handed to the interpreter.
///
/// Device queries are guarded on availability: `torch.version.cuda` is None
/// on CPU-only builds and `get_device_name` raises without a device.
const PROBE_SCRIPT: &str = r#"
import json
import torch

available = torch.cuda.is_available()
info = {
    "torch_version": torch.__version__,
    "cuda_available": available,
    "cuda_version": torch.version.cuda if available else None,
    "cudnn_version": torch.backends.cudnn.version() if available else None,
    "device_count": torch.cuda.device_count() if available else 0,
    "device_names": [
        torch.cuda.get_device_name(i) for i in range(torch.cuda.device_count())
    ] if available else [],
}
print(json.dumps(info))
"#;

/// Read-only view of the installed PyTorch/CUDA stack.
#[derive(Debug, Clone, Deserialize)]
pub struct RuntimeSnapshot {
    /// PyTorch version string (e.g. "2.8.0+cu128").
    pub torch_version: String,
    /// Whether the CUDA runtime reports an available accelerator.
    pub cuda_available: bool,
    /// CUDA version PyTorch was built against, if available.
    #[serde(default)]
    pub cuda_version: Option<String>,
    /// cuDNN version number, if available.
    #[serde(default)]
    pub cudnn_version: Option<u64>,
    /// Number of visible accelerator devices.
    #[serde(default)]
    pub device_count: u32,
    /// Name of each visible device, indexed by device ordinal.
    #[serde(default)]
    pub device_names: Vec<String>,
}

/// Probe the runtime by running `python -c` with the introspection script.
///
/// Any failure along the way (interpreter missing, torch not importable,
/// unparseable output) is reported as [`PrepError::ProbeFailed`].
pub fn probe_runtime(python: &str) -> Result<RuntimeSnapshot> {
    tracing::debug!("Probing runtime via {}", python);

    let output = Command::new(python)
        .arg("-c")
        .arg(PROBE_SCRIPT)
        .output()
        .map_err(|e| PrepError::ProbeFailed {
            message: format!("could not run '{}': {}", python, e),
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(PrepError::ProbeFailed {
            message: format!(
                "'{}' exited with {}: {}",
                python,
                output
                    .status
                    .code()
                    .map(|c| c.to_string())
                    .unwrap_or_else(|| "signal".to_string()),
                stderr.trim()
            ),
        });
    }

    parse_snapshot(&output.stdout)
}

/// Parse probe output into a snapshot.
pub fn parse_snapshot(raw: &[u8]) -> Result<RuntimeSnapshot> {
    serde_json::from_slice(raw).map_err(|e| PrepError::ProbeFailed {
        message: format!("unparseable probe output: {}", e),
    })
}
