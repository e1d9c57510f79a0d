//! Version checks over a runtime snapshot.
//!
//! Two independent checks, combined by logical AND: the PyTorch version
//! must be in the 2.8 series, and CUDA must be available with a version
//! starting with "12.8". Neither check depends on the other's result.

use crate::audit::RuntimeSnapshot;

/// Expected PyTorch major version.
pub const EXPECTED_TORCH_MAJOR: u64 = 2;

/// Expected PyTorch minor version.
pub const EXPECTED_TORCH_MINOR: u64 = 8;

/// Expected CUDA version prefix.
pub const EXPECTED_CUDA_PREFIX: &str = "12.8";

/// Result of one audit check.
#[derive(Debug, Clone)]
pub struct Check {
    /// Short name of the check.
    pub name: &'static str,
    /// Whether the check passed.
    pub passed: bool,
    /// Human-readable detail (expected vs. found on failure).
    pub detail: String,
}

impl Check {
    fn pass(name: &'static str, detail: String) -> Self {
        Self {
            name,
            passed: true,
            detail,
        }
    }

    fn fail(name: &'static str, detail: String) -> Self {
        Self {
            name,
            passed: false,
            detail,
        }
    }
}

/// Run all checks against a snapshot.
pub fn run_checks(snapshot: &RuntimeSnapshot) -> Vec<Check> {
    vec![
        check_torch_version(&snapshot.torch_version),
        check_cuda(snapshot.cuda_available, snapshot.cuda_version.as_deref()),
    ]
}

/// Whether every check in a set passed.
pub fn all_passed(checks: &[Check]) -> bool {
    checks.iter().all(|c| c.passed)
}

/// Check that the PyTorch version is in the expected series.
///
/// The version string is split on `.` and padded with zero components to at
/// least three, so "2.8" is treated as "2.8.0". Non-numeric major/minor
/// components fail the check cleanly rather than aborting.
pub fn check_torch_version(version: &str) -> Check {
    let mut parts: Vec<&str> = version.split('.').collect();
    while parts.len() < 3 {
        parts.push("0");
    }

    let (major, minor) = match (parts[0].parse::<u64>(), parts[1].parse::<u64>()) {
        (Ok(major), Ok(minor)) => (major, minor),
        _ => {
            return Check::fail(
                "pytorch",
                format!("Unparseable PyTorch version string: '{}'", version),
            )
        }
    };

    if major != EXPECTED_TORCH_MAJOR || minor != EXPECTED_TORCH_MINOR {
        return Check::fail(
            "pytorch",
            format!(
                "Expected PyTorch {}.{}.x, found: {}",
                EXPECTED_TORCH_MAJOR, EXPECTED_TORCH_MINOR, version
            ),
        );
    }

    Check::pass("pytorch", format!("PyTorch version {} is correct", version))
}

/// Check that CUDA is available and in the expected series.
pub fn check_cuda(available: bool, version: Option<&str>) -> Check {
    if !available {
        return Check::fail("cuda", "CUDA is not available".to_string());
    }

    let version = match version {
        Some(v) => v,
        None => {
            return Check::fail(
                "cuda",
                "CUDA reported available but no version string".to_string(),
            )
        }
    };

    if !version.starts_with(EXPECTED_CUDA_PREFIX) {
        return Check::fail(
            "cuda",
            format!(
                "Expected CUDA {}, found: {}",
                EXPECTED_CUDA_PREFIX, version
            ),
        );
    }

    Check::pass("cuda", format!("CUDA version {} is correct", version))
}
