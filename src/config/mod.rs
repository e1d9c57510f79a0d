//! Process-wide settings.
//!
//! All environment variables are read here, once, at startup. Component
//! logic receives a populated [`Settings`] by reference and never touches
//! the environment itself.
//!
//! Recognized variables:
//! - `HF_TOKEN` — optional bearer credential for gated Hugging Face repos
//! - `BUILD_TYPE` — build profile (`minimal`/`standard`/`full`)
//! - `MODELS_ROOT` — destination root for downloaded weights
//! - `HF_ENDPOINT` — Hugging Face endpoint override (same variable the
//!   official tooling honors; also used to point tests at a mock server)

use std::path::PathBuf;

use crate::manifest::BuildProfile;

/// Default destination root inside worker images.
pub const DEFAULT_MODELS_ROOT: &str = "/workspace/models";

/// Default Hugging Face endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://huggingface.co";

/// Resolved process-wide configuration.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Bearer credential for gated repos. Absent for public artifacts.
    pub hf_token: Option<String>,
    /// Build profile selecting the artifact set.
    pub build_profile: BuildProfile,
    /// Destination root for downloaded weights.
    pub models_root: PathBuf,
    /// Hugging Face endpoint, without trailing slash.
    pub endpoint: String,
}

impl Settings {
    /// Populate settings from the process environment.
    pub fn from_env() -> Self {
        Self::from_env_with(|key| std::env::var(key))
    }

    /// Populate settings with a custom env var lookup function.
    ///
    /// This allows testing without modifying actual environment variables.
    pub fn from_env_with<F>(env_fn: F) -> Self
    where
        F: Fn(&str) -> Result<String, std::env::VarError>,
    {
        let hf_token = env_fn("HF_TOKEN").ok().filter(|t| !t.is_empty());

        let build_profile = match env_fn("BUILD_TYPE") {
            Ok(raw) => raw.parse().unwrap_or_else(|_| {
                // A typo'd BUILD_TYPE must not silently change what gets
                // downloaded; warn and use the default profile.
                tracing::warn!(
                    "Unrecognized BUILD_TYPE '{}', falling back to '{}'",
                    raw,
                    BuildProfile::default()
                );
                BuildProfile::default()
            }),
            Err(_) => BuildProfile::default(),
        };

        let models_root = env_fn("MODELS_ROOT")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_MODELS_ROOT));

        let endpoint = env_fn("HF_ENDPOINT")
            .map(|e| e.trim_end_matches('/').to_string())
            .unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string());

        Self {
            hf_token,
            build_profile,
            models_root,
            endpoint,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::env::VarError;

    fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Result<String, VarError> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned().ok_or(VarError::NotPresent)
    }

    #[test]
    fn defaults_when_env_is_empty() {
        let settings = Settings::from_env_with(env_from(&[]));
        assert_eq!(settings.hf_token, None);
        assert_eq!(settings.build_profile, BuildProfile::Standard);
        assert_eq!(settings.models_root, PathBuf::from(DEFAULT_MODELS_ROOT));
        assert_eq!(settings.endpoint, DEFAULT_ENDPOINT);
    }

    #[test]
    fn reads_token_and_profile() {
        let settings = Settings::from_env_with(env_from(&[
            ("HF_TOKEN", "hf_abc123"),
            ("BUILD_TYPE", "full"),
        ]));
        assert_eq!(settings.hf_token.as_deref(), Some("hf_abc123"));
        assert_eq!(settings.build_profile, BuildProfile::Full);
    }

    #[test]
    fn empty_token_treated_as_absent() {
        let settings = Settings::from_env_with(env_from(&[("HF_TOKEN", "")]));
        assert_eq!(settings.hf_token, None);
    }

    #[test]
    fn unrecognized_build_type_falls_back_to_standard() {
        let settings = Settings::from_env_with(env_from(&[("BUILD_TYPE", "experimental")]));
        assert_eq!(settings.build_profile, BuildProfile::Standard);
    }

    #[test]
    fn build_type_is_case_insensitive() {
        let settings = Settings::from_env_with(env_from(&[("BUILD_TYPE", "MINIMAL")]));
        assert_eq!(settings.build_profile, BuildProfile::Minimal);
    }

    #[test]
    fn models_root_override() {
        let settings = Settings::from_env_with(env_from(&[("MODELS_ROOT", "/tmp/models")]));
        assert_eq!(settings.models_root, PathBuf::from("/tmp/models"));
    }

    #[test]
    fn endpoint_trailing_slash_is_stripped() {
        let settings =
            Settings::from_env_with(env_from(&[("HF_ENDPOINT", "http://127.0.0.1:9999/")]));
        assert_eq!(settings.endpoint, "http://127.0.0.1:9999");
    }
}
