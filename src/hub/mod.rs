//! Hugging Face artifact fetching.
//!
//! [`HubClient`] resolves `{repo, file}` pairs against the Hugging Face
//! resolve endpoint and downloads them into category subdirectories under
//! the models root. Downloads are resumable: bytes land in a `.partial`
//! file that is continued with a `Range` request if a previous run was
//! interrupted, and renamed into place on completion.
//!
//! Every failure mode (network, auth, missing object, disk) is collapsed
//! into a [`FetchOutcome`] at this boundary. Callers decide whether a
//! failed fetch is fatal; the client never panics or propagates.

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{bail, Context};
use reqwest::blocking::Client;
use reqwest::StatusCode;

use crate::config::Settings;
use crate::error::{PrepError, Result};
use crate::manifest::Category;

/// Suffix for in-progress downloads.
const PARTIAL_SUFFIX: &str = ".partial";

/// Default per-request timeout. Model weights are multi-gigabyte files, so
/// this is generous compared to a typical API client.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(3600);

/// Result of one fetch attempt: a success flag plus a human-readable
/// message. Both paths must be handled by the caller.
#[derive(Debug, Clone)]
pub struct FetchOutcome {
    /// Whether the artifact is now present under the destination.
    pub success: bool,
    /// Human-readable description of what happened.
    pub message: String,
}

impl FetchOutcome {
    fn succeeded(message: String) -> Self {
        Self {
            success: true,
            message,
        }
    }

    fn failed(message: String) -> Self {
        Self {
            success: false,
            message,
        }
    }
}

/// How a successful fetch completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Completion {
    /// Destination file already existed; no network I/O performed.
    AlreadyPresent,
    /// Full download from byte zero.
    Downloaded(u64),
    /// Continued from a partial file left by an earlier run.
    Resumed(u64),
}

/// Fetches model artifacts over HTTPS.
pub struct HubClient {
    client: Client,
    endpoint: String,
    token: Option<String>,
}

impl HubClient {
    /// Create a client from resolved settings with the default timeout.
    pub fn new(settings: &Settings) -> Result<Self> {
        Self::with_timeout(settings, DEFAULT_TIMEOUT)
    }

    /// Create a client with a custom per-request timeout.
    pub fn with_timeout(settings: &Settings, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("modelprep/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .map_err(|e| PrepError::ClientBuild {
                message: e.to_string(),
            })?;

        Ok(Self {
            client,
            endpoint: settings.endpoint.clone(),
            token: settings.hf_token.clone(),
        })
    }

    /// Resolve the download URL for a file within a repository.
    pub fn resolve_url(&self, repo: &str, file: &str) -> String {
        format!("{}/{}/resolve/main/{}", self.endpoint, repo, file)
    }

    /// Fetch one artifact into `root/<category>/<file>`.
    ///
    /// Creates the destination directory if absent. An already-complete
    /// destination file reports success without touching the network.
    pub fn fetch(&self, repo: &str, file: &str, category: Category, root: &Path) -> FetchOutcome {
        match self.try_fetch(repo, file, category, root) {
            Ok(Completion::AlreadyPresent) => {
                tracing::debug!("{}/{} already present, skipping", repo, file);
                FetchOutcome::succeeded(format!("Already present: {}/{}", repo, file))
            }
            Ok(Completion::Downloaded(bytes)) => {
                tracing::debug!("{}/{} downloaded ({} bytes)", repo, file, bytes);
                FetchOutcome::succeeded(format!("Downloaded: {}/{}", repo, file))
            }
            Ok(Completion::Resumed(bytes)) => {
                tracing::debug!("{}/{} resumed ({} bytes total)", repo, file, bytes);
                FetchOutcome::succeeded(format!("Downloaded (resumed): {}/{}", repo, file))
            }
            Err(e) => {
                tracing::debug!("{}/{} failed: {:#}", repo, file, e);
                FetchOutcome::failed(format!("Failed to download {}/{}: {:#}", repo, file, e))
            }
        }
    }

    fn try_fetch(
        &self,
        repo: &str,
        file: &str,
        category: Category,
        root: &Path,
    ) -> anyhow::Result<Completion> {
        let target_dir = root.join(category.dir_name());
        fs::create_dir_all(&target_dir)
            .with_context(|| format!("creating {}", target_dir.display()))?;

        let dest = target_dir.join(file);
        if dest.is_file() {
            return Ok(Completion::AlreadyPresent);
        }

        let partial = partial_path(&dest);
        let offset = fs::metadata(&partial).map(|m| m.len()).unwrap_or(0);

        let url = self.resolve_url(repo, file);
        let mut request = self.client.get(&url);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }
        if offset > 0 {
            request = request.header(reqwest::header::RANGE, format!("bytes={}-", offset));
        }

        let mut response = request.send()?;
        let status = response.status();

        let resuming = offset > 0 && status == StatusCode::PARTIAL_CONTENT;
        if !resuming && !status.is_success() {
            bail!("HTTP {} fetching {}", status, url);
        }

        // A 200 despite a Range request means the server ignored the range;
        // start over from byte zero.
        let mut out = OpenOptions::new()
            .create(true)
            .append(resuming)
            .write(true)
            .truncate(!resuming)
            .open(&partial)
            .with_context(|| format!("opening {}", partial.display()))?;

        let written = response.copy_to(&mut out)?;
        drop(out);

        fs::rename(&partial, &dest)
            .with_context(|| format!("finalizing {}", dest.display()))?;

        if resuming {
            Ok(Completion::Resumed(offset + written))
        } else {
            Ok(Completion::Downloaded(written))
        }
    }
}

/// Path of the in-progress file for a destination.
fn partial_path(dest: &Path) -> PathBuf {
    let mut name = dest
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(PARTIAL_SUFFIX);
    dest.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::BuildProfile;
    use httpmock::prelude::*;
    use tempfile::TempDir;

    fn settings_for(endpoint: &str, token: Option<&str>) -> Settings {
        Settings {
            hf_token: token.map(String::from),
            build_profile: BuildProfile::Standard,
            models_root: PathBuf::from("/unused"),
            endpoint: endpoint.trim_end_matches('/').to_string(),
        }
    }

    #[test]
    fn resolve_url_joins_endpoint_repo_and_file() {
        let settings = settings_for("https://huggingface.co", None);
        let client = HubClient::new(&settings).unwrap();
        assert_eq!(
            client.resolve_url("Comfy-Org/flux1-dev", "flux1-dev-fp8.safetensors"),
            "https://huggingface.co/Comfy-Org/flux1-dev/resolve/main/flux1-dev-fp8.safetensors"
        );
    }

    #[test]
    fn fetch_downloads_into_category_dir() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/acme/repo/resolve/main/model.bin");
            then.status(200).body("weights");
        });

        let root = TempDir::new().unwrap();
        let settings = settings_for(&server.base_url(), None);
        let client = HubClient::new(&settings).unwrap();

        let outcome = client.fetch("acme/repo", "model.bin", Category::Checkpoints, root.path());

        mock.assert();
        assert!(outcome.success);
        assert!(outcome.message.contains("acme/repo/model.bin"));
        let dest = root.path().join("checkpoints/model.bin");
        assert_eq!(fs::read_to_string(dest).unwrap(), "weights");
    }

    #[test]
    fn fetch_sends_bearer_token_when_configured() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/gated/repo/resolve/main/model.bin")
                .header("authorization", "Bearer hf_secret");
            then.status(200).body("ok");
        });

        let root = TempDir::new().unwrap();
        let settings = settings_for(&server.base_url(), Some("hf_secret"));
        let client = HubClient::new(&settings).unwrap();

        let outcome = client.fetch("gated/repo", "model.bin", Category::Vae, root.path());

        mock.assert();
        assert!(outcome.success);
    }

    #[test]
    fn fetch_reports_failure_on_http_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/acme/repo/resolve/main/missing.bin");
            then.status(404);
        });

        let root = TempDir::new().unwrap();
        let settings = settings_for(&server.base_url(), None);
        let client = HubClient::new(&settings).unwrap();

        let outcome = client.fetch("acme/repo", "missing.bin", Category::Vae, root.path());

        assert!(!outcome.success);
        assert!(outcome.message.contains("Failed to download"));
        assert!(outcome.message.contains("404"));
        assert!(!root.path().join("vae/missing.bin").exists());
    }

    #[test]
    fn fetch_reports_failure_on_unreachable_host() {
        // Reserved port with nothing listening.
        let settings = settings_for("http://127.0.0.1:1", None);
        let client = HubClient::new(&settings).unwrap();
        let root = TempDir::new().unwrap();

        let outcome = client.fetch("acme/repo", "model.bin", Category::Vae, root.path());

        assert!(!outcome.success);
        assert!(outcome.message.contains("Failed to download"));
    }

    #[test]
    fn fetch_skips_already_complete_file() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/acme/repo/resolve/main/model.bin");
            then.status(200).body("weights");
        });

        let root = TempDir::new().unwrap();
        let dir = root.path().join("checkpoints");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("model.bin"), "weights").unwrap();

        let settings = settings_for(&server.base_url(), None);
        let client = HubClient::new(&settings).unwrap();

        let outcome = client.fetch("acme/repo", "model.bin", Category::Checkpoints, root.path());

        assert!(outcome.success);
        assert!(outcome.message.contains("Already present"));
        mock.assert_hits(0);
    }

    #[test]
    fn fetch_resumes_partial_download() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/acme/repo/resolve/main/model.bin")
                .header("range", "bytes=4-");
            then.status(206).body("hts");
        });

        let root = TempDir::new().unwrap();
        let dir = root.path().join("checkpoints");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("model.bin.partial"), "weig").unwrap();

        let settings = settings_for(&server.base_url(), None);
        let client = HubClient::new(&settings).unwrap();

        let outcome = client.fetch("acme/repo", "model.bin", Category::Checkpoints, root.path());

        mock.assert();
        assert!(outcome.success);
        assert!(outcome.message.contains("resumed"));
        let dest = dir.join("model.bin");
        assert_eq!(fs::read_to_string(dest).unwrap(), "weights");
        assert!(!dir.join("model.bin.partial").exists());
    }

    #[test]
    fn fetch_restarts_when_server_ignores_range() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/acme/repo/resolve/main/model.bin");
            then.status(200).body("weights");
        });

        let root = TempDir::new().unwrap();
        let dir = root.path().join("checkpoints");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("model.bin.partial"), "stale-prefix").unwrap();

        let settings = settings_for(&server.base_url(), None);
        let client = HubClient::new(&settings).unwrap();

        let outcome = client.fetch("acme/repo", "model.bin", Category::Checkpoints, root.path());

        assert!(outcome.success);
        assert_eq!(
            fs::read_to_string(dir.join("model.bin")).unwrap(),
            "weights"
        );
    }

    #[test]
    fn partial_path_appends_suffix() {
        let dest = PathBuf::from("/models/vae/ae.safetensors");
        assert_eq!(
            partial_path(&dest),
            PathBuf::from("/models/vae/ae.safetensors.partial")
        );
    }
}
