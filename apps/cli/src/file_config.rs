//! TOML configuration file handling.
//!
//! `playlift.toml` example:
//!
//! ```toml
//! application_name = "example-publisher"
//! package_name = "com.example.app"
//! token_file = "/secure/play-access-token"
//!
//! [publish]
//! track = "alpha"
//! apk = "app/build/outputs/apk/release/app-release.apk"
//!
//! [promote]
//! track = "alpha"
//! promote_track = "beta"
//! ```
//!
//! Command-line flags override file values; the access token comes from
//! `token_file` or the `PLAYLIFT_ACCESS_TOKEN` environment variable.

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;

use playlift_release::{AppConfig, PromoteConfig, PublishConfig};

use crate::args::{PromoteArgs, PublishArgs};

/// Environment variable consulted when no token file is configured.
pub const TOKEN_ENV: &str = "PLAYLIFT_ACCESS_TOKEN";

/// On-disk configuration file.
#[derive(Debug, Default, Deserialize)]
pub struct FileConfig {
    /// Application name, sent as the HTTP User-Agent.
    #[serde(default = "default_application_name")]
    pub application_name: String,

    /// Store package name, e.g. `com.example.app`.
    #[serde(default)]
    pub package_name: String,

    /// File holding the OAuth access token.
    #[serde(default)]
    pub token_file: String,

    /// Override of the service base URL.
    #[serde(default)]
    pub base_url: Option<String>,

    #[serde(default)]
    pub publish: PublishSection,

    #[serde(default)]
    pub promote: PromoteSection,
}

#[derive(Debug, Default, Deserialize)]
pub struct PublishSection {
    #[serde(default)]
    pub track: String,
    #[serde(default)]
    pub apk: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct PromoteSection {
    #[serde(default)]
    pub track: String,
    #[serde(default)]
    pub promote_track: String,
}

fn default_application_name() -> String {
    "playlift".into()
}

impl FileConfig {
    /// Loads the configuration file. A missing file yields defaults so the
    /// CLI can run from flags and the environment alone.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self {
                application_name: default_application_name(),
                ..Self::default()
            });
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("parsing config file {}", path.display()))
    }

    fn access_token(&self) -> anyhow::Result<String> {
        if !self.token_file.is_empty() {
            let token = std::fs::read_to_string(&self.token_file)
                .with_context(|| format!("reading token file {}", self.token_file))?;
            return Ok(token.trim().to_string());
        }
        if let Ok(token) = std::env::var(TOKEN_ENV)
            && !token.is_empty()
        {
            return Ok(token);
        }
        anyhow::bail!("no access token: set token_file in the config or {TOKEN_ENV}")
    }

    fn app_config(&self, package_override: Option<&str>) -> anyhow::Result<AppConfig> {
        Ok(AppConfig {
            application_name: self.application_name.clone(),
            package_name: package_override
                .map(str::to_string)
                .unwrap_or_else(|| self.package_name.clone()),
            access_token: self.access_token()?,
            base_url: self.base_url.clone(),
        })
    }
}

/// Builds the publish configuration from file values and flag overrides.
pub fn resolve_publish(path: &Path, args: &PublishArgs) -> anyhow::Result<PublishConfig> {
    let file = FileConfig::load(path)?;
    let app = file.app_config(args.package.as_deref())?;
    Ok(PublishConfig {
        app,
        track: args
            .track
            .clone()
            .unwrap_or_else(|| file.publish.track.clone()),
        artifact_path: args
            .apk
            .clone()
            .unwrap_or_else(|| PathBuf::from(&file.publish.apk)),
    })
}

/// Builds the promote configuration from file values and flag overrides.
pub fn resolve_promote(path: &Path, args: &PromoteArgs) -> anyhow::Result<PromoteConfig> {
    let file = FileConfig::load(path)?;
    let app = file.app_config(args.package.as_deref())?;
    Ok(PromoteConfig {
        app,
        track: args
            .from
            .clone()
            .unwrap_or_else(|| file.promote.track.clone()),
        promote_track: args
            .to
            .clone()
            .unwrap_or_else(|| file.promote.promote_track.clone()),
    })
}
