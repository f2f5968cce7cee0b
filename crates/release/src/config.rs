//! Validated workflow configuration.
//!
//! Plain structs built once by the caller (CLI or embedding tool) and
//! passed by reference into the workflows. `validate` runs before any
//! remote call is issued.

use std::path::PathBuf;

use crate::error::ReleaseError;

/// Identity and credentials shared by both workflows.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Application name, sent as the HTTP User-Agent.
    pub application_name: String,
    /// Store package name, e.g. `com.example.app`.
    pub package_name: String,
    /// OAuth access token for the publishing API.
    pub access_token: String,
    /// Override of the service base URL (proxies, fakes).
    pub base_url: Option<String>,
}

impl AppConfig {
    fn validate(&self) -> Result<(), ReleaseError> {
        require("application name", &self.application_name)?;
        require("package name", &self.package_name)?;
        require("access token", &self.access_token)?;
        Ok(())
    }
}

/// Configuration for the publish (upload + assign) workflow.
#[derive(Debug, Clone)]
pub struct PublishConfig {
    pub app: AppConfig,
    /// Track that receives the uploaded version code.
    pub track: String,
    /// Path to the built APK.
    pub artifact_path: PathBuf,
}

impl PublishConfig {
    /// Checks all required fields before any remote call.
    pub fn validate(&self) -> Result<(), ReleaseError> {
        self.app.validate()?;
        require("track", &self.track)?;
        if self.artifact_path.as_os_str().is_empty() {
            return Err(ReleaseError::InvalidConfig(
                "artifact path cannot be empty".into(),
            ));
        }
        Ok(())
    }
}

/// Configuration for the track promotion workflow.
#[derive(Debug, Clone)]
pub struct PromoteConfig {
    pub app: AppConfig,
    /// Track the release is promoted from.
    pub track: String,
    /// Track the release is promoted to.
    pub promote_track: String,
}

impl PromoteConfig {
    /// Checks all required fields before any remote call.
    ///
    /// Source and promotion track must differ; promoting a track onto
    /// itself is rejected outright.
    pub fn validate(&self) -> Result<(), ReleaseError> {
        self.app.validate()?;
        require("track", &self.track)?;
        require("promotion track", &self.promote_track)?;
        if self.track == self.promote_track {
            return Err(ReleaseError::InvalidConfig(format!(
                "source and promotion track are both \"{}\"",
                self.track
            )));
        }
        Ok(())
    }
}

fn require(field: &str, value: &str) -> Result<(), ReleaseError> {
    if value.trim().is_empty() {
        Err(ReleaseError::InvalidConfig(format!(
            "{field} cannot be empty"
        )))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_app() -> AppConfig {
        AppConfig {
            application_name: "playlift-tests".into(),
            package_name: "com.example.app".into(),
            access_token: "token".into(),
            base_url: None,
        }
    }

    #[test]
    fn publish_config_valid() {
        let config = PublishConfig {
            app: test_app(),
            track: "alpha".into(),
            artifact_path: PathBuf::from("app-release.apk"),
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn publish_config_rejects_empty_track() {
        let config = PublishConfig {
            app: test_app(),
            track: "  ".into(),
            artifact_path: PathBuf::from("app-release.apk"),
        };
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ReleaseError::InvalidConfig(_)));
        assert!(err.to_string().contains("track"));
    }

    #[test]
    fn publish_config_rejects_empty_artifact_path() {
        let config = PublishConfig {
            app: test_app(),
            track: "alpha".into(),
            artifact_path: PathBuf::new(),
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn promote_config_valid() {
        let config = PromoteConfig {
            app: test_app(),
            track: "alpha".into(),
            promote_track: "beta".into(),
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn promote_config_rejects_same_tracks() {
        let config = PromoteConfig {
            app: test_app(),
            track: "alpha".into(),
            promote_track: "alpha".into(),
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("alpha"));
    }

    #[test]
    fn promote_config_rejects_missing_token() {
        let mut app = test_app();
        app.access_token = String::new();
        let config = PromoteConfig {
            app,
            track: "alpha".into(),
            promote_track: "beta".into(),
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("access token"));
    }

    #[test]
    fn promote_config_rejects_empty_promotion_track() {
        let config = PromoteConfig {
            app: test_app(),
            track: "alpha".into(),
            promote_track: String::new(),
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("promotion track"));
    }
}
