//! APK publish workflow.
//!
//! Uploads a built APK into a fresh edit session, assigns the uploaded
//! version code as the sole release on the configured track, and commits.
//! The local SHA-256 of the artifact is checked against the digest the
//! service reports for the stored binary before any track assignment.

use playlift_publisher::{PublisherApi, Track};
use sha2::{Digest, Sha256};
use tracing::info;

use crate::config::PublishConfig;
use crate::error::ReleaseError;

/// Outcome of a committed publish.
#[derive(Debug, Clone)]
pub struct PublishOutcome {
    pub edit_id: String,
    /// Version code the service assigned to the upload.
    pub version_code: i64,
    /// Track state as confirmed by the service.
    pub track: Track,
}

/// Runs the publish workflow against an injected publisher connection.
pub struct Publisher<'a> {
    api: &'a dyn PublisherApi,
}

impl<'a> Publisher<'a> {
    /// Creates a publisher over the given connection.
    pub fn new(api: &'a dyn PublisherApi) -> Self {
        Self { api }
    }

    /// Uploads the configured artifact and assigns its version code as the
    /// sole content of `config.track`, then commits the edit.
    ///
    /// Any failed step aborts the sequence, leaving the edit uncommitted.
    pub async fn publish(&self, config: &PublishConfig) -> Result<PublishOutcome, ReleaseError> {
        config.validate()?;

        let package = config.app.package_name.as_str();

        let content = tokio::fs::read(&config.artifact_path).await?;
        let local_sha256 = hex::encode(Sha256::digest(&content));
        info!(
            path = %config.artifact_path.display(),
            bytes = content.len(),
            "read artifact"
        );

        let edit = self.api.insert_edit(package).await?;
        info!(edit_id = %edit.id, package, "opened edit session");

        let apk = self.api.upload_apk(package, &edit.id, content).await?;
        info!(version_code = apk.version_code, "artifact uploaded");

        // Older API responses omit the digest; skip the check when absent.
        if let Some(binary) = &apk.binary
            && !binary.sha256.is_empty()
            && !binary.sha256.eq_ignore_ascii_case(&local_sha256)
        {
            return Err(ReleaseError::ChecksumMismatch {
                path: config.artifact_path.display().to_string(),
                local: local_sha256,
                remote: binary.sha256.clone(),
            });
        }

        let track = Track::new(config.track.as_str(), vec![apk.version_code]);
        let track = self.api.update_track(package, &edit.id, &track).await?;
        info!(
            track = %track.track,
            version_code = apk.version_code,
            "track updated"
        );

        let committed = self.api.commit_edit(package, &edit.id).await?;
        info!(edit_id = %committed.id, "edit committed");

        Ok(PublishOutcome {
            edit_id: committed.id,
            version_code: apk.version_code,
            track,
        })
    }
}
