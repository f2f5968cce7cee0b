//! Track promotion workflow.
//!
//! Moves the newest release on one track to become the sole release on
//! another, inside a single edit session: open edit → read tracks →
//! resolve → write source → write destination → commit.

use playlift_publisher::{PublisherApi, Track};
use tracing::info;

use crate::config::PromoteConfig;
use crate::error::ReleaseError;
use crate::resolver::plan_promotion;

/// Outcome of a committed promotion.
#[derive(Debug, Clone)]
pub struct PromoteOutcome {
    pub edit_id: String,
    /// Version code that moved.
    pub version_code: i64,
    /// Source track state as confirmed by the service.
    pub source: Track,
    /// Destination track state as confirmed by the service.
    pub destination: Track,
}

/// Runs the promotion workflow against an injected publisher connection.
pub struct Promoter<'a> {
    api: &'a dyn PublisherApi,
}

impl<'a> Promoter<'a> {
    /// Creates a promoter over the given connection.
    pub fn new(api: &'a dyn PublisherApi) -> Self {
        Self { api }
    }

    /// Promotes the newest version code on `config.track` to
    /// `config.promote_track` and commits the edit.
    ///
    /// The source track must exist in the remote listing and must not be
    /// empty; an absent destination track is created with only the promoted
    /// code. Any failed step aborts the sequence, leaving the edit
    /// uncommitted with no observable effect on the live listing.
    pub async fn promote(&self, config: &PromoteConfig) -> Result<PromoteOutcome, ReleaseError> {
        config.validate()?;

        let package = config.app.package_name.as_str();

        let edit = self.api.insert_edit(package).await?;
        info!(edit_id = %edit.id, package, "opened edit session");

        let tracks = self.api.list_tracks(package, &edit.id).await?;

        let source = tracks
            .iter()
            .find(|t| t.track == config.track)
            .ok_or_else(|| ReleaseError::TrackNotFound {
                package: package.to_string(),
                track: config.track.clone(),
            })?;
        let destination = tracks.iter().find(|t| t.track == config.promote_track);

        let plan = plan_promotion(source, destination, &config.promote_track)?;
        info!(
            version_code = plan.version_code,
            from = %config.track,
            to = %config.promote_track,
            "selected release for promotion"
        );

        let source = self.api.update_track(package, &edit.id, &plan.source).await?;
        info!(track = %source.track, "source track updated");

        let destination = self
            .api
            .update_track(package, &edit.id, &plan.destination)
            .await?;
        info!(track = %destination.track, "destination track updated");

        let committed = self.api.commit_edit(package, &edit.id).await?;
        info!(edit_id = %committed.id, "edit committed");

        Ok(PromoteOutcome {
            edit_id: committed.id,
            version_code: plan.version_code,
            source,
            destination,
        })
    }
}
