//! Promotion resolver.
//!
//! Pure logic over track snapshots: pick the version code that moves and
//! produce the updated source and destination states to write back. All
//! I/O stays in the enclosing workflow.

use playlift_publisher::Track;

use crate::error::ReleaseError;

/// A resolved promotion: which code moves, and the track states to write
/// back.
#[derive(Debug, Clone, PartialEq)]
pub struct PromotionPlan {
    /// Version code being promoted.
    pub version_code: i64,
    /// Source track with the promoted code removed.
    pub source: Track,
    /// Destination track holding exactly the promoted code.
    pub destination: Track,
}

/// Resolves which version code moves from `source` to the destination.
///
/// The newest (numerically largest) code on the source track is selected;
/// codes are unique within a track, so ties cannot occur. The returned
/// destination holds exactly the selected code — promotion replaces the
/// destination's contents rather than appending. A `None` destination
/// stands for a track the service has not created yet; `destination_name`
/// names the track to create in that case.
pub fn plan_promotion(
    source: &Track,
    destination: Option<&Track>,
    destination_name: &str,
) -> Result<PromotionPlan, ReleaseError> {
    let selected = source
        .version_codes
        .iter()
        .copied()
        .max()
        .ok_or_else(|| ReleaseError::EmptySourceTrack {
            track: source.track.clone(),
        })?;

    let remaining: Vec<i64> = source
        .version_codes
        .iter()
        .copied()
        .filter(|&code| code != selected)
        .collect();

    let destination_name = destination
        .map(|t| t.track.as_str())
        .unwrap_or(destination_name);

    Ok(PromotionPlan {
        version_code: selected,
        source: Track::new(source.track.as_str(), remaining),
        destination: Track::new(destination_name, vec![selected]),
    })
}
