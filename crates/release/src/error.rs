//! Release workflow error types.

use playlift_publisher::ApiError;

/// Errors produced by the publish and promote workflows.
#[derive(Debug, thiserror::Error)]
pub enum ReleaseError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("track \"{track}\" not found for package {package}")]
    TrackNotFound { package: String, track: String },

    #[error("track \"{track}\" has no version codes to promote")]
    EmptySourceTrack { track: String },

    #[error(
        "checksum mismatch for {path}: local sha256 {local}, service reported {remote}"
    )]
    ChecksumMismatch {
        path: String,
        local: String,
        remote: String,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("publisher API error: {0}")]
    Api(#[from] ApiError),
}
