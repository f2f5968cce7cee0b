//! Publishing API collaborator for the release workflows.
//!
//! Exposes the [`PublisherApi`] trait the workflows are written against,
//! plus [`HttpPublisher`], the production implementation speaking the
//! Android Publisher REST surface over HTTPS with bearer-token auth.

pub mod client;
pub mod error;
pub mod types;

pub use client::{DEFAULT_BASE_URL, HttpPublisher, MIME_TYPE_APK, PublisherApi};
pub use error::ApiError;
pub use types::{Apk, ApkBinary, AppEdit, Track, TracksListResponse};
