//! Release workflows for the Play publishing surface.
//!
//! This crate implements the **business logic** for uploading APKs and
//! promoting releases between tracks. It is a library crate with no
//! transport or CLI dependencies — callers supply a
//! [`playlift_publisher::PublisherApi`] implementation and validated
//! configuration.
//!
//! # Workflows
//!
//! 1. **Publish** — upload an APK and assign its version code to a track
//! 2. **Promote** — move the newest release from one track to another
//!
//! Each workflow runs inside a single edit session: open, mutate, commit.
//! Any failed step aborts the sequence and leaves the edit uncommitted,
//! which has no observable effect on the live listing.

pub mod config;
pub mod error;
pub mod promote;
pub mod publish;
pub mod resolver;

pub use config::{AppConfig, PromoteConfig, PublishConfig};
pub use error::ReleaseError;
pub use promote::{PromoteOutcome, Promoter};
pub use publish::{PublishOutcome, Publisher};
pub use resolver::{PromotionPlan, plan_promotion};
