//! Publisher API trait and HTTP implementation.
//!
//! `PublisherApi` is the seam between the release workflows and the real
//! publishing service. Using a trait keeps the workflows decoupled from
//! transport and testable with mocks.

use std::future::Future;
use std::pin::Pin;

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::ApiError;
use crate::types::{Apk, AppEdit, Track, TracksListResponse};

/// Production API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://androidpublisher.googleapis.com";

/// MIME type the service expects for APK uploads.
pub const MIME_TYPE_APK: &str = "application/vnd.android.package-archive";

/// Characters escaped when a value is embedded as a URL path segment.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Abstract connection to the publishing service.
///
/// One invocation of a workflow maps to one edit session: open, mutate,
/// commit. Each call is a single blocking round-trip; nothing is retried.
pub trait PublisherApi: Send + Sync {
    /// Opens a new edit session for the package.
    fn insert_edit(
        &self,
        package: &str,
    ) -> Pin<Box<dyn Future<Output = Result<AppEdit, ApiError>> + Send + '_>>;

    /// Lists the tracks visible in the edit session.
    fn list_tracks(
        &self,
        package: &str,
        edit_id: &str,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<Track>, ApiError>> + Send + '_>>;

    /// Writes back a track's version codes, replacing its prior state.
    fn update_track(
        &self,
        package: &str,
        edit_id: &str,
        track: &Track,
    ) -> Pin<Box<dyn Future<Output = Result<Track, ApiError>> + Send + '_>>;

    /// Uploads an APK into the edit session.
    fn upload_apk(
        &self,
        package: &str,
        edit_id: &str,
        content: Vec<u8>,
    ) -> Pin<Box<dyn Future<Output = Result<Apk, ApiError>> + Send + '_>>;

    /// Commits the edit session, making its changes live.
    fn commit_edit(
        &self,
        package: &str,
        edit_id: &str,
    ) -> Pin<Box<dyn Future<Output = Result<AppEdit, ApiError>> + Send + '_>>;
}

/// HTTP implementation of [`PublisherApi`] against the Android Publisher
/// REST surface.
///
/// Authentication is a bearer access token supplied by the caller; token
/// acquisition is not this crate's concern.
pub struct HttpPublisher {
    http: reqwest::Client,
    base_url: String,
    access_token: String,
}

impl HttpPublisher {
    /// Creates a client against the production endpoint.
    ///
    /// `application_name` is sent as the User-Agent, mirroring the official
    /// client libraries.
    pub fn new(
        access_token: impl Into<String>,
        application_name: &str,
    ) -> Result<Self, ApiError> {
        Self::with_base_url(access_token, application_name, DEFAULT_BASE_URL)
    }

    /// Creates a client against a custom endpoint (proxy or fake service).
    pub fn with_base_url(
        access_token: impl Into<String>,
        application_name: &str,
        base_url: impl Into<String>,
    ) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .user_agent(application_name.to_string())
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            access_token: access_token.into(),
        })
    }

    fn edits_url(&self, package: &str) -> String {
        format!(
            "{}/androidpublisher/v3/applications/{}/edits",
            self.base_url,
            encode(package)
        )
    }

    fn edit_url(&self, package: &str, edit_id: &str) -> String {
        format!("{}/{}", self.edits_url(package), encode(edit_id))
    }

    fn track_url(&self, package: &str, edit_id: &str, track: &str) -> String {
        format!("{}/tracks/{}", self.edit_url(package, edit_id), encode(track))
    }

    fn upload_url(&self, package: &str, edit_id: &str) -> String {
        format!(
            "{}/upload/androidpublisher/v3/applications/{}/edits/{}/apks?uploadType=media",
            self.base_url,
            encode(package),
            encode(edit_id)
        )
    }

    /// Sends the request with bearer auth and decodes the JSON response.
    ///
    /// 401/403 map to [`ApiError::Security`], any other non-2xx to
    /// [`ApiError::Status`] with the response body as the message.
    async fn execute<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ApiError> {
        let response = request.bearer_auth(&self.access_token).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if status == reqwest::StatusCode::UNAUTHORIZED
            || status == reqwest::StatusCode::FORBIDDEN
        {
            return Err(ApiError::Security {
                status: status.as_u16(),
                message: body,
            });
        }
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                message: body,
            });
        }

        Ok(serde_json::from_str(&body)?)
    }
}

impl PublisherApi for HttpPublisher {
    fn insert_edit(
        &self,
        package: &str,
    ) -> Pin<Box<dyn Future<Output = Result<AppEdit, ApiError>> + Send + '_>> {
        let url = self.edits_url(package);
        let package = package.to_string();
        Box::pin(async move {
            debug!(package = %package, "opening edit session");
            self.execute(self.http.post(&url)).await
        })
    }

    fn list_tracks(
        &self,
        package: &str,
        edit_id: &str,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<Track>, ApiError>> + Send + '_>> {
        let url = format!("{}/tracks", self.edit_url(package, edit_id));
        Box::pin(async move {
            let listing: TracksListResponse = self.execute(self.http.get(&url)).await?;
            Ok(listing.tracks)
        })
    }

    fn update_track(
        &self,
        package: &str,
        edit_id: &str,
        track: &Track,
    ) -> Pin<Box<dyn Future<Output = Result<Track, ApiError>> + Send + '_>> {
        let url = self.track_url(package, edit_id, &track.track);
        let track = track.clone();
        Box::pin(async move {
            debug!(track = %track.track, codes = ?track.version_codes, "updating track");
            self.execute(self.http.put(&url).json(&track)).await
        })
    }

    fn upload_apk(
        &self,
        package: &str,
        edit_id: &str,
        content: Vec<u8>,
    ) -> Pin<Box<dyn Future<Output = Result<Apk, ApiError>> + Send + '_>> {
        let url = self.upload_url(package, edit_id);
        Box::pin(async move {
            debug!(bytes = content.len(), "uploading APK");
            self.execute(
                self.http
                    .post(&url)
                    .header(reqwest::header::CONTENT_TYPE, MIME_TYPE_APK)
                    .body(content),
            )
            .await
        })
    }

    fn commit_edit(
        &self,
        package: &str,
        edit_id: &str,
    ) -> Pin<Box<dyn Future<Output = Result<AppEdit, ApiError>> + Send + '_>> {
        let url = format!("{}:commit", self.edit_url(package, edit_id));
        Box::pin(async move {
            debug!("committing edit session");
            self.execute(self.http.post(&url)).await
        })
    }
}

fn encode(segment: &str) -> String {
    utf8_percent_encode(segment, PATH_SEGMENT).to_string()
}
