//! Wire types for the publishing edit API.

use serde::{Deserialize, Serialize};

/// An open edit session on the publishing service.
///
/// All mutations reference the edit `id`; the session becomes visible only
/// once committed, and expires server-side if abandoned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppEdit {
    pub id: String,
    /// Session expiry, seconds since epoch (server-formatted string).
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub expiry_time_seconds: String,
}

/// A release track and the version codes currently live on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Track {
    pub track: String,
    #[serde(default)]
    pub version_codes: Vec<i64>,
}

impl Track {
    /// Creates a track holding the given version codes.
    pub fn new(name: impl Into<String>, version_codes: Vec<i64>) -> Self {
        Self {
            track: name.into(),
            version_codes,
        }
    }
}

/// Digests the service computed for a stored binary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApkBinary {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub sha1: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub sha256: String,
}

/// An uploaded APK as reported by the service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Apk {
    pub version_code: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub binary: Option<ApkBinary>,
}

/// Response wrapper for the track listing endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TracksListResponse {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub kind: String,
    #[serde(default)]
    pub tracks: Vec<Track>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn track_json_roundtrip() {
        let track = Track::new("alpha", vec![10, 12, 11]);
        let json = serde_json::to_string(&track).unwrap();
        assert!(json.contains("versionCodes"));
        let parsed: Track = serde_json::from_str(&json).unwrap();
        assert_eq!(track, parsed);
    }

    #[test]
    fn track_missing_version_codes_defaults_empty() {
        let parsed: Track = serde_json::from_str(r#"{"track":"beta"}"#).unwrap();
        assert_eq!(parsed.track, "beta");
        assert!(parsed.version_codes.is_empty());
    }

    #[test]
    fn app_edit_omits_empty_expiry() {
        let edit = AppEdit {
            id: "edit-1".into(),
            expiry_time_seconds: String::new(),
        };
        let json = serde_json::to_string(&edit).unwrap();
        assert!(!json.contains("expiryTimeSeconds"));
    }

    #[test]
    fn app_edit_parses_expiry() {
        let parsed: AppEdit =
            serde_json::from_str(r#"{"id":"e1","expiryTimeSeconds":"1714000000"}"#).unwrap();
        assert_eq!(parsed.id, "e1");
        assert_eq!(parsed.expiry_time_seconds, "1714000000");
    }

    #[test]
    fn apk_parses_binary_digests() {
        let parsed: Apk = serde_json::from_str(
            r#"{"versionCode":42,"binary":{"sha1":"aa","sha256":"bb"}}"#,
        )
        .unwrap();
        assert_eq!(parsed.version_code, 42);
        let binary = parsed.binary.unwrap();
        assert_eq!(binary.sha1, "aa");
        assert_eq!(binary.sha256, "bb");
    }

    #[test]
    fn apk_without_binary() {
        let parsed: Apk = serde_json::from_str(r#"{"versionCode":7}"#).unwrap();
        assert_eq!(parsed.version_code, 7);
        assert!(parsed.binary.is_none());
    }

    #[test]
    fn tracks_list_response_parses() {
        let json = r#"{
            "kind": "androidpublisher#tracksListResponse",
            "tracks": [
                {"track": "alpha", "versionCodes": [10, 11]},
                {"track": "production", "versionCodes": [9]}
            ]
        }"#;
        let parsed: TracksListResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.tracks.len(), 2);
        assert_eq!(parsed.tracks[0].track, "alpha");
        assert_eq!(parsed.tracks[1].version_codes, vec![9]);
    }

    #[test]
    fn tracks_list_response_empty() {
        let parsed: TracksListResponse = serde_json::from_str("{}").unwrap();
        assert!(parsed.tracks.is_empty());
    }
}
