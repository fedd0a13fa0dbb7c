//! Processing flow types and event payloads

use serde::{Deserialize, Serialize};
use std::path::Path;

/// File name of the singleton result inside the app data directory.
/// Every successful cycle overwrites this file; the path never varies.
pub const RESULT_FILE_NAME: &str = "processed_video.mp4";

/// Extensions offered by the native video chooser
pub const VIDEO_EXTENSIONS: &[&str] = &["mp4", "mov", "m4v", "avi", "mkv", "webm"];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum ProcessStatus {
    #[serde(rename = "idle")]
    Idle,
    #[serde(rename = "busy")]
    Busy,
}

impl std::fmt::Display for ProcessStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProcessStatus::Idle => write!(f, "idle"),
            ProcessStatus::Busy => write!(f, "busy"),
        }
    }
}

impl From<String> for ProcessStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "busy" => ProcessStatus::Busy,
            _ => ProcessStatus::Idle,
        }
    }
}

/// Reference to the video chosen in the native file dialog
#[derive(Debug, Clone, Serialize)]
pub struct PickedVideo {
    pub path: String,
    pub file_name: String,
    pub content_type: String,
}

impl PickedVideo {
    pub fn from_path(path: &Path) -> Self {
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("video")
            .to_string();
        let content_type = content_type_for_path(path);

        Self {
            path: path.to_string_lossy().to_string(),
            file_name,
            content_type,
        }
    }
}

/// MIME type declared in the upload form part, derived from the extension
pub fn content_type_for_path(path: &Path) -> String {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "mp4" | "m4v" => "video/mp4",
        "mov" => "video/quicktime",
        "avi" => "video/x-msvideo",
        "mkv" => "video/x-matroska",
        "webm" => "video/webm",
        _ => "application/octet-stream",
    }
    .to_string()
}

/// Status change event payload
#[derive(Debug, Clone, Serialize)]
pub struct ProcessStatusChanged {
    pub status: String,
    pub error: Option<String>,
}

/// Result of one `process_video` invocation
#[derive(Debug, Clone, Serialize)]
pub struct ProcessOutcome {
    pub cancelled: bool,
    pub result_uri: Option<String>,
}

impl ProcessOutcome {
    pub(crate) fn cancelled() -> Self {
        Self {
            cancelled: true,
            result_uri: None,
        }
    }

    pub(crate) fn completed(result_uri: String) -> Self {
        Self {
            cancelled: false,
            result_uri: Some(result_uri),
        }
    }
}
