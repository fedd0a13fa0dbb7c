//! Tagged failure kinds for the processing flow
//!
//! Each step of the pick -> upload -> persist chain maps to one kind so
//! the frontend can tell them apart in diagnostics, while the user-facing
//! alert stays a single generic message for every failing run.

use serde::Serialize;

/// Generic alert text shown for any failed processing cycle
pub const GENERIC_FAILURE_MESSAGE: &str = "Failed to process video";

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "kind", content = "message")]
pub enum ProcessError {
    /// Native file chooser failed (not cancellation, which is no error)
    #[serde(rename = "picker")]
    Picker(String),
    /// Transport failure, non-success status, or unusable response body
    #[serde(rename = "network")]
    Network(String),
    /// Response payload could not be base64-decoded for persistence
    #[serde(rename = "decode")]
    Decode(String),
    /// Local write of the processed result failed
    #[serde(rename = "write")]
    Write(String),
    /// A cycle is already in flight; the trigger was rejected
    #[serde(rename = "busy")]
    Busy,
}

impl ProcessError {
    /// User-visible wording, identical across network/decode/write failures
    pub fn user_message(&self) -> &'static str {
        GENERIC_FAILURE_MESSAGE
    }
}

impl std::fmt::Display for ProcessError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProcessError::Picker(detail) => write!(f, "picker error: {}", detail),
            ProcessError::Network(detail) => write!(f, "network error: {}", detail),
            ProcessError::Decode(detail) => write!(f, "decode error: {}", detail),
            ProcessError::Write(detail) => write!(f, "write error: {}", detail),
            ProcessError::Busy => write!(f, "a processing cycle is already running"),
        }
    }
}

impl std::error::Error for ProcessError {}
