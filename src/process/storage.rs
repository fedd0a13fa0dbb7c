//! Local persistence of processed results
//!
//! The response body is handed off as base64 text, decoded back to bytes,
//! and written to the singleton `processed_video.mp4` path inside the app
//! data directory. Overwrite semantics: no uniqueness check, no append.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use std::path::{Path, PathBuf};

use super::error::ProcessError;
use super::types::RESULT_FILE_NAME;

pub(crate) fn result_path(data_dir: &Path) -> PathBuf {
    data_dir.join(RESULT_FILE_NAME)
}

pub(crate) fn file_uri(path: &Path) -> String {
    format!("file://{}", path.to_string_lossy())
}

/// Re-encode the response body as base64 text for the persistence hand-off
pub(crate) fn encode_payload(body: &[u8]) -> String {
    BASE64.encode(body)
}

/// Decode the base64 payload and write it to the fixed result path,
/// overwriting any prior file. Yields the file:// URI of the written path.
pub(crate) async fn write_result(
    data_dir: &Path,
    base64_payload: &str,
) -> Result<String, ProcessError> {
    let bytes = BASE64
        .decode(base64_payload)
        .map_err(|e| ProcessError::Decode(format!("Invalid base64 payload: {}", e)))?;

    tokio::fs::create_dir_all(data_dir)
        .await
        .map_err(|e| ProcessError::Write(format!("Failed to create data dir: {}", e)))?;

    let path = result_path(data_dir);
    tokio::fs::write(&path, &bytes)
        .await
        .map_err(|e| ProcessError::Write(format!("Failed to write {}: {}", path.display(), e)))?;

    Ok(file_uri(&path))
}
