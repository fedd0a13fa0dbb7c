//! Processing flow Tauri commands

use log::{error, info};
use reqwest::Client;
use tauri::{AppHandle, Manager};
use tauri_plugin_opener::OpenerExt;

use crate::config::ServerConfig;

use super::client::upload_for_processing;
use super::error::ProcessError;
use super::picker::pick_video;
use super::state::{emit_status, is_busy, BusyGuard, LAST_RESULT};
use super::storage::{encode_payload, result_path, write_result};
use super::types::{PickedVideo, ProcessOutcome, ProcessStatus};

/// Run one pick -> upload -> persist cycle.
///
/// The busy flag is claimed at trigger entry, so a second trigger while a
/// cycle is in flight is rejected instead of racing on the output path.
/// Picker cancellation returns a cancelled outcome without any status
/// event or network activity.
#[tauri::command]
pub async fn process_video(app: AppHandle) -> Result<ProcessOutcome, ProcessError> {
    let Some(_guard) = BusyGuard::try_claim() else {
        info!("process_video: trigger rejected, cycle already in flight");
        return Err(ProcessError::Busy);
    };

    let Some(video) = pick_video(&app).await else {
        info!("process_video: picker cancelled");
        return Ok(ProcessOutcome::cancelled());
    };

    emit_status(&app, &ProcessStatus::Busy, None);
    info!(
        "process_video: uploading {} ({})",
        video.file_name, video.content_type
    );

    match run_cycle(&app, &video).await {
        Ok(uri) => {
            {
                let mut last = LAST_RESULT.lock().await;
                *last = Some(uri.clone());
            }
            info!("process_video: result written to {}", uri);
            emit_status(&app, &ProcessStatus::Idle, None);
            Ok(ProcessOutcome::completed(uri))
        }
        Err(e) => {
            error!("process_video: {}", e);
            emit_status(
                &app,
                &ProcessStatus::Idle,
                Some(e.user_message().to_string()),
            );
            Err(e)
        }
    }
}

async fn run_cycle(app: &AppHandle, video: &PickedVideo) -> Result<String, ProcessError> {
    let config = ServerConfig::from_env();
    let client = Client::builder()
        .build()
        .map_err(|e| ProcessError::Network(format!("Failed to create HTTP client: {}", e)))?;

    let body = upload_for_processing(&client, &config.endpoint, video).await?;
    let payload = encode_payload(&body);

    let data_dir = app
        .path()
        .app_data_dir()
        .map_err(|e| ProcessError::Write(format!("Failed to resolve app data dir: {}", e)))?;

    let uri = write_result(&data_dir, &payload).await?;

    // Let the webview bind the written file to its video element
    if let Err(e) = app.asset_protocol_scope().allow_file(result_path(&data_dir)) {
        log::warn!("process_video: failed to extend asset scope: {}", e);
    }

    Ok(uri)
}

/// file:// URI of the most recent successful cycle, if any
#[tauri::command]
pub async fn get_last_result() -> Result<Option<String>, ProcessError> {
    Ok(LAST_RESULT.lock().await.clone())
}

/// Whether a processing cycle is currently in flight
#[tauri::command]
pub fn is_processing() -> bool {
    is_busy()
}

/// Open the platform file manager at the written result
#[tauri::command]
pub async fn reveal_result(app: AppHandle) -> Result<(), ProcessError> {
    let data_dir = app
        .path()
        .app_data_dir()
        .map_err(|e| ProcessError::Write(format!("Failed to resolve app data dir: {}", e)))?;

    let path = result_path(&data_dir);
    if !path.exists() {
        return Err(ProcessError::Write(format!(
            "No result at {}",
            path.display()
        )));
    }

    app.opener()
        .reveal_item_in_dir(&path)
        .map_err(|e| ProcessError::Write(format!("Failed to reveal {}: {}", path.display(), e)))
}
