//! Native video file chooser

use log::warn;
use tauri::AppHandle;
use tauri_plugin_dialog::DialogExt;
use tokio::sync::oneshot;

use super::types::{PickedVideo, VIDEO_EXTENSIONS};

/// Present the native chooser restricted to video files.
/// Resolves to None on cancellation, which aborts the flow silently
/// before any network activity.
pub(crate) async fn pick_video(app: &AppHandle) -> Option<PickedVideo> {
    let (tx, rx) = oneshot::channel();

    app.dialog()
        .file()
        .add_filter("Video", VIDEO_EXTENSIONS)
        .pick_file(move |file| {
            let _ = tx.send(file);
        });

    let picked = rx.await.ok().flatten()?;
    let path = match picked.into_path() {
        Ok(path) => path,
        Err(e) => {
            warn!("pick_video: unusable selection: {}", e);
            return None;
        }
    };

    Some(PickedVideo::from_path(&path))
}
