use log::{info, warn};
use std::sync::atomic::{AtomicBool, Ordering};
use tauri::{AppHandle, Emitter};
use tokio::sync::Mutex;

use super::types::{ProcessStatus, ProcessStatusChanged};

/// Set while a pick -> upload -> persist cycle is in flight
static PROCESS_BUSY: AtomicBool = AtomicBool::new(false);

lazy_static::lazy_static! {
    /// file:// URI of the most recent successful result (session-scoped)
    pub(crate) static ref LAST_RESULT: Mutex<Option<String>> = Mutex::new(None);
}

/// Holds the singleton busy flag for one processing cycle.
/// Dropping the guard releases the flag, so every exit path resets it.
pub(crate) struct BusyGuard;

impl BusyGuard {
    /// Claims the busy flag. Returns None when another cycle holds it.
    pub(crate) fn try_claim() -> Option<Self> {
        PROCESS_BUSY
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_ok()
            .then_some(BusyGuard)
    }
}

impl Drop for BusyGuard {
    fn drop(&mut self) {
        PROCESS_BUSY.store(false, Ordering::SeqCst);
    }
}

pub(crate) fn is_busy() -> bool {
    PROCESS_BUSY.load(Ordering::SeqCst)
}

pub(crate) fn emit_status(app: &AppHandle, status: &ProcessStatus, error: Option<String>) {
    match error.as_ref() {
        Some(err) => warn!("process_status: {} error={}", status, err),
        None => info!("process_status: {}", status),
    }
    let _ = app.emit(
        "process-status-changed",
        ProcessStatusChanged {
            status: status.to_string(),
            error,
        },
    );
}
