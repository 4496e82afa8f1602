use std::sync::Arc;

use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use tauri::{AppHandle, Emitter, Runtime};
use tokio::sync::{mpsc, Mutex};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::dial::normalize_degrees;

use super::state::CompassState;

pub const HEADING_CHANGED_EVENT: &str = "heading-changed";

// Device orientation can fire at well over 60 Hz; the queue only has to
// absorb short bursts, dropped samples are superseded anyway.
const SAMPLE_QUEUE_CAPACITY: usize = 32;

/// One device-orientation event as forwarded from the platform listener.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrientationSample {
    /// Compass-corrected heading, present on platforms that expose one.
    #[serde(default)]
    pub webkit_compass_heading: Option<f64>,
    /// Raw orientation angle, counter-clockwise from North.
    #[serde(default)]
    pub alpha: Option<f64>,
}

/// Heading in degrees clockwise from North, or `None` when the sample
/// carries neither a corrected heading nor a raw angle. The corrected
/// value is preferred; the raw angle is mirrored (`360 - alpha`) because
/// it grows in the opposite rotational frame.
pub fn heading_from_sample(sample: &OrientationSample) -> Option<f64> {
    if let Some(corrected) = sample.webkit_compass_heading {
        if corrected.is_finite() {
            return Some(normalize_degrees(corrected));
        }
    }
    match sample.alpha {
        Some(alpha) if alpha.is_finite() => Some(normalize_degrees(360.0 - alpha)),
        _ => None,
    }
}

/// Handle for the live sample worker. Acquired when live mode is entered,
/// released (cancel + join) when it is left; dropping the handle drops the
/// sender, so a detached feed can never touch the heading again.
pub struct LiveFeed {
    samples_tx: mpsc::Sender<OrientationSample>,
    cancel_token: CancellationToken,
    handle: JoinHandle<()>,
}

impl LiveFeed {
    pub fn spawn<R: Runtime>(
        state: Arc<Mutex<CompassState>>,
        app_handle: AppHandle<R>,
    ) -> Self {
        let (samples_tx, samples_rx) = mpsc::channel(SAMPLE_QUEUE_CAPACITY);
        let cancel_token = CancellationToken::new();
        let token_clone = cancel_token.clone();

        let handle = tokio::spawn(heading_feed(state, samples_rx, token_clone, app_handle));

        Self {
            samples_tx,
            cancel_token,
            handle,
        }
    }

    /// Enqueue a sample without waiting. Returns false when the queue is
    /// full; the sample is simply dropped since a fresher one follows.
    pub fn try_push(&self, sample: OrientationSample) -> bool {
        self.samples_tx.try_send(sample).is_ok()
    }

    pub async fn stop(self) -> Result<()> {
        self.cancel_token.cancel();
        self.handle
            .await
            .context("heading feed task failed to join")
    }
}

/// Consumes samples until cancelled. Each usable sample replaces the
/// heading wholesale and is re-broadcast to the webview; samples with
/// neither field are dropped without touching state.
async fn heading_feed<R: Runtime>(
    state: Arc<Mutex<CompassState>>,
    mut samples_rx: mpsc::Receiver<OrientationSample>,
    cancel_token: CancellationToken,
    app_handle: AppHandle<R>,
) {
    info!("heading feed attached");
    loop {
        tokio::select! {
            _ = cancel_token.cancelled() => {
                info!("heading feed detached");
                break;
            }
            next = samples_rx.recv() => {
                let Some(sample) = next else {
                    // Sender gone, the controller dropped us.
                    break;
                };

                let snapshot = {
                    let mut guard = state.lock().await;
                    if !guard.apply_sample(&sample) {
                        debug!("orientation sample carried no usable heading, ignored");
                        continue;
                    }
                    guard.snapshot()
                };

                let _ = app_handle.emit(HEADING_CHANGED_EVENT, snapshot);
            }
        }
    }
}
