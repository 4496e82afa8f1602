use std::sync::Arc;

use anyhow::{anyhow, bail, Result};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use tauri::{AppHandle, Emitter, Runtime, Wry};
use tokio::sync::Mutex;

use crate::directions::{direction_by_id, DirectionRecord};

use super::feed::{LiveFeed, OrientationSample, HEADING_CHANGED_EVENT};
use super::state::{CompassSnapshot, CompassState, HeadingMode};

pub const MODE_CHANGED_EVENT: &str = "compass-mode-changed";
pub const DIRECTION_SELECTED_EVENT: &str = "direction-selected";

/// Result of the platform's one-time device-orientation authorization
/// step, as reported by the layer that ran it. `NotRequired` covers
/// platforms with no permission gate at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PermissionOutcome {
    Granted,
    NotRequired,
    Denied,
    Failed,
}

/// Owns the compass state and the live feed lifecycle. Cheap to clone;
/// clones share state, mirroring how the timer-style controllers are
/// handed to commands.
pub struct CompassController<R: Runtime = Wry> {
    state: Arc<Mutex<CompassState>>,
    live: Arc<Mutex<Option<LiveFeed>>>,
    app_handle: AppHandle<R>,
}

impl<R: Runtime> Clone for CompassController<R> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
            live: self.live.clone(),
            app_handle: self.app_handle.clone(),
        }
    }
}

impl<R: Runtime> CompassController<R> {
    pub fn new(app_handle: AppHandle<R>) -> Self {
        Self {
            state: Arc::new(Mutex::new(CompassState::new())),
            live: Arc::new(Mutex::new(None)),
            app_handle,
        }
    }

    pub async fn snapshot(&self) -> CompassSnapshot {
        self.state.lock().await.snapshot()
    }

    /// Manual heading input, applied immediately. Only valid while the
    /// manual source owns the heading.
    pub async fn set_manual_heading(&self, degrees: f64) -> Result<CompassSnapshot> {
        if !degrees.is_finite() {
            bail!("heading must be a finite number of degrees");
        }

        let snapshot = {
            let mut state = self.state.lock().await;
            if state.mode() == HeadingMode::Live {
                bail!("live compass is active; switch to manual mode first");
            }
            state.set_heading(degrees);
            state.snapshot()
        };

        let _ = self.app_handle.emit(HEADING_CHANGED_EVENT, snapshot.clone());
        Ok(snapshot)
    }

    /// Explicit sector pick. Unknown ids are a caller bug and fail loudly.
    pub async fn select_direction(&self, id: &str) -> Result<DirectionRecord> {
        let record =
            direction_by_id(id).ok_or_else(|| anyhow!("unknown direction id: {id}"))?;

        let snapshot = {
            let mut state = self.state.lock().await;
            state.select(record);
            state.snapshot()
        };

        let _ = self.app_handle.emit(DIRECTION_SELECTED_EVENT, snapshot);
        Ok(*record)
    }

    /// Switch to the live sensor source. The permission prompt itself runs
    /// on the platform side; this arbitrates its outcome. Denied or failed
    /// authorization is logged and leaves the app in manual mode, it is
    /// never an error.
    pub async fn enter_live_mode(&self, outcome: PermissionOutcome) -> Result<CompassSnapshot> {
        match outcome {
            PermissionOutcome::Granted | PermissionOutcome::NotRequired => {
                {
                    let mut live = self.live.lock().await;
                    if live.is_none() {
                        *live = Some(LiveFeed::spawn(
                            self.state.clone(),
                            self.app_handle.clone(),
                        ));
                    }
                }

                let snapshot = {
                    let mut state = self.state.lock().await;
                    state.set_mode(HeadingMode::Live);
                    state.snapshot()
                };

                info!("live compass mode active ({outcome:?})");
                let _ = self.app_handle.emit(MODE_CHANGED_EVENT, snapshot.clone());
                Ok(snapshot)
            }
            PermissionOutcome::Denied | PermissionOutcome::Failed => {
                warn!("device orientation authorization not granted ({outcome:?}); staying in manual mode");
                self.enter_manual_mode().await
            }
        }
    }

    /// Switch back to the manual source, releasing the feed worker. After
    /// this returns, injected sensor samples can no longer reach the
    /// heading.
    pub async fn enter_manual_mode(&self) -> Result<CompassSnapshot> {
        if let Some(feed) = self.live.lock().await.take() {
            feed.stop().await?;
        }

        let snapshot = {
            let mut state = self.state.lock().await;
            state.set_mode(HeadingMode::Manual);
            state.snapshot()
        };

        let _ = self.app_handle.emit(MODE_CHANGED_EVENT, snapshot.clone());
        Ok(snapshot)
    }

    /// Injection point for the platform orientation listener. Returns
    /// whether the sample was handed to the feed; while manual mode is
    /// active there is no feed and samples are ignored.
    pub async fn push_sample(&self, sample: OrientationSample) -> bool {
        let live = self.live.lock().await;
        match live.as_ref() {
            Some(feed) => {
                let delivered = feed.try_push(sample);
                if !delivered {
                    debug!("sample queue full, dropped one orientation sample");
                }
                delivered
            }
            None => {
                debug!("orientation sample ignored while manual mode is active");
                false
            }
        }
    }
}
