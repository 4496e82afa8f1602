use tauri::State;

use crate::directions::DirectionRecord;
use crate::AppState;

use super::feed::OrientationSample;
use super::state::CompassSnapshot;
use super::PermissionOutcome;

#[tauri::command]
pub async fn get_compass_state(state: State<'_, AppState>) -> Result<CompassSnapshot, String> {
    Ok(state.compass.snapshot().await)
}

#[tauri::command]
pub async fn set_manual_heading(
    state: State<'_, AppState>,
    degrees: f64,
) -> Result<CompassSnapshot, String> {
    state
        .compass
        .set_manual_heading(degrees)
        .await
        .map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn select_direction(
    state: State<'_, AppState>,
    direction_id: String,
) -> Result<DirectionRecord, String> {
    state
        .compass
        .select_direction(&direction_id)
        .await
        .map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn enter_live_mode(
    state: State<'_, AppState>,
    outcome: PermissionOutcome,
) -> Result<CompassSnapshot, String> {
    state
        .compass
        .enter_live_mode(outcome)
        .await
        .map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn enter_manual_mode(state: State<'_, AppState>) -> Result<CompassSnapshot, String> {
    state
        .compass
        .enter_manual_mode()
        .await
        .map_err(|e| e.to_string())
}

/// Forwarded device-orientation events. Returns whether the sample was
/// handed to the live feed; ignored samples are not an error.
#[tauri::command]
pub async fn push_orientation_sample(
    state: State<'_, AppState>,
    sample: OrientationSample,
) -> Result<bool, String> {
    Ok(state.compass.push_sample(sample).await)
}
