use std::sync::atomic::Ordering;

use serde::Serialize;
use tauri::State;

use crate::directions::{direction_by_id, room_type_by_id};
use crate::AppState;

use super::RemedyResult;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    /// Monotonic per-process sequence. The UI keeps the seq of its latest
    /// request and drops reports that come back with an older one.
    pub request_seq: u64,
    pub direction_id: String,
    pub room_id: String,
    pub result: RemedyResult,
}

#[tauri::command]
pub async fn analyze_placement(
    state: State<'_, AppState>,
    direction_id: String,
    room_id: String,
) -> Result<AnalysisReport, String> {
    let direction = direction_by_id(&direction_id)
        .ok_or_else(|| format!("unknown direction id: {direction_id}"))?;
    let room =
        room_type_by_id(&room_id).ok_or_else(|| format!("unknown room type id: {room_id}"))?;

    let request_seq = state.analysis_seq.fetch_add(1, Ordering::Relaxed) + 1;

    // Total call: failures were already converted to the fallback result.
    let result = state.advisor.evaluate(direction, room).await;

    Ok(AnalysisReport {
        request_seq,
        direction_id,
        room_id,
        result,
    })
}
