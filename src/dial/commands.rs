use super::{dial_geometry, DialGeometry};

#[tauri::command]
pub fn get_dial_geometry() -> DialGeometry {
    dial_geometry()
}
