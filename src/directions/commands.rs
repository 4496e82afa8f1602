use super::{DirectionRecord, RoomType, DIRECTIONS, ROOM_TYPES};

#[tauri::command]
pub fn list_directions() -> Vec<DirectionRecord> {
    DIRECTIONS.to_vec()
}

#[tauri::command]
pub fn list_room_types() -> Vec<RoomType> {
    ROOM_TYPES.to_vec()
}
