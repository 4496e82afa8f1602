mod advisor;
mod compass;
mod dial;
mod directions;

use std::sync::atomic::AtomicU64;
use std::sync::Arc;

use advisor::client::{AdvisorConfig, GeminiClient};
use advisor::commands::analyze_placement;
use advisor::RemedyAdvisor;
use compass::commands::{
    enter_live_mode, enter_manual_mode, get_compass_state, push_orientation_sample,
    select_direction, set_manual_heading,
};
use compass::CompassController;
use dial::commands::get_dial_geometry;
use directions::commands::{list_directions, list_room_types};
use log::info;
use tauri::Manager;

pub(crate) struct AppState {
    pub(crate) compass: CompassController,
    pub(crate) advisor: RemedyAdvisor,
    /// Ticket counter for analysis requests, see `analyze_placement`.
    pub(crate) analysis_seq: AtomicU64,
}

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    // Initialize logging (reads RUST_LOG env var)
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    info!("Vastu Compass starting up...");

    tauri::Builder::default()
        .plugin(tauri_plugin_opener::init())
        .setup(|app| {
            let result = (|| -> anyhow::Result<()> {
                let advisor_client = GeminiClient::new(AdvisorConfig::from_env())?;

                app.manage(AppState {
                    compass: CompassController::new(app.handle().clone()),
                    advisor: RemedyAdvisor::new(Arc::new(advisor_client)),
                    analysis_seq: AtomicU64::new(0),
                });

                Ok(())
            })();

            result.map_err(|err| err.into())
        })
        .invoke_handler(tauri::generate_handler![
            list_directions,
            list_room_types,
            get_dial_geometry,
            get_compass_state,
            set_manual_heading,
            select_direction,
            enter_live_mode,
            enter_manual_mode,
            push_orientation_sample,
            analyze_placement,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
