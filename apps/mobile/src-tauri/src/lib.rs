mod commands;
mod state;

use commands::daily::{get_daily_prompt, get_daily_quote};
use commands::gratitudes::{
    delete_gratitude, get_gratitudes, get_today_gratitudes, save_gratitude, update_gratitude,
};
use commands::quotes::{get_saved_quotes, is_quote_saved, remove_saved_quote, save_quote};
use commands::reflections::{
    delete_reflection, get_reflections, get_today_reflection, save_reflection,
};
use commands::routine::{
    get_morning_routine_items, sync_morning_routine_items, update_morning_routine_item_status,
};
use commands::settings::{get_all_settings, save_setting};
use journal_store::SqliteRepository;
use state::AppState;
use std::path::PathBuf;

fn get_db_path() -> PathBuf {
    // Use app data directory for production, fallback to current dir
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("mindwell")
        .join("mindwell.db")
}

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    // Ensure data directory exists
    let db_path = get_db_path();
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent).ok();
    }

    // Open the database once; schema creation is idempotent
    let repository = SqliteRepository::open(&db_path).expect("failed to open database");
    let app_state = AppState::new(repository);

    tauri::Builder::default()
        .plugin(tauri_plugin_shell::init())
        .manage(app_state)
        .invoke_handler(tauri::generate_handler![
            // Daily ritual commands
            get_daily_quote,
            get_daily_prompt,
            // Reflection commands
            save_reflection,
            get_today_reflection,
            get_reflections,
            delete_reflection,
            // Gratitude commands
            save_gratitude,
            update_gratitude,
            delete_gratitude,
            get_today_gratitudes,
            get_gratitudes,
            // Saved quote commands
            is_quote_saved,
            save_quote,
            remove_saved_quote,
            get_saved_quotes,
            // Routine commands
            get_morning_routine_items,
            sync_morning_routine_items,
            update_morning_routine_item_status,
            // Settings commands
            get_all_settings,
            save_setting,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
