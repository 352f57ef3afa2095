//! Tauri commands exposed to the frontend.

pub mod daily;
pub mod gratitudes;
pub mod quotes;
pub mod reflections;
pub mod routine;
pub mod settings;

pub use daily::{get_daily_prompt, get_daily_quote};
pub use gratitudes::{
    delete_gratitude, get_gratitudes, get_today_gratitudes, save_gratitude, update_gratitude,
};
pub use quotes::{get_saved_quotes, is_quote_saved, remove_saved_quote, save_quote};
pub use reflections::{
    delete_reflection, get_reflections, get_today_reflection, save_reflection,
};
pub use routine::{
    get_morning_routine_items, sync_morning_routine_items, update_morning_routine_item_status,
};
pub use settings::{get_all_settings, save_setting};

/// Error shape surfaced to the frontend; storage failures abort the
/// in-progress action with a generic notice.
#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct CommandError {
    pub message: String,
}

impl From<journal_store::StoreError> for CommandError {
    fn from(e: journal_store::StoreError) -> Self {
        Self {
            message: e.to_string(),
        }
    }
}
