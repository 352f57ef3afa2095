//! Settings commands.

use crate::state::AppState;
use journal_core::settings::{AppSettings, SettingKey, SettingValue};
use journal_store::SettingsRepository;
use tauri::State;

use super::CommandError;

/// The full settings snapshot: defaults overlaid with stored rows.
#[tauri::command]
pub async fn get_all_settings(state: State<'_, AppState>) -> Result<AppSettings, CommandError> {
    let repo = state.repository.lock().expect("repository lock");
    repo.get_all_settings().map_err(Into::into)
}

/// Persist one setting. The value's kind must match the key's declared
/// kind.
#[tauri::command]
pub async fn save_setting(
    key: SettingKey,
    value: SettingValue,
    state: State<'_, AppState>,
) -> Result<(), CommandError> {
    let repo = state.repository.lock().expect("repository lock");
    repo.save_setting(key, value).map_err(Into::into)
}
