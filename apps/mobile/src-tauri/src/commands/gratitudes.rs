//! Gratitude log commands.

use crate::state::AppState;
use journal_core::types::Gratitude;
use journal_store::GratitudeRepository;
use tauri::State;

use super::CommandError;

#[tauri::command]
pub async fn save_gratitude(
    content: String,
    state: State<'_, AppState>,
) -> Result<(), CommandError> {
    let repo = state.repository.lock().expect("repository lock");
    repo.save_gratitude(&content).map_err(Into::into)
}

#[tauri::command]
pub async fn update_gratitude(
    id: i64,
    content: String,
    state: State<'_, AppState>,
) -> Result<(), CommandError> {
    let repo = state.repository.lock().expect("repository lock");
    repo.update_gratitude(id, &content).map_err(Into::into)
}

#[tauri::command]
pub async fn delete_gratitude(id: i64, state: State<'_, AppState>) -> Result<(), CommandError> {
    let repo = state.repository.lock().expect("repository lock");
    repo.delete_gratitude(id).map_err(Into::into)
}

/// Entries logged today, newest first.
#[tauri::command]
pub async fn get_today_gratitudes(
    state: State<'_, AppState>,
) -> Result<Vec<Gratitude>, CommandError> {
    let repo = state.repository.lock().expect("repository lock");
    repo.get_today_gratitudes().map_err(Into::into)
}

/// The full gratitude log, newest first.
#[tauri::command]
pub async fn get_gratitudes(state: State<'_, AppState>) -> Result<Vec<Gratitude>, CommandError> {
    let repo = state.repository.lock().expect("repository lock");
    repo.get_gratitudes().map_err(Into::into)
}
