//! Evening reflection commands.

use crate::state::AppState;
use journal_core::types::Reflection;
use journal_store::ReflectionRepository;
use tauri::State;

use super::CommandError;

/// Save today's reflection, overwriting one saved earlier today.
#[tauri::command]
pub async fn save_reflection(
    prompt: String,
    answer: String,
    state: State<'_, AppState>,
) -> Result<(), CommandError> {
    let repo = state.repository.lock().expect("repository lock");
    repo.save_reflection(&prompt, &answer).map_err(Into::into)
}

#[tauri::command]
pub async fn get_today_reflection(
    state: State<'_, AppState>,
) -> Result<Option<Reflection>, CommandError> {
    let repo = state.repository.lock().expect("repository lock");
    repo.get_today_reflection().map_err(Into::into)
}

/// All reflections, newest first.
#[tauri::command]
pub async fn get_reflections(state: State<'_, AppState>) -> Result<Vec<Reflection>, CommandError> {
    let repo = state.repository.lock().expect("repository lock");
    repo.get_reflections().map_err(Into::into)
}

#[tauri::command]
pub async fn delete_reflection(id: i64, state: State<'_, AppState>) -> Result<(), CommandError> {
    let repo = state.repository.lock().expect("repository lock");
    repo.delete_reflection(id).map_err(Into::into)
}
