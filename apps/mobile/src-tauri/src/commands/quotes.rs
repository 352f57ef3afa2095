//! Saved quote commands. The frontend toggles a bookmark by checking
//! `is_quote_saved` first, then calling save or remove.

use crate::state::AppState;
use journal_core::types::SavedQuote;
use journal_store::QuoteRepository;
use tauri::State;

use super::CommandError;

#[tauri::command]
pub async fn is_quote_saved(
    text: String,
    author: String,
    state: State<'_, AppState>,
) -> Result<bool, CommandError> {
    let repo = state.repository.lock().expect("repository lock");
    repo.is_quote_saved(&text, &author).map_err(Into::into)
}

#[tauri::command]
pub async fn save_quote(
    text: String,
    author: String,
    state: State<'_, AppState>,
) -> Result<(), CommandError> {
    let repo = state.repository.lock().expect("repository lock");
    repo.save_quote(&text, &author).map_err(Into::into)
}

#[tauri::command]
pub async fn remove_saved_quote(
    text: String,
    author: String,
    state: State<'_, AppState>,
) -> Result<(), CommandError> {
    let repo = state.repository.lock().expect("repository lock");
    repo.remove_saved_quote(&text, &author).map_err(Into::into)
}

/// All bookmarked quotes, newest first.
#[tauri::command]
pub async fn get_saved_quotes(state: State<'_, AppState>) -> Result<Vec<SavedQuote>, CommandError> {
    let repo = state.repository.lock().expect("repository lock");
    repo.get_saved_quotes().map_err(Into::into)
}
