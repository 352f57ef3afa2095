//! Daily ritual commands: quote of the day and the evening prompt.

use crate::state::AppState;
use journal_core::content::{QUOTES, REFLECTION_PROMPTS};
use journal_core::types::Quote;
use journal_store::{QuoteRepository, ReflectionRepository};
use tauri::State;

use super::CommandError;

/// Quote of the day, chosen once per calendar day from the bundled corpus
/// and stable until midnight.
#[tauri::command]
pub async fn get_daily_quote(state: State<'_, AppState>) -> Result<Quote, CommandError> {
    let repo = state.repository.lock().expect("repository lock");
    repo.get_daily_quote(QUOTES).map_err(Into::into)
}

/// Evening reflection prompt for today.
#[tauri::command]
pub async fn get_daily_prompt(state: State<'_, AppState>) -> Result<String, CommandError> {
    let repo = state.repository.lock().expect("repository lock");
    repo.get_daily_prompt(REFLECTION_PROMPTS).map_err(Into::into)
}
