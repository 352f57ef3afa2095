//! Morning routine checklist commands.

use crate::state::AppState;
use journal_core::types::RoutineItem;
use journal_store::RoutineRepository;
use tauri::State;

use super::CommandError;

/// The checklist in display order (ascending id).
#[tauri::command]
pub async fn get_morning_routine_items(
    state: State<'_, AppState>,
) -> Result<Vec<RoutineItem>, CommandError> {
    let repo = state.repository.lock().expect("repository lock");
    repo.get_morning_routine_items().map_err(Into::into)
}

/// Commit a structural edit (add/remove/reorder/relabel) by replacing the
/// whole checklist. Ids in `items` are discarded; fetch the list again for
/// the freshly issued ones.
#[tauri::command]
pub async fn sync_morning_routine_items(
    items: Vec<RoutineItem>,
    state: State<'_, AppState>,
) -> Result<(), CommandError> {
    let repo = state.repository.lock().expect("repository lock");
    repo.sync_morning_routine_items(&items).map_err(Into::into)
}

/// Everyday check/uncheck of a single item.
#[tauri::command]
pub async fn update_morning_routine_item_status(
    id: i64,
    checked: bool,
    state: State<'_, AppState>,
) -> Result<(), CommandError> {
    let repo = state.repository.lock().expect("repository lock");
    repo.update_morning_routine_item_status(id, checked)
        .map_err(Into::into)
}
