use crossterm::event::{KeyCode, KeyEvent};

use crate::tui::app::App;

/// Keys in the detail modal while no editor is active.
pub(super) fn handle_detail(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => app.close_detail(),
        KeyCode::Char('d') => begin_edit_description(app),
        KeyCode::Char('n') => begin_edit_notes(app),
        KeyCode::Char('r') => reset_if_completed(app),
        #[cfg(feature = "dev-tools")]
        KeyCode::Char('e') => begin_date_edit(app),
        _ => {}
    }
}

// One editor at a time: activating a field while the other is open is
// ignored, and re-entry on the same field is a no-op inside the editor.
fn begin_edit_description(app: &mut App) {
    if let Some(detail) = &mut app.detail {
        if detail.notes.is_editing() {
            return;
        }
        detail.description.begin_edit();
    }
}

fn begin_edit_notes(app: &mut App) {
    if let Some(detail) = &mut app.detail {
        if detail.description.is_editing() {
            return;
        }
        detail.notes.begin_edit();
    }
}

/// The reset action exists only for completed tasks.
fn reset_if_completed(app: &mut App) {
    let completed = app
        .detail
        .as_ref()
        .and_then(|d| app.task(d.task_id))
        .is_some_and(|t| t.completed);
    if completed {
        app.reset_detail_task();
    }
}


#[cfg(feature = "dev-tools")]
fn begin_date_edit(app: &mut App) {
    let current = app
        .detail
        .as_ref()
        .and_then(|d| app.task(d.task_id))
        .and_then(|t| t.due_date)
        .map(|d| d.to_string())
        .unwrap_or_default();
    if let Some(detail) = &mut app.detail {
        detail.date_edit = Some(current);
    }
}
