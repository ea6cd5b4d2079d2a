use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::{App, SaveNote};
use crate::tui::editor::FieldKind;

/// Keys while a description/notes editor is active. Ctrl+Enter commits,
/// Esc discards the draft, everything else edits it locally.
pub(super) fn handle_edit(app: &mut App, key: KeyEvent) {
    if key.code == KeyCode::Enter && key.modifiers.contains(KeyModifiers::CONTROL) {
        save_active(app);
        return;
    }
    let Some(detail) = app.detail.as_mut() else {
        return;
    };
    let Some(editor) = detail.active_editor() else {
        return;
    };
    match key.code {
        KeyCode::Esc => editor.cancel(),
        KeyCode::Enter => editor.input('\n'),
        KeyCode::Backspace => editor.backspace(),
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            editor.clear_draft()
        }
        KeyCode::Char(c) => editor.input(c),
        KeyCode::Tab => editor.input('\t'),
        _ => {}
    }
}

/// Commit the active draft: trim, send the single-field update, and on
/// success transition the widget and reload the list so every view agrees
/// with the server. On failure the editor stays open for a retry.
fn save_active(app: &mut App) {
    let Some(detail) = app.detail.as_mut() else {
        return;
    };
    let task_id = detail.task_id;
    let Some(editor) = detail.active_editor() else {
        return;
    };
    let kind = editor.kind;
    let trimmed = editor.draft().unwrap_or("").trim().to_string();

    match kind {
        FieldKind::Description => match app.client.set_description(task_id, &trimmed) {
            Ok(_) => {
                detail.description.commit(&trimmed);
                app.load_tasks();
            }
            Err(e) => {
                app.notices
                    .error(format!("Could not save description: {e}"));
            }
        },
        FieldKind::Notes => match app.client.set_comment(task_id, &trimmed) {
            Ok(_) => {
                detail.notes.commit(&trimmed);
                detail.notes_status = Some(SaveNote::saved());
                app.load_tasks();
            }
            Err(_) => {
                // Inline status instead of a banner; the draft stays put
                detail.notes_status = Some(SaveNote::failed());
            }
        },
    }
}

/// Keys in the due-date editor (debug builds only).
#[cfg(feature = "dev-tools")]
pub(super) fn handle_date_edit(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            if let Some(detail) = app.detail.as_mut() {
                detail.date_edit = None;
            }
        }
        KeyCode::Enter => save_date(app),
        KeyCode::Backspace => {
            if let Some(buf) = app.detail.as_mut().and_then(|d| d.date_edit.as_mut()) {
                buf.pop();
            }
        }
        KeyCode::Char(c) => {
            if let Some(buf) = app.detail.as_mut().and_then(|d| d.date_edit.as_mut()) {
                buf.push(c);
            }
        }
        _ => {}
    }
}

#[cfg(feature = "dev-tools")]
fn save_date(app: &mut App) {
    use chrono::NaiveDate;

    let Some((task_id, buf)) = app
        .detail
        .as_ref()
        .and_then(|d| d.date_edit.clone().map(|b| (d.task_id, b)))
    else {
        return;
    };
    let current = app.task(task_id).and_then(|t| t.due_date);

    let trimmed = buf.trim();
    if trimmed.is_empty() {
        if let Some(detail) = app.detail.as_mut() {
            detail.date_edit = None;
        }
        return;
    }
    let date = match NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        Ok(d) => d,
        Err(_) => {
            app.notices
                .error(format!("Due date must look like YYYY-MM-DD, got {trimmed:?}"));
            return;
        }
    };
    if Some(date) == current {
        if let Some(detail) = app.detail.as_mut() {
            detail.date_edit = None;
        }
        return;
    }
    match app.client.set_due_date(task_id, date) {
        Ok(_) => {
            app.close_detail();
            app.load_tasks();
        }
        Err(e) => app.notices.error(format!("Could not update due date: {e}")),
    }
}
