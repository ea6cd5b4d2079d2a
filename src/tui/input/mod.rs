mod detail;
mod edit;
mod form;
mod navigate;

use crossterm::event::{KeyCode, KeyEvent};

use super::app::App;

/// Handle a key event, routed by which surface owns the keyboard:
/// form > due-date editor (dev builds) > field editor > detail view > list.
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }

    if app.form.is_some() {
        form::handle_form(app, key);
        return;
    }

    if app.detail.is_some() {
        #[cfg(feature = "dev-tools")]
        if app
            .detail
            .as_ref()
            .is_some_and(|d| d.date_edit.is_some())
        {
            edit::handle_date_edit(app, key);
            return;
        }

        let editing = app
            .detail
            .as_mut()
            .is_some_and(|d| d.active_editor().is_some());
        if editing {
            edit::handle_edit(app, key);
        } else {
            detail::handle_detail(app, key);
        }
        return;
    }

    navigate::handle_navigate(app, key);
}
