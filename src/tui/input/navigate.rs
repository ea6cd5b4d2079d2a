use crossterm::event::{KeyCode, KeyEvent};

use crate::tui::app::App;

/// Keys on the section list.
pub(super) fn handle_navigate(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Char('j') | KeyCode::Down => move_cursor(app, 1),
        KeyCode::Char('k') | KeyCode::Up => move_cursor(app, -1),
        KeyCode::Char('g') | KeyCode::Home => app.cursor = 0,
        KeyCode::Char('G') | KeyCode::End => {
            app.cursor = app.rows.len().saturating_sub(1);
        }
        KeyCode::Char(' ') | KeyCode::Char('x') => app.toggle_current(),
        KeyCode::Enter => app.open_detail(),
        KeyCode::Char('a') => app.open_form(),
        KeyCode::Char('r') => app.load_tasks(),
        _ => {}
    }
}

fn move_cursor(app: &mut App, delta: isize) {
    if app.rows.is_empty() {
        return;
    }
    let last = app.rows.len() - 1;
    app.cursor = app
        .cursor
        .saturating_add_signed(delta)
        .min(last);
}
