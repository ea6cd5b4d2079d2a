use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::model::Priority;
use crate::tui::app::{App, FormField};

/// Keys while the new-task form is open. Text goes to the focused field;
/// space cycles the choice fields; Enter submits from anywhere.
pub(super) fn handle_form(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            app.cancel_form();
            return;
        }
        KeyCode::Enter => {
            app.submit_form();
            return;
        }
        _ => {}
    }

    let Some(form) = app.form.as_mut() else {
        return;
    };
    match key.code {
        KeyCode::Tab | KeyCode::Down => form.focus_next(),
        KeyCode::BackTab | KeyCode::Up => form.focus_prev(),
        KeyCode::Backspace => {
            match form.focus {
                FormField::Title => form.title.pop(),
                FormField::Description => form.description.pop(),
                FormField::CustomDate => form.custom_date.pop(),
                FormField::CustomTime => form.custom_time.pop(),
                _ => None,
            };
        }
        KeyCode::Char(' ') => cycle_choice(app),
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            match form.focus {
                FormField::Title => form.title.push(c),
                FormField::Description => form.description.push(c),
                FormField::CustomDate => form.custom_date.push(c),
                FormField::CustomTime => form.custom_time.push(c),
                _ => return,
            }
            // Typing clears a stale validation message
            form.error = None;
        }
        _ => {}
    }
}

fn cycle_choice(app: &mut App) {
    let Some(form) = app.form.as_mut() else {
        return;
    };
    match form.focus {
        FormField::Due => {
            form.due = form.due.next();
            form.clamp_focus();
        }
        FormField::Priority => {
            form.priority = match form.priority {
                Priority::Normal => Priority::Medium,
                Priority::Medium => Priority::High,
                _ => Priority::Normal,
            };
        }
        FormField::Reminder => {
            form.reminder = form.reminder.next();
            form.clamp_focus();
        }
        // Space is a literal character in the text fields
        FormField::Title => form.title.push(' '),
        FormField::Description => form.description.push(' '),
        FormField::CustomDate | FormField::CustomTime => {}
    }
}
