use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::App;

/// Render the status row (bottom of screen) with hints for the active surface.
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let hint = if app.form.is_some() {
        "Enter create  Tab field  Esc cancel"
    } else if let Some(detail) = &app.detail {
        if detail.description.is_editing() || detail.notes.is_editing() {
            "Ctrl+Enter save  Esc discard  Ctrl+U clear"
        } else {
            "d description  n notes  r reopen  Esc back"
        }
    } else {
        "j/k move  space toggle  Enter details  a add  r refresh  q quit"
    };

    let line = Line::from(Span::styled(
        format!(" {hint}"),
        Style::default().fg(app.theme.dim).bg(app.theme.background),
    ));
    let paragraph = Paragraph::new(line).style(Style::default().bg(app.theme.background));
    frame.render_widget(paragraph, area);
}
