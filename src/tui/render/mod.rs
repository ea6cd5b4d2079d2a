pub mod detail_view;
pub mod form_view;
pub mod notices;
pub mod sections_view;
pub mod status_row;
#[cfg(test)]
pub mod test_helpers;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::widgets::Block;

use super::app::App;

/// Main render function — dispatches to sub-renderers
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Background fill
    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    // Layout: content area | status row (1 row)
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),    // section list
            Constraint::Length(1), // status row
        ])
        .split(area);

    sections_view::render_sections(frame, app, chunks[0]);

    // Modals on top of the list
    if app.detail.is_some() {
        detail_view::render_detail(frame, app, frame.area());
    }
    if app.form.is_some() {
        form_view::render_form(frame, app, frame.area());
    }

    // Transient banners on top of everything
    notices::render_notices(frame, app, frame.area());

    status_row::render_status_row(frame, app, chunks[1]);
}

/// A rect of `width` x `height` centered in `area`, clamped to fit.
pub(super) fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    let x = area.x + (area.width - w) / 2;
    let y = area.y + (area.height - h) / 2;
    Rect::new(x, y, w, h)
}
