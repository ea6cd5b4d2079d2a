use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::{Clear, Paragraph};

use crate::tui::app::App;
use crate::tui::notify::NoticeKind;
use crate::util::text::display_width;

/// Render the transient banner stack in the top-right corner, newest last.
/// Concurrent notices stack downward instead of replacing each other.
pub fn render_notices(frame: &mut Frame, app: &App, area: Rect) {
    for (i, notice) in app.notices.iter().enumerate() {
        let y = area.y + i as u16;
        if y >= area.bottom() {
            break;
        }
        let text = format!(" {} ", notice.text);
        let w = (display_width(&text) as u16).min(area.width);
        let x = area.right().saturating_sub(w);
        let rect = Rect::new(x, y, w, 1);

        let bg = match notice.kind {
            NoticeKind::Error => app.theme.error_bg,
            NoticeKind::Success => app.theme.success_bg,
        };
        frame.render_widget(Clear, rect);
        let banner =
            Paragraph::new(text).style(Style::default().fg(app.theme.text_bright).bg(bg));
        frame.render_widget(banner, rect);
    }
}
