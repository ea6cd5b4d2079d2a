use std::time::Duration;

use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;

use crate::api::ApiClient;
use crate::model::Task;
use crate::tui::app::App;
use crate::tui::theme::Theme;

pub const TERM_W: u16 = 120;
pub const TERM_H: u16 = 24;

/// Render into an in-memory buffer and return plain text (no styles).
pub fn render_to_string<F>(w: u16, h: u16, f: F) -> String
where
    F: FnOnce(&mut ratatui::Frame, Rect),
{
    let backend = TestBackend::new(w, h);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|frame| {
            let area = frame.area();
            f(frame, area);
        })
        .unwrap();

    let buf = terminal.backend().buffer().clone();
    let w = buf.area.width as usize;
    let lines: Vec<String> = buf
        .content
        .chunks(w)
        .map(|row| {
            let s: String = row.iter().map(|cell| cell.symbol()).collect();
            s.trim_end().to_string()
        })
        .collect();

    // Trim trailing blank lines
    let end = lines
        .iter()
        .rposition(|l| !l.is_empty())
        .map_or(0, |i| i + 1);
    lines[..end].join("\n")
}

/// Build an App whose client points nowhere, loaded with the given tasks.
pub fn app_with_tasks(tasks: Vec<Task>) -> App {
    let client =
        ApiClient::new("http://localhost:1/api/todos", Duration::from_secs(1)).expect("client");
    let mut app = App::new(client, Theme::default());
    app.loading = false;
    app.set_tasks(tasks);
    app
}
