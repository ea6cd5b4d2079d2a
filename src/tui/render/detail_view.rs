use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use crate::model::Task;
use crate::tui::app::{App, DetailState};
use crate::tui::editor::{EditorState, FieldEditor};
use crate::tui::render::centered_rect;
use crate::tui::theme::Theme;
use crate::util::dates::{format_completed, format_updated};
use crate::util::text::sanitize_inline;

/// Render the task detail modal on top of the section list.
pub fn render_detail(frame: &mut Frame, app: &App, area: Rect) {
    let Some(detail) = &app.detail else { return };

    let modal = centered_rect(area, area.width.saturating_sub(8).min(96), 20);
    frame.render_widget(Clear, modal);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.dim))
        .style(Style::default().bg(app.theme.background));
    let inner = block.inner(modal);
    frame.render_widget(block, modal);

    // The task is looked up fresh; a reload may have removed it
    let Some(task) = app.task(detail.task_id) else {
        let gone = Paragraph::new(" Task no longer exists")
            .style(Style::default().fg(app.theme.dim).bg(app.theme.background));
        frame.render_widget(gone, inner);
        return;
    };

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(inner);

    render_fields_column(frame, app, detail, task, columns[0]);
    render_meta_column(frame, &app.theme, task, columns[1]);
}

fn render_fields_column(
    frame: &mut Frame,
    app: &App,
    detail: &DetailState,
    task: &Task,
    area: Rect,
) {
    let theme = &app.theme;
    let mut lines: Vec<Line> = Vec::new();

    lines.push(Line::from(Span::styled(
        format!(" {}", task.title),
        Style::default()
            .fg(theme.text_bright)
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(""));

    push_editor(&mut lines, theme, "Description", &detail.description, None);
    lines.push(Line::from(""));

    let notes_status = detail.notes_status.as_ref().map(|n| {
        let color = if n.ok { theme.green } else { theme.red };
        Span::styled(format!("  {}", n.text()), Style::default().fg(color))
    });
    push_editor(&mut lines, theme, "Notes", &detail.notes, notes_status);
    if let Some(updated) = task.comment_updated_date {
        lines.push(Line::from(Span::styled(
            format!("   updated {}", format_updated(updated)),
            Style::default().fg(theme.dim),
        )));
    }

    #[cfg(feature = "dev-tools")]
    if let Some(buf) = &detail.date_edit {
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled(" Due date: ", Style::default().fg(theme.yellow)),
            Span::styled(buf.clone(), Style::default().fg(theme.text_bright)),
            Span::styled("\u{258C}", Style::default().fg(theme.highlight)),
        ]));
    }

    let paragraph = Paragraph::new(lines)
        .style(Style::default().bg(theme.background))
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

/// One editable field: a header line plus its Empty/Display/Editing body.
fn push_editor(
    lines: &mut Vec<Line<'static>>,
    theme: &Theme,
    label: &str,
    editor: &FieldEditor,
    trailer: Option<Span<'static>>,
) {
    let header_style = if editor.is_editing() {
        Style::default().fg(theme.highlight).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.text).add_modifier(Modifier::BOLD)
    };
    let mut header = vec![Span::styled(format!(" {label}"), header_style)];
    if let Some(trailer) = trailer {
        header.push(trailer);
    }
    lines.push(Line::from(header));

    match &editor.state {
        EditorState::Empty => {
            lines.push(Line::from(Span::styled(
                format!("   {}", editor.kind.empty_prompt()),
                Style::default().fg(theme.dim),
            )));
        }
        EditorState::Display => {
            for text_line in editor.value().lines() {
                lines.push(Line::from(Span::styled(
                    format!("   {}", sanitize_inline(text_line)),
                    Style::default().fg(theme.text),
                )));
            }
        }
        EditorState::Editing { draft } => {
            let mut draft_lines: Vec<&str> = draft.split('\n').collect();
            let last = draft_lines.pop().unwrap_or("");
            for text_line in draft_lines {
                lines.push(Line::from(Span::styled(
                    format!("   {}", sanitize_inline(text_line)),
                    Style::default().fg(theme.text_bright),
                )));
            }
            lines.push(Line::from(vec![
                Span::styled(
                    format!("   {}", sanitize_inline(last)),
                    Style::default().fg(theme.text_bright),
                ),
                Span::styled("\u{258C}", Style::default().fg(theme.highlight)),
            ]));
        }
    }
}

fn render_meta_column(frame: &mut Frame, theme: &Theme, task: &Task, area: Rect) {
    let mut lines: Vec<Line> = Vec::new();

    let label_style = Style::default().fg(theme.dim);
    let value_style = Style::default().fg(theme.text);

    lines.push(Line::from(vec![
        Span::styled(" Due       ", label_style),
        Span::styled(
            task.due_date.map_or("none".to_string(), |d| d.to_string()),
            value_style,
        ),
    ]));

    let priority_label = task.priority.map_or("Unset", |p| p.label());
    lines.push(Line::from(vec![
        Span::styled(" Priority  ", label_style),
        Span::styled(
            priority_label,
            Style::default().fg(theme.priority_color(task.priority)),
        ),
    ]));

    lines.push(Line::from(vec![
        Span::styled(" Reminder  ", label_style),
        Span::styled(
            task.reminder.map_or("none".to_string(), format_completed),
            value_style,
        ),
    ]));

    lines.push(Line::from(""));
    if task.completed {
        lines.push(Line::from(vec![
            Span::styled(" Completed ", label_style),
            Span::styled(
                task.completed_date.map_or(String::new(), format_completed),
                Style::default().fg(theme.green),
            ),
        ]));
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            " r reopen task",
            Style::default().fg(theme.yellow),
        )));
    } else {
        lines.push(Line::from(vec![
            Span::styled(" Status    ", label_style),
            Span::styled("Open", value_style),
        ]));
    }

    let paragraph = Paragraph::new(lines).style(Style::default().bg(theme.background));
    frame.render_widget(paragraph, area);
}
