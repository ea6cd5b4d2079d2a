use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::Task;
use crate::tui::app::{App, Slot};
use crate::util::dates::{format_day_month, format_month_year, format_today_label};
use crate::util::text::{
    DESCRIPTION_PREVIEW_CHARS, display_width, sanitize_inline, truncate_chars, truncate_to_width,
};

/// Render the three task sections. Overdue and completed-this-month are
/// hidden entirely while empty; the today section always renders, empty or
/// not, so the date header and open count stay on screen.
pub fn render_sections(frame: &mut Frame, app: &mut App, area: Rect) {
    let width = area.width as usize;
    let visible_height = area.height as usize;

    // Build display lines, remembering which row each one belongs to
    let mut display_lines: Vec<(Option<usize>, Line)> = Vec::new();

    if !app.sections.overdue.is_empty() {
        display_lines.push((
            None,
            header_line(" Overdue", Style::default().fg(app.theme.red).add_modifier(Modifier::BOLD)),
        ));
        push_section_rows(app, Slot::Overdue, width, &mut display_lines);
        display_lines.push((None, Line::from("")));
    }

    display_lines.push((
        None,
        header_line(
            &format!(" {}", format_today_label(app.today)),
            Style::default()
                .fg(app.theme.text_bright)
                .add_modifier(Modifier::BOLD),
        ),
    ));
    let count_label = if app.loading {
        "Loading\u{2026}".to_string()
    } else {
        format!("{} tasks", app.open_tasks())
    };
    display_lines.push((
        None,
        Line::from(Span::styled(
            format!(" {count_label}"),
            Style::default().fg(app.theme.dim),
        )),
    ));
    push_section_rows(app, Slot::Today, width, &mut display_lines);

    if !app.sections.done_this_month.is_empty() {
        display_lines.push((None, Line::from("")));
        display_lines.push((
            None,
            header_line(
                &format!(" Completed in {}", format_month_year(app.today)),
                Style::default().fg(app.theme.dim).add_modifier(Modifier::BOLD),
            ),
        ));
        push_section_rows(app, Slot::DoneThisMonth, width, &mut display_lines);
    }

    // Keep the cursor row on screen
    if let Some(cursor_line) = display_lines
        .iter()
        .position(|(row, _)| *row == Some(app.cursor))
    {
        if cursor_line < app.scroll_offset {
            app.scroll_offset = cursor_line;
        } else if cursor_line >= app.scroll_offset + visible_height {
            app.scroll_offset = cursor_line + 1 - visible_height;
        }
    }
    if app.scroll_offset >= display_lines.len() {
        app.scroll_offset = display_lines.len().saturating_sub(1);
    }

    let lines: Vec<Line> = display_lines
        .into_iter()
        .skip(app.scroll_offset)
        .take(visible_height)
        .map(|(_, line)| line)
        .collect();

    let paragraph = Paragraph::new(lines).style(Style::default().bg(app.theme.background));
    frame.render_widget(paragraph, area);
}

fn header_line(text: &str, style: Style) -> Line<'static> {
    Line::from(Span::styled(text.to_string(), style))
}

fn push_section_rows(
    app: &App,
    slot: Slot,
    width: usize,
    display_lines: &mut Vec<(Option<usize>, Line<'static>)>,
) {
    for (row_idx, row) in app.rows.iter().enumerate() {
        if row.slot != slot {
            continue;
        }
        let task = &app.tasks[row.task_idx];
        let selected = row_idx == app.cursor;
        display_lines.push((Some(row_idx), task_row(app, task, selected, width)));
    }
}

fn task_row(app: &App, task: &Task, selected: bool, width: usize) -> Line<'static> {
    let bg = if selected {
        app.theme.selection_bg
    } else {
        app.theme.background
    };
    let mut spans: Vec<Span> = Vec::new();

    let checkbox = if task.completed { " [x] " } else { " [ ] " };
    spans.push(Span::styled(
        checkbox,
        Style::default().fg(app.theme.dim).bg(bg),
    ));

    let title = sanitize_inline(&task.title);
    let title_style = if task.completed {
        // Priority coloring stops mattering once the task is done
        Style::default()
            .fg(app.theme.dim)
            .bg(bg)
            .add_modifier(Modifier::CROSSED_OUT)
    } else {
        Style::default()
            .fg(app.theme.priority_color(task.priority))
            .bg(bg)
    };
    spans.push(Span::styled(title, title_style));

    if let Some(desc) = &task.description
        && !desc.trim().is_empty()
    {
        let preview = truncate_chars(&sanitize_inline(desc), DESCRIPTION_PREVIEW_CHARS);
        spans.push(Span::styled("  ", Style::default().bg(bg)));
        spans.push(Span::styled(
            preview,
            Style::default().fg(app.theme.dim).bg(bg),
        ));
    }

    // Trailing date, right-aligned: completion date for done tasks,
    // the due date otherwise
    let date_text = if task.completed {
        task.completed_date.map(format_day_month)
    } else {
        task.due_date.map(|d| d.to_string())
    };
    if let Some(date_text) = date_text {
        let content_width: usize = spans.iter().map(|s| display_width(&s.content)).sum();
        let date_width = display_width(&date_text) + 1; // trailing margin
        if content_width + date_width + 1 < width {
            let padding = width - content_width - date_width;
            spans.push(Span::styled(" ".repeat(padding), Style::default().bg(bg)));
            spans.push(Span::styled(
                format!("{date_text} "),
                Style::default().fg(app.theme.dim).bg(bg),
            ));
        }
    } else if selected {
        // Pad selection to the full row width
        let content_width: usize = spans.iter().map(|s| display_width(&s.content)).sum();
        if content_width < width {
            spans.push(Span::styled(
                " ".repeat(width - content_width),
                Style::default().bg(bg),
            ));
        }
    }

    // Last resort if the row overflows the terminal
    let total: usize = spans.iter().map(|s| display_width(&s.content)).sum();
    if total > width {
        let flat: String = spans.iter().map(|s| s.content.as_ref()).collect();
        return Line::from(Span::styled(
            truncate_to_width(&flat, width),
            Style::default().fg(app.theme.text).bg(bg),
        ));
    }

    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::{TERM_W, app_with_tasks, render_to_string};
    use chrono::NaiveDate;

    fn task(id: i64, title: &str) -> Task {
        Task {
            id,
            title: title.to_string(),
            ..Task::default()
        }
    }

    #[test]
    fn test_today_section_always_renders() {
        let mut app = app_with_tasks(vec![]);
        let out = render_to_string(TERM_W, 24, |frame, area| {
            render_sections(frame, &mut app, area);
        });
        assert!(out.contains(&format_today_label(app.today)));
        assert!(out.contains("0 tasks"));
        assert!(!out.contains("Overdue"));
        assert!(!out.contains("Completed in"));
    }

    #[test]
    fn test_overdue_section_appears_when_nonempty() {
        let mut overdue = task(1, "pay rent");
        overdue.overdue = true;
        let mut app = app_with_tasks(vec![overdue]);
        let out = render_to_string(TERM_W, 24, |frame, area| {
            render_sections(frame, &mut app, area);
        });
        assert!(out.contains("Overdue"));
        assert!(out.contains("pay rent"));
    }

    #[test]
    fn test_task_in_two_sections_renders_twice() {
        let mut both = task(1, "water plants");
        both.overdue = true;
        both.due_today = true;
        let mut app = app_with_tasks(vec![both]);
        let out = render_to_string(TERM_W, 24, |frame, area| {
            render_sections(frame, &mut app, area);
        });
        assert_eq!(out.matches("water plants").count(), 2);
    }

    #[test]
    fn test_open_count_spans_all_tasks() {
        // A task in no section still counts as open
        let mut today = task(1, "visible");
        today.due_today = true;
        let hidden = task(2, "no due date");
        let mut app = app_with_tasks(vec![today, hidden]);
        let out = render_to_string(TERM_W, 24, |frame, area| {
            render_sections(frame, &mut app, area);
        });
        assert!(out.contains("2 tasks"));
        assert!(!out.contains("no due date"));
    }

    #[test]
    fn test_completed_row_shows_completion_date() {
        let mut done = task(1, "shipped");
        done.completed = true;
        done.completed_this_month = true;
        done.completed_date = NaiveDate::from_ymd_opt(2025, 8, 14)
            .unwrap()
            .and_hms_opt(9, 30, 0);
        let mut app = app_with_tasks(vec![done]);
        let out = render_to_string(TERM_W, 24, |frame, area| {
            render_sections(frame, &mut app, area);
        });
        assert!(out.contains("[x] shipped"));
        assert!(out.contains("14 Aug"));
    }

    #[test]
    fn test_long_description_preview_is_capped() {
        let mut t = task(1, "t");
        t.due_today = true;
        t.description = Some("d".repeat(120));
        let mut app = app_with_tasks(vec![t]);
        let out = render_to_string(300, 24, |frame, area| {
            render_sections(frame, &mut app, area);
        });
        let expected = format!("{}\u{2026}", "d".repeat(80));
        assert!(out.contains(&expected));
        assert!(!out.contains(&"d".repeat(81)));
    }
}
