use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::{App, FormField, TaskForm};
use crate::tui::render::centered_rect;
use crate::tui::theme::Theme;

/// Render the new-task form modal.
pub fn render_form(frame: &mut Frame, app: &App, area: Rect) {
    let Some(form) = &app.form else { return };
    let theme = &app.theme;

    let modal = centered_rect(area, area.width.saturating_sub(8).min(64), 16);
    frame.render_widget(Clear, modal);
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" New task ")
        .border_style(Style::default().fg(theme.highlight))
        .style(Style::default().bg(theme.background));
    let inner = block.inner(modal);
    frame.render_widget(block, modal);

    let mut lines: Vec<Line> = Vec::new();
    lines.push(text_field(theme, form, FormField::Title, "Title", &form.title));
    lines.push(text_field(
        theme,
        form,
        FormField::Description,
        "Description",
        &form.description,
    ));
    lines.push(choice_field(theme, form, FormField::Due, "Due", form.due.label()));
    if form.visible_fields().contains(&FormField::CustomDate) {
        lines.push(text_field(
            theme,
            form,
            FormField::CustomDate,
            "  date (YYYY-MM-DD)",
            &form.custom_date,
        ));
    }
    lines.push(choice_field(
        theme,
        form,
        FormField::Priority,
        "Priority",
        form.priority.label(),
    ));
    lines.push(choice_field(
        theme,
        form,
        FormField::Reminder,
        "Reminder",
        form.reminder.label(),
    ));
    if form.visible_fields().contains(&FormField::CustomTime) {
        lines.push(text_field(
            theme,
            form,
            FormField::CustomTime,
            "  time (HH:MM)",
            &form.custom_time,
        ));
    }

    lines.push(Line::from(""));
    if let Some(error) = &form.error {
        lines.push(Line::from(Span::styled(
            format!(" {error}"),
            Style::default().fg(theme.red),
        )));
    } else {
        lines.push(Line::from(Span::styled(
            " Enter create  Tab next field  space cycle  Esc cancel",
            Style::default().fg(theme.dim),
        )));
    }

    let paragraph = Paragraph::new(lines).style(Style::default().bg(theme.background));
    frame.render_widget(paragraph, inner);
}

fn label_span(theme: &Theme, focused: bool, label: &str) -> Span<'static> {
    let style = if focused {
        Style::default()
            .fg(theme.highlight)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.text)
    };
    Span::styled(format!(" {label:<20} "), style)
}

fn text_field(
    theme: &Theme,
    form: &TaskForm,
    field: FormField,
    label: &str,
    value: &str,
) -> Line<'static> {
    let focused = form.focus == field;
    let mut spans = vec![
        label_span(theme, focused, label),
        Span::styled(value.to_string(), Style::default().fg(theme.text_bright)),
    ];
    if focused {
        spans.push(Span::styled(
            "\u{258C}",
            Style::default().fg(theme.highlight),
        ));
    }
    Line::from(spans)
}

fn choice_field(
    theme: &Theme,
    form: &TaskForm,
    field: FormField,
    label: &str,
    value: &str,
) -> Line<'static> {
    let focused = form.focus == field;
    Line::from(vec![
        label_span(theme, focused, label),
        Span::styled(
            format!("\u{2039} {value} \u{203A}"),
            Style::default().fg(if focused {
                theme.text_bright
            } else {
                theme.text
            }),
        ),
    ])
}
