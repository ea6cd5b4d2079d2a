use std::io;
use std::time::{Duration, Instant};

use chrono::{Local, NaiveDate};
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::api::ApiClient;
use crate::io::config_io::load_config;
use crate::model::{Priority, Task};
use crate::ops::form::{DueChoice, ReminderChoice, build_new_task};
use crate::ops::sections::{Sections, classify, open_count};

use super::editor::{FieldEditor, FieldKind};
use super::input;
use super::notify::Notices;
use super::render;
use super::theme::Theme;

/// Which section a rendered row belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Overdue,
    Today,
    DoneThisMonth,
}

/// One selectable row in the section list
#[derive(Debug, Clone, Copy)]
pub struct RowRef {
    pub slot: Slot,
    pub task_idx: usize,
}

/// Transient save indicator next to the notes header
#[derive(Debug, Clone, Copy)]
pub struct SaveNote {
    pub ok: bool,
    pub until: Instant,
}

impl SaveNote {
    pub fn saved() -> Self {
        SaveNote {
            ok: true,
            until: Instant::now() + Duration::from_secs(2),
        }
    }

    pub fn failed() -> Self {
        SaveNote {
            ok: false,
            until: Instant::now() + Duration::from_secs(3),
        }
    }

    pub fn text(&self) -> &'static str {
        if self.ok { "Saved" } else { "Save failed" }
    }
}

/// State behind the task detail modal. The task itself is looked up by id on
/// every render, so a reload underneath never leaves a stale copy here.
#[derive(Debug)]
pub struct DetailState {
    pub task_id: i64,
    pub description: FieldEditor,
    pub notes: FieldEditor,
    pub notes_status: Option<SaveNote>,
    #[cfg(feature = "dev-tools")]
    pub date_edit: Option<String>,
}

impl DetailState {
    pub fn new(task: &Task) -> Self {
        DetailState {
            task_id: task.id,
            description: FieldEditor::new(FieldKind::Description, task.description.as_deref()),
            notes: FieldEditor::new(FieldKind::Notes, task.comment.as_deref()),
            notes_status: None,
            #[cfg(feature = "dev-tools")]
            date_edit: None,
        }
    }

    /// The editor currently in its edit state, if any.
    pub fn active_editor(&mut self) -> Option<&mut FieldEditor> {
        if self.description.is_editing() {
            Some(&mut self.description)
        } else if self.notes.is_editing() {
            Some(&mut self.notes)
        } else {
            None
        }
    }
}

/// Fields of the creation form, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Title,
    Description,
    Due,
    CustomDate,
    Priority,
    Reminder,
    CustomTime,
}

/// Draft state for the new-task form
#[derive(Debug)]
pub struct TaskForm {
    pub title: String,
    pub description: String,
    pub due: DueChoice,
    pub custom_date: String,
    pub priority: Priority,
    pub reminder: ReminderChoice,
    pub custom_time: String,
    pub focus: FormField,
    pub error: Option<String>,
}

impl Default for TaskForm {
    fn default() -> Self {
        TaskForm {
            title: String::new(),
            description: String::new(),
            due: DueChoice::Today,
            custom_date: String::new(),
            priority: Priority::Normal,
            reminder: ReminderChoice::None,
            custom_time: String::new(),
            focus: FormField::Title,
            error: None,
        }
    }
}

impl TaskForm {
    /// Fields reachable by tab, given the current choice selections.
    /// The custom inputs only exist while their choice is "custom".
    pub fn visible_fields(&self) -> Vec<FormField> {
        let mut fields = vec![FormField::Title, FormField::Description, FormField::Due];
        if self.due == DueChoice::Custom {
            fields.push(FormField::CustomDate);
        }
        fields.push(FormField::Priority);
        fields.push(FormField::Reminder);
        if self.reminder == ReminderChoice::Custom {
            fields.push(FormField::CustomTime);
        }
        fields
    }

    pub fn focus_next(&mut self) {
        let fields = self.visible_fields();
        let pos = fields.iter().position(|&f| f == self.focus).unwrap_or(0);
        self.focus = fields[(pos + 1) % fields.len()];
    }

    pub fn focus_prev(&mut self) {
        let fields = self.visible_fields();
        let pos = fields.iter().position(|&f| f == self.focus).unwrap_or(0);
        self.focus = fields[(pos + fields.len() - 1) % fields.len()];
    }

    /// Keep focus on a field that still exists after a choice change.
    pub fn clamp_focus(&mut self) {
        if !self.visible_fields().contains(&self.focus) {
            self.focus = FormField::Title;
        }
    }
}

/// Main application state
pub struct App {
    pub client: ApiClient,
    pub theme: Theme,
    pub tasks: Vec<Task>,
    pub sections: Sections,
    pub rows: Vec<RowRef>,
    pub cursor: usize,
    pub scroll_offset: usize,
    pub detail: Option<DetailState>,
    pub form: Option<TaskForm>,
    pub notices: Notices,
    pub loading: bool,
    pub today: NaiveDate,
    pub should_quit: bool,
}

impl App {
    pub fn new(client: ApiClient, theme: Theme) -> Self {
        App {
            client,
            theme,
            tasks: Vec::new(),
            sections: Sections::default(),
            rows: Vec::new(),
            cursor: 0,
            scroll_offset: 0,
            detail: None,
            form: None,
            notices: Notices::new(),
            loading: true,
            today: Local::now().date_naive(),
            should_quit: false,
        }
    }

    pub fn task(&self, id: i64) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn current_row(&self) -> Option<RowRef> {
        self.rows.get(self.cursor).copied()
    }

    pub fn open_tasks(&self) -> usize {
        open_count(&self.tasks)
    }

    /// Replace the task list with a fresh server snapshot and rebuild the
    /// section rows. The rendered view is always reconstructed from this,
    /// never patched in place.
    pub fn set_tasks(&mut self, tasks: Vec<Task>) {
        self.tasks = tasks;
        self.sections = classify(&self.tasks);
        self.rows.clear();
        for &i in &self.sections.overdue {
            self.rows.push(RowRef {
                slot: Slot::Overdue,
                task_idx: i,
            });
        }
        for &i in &self.sections.today {
            self.rows.push(RowRef {
                slot: Slot::Today,
                task_idx: i,
            });
        }
        for &i in &self.sections.done_this_month {
            self.rows.push(RowRef {
                slot: Slot::DoneThisMonth,
                task_idx: i,
            });
        }
        if self.cursor >= self.rows.len() {
            self.cursor = self.rows.len().saturating_sub(1);
        }
    }

    /// Fetch the full list and re-render from it. On failure the prior
    /// render stays in place and a banner reports the error.
    pub fn load_tasks(&mut self) {
        self.today = Local::now().date_naive();
        match self.client.list_all() {
            Ok(tasks) => self.set_tasks(tasks),
            Err(e) => self.notices.error(format!("Could not load tasks: {e}")),
        }
        self.loading = false;
    }

    /// Flip completion for a task, then reload on confirmed success only.
    /// Completed tasks are not toggled back from the list; the checkbox is
    /// disabled and only the detail view's reset action reverts them.
    pub fn toggle_task(&mut self, id: i64) {
        let Some(task) = self.task(id) else { return };
        if task.completed {
            return;
        }
        match self.client.toggle(id) {
            Ok(_) => self.load_tasks(),
            Err(e) => self.notices.error(format!("Could not update task: {e}")),
        }
    }

    pub fn toggle_current(&mut self) {
        if let Some(row) = self.current_row() {
            let id = self.tasks[row.task_idx].id;
            self.toggle_task(id);
        }
    }

    pub fn open_detail(&mut self) {
        if let Some(row) = self.current_row() {
            self.detail = Some(DetailState::new(&self.tasks[row.task_idx]));
        }
    }

    pub fn close_detail(&mut self) {
        self.detail = None;
    }

    /// Reset the detail task to incomplete, reload, and close the modal.
    pub fn reset_detail_task(&mut self) {
        let Some(id) = self.detail.as_ref().map(|d| d.task_id) else {
            return;
        };
        match self.client.reset_incomplete(id) {
            Ok(_) => {
                self.load_tasks();
                self.close_detail();
            }
            Err(e) => self.notices.error(format!("Could not reset task: {e}")),
        }
    }

    pub fn open_form(&mut self) {
        self.form = Some(TaskForm::default());
    }

    pub fn cancel_form(&mut self) {
        self.form = None;
    }

    /// Validate and submit the creation form. Validation failures show in
    /// the form and block submission; no request goes out for them.
    pub fn submit_form(&mut self) {
        let now = Local::now().naive_local();
        let new = {
            let Some(form) = &mut self.form else { return };
            match build_new_task(
                &form.title,
                &form.description,
                form.due,
                &form.custom_date,
                form.priority,
                form.reminder,
                &form.custom_time,
                now,
            ) {
                Ok(new) => new,
                Err(e) => {
                    form.error = Some(e.to_string());
                    return;
                }
            }
        };
        match self.client.create(&new) {
            Ok(_) => {
                self.form = None;
                self.load_tasks();
                self.notices.success("Task created");
            }
            Err(e) => self.notices.error(format!("Could not create task: {e}")),
        }
    }

    /// Expire the transient notes save indicator.
    pub fn sweep_save_note(&mut self) {
        if let Some(detail) = &mut self.detail
            && let Some(note) = &detail.notes_status
            && note.until <= Instant::now()
        {
            detail.notes_status = None;
        }
    }
}

/// Run the TUI application
pub fn run(url_override: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = load_config()?;
    if let Some(url) = url_override {
        config.server.base_url = url.to_string();
    }
    let theme = Theme::from_config(&config.ui);
    let client = ApiClient::new(
        &config.server.base_url,
        Duration::from_secs(config.server.timeout_secs),
    )?;
    let mut app = App::new(client, theme);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    // First paint shows the loading label, then the initial fetch replaces it
    terminal.draw(|frame| render::render(frame, &mut app))?;
    app.load_tasks();

    let result = run_event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            input::handle_key(app, key);
        }

        app.notices.sweep();
        app.sweep_save_note();

        if app.should_quit {
            break;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_app() -> App {
        let client = ApiClient::new("http://localhost:1/api/todos", Duration::from_secs(1))
            .expect("client");
        App::new(client, Theme::default())
    }

    fn task(id: i64) -> Task {
        Task {
            id,
            title: format!("task {id}"),
            ..Task::default()
        }
    }

    #[test]
    fn test_set_tasks_builds_rows_in_section_order() {
        let mut app = test_app();
        let mut overdue = task(1);
        overdue.overdue = true;
        let mut today = task(2);
        today.due_today = true;
        let mut done = task(3);
        done.completed = true;
        done.completed_this_month = true;
        app.set_tasks(vec![done, today, overdue]);

        let slots: Vec<Slot> = app.rows.iter().map(|r| r.slot).collect();
        assert_eq!(slots, vec![Slot::Overdue, Slot::Today, Slot::DoneThisMonth]);
        let ids: Vec<i64> = app.rows.iter().map(|r| app.tasks[r.task_idx].id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_cursor_clamped_when_rows_shrink() {
        let mut app = test_app();
        let mut a = task(1);
        a.due_today = true;
        let mut b = task(2);
        b.due_today = true;
        app.set_tasks(vec![a.clone(), b]);
        app.cursor = 1;
        app.set_tasks(vec![a]);
        assert_eq!(app.cursor, 0);
    }

    #[test]
    fn test_toggle_on_completed_task_is_a_noop() {
        let mut app = test_app();
        let mut done = task(4);
        done.completed = true;
        done.completed_this_month = true;
        app.set_tasks(vec![done]);
        // No request goes out; the checkbox is disabled once completed.
        app.toggle_task(4);
        assert!(app.notices.is_empty());
        assert!(app.tasks[0].completed);
    }

    #[test]
    fn test_form_focus_skips_hidden_custom_fields() {
        let mut form = TaskForm::default();
        assert!(!form.visible_fields().contains(&FormField::CustomDate));
        form.due = DueChoice::Custom;
        assert!(form.visible_fields().contains(&FormField::CustomDate));
        form.focus = FormField::CustomDate;
        form.due = DueChoice::Today;
        form.clamp_focus();
        assert_eq!(form.focus, FormField::Title);
    }

    #[test]
    fn test_submit_form_blocks_on_validation() {
        let mut app = test_app();
        app.open_form();
        app.submit_form();
        // Empty title: error shown in the form, no create request sent
        let form = app.form.as_ref().expect("form stays open");
        assert_eq!(form.error.as_deref(), Some("a task needs a title"));
    }
}
