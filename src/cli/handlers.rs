use std::time::Duration;

use chrono::Local;

use crate::api::ApiClient;
use crate::cli::commands::{AddArgs, Cli, Commands, IdArgs};
use crate::cli::output::{SectionsJson, StatsJson, TaskJson};
use crate::io::config_io::load_config;
use crate::model::{NewTask, Priority, Task};
use crate::ops::form::{DueChoice, ReminderChoice, resolve_due_date, resolve_reminder};
use crate::ops::sections::{classify, open_count, stats};
use crate::util::dates::{format_month_year, format_today_label};

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let json = cli.json;
    let client = connect(cli.url.as_deref())?;

    match cli.command {
        None => unreachable!("main launches the TUI when no subcommand is given"),
        Some(cmd) => match cmd {
            Commands::List => cmd_list(&client, json),
            Commands::Show(args) => cmd_show(&client, args, json),
            Commands::Stats => cmd_stats(&client, json),
            Commands::Add(args) => cmd_add(&client, args, json),
            Commands::Toggle(args) => cmd_toggle(&client, args, json),
            Commands::Reset(args) => cmd_reset(&client, args, json),
            Commands::Rm(args) => cmd_rm(&client, args),
        },
    }
}

fn connect(url_override: Option<&str>) -> Result<ApiClient, Box<dyn std::error::Error>> {
    let mut config = load_config()?;
    if let Some(url) = url_override {
        config.server.base_url = url.to_string();
    }
    let client = ApiClient::new(
        &config.server.base_url,
        Duration::from_secs(config.server.timeout_secs),
    )?;
    Ok(client)
}

// ---------------------------------------------------------------------------
// Read commands
// ---------------------------------------------------------------------------

fn cmd_list(client: &ApiClient, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let tasks = client.list_all()?;
    let sections = classify(&tasks);
    let open = open_count(&tasks);

    if json {
        let out = SectionsJson::build(&tasks, &sections, open);
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    let today = Local::now().date_naive();
    if !sections.overdue.is_empty() {
        println!("Overdue");
        for &i in &sections.overdue {
            print_task_row(&tasks[i]);
        }
        println!();
    }
    println!("{} ({} tasks)", format_today_label(today), open);
    for &i in &sections.today {
        print_task_row(&tasks[i]);
    }
    if !sections.done_this_month.is_empty() {
        println!();
        println!("Completed in {}", format_month_year(today));
        for &i in &sections.done_this_month {
            print_task_row(&tasks[i]);
        }
    }
    Ok(())
}

fn print_task_row(task: &Task) {
    let checkbox = if task.completed { "[x]" } else { "[ ]" };
    let priority = task
        .priority
        .filter(|_| !task.completed)
        .map_or(String::new(), |p| format!(" ({})", p.label()));
    println!("  {} {:>4}  {}{}", checkbox, task.id, task.title, priority);
}

fn cmd_stats(client: &ApiClient, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let tasks = client.list_all()?;
    let counts = stats(&tasks);
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&StatsJson::from_stats(&counts))?
        );
        return Ok(());
    }
    println!("total      {}", counts.total);
    println!("completed  {}", counts.completed);
    println!("pending    {}", counts.pending);
    println!("overdue    {}", counts.overdue);
    println!("due today  {}", counts.due_today);
    Ok(())
}

fn cmd_show(client: &ApiClient, args: IdArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let task = client.get_by_id(args.id)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&TaskJson::from_task(&task))?);
        return Ok(());
    }
    println!("{} {}", task.id, task.title);
    if let Some(desc) = &task.description {
        println!("  description: {desc}");
    }
    if let Some(comment) = &task.comment {
        println!("  notes: {comment}");
    }
    if let Some(due) = task.due_date {
        println!("  due: {due}");
    }
    if let Some(priority) = task.priority {
        println!("  priority: {}", priority.label());
    }
    if let Some(reminder) = task.reminder {
        println!("  reminder: {reminder}");
    }
    if task.completed {
        match task.completed_date {
            Some(at) => println!("  completed: {at}"),
            None => println!("  completed"),
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Write commands
// ---------------------------------------------------------------------------

fn cmd_add(client: &ApiClient, args: AddArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let now = Local::now().naive_local();
    let title = args.title.trim();
    if title.is_empty() {
        return Err("a task needs a title".into());
    }

    let due_date = match args.due.as_deref().map(str::trim) {
        None | Some("today") => Some(now.date()),
        Some("tomorrow") => now.date().succ_opt(),
        Some(date) => resolve_due_date(DueChoice::Custom, date, now.date())?,
    };
    let priority = match args.priority.as_deref().map(str::trim) {
        None | Some("normal") => Priority::Normal,
        Some("medium") => Priority::Medium,
        Some("high") => Priority::High,
        Some(other) => return Err(format!("unknown priority '{other}'").into()),
    };
    let reminder = match args.remind.as_deref().map(str::trim) {
        None => None,
        Some("1h") => resolve_reminder(ReminderChoice::OneHour, "", now)?,
        Some("tomorrow9") => resolve_reminder(ReminderChoice::TomorrowNine, "", now)?,
        Some(time) => resolve_reminder(ReminderChoice::Custom, time, now)?,
    };

    let new = NewTask {
        title: title.to_string(),
        description: args
            .desc
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .map(str::to_string),
        due_date,
        priority: Some(priority),
        reminder,
    };
    let task = client.create(&new)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&TaskJson::from_task(&task))?);
    } else {
        println!("Added task {}: {}", task.id, task.title);
    }
    Ok(())
}

fn cmd_toggle(
    client: &ApiClient,
    args: IdArgs,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    // The list view never un-completes a task; the CLI mirrors that and
    // requires an explicit `reset` instead.
    let current = client.get_by_id(args.id)?;
    if current.completed {
        return Err(format!("task {} is already completed; use `dl reset {}`", args.id, args.id).into());
    }
    let task = client.toggle(args.id)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&TaskJson::from_task(&task))?);
    } else {
        println!("Completed task {}: {}", task.id, task.title);
    }
    Ok(())
}

fn cmd_reset(
    client: &ApiClient,
    args: IdArgs,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let task = client.reset_incomplete(args.id)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&TaskJson::from_task(&task))?);
    } else {
        println!("Reopened task {}: {}", task.id, task.title);
    }
    Ok(())
}

fn cmd_rm(client: &ApiClient, args: IdArgs) -> Result<(), Box<dyn std::error::Error>> {
    client.delete(args.id)?;
    println!("Deleted task {}", args.id);
    Ok(())
}
