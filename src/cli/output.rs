use serde::Serialize;

use crate::model::{Priority, Task};
use crate::ops::sections::{Sections, Stats};

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct TaskJson {
    pub id: i64,
    pub title: String,
    pub completed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reminder: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_date: Option<String>,
}

impl TaskJson {
    pub fn from_task(task: &Task) -> Self {
        TaskJson {
            id: task.id,
            title: task.title.clone(),
            completed: task.completed,
            description: task.description.clone(),
            notes: task.comment.clone(),
            due_date: task.due_date.map(|d| d.to_string()),
            priority: task.priority.map(priority_name),
            reminder: task.reminder.map(|r| r.to_string()),
            completed_date: task.completed_date.map(|d| d.to_string()),
        }
    }
}

/// Wire-format priority name, matching what the service stores.
fn priority_name(p: Priority) -> String {
    match p {
        Priority::High => "high",
        Priority::Medium => "medium",
        Priority::Normal => "normal",
        Priority::Unknown => "unknown",
    }
    .to_string()
}

#[derive(Serialize)]
pub struct StatsJson {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
    pub overdue: usize,
    pub due_today: usize,
}

impl StatsJson {
    pub fn from_stats(stats: &Stats) -> Self {
        StatsJson {
            total: stats.total,
            completed: stats.completed,
            pending: stats.pending,
            overdue: stats.overdue,
            due_today: stats.due_today,
        }
    }
}

#[derive(Serialize)]
pub struct SectionsJson {
    pub open_count: usize,
    pub overdue: Vec<TaskJson>,
    pub today: Vec<TaskJson>,
    pub done_this_month: Vec<TaskJson>,
}

impl SectionsJson {
    pub fn build(tasks: &[Task], sections: &Sections, open_count: usize) -> Self {
        let view = |indices: &[usize]| {
            indices
                .iter()
                .map(|&i| TaskJson::from_task(&tasks[i]))
                .collect()
        };
        SectionsJson {
            open_count,
            overdue: view(&sections.overdue),
            today: view(&sections.today),
            done_this_month: view(&sections.done_this_month),
        }
    }
}
