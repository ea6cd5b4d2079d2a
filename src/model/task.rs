use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Task priority as the server reports it.
///
/// The fixed sort order is `high < medium < normal`; anything else
/// (older records carry `"low"`) sorts after all known priorities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Priority {
    High,
    Medium,
    Normal,
    Unknown,
}

impl From<String> for Priority {
    fn from(s: String) -> Self {
        match s.as_str() {
            "high" => Priority::High,
            "medium" => Priority::Medium,
            "normal" => Priority::Normal,
            _ => Priority::Unknown,
        }
    }
}

impl Priority {
    /// Sort rank. Unknown priorities rank last.
    pub fn rank(self) -> u8 {
        match self {
            Priority::High => 1,
            Priority::Medium => 2,
            Priority::Normal => 4,
            Priority::Unknown => 99,
        }
    }

    /// Short display label.
    pub fn label(self) -> &'static str {
        match self {
            Priority::High => "Urgent",
            Priority::Medium => "Elevated",
            Priority::Normal => "Normal",
            Priority::Unknown => "Unset",
        }
    }
}

/// Rank for an optional priority; a missing priority ranks with Unknown.
pub fn priority_rank(priority: Option<Priority>) -> u8 {
    priority.map_or(99, Priority::rank)
}

/// A task as the server owns it. The client never fabricates one of these;
/// every instance comes from a server response.
///
/// `overdue`, `due_today` and `completed_this_month` are computed server-side
/// and are read-only here. They default to false when a response omits them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Task {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    /// Free-text notes. The server stamps `comment_updated_date` on change.
    pub comment: Option<String>,
    pub comment_updated_date: Option<NaiveDateTime>,
    pub completed: bool,
    pub completed_date: Option<NaiveDateTime>,
    pub created_date: Option<NaiveDateTime>,
    pub due_date: Option<NaiveDate>,
    pub priority: Option<Priority>,
    pub reminder: Option<NaiveDateTime>,
    pub overdue: bool,
    pub due_today: bool,
    pub completed_this_month: bool,
}

/// Fields the client may send when creating a task.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTask {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reminder: Option<NaiveDateTime>,
}

/// Partial update body for `PUT /{id}`. Only the set fields are sent;
/// the server merges them into the stored task.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}
