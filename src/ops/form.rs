use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};

use crate::model::{NewTask, Priority};

/// Client-side validation failures. These block submission at the form
/// boundary; no request is sent.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("a task needs a title")]
    EmptyTitle,
    #[error("due date is in the past; pick today or later")]
    PastDueDate,
    #[error("due date must look like YYYY-MM-DD, got {0:?}")]
    BadDueDate(String),
    #[error("reminder time must look like HH:MM, got {0:?}")]
    BadReminderTime(String),
}

/// Due date selection on the creation form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DueChoice {
    #[default]
    Today,
    Tomorrow,
    Custom,
}

impl DueChoice {
    pub fn label(self) -> &'static str {
        match self {
            DueChoice::Today => "today",
            DueChoice::Tomorrow => "tomorrow",
            DueChoice::Custom => "custom",
        }
    }

    pub fn next(self) -> Self {
        match self {
            DueChoice::Today => DueChoice::Tomorrow,
            DueChoice::Tomorrow => DueChoice::Custom,
            DueChoice::Custom => DueChoice::Today,
        }
    }
}

/// Reminder selection on the creation form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReminderChoice {
    #[default]
    None,
    OneHour,
    TomorrowNine,
    Custom,
}

impl ReminderChoice {
    pub fn label(self) -> &'static str {
        match self {
            ReminderChoice::None => "none",
            ReminderChoice::OneHour => "in 1 hour",
            ReminderChoice::TomorrowNine => "tomorrow 09:00",
            ReminderChoice::Custom => "custom",
        }
    }

    pub fn next(self) -> Self {
        match self {
            ReminderChoice::None => ReminderChoice::OneHour,
            ReminderChoice::OneHour => ReminderChoice::TomorrowNine,
            ReminderChoice::TomorrowNine => ReminderChoice::Custom,
            ReminderChoice::Custom => ReminderChoice::None,
        }
    }
}

/// Resolve the due date from the form selection. A custom date strictly
/// before today is rejected; a custom selection with no date typed in means
/// "no due date".
pub fn resolve_due_date(
    choice: DueChoice,
    custom: &str,
    today: NaiveDate,
) -> Result<Option<NaiveDate>, FormError> {
    match choice {
        DueChoice::Today => Ok(Some(today)),
        DueChoice::Tomorrow => Ok(today.succ_opt()),
        DueChoice::Custom => {
            let custom = custom.trim();
            if custom.is_empty() {
                return Ok(None);
            }
            let date = NaiveDate::parse_from_str(custom, "%Y-%m-%d")
                .map_err(|_| FormError::BadDueDate(custom.to_string()))?;
            if date < today {
                return Err(FormError::PastDueDate);
            }
            Ok(Some(date))
        }
    }
}

/// Resolve the reminder timestamp from the form selection. A custom reminder
/// is `HH:MM` today.
pub fn resolve_reminder(
    choice: ReminderChoice,
    custom: &str,
    now: NaiveDateTime,
) -> Result<Option<NaiveDateTime>, FormError> {
    match choice {
        ReminderChoice::None => Ok(None),
        ReminderChoice::OneHour => Ok(Some(now + Duration::hours(1))),
        ReminderChoice::TomorrowNine => Ok(now
            .date()
            .succ_opt()
            .and_then(|d| d.and_hms_opt(9, 0, 0))),
        ReminderChoice::Custom => {
            let custom = custom.trim();
            if custom.is_empty() {
                return Ok(None);
            }
            let time = NaiveTime::parse_from_str(custom, "%H:%M")
                .map_err(|_| FormError::BadReminderTime(custom.to_string()))?;
            Ok(Some(now.date().and_time(time)))
        }
    }
}

/// Assemble the create payload from raw form fields, validating everything
/// client-side first.
#[allow(clippy::too_many_arguments)]
pub fn build_new_task(
    title: &str,
    description: &str,
    due: DueChoice,
    custom_date: &str,
    priority: Priority,
    reminder: ReminderChoice,
    custom_time: &str,
    now: NaiveDateTime,
) -> Result<NewTask, FormError> {
    let title = title.trim();
    if title.is_empty() {
        return Err(FormError::EmptyTitle);
    }
    let due_date = resolve_due_date(due, custom_date, now.date())?;
    let reminder = resolve_reminder(reminder, custom_time, now)?;
    let description = description.trim();
    Ok(NewTask {
        title: title.to_string(),
        description: (!description.is_empty()).then(|| description.to_string()),
        due_date,
        priority: Some(priority),
        reminder,
    })
}
