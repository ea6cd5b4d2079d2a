use crate::model::{Task, priority_rank};

/// The three rendered groupings, as indices into the full task list.
///
/// Sections are independent filters, not a partition: a task that is both
/// overdue and due today appears in both lists. Downstream rendering relies
/// on that, so it must not be "fixed" into a partition.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sections {
    pub overdue: Vec<usize>,
    pub today: Vec<usize>,
    pub done_this_month: Vec<usize>,
}

impl Sections {
    pub fn is_empty(&self) -> bool {
        self.overdue.is_empty() && self.today.is_empty() && self.done_this_month.is_empty()
    }
}

/// Partition a fresh task list into sections, each sorted by priority rank.
/// Ties keep the server's order (stable sort).
pub fn classify(tasks: &[Task]) -> Sections {
    Sections {
        overdue: filter_sorted(tasks, |t| t.overdue && !t.completed),
        today: filter_sorted(tasks, |t| !t.completed && t.due_today),
        done_this_month: filter_sorted(tasks, |t| t.completed_this_month),
    }
}

fn filter_sorted(tasks: &[Task], pred: impl Fn(&Task) -> bool) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..tasks.len()).filter(|&i| pred(&tasks[i])).collect();
    indices.sort_by_key(|&i| priority_rank(tasks[i].priority));
    indices
}

/// Count of open tasks across the full list, regardless of section
/// membership. A task filtered into zero sections still counts here.
pub fn open_count(tasks: &[Task]) -> usize {
    tasks.iter().filter(|t| !t.completed).count()
}

/// Summary counts over the full list. Overdue and due-today only count
/// open tasks, matching the section predicates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stats {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
    pub overdue: usize,
    pub due_today: usize,
}

pub fn stats(tasks: &[Task]) -> Stats {
    Stats {
        total: tasks.len(),
        completed: tasks.iter().filter(|t| t.completed).count(),
        pending: open_count(tasks),
        overdue: tasks.iter().filter(|t| t.overdue && !t.completed).count(),
        due_today: tasks.iter().filter(|t| t.due_today && !t.completed).count(),
    }
}
