use crate::graph::TaskGraph;
use crate::models::{Goal, GoalStatus, TaskNode, TaskStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Per-goal completion counts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Progress {
    pub total: usize,
    pub completed: usize,
    pub in_progress: usize,
    /// Everything that is neither completed nor in progress, unknown statuses included
    pub pending: usize,
    pub percent_complete: u32,
}

/// Count statuses over a task collection. Order does not matter.
pub fn aggregate<T: TaskNode>(tasks: &[T]) -> Progress {
    let total = tasks.len();
    let completed = tasks
        .iter()
        .filter(|t| *t.status() == TaskStatus::Completed)
        .count();
    let in_progress = tasks
        .iter()
        .filter(|t| *t.status() == TaskStatus::InProgress)
        .count();

    Progress {
        total,
        completed,
        in_progress,
        pending: total - completed - in_progress,
        percent_complete: percent(completed, total),
    }
}

/// round(part / whole * 100) with halves rounded up; 0 for an empty whole
pub fn percent(part: usize, whole: usize) -> u32 {
    if whole == 0 {
        return 0;
    }
    let (part, whole) = (part as u64, whole as u64);
    ((200 * part + whole) / (2 * whole)) as u32
}

impl<T: TaskNode> TaskGraph<'_, T> {
    pub fn progress(&self) -> Progress {
        aggregate(self.tasks())
    }
}

/// Tasks bucketed by status, each bucket keeping the order it was given
#[derive(Debug)]
pub struct StatusGroups<'a, T> {
    pub pending: Vec<&'a T>,
    pub in_progress: Vec<&'a T>,
    pub completed: Vec<&'a T>,
}

impl<T> StatusGroups<'_, T> {
    pub fn len(&self) -> usize {
        self.pending.len() + self.in_progress.len() + self.completed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Partition an ordered sequence by status. Unknown statuses count as pending.
pub fn group_by_status<'a, T, I>(ordered: I) -> StatusGroups<'a, T>
where
    T: TaskNode + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let mut groups = StatusGroups {
        pending: Vec::new(),
        in_progress: Vec::new(),
        completed: Vec::new(),
    };

    for task in ordered {
        match task.status() {
            TaskStatus::Completed => groups.completed.push(task),
            TaskStatus::InProgress => groups.in_progress.push(task),
            TaskStatus::Pending | TaskStatus::Unknown(_) => groups.pending.push(task),
        }
    }

    groups
}

/// Goal list entry with its task counts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalSummary {
    pub id: String,
    pub text: String,
    pub status: GoalStatus,
    pub created_at: DateTime<Utc>,
    pub task_count: usize,
    pub completed_tasks: usize,
}

impl GoalSummary {
    pub fn from_goal(goal: &Goal) -> Self {
        let progress = aggregate(&goal.tasks);
        GoalSummary {
            id: goal.id.clone(),
            text: goal.text.clone(),
            status: goal.status.clone(),
            created_at: goal.created_at,
            task_count: progress.total,
            completed_tasks: progress.completed,
        }
    }

    pub fn percent_complete(&self) -> u32 {
        percent(self.completed_tasks.min(self.task_count), self.task_count)
    }
}

/// Totals across all of a user's goals
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DashboardStats {
    pub total_goals: usize,
    pub active_goals: usize,
    pub completed_goals: usize,
    pub total_tasks: usize,
    pub completed_tasks: usize,
}

impl DashboardStats {
    pub fn from_summaries(summaries: &[GoalSummary]) -> Self {
        summaries
            .iter()
            .fold(DashboardStats::default(), |mut stats, goal| {
                stats.total_goals += 1;
                match goal.status {
                    GoalStatus::Active => stats.active_goals += 1,
                    GoalStatus::Completed => stats.completed_goals += 1,
                    GoalStatus::Draft | GoalStatus::Unknown(_) => {}
                }
                stats.total_tasks += goal.task_count;
                stats.completed_tasks += goal.completed_tasks;
                stats
            })
    }
}
