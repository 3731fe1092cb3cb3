use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Task status in the workflow
///
/// Anything that is not one of the three known wire strings is kept
/// verbatim in `Unknown` so it survives a round trip.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TaskStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
    Unknown(String),
}

impl TaskStatus {
    pub fn as_str(&self) -> &str {
        match self {
            TaskStatus::Pending => "pending",
            TaskStatus::InProgress => "in_progress",
            TaskStatus::Completed => "completed",
            TaskStatus::Unknown(s) => s,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, TaskStatus::Unknown(_))
    }
}

impl From<&str> for TaskStatus {
    fn from(s: &str) -> Self {
        match s {
            "pending" => TaskStatus::Pending,
            "in_progress" => TaskStatus::InProgress,
            "completed" => TaskStatus::Completed,
            other => TaskStatus::Unknown(other.to_string()),
        }
    }
}

impl From<String> for TaskStatus {
    fn from(s: String) -> Self {
        match TaskStatus::from(s.as_str()) {
            TaskStatus::Unknown(_) => TaskStatus::Unknown(s),
            known => known,
        }
    }
}

impl From<TaskStatus> for String {
    fn from(status: TaskStatus) -> Self {
        match status {
            TaskStatus::Unknown(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Goal status
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum GoalStatus {
    Draft,
    Active,
    Completed,
    Unknown(String),
}

impl GoalStatus {
    pub fn as_str(&self) -> &str {
        match self {
            GoalStatus::Draft => "draft",
            GoalStatus::Active => "active",
            GoalStatus::Completed => "completed",
            GoalStatus::Unknown(s) => s,
        }
    }
}

impl From<String> for GoalStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "draft" => GoalStatus::Draft,
            "active" => GoalStatus::Active,
            "completed" => GoalStatus::Completed,
            _ => GoalStatus::Unknown(s),
        }
    }
}

impl From<GoalStatus> for String {
    fn from(status: GoalStatus) -> Self {
        match status {
            GoalStatus::Unknown(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for GoalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A "depends on" edge declared by a task
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskDependency {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub depends_on_task_id: String,
}

impl TaskDependency {
    pub fn on(depends_on_task_id: impl Into<String>) -> Self {
        TaskDependency {
            id: None,
            depends_on_task_id: depends_on_task_id.into(),
        }
    }
}

fn default_duration_days() -> u32 {
    1
}

/// A task belonging to a goal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: TaskStatus,
    #[serde(default = "default_duration_days")]
    pub duration_days: u32,
    #[serde(default)]
    pub dependencies: Vec<TaskDependency>,
}

impl Task {
    /// A pending one-day task with no dependencies
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Task {
            id: id.into(),
            name: name.into(),
            description: None,
            status: TaskStatus::Pending,
            duration_days: default_duration_days(),
            dependencies: Vec::new(),
        }
    }

    pub fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = status;
        self
    }

    pub fn depends_on(mut self, id: impl Into<String>) -> Self {
        self.dependencies.push(TaskDependency::on(id));
        self
    }
}

/// A goal and the tasks generated for it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    pub id: String,
    pub text: String,
    pub status: GoalStatus,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub tasks: Vec<Task>,
}

/// What the engine needs to know about a task.
///
/// Implemented for [`Task`]; callers holding their own records can
/// implement it instead of converting.
pub trait TaskNode {
    fn id(&self) -> &str;

    fn status(&self) -> &TaskStatus;

    /// Dependency targets in declared order, duplicates and dangling ids included
    fn dependency_ids(&self) -> impl Iterator<Item = &str>;
}

impl TaskNode for Task {
    fn id(&self) -> &str {
        &self.id
    }

    fn status(&self) -> &TaskStatus {
        &self.status
    }

    fn dependency_ids(&self) -> impl Iterator<Item = &str> {
        self.dependencies
            .iter()
            .map(|d| d.depends_on_task_id.as_str())
    }
}
