use thiserror::Error;

/// All possible errors in goalflow
#[derive(Error, Debug)]
pub enum GoalflowError {
    #[error("Task {0} not found")]
    TaskNotFound(String),

    #[error("Cyclic dependency at task {task_id}: {path}", path = format_cycle(cycle))]
    CyclicDependency { task_id: String, cycle: Vec<String> },

    #[error("Invalid status transition from {from} to {to}")]
    InvalidTransition { from: String, to: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

fn format_cycle(cycle: &[String]) -> String {
    cycle.join(" -> ")
}

/// Result type alias
pub type Result<T> = std::result::Result<T, GoalflowError>;
