//! Task status workflow.
//!
//! Every known status can reach the other two, so a completed task can be
//! reopened. This module only reports what is offered; applying a change is
//! up to whoever owns the task records.

use crate::error::{GoalflowError, Result};
use crate::models::TaskStatus;
use serde::Serialize;
use std::fmt;

/// A status change offered to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    Start,
    MarkComplete,
    MoveToPending,
    Reopen,
}

impl Action {
    pub fn target_status(&self) -> TaskStatus {
        match self {
            Action::Start | Action::Reopen => TaskStatus::InProgress,
            Action::MarkComplete => TaskStatus::Completed,
            Action::MoveToPending => TaskStatus::Pending,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Action::Start => "Start Task",
            Action::MarkComplete => "Mark Complete",
            Action::MoveToPending => "Move to Pending",
            Action::Reopen => "Reopen",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

const FROM_PENDING: &[Action] = &[Action::Start, Action::MarkComplete];
const FROM_IN_PROGRESS: &[Action] = &[Action::MarkComplete, Action::MoveToPending];
const FROM_COMPLETED: &[Action] = &[Action::Reopen, Action::MoveToPending];

/// Actions offered for a task in `status`, in display order.
/// An unrecognized status gets none.
pub fn offered_actions(status: &TaskStatus) -> &'static [Action] {
    match status {
        TaskStatus::Pending => FROM_PENDING,
        TaskStatus::InProgress => FROM_IN_PROGRESS,
        TaskStatus::Completed => FROM_COMPLETED,
        TaskStatus::Unknown(_) => &[],
    }
}

/// A target status paired with its label
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Transition {
    pub target: TaskStatus,
    pub label: &'static str,
}

impl From<Action> for Transition {
    fn from(action: Action) -> Self {
        Transition {
            target: action.target_status(),
            label: action.label(),
        }
    }
}

pub fn offered_transitions(status: &TaskStatus) -> Vec<Transition> {
    offered_actions(status)
        .iter()
        .copied()
        .map(Transition::from)
        .collect()
}

pub fn is_offered(from: &TaskStatus, to: &TaskStatus) -> bool {
    offered_actions(from)
        .iter()
        .any(|action| action.target_status() == *to)
}

/// Reject a status change the workflow does not offer
pub fn check_transition(from: &TaskStatus, to: &TaskStatus) -> Result<()> {
    if is_offered(from, to) {
        Ok(())
    } else {
        Err(GoalflowError::InvalidTransition {
            from: from.to_string(),
            to: to.to_string(),
        })
    }
}
