pub mod cli;
pub mod cli_handlers;
pub mod core;
pub mod error;
pub mod graph;
pub mod models;
pub mod order;
pub mod progress;
pub mod workflow;

pub use crate::core::GoalView;
pub use error::{GoalflowError, Result};
pub use graph::{Dependency, TaskGraph};
pub use models::*;
pub use order::{BackEdge, CyclePolicy, DependencyOrderer, OrderedTasks, order_tasks};
pub use progress::{DashboardStats, GoalSummary, Progress, StatusGroups, aggregate, group_by_status};
pub use workflow::{Action, Transition, offered_actions, offered_transitions};
