use crate::error::{GoalflowError, Result};
use crate::graph::TaskGraph;
use crate::models::{Goal, Task, TaskStatus};
use crate::order::{CyclePolicy, DependencyOrderer, OrderedTasks};
use crate::progress::{self, GoalSummary, Progress, StatusGroups};
use crate::workflow::{self, Transition};
use tracing::debug;

/// A goal snapshot with its dependency graph built once
pub struct GoalView<'a> {
    goal: &'a Goal,
    graph: TaskGraph<'a, Task>,
}

impl<'a> GoalView<'a> {
    pub fn new(goal: &'a Goal) -> Self {
        debug!(goal = %goal.id, tasks = goal.tasks.len(), "building task graph");
        GoalView {
            goal,
            graph: TaskGraph::new(&goal.tasks),
        }
    }

    pub fn goal(&self) -> &'a Goal {
        self.goal
    }

    pub fn graph(&self) -> &TaskGraph<'a, Task> {
        &self.graph
    }

    pub fn task(&self, id: &str) -> Result<&'a Task> {
        self.graph
            .task_by_id(id)
            .ok_or_else(|| GoalflowError::TaskNotFound(id.to_string()))
    }

    pub fn ordered(&self, policy: CyclePolicy) -> Result<OrderedTasks<'a, Task>> {
        DependencyOrderer::new(policy).order(&self.graph)
    }

    pub fn progress(&self) -> Progress {
        self.graph.progress()
    }

    /// Lenient dependency order, split by status
    pub fn grouped(&self) -> Result<StatusGroups<'a, Task>> {
        let ordered = self.ordered(CyclePolicy::Lenient)?;
        Ok(progress::group_by_status(ordered.tasks))
    }

    pub fn actions_for(&self, id: &str) -> Result<Vec<Transition>> {
        let task = self.task(id)?;
        Ok(workflow::offered_transitions(&task.status))
    }

    pub fn check_status_change(&self, id: &str, to: &TaskStatus) -> Result<()> {
        let task = self.task(id)?;
        workflow::check_transition(&task.status, to)
    }

    /// Validate a new "`task_id` depends on `depends_on`" edge before it is sent
    pub fn check_new_dependency(&self, task_id: &str, depends_on: &str) -> Result<()> {
        self.task(task_id)?;
        self.task(depends_on)?;

        match self.graph.would_create_cycle(task_id, depends_on) {
            Some(cycle) => Err(GoalflowError::CyclicDependency {
                task_id: task_id.to_string(),
                cycle,
            }),
            None => Ok(()),
        }
    }

    pub fn summary(&self) -> GoalSummary {
        GoalSummary::from_goal(self.goal)
    }
}
