use crate::error::{GoalflowError, Result};
use crate::graph::TaskGraph;
use crate::models::TaskNode;
use serde::Serialize;
use tracing::{debug, warn};

/// What the orderer does when the dependency relation has a cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CyclePolicy {
    /// Keep going; the edge that closes the cycle loses its precedence guarantee
    #[default]
    Lenient,
    /// Fail with [`GoalflowError::CyclicDependency`] on the first cycle found
    Strict,
}

/// An edge whose precedence could not be honoured because it closes a cycle
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BackEdge {
    pub task_id: String,
    pub depends_on: String,
    /// From `depends_on` through the traversal stack back to `depends_on`
    pub cycle: Vec<String>,
}

/// Result of ordering a task collection
#[derive(Debug)]
pub struct OrderedTasks<'a, T> {
    pub tasks: Vec<&'a T>,
    pub back_edges: Vec<BackEdge>,
}

impl<T> OrderedTasks<'_, T> {
    pub fn is_acyclic(&self) -> bool {
        self.back_edges.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    Unvisited,
    OnStack,
    Done,
}

/// Depth-first post-order over a [`TaskGraph`].
///
/// Roots are taken in collection order and edges in declared order, so the
/// same input always yields the same output. Every task is emitted exactly
/// once, after all of the dependencies it could reach without closing a cycle.
/// Dangling edges are skipped.
#[derive(Debug, Clone, Copy, Default)]
pub struct DependencyOrderer {
    policy: CyclePolicy,
}

impl DependencyOrderer {
    pub fn new(policy: CyclePolicy) -> Self {
        DependencyOrderer { policy }
    }

    pub fn strict() -> Self {
        Self::new(CyclePolicy::Strict)
    }

    pub fn policy(&self) -> CyclePolicy {
        self.policy
    }

    pub fn order<'a, T: TaskNode>(&self, graph: &TaskGraph<'a, T>) -> Result<OrderedTasks<'a, T>> {
        let tasks = graph.tasks();
        let n = tasks.len();

        let mut marks = vec![Mark::Unvisited; n];
        let mut output: Vec<&'a T> = Vec::with_capacity(n);
        let mut back_edges = Vec::new();

        for root in 0..n {
            if marks[root] != Mark::Unvisited {
                continue;
            }

            // (task position, next edge to look at)
            marks[root] = Mark::OnStack;
            let mut stack: Vec<(usize, usize)> = vec![(root, 0)];

            while let Some(frame) = stack.last_mut() {
                let (node, cursor) = *frame;
                let targets = graph.edge_targets(node);

                if cursor == targets.len() {
                    stack.pop();
                    marks[node] = Mark::Done;
                    output.push(&tasks[node]);
                    continue;
                }
                frame.1 += 1;

                let Some(dep) = targets[cursor] else {
                    continue;
                };

                match marks[dep] {
                    Mark::Unvisited => {
                        marks[dep] = Mark::OnStack;
                        stack.push((dep, 0));
                    }
                    Mark::OnStack => {
                        let start = stack.iter().position(|&(pos, _)| pos == dep).unwrap_or(0);
                        let cycle: Vec<String> = stack[start..]
                            .iter()
                            .map(|&(pos, _)| tasks[pos].id().to_string())
                            .chain(std::iter::once(tasks[dep].id().to_string()))
                            .collect();

                        if self.policy == CyclePolicy::Strict {
                            return Err(GoalflowError::CyclicDependency {
                                task_id: tasks[dep].id().to_string(),
                                cycle,
                            });
                        }

                        let edge = BackEdge {
                            task_id: tasks[node].id().to_string(),
                            depends_on: tasks[dep].id().to_string(),
                            cycle,
                        };
                        warn!(
                            task = %edge.task_id,
                            depends_on = %edge.depends_on,
                            "dependency cycle, precedence not guaranteed for this edge"
                        );
                        back_edges.push(edge);
                    }
                    Mark::Done => {}
                }
            }
        }

        debug!(
            tasks = output.len(),
            back_edges = back_edges.len(),
            "ordered tasks by dependencies"
        );

        Ok(OrderedTasks {
            tasks: output,
            back_edges,
        })
    }
}

/// Order a task collection leniently
pub fn order_tasks<T: TaskNode>(tasks: &[T]) -> Vec<&T> {
    let graph = TaskGraph::new(tasks);
    match DependencyOrderer::default().order(&graph) {
        Ok(ordered) => ordered.tasks,
        // Lenient ordering never reports a cycle as an error
        Err(_) => tasks.iter().collect(),
    }
}
