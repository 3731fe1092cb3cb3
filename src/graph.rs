use crate::models::{TaskNode, TaskStatus};
use std::collections::{HashMap, HashSet, VecDeque};

/// Read-only graph view over a task collection.
///
/// The id index and the resolved edge lists are built once in [`TaskGraph::new`]
/// so repeated ordering and lookups on the same snapshot do not rebuild them.
/// When ids repeat, the first task with that id is the one edges resolve to.
#[derive(Debug)]
pub struct TaskGraph<'a, T> {
    tasks: &'a [T],
    index: HashMap<&'a str, usize>,
    // edges[i][k] is the position of the k-th declared dependency of task i,
    // None when that edge is dangling
    edges: Vec<Vec<Option<usize>>>,
}

/// One declared dependency edge, resolved against the collection
#[derive(Debug)]
pub struct Dependency<'a, T> {
    pub depends_on: &'a str,
    pub task: Option<&'a T>,
}

impl<T> Dependency<'_, T> {
    pub fn is_dangling(&self) -> bool {
        self.task.is_none()
    }
}

impl<'a, T: TaskNode> TaskGraph<'a, T> {
    pub fn new(tasks: &'a [T]) -> Self {
        let mut index: HashMap<&'a str, usize> = HashMap::with_capacity(tasks.len());
        for (pos, task) in tasks.iter().enumerate() {
            index.entry(task.id()).or_insert(pos);
        }

        let edges = tasks
            .iter()
            .map(|task| {
                task.dependency_ids()
                    .map(|id| index.get(id).copied())
                    .collect()
            })
            .collect();

        TaskGraph {
            tasks,
            index,
            edges,
        }
    }

    /// The underlying collection, in its original order
    pub fn tasks(&self) -> &'a [T] {
        self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn task_by_id(&self, id: &str) -> Option<&'a T> {
        self.index.get(id).map(|&pos| &self.tasks[pos])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Declared edges of `task` in order, each resolved to a task or left dangling
    pub fn dependencies_of(&self, task: &'a T) -> Vec<Dependency<'a, T>> {
        task.dependency_ids()
            .map(|id| Dependency {
                depends_on: id,
                task: self.task_by_id(id),
            })
            .collect()
    }

    /// Tasks `task` depends on, in declared order, with dangling edges dropped
    pub fn resolved_dependencies(&self, task: &'a T) -> Vec<&'a T> {
        task.dependency_ids()
            .filter_map(|id| self.task_by_id(id))
            .collect()
    }

    /// Tasks that declare an edge to `id`, in collection order
    pub fn dependents_of(&self, id: &str) -> Vec<&'a T> {
        let Some(&target) = self.index.get(id) else {
            return Vec::new();
        };

        self.tasks
            .iter()
            .zip(&self.edges)
            .filter(|(_, targets)| targets.contains(&Some(target)))
            .map(|(task, _)| task)
            .collect()
    }

    /// Resolved dependencies of `task` that are not completed yet
    pub fn unmet_dependencies(&self, task: &'a T) -> Vec<&'a T> {
        self.resolved_dependencies(task)
            .into_iter()
            .filter(|dep| *dep.status() != TaskStatus::Completed)
            .collect()
    }

    /// Check whether adding "`task_id` depends on `depends_on`" would close a cycle.
    ///
    /// Returns the cycle path `[task_id, depends_on, ..., task_id]` if it would.
    /// An edge to an id outside the collection can never close a cycle.
    pub fn would_create_cycle(&self, task_id: &str, depends_on: &str) -> Option<Vec<String>> {
        if task_id == depends_on {
            return Some(vec![task_id.to_string(), depends_on.to_string()]);
        }

        let start = *self.index.get(depends_on)?;
        let goal = *self.index.get(task_id)?;

        // Breadth-first so the reported path is the shortest one
        let mut parent: HashMap<usize, usize> = HashMap::new();
        let mut seen: HashSet<usize> = HashSet::from([start]);
        let mut queue: VecDeque<usize> = VecDeque::from([start]);

        while let Some(current) = queue.pop_front() {
            if current == goal {
                let mut path = vec![current];
                let mut node = current;
                while let Some(&prev) = parent.get(&node) {
                    path.push(prev);
                    node = prev;
                }
                path.reverse();

                let mut cycle = vec![task_id.to_string()];
                cycle.extend(path.into_iter().map(|pos| self.tasks[pos].id().to_string()));
                return Some(cycle);
            }

            for &next in self.edges[current].iter().flatten() {
                if seen.insert(next) {
                    parent.insert(next, current);
                    queue.push_back(next);
                }
            }
        }

        None
    }

    /// Positions of the declared dependencies of the task at `pos`
    pub(crate) fn edge_targets(&self, pos: usize) -> &[Option<usize>] {
        &self.edges[pos]
    }
}
