use crate::core::GoalView;
use crate::error::Result;
use crate::models::{Goal, Task, TaskStatus};
use crate::order::{BackEdge, CyclePolicy};
use crate::progress::{DashboardStats, GoalSummary};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::io::{self, Read};
use std::path::Path;
use tracing::debug;

#[derive(Serialize)]
struct OrderOutput<'a> {
    tasks: &'a [&'a Task],
    back_edges: &'a [BackEdge],
}

/// Handle the order command
pub fn handle_order(file: &Path, strict: bool, json: bool) -> Result<()> {
    let goal: Goal = load_json(file)?;
    let view = GoalView::new(&goal);

    let policy = if strict {
        CyclePolicy::Strict
    } else {
        CyclePolicy::Lenient
    };
    let ordered = view.ordered(policy)?;

    if json {
        let out = OrderOutput {
            tasks: &ordered.tasks,
            back_edges: &ordered.back_edges,
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    if ordered.tasks.is_empty() {
        println!("No tasks found for this goal.");
        return Ok(());
    }

    for (i, &task) in ordered.tasks.iter().enumerate() {
        let deps = view.graph().resolved_dependencies(task);
        let dep_info = if deps.is_empty() {
            String::new()
        } else {
            let names = deps
                .iter()
                .map(|d| format!("{} {}", d.name, icon(&d.status)))
                .collect::<Vec<_>>()
                .join(", ");
            format!(" (depends on: {names})")
        };

        println!(
            "  {:>3}. {} {}{}",
            i + 1,
            icon(&task.status),
            task.name,
            dep_info
        );
    }

    for edge in &ordered.back_edges {
        println!(
            "Warning: {} -> {} closes a cycle ({})",
            edge.task_id,
            edge.depends_on,
            edge.cycle.join(" -> ")
        );
    }

    Ok(())
}

/// Handle the progress command
pub fn handle_progress(file: &Path, json: bool) -> Result<()> {
    let goal: Goal = load_json(file)?;
    let progress = GoalView::new(&goal).progress();

    if json {
        println!("{}", serde_json::to_string_pretty(&progress)?);
        return Ok(());
    }

    println!("Goal:         {}", goal.text);
    println!("Status:       {}", goal.status);
    println!("Created:      {}", goal.created_at.format("%Y-%m-%d %H:%M"));
    println!("Tasks:        {}", progress.total);
    println!("Completed:    {}", progress.completed);
    println!("In progress:  {}", progress.in_progress);
    println!("Pending:      {}", progress.pending);
    println!("Progress:     {}%", progress.percent_complete);

    Ok(())
}

/// Handle the board command
pub fn handle_board(file: &Path) -> Result<()> {
    let goal: Goal = load_json(file)?;
    let groups = GoalView::new(&goal).grouped()?;

    if groups.is_empty() {
        println!("No tasks found for this goal.");
        return Ok(());
    }

    print_group("Pending", &groups.pending);
    print_group("In Progress", &groups.in_progress);
    print_group("Completed", &groups.completed);

    Ok(())
}

fn print_group(title: &str, tasks: &[&Task]) {
    if tasks.is_empty() {
        return;
    }

    println!("{title} ({})", tasks.len());
    for task in tasks {
        let days = if task.duration_days == 1 { "day" } else { "days" };
        println!(
            "  {} {} [{} {days}]",
            icon(&task.status),
            task.name,
            task.duration_days
        );
    }
}

/// Handle the actions command
pub fn handle_actions(file: &Path, task_id: &str) -> Result<()> {
    let goal: Goal = load_json(file)?;
    let view = GoalView::new(&goal);

    let task = view.task(task_id)?;
    let transitions = view.actions_for(task_id)?;

    println!("[{}] {} ({})", task.id, task.name, task.status);
    if transitions.is_empty() {
        println!("  No actions available.");
        return Ok(());
    }

    for transition in transitions {
        println!("  {} -> {}", transition.label, transition.target);
    }

    Ok(())
}

/// Handle the depend-check command
pub fn handle_depend_check(file: &Path, task_id: &str, on_id: &str) -> Result<()> {
    let goal: Goal = load_json(file)?;
    let view = GoalView::new(&goal);

    view.check_new_dependency(task_id, on_id)?;

    println!("OK: {task_id} can depend on {on_id}");

    Ok(())
}

/// Handle the dashboard command
pub fn handle_dashboard(file: &Path) -> Result<()> {
    let summaries: Vec<GoalSummary> = load_json(file)?;
    let stats = DashboardStats::from_summaries(&summaries);

    println!("Goals:        {}", stats.total_goals);
    println!("  Active:     {}", stats.active_goals);
    println!("  Completed:  {}", stats.completed_goals);
    println!(
        "Tasks:        {} ({} completed)",
        stats.total_tasks, stats.completed_tasks
    );

    for summary in &summaries {
        println!(
            "  {:>3}% {} [{}]",
            summary.percent_complete(),
            summary.text,
            summary.status
        );
    }

    Ok(())
}

/// Read and parse a JSON document from a file, or stdin for `-`
fn load_json<T: DeserializeOwned>(file: &Path) -> Result<T> {
    let raw = if file == Path::new("-") {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        fs::read_to_string(file)?
    };

    debug!(path = %file.display(), bytes = raw.len(), "loaded snapshot");
    Ok(serde_json::from_str(&raw)?)
}

fn icon(status: &TaskStatus) -> &'static str {
    match status {
        TaskStatus::Completed => "✓",
        TaskStatus::InProgress => "●",
        TaskStatus::Pending => "○",
        TaskStatus::Unknown(_) => "?",
    }
}
