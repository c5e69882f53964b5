//! Terminal views over the stateful units.

use crate::unit::counter::CounterSnapshot;
use crate::unit::task_list::TaskList;
use std::fmt::Write;

pub const EMPTY_TASKS_MESSAGE: &str = "No tasks yet. Add your first one! 🎯";

/// Renders the task rows followed by a `total/completed/remaining` row.
///
/// Rows are numbered from 1 in display order.
pub fn render_task_list(list: &TaskList) -> String {
    let mut out = String::new();
    if list.is_empty() {
        let _ = writeln!(out, "{EMPTY_TASKS_MESSAGE}");
    }
    for (index, task) in list.tasks().iter().enumerate() {
        let marker = if task.done { "x" } else { " " };
        let _ = writeln!(
            out,
            "{:>3}. [{marker}] {} ({})",
            index + 1,
            task.text,
            task.id.short()
        );
    }
    let stats = list.stats();
    let _ = writeln!(
        out,
        "total={} completed={} remaining={}",
        stats.total, stats.completed, stats.remaining
    );
    out
}

pub fn render_counter(snapshot: &CounterSnapshot) -> String {
    format!(
        "count={} doubled={} time={}\n",
        snapshot.count, snapshot.doubled, snapshot.timestamp
    )
}
