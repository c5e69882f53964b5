//! Task-list state unit.
//!
//! # Responsibility
//! - Own the ordered task records and the uncommitted draft buffer.
//! - Expose add/toggle/delete transitions and derived counts.
//!
//! # Invariants
//! - Insertion order is display order; toggle never moves a record.
//! - No stored record has blank text.
//! - Ids are unique for the lifetime of the list, deleted ids included.
//! - `completed_count() + remaining_count() == total_count()`.
//! - Rejected transitions (blank add, unknown id) leave state untouched.

use crate::model::task::{TaskId, TaskRecord};
use log::debug;

/// Message-style input accepted by [`TaskList::apply`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskAction {
    SetDraft(String),
    Add,
    Toggle(TaskId),
    Delete(TaskId),
}

/// Point-in-time snapshot of the derived counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TaskStats {
    pub total: usize,
    pub completed: usize,
    pub remaining: usize,
}

/// Task list plus draft buffer. Created empty, parameterless.
#[derive(Debug, Clone, Default)]
pub struct TaskList {
    tasks: Vec<TaskRecord>,
    draft: String,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the draft buffer verbatim.
    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    /// Commits the draft as a new open task.
    ///
    /// Returns `None` without touching state when the draft is blank.
    /// Otherwise appends the untrimmed draft, clears the buffer and returns
    /// the new id.
    pub fn add_task(&mut self) -> Option<TaskId> {
        if self.draft.trim().is_empty() {
            debug!("event=task_add module=task_list status=skipped reason=blank_draft");
            return None;
        }

        let record = TaskRecord::open(std::mem::take(&mut self.draft));
        let id = record.id;
        self.tasks.push(record);
        debug!(
            "event=task_add module=task_list status=ok total={}",
            self.tasks.len()
        );
        Some(id)
    }

    /// Flips `done` on the matching record. Unknown ids are ignored.
    pub fn toggle_task(&mut self, id: TaskId) -> bool {
        match self.tasks.iter_mut().find(|task| task.id == id) {
            Some(task) => {
                task.toggle();
                debug!(
                    "event=task_toggle module=task_list status=ok done={}",
                    task.done
                );
                true
            }
            None => {
                debug!("event=task_toggle module=task_list status=skipped reason=unknown_id");
                false
            }
        }
    }

    /// Removes the matching record. Unknown ids are ignored.
    pub fn delete_task(&mut self, id: TaskId) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id != id);
        let removed = self.tasks.len() != before;
        if removed {
            debug!(
                "event=task_delete module=task_list status=ok total={}",
                self.tasks.len()
            );
        } else {
            debug!("event=task_delete module=task_list status=skipped reason=unknown_id");
        }
        removed
    }

    /// Dispatches one action. Returns whether state changed.
    pub fn apply(&mut self, action: TaskAction) -> bool {
        match action {
            TaskAction::SetDraft(text) => {
                let changed = self.draft != text;
                self.set_draft(text);
                changed
            }
            TaskAction::Add => self.add_task().is_some(),
            TaskAction::Toggle(id) => self.toggle_task(id),
            TaskAction::Delete(id) => self.delete_task(id),
        }
    }

    pub fn tasks(&self) -> &[TaskRecord] {
        &self.tasks
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn get(&self, id: TaskId) -> Option<&TaskRecord> {
        self.tasks.iter().find(|task| task.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn total_count(&self) -> usize {
        self.tasks.len()
    }

    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|task| task.done).count()
    }

    pub fn remaining_count(&self) -> usize {
        self.total_count() - self.completed_count()
    }

    pub fn stats(&self) -> TaskStats {
        let total = self.total_count();
        let completed = self.completed_count();
        TaskStats {
            total,
            completed,
            remaining: total - completed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{TaskAction, TaskList, TaskStats};
    use crate::model::task::TaskId;

    #[test]
    fn new_list_is_empty() {
        let list = TaskList::new();
        assert!(list.is_empty());
        assert_eq!(list.draft(), "");
        assert_eq!(list.stats(), TaskStats::default());
    }

    #[test]
    fn add_keeps_untrimmed_text_and_clears_draft() {
        let mut list = TaskList::new();
        list.set_draft("  padded  ");
        let id = list.add_task().unwrap();
        assert_eq!(list.get(id).unwrap().text, "  padded  ");
        assert_eq!(list.draft(), "");
    }

    #[test]
    fn blank_draft_is_left_in_buffer() {
        let mut list = TaskList::new();
        list.set_draft(" \t ");
        assert_eq!(list.add_task(), None);
        assert_eq!(list.draft(), " \t ");
        assert!(list.is_empty());
    }

    #[test]
    fn apply_reports_changes() {
        let mut list = TaskList::new();
        assert!(list.apply(TaskAction::SetDraft("a".to_string())));
        assert!(!list.apply(TaskAction::SetDraft("a".to_string())));
        assert!(list.apply(TaskAction::Add));
        assert!(!list.apply(TaskAction::Add));

        let id = list.tasks()[0].id;
        assert!(list.apply(TaskAction::Toggle(id)));
        assert!(!list.apply(TaskAction::Toggle(TaskId::generate())));
        assert!(list.apply(TaskAction::Delete(id)));
        assert!(!list.apply(TaskAction::Delete(id)));
    }

    #[test]
    fn toggle_preserves_position() {
        let mut list = TaskList::new();
        for text in ["one", "two", "three"] {
            list.set_draft(text);
            list.add_task();
        }
        let middle = list.tasks()[1].id;
        list.toggle_task(middle);

        let texts = list
            .tasks()
            .iter()
            .map(|task| task.text.as_str())
            .collect::<Vec<_>>();
        assert_eq!(texts, vec!["one", "two", "three"]);
        assert!(list.tasks()[1].done);
        assert_eq!(
            list.stats(),
            TaskStats {
                total: 3,
                completed: 1,
                remaining: 2
            }
        );
    }
}
