//! Interactive session over the three showcase units.
//!
//! # Responsibility
//! - Own one instance of each unit for the lifetime of a session.
//! - Route parsed commands to unit operations and views.
//!
//! # Invariants
//! - Units never see each other; the shell only forwards calls.
//! - Rejected unit operations are reported as text, never as failures.

use crate::command::{resolve_task_ref, Command, TaskRef, HELP_TEXT};
use showcase_core::{
    render_counter, render_showcase, render_task_list, CounterUnit, LifecycleError,
    PresentationalConfig, TaskId, TaskList,
};

/// What the host loop should do after one command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Print(String),
    Quit,
}

pub struct Shell {
    card: PresentationalConfig,
    tasks: TaskList,
    counter: CounterUnit,
}

impl Shell {
    pub fn new(card: PresentationalConfig) -> Self {
        Self::with_counter(card, CounterUnit::new())
    }

    pub fn with_counter(card: PresentationalConfig, counter: CounterUnit) -> Self {
        Self {
            card,
            tasks: TaskList::new(),
            counter,
        }
    }

    /// Starts the counter ticker. Requires a tokio runtime.
    pub fn start(&mut self) -> Result<(), LifecycleError> {
        self.counter.activate()
    }

    /// Stops the counter ticker and waits for it.
    pub async fn shutdown(&mut self) {
        self.counter.deactivate().await;
    }

    pub fn tasks(&self) -> &TaskList {
        &self.tasks
    }

    pub fn counter(&self) -> &CounterUnit {
        &self.counter
    }

    pub fn execute(&mut self, command: Command) -> Outcome {
        match command {
            Command::Draft(text) => {
                self.tasks.set_draft(text);
                Outcome::Print(format!("draft: {:?}", self.tasks.draft()))
            }
            Command::Add(text) => {
                if let Some(text) = text {
                    self.tasks.set_draft(text);
                }
                match self.tasks.add_task() {
                    Some(_) => Outcome::Print(render_task_list(&self.tasks)),
                    None => Outcome::Print("draft is blank; nothing added".to_string()),
                }
            }
            Command::Toggle(task_ref) => match self.resolve(task_ref) {
                Some(id) => {
                    self.tasks.toggle_task(id);
                    Outcome::Print(render_task_list(&self.tasks))
                }
                None => Outcome::Print(no_such_row(task_ref)),
            },
            Command::Delete(task_ref) => match self.resolve(task_ref) {
                Some(id) => {
                    self.tasks.delete_task(id);
                    Outcome::Print(render_task_list(&self.tasks))
                }
                None => Outcome::Print(no_such_row(task_ref)),
            },
            Command::Increment => {
                self.counter.increment();
                Outcome::Print(render_counter(&self.counter.snapshot()))
            }
            Command::Decrement => {
                self.counter.decrement();
                Outcome::Print(render_counter(&self.counter.snapshot()))
            }
            Command::Reset => {
                self.counter.reset();
                Outcome::Print(render_counter(&self.counter.snapshot()))
            }
            Command::ShowTasks => Outcome::Print(render_task_list(&self.tasks)),
            Command::ShowCounter => Outcome::Print(render_counter(&self.counter.snapshot())),
            Command::ShowCard => Outcome::Print(render_showcase(&self.card)),
            Command::Help => Outcome::Print(HELP_TEXT.to_string()),
            Command::Quit => Outcome::Quit,
        }
    }

    fn resolve(&self, task_ref: TaskRef) -> Option<TaskId> {
        resolve_task_ref(task_ref, &self.tasks)
    }
}

fn no_such_row(task_ref: TaskRef) -> String {
    match task_ref {
        TaskRef::Row(row) => format!("no task at row {row}"),
        TaskRef::Id(id) => format!("no task with id {id}"),
    }
}
