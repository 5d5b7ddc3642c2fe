//! Task backlog: demand entries and per-tier weekly budgets.
//!
//! The backlog holds what the user *wants* to spend time on, not where
//! it goes — tasks are expanded into blocks only by the auto-placer.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{Priority, PriorityBudget, Task};
use crate::store::{IdGen, PlaceError};

/// Owner of backlog tasks and the priority budget.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Backlog {
    tasks: Vec<Task>,
    budget: PriorityBudget,
    ids: IdGen,
}

impl Backlog {
    /// Creates an empty backlog with the default budget.
    pub fn new() -> Self {
        Self::default()
    }

    /// All tasks in insertion order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Looks up a task by id.
    pub fn task(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Tasks sorted by tier, tightest first (the sidebar listing
    /// order). Stable: insertion order within a tier.
    pub fn tasks_by_priority(&self) -> Vec<&Task> {
        let mut sorted: Vec<&Task> = self.tasks.iter().collect();
        sorted.sort_by_key(|t| t.priority.rank());
        sorted
    }

    /// Adds a task. Empty titles are refused. Returns the new task id.
    pub fn add_task(
        &mut self,
        title: &str,
        priority: Priority,
        due_date: Option<NaiveDate>,
    ) -> Result<String, PlaceError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(PlaceError::EmptyTitle);
        }
        let id = self.ids.next_id("t");
        self.tasks
            .push(Task::new(id.clone(), title, priority).with_due_date(due_date));
        Ok(id)
    }

    /// Updates a task's fields in place. Returns whether it existed;
    /// an empty new title leaves the old title in place.
    pub fn update_task(
        &mut self,
        id: &str,
        title: &str,
        priority: Priority,
        due_date: Option<NaiveDate>,
    ) -> bool {
        let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) else {
            return false;
        };
        let title = title.trim();
        if !title.is_empty() {
            task.title = title.to_string();
        }
        task.priority = priority;
        task.due_date = due_date;
        true
    }

    /// Removes a task. Returns whether it existed.
    pub fn remove_task(&mut self, id: &str) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        self.tasks.len() != before
    }

    /// The per-tier weekly budget.
    pub fn budget(&self) -> &PriorityBudget {
        &self.budget
    }

    /// Sets a tier's target weekly minutes.
    pub fn set_target(&mut self, priority: Priority, minutes: u32) {
        self.budget.set_target(priority, minutes);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_remove() {
        let mut backlog = Backlog::new();
        let id = backlog.add_task("Algorithms", Priority::A, None).unwrap();
        assert_eq!(backlog.tasks().len(), 1);
        assert_eq!(backlog.task(&id).unwrap().title, "Algorithms");

        assert!(backlog.remove_task(&id));
        assert!(!backlog.remove_task(&id));
        assert!(backlog.tasks().is_empty());
    }

    #[test]
    fn test_add_empty_title_refused() {
        let mut backlog = Backlog::new();
        assert_eq!(
            backlog.add_task("   ", Priority::C, None),
            Err(PlaceError::EmptyTitle)
        );
    }

    #[test]
    fn test_update_task() {
        let mut backlog = Backlog::new();
        let id = backlog.add_task("Draft", Priority::C, None).unwrap();
        let due = NaiveDate::from_ymd_opt(2026, 9, 2);

        assert!(backlog.update_task(&id, "Final draft", Priority::A, due));
        let task = backlog.task(&id).unwrap();
        assert_eq!(task.title, "Final draft");
        assert_eq!(task.priority, Priority::A);
        assert_eq!(task.due_date, due);

        // Empty title keeps the old one
        assert!(backlog.update_task(&id, "", Priority::B, None));
        assert_eq!(backlog.task(&id).unwrap().title, "Final draft");

        assert!(!backlog.update_task("nope", "x", Priority::E, None));
    }

    #[test]
    fn test_tasks_by_priority_stable() {
        let mut backlog = Backlog::new();
        backlog.add_task("third", Priority::C, None).unwrap();
        backlog.add_task("first", Priority::A, None).unwrap();
        backlog.add_task("fourth", Priority::C, None).unwrap();
        backlog.add_task("second", Priority::A, None).unwrap();

        let titles: Vec<&str> = backlog
            .tasks_by_priority()
            .iter()
            .map(|t| t.title.as_str())
            .collect();
        assert_eq!(titles, vec!["first", "second", "third", "fourth"]);
    }

    #[test]
    fn test_budget_passthrough() {
        let mut backlog = Backlog::new();
        backlog.set_target(Priority::A, 90);
        assert_eq!(backlog.budget().target(Priority::A), 90);
    }
}
