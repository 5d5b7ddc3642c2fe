//! Backlog task and priority models.
//!
//! A task represents *demand*: a weekly duration target determined by
//! its priority tier, not yet expanded into concrete blocks. The
//! auto-placer converts tasks into chunks and packs them into the grid.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Priority tier of a backlog task.
///
/// Tiers form an explicit ordinal scale — `A` is the tightest tier and
/// is always placed first. Ordering is by declaration rank, never by
/// string comparison, so the scale can be extended safely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Priority {
    A,
    B,
    C,
    D,
    E,
}

impl Priority {
    /// All tiers, tightest first.
    pub const ALL: [Priority; 5] = [
        Priority::A,
        Priority::B,
        Priority::C,
        Priority::D,
        Priority::E,
    ];

    /// Ordinal rank, 0 = tightest.
    #[inline]
    pub fn rank(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Priority::A => "A",
            Priority::B => "B",
            Priority::C => "C",
            Priority::D => "D",
            Priority::E => "E",
        };
        f.write_str(s)
    }
}

/// A backlog demand entry.
///
/// Distinct from a schedule block: a task is never placed directly,
/// only expanded into one or more chunks by the auto-placer. Its
/// weekly duration target comes from the [`PriorityBudget`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    /// Unique task identifier.
    pub id: String,
    /// Display title; also the subject name used when placing chunks.
    pub title: String,
    /// Priority tier.
    pub priority: Priority,
    /// Optional due date, carried onto every placed chunk.
    pub due_date: Option<NaiveDate>,
}

impl Task {
    /// Creates a new task.
    pub fn new(id: impl Into<String>, title: impl Into<String>, priority: Priority) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            priority,
            due_date: None,
        }
    }

    /// Sets the due date.
    pub fn with_due_date(mut self, due_date: Option<NaiveDate>) -> Self {
        self.due_date = due_date;
        self
    }
}

/// Per-tier target weekly duration in minutes.
///
/// User-configurable; the defaults form a descending ladder
/// (A=10h, B=8h, C=6h, D=4h, E=2h per week).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriorityBudget {
    targets: [u32; 5],
}

impl Default for PriorityBudget {
    fn default() -> Self {
        Self {
            targets: [600, 480, 360, 240, 120],
        }
    }
}

impl PriorityBudget {
    /// Budget with the default tier targets.
    pub fn new() -> Self {
        Self::default()
    }

    /// Target weekly minutes for a tier.
    #[inline]
    pub fn target(&self, priority: Priority) -> u32 {
        self.targets[priority.rank()]
    }

    /// Sets a tier's target weekly minutes.
    pub fn set_target(&mut self, priority: Priority, minutes: u32) {
        self.targets[priority.rank()] = minutes;
    }

    /// Sum of all tier targets.
    pub fn total_min(&self) -> u32 {
        self.targets.iter().sum()
    }
}
