//! Schedule block model.
//!
//! A block is a placed, concrete occurrence of a subject at a specific
//! day, start time, and duration. Blocks are exclusively owned by the
//! `ScheduleStore`; everything else holds references.
//!
//! # Time Representation
//! Start times are logical minutes since midnight of the grid day and
//! may exceed 1440 when the scheduling window wraps past midnight.
//! Durations are positive multiples of the 30-minute slot.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Day;
use crate::grid::SLOT_MIN;

/// A placed occurrence of a subject on the weekly grid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleBlock {
    /// Unique block identifier.
    pub id: String,
    /// The subject this block is an occurrence of.
    pub subject_id: String,
    /// Day column.
    pub day: Day,
    /// Start, logical minutes (may exceed 1440 past midnight).
    pub start_min: u32,
    /// Duration in minutes.
    pub duration_min: u32,
    /// Whether this block was produced by auto-placement. Auto-placed
    /// blocks are purged wholesale at the start of each placement run.
    pub auto_placed: bool,
    /// Optional due date carried from the backlog task.
    pub due_date: Option<NaiveDate>,
}

impl ScheduleBlock {
    /// Creates a new manual block.
    pub fn new(
        id: impl Into<String>,
        subject_id: impl Into<String>,
        day: Day,
        start_min: u32,
        duration_min: u32,
    ) -> Self {
        Self {
            id: id.into(),
            subject_id: subject_id.into(),
            day,
            start_min,
            duration_min,
            auto_placed: false,
            due_date: None,
        }
    }

    /// Marks the block as auto-placed.
    pub fn with_auto_placed(mut self, auto_placed: bool) -> Self {
        self.auto_placed = auto_placed;
        self
    }

    /// Sets the due date.
    pub fn with_due_date(mut self, due_date: Option<NaiveDate>) -> Self {
        self.due_date = due_date;
        self
    }

    /// Exclusive end, logical minutes.
    #[inline]
    pub fn end_min(&self) -> u32 {
        self.start_min + self.duration_min
    }

    /// Number of 30-minute grid slots this block spans (rounded up).
    pub fn slot_count(&self) -> u32 {
        self.duration_min.div_ceil(SLOT_MIN)
    }

    /// Whether this block occupies any part of `[start_min, end_min)`
    /// on its own day (half-open interval overlap).
    pub fn overlaps(&self, start_min: u32, end_min: u32) -> bool {
        self.start_min < end_min && self.end_min() > start_min
    }
}
