//! Scheduling domain models.
//!
//! Core data types for the weekly time-block grid:
//!
//! | Type | Role |
//! |------|------|
//! | [`Day`] | one of the seven grid columns |
//! | [`Subject`] | named, colored activity definition |
//! | [`ScheduleBlock`] | a placed occurrence of a subject |
//! | [`Task`] | backlog demand, not yet placed |
//! | [`Priority`] / [`PriorityBudget`] | tier scale and weekly targets |

mod block;
mod day;
mod subject;
mod task;

pub use block::ScheduleBlock;
pub use day::Day;
pub use subject::Subject;
pub use task::{Priority, PriorityBudget, Task};
