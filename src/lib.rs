//! Weekly time-block scheduling engine.
//!
//! Models a single recurring week as a 30-minute grid (08:00 through
//! 25:00 by default, crossing midnight) and provides conflict-checked
//! block placement plus greedy auto-placement of a prioritized task
//! backlog. Purely in-memory and UI-agnostic — rendering, persistence
//! transport, and spreadsheet parsing live with the caller.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Day`, `Subject`, `ScheduleBlock`,
//!   `Task`, `Priority`, `PriorityBudget`
//! - **`grid`**: The time domain — label/minute conversion, slot
//!   enumeration, drag snapping
//! - **`conflict`**: The single free-slot predicate every placement
//!   path funnels through
//! - **`store`**: Owner of subjects and blocks; validated create,
//!   move, resize, delete
//! - **`backlog`**: Task demand and per-tier weekly budgets
//! - **`autoplace`**: Greedy packing of backlog chunks into free
//!   weekday capacity
//! - **`clipboard`**: Copy/paste of block content
//! - **`palette`**: Subject colors — shuffled deck for manual
//!   subjects, fixed tier colors for auto-placed ones
//! - **`import`**: Bulk replacement of the week from parsed
//!   spreadsheet rows

pub mod autoplace;
pub mod backlog;
pub mod clipboard;
pub mod conflict;
pub mod grid;
pub mod import;
pub mod models;
pub mod palette;
pub mod store;
