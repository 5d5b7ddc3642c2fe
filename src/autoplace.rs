//! Greedy auto-placement of the task backlog.
//!
//! Converts backlog demand into concrete auto-placed blocks filling
//! free weekday capacity, without disturbing manually placed blocks.
//!
//! # Algorithm
//!
//! 1. Purge every previously auto-placed block (idempotent re-run).
//! 2. Expand each task's weekly budget target into chunks of at most
//!    `chunk_cap_min` (default 120) minutes; a target of 0 yields none.
//! 3. Sort chunks by tier rank ascending, then duration descending —
//!    larger chunks first within a tier reduces fragmentation.
//! 4. Enumerate every currently-free 30-minute slot on the placement
//!    days and shuffle the pool once with the injected rng.
//! 5. Greedily commit each chunk at the first pool slot that admits
//!    it, then retire the sub-slots it now occupies. A chunk with no
//!    admitting slot is silently dropped — capacity exhaustion is an
//!    expected outcome under over-subscription, not an error.
//!
//! No backtracking: tier order dominates absolutely, and a later chunk
//! is never preferred over an earlier-attempted one.

use chrono::NaiveDate;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::backlog::Backlog;
use crate::grid::SLOT_MIN;
use crate::models::{Day, Priority};
use crate::palette::priority_color;
use crate::store::ScheduleStore;

/// A bounded-duration fragment of a task's weekly target.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Chunk {
    title: String,
    priority: Priority,
    duration_min: u32,
    due_date: Option<NaiveDate>,
}

/// Outcome of one placement run.
///
/// Dropped chunks are informational only; the run itself never fails.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlacementReport {
    /// Placed minutes per priority tier.
    pub placed_min: HashMap<Priority, u32>,
    /// Chunks committed to the store.
    pub placed_chunks: usize,
    /// Chunks that found no admitting slot.
    pub dropped_chunks: usize,
}

impl PlacementReport {
    /// Placed minutes for one tier (0 when none).
    pub fn placed_for(&self, priority: Priority) -> u32 {
        self.placed_min.get(&priority).copied().unwrap_or(0)
    }

    /// Total placed minutes across all tiers.
    pub fn total_placed_min(&self) -> u32 {
        self.placed_min.values().sum()
    }
}

/// The greedy packing heuristic.
///
/// # Example
///
/// ```
/// use rand::rngs::SmallRng;
/// use rand::SeedableRng;
/// use timeblock::autoplace::AutoPlacer;
/// use timeblock::backlog::Backlog;
/// use timeblock::grid::TimeGrid;
/// use timeblock::models::Priority;
/// use timeblock::store::ScheduleStore;
///
/// let mut store = ScheduleStore::new(TimeGrid::default());
/// let mut backlog = Backlog::new();
/// backlog.add_task("Algorithms", Priority::A, None).unwrap();
/// backlog.set_target(Priority::A, 90);
///
/// let mut rng = SmallRng::seed_from_u64(42);
/// let report = AutoPlacer::new().run(&backlog, &mut store, &mut rng);
/// assert_eq!(report.placed_for(Priority::A), 90);
/// ```
#[derive(Debug, Clone)]
pub struct AutoPlacer {
    days: Vec<Day>,
    chunk_cap_min: u32,
}

impl Default for AutoPlacer {
    fn default() -> Self {
        Self {
            days: Day::WEEKDAYS.to_vec(),
            chunk_cap_min: 120,
        }
    }
}

impl AutoPlacer {
    /// Placer over Mon–Fri with the 120-minute chunk cap.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts placement to the given days.
    pub fn with_days(mut self, days: impl Into<Vec<Day>>) -> Self {
        self.days = days.into();
        self
    }

    /// Overrides the maximum chunk size in minutes.
    pub fn with_chunk_cap(mut self, minutes: u32) -> Self {
        self.chunk_cap_min = minutes;
        self
    }

    /// Runs one placement pass, replacing all prior auto-placed blocks.
    pub fn run(
        &self,
        backlog: &Backlog,
        store: &mut ScheduleStore,
        rng: &mut impl Rng,
    ) -> PlacementReport {
        store.clear_auto_placed();

        let chunks = self.chunks(backlog);
        let mut pool = self.free_slot_pool(store);
        pool.shuffle(rng);

        let mut report = PlacementReport::default();
        for chunk in chunks {
            let found = pool
                .iter()
                .position(|&(day, start)| store.is_free(day, start, chunk.duration_min, None));
            let Some(idx) = found else {
                report.dropped_chunks += 1;
                continue;
            };

            let (day, start) = pool[idx];
            let subject_id = store.ensure_subject(&chunk.title, priority_color(chunk.priority));
            if store
                .create_auto_block(&subject_id, day, start, chunk.duration_min, chunk.due_date)
                .is_err()
            {
                // The pool probe just admitted this span; treat a
                // refusal here as a dropped chunk rather than aborting.
                report.dropped_chunks += 1;
                continue;
            }

            let end = start + chunk.duration_min;
            pool.retain(|&(d, s)| d != day || s < start || s >= end);

            *report.placed_min.entry(chunk.priority).or_insert(0) += chunk.duration_min;
            report.placed_chunks += 1;
        }
        report
    }

    /// Expands the backlog into sorted chunks.
    fn chunks(&self, backlog: &Backlog) -> Vec<Chunk> {
        let mut chunks = Vec::new();
        for task in backlog.tasks() {
            let mut remaining = backlog.budget().target(task.priority);
            while remaining > 0 {
                let size = remaining.min(self.chunk_cap_min);
                chunks.push(Chunk {
                    title: task.title.clone(),
                    priority: task.priority,
                    duration_min: size,
                    due_date: task.due_date,
                });
                remaining -= size;
            }
        }
        // Tier rank ascending, then larger chunks first within a tier.
        chunks.sort_by(|a, b| {
            a.priority
                .rank()
                .cmp(&b.priority.rank())
                .then(b.duration_min.cmp(&a.duration_min))
        });
        chunks
    }

    /// Every currently-free 30-minute slot start on the placement days.
    fn free_slot_pool(&self, store: &ScheduleStore) -> Vec<(Day, u32)> {
        let starts: Vec<u32> = store.grid().slot_starts().collect();
        let mut pool = Vec::with_capacity(self.days.len() * starts.len());
        for &day in &self.days {
            for &start in &starts {
                if store.is_free(day, start, SLOT_MIN, None) {
                    pool.push((day, start));
                }
            }
        }
        pool
    }
}
