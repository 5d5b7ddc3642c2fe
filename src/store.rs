//! Schedule store: owned blocks, subjects, and validated mutations.
//!
//! The store is the only owner of placed blocks and subject
//! definitions; callers (UI, import, auto-placer) go through its
//! operation surface instead of touching shared collections. Every
//! mutation validates with [`crate::conflict::is_free`] *before*
//! committing — check-then-act, single-threaded — so a refused
//! mutation leaves all prior state exactly as it was.
//!
//! # Errors
//! Expected business refusals (slot conflicts, invalid input) come
//! back as [`PlaceError`] values, never panics. Mutating a nonexistent
//! block id is a defect in the caller and aborts loudly.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::conflict;
use crate::grid::{TimeGrid, SLOT_MIN};
use crate::models::{Day, ScheduleBlock, Subject};

/// Refusal reasons for store mutations.
///
/// All variants are expected, frequent outcomes of user interaction
/// and must be handled at the boundary the mutation was invoked from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaceError {
    /// The candidate span overlaps an existing block or runs past the
    /// window end.
    SlotConflict,
    /// Duration is zero or not a multiple of the 30-minute slot.
    InvalidDuration(u32),
    /// A subject or task title was empty.
    EmptyTitle,
    /// Paste was requested with nothing copied.
    EmptyClipboard,
}

impl fmt::Display for PlaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlaceError::SlotConflict => {
                write!(f, "time slot overlaps an existing block or exceeds the window")
            }
            PlaceError::InvalidDuration(min) => {
                write!(f, "duration {min} is not a positive multiple of {SLOT_MIN} minutes")
            }
            PlaceError::EmptyTitle => write!(f, "title must not be empty"),
            PlaceError::EmptyClipboard => write!(f, "clipboard holds no copied block"),
        }
    }
}

impl std::error::Error for PlaceError {}

/// Deterministic id source: prefix plus monotonic counter.
///
/// Replaces wall-clock-derived ids (collision-prone under rapid
/// succession) with ids that are unique per source and stable across
/// test runs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IdGen {
    next: u64,
}

impl IdGen {
    /// Creates a fresh source starting at 1.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the next id for `prefix`, e.g. `"b1"`, `"b2"`.
    pub fn next_id(&mut self, prefix: &str) -> String {
        self.next += 1;
        format!("{prefix}{}", self.next)
    }
}

/// Owner of the placed week: subjects plus schedule blocks.
///
/// # Example
///
/// ```
/// use timeblock::grid::TimeGrid;
/// use timeblock::models::Day;
/// use timeblock::store::ScheduleStore;
///
/// let mut store = ScheduleStore::new(TimeGrid::default());
/// let subject = store.upsert_subject("Algorithms", "#118AB2").unwrap();
/// let block = store.create_block(&subject, Day::Mon, 540, 60).unwrap();
///
/// assert!(!store.is_free(Day::Mon, 570, 30, None)); // overlaps
/// assert!(store.is_free(Day::Mon, 600, 30, None));
/// store.move_block(&block, Day::Tue, 540).unwrap();
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleStore {
    grid: TimeGrid,
    subjects: Vec<Subject>,
    blocks: Vec<ScheduleBlock>,
    ids: IdGen,
}

impl ScheduleStore {
    /// Creates an empty store over `grid`.
    pub fn new(grid: TimeGrid) -> Self {
        Self {
            grid,
            subjects: Vec::new(),
            blocks: Vec::new(),
            ids: IdGen::new(),
        }
    }

    /// The time domain this store schedules within.
    pub fn grid(&self) -> &TimeGrid {
        &self.grid
    }

    // --- Query surface ---

    /// All placed blocks, in insertion order.
    pub fn blocks(&self) -> &[ScheduleBlock] {
        &self.blocks
    }

    /// Looks up a block by id.
    pub fn block(&self, id: &str) -> Option<&ScheduleBlock> {
        self.blocks.iter().find(|b| b.id == id)
    }

    /// All blocks on one day.
    pub fn blocks_for_day(&self, day: Day) -> Vec<&ScheduleBlock> {
        self.blocks.iter().filter(|b| b.day == day).collect()
    }

    /// Blocks overlapping `[start_min, end_min)` on `day`.
    pub fn blocks_in_range(&self, day: Day, start_min: u32, end_min: u32) -> Vec<&ScheduleBlock> {
        self.blocks
            .iter()
            .filter(|b| b.day == day && b.overlaps(start_min, end_min))
            .collect()
    }

    /// All subjects.
    pub fn subjects(&self) -> &[Subject] {
        &self.subjects
    }

    /// Looks up a subject by id.
    pub fn subject(&self, id: &str) -> Option<&Subject> {
        self.subjects.iter().find(|s| s.id == id)
    }

    /// Looks up a subject by case-insensitive title.
    pub fn find_subject(&self, title: &str) -> Option<&Subject> {
        self.subjects.iter().find(|s| s.title_matches(title))
    }

    /// Whether `(day, start_min, duration_min)` is free, optionally
    /// ignoring one block. See [`crate::conflict::is_free`].
    pub fn is_free(
        &self,
        day: Day,
        start_min: u32,
        duration_min: u32,
        exclude_id: Option<&str>,
    ) -> bool {
        conflict::is_free(&self.grid, &self.blocks, day, start_min, duration_min, exclude_id)
    }

    /// Longest duration placeable at `(day, start_min)`, found by
    /// probing [`Self::is_free`] at 30-minute increments until a
    /// conflict or the window end. Returns 0 when even one slot does
    /// not fit. Bounds duration-selection UI for create and resize.
    pub fn max_extendable_duration(
        &self,
        day: Day,
        start_min: u32,
        exclude_id: Option<&str>,
    ) -> u32 {
        let mut duration = 0;
        while self.is_free(day, start_min, duration + SLOT_MIN, exclude_id) {
            duration += SLOT_MIN;
        }
        duration
    }

    // --- Subject mutations ---

    /// Form path: reuse-or-create a subject by case-insensitive title,
    /// updating an existing subject's color in place (the color is
    /// shared by all of its blocks). Returns the subject id.
    pub fn upsert_subject(
        &mut self,
        title: &str,
        color: &str,
    ) -> Result<String, PlaceError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(PlaceError::EmptyTitle);
        }
        if let Some(subject) = self.subjects.iter_mut().find(|s| s.title_matches(title)) {
            subject.color = color.to_string();
            return Ok(subject.id.clone());
        }
        let id = self.ids.next_id("s");
        self.subjects.push(Subject::new(id.clone(), title, color));
        Ok(id)
    }

    /// Auto-place / import path: reuse an existing subject by title
    /// without touching its color, or create one with `color`.
    pub fn ensure_subject(&mut self, title: &str, color: &str) -> String {
        if let Some(subject) = self.find_subject(title) {
            return subject.id.clone();
        }
        let id = self.ids.next_id("s");
        self.subjects.push(Subject::new(id.clone(), title, color));
        id
    }

    // --- Block mutations ---

    /// Places a new manual block. Returns the new block id.
    ///
    /// Refuses with [`PlaceError::InvalidDuration`] unless the duration
    /// is a positive multiple of 30, and with
    /// [`PlaceError::SlotConflict`] when the span is not free.
    ///
    /// # Panics
    /// Panics if `subject_id` does not exist — block creation without a
    /// subject is a caller bug.
    pub fn create_block(
        &mut self,
        subject_id: &str,
        day: Day,
        start_min: u32,
        duration_min: u32,
    ) -> Result<String, PlaceError> {
        check_duration(duration_min)?;
        self.commit_block(subject_id, day, start_min, duration_min, false, None)
    }

    /// Places an auto-placed block carrying the source task's due date.
    ///
    /// Chunk durations are budget remainders and need not be
    /// slot-aligned, so only the conflict check applies here.
    pub(crate) fn create_auto_block(
        &mut self,
        subject_id: &str,
        day: Day,
        start_min: u32,
        duration_min: u32,
        due_date: Option<NaiveDate>,
    ) -> Result<String, PlaceError> {
        self.commit_block(subject_id, day, start_min, duration_min, true, due_date)
    }

    /// Moves a block to a new day/start, keeping its duration.
    ///
    /// The target is validated against all *other* blocks; moving a
    /// block onto its own current span always succeeds.
    ///
    /// # Panics
    /// Panics if `id` does not exist.
    pub fn move_block(&mut self, id: &str, new_day: Day, new_start_min: u32) -> Result<(), PlaceError> {
        let idx = self.index_of(id);
        let duration = self.blocks[idx].duration_min;
        if !self.is_free(new_day, new_start_min, duration, Some(id)) {
            return Err(PlaceError::SlotConflict);
        }
        let block = &mut self.blocks[idx];
        block.day = new_day;
        block.start_min = new_start_min;
        Ok(())
    }

    /// Resizes a block in place at its current day/start.
    ///
    /// The new duration must be a positive multiple of 30 (use
    /// [`TimeGrid::snap_slots`] to quantize a continuous drag signal
    /// first) and the extended span must be free of *other* blocks.
    ///
    /// # Panics
    /// Panics if `id` does not exist.
    pub fn resize_block(&mut self, id: &str, new_duration_min: u32) -> Result<(), PlaceError> {
        check_duration(new_duration_min)?;
        let idx = self.index_of(id);
        let (day, start) = (self.blocks[idx].day, self.blocks[idx].start_min);
        if !self.is_free(day, start, new_duration_min, Some(id)) {
            return Err(PlaceError::SlotConflict);
        }
        self.blocks[idx].duration_min = new_duration_min;
        Ok(())
    }

    /// Removes a block unconditionally. Returns whether it existed.
    pub fn delete_block(&mut self, id: &str) -> bool {
        let before = self.blocks.len();
        self.blocks.retain(|b| b.id != id);
        self.blocks.len() != before
    }

    /// Purges every auto-placed block, leaving manual blocks untouched.
    /// Each auto-placement run starts from this clean slate.
    pub fn clear_auto_placed(&mut self) {
        self.blocks.retain(|b| !b.auto_placed);
    }

    /// Removes all blocks and subjects (reset / import precondition).
    pub fn clear(&mut self) {
        self.subjects.clear();
        self.blocks.clear();
    }

    fn index_of(&self, id: &str) -> usize {
        self.blocks
            .iter()
            .position(|b| b.id == id)
            .unwrap_or_else(|| panic!("unknown block id: {id:?}"))
    }

    fn commit_block(
        &mut self,
        subject_id: &str,
        day: Day,
        start_min: u32,
        duration_min: u32,
        auto_placed: bool,
        due_date: Option<NaiveDate>,
    ) -> Result<String, PlaceError> {
        assert!(
            self.subject(subject_id).is_some(),
            "unknown subject id: {subject_id:?}"
        );
        if !self.is_free(day, start_min, duration_min, None) {
            return Err(PlaceError::SlotConflict);
        }
        let id = self.ids.next_id("b");
        self.blocks.push(
            ScheduleBlock::new(id.clone(), subject_id, day, start_min, duration_min)
                .with_auto_placed(auto_placed)
                .with_due_date(due_date),
        );
        Ok(id)
    }
}

fn check_duration(duration_min: u32) -> Result<(), PlaceError> {
    if duration_min == 0 || duration_min % SLOT_MIN != 0 {
        return Err(PlaceError::InvalidDuration(duration_min));
    }
    Ok(())
}
