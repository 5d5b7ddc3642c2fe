//! Bulk import of externally-sourced schedule rows.
//!
//! Rows come from a spreadsheet-shaped source already parsed into
//! [`ImportRecord`] values. Import replaces the whole store, then feeds
//! each row through the same validated create path as a user action, so
//! an imported file can never produce an overlapping or out-of-window
//! schedule. Rows that fail validation are counted, not fatal.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::models::Day;
use crate::palette::ColorDeck;
use crate::store::ScheduleStore;

/// Title substituted for rows with a blank subject cell.
const UNTITLED: &str = "Untitled";
const UNTITLED_COLOR: &str = "#BDBDBD";

/// One schedule row as parsed from the source sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportRecord {
    pub title: String,
    pub day: Day,
    /// `HH:MM` start label, window-relative like any grid cell.
    pub start_label: String,
    pub duration_min: u32,
}

impl ImportRecord {
    pub fn new(title: impl Into<String>, day: Day, start_label: impl Into<String>, duration_min: u32) -> Self {
        Self {
            title: title.into(),
            day,
            start_label: start_label.into(),
            duration_min,
        }
    }
}

/// Per-row outcome counts of one import run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportSummary {
    /// Rows that became blocks.
    pub imported: usize,
    /// Rows refused for a malformed label, invalid duration, or a
    /// conflict with an earlier row.
    pub skipped: usize,
}

/// Replaces the store's content with the given rows.
///
/// Subjects are deduplicated by case-insensitive title across rows;
/// each new subject draws its color from `deck`. Returns how many rows
/// were imported and how many skipped.
pub fn apply_import(
    store: &mut ScheduleStore,
    deck: &mut ColorDeck,
    rng: &mut impl Rng,
    records: &[ImportRecord],
) -> ImportSummary {
    store.clear();

    let mut summary = ImportSummary::default();
    for record in records {
        let title = record.title.trim();
        let (title, color) = if title.is_empty() {
            (UNTITLED, UNTITLED_COLOR.to_string())
        } else {
            (title, String::new())
        };

        let Some(start_min) = store.grid().try_to_minutes(&record.start_label) else {
            summary.skipped += 1;
            continue;
        };

        // Draw a deck color only when the subject does not exist yet,
        // so repeated rows cannot burn through the deck.
        let subject_id = match store.find_subject(title) {
            Some(subject) => subject.id.clone(),
            None => {
                let color = if color.is_empty() { deck.next(rng) } else { color };
                store.ensure_subject(title, &color)
            }
        };

        match store.create_block(&subject_id, record.day, start_min, record.duration_min) {
            Ok(_) => summary.imported += 1,
            Err(_) => summary.skipped += 1,
        }
    }
    summary
}

/// Converts a spreadsheet time serial (fraction of a day) to an
/// `HH:MM` label, flooring minutes to the half hour.
///
/// `0.354167` (8:30 AM) becomes `"08:30"`; seconds-level noise in the
/// serial is absorbed by rounding to whole minutes first.
pub fn excel_time_to_label(serial: f64) -> String {
    let total_min = (serial * 24.0 * 60.0).round() as i64;
    let total_min = total_min.rem_euclid(24 * 60) as u32;
    let hour = total_min / 60;
    let minute = if total_min % 60 >= 30 { 30 } else { 0 };
    format!("{hour:02}:{minute:02}")
}
