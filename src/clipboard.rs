//! Clipboard buffer for copy/paste of block content.
//!
//! Copying snapshots only a block's *content* — subject reference and
//! duration. Day, start, auto-placed flag, and due date are
//! deliberately not copied: a paste is always a fresh manual placement
//! at a new location. The buffer persists across pastes until
//! overwritten by another copy.

use serde::{Deserialize, Serialize};

use crate::models::Day;
use crate::store::{PlaceError, ScheduleStore};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct CopiedBlock {
    subject_id: String,
    duration_min: u32,
}

/// Holds one copied block's content.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClipboardBuffer {
    content: Option<CopiedBlock>,
}

impl ClipboardBuffer {
    /// Creates an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether nothing has been copied yet.
    pub fn is_empty(&self) -> bool {
        self.content.is_none()
    }

    /// Drops the buffered content.
    pub fn clear(&mut self) {
        self.content = None;
    }

    /// Snapshots a block's subject and duration, overwriting any prior
    /// copy. Returns `false` (buffer unchanged) if `id` is unknown.
    pub fn copy(&mut self, store: &ScheduleStore, id: &str) -> bool {
        match store.block(id) {
            Some(block) => {
                self.content = Some(CopiedBlock {
                    subject_id: block.subject_id.clone(),
                    duration_min: block.duration_min,
                });
                true
            }
            None => false,
        }
    }

    /// Pastes the buffered content as a new manual block at
    /// `(day, start_min)`. Conflict-checked like any create; the
    /// buffer is kept for further pastes.
    pub fn paste(
        &self,
        store: &mut ScheduleStore,
        day: Day,
        start_min: u32,
    ) -> Result<String, PlaceError> {
        let copied = self.content.as_ref().ok_or(PlaceError::EmptyClipboard)?;
        store.create_block(&copied.subject_id, day, start_min, copied.duration_min)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::TimeGrid;

    fn store_with_block() -> (ScheduleStore, String) {
        let mut store = ScheduleStore::new(TimeGrid::default());
        let subject = store.upsert_subject("Study", "#118AB2").unwrap();
        let block = store.create_block(&subject, Day::Mon, 540, 60).unwrap();
        (store, block)
    }

    #[test]
    fn test_copy_then_paste() {
        let (mut store, block) = store_with_block();
        let mut clipboard = ClipboardBuffer::new();
        assert!(clipboard.copy(&store, &block));

        let pasted = clipboard.paste(&mut store, Day::Wed, 840).unwrap(); // Wed 14:00
        let new = store.block(&pasted).unwrap();
        assert_eq!(new.day, Day::Wed);
        assert_eq!(new.start_min, 840);
        assert_eq!(new.duration_min, 60);
        assert!(!new.auto_placed);
        assert_eq!(
            store.subject(&new.subject_id).unwrap().title,
            "Study"
        );
    }

    #[test]
    fn test_paste_into_occupied_slot_refused() {
        let (mut store, block) = store_with_block();
        let mut clipboard = ClipboardBuffer::new();
        clipboard.copy(&store, &block);

        // Mon 09:30 overlaps the original block
        assert_eq!(
            clipboard.paste(&mut store, Day::Mon, 570),
            Err(PlaceError::SlotConflict)
        );
        assert_eq!(store.blocks().len(), 1);
    }

    #[test]
    fn test_buffer_persists_across_pastes() {
        let (mut store, block) = store_with_block();
        let mut clipboard = ClipboardBuffer::new();
        clipboard.copy(&store, &block);

        clipboard.paste(&mut store, Day::Tue, 540).unwrap();
        clipboard.paste(&mut store, Day::Thu, 540).unwrap();
        assert_eq!(store.blocks().len(), 3);
    }

    #[test]
    fn test_empty_buffer_refuses_paste() {
        let (mut store, _) = store_with_block();
        let clipboard = ClipboardBuffer::new();
        assert!(clipboard.is_empty());
        assert_eq!(
            clipboard.paste(&mut store, Day::Tue, 540),
            Err(PlaceError::EmptyClipboard)
        );
    }

    #[test]
    fn test_copy_unknown_id_keeps_buffer() {
        let (store, block) = store_with_block();
        let mut clipboard = ClipboardBuffer::new();
        clipboard.copy(&store, &block);
        assert!(!clipboard.copy(&store, "nope"));
        assert!(!clipboard.is_empty());
    }

    #[test]
    fn test_copy_strips_auto_flag_and_due_date() {
        let mut store = ScheduleStore::new(TimeGrid::default());
        let subject = store.upsert_subject("Review", "#D32F2F").unwrap();
        let due = chrono::NaiveDate::from_ymd_opt(2026, 9, 4);
        let auto = store
            .create_auto_block(&subject, Day::Fri, 600, 60, due)
            .unwrap();

        let mut clipboard = ClipboardBuffer::new();
        clipboard.copy(&store, &auto);
        let pasted = clipboard.paste(&mut store, Day::Sat, 600).unwrap();

        let new = store.block(&pasted).unwrap();
        assert!(!new.auto_placed);
        assert!(new.due_date.is_none());
    }
}
