//! Subject (activity definition) model.
//!
//! A subject is the named, colored activity shared by one or more
//! schedule blocks. Subjects are deduplicated by case-insensitive
//! title; a subject's color is mutable and shared by all its blocks.

use serde::{Deserialize, Serialize};

/// A named activity definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subject {
    /// Unique subject identifier.
    pub id: String,
    /// Display title. Dedup key (case-insensitive).
    pub title: String,
    /// Display color, `#RRGGBB`.
    pub color: String,
}

impl Subject {
    /// Creates a new subject.
    pub fn new(id: impl Into<String>, title: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            color: color.into(),
        }
    }

    /// Case-insensitive title comparison, the dedup rule for the
    /// add/edit form path.
    pub fn title_matches(&self, title: &str) -> bool {
        self.title.eq_ignore_ascii_case(title)
    }
}
