//! Day-of-week model.
//!
//! The weekly grid spans a fixed ordered set of seven day columns.
//! Days are equality-comparable set members; the only ordering that
//! matters is the display order of [`Day::ALL`].

use serde::{Deserialize, Serialize};
use std::fmt;

/// A day column of the weekly grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Day {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
    Sun,
}

impl Day {
    /// All seven days in display order (Monday first).
    pub const ALL: [Day; 7] = [
        Day::Mon,
        Day::Tue,
        Day::Wed,
        Day::Thu,
        Day::Fri,
        Day::Sat,
        Day::Sun,
    ];

    /// Monday through Friday — the default auto-placement days.
    pub const WEEKDAYS: [Day; 5] = [Day::Mon, Day::Tue, Day::Wed, Day::Thu, Day::Fri];

    /// Short display label ("Mon", "Tue", ...).
    pub fn label(&self) -> &'static str {
        match self {
            Day::Mon => "Mon",
            Day::Tue => "Tue",
            Day::Wed => "Wed",
            Day::Thu => "Thu",
            Day::Fri => "Fri",
            Day::Sat => "Sat",
            Day::Sun => "Sun",
        }
    }

    /// Whether this day is Monday through Friday.
    pub fn is_weekday(&self) -> bool {
        !matches!(self, Day::Sat | Day::Sun)
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
