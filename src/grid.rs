//! Time grid: the fixed time domain of the weekly schedule.
//!
//! The scheduling window spans `start_hour..end_hour` at 30-minute
//! granularity, where `end_hour` may exceed 24 (the default window is
//! 08:00 through 25:00, i.e. 1:00 AM the next morning). The window is
//! one contiguous logical day even though it crosses a calendar
//! midnight.
//!
//! # Time Representation
//! All engine arithmetic uses *logical* minutes since midnight of the
//! grid day. A label like `"00:30"` under the default window parses to
//! 1470, not 30, so cross-midnight times sort after evening ones.
//! Minute values wrap modulo 24h only when rendered back to a label.

use serde::{Deserialize, Serialize};

/// Grid granularity: one slot is 30 minutes.
pub const SLOT_MIN: u32 = 30;

const MINUTES_PER_DAY: u32 = 24 * 60;

/// The fixed time domain of the weekly grid.
///
/// Stateless value type used by the store, the conflict checker, and
/// the auto-placer for label/minute conversion and slot enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeGrid {
    start_hour: u32,
    end_hour: u32,
}

impl Default for TimeGrid {
    /// The reference window: 08:00 through 25:00.
    fn default() -> Self {
        Self::new(8, 25)
    }
}

impl TimeGrid {
    /// Creates a grid spanning `start_hour..end_hour`.
    ///
    /// `end_hour` may exceed 24 to wrap past midnight.
    ///
    /// # Panics
    /// Panics if the window is empty or reversed.
    pub fn new(start_hour: u32, end_hour: u32) -> Self {
        assert!(
            start_hour < end_hour,
            "grid window must be non-empty: {start_hour}..{end_hour}"
        );
        Self {
            start_hour,
            end_hour,
        }
    }

    /// First minute of the window.
    #[inline]
    pub fn window_start_min(&self) -> u32 {
        self.start_hour * 60
    }

    /// One past the last minute of the window.
    #[inline]
    pub fn window_end_min(&self) -> u32 {
        self.end_hour * 60
    }

    /// Parses an `HH:MM` label into logical minutes, or `None` if the
    /// label is malformed.
    ///
    /// Labels earlier than the window start are shifted forward by 24h
    /// so that cross-midnight times compare correctly against same-day
    /// evening times.
    pub fn try_to_minutes(&self, label: &str) -> Option<u32> {
        let (h, m) = label.split_once(':')?;
        let h: u32 = h.parse().ok()?;
        let m: u32 = m.parse().ok()?;
        if h >= 24 || m >= 60 {
            return None;
        }
        let minutes = h * 60 + m;
        if minutes < self.window_start_min() {
            Some(minutes + MINUTES_PER_DAY)
        } else {
            Some(minutes)
        }
    }

    /// Parses an `HH:MM` label into logical minutes.
    ///
    /// # Panics
    /// Panics on a malformed label. Labels reaching the engine come
    /// from grid cells and form inputs that only ever hold `HH:MM`
    /// values, so a parse failure is a caller bug, not user input.
    pub fn to_minutes(&self, label: &str) -> u32 {
        self.try_to_minutes(label)
            .unwrap_or_else(|| panic!("malformed time label: {label:?}"))
    }

    /// Renders logical minutes back to an `HH:MM` label.
    ///
    /// The hour component wraps modulo 24 for display; the underlying
    /// minute value used for comparisons is never wrapped.
    pub fn to_label(&self, minutes: u32) -> String {
        format!("{:02}:{:02}", (minutes / 60) % 24, minutes % 60)
    }

    /// Whether a minute value lies inside the window.
    #[inline]
    pub fn is_within_window(&self, minutes: u32) -> bool {
        minutes < self.window_end_min()
    }

    /// Every 30-minute slot start in the window, in grid-row order.
    pub fn slot_starts(&self) -> impl Iterator<Item = u32> {
        (self.window_start_min()..self.window_end_min()).step_by(SLOT_MIN as usize)
    }

    /// Snaps a continuous slot count (e.g. drag pixels divided by row
    /// height) to a duration in minutes: nearest slot, minimum one.
    pub fn snap_slots(&self, raw_slots: f64) -> u32 {
        let slots = raw_slots.round().max(1.0) as u32;
        slots * SLOT_MIN
    }
}
