//! Color selection for subjects.
//!
//! Manually created subjects pick from a fixed palette dealt like a
//! shuffled deck (no repeats until the deck runs out); auto-placed
//! subjects get a fixed color per priority tier so tiers are visually
//! consistent across runs.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::models::Priority;

/// The subject color palette.
pub const PRETTY_COLORS: [&str; 10] = [
    "#FF6B6B", "#FFD166", "#06D6A0", "#118AB2", "#073B4C",
    "#EE6C4D", "#9A6324", "#6A4C93", "#F781BE", "#2EC4B6",
];

/// Fixed display color for a priority tier.
pub fn priority_color(priority: Priority) -> &'static str {
    match priority {
        Priority::A => "#D32F2F",
        Priority::B => "#F57C00",
        Priority::C => "#388E3C",
        Priority::D => "#1976D2",
        Priority::E => "#7B1FA2",
    }
}

/// Deals colors from [`PRETTY_COLORS`] shuffle-deck style: each color
/// appears once before the deck is reshuffled.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ColorDeck {
    remaining: Vec<String>,
}

impl ColorDeck {
    /// Creates an empty deck; the first draw shuffles a full one.
    pub fn new() -> Self {
        Self::default()
    }

    /// Draws the next color.
    pub fn next(&mut self, rng: &mut impl Rng) -> String {
        if self.remaining.is_empty() {
            self.remaining = PRETTY_COLORS.iter().map(|c| c.to_string()).collect();
            self.remaining.shuffle(rng);
        }
        self.remaining.pop().unwrap_or_else(|| PRETTY_COLORS[0].to_string())
    }
}
