//! One-shot scroll reveal.

use super::{intersection_ratio, Bounds};

/// Share of an element that must be visible before it is revealed.
pub const REVEAL_THRESHOLD: f64 = 0.1;
/// Elements reveal only once they are this far above the viewport bottom.
pub const REVEAL_BOTTOM_MARGIN: f64 = 50.0;

/// Revealed flags for every `.reveal` element found at startup.
pub struct RevealAnimator {
    revealed: Vec<bool>,
}

impl RevealAnimator {
    pub fn new(count: usize) -> Self {
        Self {
            revealed: vec![false; count],
        }
    }

    /// Feed the current position of element `index`. Returns true exactly
    /// once: on the observation that reveals it.
    pub fn observe(&mut self, index: usize, bounds: Bounds, viewport_height: f64) -> bool {
        let Some(revealed) = self.revealed.get_mut(index) else {
            return false;
        };
        if *revealed {
            return false;
        }
        let ratio = intersection_ratio(bounds, viewport_height, REVEAL_BOTTOM_MARGIN);
        if ratio > 0.0 && ratio >= REVEAL_THRESHOLD {
            *revealed = true;
            return true;
        }
        false
    }

    #[cfg(test)]
    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.get(index).copied().unwrap_or(false)
    }

    /// Indices still being observed.
    pub fn pending(&self) -> impl Iterator<Item = usize> + '_ {
        self.revealed
            .iter()
            .enumerate()
            .filter_map(|(i, &r)| (!r).then_some(i))
    }
}
