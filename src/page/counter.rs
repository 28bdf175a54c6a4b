//! Eased count-up of `[data-count]` stats, started per section.

/// Share of a section that must be visible to start its counters.
pub const COUNTER_THRESHOLD: f64 = 0.3;

/// Cubic ease-out over `progress` in `0..=1`.
pub fn ease_out_cubic(progress: f64) -> f64 {
    1.0 - (1.0 - progress).powi(3)
}

/// Value shown `elapsed_ms` into a count-up to `target`.
pub fn counter_value(target: u64, elapsed_ms: f64, duration_ms: f64) -> u64 {
    if duration_ms <= 0.0 {
        return target;
    }
    let progress = (elapsed_ms / duration_ms).clamp(0.0, 1.0);
    (target as f64 * ease_out_cubic(progress)).floor() as u64
}

/// Parse a `data-count` attribute. Anything but a plain non-negative
/// integer is rejected.
pub fn parse_target(raw: &str) -> Option<u64> {
    raw.trim().parse().ok()
}

struct CounterGroup {
    /// Indices into `CounterAnimator::targets`.
    members: Vec<usize>,
    started_ms: Option<f64>,
}

/// Counters grouped by the section that triggers them. Each group starts
/// independently the first time its section is visible enough and is not
/// observed afterwards.
pub struct CounterAnimator {
    duration_ms: f64,
    targets: Vec<u64>,
    shown: Vec<Option<u64>>,
    groups: Vec<CounterGroup>,
}

impl CounterAnimator {
    pub fn new(duration_ms: f64) -> Self {
        Self {
            duration_ms,
            targets: Vec::new(),
            shown: Vec::new(),
            groups: Vec::new(),
        }
    }

    /// Add a group of counter targets. Returns `(group index, index of the
    /// first counter)`; the group's counters are numbered consecutively.
    pub fn add_group(&mut self, targets: &[u64]) -> (usize, usize) {
        let first = self.targets.len();
        self.targets.extend_from_slice(targets);
        self.shown.extend(targets.iter().map(|_| None));
        self.groups.push(CounterGroup {
            members: (first..first + targets.len()).collect(),
            started_ms: None,
        });
        (self.groups.len() - 1, first)
    }

    #[cfg(test)]
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// Whether `group` is still waiting for its section to come into view.
    pub fn is_watching(&self, group: usize) -> bool {
        self.groups.get(group).is_some_and(|g| g.started_ms.is_none())
    }

    /// Feed the visible ratio of a group's section. Returns true when this
    /// observation starts the group.
    pub fn observe(&mut self, group: usize, ratio: f64, now_ms: f64) -> bool {
        match self.groups.get_mut(group) {
            Some(g) if g.started_ms.is_none() && ratio > 0.0 && ratio >= COUNTER_THRESHOLD => {
                g.started_ms = Some(now_ms);
                true
            }
            _ => false,
        }
    }

    /// Sample every running counter. Returns `(counter index, value)` for
    /// counters whose displayed value changed.
    pub fn frame(&mut self, now_ms: f64) -> Vec<(usize, u64)> {
        let mut updates = Vec::new();
        for group in &self.groups {
            let Some(started) = group.started_ms else {
                continue;
            };
            for &i in &group.members {
                let value = counter_value(self.targets[i], now_ms - started, self.duration_ms);
                if self.shown[i] != Some(value) {
                    self.shown[i] = Some(value);
                    updates.push((i, value));
                }
            }
        }
        updates
    }

    #[cfg(test)]
    pub fn shown(&self, counter: usize) -> Option<u64> {
        self.shown.get(counter).copied().flatten()
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_ease_bounded_and_monotonic(a in 0.0f64..=1.0, b in 0.0f64..=1.0) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!((0.0..=1.0).contains(&ease_out_cubic(lo)));
            prop_assert!(ease_out_cubic(lo) <= ease_out_cubic(hi));
        }

        #[test]
        fn prop_counter_never_exceeds_target(
            target in 0u64..1_000_000,
            elapsed in -100.0f64..5000.0,
        ) {
            prop_assert!(counter_value(target, elapsed, 2000.0) <= target);
        }

        #[test]
        fn prop_counter_reaches_target(target in 0u64..1_000_000, extra in 0.0f64..1000.0) {
            prop_assert_eq!(counter_value(target, 2000.0 + extra, 2000.0), target);
        }
    }
}
