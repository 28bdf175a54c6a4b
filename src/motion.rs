//! Reduced-motion preference and every animation timing derived from it.

/// Delay before the analysis results replace the loading indicator.
const ANALYSIS_DELAY_MS: f64 = 2000.0;
const ANALYSIS_DELAY_REDUCED_MS: f64 = 100.0;

/// Per-index entrance offsets.
const GAP_STAGGER_MS: f64 = 100.0;
const PLAN_STAGGER_MS: f64 = 150.0;

/// Slide-in duration of a plan week.
const PLAN_ENTRANCE_MS: f64 = 500.0;

/// Count-up duration of the stat counters.
const COUNTER_DURATION_MS: f64 = 2000.0;

/// The user's reduced-motion preference, read once at startup.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Motion {
    pub reduced: bool,
}

impl Motion {
    pub fn new(reduced: bool) -> Self {
        Self { reduced }
    }

    pub fn analysis_delay_ms(&self) -> f64 {
        if self.reduced {
            ANALYSIS_DELAY_REDUCED_MS
        } else {
            ANALYSIS_DELAY_MS
        }
    }

    pub fn gap_stagger_ms(&self, index: usize) -> f64 {
        if self.reduced {
            0.0
        } else {
            index as f64 * GAP_STAGGER_MS
        }
    }

    pub fn plan_stagger_ms(&self, index: usize) -> f64 {
        if self.reduced {
            0.0
        } else {
            index as f64 * PLAN_STAGGER_MS
        }
    }

    pub fn plan_entrance_ms(&self) -> f64 {
        if self.reduced {
            0.0
        } else {
            PLAN_ENTRANCE_MS
        }
    }

    pub fn counter_duration_ms(&self) -> f64 {
        if self.reduced {
            0.0
        } else {
            COUNTER_DURATION_MS
        }
    }
}

/// Query `prefers-reduced-motion: reduce`. Defaults to full motion when the
/// media query is unavailable.
pub fn prefers_reduced_motion() -> bool {
    web_sys::window()
        .and_then(|w| w.match_media("(prefers-reduced-motion: reduce)").ok().flatten())
        .map(|mql| mql.matches())
        .unwrap_or(false)
}
