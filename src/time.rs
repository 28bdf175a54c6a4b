//! Frame clock and cancellable deferred values.
//!
//! `draw_web()` calls at ~60fps with wall-clock timestamps. `FrameClock`
//! turns these into clamped millisecond deltas so every timed behaviour
//! (analysis delay, entrance stagger, counters) runs on one deterministic,
//! fully testable timeline.

/// Upper bound for a single frame delta. A backgrounded tab resumes with a
/// huge gap; clamping keeps timers from all firing in the same frame.
const MAX_FRAME_DELTA_MS: f64 = 500.0;

pub struct FrameClock {
    /// Total clamped milliseconds since creation
    pub elapsed_ms: f64,
    /// Timestamp of the last update (ms), None if first frame
    last_timestamp: Option<f64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            elapsed_ms: 0.0,
            last_timestamp: None,
        }
    }

    /// Feed a wall-clock timestamp (from `performance.now()` or similar).
    /// Returns the clamped delta in milliseconds since the previous frame.
    pub fn update(&mut self, now_ms: f64) -> f64 {
        let delta = match self.last_timestamp {
            Some(prev) => (now_ms - prev).clamp(0.0, MAX_FRAME_DELTA_MS),
            None => 0.0, // First frame: no delta
        };
        self.last_timestamp = Some(now_ms);
        self.elapsed_ms += delta;
        delta
    }
}

/// A value that becomes due at a fixed point on the demo timeline.
///
/// There is no handle to cancel: the owner cancels by dropping it (or by
/// replacing it with a new one).
#[derive(Clone, Debug, PartialEq)]
pub struct Deferred<T> {
    due_ms: f64,
    value: T,
}

impl<T> Deferred<T> {
    pub fn new(now_ms: f64, delay_ms: f64, value: T) -> Self {
        Self {
            due_ms: now_ms + delay_ms.max(0.0),
            value,
        }
    }

    #[cfg(test)]
    pub fn due_ms(&self) -> f64 {
        self.due_ms
    }

    pub fn is_due(&self, now_ms: f64) -> bool {
        now_ms >= self.due_ms
    }

    pub fn into_value(self) -> T {
        self.value
    }
}

/// Take the value out of `slot` if it is due, leaving `None` behind.
pub fn take_due<T>(slot: &mut Option<Deferred<T>>, now_ms: f64) -> Option<T> {
    match slot {
        Some(d) if d.is_due(now_ms) => slot.take().map(Deferred::into_value),
        _ => None,
    }
}
