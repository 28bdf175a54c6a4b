//! Landing-page animations outside the demo terminal: scroll reveal and
//! stat counters.
//!
//! Intersection is computed from bounding rects polled once per frame, so
//! the animators themselves are plain state machines over numbers.

pub mod counter;
pub mod dom;
pub mod reveal;

/// Vertical extent of an element in viewport coordinates (px).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub top: f64,
    pub height: f64,
}

impl Bounds {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }
}

/// Fraction of `bounds` inside the viewport, with the viewport's bottom edge
/// pulled up by `bottom_margin` px.
///
/// A zero-height element counts as fully visible while it sits inside the
/// (shrunk) viewport.
pub fn intersection_ratio(bounds: Bounds, viewport_height: f64, bottom_margin: f64) -> f64 {
    let view_bottom = viewport_height - bottom_margin;
    if view_bottom <= 0.0 {
        return 0.0;
    }
    let bottom = bounds.top + bounds.height.max(0.0);
    if bounds.height <= 0.0 {
        let inside = bounds.top >= 0.0 && bounds.top <= view_bottom;
        return if inside { 1.0 } else { 0.0 };
    }
    let overlap = bottom.min(view_bottom) - bounds.top.max(0.0);
    (overlap / bounds.height).clamp(0.0, 1.0)
}
