//! Page-level configuration read from the URL query string.
//!
//! `?motion=reduce|full` overrides the system reduced-motion preference and
//! `?hours=<n>` presets the weekly hours slider. Unknown keys are ignored.

use crate::motion::Motion;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MotionOverride {
    Reduce,
    Full,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PageConfig {
    pub motion: Option<MotionOverride>,
    /// Raw value; validated later by `update_hours`.
    pub hours: Option<String>,
}

impl PageConfig {
    /// Resolve the effective motion setting against the system preference.
    pub fn motion(&self, prefers_reduced: bool) -> Motion {
        match self.motion {
            Some(MotionOverride::Reduce) => Motion::new(true),
            Some(MotionOverride::Full) => Motion::new(false),
            None => Motion::new(prefers_reduced),
        }
    }
}

/// Parse a `location.search` string (with or without the leading `?`).
/// Later occurrences of a key win.
pub fn parse_query(search: &str) -> PageConfig {
    let mut config = PageConfig::default();
    let query = search.strip_prefix('?').unwrap_or(search);

    for pair in query.split('&').filter(|p| !p.is_empty()) {
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        match key {
            "motion" => {
                config.motion = match value.to_ascii_lowercase().as_str() {
                    "reduce" | "reduced" => Some(MotionOverride::Reduce),
                    "full" => Some(MotionOverride::Full),
                    _ => config.motion,
                };
            }
            "hours" if !value.is_empty() => config.hours = Some(value.to_string()),
            _ => {}
        }
    }

    config
}

pub fn from_location() -> PageConfig {
    let search = web_sys::window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default();
    parse_query(&search)
}
