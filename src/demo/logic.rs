//! Skill gap demo logic: pure functions over `DemoState`.

use std::num::ParseIntError;

use crate::log;
use crate::time::{take_due, Deferred};

use super::state::{
    DemoState, GapsPanel, PlanPanel, Tab, SLIDER_MAX_HOURS, SLIDER_MIN_HOURS, SLIDER_STEP_HOURS,
};

// ── Selection ──────────────────────────────────────────────────

/// Flip membership of `name`. Returns whether it is now selected.
pub fn toggle_skill(state: &mut DemoState, name: &str) -> bool {
    let skills = &mut state.selection.skills;
    if skills.remove(name) {
        false
    } else {
        skills.insert(name.to_string());
        true
    }
}

/// Parse and store the weekly hours from slider/text input.
///
/// Any integer is stored as given, with no range check. Non-numeric input
/// leaves the stored value untouched.
pub fn update_hours(state: &mut DemoState, value: &str) -> Result<i64, ParseIntError> {
    let hours: i64 = value.trim().parse()?;
    state.selection.weekly_hours = hours;
    Ok(hours)
}

/// Move the slider by `steps` notches. The result always lands on the
/// slider, even when typed-in hours were outside it.
pub fn step_hours(state: &mut DemoState, steps: i32) -> i64 {
    let next = state
        .selection
        .weekly_hours
        .saturating_add((steps as i64).saturating_mul(SLIDER_STEP_HOURS));
    state.selection.weekly_hours = next.clamp(SLIDER_MIN_HOURS, SLIDER_MAX_HOURS);
    state.selection.weekly_hours
}

// ── Tabs ───────────────────────────────────────────────────────

/// Activate the tab called `name`. Unknown names leave every tab inactive
/// and every panel hidden.
pub fn switch_tab(state: &mut DemoState, name: &str) {
    match Tab::from_name(name) {
        Some(tab) => select_tab(state, tab),
        None => {
            cancel_analysis(state);
            state.active_tab = None;
        }
    }
}

pub fn select_tab(state: &mut DemoState, tab: Tab) {
    if tab != Tab::Gaps {
        cancel_analysis(state);
    }
    state.active_tab = Some(tab);
}

/// Move to the neighbouring tab, wrapping around.
pub fn cycle_tab(state: &mut DemoState, forward: bool) {
    let current = state.active_tab.map(|t| t.index()).unwrap_or(0);
    let n = Tab::ALL.len();
    let next = if forward { (current + 1) % n } else { (current + n - 1) % n };
    select_tab(state, Tab::ALL[next]);
}

/// Drop a pending analysis; the gaps panel falls back to Idle.
fn cancel_analysis(state: &mut DemoState) {
    if state.pending_analysis.take().is_some() {
        state.gaps = GapsPanel::Idle;
        log::info("analysis cancelled");
    }
}

// ── Analysis pipeline ──────────────────────────────────────────

/// Show the loading indicator on the gaps tab and schedule the results.
/// Calling again while loading restarts the delay.
pub fn analyze_skills(state: &mut DemoState) {
    select_tab(state, Tab::Gaps);

    state.analysis_runs += 1;
    let run = state.analysis_runs;
    state.gaps = GapsPanel::Loading {
        started_ms: state.now_ms,
        run,
    };
    state.pending_analysis = Some(Deferred::new(
        state.now_ms,
        state.motion.analysis_delay_ms(),
        run,
    ));
}

/// Switch to the plan tab and render the plan for the current weekly hours.
pub fn generate_plan(state: &mut DemoState) {
    select_tab(state, Tab::Plan);
    state.plan = PlanPanel::Plan {
        shown_ms: state.now_ms,
        weekly_hours: state.selection.weekly_hours,
    };
}

/// Back to the first tab. The selection is kept.
pub fn start_over(state: &mut DemoState) {
    switch_tab(state, Tab::Skills.name());
}

/// Advance the demo clock and fire the analysis when it is due.
pub fn tick(state: &mut DemoState, delta_ms: f64) {
    state.now_ms += delta_ms.max(0.0);

    let Some(run) = take_due(&mut state.pending_analysis, state.now_ms) else {
        return;
    };
    let still_loading = matches!(state.gaps, GapsPanel::Loading { run: r, .. } if r == run);
    if still_loading && state.is_active(Tab::Gaps) {
        state.gaps = GapsPanel::Results {
            shown_ms: state.now_ms,
        };
    } else {
        log::info("stale analysis result dropped");
    }
}

// ── Entrance animation ─────────────────────────────────────────

/// Progress of a staggered entrance at `now_ms`.
///
/// `None` while the item is still waiting for its delay; otherwise the
/// fraction of the entrance completed, reaching 1.0 after `duration_ms`.
pub fn entrance_progress(now_ms: f64, shown_ms: f64, delay_ms: f64, duration_ms: f64) -> Option<f64> {
    let since = now_ms - shown_ms - delay_ms;
    if since < 0.0 {
        return None;
    }
    if duration_ms <= 0.0 {
        return Some(1.0);
    }
    Some((since / duration_ms).min(1.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::Motion;

    fn state() -> DemoState {
        DemoState::new(Motion::new(false))
    }

    #[test]
    fn toggle_adds_and_removes() {
        let mut s = state();
        assert!(toggle_skill(&mut s, "Excel"));
        assert!(s.selection.is_selected("Excel"));
        assert!(!toggle_skill(&mut s, "Excel"));
        assert!(!s.selection.is_selected("Excel"));
        assert!(!toggle_skill(&mut s, "Python"));
        assert!(!s.selection.is_selected("Python"));
    }

    #[test]
    fn update_hours_parses_and_labels() {
        let mut s = state();
        assert_eq!(update_hours(&mut s, "20"), Ok(20));
        assert_eq!(s.selection.weekly_hours, 20);
        assert_eq!(s.selection.hours_label(), "20 hrs/week");
        assert_eq!(update_hours(&mut s, " 25 "), Ok(25));
    }

    #[test]
    fn update_hours_rejects_garbage() {
        let mut s = state();
        update_hours(&mut s, "20").unwrap();
        assert!(update_hours(&mut s, "twenty").is_err());
        assert!(update_hours(&mut s, "").is_err());
        assert!(update_hours(&mut s, "12.5").is_err());
        assert_eq!(s.selection.weekly_hours, 20);
    }

    #[test]
    fn update_hours_stores_any_integer() {
        let mut s = state();
        assert_eq!(update_hours(&mut s, "100"), Ok(100));
        assert_eq!(s.selection.hours_label(), "100 hrs/week");
        assert_eq!(update_hours(&mut s, "0"), Ok(0));
        assert_eq!(update_hours(&mut s, "-3"), Ok(-3));
        assert_eq!(s.selection.weekly_hours, -3);
    }

    #[test]
    fn step_hours_returns_to_slider_from_typed_value() {
        let mut s = state();
        update_hours(&mut s, "100").unwrap();
        assert_eq!(step_hours(&mut s, -1), SLIDER_MAX_HOURS);
        update_hours(&mut s, "0").unwrap();
        assert_eq!(step_hours(&mut s, 1), SLIDER_MIN_HOURS);
        update_hours(&mut s, &i64::MAX.to_string()).unwrap();
        assert_eq!(step_hours(&mut s, 1), SLIDER_MAX_HOURS);
    }

    #[test]
    fn step_hours_moves_by_notch() {
        let mut s = state();
        assert_eq!(step_hours(&mut s, 1), 20);
        assert_eq!(step_hours(&mut s, -2), 10);
        assert_eq!(step_hours(&mut s, -10), SLIDER_MIN_HOURS);
        assert_eq!(step_hours(&mut s, 100), SLIDER_MAX_HOURS);
    }

    #[test]
    fn switch_tab_is_idempotent() {
        let mut s = state();
        switch_tab(&mut s, "plan");
        assert_eq!(s.active_tab, Some(Tab::Plan));
        switch_tab(&mut s, "plan");
        assert_eq!(s.active_tab, Some(Tab::Plan));
        switch_tab(&mut s, "gaps");
        assert_eq!(s.active_tab, Some(Tab::Gaps));
    }

    #[test]
    fn unknown_tab_hides_everything() {
        let mut s = state();
        switch_tab(&mut s, "pricing");
        assert_eq!(s.active_tab, None);
        for tab in Tab::ALL {
            assert!(!s.is_active(tab));
        }
        switch_tab(&mut s, "skills");
        assert_eq!(s.active_tab, Some(Tab::Skills));
    }

    #[test]
    fn cycle_tab_wraps() {
        let mut s = state();
        cycle_tab(&mut s, false);
        assert_eq!(s.active_tab, Some(Tab::Plan));
        cycle_tab(&mut s, true);
        assert_eq!(s.active_tab, Some(Tab::Skills));
        cycle_tab(&mut s, true);
        assert_eq!(s.active_tab, Some(Tab::Gaps));
    }

    #[test]
    fn analysis_resolves_after_delay() {
        let mut s = state();
        analyze_skills(&mut s);
        assert_eq!(s.active_tab, Some(Tab::Gaps));
        assert!(matches!(s.gaps, GapsPanel::Loading { .. }));

        tick(&mut s, 1999.0);
        assert!(matches!(s.gaps, GapsPanel::Loading { .. }));
        tick(&mut s, 1.0);
        assert_eq!(s.gaps, GapsPanel::Results { shown_ms: 2000.0 });
        assert!(s.pending_analysis.is_none());
    }

    #[test]
    fn reduced_motion_resolves_after_100ms() {
        let mut s = DemoState::new(Motion::new(true));
        analyze_skills(&mut s);
        tick(&mut s, 99.0);
        assert!(matches!(s.gaps, GapsPanel::Loading { .. }));
        tick(&mut s, 1.0);
        assert!(matches!(s.gaps, GapsPanel::Results { .. }));
    }

    #[test]
    fn leaving_gaps_cancels_analysis() {
        let mut s = state();
        analyze_skills(&mut s);
        tick(&mut s, 500.0);
        switch_tab(&mut s, "skills");
        assert!(s.pending_analysis.is_none());
        assert_eq!(s.gaps, GapsPanel::Idle);

        tick(&mut s, 5000.0);
        switch_tab(&mut s, "gaps");
        assert_eq!(s.gaps, GapsPanel::Idle);
    }

    #[test]
    fn reanalysis_restarts_delay() {
        let mut s = state();
        analyze_skills(&mut s);
        tick(&mut s, 1500.0);
        analyze_skills(&mut s);
        tick(&mut s, 1000.0);
        assert!(matches!(s.gaps, GapsPanel::Loading { run: 2, .. }));
        tick(&mut s, 1000.0);
        assert!(matches!(s.gaps, GapsPanel::Results { .. }));
    }

    #[test]
    fn stale_completion_is_dropped() {
        let mut s = state();
        analyze_skills(&mut s);
        // Panel replaced behind the pipeline's back
        s.gaps = GapsPanel::Idle;
        tick(&mut s, 2000.0);
        assert_eq!(s.gaps, GapsPanel::Idle);
        assert!(s.pending_analysis.is_none());
    }

    #[test]
    fn generate_plan_captures_hours() {
        let mut s = state();
        update_hours(&mut s, "25").unwrap();
        tick(&mut s, 42.0);
        generate_plan(&mut s);
        assert_eq!(s.active_tab, Some(Tab::Plan));
        assert_eq!(
            s.plan,
            PlanPanel::Plan {
                shown_ms: 42.0,
                weekly_hours: 25
            }
        );
        update_hours(&mut s, "30").unwrap();
        assert!(matches!(s.plan, PlanPanel::Plan { weekly_hours: 25, .. }));
    }

    #[test]
    fn start_over_keeps_selection() {
        let mut s = state();
        toggle_skill(&mut s, "Excel");
        analyze_skills(&mut s);
        tick(&mut s, 2000.0);
        generate_plan(&mut s);
        start_over(&mut s);

        assert_eq!(s.active_tab, Some(Tab::Skills));
        assert!(s.selection.is_selected("Excel"));
        assert!(matches!(s.gaps, GapsPanel::Results { .. }));
    }

    #[test]
    fn entrance_progress_staggers() {
        assert_eq!(entrance_progress(100.0, 100.0, 0.0, 500.0), Some(0.0));
        assert_eq!(entrance_progress(100.0, 100.0, 150.0, 500.0), None);
        assert_eq!(entrance_progress(500.0, 100.0, 150.0, 500.0), Some(0.5));
        assert_eq!(entrance_progress(5000.0, 100.0, 150.0, 500.0), Some(1.0));
        assert_eq!(entrance_progress(100.0, 100.0, 0.0, 0.0), Some(1.0));
    }
}
