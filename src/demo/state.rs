//! Skill gap demo state and static content.

use std::collections::BTreeSet;

use crate::motion::Motion;
use crate::time::Deferred;

/// How urgently a gap should be closed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Priority {
    Critical,
    High,
    Medium,
}

impl Priority {
    pub fn label(&self) -> &'static str {
        match self {
            Priority::Critical => "CRITICAL",
            Priority::High => "HIGH",
            Priority::Medium => "MEDIUM",
        }
    }
}

/// One identified gap between current and required proficiency (percent).
pub struct SkillGap {
    pub skill: &'static str,
    pub current: u8,
    pub required: u8,
    pub priority: Priority,
}

pub const SKILL_GAPS: [SkillGap; 5] = [
    SkillGap {
        skill: "Machine Learning",
        current: 30,
        required: 85,
        priority: Priority::Critical,
    },
    SkillGap {
        skill: "Deep Learning",
        current: 0,
        required: 75,
        priority: Priority::Critical,
    },
    SkillGap {
        skill: "TensorFlow/PyTorch",
        current: 0,
        required: 80,
        priority: Priority::High,
    },
    SkillGap {
        skill: "Statistics",
        current: 60,
        required: 90,
        priority: Priority::Medium,
    },
    SkillGap {
        skill: "Data Visualization",
        current: 40,
        required: 70,
        priority: Priority::Medium,
    },
];

/// One week of the generated study plan.
pub struct WeekPlan {
    pub week: u8,
    pub title: &'static str,
    pub topics: &'static [&'static str],
    pub hours: u32,
    pub assessment: &'static str,
}

pub const WEEKLY_PLAN: [WeekPlan; 4] = [
    WeekPlan {
        week: 1,
        title: "Foundations of Machine Learning",
        topics: &["ML Fundamentals", "Supervised Learning Basics", "Model Evaluation"],
        hours: 15,
        assessment: "Classification Model Challenge",
    },
    WeekPlan {
        week: 2,
        title: "Deep Learning Introduction",
        topics: &["Neural Networks", "Backpropagation", "CNNs"],
        hours: 15,
        assessment: "Image Classification Project",
    },
    WeekPlan {
        week: 3,
        title: "TensorFlow Essentials",
        topics: &["TF Fundamentals", "Building Models", "Training Pipelines"],
        hours: 15,
        assessment: "Custom Model Implementation",
    },
    WeekPlan {
        week: 4,
        title: "Advanced Statistics",
        topics: &["Statistical Inference", "Hypothesis Testing", "A/B Testing"],
        hours: 15,
        assessment: "Statistical Analysis Report",
    },
];

/// Skill chips offered on the skills tab, in display order.
pub const SKILL_CATALOG: [&str; 8] = [
    "Python",
    "SQL",
    "Excel",
    "Statistics",
    "Data Visualization",
    "Machine Learning",
    "Tableau",
    "Communication",
];

/// Chips selected when the page loads.
pub const INITIAL_SKILLS: [&str; 2] = ["Python", "SQL"];

pub const DEFAULT_WEEKLY_HOURS: i64 = 15;

/// Bounds and notch of the `[-]`/`[+]` slider. Typed-in hours are stored
/// as entered and may fall outside this range.
pub const SLIDER_MIN_HOURS: i64 = 5;
pub const SLIDER_MAX_HOURS: i64 = 40;
pub const SLIDER_STEP_HOURS: i64 = 5;

/// Demo tabs. Each tab owns exactly one panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tab {
    Skills,
    Gaps,
    Plan,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Skills, Tab::Gaps, Tab::Plan];

    pub fn name(&self) -> &'static str {
        match self {
            Tab::Skills => "skills",
            Tab::Gaps => "gaps",
            Tab::Plan => "plan",
        }
    }

    pub fn from_name(name: &str) -> Option<Tab> {
        Tab::ALL.into_iter().find(|t| t.name() == name)
    }

    pub fn title(&self) -> &'static str {
        match self {
            Tab::Skills => "Skills",
            Tab::Gaps => "Gaps",
            Tab::Plan => "Plan",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Tab::Skills => 0,
            Tab::Gaps => 1,
            Tab::Plan => 2,
        }
    }
}

/// What the visitor has chosen so far. Lives for the page session.
#[derive(Clone, Debug, PartialEq)]
pub struct Selection {
    pub skills: BTreeSet<String>,
    pub weekly_hours: i64,
}

impl Selection {
    pub fn new() -> Self {
        Self {
            skills: INITIAL_SKILLS.iter().map(|s| s.to_string()).collect(),
            weekly_hours: DEFAULT_WEEKLY_HOURS,
        }
    }

    pub fn is_selected(&self, skill: &str) -> bool {
        self.skills.contains(skill)
    }

    pub fn hours_label(&self) -> String {
        hours_label(self.weekly_hours)
    }
}

pub fn hours_label(hours: i64) -> String {
    format!("{} hrs/week", hours)
}

/// Content of the gaps panel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GapsPanel {
    Idle,
    Loading { started_ms: f64, run: u32 },
    Results { shown_ms: f64 },
}

/// Content of the plan panel. Hours are captured when the plan is generated.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PlanPanel {
    Empty,
    Plan { shown_ms: f64, weekly_hours: i64 },
}

pub struct DemoState {
    pub motion: Motion,
    /// Demo timeline in milliseconds, advanced by `logic::tick`.
    pub now_ms: f64,
    pub selection: Selection,
    /// `None` only after switching to an unknown tab name.
    pub active_tab: Option<Tab>,
    pub gaps: GapsPanel,
    pub plan: PlanPanel,
    /// Completion of the analysis run with the carried id.
    pub pending_analysis: Option<Deferred<u32>>,
    pub analysis_runs: u32,
}

impl DemoState {
    pub fn new(motion: Motion) -> Self {
        Self {
            motion,
            now_ms: 0.0,
            selection: Selection::new(),
            active_tab: Some(Tab::Skills),
            gaps: GapsPanel::Idle,
            plan: PlanPanel::Empty,
            pending_analysis: None,
            analysis_runs: 0,
        }
    }

    pub fn is_active(&self, tab: Tab) -> bool {
        self.active_tab == Some(tab)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_state() {
        let s = DemoState::new(Motion::default());
        assert_eq!(s.active_tab, Some(Tab::Skills));
        assert_eq!(s.gaps, GapsPanel::Idle);
        assert_eq!(s.plan, PlanPanel::Empty);
        assert_eq!(s.selection.weekly_hours, 15);
        assert!(s.selection.is_selected("Python"));
        assert!(s.selection.is_selected("SQL"));
        assert_eq!(s.selection.skills.len(), 2);
        assert!(s.pending_analysis.is_none());
    }

    #[test]
    fn tab_names_round_trip() {
        for tab in Tab::ALL {
            assert_eq!(Tab::from_name(tab.name()), Some(tab));
        }
        assert_eq!(Tab::from_name("pricing"), None);
        assert_eq!(Tab::from_name("Skills"), None);
    }

    #[test]
    fn skill_gaps_are_valid_percentages() {
        for gap in &SKILL_GAPS {
            assert!(gap.current <= 100 && gap.required <= 100);
            assert!(gap.current < gap.required, "{} has no gap", gap.skill);
        }
    }

    #[test]
    fn weeks_in_order() {
        for (i, week) in WEEKLY_PLAN.iter().enumerate() {
            assert_eq!(week.week as usize, i + 1);
            assert!(!week.topics.is_empty());
        }
    }

    #[test]
    fn initial_skills_are_in_catalog() {
        for skill in INITIAL_SKILLS {
            assert!(SKILL_CATALOG.contains(&skill));
        }
    }

    #[test]
    fn default_hours_on_slider_step() {
        assert!((SLIDER_MIN_HOURS..=SLIDER_MAX_HOURS).contains(&DEFAULT_WEEKLY_HOURS));
        assert_eq!(DEFAULT_WEEKLY_HOURS % SLIDER_STEP_HOURS, 0);
        assert_eq!(hours_label(20), "20 hrs/week");
    }
}
