//! Skill gap analysis demo: pick skills, set weekly hours, get a gap
//! report and a four-week learning plan.

pub mod actions;
pub mod logic;
pub mod render;
pub mod state;

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::Rect;
use ratzilla::ratatui::Frame;

use crate::input::{ClickState, InputEvent};
use crate::log;
use crate::motion::Motion;

use actions::*;
use state::{DemoState, GapsPanel, PlanPanel, Tab, SKILL_CATALOG};

pub struct SkillGapDemo {
    pub state: DemoState,
}

impl SkillGapDemo {
    pub fn new(motion: Motion) -> Self {
        Self {
            state: DemoState::new(motion),
        }
    }

    /// Apply the `hours` page parameter, if any.
    pub fn preset_hours(&mut self, value: &str) {
        if let Err(e) = logic::update_hours(&mut self.state, value) {
            log::warn(&format!("ignoring hours={value:?}: {e}"));
        }
    }

    /// Returns true if the event was consumed.
    pub fn handle_input(&mut self, event: &InputEvent) -> bool {
        match event {
            InputEvent::Left => {
                logic::cycle_tab(&mut self.state, false);
                true
            }
            InputEvent::Right => {
                logic::cycle_tab(&mut self.state, true);
                true
            }
            InputEvent::Click(id) => self.handle_click(*id),
            InputEvent::Enter => self.handle_key('\n'),
            InputEvent::Key(c) => self.handle_key(c.to_ascii_lowercase()),
        }
    }

    fn handle_click(&mut self, action_id: u16) -> bool {
        match action_id {
            id if (TAB_BASE..TAB_BASE + Tab::ALL.len() as u16).contains(&id) => {
                logic::select_tab(&mut self.state, Tab::ALL[(id - TAB_BASE) as usize]);
                true
            }
            id if (SKILL_CHIP_BASE..SKILL_CHIP_BASE + SKILL_CATALOG.len() as u16).contains(&id) => {
                logic::toggle_skill(&mut self.state, SKILL_CATALOG[(id - SKILL_CHIP_BASE) as usize]);
                true
            }
            HOURS_DOWN => {
                logic::step_hours(&mut self.state, -1);
                true
            }
            HOURS_UP => {
                logic::step_hours(&mut self.state, 1);
                true
            }
            ANALYZE => {
                logic::analyze_skills(&mut self.state);
                true
            }
            GENERATE_PLAN => {
                logic::generate_plan(&mut self.state);
                true
            }
            START_OVER => {
                logic::start_over(&mut self.state);
                true
            }
            _ => false,
        }
    }

    fn handle_key(&mut self, key: char) -> bool {
        let Some(tab) = self.state.active_tab else {
            return false;
        };
        let s = &mut self.state;
        match (tab, key) {
            (Tab::Skills, '1'..='8') => {
                let idx = (key as u8 - b'1') as usize;
                logic::toggle_skill(s, SKILL_CATALOG[idx]);
            }
            (Tab::Skills, '-') => {
                logic::step_hours(s, -1);
            }
            (Tab::Skills, '+' | '=') => {
                logic::step_hours(s, 1);
            }
            (Tab::Skills, '\n' | 'a') => logic::analyze_skills(s),
            (Tab::Gaps, '\n' | 'g') if matches!(s.gaps, GapsPanel::Results { .. }) => {
                logic::generate_plan(s)
            }
            (Tab::Gaps, '\n' | 'a') if s.gaps == GapsPanel::Idle => logic::analyze_skills(s),
            (Tab::Plan, '\n' | 'r') if matches!(s.plan, PlanPanel::Plan { .. }) => {
                logic::start_over(s)
            }
            (Tab::Plan, '\n' | 'a') if s.plan == PlanPanel::Empty => logic::analyze_skills(s),
            _ => return false,
        }
        true
    }

    pub fn tick(&mut self, delta_ms: f64) {
        logic::tick(&mut self.state, delta_ms);
    }

    pub fn render(&self, f: &mut Frame, area: Rect, click_state: &Rc<RefCell<ClickState>>) {
        render::render(&self.state, f, area, click_state);
    }
}
