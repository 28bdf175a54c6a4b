//! Skill gap demo rendering (read-only from state).
//!
//! Panel contents are built as `ClickableList`s by pure functions so the
//! produced lines can be inspected in tests; `render` only lays them out.

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratzilla::ratatui::style::{Color, Modifier, Style};
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratzilla::ratatui::Frame;

use crate::input::{is_narrow_layout, ClickState};
use crate::widgets::{meter_bar, ClickableList, TabBar};

use super::actions::*;
use super::logic::entrance_progress;
use super::state::{
    hours_label, DemoState, GapsPanel, PlanPanel, Priority, SkillGap, Tab, WeekPlan,
    SKILL_CATALOG, SKILL_GAPS, SLIDER_MAX_HOURS, SLIDER_MIN_HOURS, WEEKLY_PLAN,
};

const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
const SPINNER_FRAME_MS: f64 = 80.0;

/// Columns a plan week travels during its slide-in.
const SLIDE_DISTANCE: f64 = 8.0;

pub fn render(state: &DemoState, f: &mut Frame, area: Rect, click_state: &Rc<RefCell<ClickState>>) {
    let is_narrow = is_narrow_layout(area.width);
    let borders = if is_narrow {
        Borders::TOP | Borders::BOTTOM
    } else {
        Borders::ALL
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Tabs
            Constraint::Min(6),    // Panel
            Constraint::Length(3), // Help
        ])
        .split(area);

    render_tabs(state, f, chunks[0], borders, is_narrow, click_state);

    let bar_width = if is_narrow { 12 } else { 24 };
    let panel = match state.active_tab {
        Some(Tab::Skills) => Some((" Your Skills ", Color::Green, skills_lines(state, bar_width))),
        Some(Tab::Gaps) => Some((" Skill Gaps ", Color::Magenta, gaps_lines(state, bar_width))),
        Some(Tab::Plan) => Some((" Learning Plan ", Color::Cyan, plan_lines(state))),
        None => None,
    };
    match panel {
        Some((title, color, cl)) => render_panel(f, chunks[1], borders, title, color, cl, click_state),
        None => f.render_widget(Block::default().borders(borders), chunks[1]),
    }

    render_help(state, f, chunks[2], borders);
}

fn render_tabs(
    state: &DemoState,
    f: &mut Frame,
    area: Rect,
    borders: Borders,
    is_narrow: bool,
    click_state: &Rc<RefCell<ClickState>>,
) {
    let title = if is_narrow {
        " Skill Gap "
    } else {
        " Skill Gap Analyzer "
    };
    let block = Block::default()
        .borders(borders)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(Span::styled(
            title,
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ));

    let bar = Tab::ALL.into_iter().fold(TabBar::new(" │ ").block(block), |bar, tab| {
        bar.tab(tab.title(), tab_style(state.is_active(tab)), TAB_BASE + tab.index() as u16)
    });
    let mut cs = click_state.borrow_mut();
    bar.render(f, area, &mut cs);
}

fn tab_style(active: bool) -> Style {
    if active {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    }
}

fn render_panel(
    f: &mut Frame,
    area: Rect,
    borders: Borders,
    title: &str,
    color: Color,
    cl: ClickableList<'static>,
    click_state: &Rc<RefCell<ClickState>>,
) {
    let block = Block::default()
        .borders(borders)
        .border_style(Style::default().fg(color))
        .title(title.to_string());
    let inner = block.inner(area);
    let top = inner.y - area.y;
    let bottom = (area.y + area.height) - (inner.y + inner.height);

    {
        let mut cs = click_state.borrow_mut();
        cl.register_targets(area, &mut cs, top, bottom, 0, inner.width);
        // The [+] half of the hours controls sits on top of the [-] row target.
        let controls = (0..cl.len()).find(|&i| cl.action_at(i) == Some(HOURS_DOWN));
        if let Some(visual) = controls.and_then(|i| cl.visual_row(i, inner.width)) {
            let row = inner.y + visual;
            if visual < inner.height && inner.width > HOURS_UP_COLUMN {
                cs.add_click_target(
                    Rect::new(inner.x + HOURS_UP_COLUMN, row, inner.width - HOURS_UP_COLUMN, 1),
                    HOURS_UP,
                );
            }
        }
    }

    let widget = Paragraph::new(cl.into_lines())
        .block(block)
        .wrap(Wrap { trim: false });
    f.render_widget(widget, area);
}

fn render_help(state: &DemoState, f: &mut Frame, area: Rect, borders: Borders) {
    let text = match state.active_tab {
        Some(Tab::Skills) => "←/→ tabs · 1-8 toggle skill · -/+ hours · Enter analyze",
        Some(Tab::Gaps) => match state.gaps {
            GapsPanel::Results { .. } => "←/→ tabs · G generate plan",
            GapsPanel::Loading { .. } => "←/→ tabs (cancels analysis)",
            GapsPanel::Idle => "←/→ tabs · A analyze",
        },
        Some(Tab::Plan) => "←/→ tabs · R start over",
        None => "←/→ tabs",
    };
    let help = Paragraph::new(Line::from(Span::styled(
        text,
        Style::default().fg(Color::DarkGray),
    )))
    .block(
        Block::default()
            .borders(borders)
            .border_style(Style::default().fg(Color::DarkGray)),
    )
    .alignment(Alignment::Center);
    f.render_widget(help, area);
}

// ── Skills panel ───────────────────────────────────────────────────────

/// Column (inside the panel border) where the `[+]` control starts.
const HOURS_UP_COLUMN: u16 = 12;

pub fn skills_lines(state: &DemoState, bar_width: usize) -> ClickableList<'static> {
    let mut cl = ClickableList::new();
    let selection = &state.selection;

    cl.push(Line::from(Span::styled(
        format!(" Select your current skills ({} selected):", selection.skills.len()),
        Style::default().fg(Color::Gray),
    )));
    for (i, skill) in SKILL_CATALOG.iter().enumerate() {
        cl.push_clickable(chip_line(i, skill, selection.is_selected(skill)), SKILL_CHIP_BASE + i as u16);
    }

    cl.push(Line::from(""));
    cl.push(Line::from(vec![
        Span::styled(" Weekly time ", Style::default().fg(Color::Gray)),
        Span::styled(
            meter_bar(slider_percent(selection.weekly_hours), bar_width),
            Style::default().fg(Color::Cyan),
        ),
        Span::styled(
            format!(" {}", selection.hours_label()),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
    ]));
    cl.push_clickable(hours_controls_line(), HOURS_DOWN);

    cl.push(Line::from(""));
    cl.push_clickable(button_line("[A] Analyze my skills", Color::Yellow), ANALYZE);
    cl
}

/// Position of `hours` on the slider as a percentage. Hours typed in
/// outside the slider pin the meter to its ends.
fn slider_percent(hours: i64) -> u8 {
    let on_slider = hours.clamp(SLIDER_MIN_HOURS, SLIDER_MAX_HOURS) - SLIDER_MIN_HOURS;
    (on_slider * 100 / (SLIDER_MAX_HOURS - SLIDER_MIN_HOURS)) as u8
}

fn chip_line(index: usize, skill: &str, selected: bool) -> Line<'static> {
    let (marker, style) = if selected {
        ("●", Style::default().fg(Color::Green).add_modifier(Modifier::BOLD))
    } else {
        ("○", Style::default().fg(Color::Gray))
    };
    Line::from(vec![
        Span::styled(
            format!(" [{}] ", index + 1),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("{} {}", marker, skill), style),
    ])
}

/// The `[+]` control starts at `HOURS_UP_COLUMN`.
fn hours_controls_line() -> Line<'static> {
    let key = Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD);
    Line::from(vec![
        Span::styled(" [-]", key),
        Span::styled(" less   ", Style::default().fg(Color::Gray)),
        Span::styled("[+]", key),
        Span::styled(" more", Style::default().fg(Color::Gray)),
    ])
}

fn button_line(label: &str, color: Color) -> Line<'static> {
    Line::from(Span::styled(
        format!(" {} ", label),
        Style::default()
            .fg(Color::Black)
            .bg(color)
            .add_modifier(Modifier::BOLD),
    ))
}

// ── Gaps panel ─────────────────────────────────────────────────────────

pub fn gaps_lines(state: &DemoState, bar_width: usize) -> ClickableList<'static> {
    let mut cl = ClickableList::new();

    match state.gaps {
        GapsPanel::Idle => {
            cl.push(Line::from(Span::styled(
                " No analysis yet. Pick your skills and run it.",
                Style::default().fg(Color::Gray),
            )));
            cl.push(Line::from(""));
            cl.push_clickable(button_line("[A] Analyze my skills", Color::Yellow), ANALYZE);
        }
        GapsPanel::Loading { started_ms, .. } => {
            let frame = ((state.now_ms - started_ms).max(0.0) / SPINNER_FRAME_MS) as usize;
            cl.push(Line::from(""));
            cl.push(Line::from(vec![
                Span::styled(
                    format!(" {} ", SPINNER[frame % SPINNER.len()]),
                    Style::default().fg(Color::Cyan),
                ),
                Span::styled(
                    "Analyzing your skill profile...",
                    Style::default().fg(Color::Gray),
                ),
            ]));
        }
        GapsPanel::Results { shown_ms } => {
            cl.push(Line::from(Span::styled(
                " Identified Skill Gaps",
                Style::default().add_modifier(Modifier::BOLD),
            )));
            cl.push(Line::from(""));
            for (i, gap) in SKILL_GAPS.iter().enumerate() {
                let delay = state.motion.gap_stagger_ms(i);
                if entrance_progress(state.now_ms, shown_ms, delay, 0.0).is_none() {
                    continue;
                }
                for line in gap_item_lines(gap, bar_width) {
                    cl.push(line);
                }
            }
            cl.push_clickable(button_line("[G] Generate Learning Plan", Color::Magenta), GENERATE_PLAN);
        }
    }
    cl
}

pub fn priority_color(priority: Priority) -> Color {
    match priority {
        Priority::Critical => Color::Red,
        Priority::High => Color::Yellow,
        Priority::Medium => Color::Cyan,
    }
}

fn gap_item_lines(gap: &SkillGap, bar_width: usize) -> [Line<'static>; 4] {
    let color = priority_color(gap.priority);
    [
        Line::from(vec![
            Span::styled(
                format!(" {} ", gap.skill),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!(" {} ", gap.priority.label()),
                Style::default().fg(Color::Black).bg(color),
            ),
        ]),
        Line::from(vec![
            Span::raw(" "),
            Span::styled(meter_bar(gap.current, bar_width), Style::default().fg(Color::Magenta)),
        ]),
        Line::from(Span::styled(
            format!(" Current: {}%   Required: {}%", gap.current, gap.required),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
    ]
}

// ── Plan panel ─────────────────────────────────────────────────────────

pub fn plan_lines(state: &DemoState) -> ClickableList<'static> {
    let mut cl = ClickableList::new();

    let PlanPanel::Plan {
        shown_ms,
        weekly_hours,
    } = state.plan
    else {
        cl.push(Line::from(Span::styled(
            " Run the analysis first, then generate your plan.",
            Style::default().fg(Color::Gray),
        )));
        cl.push(Line::from(""));
        cl.push_clickable(button_line("[A] Analyze my skills", Color::Yellow), ANALYZE);
        return cl;
    };

    cl.push(Line::from(vec![
        Span::styled(
            " Your 4-Week Learning Plan  ",
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::styled(hours_label(weekly_hours), Style::default().fg(Color::Cyan)),
    ]));
    cl.push(Line::from(""));

    for (i, week) in WEEKLY_PLAN.iter().enumerate() {
        let delay = state.motion.plan_stagger_ms(i);
        let duration = state.motion.plan_entrance_ms();
        let Some(progress) = entrance_progress(state.now_ms, shown_ms, delay, duration) else {
            continue;
        };
        for line in week_lines(week, progress) {
            cl.push(line);
        }
    }

    cl.push_clickable(button_line("[R] Start Over", Color::Gray), START_OVER);
    cl
}

/// Lines of one week, shifted right and dimmed while sliding in.
fn week_lines(week: &WeekPlan, progress: f64) -> Vec<Line<'static>> {
    let settled = progress >= 1.0;
    let indent = " ".repeat(((1.0 - progress) * SLIDE_DISTANCE).round() as usize);
    let dim = Style::default().fg(Color::DarkGray);
    let pick = |style: Style| if settled { style } else { dim };

    vec![
        Line::from(vec![
            Span::raw(indent.clone()),
            Span::styled(
                format!(" Week {}", week.week),
                pick(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
            ),
            Span::styled(format!("  {} hours", week.hours), dim),
        ]),
        Line::from(vec![
            Span::raw(indent.clone()),
            Span::styled(
                format!(" {}", week.title),
                pick(Style::default().fg(Color::White)),
            ),
        ]),
        Line::from(vec![
            Span::raw(indent.clone()),
            Span::styled(
                format!("   {}", week.topics.join(" · ")),
                pick(Style::default().fg(Color::Gray)),
            ),
        ]),
        Line::from(vec![
            Span::raw(indent),
            Span::styled(" Assessment: ", pick(Style::default().fg(Color::Magenta))),
            Span::styled(week.assessment, pick(Style::default().fg(Color::Gray))),
        ]),
        Line::from(""),
    ]
}
