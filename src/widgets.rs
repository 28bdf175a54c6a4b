//! View components that pair rendering with click-target registration.
//!
//! - [`TabBar`]: the demo's tab strip.
//! - [`ClickableList`]: lines of a panel, some of them clickable controls.
//! - [`meter_bar`]: a fixed-width percentage meter.

use ratzilla::ratatui::layout::Rect;
use ratzilla::ratatui::style::{Color, Style};
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::widgets::{Block, Paragraph};
use ratzilla::ratatui::Frame;

use crate::input::ClickState;

// ── TabBar ─────────────────────────────────────────────────────

/// A single-row tab strip. Click targets follow the rendered label widths.
///
/// ```ignore
/// TabBar::new(" │ ")
///     .tab("Skills", style, TAB_SKILLS)
///     .tab("Gaps", style, TAB_GAPS)
///     .render(f, area, &mut cs);
/// ```
pub struct TabBar<'a> {
    tabs: Vec<(String, Style, u16)>,
    separator: &'a str,
    block: Option<Block<'a>>,
}

impl<'a> TabBar<'a> {
    pub fn new(separator: &'a str) -> Self {
        Self {
            tabs: Vec::new(),
            separator,
            block: None,
        }
    }

    pub fn tab(mut self, label: impl Into<String>, style: Style, action_id: u16) -> Self {
        self.tabs.push((label.into(), style, action_id));
        self
    }

    /// Wrap the bar in a [`Block`]; targets are placed inside its borders.
    pub fn block(mut self, block: Block<'a>) -> Self {
        self.block = Some(block);
        self
    }

    pub fn render(self, f: &mut Frame, area: Rect, cs: &mut ClickState) {
        let (line, tab_widths) = self.line();
        let sep_width = Line::from(self.separator).width() as u16;

        let inner = match &self.block {
            Some(block) => block.inner(area),
            None => area,
        };
        let paragraph = match self.block {
            Some(block) => Paragraph::new(line).block(block),
            None => Paragraph::new(line),
        };
        f.render_widget(paragraph, area);

        // Inner x/width for horizontal accuracy, outer y/height for tap tolerance
        cs.register_tab_targets(
            &tab_widths,
            sep_width,
            inner.x,
            area.y,
            inner.width,
            area.height.max(1),
        );
    }

    /// The rendered line and the `(display_width, action_id)` of each padded label.
    fn line(&self) -> (Line<'static>, Vec<(u16, u16)>) {
        let mut spans: Vec<Span<'static>> = Vec::new();
        let mut tab_widths = Vec::with_capacity(self.tabs.len());

        for (i, (label, style, action_id)) in self.tabs.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(
                    self.separator.to_string(),
                    Style::default().fg(Color::DarkGray),
                ));
            }
            let padded = format!(" {} ", label);
            tab_widths.push((Line::from(padded.as_str()).width() as u16, *action_id));
            spans.push(Span::styled(padded, *style));
        }

        (Line::from(spans), tab_widths)
    }
}

// ── ClickableList ──────────────────────────────────────────────

/// A builder that pairs panel lines with click actions, so targets follow
/// their lines when lines are inserted or removed above them.
///
/// ```ignore
/// let mut cl = ClickableList::new();
/// cl.push(Line::from("Identified Skill Gaps"));
/// cl.push_clickable(Line::from("[G] Generate Learning Plan"), GENERATE_PLAN);
/// cl.register_targets(area, &mut cs, 1, 1, 0, 0);
/// f.render_widget(Paragraph::new(cl.into_lines()).block(block), area);
/// ```
pub struct ClickableList<'a> {
    lines: Vec<Line<'a>>,
    /// `(line_index, action_id)` pairs.
    actions: Vec<(u16, u16)>,
}

impl<'a> ClickableList<'a> {
    pub fn new() -> Self {
        Self {
            lines: Vec::new(),
            actions: Vec::new(),
        }
    }

    pub fn push(&mut self, line: Line<'a>) {
        self.lines.push(line);
    }

    pub fn push_clickable(&mut self, line: Line<'a>, action_id: u16) {
        self.actions.push((self.lines.len() as u16, action_id));
        self.lines.push(line);
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[cfg(test)]
    pub fn lines(&self) -> &[Line<'a>] {
        &self.lines
    }

    /// Action bound to the line at `index`, if any.
    pub fn action_at(&self, index: usize) -> Option<u16> {
        self.actions
            .iter()
            .find(|&&(idx, _)| idx as usize == index)
            .map(|&(_, id)| id)
    }

    pub fn into_lines(self) -> Vec<Line<'a>> {
        self.lines
    }

    /// `(first visual row, row count)` of every logical line when wrapped at
    /// `inner_width`.
    fn visual_spans(&self, inner_width: u16) -> Vec<(u16, u16)> {
        let mut spans = Vec::with_capacity(self.lines.len());
        let mut cumulative: u16 = 0;
        for line in &self.lines {
            let h = match inner_width as usize {
                0 => 1,
                w => line.width().div_ceil(w).max(1) as u16,
            };
            spans.push((cumulative, h));
            cumulative += h;
        }
        spans
    }

    /// First visual row of line `index` when wrapped at `inner_width`, the
    /// same row `register_targets` uses for it.
    pub fn visual_row(&self, index: usize, inner_width: u16) -> Option<u16> {
        self.visual_spans(inner_width).get(index).map(|&(start, _)| start)
    }

    /// Register click targets for all clickable lines.
    ///
    /// * `top_offset` / `bottom_offset`: rows taken by borders.
    /// * `scroll`: vertical scroll offset in visual rows.
    /// * `inner_width`: wrap width; `0` means one visual row per line.
    pub fn register_targets(
        &self,
        area: Rect,
        cs: &mut ClickState,
        top_offset: u16,
        bottom_offset: u16,
        scroll: u16,
        inner_width: u16,
    ) {
        let content_y = area.y + top_offset;
        let content_end = area.y + area.height.saturating_sub(bottom_offset);
        let spans = self.visual_spans(inner_width);

        for &(line_idx, action_id) in &self.actions {
            let Some(&(vstart, vheight)) = spans.get(line_idx as usize) else {
                continue;
            };
            for vr in vstart..vstart + vheight {
                if vr < scroll {
                    continue;
                }
                let screen_row = content_y + (vr - scroll);
                if screen_row >= content_end {
                    break;
                }
                cs.add_row_target(area, screen_row, action_id);
            }
        }
    }
}

// ── meter_bar ──────────────────────────────────────────────────

/// `█`/`░` bar `width` cells wide, filled to `percent` (clamped to 0..=100).
pub fn meter_bar(percent: u8, width: usize) -> String {
    let filled = (percent.min(100) as usize * width + 50) / 100;
    "█".repeat(filled) + &"░".repeat(width - filled)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn tab_bar_line_and_widths() {
        let bar = TabBar::new(" │ ")
            .tab("Skills", Style::default(), 1)
            .tab("Gaps", Style::default(), 2);
        let (line, widths) = bar.line();
        assert_eq!(text(&line), " Skills  │  Gaps ");
        assert_eq!(widths, vec![(8, 1), (6, 2)]);
    }

    #[test]
    fn clickable_list_targets_follow_lines() {
        let mut cl = ClickableList::new();
        cl.push(Line::from("Identified Skill Gaps"));
        cl.push(Line::from(""));
        cl.push_clickable(Line::from("[G] Generate Learning Plan"), 30);

        // Borders::ALL → 1 row each side
        let area = Rect::new(0, 3, 40, 10);
        let mut cs = ClickState::new();
        cl.register_targets(area, &mut cs, 1, 1, 0, 0);

        assert_eq!(cs.targets.len(), 1);
        assert_eq!(cs.hit_test(5, 6), Some(30));
        assert_eq!(cs.hit_test(5, 5), None);
        assert_eq!(cl.action_at(2), Some(30));
        assert_eq!(cl.action_at(0), None);
    }

    #[test]
    fn clickable_list_clipped_by_area() {
        let mut cl = ClickableList::new();
        for i in 0..8 {
            cl.push_clickable(Line::from(format!("chip {}", i)), 10 + i as u16);
        }
        let area = Rect::new(0, 0, 40, 5);
        let mut cs = ClickState::new();
        cl.register_targets(area, &mut cs, 1, 1, 0, 0);

        assert_eq!(cs.targets.len(), 3);
        assert_eq!(cs.hit_test(1, 3), Some(12));
        assert_eq!(cs.hit_test(1, 4), None);
    }

    #[test]
    fn clickable_list_scroll_skips_hidden_rows() {
        let mut cl = ClickableList::new();
        cl.push_clickable(Line::from("a"), 1);
        cl.push_clickable(Line::from("b"), 2);
        cl.push_clickable(Line::from("c"), 3);

        let area = Rect::new(0, 10, 20, 5);
        let mut cs = ClickState::new();
        cl.register_targets(area, &mut cs, 0, 0, 1, 0);

        assert_eq!(cs.hit_test(0, 10), Some(2));
        assert_eq!(cs.hit_test(0, 11), Some(3));
        assert_eq!(cs.targets.len(), 2);
    }

    #[test]
    fn clickable_list_wrapped_line_covers_all_rows() {
        let mut cl = ClickableList::new();
        cl.push(Line::from("12345678901234567890")); // 2 rows at width 10
        cl.push_clickable(Line::from("123456789012345"), 9); // 2 rows

        let area = Rect::new(0, 0, 12, 10);
        let mut cs = ClickState::new();
        cl.register_targets(area, &mut cs, 0, 0, 0, 10);

        assert_eq!(cs.hit_test(0, 1), None);
        assert_eq!(cs.hit_test(0, 2), Some(9));
        assert_eq!(cs.hit_test(0, 3), Some(9));
        assert_eq!(cs.hit_test(0, 4), None);
    }

    #[test]
    fn visual_row_counts_wrapped_lines_above() {
        let mut cl = ClickableList::new();
        cl.push(Line::from("12345678901234567890")); // 2 rows at width 10
        cl.push(Line::from(""));
        cl.push_clickable(Line::from("x"), 7);

        assert_eq!(cl.visual_row(2, 10), Some(3));
        assert_eq!(cl.visual_row(2, 0), Some(2));
        assert_eq!(cl.visual_row(3, 10), None);

        let mut cs = ClickState::new();
        cl.register_targets(Rect::new(0, 0, 10, 10), &mut cs, 0, 0, 0, 10);
        assert_eq!(cs.hit_test(0, 3), Some(7));
    }

    #[test]
    fn empty_line_still_occupies_a_row_when_wrapping() {
        let mut cl = ClickableList::new();
        cl.push(Line::from(""));
        cl.push_clickable(Line::from("x"), 5);

        let mut cs = ClickState::new();
        cl.register_targets(Rect::new(0, 0, 10, 10), &mut cs, 0, 0, 0, 10);
        assert_eq!(cs.hit_test(0, 1), Some(5));
    }

    #[test]
    fn meter_bar_fill() {
        assert_eq!(meter_bar(0, 10), "░".repeat(10));
        assert_eq!(meter_bar(100, 10), "█".repeat(10));
        assert_eq!(meter_bar(30, 10), "███░░░░░░░");
        assert_eq!(meter_bar(200, 4), "████");
        assert_eq!(meter_bar(60, 20).chars().filter(|&c| c == '█').count(), 12);
    }
}
