mod config;
mod demo;
mod input;
mod log;
mod motion;
mod page;
mod time;
mod widgets;

use std::{cell::RefCell, io, rc::Rc};

use demo::SkillGapDemo;
use input::{pixel_x_to_col, pixel_y_to_row, ClickState, InputEvent};
use page::dom::{install_scroll_links, PageDom};
use ratzilla::event::{KeyCode, MouseButton, MouseEventKind};
use ratzilla::ratatui::Terminal;
use ratzilla::{DomBackend, WebRenderer};
use time::FrameClock;

/// Query the grid container's bounding rect and convert pixel coordinates to a cell.
fn dom_pixel_to_cell(mouse_x: u32, mouse_y: u32, cs: &ClickState) -> Option<(u16, u16)> {
    let document = web_sys::window()?.document()?;

    // DomBackend appends its grid <div> to <body> after the page markup.
    let grid = document.query_selector("body > div:last-of-type").ok()??;
    let rect = grid.get_bounding_client_rect();

    let click_x = mouse_x as f64 - rect.left();
    let click_y = mouse_y as f64 - rect.top();

    let col = pixel_x_to_col(click_x, rect.width(), cs.terminal_cols)?;
    let row = pixel_y_to_row(click_y, rect.height(), cs.terminal_rows)?;
    Some((col, row))
}

/// Milliseconds from `performance.now()`, falling back to the wall clock.
fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or_else(js_sys::Date::now)
}

/// Per-frame state owned by the draw callback.
struct FrameDriver {
    clock: FrameClock,
    page: Option<PageDom>,
}

fn main() -> io::Result<()> {
    console_error_panic_hook::set_once();

    let config = config::from_location();
    let motion = config.motion(motion::prefers_reduced_motion());
    log::info(&format!("starting, reduced motion: {}", motion.reduced));

    let mut skill_demo = SkillGapDemo::new(motion);
    if let Some(hours) = config.hours.as_deref() {
        skill_demo.preset_hours(hours);
    }

    let document = web_sys::window().and_then(|w| w.document());
    let page = document.as_ref().map(|d| {
        install_scroll_links(d);
        PageDom::discover(d, motion)
    });

    let demo = Rc::new(RefCell::new(skill_demo));
    let click_state = Rc::new(RefCell::new(ClickState::new()));
    let driver = RefCell::new(FrameDriver {
        clock: FrameClock::new(),
        page,
    });
    let backend = DomBackend::new()?;
    let terminal = Terminal::new(backend)?;

    // Mouse/touch click handler
    terminal.on_mouse_event({
        let demo = demo.clone();
        let click_state = click_state.clone();
        move |mouse_event| {
            if mouse_event.event != MouseEventKind::Pressed
                || mouse_event.button != MouseButton::Left
            {
                return;
            }

            let cs = click_state.borrow();
            if cs.terminal_rows == 0 || cs.terminal_cols == 0 {
                return;
            }

            let Some((col, row)) = dom_pixel_to_cell(mouse_event.x, mouse_event.y, &cs) else {
                return;
            };
            let hit = cs.hit_test(col, row);
            drop(cs);

            if let Some(action_id) = hit {
                demo.borrow_mut().handle_input(&InputEvent::Click(action_id));
            }
        }
    });

    // Keyboard handler
    terminal.on_key_event({
        let demo = demo.clone();
        move |key_event| {
            let event = match key_event.code {
                KeyCode::Char(c) => InputEvent::Key(c),
                KeyCode::Enter => InputEvent::Enter,
                KeyCode::Left => InputEvent::Left,
                KeyCode::Right => InputEvent::Right,
                _ => return,
            };
            demo.borrow_mut().handle_input(&event);
        }
    });

    terminal.draw_web({
        let click_state = click_state.clone();
        move |f| {
            let mut driver = driver.borrow_mut();
            let delta = driver.clock.update(now_ms());
            let elapsed = driver.clock.elapsed_ms;

            let mut d = demo.borrow_mut();
            d.tick(delta);
            if let Some(page) = driver.page.as_mut() {
                page.frame(elapsed);
            }

            let size = f.area();
            {
                let mut cs = click_state.borrow_mut();
                cs.terminal_cols = size.width;
                cs.terminal_rows = size.height;
                cs.clear_targets();
            }

            d.render(f, size, &click_state);
        }
    });

    Ok(())
}
