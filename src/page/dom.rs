//! Glue between the page animators and the live document.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, ScrollBehavior, ScrollIntoViewOptions};

use super::counter::{parse_target, CounterAnimator};
use super::reveal::RevealAnimator;
use super::{intersection_ratio, Bounds};
use crate::log;
use crate::motion::Motion;

/// Class added to `.reveal` elements once they scroll into view.
const VISIBLE_CLASS: &str = "visible";

fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    let Ok(nodes) = document.query_selector_all(selector) else {
        log::warn(&format!("bad selector {selector:?}"));
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

fn bounds_of(element: &Element) -> Bounds {
    let rect = element.get_bounding_client_rect();
    Bounds::new(rect.top(), rect.height())
}

fn viewport_height() -> Option<f64> {
    web_sys::window()?.inner_height().ok()?.as_f64()
}

/// Reveal and counter elements found at startup, with their animators.
pub struct PageDom {
    reveal_elements: Vec<Element>,
    reveal: RevealAnimator,
    counter_elements: Vec<Element>,
    /// Element whose visibility starts each counter group, by group index.
    group_triggers: Vec<Element>,
    counters: CounterAnimator,
}

impl PageDom {
    /// Collect `.reveal` and `[data-count]` elements. Counters are grouped by
    /// their closest `<section>`; one outside any section is its own group
    /// and triggers on its own visibility.
    pub fn discover(document: &Document, motion: Motion) -> Self {
        let reveal_elements = query_all(document, ".reveal");
        let reveal = RevealAnimator::new(reveal_elements.len());

        let mut groups: Vec<(Element, Vec<(Element, u64)>)> = Vec::new();
        for el in query_all(document, "[data-count]") {
            let raw = el.get_attribute("data-count").unwrap_or_default();
            let Some(target) = parse_target(&raw) else {
                log::warn(&format!("skipping counter with data-count={raw:?}"));
                continue;
            };
            let trigger = el.closest("section").ok().flatten();
            match trigger {
                Some(section) => match groups.iter_mut().find(|(t, _)| *t == section) {
                    Some((_, members)) => members.push((el, target)),
                    None => groups.push((section, vec![(el, target)])),
                },
                None => groups.push((el.clone(), vec![(el, target)])),
            }
        }

        let mut counters = CounterAnimator::new(motion.counter_duration_ms());
        let mut counter_elements = Vec::new();
        let mut group_triggers = Vec::new();
        for (trigger, members) in groups {
            let targets: Vec<u64> = members.iter().map(|(_, t)| *t).collect();
            counters.add_group(&targets);
            counter_elements.extend(members.into_iter().map(|(el, _)| el));
            group_triggers.push(trigger);
        }

        log::info(&format!(
            "page: {} reveal elements, {} counters in {} groups",
            reveal_elements.len(),
            counter_elements.len(),
            group_triggers.len()
        ));

        Self {
            reveal_elements,
            reveal,
            counter_elements,
            group_triggers,
            counters,
        }
    }

    /// Poll element positions and push any reveal or counter changes to the
    /// document.
    pub fn frame(&mut self, now_ms: f64) {
        let Some(vh) = viewport_height() else {
            return;
        };

        let pending: Vec<usize> = self.reveal.pending().collect();
        for i in pending {
            let el = &self.reveal_elements[i];
            if self.reveal.observe(i, bounds_of(el), vh) {
                if let Err(e) = el.class_list().add_1(VISIBLE_CLASS) {
                    log::warn(&format!("reveal {i}: {e:?}"));
                }
            }
        }

        for (group, trigger) in self.group_triggers.iter().enumerate() {
            if !self.counters.is_watching(group) {
                continue;
            }
            let ratio = intersection_ratio(bounds_of(trigger), vh, 0.0);
            if self.counters.observe(group, ratio, now_ms) {
                log::info(&format!("counters: group {group} started"));
            }
        }

        for (i, value) in self.counters.frame(now_ms) {
            self.counter_elements[i].set_text_content(Some(&value.to_string()));
        }
    }
}

/// Smooth-scroll the `#demo` section into view. No-op when it is missing.
pub fn scroll_to_demo() {
    let Some(demo) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id("demo"))
    else {
        return;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    demo.scroll_into_view_with_scroll_into_view_options(&options);
}

/// Make every `[data-scroll-to-demo]` element scroll to the demo on click.
pub fn install_scroll_links(document: &Document) {
    let links = query_all(document, "[data-scroll-to-demo]");
    if links.is_empty() {
        return;
    }
    let on_click = Closure::<dyn FnMut(web_sys::Event)>::new(|event: web_sys::Event| {
        event.prevent_default();
        scroll_to_demo();
    });
    for link in &links {
        if let Err(e) =
            link.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
        {
            log::warn(&format!("scroll link listener: {e:?}"));
        }
    }
    // Listeners live as long as the page.
    on_click.forget();
}
