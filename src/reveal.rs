#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

#[cfg(all(test, target_arch = "wasm32"))]
#[path = "reveal_dom_test.rs"]
mod reveal_dom_test;

use log::{info, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::{Array, Reflect};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit, Window};

use crate::config::{REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD};

pub const REVEALED_CLASS: &str = "visible";

/// How cards get revealed on this browser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealMode {
    /// Watch each card and reveal it on first sight.
    Observe,
    /// No observer support: reveal everything up front.
    Immediate,
}

impl RevealMode {
    pub fn for_support(has_observer: bool) -> Self {
        if has_observer {
            RevealMode::Observe
        } else {
            RevealMode::Immediate
        }
    }
}

fn supports_intersection_observer(window: &Window) -> bool {
    Reflect::has(window.as_ref(), &JsValue::from_str("IntersectionObserver")).unwrap_or(false)
}

/// Adding the class twice is harmless and nothing ever removes it.
fn reveal(el: &Element) {
    let _ = el.class_list().add_1(REVEALED_CLASS);
}

fn observe(cards: &[Element]) -> Result<(), JsValue> {
    let on_entries = Closure::wrap(Box::new(|entries: Array, observer: IntersectionObserver| {
        for entry in entries.iter() {
            let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                continue;
            };
            if entry.is_intersecting() {
                let target = entry.target();
                reveal(&target);
                observer.unobserve(&target);
            }
        }
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    options.set_root_margin(REVEAL_ROOT_MARGIN);

    let observer =
        IntersectionObserver::new_with_options(on_entries.as_ref().unchecked_ref(), &options)?;
    on_entries.forget();

    for card in cards {
        observer.observe(card);
    }
    Ok(())
}

/// Reveal `cards` now (`Immediate`) or as they scroll into view (`Observe`).
/// Observation that can't be set up degrades to revealing everything.
pub fn reveal_cards(mode: RevealMode, cards: &[Element]) {
    if mode == RevealMode::Observe {
        match observe(cards) {
            Ok(()) => {
                info!("revealing {} cards on scroll", cards.len());
                return;
            }
            Err(err) => warn!("IntersectionObserver unavailable ({:?}), showing cards", err),
        }
    }

    for card in cards {
        reveal(card);
    }
}

pub fn install(window: &Window, cards: Vec<Element>) -> Result<(), JsValue> {
    if !cards.is_empty() {
        let mode = RevealMode::for_support(supports_intersection_observer(window));
        reveal_cards(mode, &cards);
    }
    Ok(())
}
