use wasm_bindgen::JsValue;
use web_sys::{Event, HtmlElement, Window};

use crate::dom::listen;
use crate::throttle::Throttle;

const SCROLLED_CLASS: &str = "scrolled";

/// Marks the fixed header `scrolled` once the page leaves the top, checking
/// at most once per throttle window however fast scroll events arrive.
pub fn install(
    window: &Window,
    header: HtmlElement,
    throttle_ms: u32,
    scrolled_offset: f64,
) -> Result<(), JsValue> {
    let throttle = Throttle::new(throttle_ms);
    let scrolled = window.clone();

    listen(window.as_ref(), "scroll", move |_: Event| {
        let window = scrolled.clone();
        let header = header.clone();
        throttle.schedule(move || {
            let scroll_y = window.scroll_y().unwrap_or_default();
            let _ = header
                .class_list()
                .toggle_with_force(SCROLLED_CLASS, scroll_y > scrolled_offset);
        });
    })
}
