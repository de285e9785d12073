#[cfg(test)]
#[path = "a11y_test.rs"]
mod a11y_test;

use wasm_bindgen::JsValue;
use web_sys::{Document, HtmlElement, KeyboardEvent, MouseEvent};

use crate::dom::listen;

pub const KEYBOARD_NAVIGATION_CLASS: &str = "keyboard-navigation";

/// Keys that mean the visitor is moving focus from the keyboard.
pub fn starts_keyboard_navigation(key: &str) -> bool {
    key == "Tab"
}

/// Focus outlines only while navigating by keyboard; the first mouse press hides them again.
pub fn install(document: &Document, body: HtmlElement) -> Result<(), JsValue> {
    let on_key = body.clone();
    listen(document.as_ref(), "keydown", move |e: KeyboardEvent| {
        if starts_keyboard_navigation(&e.key()) {
            let _ = on_key.class_list().add_1(KEYBOARD_NAVIGATION_CLASS);
        }
    })?;

    listen(document.as_ref(), "mousedown", move |_: MouseEvent| {
        let _ = body.class_list().remove_1(KEYBOARD_NAVIGATION_CLASS);
    })
}
