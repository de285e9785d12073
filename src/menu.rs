#[cfg(test)]
#[path = "menu_test.rs"]
mod menu_test;

#[cfg(all(test, target_arch = "wasm32"))]
#[path = "menu_dom_test.rs"]
mod menu_dom_test;

use std::rc::Rc;

use log::info;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Event, HtmlElement, MouseEvent, Node, Window};

use crate::dom::{listen, MenuElements};

const ACTIVE_CLASS: &str = "active";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuState {
    Closed,
    Open,
}

impl MenuState {
    pub fn toggled(self) -> Self {
        match self {
            MenuState::Closed => MenuState::Open,
            MenuState::Open => MenuState::Closed,
        }
    }

    pub fn is_open(self) -> bool {
        self == MenuState::Open
    }

    pub fn aria_expanded(self) -> &'static str {
        if self.is_open() {
            "true"
        } else {
            "false"
        }
    }
}

/// Resizing past the breakpoint means the desktop navigation is showing.
pub fn exceeds_breakpoint(viewport_width: f64, breakpoint: f64) -> bool {
    viewport_width > breakpoint
}

/// The hamburger toggle and the panel it opens. The DOM holds the state:
/// it's read back from the toggle's `active` class.
pub struct MobileMenu {
    toggle: HtmlElement,
    panel: HtmlElement,
}

impl MobileMenu {
    pub fn new(elements: MenuElements) -> Self {
        Self {
            toggle: elements.toggle,
            panel: elements.panel,
        }
    }

    pub fn state(&self) -> MenuState {
        if self.toggle.class_list().contains(ACTIVE_CLASS) {
            MenuState::Open
        } else {
            MenuState::Closed
        }
    }

    fn apply(&self, state: MenuState) {
        let open = state.is_open();
        let _ = self.panel.class_list().toggle_with_force(ACTIVE_CLASS, open);
        let _ = self.toggle.class_list().toggle_with_force(ACTIVE_CLASS, open);
        let _ = self.toggle.set_attribute("aria-expanded", state.aria_expanded());
    }

    pub fn toggle(&self) {
        self.apply(self.state().toggled());
    }

    /// Safe to call when already closed.
    pub fn close(&self) {
        self.apply(MenuState::Closed);
    }

    fn contains(&self, node: Option<&Node>) -> bool {
        self.toggle.contains(node) || self.panel.contains(node)
    }
}

pub fn install(
    menu: Rc<MobileMenu>,
    window: &Window,
    document: &Document,
    breakpoint: f64,
) -> Result<(), JsValue> {
    let on_toggle = Rc::clone(&menu);
    listen(menu.toggle.as_ref(), "click", move |_: MouseEvent| {
        on_toggle.toggle();
    })?;

    let on_outside = Rc::clone(&menu);
    listen(document.as_ref(), "click", move |e: MouseEvent| {
        let target = e.target().and_then(|t| t.dyn_into::<Node>().ok());
        if !on_outside.contains(target.as_ref()) {
            on_outside.close();
        }
    })?;

    let on_resize = Rc::clone(&menu);
    let resized = window.clone();
    listen(window.as_ref(), "resize", move |_: Event| {
        let width = resized
            .inner_width()
            .ok()
            .and_then(|w| w.as_f64())
            .unwrap_or_default();
        if exceeds_breakpoint(width, breakpoint) {
            on_resize.close();
        }
    })?;

    info!("mobile menu ready");
    Ok(())
}
