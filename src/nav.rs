#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

#[cfg(all(test, target_arch = "wasm32"))]
#[path = "nav_dom_test.rs"]
mod nav_dom_test;

use std::rc::Rc;

use log::{debug, info};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlElement, MouseEvent, ScrollBehavior, ScrollToOptions, Window};

use crate::dom::listen;
use crate::menu::MobileMenu;

/// What a click on a nav link should do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkAction {
    /// `"#about"`: smooth-scroll to the element with id `about`.
    ScrollTo(String),
    /// A bare `"#"`: stop the jump to the top, do nothing else.
    Swallow,
    /// Anything else navigates normally.
    Follow,
}

pub fn link_action(href: &str) -> LinkAction {
    match href.strip_prefix('#') {
        Some("") => LinkAction::Swallow,
        Some(id) => LinkAction::ScrollTo(id.to_string()),
        None => LinkAction::Follow,
    }
}

/// Where to scroll so the target's top lands just below the fixed header.
pub fn scroll_destination(target_top: i32, header_height: i32) -> f64 {
    f64::from(target_top - header_height)
}

struct Navigator {
    window: Window,
    document: Document,
    header: Option<HtmlElement>,
    menu: Option<Rc<MobileMenu>>,
}

impl Navigator {
    fn scroll_to_anchor(&self, id: &str) {
        let Some(target) = self
            .document
            .get_element_by_id(id)
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        else {
            debug!("no section #{} on this page", id);
            return;
        };

        let header_height = self.header.as_ref().map_or(0, HtmlElement::offset_height);
        let options = ScrollToOptions::new();
        options.set_top(scroll_destination(target.offset_top(), header_height));
        options.set_behavior(ScrollBehavior::Smooth);
        self.window.scroll_to_with_scroll_to_options(&options);

        if let Some(menu) = &self.menu {
            menu.close();
        }
    }
}

pub fn install(
    window: &Window,
    document: Document,
    links: Vec<HtmlElement>,
    header: Option<HtmlElement>,
    menu: Option<Rc<MobileMenu>>,
) -> Result<(), JsValue> {
    let navigator = Rc::new(Navigator {
        window: window.clone(),
        document,
        header,
        menu,
    });

    let mut wired = 0;
    for link in links {
        let Some(href) = link.get_attribute("href") else {
            continue;
        };
        let action = link_action(&href);
        if action == LinkAction::Follow {
            continue;
        }
        let navigator = Rc::clone(&navigator);
        listen(link.as_ref(), "click", move |e: MouseEvent| {
            e.prevent_default();
            if let LinkAction::ScrollTo(id) = &action {
                navigator.scroll_to_anchor(id);
            }
        })?;
        wired += 1;
    }

    info!("smooth scrolling on {} nav links", wired);
    Ok(())
}
