use std::rc::Rc;

use log::{debug, error, info, Level};
use wasm_bindgen::JsValue;
use web_sys::{window, Event, Window};

mod a11y;
mod config;
mod dom;
mod error;
mod form;
mod header;
mod menu;
mod nav;
mod reveal;
mod throttle;

#[cfg(all(test, target_arch = "wasm32"))]
wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

use config::Config;
use dom::{listen, PageElements};
use menu::MobileMenu;

/// Each behavior starts on its own; one failing leaves the others working.
fn report(feature: &str, result: Result<(), JsValue>) {
    if let Err(err) = result {
        error!("{} failed to start: {:?}", feature, err);
    }
}

fn boot(window: Window) {
    let Some(document) = window.document() else {
        error!("no document, nothing to wire");
        return;
    };

    let PageElements {
        document,
        body,
        header,
        nav_links,
        menu,
        contact,
        cards,
    } = PageElements::resolve(document);

    let config = match &contact {
        Some(contact) => Config::default().with_overrides(|name| contact.form.get_attribute(name)),
        None => Config::default(),
    };

    let menu = menu.map(|elements| Rc::new(MobileMenu::new(elements)));
    match &menu {
        Some(menu) => report(
            "mobile menu",
            menu::install(Rc::clone(menu), &window, &document, config.menu_breakpoint_px),
        ),
        None => debug!("no .nav-toggle/.nav-menu pair, mobile menu disabled"),
    }

    report(
        "smooth scrolling",
        nav::install(&window, document.clone(), nav_links, header.clone(), menu),
    );

    match contact {
        Some(contact) => report("contact form", form::install(contact, config.clone(), &window)),
        None => debug!("no #contact-form on this page"),
    }

    report("scroll reveal", reveal::install(&window, cards));

    match header {
        Some(header) => report(
            "header scroll marker",
            header::install(
                &window,
                header,
                config.scroll_throttle_ms,
                config.header_scrolled_offset_px,
            ),
        ),
        None => debug!("no .header, scroll marker disabled"),
    }

    if let Some(body) = body {
        report("keyboard navigation", a11y::install(&document, body));
    }

    info!("page behaviors ready");
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting page behaviors");
    let Some(window) = window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };

    if document.ready_state() == "loading" {
        let mut pending = Some(window);
        report(
            "page load hook",
            listen(document.as_ref(), "DOMContentLoaded", move |_: Event| {
                if let Some(window) = pending.take() {
                    boot(window);
                }
            }),
        );
    } else {
        boot(window);
    }
}
