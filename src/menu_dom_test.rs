use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

use super::*;

fn element(tag: &str) -> HtmlElement {
    let document = web_sys::window().unwrap().document().unwrap();
    let el: HtmlElement = document.create_element(tag).unwrap().dyn_into().unwrap();
    document.body().unwrap().append_child(&el).unwrap();
    el
}

fn menu() -> MobileMenu {
    MobileMenu::new(MenuElements {
        toggle: element("button"),
        panel: element("nav"),
    })
}

fn is_active(el: &HtmlElement) -> bool {
    el.class_list().contains(ACTIVE_CLASS)
}

#[wasm_bindgen_test]
fn toggling_twice_restores_classes_and_aria() {
    let menu = menu();
    assert_eq!(menu.state(), MenuState::Closed);

    menu.toggle();
    assert!(is_active(&menu.toggle));
    assert!(is_active(&menu.panel));
    assert_eq!(menu.toggle.get_attribute("aria-expanded").as_deref(), Some("true"));

    menu.toggle();
    assert!(!is_active(&menu.toggle));
    assert!(!is_active(&menu.panel));
    assert_eq!(menu.toggle.get_attribute("aria-expanded").as_deref(), Some("false"));
}

#[wasm_bindgen_test]
fn closing_repeatedly_is_harmless() {
    let menu = menu();
    menu.close();
    menu.close();
    assert_eq!(menu.state(), MenuState::Closed);

    menu.toggle();
    menu.close();
    menu.close();
    assert_eq!(menu.state(), MenuState::Closed);
    assert!(!is_active(&menu.panel));
    assert_eq!(menu.toggle.get_attribute("aria-expanded").as_deref(), Some("false"));
}

#[wasm_bindgen_test]
fn outside_clicks_are_heard_on_the_given_document() {
    let window = web_sys::window().unwrap();
    let other = Document::new().unwrap();
    let menu = Rc::new(menu());
    install(Rc::clone(&menu), &window, &other, 768.0).unwrap();

    menu.toggle();
    assert_eq!(menu.state(), MenuState::Open);

    other
        .dispatch_event(&MouseEvent::new("click").unwrap())
        .unwrap();
    assert_eq!(menu.state(), MenuState::Closed);
}
