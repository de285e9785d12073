use wasm_bindgen::closure::Closure;
use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, EventTarget, HtmlElement, HtmlFormElement};

use crate::form::field::FormField;

pub const NAV_LINK_SELECTOR: &str = ".nav-link";
pub const NAV_TOGGLE_SELECTOR: &str = ".nav-toggle";
pub const NAV_MENU_SELECTOR: &str = ".nav-menu";
pub const HEADER_SELECTOR: &str = ".header";
pub const CARD_SELECTOR: &str = ".project-card, .service-card, .blog-card";
pub const CONTACT_FORM_ID: &str = "contact-form";
pub const FORM_MESSAGE_ID: &str = "form-message";
pub const FORM_CONTROL_SELECTOR: &str = "input, textarea";

/// Attach `handler` to `target` for the lifetime of the page.
pub fn listen<E, F>(target: &EventTarget, event: &str, handler: F) -> Result<(), JsValue>
where
    E: FromWasmAbi + 'static,
    F: FnMut(E) + 'static,
{
    let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
    callback.forget();
    Ok(())
}

/// Every element matching `selector`, in document order. Invalid selectors yield nothing.
pub fn query_all<T: JsCast>(root: &Document, selector: &str) -> Vec<T> {
    let Ok(list) = root.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<T>().ok())
        .collect()
}

fn query_one<T: JsCast>(root: &Document, selector: &str) -> Option<T> {
    root.query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<T>().ok())
}

fn by_id<T: JsCast>(root: &Document, id: &str) -> Option<T> {
    root.get_element_by_id(id).and_then(|el| el.dyn_into::<T>().ok())
}

/// The fillable controls of `form`, in document order.
pub fn form_fields(document: &Document, form: &HtmlFormElement) -> Vec<FormField> {
    let Ok(list) = form.query_selector_all(FORM_CONTROL_SELECTOR) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .filter_map(|el| FormField::resolve(document, el))
        .collect()
}

pub struct MenuElements {
    pub toggle: HtmlElement,
    pub panel: HtmlElement,
}

pub struct ContactElements {
    pub form: HtmlFormElement,
    pub status: Option<HtmlElement>,
    /// Every text-like `input` and `textarea` in the form, each with its error slot.
    pub fields: Vec<FormField>,
}

/// Elements the behaviors work on, looked up once when the page boots.
pub struct PageElements {
    pub document: Document,
    pub body: Option<HtmlElement>,
    pub header: Option<HtmlElement>,
    pub nav_links: Vec<HtmlElement>,
    pub menu: Option<MenuElements>,
    pub contact: Option<ContactElements>,
    pub cards: Vec<Element>,
}

impl PageElements {
    pub fn resolve(document: Document) -> Self {
        let menu = match (
            query_one::<HtmlElement>(&document, NAV_TOGGLE_SELECTOR),
            query_one::<HtmlElement>(&document, NAV_MENU_SELECTOR),
        ) {
            (Some(toggle), Some(panel)) => Some(MenuElements { toggle, panel }),
            _ => None,
        };

        let contact = by_id::<HtmlFormElement>(&document, CONTACT_FORM_ID).map(|form| {
            ContactElements {
                fields: form_fields(&document, &form),
                status: by_id(&document, FORM_MESSAGE_ID),
                form,
            }
        });

        Self {
            body: document.body(),
            header: query_one(&document, HEADER_SELECTOR),
            nav_links: query_all(&document, NAV_LINK_SELECTOR),
            cards: query_all(&document, CARD_SELECTOR),
            menu,
            contact,
            document,
        }
    }
}
