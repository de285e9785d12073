use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::js_sys::Reflect;
use web_sys::{HtmlElement, HtmlInputElement};

use super::banner::{FAILURE_TEXT, SUCCESS_TEXT};
use super::*;
use crate::dom::form_fields;

const FILLED: [(&str, &str); 4] = [
    ("name", " Sara "),
    ("email", "sara@example.ma"),
    ("phone", "0612345678"),
    ("message", "Bonjour, un devis svp"),
];

fn contact_form() -> (ContactForm, HtmlElement) {
    let document = web_sys::window().unwrap().document().unwrap();
    let form: HtmlFormElement = document.create_element("form").unwrap().dyn_into().unwrap();
    for (tag, input_type, id) in [
        ("input", "text", "name"),
        ("input", "email", "email"),
        ("input", "tel", "phone"),
        ("textarea", "", "message"),
        ("input", "hidden", "source"),
    ] {
        let el = document.create_element(tag).unwrap();
        el.set_id(id);
        if !input_type.is_empty() {
            el.set_attribute("type", input_type).unwrap();
        }
        form.append_child(&el).unwrap();
    }
    form.query_selector("#source")
        .unwrap()
        .unwrap()
        .set_attribute("value", "site")
        .unwrap();

    let status: HtmlElement = document.create_element("div").unwrap().dyn_into().unwrap();
    let contact = ContactElements {
        fields: form_fields(&document, &form),
        status: Some(status.clone()),
        form,
    };
    let contact_form = ContactForm::new(contact, Config::default());
    for (id, value) in FILLED {
        let el = contact_form.form.query_selector(&format!("#{id}")).unwrap().unwrap();
        Reflect::set(&el, &"value".into(), &value.into()).unwrap();
    }
    (contact_form, status)
}

fn value(form: &ContactForm, id: &str) -> String {
    find_field(&form.fields, id).unwrap().value()
}

fn hidden_value(form: &ContactForm) -> String {
    form.form
        .query_selector("#source")
        .unwrap()
        .unwrap()
        .dyn_into::<HtmlInputElement>()
        .unwrap()
        .value()
}

#[wasm_bindgen_test]
fn hidden_input_is_not_a_field() {
    let (form, _) = contact_form();
    assert_eq!(form.fields.len(), 4);
    assert!(find_field(&form.fields, "source").is_none());
}

#[wasm_bindgen_test]
fn payload_carries_the_raw_values() {
    let (form, _) = contact_form();
    let payload = form.payload().unwrap();
    assert_eq!(payload.name, " Sara ");
    assert_eq!(payload.phone, "0612345678");
}

#[wasm_bindgen_test]
fn failed_send_keeps_values_and_shows_error() {
    let (form, status) = contact_form();
    form.finish(Err(SubmitError::Network("TypeError: Failed to fetch".into())));

    for (id, expected) in FILLED {
        assert_eq!(value(&form, id), expected);
    }
    assert_eq!(status.text_content().as_deref(), Some(FAILURE_TEXT));
    assert_eq!(status.class_name(), "form-message error");
}

#[wasm_bindgen_test]
fn successful_send_empties_fields_but_not_hidden_inputs() {
    let (form, status) = contact_form();
    form.finish(Ok(()));

    for (id, _) in FILLED {
        assert_eq!(value(&form, id), "");
    }
    assert_eq!(hidden_value(&form), "site");
    assert_eq!(status.text_content().as_deref(), Some(SUCCESS_TEXT));
    assert_eq!(status.class_name(), "form-message success");
}

#[wasm_bindgen_test]
fn cancelled_send_changes_nothing() {
    let (form, status) = contact_form();
    form.finish(Err(SubmitError::Cancelled));

    for (id, expected) in FILLED {
        assert_eq!(value(&form, id), expected);
    }
    assert_eq!(status.text_content().as_deref().unwrap_or(""), "");
}
