#[cfg(test)]
#[path = "field_test.rs"]
mod field_test;

#[cfg(all(test, target_arch = "wasm32"))]
#[path = "field_dom_test.rs"]
mod field_dom_test;

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlInputElement, HtmlTextAreaElement};

use super::validate::{validate_value, FieldRules};
use crate::error::ValidationError;

const ERROR_BORDER_COLOR: &str = "var(--accent)";

/// Input types a visitor types into. Hidden, checkbox, radio, file and
/// button inputs are left to `form.reset()`.
pub fn is_text_type(input_type: &str) -> bool {
    matches!(
        input_type,
        "text" | "email" | "tel" | "url" | "search" | "password" | "number"
    )
}

pub fn find_field<'a>(fields: &'a [FormField], id: &str) -> Option<&'a FormField> {
    fields.iter().find(|f| f.id() == id)
}

#[derive(Clone)]
enum Control {
    Input(HtmlInputElement),
    TextArea(HtmlTextAreaElement),
}

/// A form control paired with its `<id>-error` slot.
#[derive(Clone)]
pub struct FormField {
    control: Control,
    error_slot: Option<HtmlElement>,
}

impl FormField {
    /// `None` for anything that isn't a text-like `<input>` or a `<textarea>`.
    pub fn resolve(document: &Document, el: Element) -> Option<Self> {
        let control = match el.dyn_into::<HtmlInputElement>() {
            Ok(input) if !is_text_type(&input.type_()) => return None,
            Ok(input) => Control::Input(input),
            Err(el) => Control::TextArea(el.dyn_into::<HtmlTextAreaElement>().ok()?),
        };
        let mut field = Self {
            control,
            error_slot: None,
        };
        field.error_slot = document
            .get_element_by_id(&format!("{}-error", field.id()))
            .and_then(|el| el.dyn_into::<HtmlElement>().ok());
        Some(field)
    }

    fn element(&self) -> &HtmlElement {
        match &self.control {
            Control::Input(input) => input.unchecked_ref(),
            Control::TextArea(area) => area.unchecked_ref(),
        }
    }

    pub fn id(&self) -> String {
        self.element().id()
    }

    pub fn value(&self) -> String {
        match &self.control {
            Control::Input(input) => input.value(),
            Control::TextArea(area) => area.value(),
        }
    }

    pub fn clear_value(&self) {
        match &self.control {
            Control::Input(input) => input.set_value(""),
            Control::TextArea(area) => area.set_value(""),
        }
    }

    pub fn rules(&self) -> FieldRules {
        let input_type = match &self.control {
            Control::Input(input) => input.type_(),
            Control::TextArea(_) => "textarea".to_string(),
        };
        FieldRules {
            id: self.id(),
            input_type,
            required: self.element().has_attribute("required"),
        }
    }

    /// Re-check the field, replacing whatever error it was showing.
    pub fn validate(&self) -> bool {
        self.clear_error();
        match validate_value(&self.rules(), &self.value()) {
            Ok(()) => true,
            Err(err) => {
                self.show_error(err);
                false
            }
        }
    }

    pub fn show_error(&self, err: ValidationError) {
        let _ = self
            .element()
            .style()
            .set_property("border-color", ERROR_BORDER_COLOR);
        if let Some(slot) = &self.error_slot {
            slot.set_text_content(Some(&err.to_string()));
            let _ = slot.style().set_property("display", "block");
        }
    }

    pub fn clear_error(&self) {
        let _ = self.element().style().remove_property("border-color");
        if let Some(slot) = &self.error_slot {
            slot.set_text_content(Some(""));
            let _ = slot.style().set_property("display", "none");
        }
    }

    pub fn as_target(&self) -> &web_sys::EventTarget {
        self.element().as_ref()
    }
}
