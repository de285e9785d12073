//! Contact form: inline validation on blur, one-shot JSON submission and a
//! transient status banner.

pub mod banner;
pub mod field;
pub mod outcome;
pub mod submit;
pub mod validate;

use std::rc::Rc;

use log::{debug, info, warn};
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Event, HtmlFormElement, Window};

use crate::config::Config;
use crate::dom::{listen, ContactElements};
use crate::error::SubmitError;
use banner::Banner;
use field::{find_field, FormField};
use outcome::settlement_for;
use submit::{send_contact, ContactPayload, InFlight};

#[cfg(all(test, target_arch = "wasm32"))]
#[path = "form_dom_test.rs"]
mod form_dom_test;

const PAYLOAD_FIELDS: [&str; 4] = ["name", "email", "phone", "message"];

pub struct ContactForm {
    form: HtmlFormElement,
    fields: Vec<FormField>,
    banner: Option<Banner>,
    config: Config,
    in_flight: InFlight,
}

impl ContactForm {
    fn new(contact: ContactElements, config: Config) -> Self {
        let banner = contact
            .status
            .map(|region| Banner::new(region, config.banner_visible_ms));
        Self {
            form: contact.form,
            fields: contact.fields,
            banner,
            config,
            in_flight: InFlight::default(),
        }
    }

    /// Validate every field (all of them, so each shows its own error).
    pub fn validate_all(&self) -> bool {
        self.fields
            .iter()
            .fold(true, |all_valid, field| field.validate() && all_valid)
    }

    pub fn clear_all_errors(&self) {
        for field in &self.fields {
            field.clear_error();
        }
    }

    /// Raw, untrimmed values. `None` when a payload field is missing from the page.
    fn payload(&self) -> Option<ContactPayload> {
        let value = |id: &str| find_field(&self.fields, id).map(FormField::value);
        Some(ContactPayload {
            name: value("name")?,
            email: value("email")?,
            phone: value("phone")?,
            message: value("message")?,
        })
    }

    fn submit(self: &Rc<Self>) {
        if self.config.validate_before_submit && !self.validate_all() {
            info!("contact form has invalid fields, not submitting");
            return;
        }
        let Some(payload) = self.payload() else {
            return;
        };

        let request = send_contact(
            self.config.endpoint.clone(),
            payload,
            self.config.submit_timeout_ms,
        );
        let task = self.in_flight.begin(request);
        let this = Rc::clone(self);
        spawn_local(async move {
            let outcome = task.await;
            this.finish(outcome);
        });
    }

    fn finish(&self, outcome: Result<(), SubmitError>) {
        let Some(settlement) = settlement_for(&outcome) else {
            debug!("contact submission cancelled");
            return;
        };
        self.in_flight.settle();

        match &outcome {
            Ok(()) => info!("contact form sent"),
            Err(err) => warn!("contact submission failed: {}", err),
        }
        if settlement.clear_fields {
            self.form.reset();
            for field in &self.fields {
                field.clear_value();
            }
            self.clear_all_errors();
        }
        if let (Some(banner), Some((kind, text))) = (&self.banner, settlement.banner) {
            banner.show(kind, text);
        }
    }
}

pub fn install(contact: ContactElements, config: Config, window: &Window) -> Result<(), JsValue> {
    let submittable = PAYLOAD_FIELDS
        .iter()
        .all(|id| find_field(&contact.fields, id).is_some());
    let form = Rc::new(ContactForm::new(contact, config));

    for field in &form.fields {
        let on_blur = field.clone();
        listen(field.as_target(), "blur", move |_: Event| {
            on_blur.validate();
        })?;
        let on_input = field.clone();
        listen(field.as_target(), "input", move |_: Event| {
            on_input.clear_error();
        })?;
    }

    if !submittable {
        debug!("contact form is missing one of {:?}, submit handler not attached", PAYLOAD_FIELDS);
        return Ok(());
    }

    let on_submit = Rc::clone(&form);
    listen(form.form.as_ref(), "submit", move |e: Event| {
        e.prevent_default();
        on_submit.submit();
    })?;

    let on_leave = Rc::clone(&form);
    listen(window.as_ref(), "pagehide", move |_: Event| {
        on_leave.in_flight.cancel();
    })?;

    info!(
        "contact form ready ({} fields, gated: {})",
        form.fields.len(),
        form.config.validate_before_submit
    );
    Ok(())
}
