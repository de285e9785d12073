#[cfg(test)]
#[path = "banner_test.rs"]
mod banner_test;

#[cfg(all(test, target_arch = "wasm32"))]
#[path = "banner_dom_test.rs"]
mod banner_dom_test;

use std::cell::RefCell;

use gloo_timers::callback::Timeout;
use web_sys::HtmlElement;

use crate::error::SubmitError;

pub const SUCCESS_TEXT: &str = "Your message was sent successfully!";
pub const FAILURE_TEXT: &str = "Something went wrong while sending, please try again later.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    Success,
    Error,
}

impl BannerKind {
    pub fn class_name(self) -> &'static str {
        match self {
            BannerKind::Success => "form-message success",
            BannerKind::Error => "form-message error",
        }
    }
}

/// What the status region should say about a finished submission.
/// Cancelled submissions were superseded and say nothing.
pub fn banner_for(outcome: &Result<(), SubmitError>) -> Option<(BannerKind, &'static str)> {
    match outcome {
        Ok(()) => Some((BannerKind::Success, SUCCESS_TEXT)),
        Err(SubmitError::Cancelled) => None,
        Err(_) => Some((BannerKind::Error, FAILURE_TEXT)),
    }
}

/// The `#form-message` status region and its single hide timer.
pub struct Banner {
    region: HtmlElement,
    visible_ms: u32,
    hide: RefCell<Option<Timeout>>,
}

impl Banner {
    pub fn new(region: HtmlElement, visible_ms: u32) -> Self {
        Self {
            region,
            visible_ms,
            hide: RefCell::new(None),
        }
    }

    /// Show `text` and schedule the region to hide. A banner that is still
    /// up has its hide timer replaced, so the new one gets the full delay.
    pub fn show(&self, kind: BannerKind, text: &str) {
        self.region.set_text_content(Some(text));
        self.region.set_class_name(kind.class_name());
        let _ = self.region.style().set_property("display", "block");

        let region = self.region.clone();
        let timeout = Timeout::new(self.visible_ms, move || {
            let _ = region.style().set_property("display", "none");
        });
        // Dropping the previous Timeout clears it.
        self.hide.replace(Some(timeout));
    }
}
