#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const CONTACT_ENDPOINT: &str = "https://script.google.com/macros/s/AKfycbxvwntSof9zub8rRcZMwEHgCFiEqw3b_dZMBm3tSn3ezyHqJ9SCCScBzgifGaSFUW0LkQ/exec";

pub const BANNER_VISIBLE_MS: u32 = 5_000;
pub const MENU_BREAKPOINT_PX: f64 = 768.0;
pub const SCROLL_THROTTLE_MS: u32 = 100;
pub const HEADER_SCROLLED_OFFSET_PX: f64 = 50.0;
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

#[cfg(debug_assertions)]
pub fn get_submit_timeout_ms() -> u32 {
    30_000  // Apps Script cold starts are slow against a local trunk serve
}

#[cfg(not(debug_assertions))]
pub fn get_submit_timeout_ms() -> u32 {
    15_000
}

/// Runtime settings shared by every behavior on the page.
///
/// Built from the constants above, then optionally adjusted by `data-*`
/// attributes on the contact form so one wasm build can serve several pages.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub endpoint: String,
    pub submit_timeout_ms: u32,
    /// Run every field validator before submitting and drop the submit if any fails.
    pub validate_before_submit: bool,
    pub banner_visible_ms: u32,
    pub menu_breakpoint_px: f64,
    pub scroll_throttle_ms: u32,
    pub header_scrolled_offset_px: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: CONTACT_ENDPOINT.to_string(),
            submit_timeout_ms: get_submit_timeout_ms(),
            validate_before_submit: false,
            banner_visible_ms: BANNER_VISIBLE_MS,
            menu_breakpoint_px: MENU_BREAKPOINT_PX,
            scroll_throttle_ms: SCROLL_THROTTLE_MS,
            header_scrolled_offset_px: HEADER_SCROLLED_OFFSET_PX,
        }
    }
}

impl Config {
    /// Apply overrides looked up by attribute name (`data-endpoint`,
    /// `data-validate-before-submit`, `data-submit-timeout-ms`).
    /// Values that don't parse leave the current setting untouched.
    pub fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(endpoint) = lookup("data-endpoint") {
            let endpoint = endpoint.trim();
            if !endpoint.is_empty() {
                self.endpoint = endpoint.to_string();
            }
        }

        if let Some(flag) = lookup("data-validate-before-submit") {
            match flag.trim() {
                "" | "true" => self.validate_before_submit = true,
                "false" => self.validate_before_submit = false,
                other => log::warn!("ignoring data-validate-before-submit={:?}", other),
            }
        }

        if let Some(ms) = lookup("data-submit-timeout-ms") {
            match ms.trim().parse::<u32>() {
                Ok(ms) if ms > 0 => self.submit_timeout_ms = ms,
                _ => log::warn!("ignoring data-submit-timeout-ms={:?}", ms),
            }
        }

        self
    }
}
