#[cfg(test)]
#[path = "throttle_test.rs"]
mod throttle_test;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_timers::callback::Timeout;

/// Armed/idle flag behind [`Throttle`].
#[derive(Debug, Default, Clone)]
pub struct ThrottleGate {
    armed: Rc<Cell<bool>>,
}

impl ThrottleGate {
    /// `true` if the gate was idle and is now armed.
    pub fn try_arm(&self) -> bool {
        !self.armed.replace(true)
    }

    pub fn release(&self) {
        self.armed.set(false);
    }

    #[cfg(test)]
    pub fn is_armed(&self) -> bool {
        self.armed.get()
    }
}

/// Coalesces bursts of calls into at most one deferred action per window.
/// Calls made while a timer is pending are dropped.
pub struct Throttle {
    delay_ms: u32,
    gate: ThrottleGate,
    timer: RefCell<Option<Timeout>>,
}

impl Throttle {
    pub fn new(delay_ms: u32) -> Self {
        Self {
            delay_ms,
            gate: ThrottleGate::default(),
            timer: RefCell::new(None),
        }
    }

    /// Run `action` after the delay unless a run is already pending.
    pub fn schedule<F>(&self, action: F) -> bool
    where
        F: FnOnce() + 'static,
    {
        if !self.gate.try_arm() {
            return false;
        }
        let gate = self.gate.clone();
        // The fired Timeout stays in `timer` until the next schedule replaces it.
        let timeout = Timeout::new(self.delay_ms, move || {
            gate.release();
            action();
        });
        self.timer.replace(Some(timeout));
        true
    }
}
