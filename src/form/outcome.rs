#[cfg(test)]
#[path = "outcome_test.rs"]
mod outcome_test;

use super::banner::{banner_for, BannerKind};
use crate::error::SubmitError;

/// What the page does once a submission has finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settlement {
    /// Empty the fields and drop their inline errors.
    pub clear_fields: bool,
    pub banner: Option<(BannerKind, &'static str)>,
}

/// `None` for a cancelled submission: a newer one owns the form now.
pub fn settlement_for(outcome: &Result<(), SubmitError>) -> Option<Settlement> {
    if matches!(outcome, Err(SubmitError::Cancelled)) {
        return None;
    }
    Some(Settlement {
        clear_fields: outcome.is_ok(),
        banner: banner_for(outcome),
    })
}
