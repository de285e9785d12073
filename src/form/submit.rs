//! One-shot delivery of the contact payload.
//!
//! A submission is a single POST raced against a deadline. It is never
//! retried. Starting a new submission cancels the one still in flight, so at
//! most one outcome ever reaches the page.

#[cfg(test)]
#[path = "submit_test.rs"]
mod submit_test;

use std::cell::RefCell;
use std::future::Future;

use futures::future::{abortable, select, AbortHandle, Either};
use futures::pin_mut;
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use serde::Serialize;

use crate::error::SubmitError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactPayload {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

/// Resolve to `request`'s result, or `TimedOut` if `deadline` fires first.
pub async fn with_deadline<R, D>(request: R, deadline: D) -> Result<(), SubmitError>
where
    R: Future<Output = Result<(), SubmitError>>,
    D: Future<Output = ()>,
{
    pin_mut!(request);
    pin_mut!(deadline);
    match select(request, deadline).await {
        Either::Left((result, _)) => result,
        Either::Right(((), _)) => Err(SubmitError::TimedOut),
    }
}

async fn post_contact(endpoint: &str, payload: &ContactPayload) -> Result<(), SubmitError> {
    let response = Request::post(endpoint)
        .header("Content-Type", "application/json")
        .json(payload)?
        .send()
        .await?;
    // The body is read so a broken stream still counts as a failure; its content is ignored.
    let body = response.text().await?;
    log::debug!("contact endpoint answered {} ({} bytes)", response.status(), body.len());
    Ok(())
}

/// POST `payload` as JSON to `endpoint`, giving up after `timeout_ms`.
pub async fn send_contact(
    endpoint: String,
    payload: ContactPayload,
    timeout_ms: u32,
) -> Result<(), SubmitError> {
    with_deadline(
        post_contact(&endpoint, &payload),
        TimeoutFuture::new(timeout_ms),
    )
    .await
}

/// Owner of the submission currently in flight.
#[derive(Default)]
pub struct InFlight {
    handle: RefCell<Option<AbortHandle>>,
}

impl InFlight {
    /// Wrap `request` so it can be cancelled, cancelling any earlier one.
    /// A cancelled request resolves to `SubmitError::Cancelled`.
    pub fn begin<R>(&self, request: R) -> impl Future<Output = Result<(), SubmitError>>
    where
        R: Future<Output = Result<(), SubmitError>>,
    {
        let (task, handle) = abortable(request);
        if let Some(previous) = self.handle.replace(Some(handle)) {
            log::info!("superseding contact submission still in flight");
            previous.abort();
        }
        async move {
            match task.await {
                Ok(result) => result,
                Err(_aborted) => Err(SubmitError::Cancelled),
            }
        }
    }

    #[cfg(test)]
    pub fn is_pending(&self) -> bool {
        self.handle.borrow().is_some()
    }

    /// Forget the current submission once it has produced its outcome.
    pub fn settle(&self) {
        self.handle.borrow_mut().take();
    }

    pub fn cancel(&self) -> bool {
        match self.handle.borrow_mut().take() {
            Some(handle) => {
                handle.abort();
                true
            }
            None => false,
        }
    }
}
