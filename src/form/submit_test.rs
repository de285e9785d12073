use super::*;

use std::cell::Cell;
use std::rc::Rc;

use futures::executor::block_on;
use futures::future::{pending, ready};

fn payload() -> ContactPayload {
    ContactPayload {
        name: "  Sara ".to_string(),
        email: "sara@example.ma".to_string(),
        phone: "0612345678".to_string(),
        message: "Bonjour, j'aimerais un devis. ".to_string(),
    }
}

#[test]
fn payload_serializes_the_four_raw_values() {
    let json: serde_json::Value = serde_json::to_value(payload()).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "name": "  Sara ",
            "email": "sara@example.ma",
            "phone": "0612345678",
            "message": "Bonjour, j'aimerais un devis. ",
        })
    );
}

#[test]
fn request_finishing_first_wins_over_deadline() {
    let result = block_on(with_deadline(ready(Ok::<(), SubmitError>(())), pending::<()>()));
    assert_eq!(result, Ok(()));

    let failed = block_on(with_deadline(
        ready(Err(SubmitError::Network("offline".into()))),
        pending::<()>(),
    ));
    assert_eq!(failed, Err(SubmitError::Network("offline".into())));
}

#[test]
fn deadline_firing_first_times_out() {
    let result = block_on(with_deadline(pending::<Result<(), SubmitError>>(), ready(())));
    assert_eq!(result, Err(SubmitError::TimedOut));
}

#[test]
fn in_flight_runs_the_request_exactly_once() {
    let calls = Rc::new(Cell::new(0));
    let in_flight = InFlight::default();

    let counted = {
        let calls = calls.clone();
        async move {
            calls.set(calls.get() + 1);
            Ok::<(), SubmitError>(())
        }
    };
    let task = in_flight.begin(counted);
    assert!(in_flight.is_pending());
    assert_eq!(calls.get(), 0);

    assert_eq!(block_on(task), Ok(()));
    assert_eq!(calls.get(), 1);

    in_flight.settle();
    assert!(!in_flight.is_pending());
}

#[test]
fn newer_submission_cancels_the_older_one() {
    let in_flight = InFlight::default();
    let first = in_flight.begin(pending::<Result<(), SubmitError>>());
    let second = in_flight.begin(ready(Ok::<(), SubmitError>(())));

    assert_eq!(block_on(first), Err(SubmitError::Cancelled));
    assert_eq!(block_on(second), Ok(()));
}

#[test]
fn cancel_aborts_and_reports_whether_anything_was_pending() {
    let in_flight = InFlight::default();
    assert!(!in_flight.cancel());

    let task = in_flight.begin(pending::<Result<(), SubmitError>>());
    assert!(in_flight.cancel());
    assert!(!in_flight.is_pending());
    assert_eq!(block_on(task), Err(SubmitError::Cancelled));
}
