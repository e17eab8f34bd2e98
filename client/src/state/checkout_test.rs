use futures::executor::block_on;

use super::*;
use crate::net::test_support::{self, url};
use crate::net::transport::RequestBody;

const ORDER: &str = r#"{"id":21,"userId":3,"items":[],"totalPrice":99.0,"address":"1 Main","status":"PENDING","orderedAt":"2024-05-01T10:00:00"}"#;

#[test]
fn blank_address_sends_nothing() {
    let (stub, api) = test_support::client();
    let err = block_on(checkout(&api, "   ", DEFAULT_CURRENCY)).unwrap_err();
    assert_eq!(err, CheckoutError::MissingAddress);
    assert_eq!(stub.count(), 0);
}

#[test]
fn places_order_then_intent() {
    let (stub, api) = test_support::client();
    stub.respond(201, ORDER);
    stub.respond(200, r#"{"clientSecret":"pi_1_secret"}"#);

    let outcome = block_on(checkout(&api, " 1 Main ", DEFAULT_CURRENCY)).unwrap();
    assert_eq!(outcome.order.id, 21);
    assert_eq!(outcome.intent.client_secret, "pi_1_secret");

    let reqs = stub.requests();
    assert_eq!(reqs[0].url, url("/orders"));
    assert_eq!(reqs[0].body, RequestBody::Json(r#"{"address":"1 Main"}"#.to_owned()));
    assert_eq!(reqs[1].url, url("/payments/intent"));
    assert_eq!(reqs[1].body, RequestBody::Json(r#"{"orderId":21,"currency":"USD"}"#.to_owned()));
}

#[test]
fn order_failure_skips_payment() {
    let (stub, api) = test_support::client();
    stub.respond(400, r#"{"status":400,"message":"Cart is empty"}"#);

    let err = block_on(checkout(&api, "1 Main", DEFAULT_CURRENCY)).unwrap_err();
    assert_eq!(err.to_string(), "Cart is empty");
    assert_eq!(stub.count(), 1);
}

#[test]
fn payment_failure_reports_order_id() {
    let (stub, api) = test_support::client();
    stub.respond(201, ORDER);
    stub.respond(502, "");

    let err = block_on(checkout(&api, "1 Main", "EUR")).unwrap_err();
    assert!(matches!(err, CheckoutError::Payment { order_id: 21, .. }));
    assert!(err.to_string().starts_with("Order #21 was placed"));
}

#[test]
fn outcome_debug_hides_secret() {
    let outcome = CheckoutOutcome {
        order: serde_json::from_str(ORDER).unwrap(),
        intent: PaymentIntent { client_secret: "pi_1_secret".to_owned() },
    };
    assert!(!format!("{outcome:?}").contains("pi_1_secret"));
}
