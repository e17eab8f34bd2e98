use futures::executor::block_on;

use super::*;
use crate::net::test_support::{self, url};
use crate::net::transport::RequestBody;

const CART: &str = r#"{"id":7,"userId":3,"cartItems":[],"totalItems":0,"totalPrice":0.0}"#;
const ITEM: &str = r#"{"id":11,"cartId":7,"artworkId":5,"quantity":1}"#;

#[test]
fn ensure_cart_returns_existing_cart() {
    let (stub, api) = test_support::client();
    stub.respond(200, CART);

    let cart = block_on(ensure_cart(&api, 3)).unwrap();
    assert_eq!(cart.id, 7);
    assert_eq!(stub.count(), 1);
    assert_eq!(stub.last().url, url("/carts/user/3"));
}

#[test]
fn ensure_cart_creates_on_404() {
    let (stub, api) = test_support::client();
    stub.respond(404, r#"{"status":404,"message":"Cart not found"}"#);
    stub.respond(201, CART);

    let cart = block_on(ensure_cart(&api, 3)).unwrap();
    assert_eq!(cart.user_id, 3);
    let reqs = stub.requests();
    assert_eq!(reqs.len(), 2);
    assert_eq!(reqs[1].method, Method::Post);
    assert_eq!(reqs[1].url, url("/carts"));
    assert_eq!(reqs[1].body, RequestBody::Json(r#"{"userId":3}"#.to_owned()));
}

#[test]
fn ensure_cart_propagates_other_errors() {
    let (stub, api) = test_support::client();
    stub.respond(500, "");

    let err = block_on(ensure_cart(&api, 3)).unwrap_err();
    assert_eq!(err.status(), Some(500));
    assert_eq!(stub.count(), 1);
}

#[test]
fn add_artwork_adds_single_unit() {
    let (stub, api) = test_support::client();
    stub.respond(200, CART);
    stub.respond(201, ITEM);

    let item = block_on(add_artwork(&api, 3, 5)).unwrap();
    assert_eq!(item.artwork_id, 5);
    let req = stub.last();
    assert_eq!(req.url, url("/cart-items"));
    assert_eq!(
        req.body,
        RequestBody::Json(r#"{"cartId":7,"artworkId":5,"quantity":1}"#.to_owned())
    );
}

#[test]
fn update_item_204_is_none() {
    let (stub, api) = test_support::client();
    stub.respond(204, "");
    let request = CartItemRequest { cart_id: 7, artwork_id: 5, quantity: 0 };
    assert_eq!(block_on(update_item(&api, 11, &request)).unwrap(), None);

    stub.respond(200, ITEM);
    let request = CartItemRequest { cart_id: 7, artwork_id: 5, quantity: 1 };
    assert_eq!(block_on(update_item(&api, 11, &request)).unwrap().map(|i| i.id), Some(11));
}

#[test]
fn quantity_steps_and_clear_paths() {
    let (stub, api) = test_support::client();
    block_on(increase_quantity(&api, 11)).unwrap();
    assert_eq!(stub.last().url, url("/cart-items/11/increase"));
    assert_eq!(stub.last().method, Method::Patch);

    block_on(decrease_quantity(&api, 11)).unwrap();
    assert_eq!(stub.last().url, url("/cart-items/11/decrease"));

    block_on(clear_cart(&api, 7)).unwrap();
    assert_eq!(stub.last().url, url("/cart-items/cart/7"));
    assert_eq!(stub.last().method, Method::Delete);
}
