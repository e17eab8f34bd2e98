use futures::executor::block_on;

use super::*;
use crate::net::test_support::{self, url};
use crate::net::transport::Method;
use crate::net::types::Session;

fn session(role: UserRole) -> Session {
    Session { token: "t".to_owned(), user_id: 1, email: "a@example.com".to_owned(), role }
}

fn user(role: UserRole) -> User {
    User {
        id: 5,
        first_name: "Bo".to_owned(),
        last_name: "K".to_owned(),
        email: "bo@example.com".to_owned(),
        phone_no: "1".to_owned(),
        address: "2 Side St".to_owned(),
        role,
    }
}

#[test]
fn only_owner_can_access() {
    assert!(can_access(&AuthState::Authenticated(session(UserRole::Owner))));
    assert!(!can_access(&AuthState::Authenticated(session(UserRole::User))));
    assert!(!can_access(&AuthState::Anonymous));
    assert!(!can_access(&AuthState::Loading));
}

#[test]
fn tab_labels() {
    let labels: Vec<&str> = DashboardTab::ALL.iter().map(|t| t.label()).collect();
    assert_eq!(labels, vec!["Artworks", "Users", "Orders", "Payments"]);
    assert_eq!(DashboardTab::from_label("Orders"), Some(DashboardTab::Orders));
    assert_eq!(DashboardTab::from_label("orders"), None);
    assert_eq!(DashboardTab::default(), DashboardTab::Artworks);
}

#[test]
fn finished_orders_offer_no_actions() {
    assert!(OrderAction::available_for(OrderStatus::Delivered).is_empty());
    assert!(OrderAction::available_for(OrderStatus::Cancelled).is_empty());
    assert_eq!(OrderAction::available_for(OrderStatus::Shipped), &[OrderAction::Deliver]);
}

#[test]
fn order_action_hits_transition_endpoint() {
    let (stub, api) = test_support::client();
    stub.respond(
        200,
        r#"{"id":8,"userId":3,"items":[],"totalPrice":1.0,"address":"x","status":"SHIPPED","orderedAt":"2024-01-01"}"#,
    );
    let order = block_on(OrderAction::Ship.run(&api, 8)).unwrap();
    assert_eq!(order.status, OrderStatus::Shipped);
    assert_eq!(stub.last().url, url("/orders/8/ship"));
    assert_eq!(stub.last().method, Method::Post);
}

#[test]
fn role_change_flips_role() {
    let change = RoleChange::toggle(&user(UserRole::User));
    assert_eq!(change, RoleChange { user_id: 5, to: UserRole::Owner });
    assert_eq!(change.label(), "Make owner");
    assert_eq!(RoleChange::toggle(&user(UserRole::Owner)).to, UserRole::User);
}

#[test]
fn role_change_patches_role() {
    let (stub, api) = test_support::client();
    stub.respond(200, &serde_json::to_string(&user(UserRole::Owner)).unwrap());

    let updated = block_on(RoleChange::toggle(&user(UserRole::User)).apply(&api)).unwrap();
    assert_eq!(updated.role, UserRole::Owner);
    assert_eq!(stub.last().url, url("/users/5/role?role=ROLE_OWNER"));
}
