//! Owner dashboard: tab set, access rule and administrative actions.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use super::auth::AuthState;
use crate::net::error::ApiError;
use crate::net::http::ApiClient;
use crate::net::types::{Order, OrderStatus, User, UserRole};
use crate::net::{orders, users};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DashboardTab {
    #[default]
    Artworks,
    Users,
    Orders,
    Payments,
}

impl DashboardTab {
    pub const ALL: [Self; 4] = [Self::Artworks, Self::Users, Self::Orders, Self::Payments];

    pub fn label(self) -> &'static str {
        match self {
            Self::Artworks => "Artworks",
            Self::Users => "Users",
            Self::Orders => "Orders",
            Self::Payments => "Payments",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.label() == label)
    }
}

/// Dashboard is owner-only. The backend enforces the same rule.
pub fn can_access(state: &AuthState) -> bool {
    state.is_owner()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OrderAction {
    Confirm,
    Ship,
    Deliver,
    Cancel,
}

impl OrderAction {
    pub fn label(self) -> &'static str {
        match self {
            Self::Confirm => "Confirm",
            Self::Ship => "Ship",
            Self::Deliver => "Deliver",
            Self::Cancel => "Cancel",
        }
    }

    /// Buttons offered for an order in `status`.
    pub fn available_for(status: OrderStatus) -> &'static [Self] {
        match status {
            OrderStatus::Pending => &[Self::Confirm, Self::Cancel],
            OrderStatus::Confirmed => &[Self::Ship, Self::Cancel],
            OrderStatus::Shipped => &[Self::Deliver],
            OrderStatus::Delivered | OrderStatus::Cancelled => &[],
        }
    }

    /// # Errors
    ///
    /// Propagates [`ApiError`].
    pub async fn run(self, api: &ApiClient, order_id: i64) -> Result<Order, ApiError> {
        match self {
            Self::Confirm => orders::confirm_order(api, order_id).await,
            Self::Ship => orders::ship_order(api, order_id).await,
            Self::Deliver => orders::deliver_order(api, order_id).await,
            Self::Cancel => orders::cancel_order(api, order_id).await,
        }
    }
}

/// Promote a user to owner or demote an owner to user.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoleChange {
    pub user_id: i64,
    pub to: UserRole,
}

impl RoleChange {
    pub fn toggle(user: &User) -> Self {
        let to = match user.role {
            UserRole::User => UserRole::Owner,
            UserRole::Owner => UserRole::User,
        };
        Self { user_id: user.id, to }
    }

    pub fn label(self) -> &'static str {
        match self.to {
            UserRole::Owner => "Make owner",
            UserRole::User => "Make user",
        }
    }

    /// # Errors
    ///
    /// Propagates [`ApiError`].
    pub async fn apply(self, api: &ApiClient) -> Result<User, ApiError> {
        users::update_role(api, self.user_id, self.to).await
    }
}
