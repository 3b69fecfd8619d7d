//! Order Model

use serde::{Deserialize, Serialize};

/// Terminal order status, assigned exactly once at creation.
///
/// There are no transitions in the current scope — a `PENDING_CASH` order
/// stays pending until an out-of-band settlement process exists.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    PendingCash,
    Paid,
    Failed,
    #[default]
    Unknown,
}

/// Order line item — carried through verbatim, opaque to the core logic
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    #[serde(default)]
    pub product_id: Option<i64>,
    #[serde(default, deserialize_with = "crate::models::null_to_default")]
    pub name: String,
    /// Unit price in currency unit
    #[serde(default, deserialize_with = "crate::models::null_to_default")]
    pub price: f64,
    #[serde(default, deserialize_with = "crate::models::null_to_default")]
    pub quantity: i32,
}

/// Order entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: i64,
    /// Opaque user identifier; absent for guests
    pub user_id: Option<String>,
    pub user_email: Option<String>,
    /// Total amount in currency unit
    pub total_amount: f64,
    /// Free-form label, matched case-insensitively at resolution time
    pub payment_method: String,
    pub status: OrderStatus,
    pub items: Vec<OrderItem>,
}

/// Incoming order payload (no id, no status)
///
/// Nothing here is validated: a missing or null amount defaults to 0.0 and
/// an unrecognized payment method resolves to `UNKNOWN` — the order is
/// persisted either way.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDraft {
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub user_email: Option<String>,
    #[serde(default, deserialize_with = "crate::models::null_to_default")]
    pub total_amount: f64,
    #[serde(default, deserialize_with = "crate::models::null_to_default")]
    pub payment_method: String,
    #[serde(default, deserialize_with = "crate::models::null_to_default")]
    pub items: Vec<OrderItem>,
}
