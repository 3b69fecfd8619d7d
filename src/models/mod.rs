//! 数据模型
//!
//! Wire shapes follow the storefront frontend (camelCase JSON).
//! Create payloads are permissive: every field is serde-defaulted and
//! null-tolerant, so a partial body deserializes instead of being rejected.

pub mod contact;
pub mod order;
pub mod product;

use serde::{Deserialize, Deserializer};

/// Treat an explicit JSON `null` the same as an absent key.
///
/// `#[serde(default)]` alone only covers missing keys; the frontend sends
/// `null` for fields it has no value for.
pub(crate) fn null_to_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

pub use contact::{ContactMessage, ContactMessageCreate};
pub use order::{Order, OrderDraft, OrderItem, OrderStatus};
pub use product::{Product, ProductCreate};
