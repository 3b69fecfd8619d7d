//! In-memory order store

use parking_lot::RwLock;

use super::IdAllocator;
use crate::models::Order;

/// Order store — append-only ordered collection with an owned id allocator.
///
/// Unlike the catalog, `create` does not allocate: the service layer draws
/// an id from [`OrderStore::next_id`] and resolves the status before the
/// finalized order is appended here. No delete in scope.
#[derive(Debug, Default)]
pub struct OrderStore {
    orders: RwLock<Vec<Order>>,
    ids: IdAllocator,
}

impl OrderStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate the next order identifier
    pub fn next_id(&self) -> i64 {
        self.ids.next_id()
    }

    /// Snapshot of all orders in insertion order
    pub fn list_all(&self) -> Vec<Order> {
        self.orders.read().clone()
    }

    /// Append an already-finalized order (id and status set by the caller)
    pub fn create(&self, order: Order) -> Order {
        self.orders.write().push(order.clone());
        order
    }

    pub fn len(&self) -> usize {
        self.orders.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.read().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::OrderStatus;

    fn finalized(id: i64) -> Order {
        Order {
            id,
            user_id: Some("uid-1".to_string()),
            user_email: Some("user@example.com".to_string()),
            total_amount: 12.99,
            payment_method: "Cash".to_string(),
            status: OrderStatus::PendingCash,
            items: Vec::new(),
        }
    }

    #[test]
    fn create_appends_in_order() {
        let store = OrderStore::new();
        let a = store.next_id();
        let b = store.next_id();
        assert!(a < b);

        store.create(finalized(a));
        store.create(finalized(b));

        let listed: Vec<i64> = store.list_all().into_iter().map(|o| o.id).collect();
        assert_eq!(listed, vec![a, b]);
    }

    #[test]
    fn snapshot_is_unaffected_by_later_mutation() {
        let store = OrderStore::new();
        let id = store.next_id();
        store.create(finalized(id));

        let snapshot = store.list_all();
        let id2 = store.next_id();
        store.create(finalized(id2));

        assert_eq!(snapshot.len(), 1);
        assert_eq!(store.len(), 2);
    }
}
