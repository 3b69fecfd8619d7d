//! Order intake orchestration

use std::sync::Arc;

use crate::models::{Order, OrderDraft};
use crate::payment;
use crate::store::OrderStore;

/// Orchestrates order intake: allocate id, resolve status, persist, return.
///
/// This path never fails — malformed payment methods resolve to `UNKNOWN`
/// and non-positive amounts fall through to the resolver unrejected, so the
/// caller always gets a finalized order back.
#[derive(Clone)]
pub struct OrderService {
    orders: Arc<OrderStore>,
}

impl OrderService {
    pub fn new(orders: Arc<OrderStore>) -> Self {
        Self { orders }
    }

    /// Accept an incoming order and return it finalized with id and status.
    pub fn submit(&self, draft: OrderDraft) -> Order {
        let id = self.orders.next_id();
        let status = payment::resolve(&draft.payment_method, draft.total_amount);

        tracing::info!(
            order_id = id,
            amount = draft.total_amount,
            method = %draft.payment_method,
            status = ?status,
            "Order received"
        );

        self.orders.create(Order {
            id,
            user_id: draft.user_id,
            user_email: draft.user_email,
            total_amount: draft.total_amount,
            payment_method: draft.payment_method,
            status,
            items: draft.items,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{OrderItem, OrderStatus};

    fn service() -> OrderService {
        OrderService::new(Arc::new(OrderStore::new()))
    }

    fn cash_draft(amount: f64) -> OrderDraft {
        OrderDraft {
            user_id: Some("uid-1".to_string()),
            user_email: Some("user@example.com".to_string()),
            total_amount: amount,
            payment_method: "Cash".to_string(),
            items: vec![OrderItem {
                product_id: Some(1),
                name: "Breakfast Special".to_string(),
                price: amount,
                quantity: 1,
            }],
        }
    }

    #[test]
    fn submit_finalizes_and_persists() {
        let svc = service();
        let order = svc.submit(cash_draft(12.99));

        assert_eq!(order.id, 1);
        assert_eq!(order.status, OrderStatus::PendingCash);
        assert_eq!(order.items.len(), 1);

        let stored = svc.orders.list_all();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].id, order.id);
        assert_eq!(stored[0].status, order.status);
    }

    #[test]
    fn sequential_submits_get_increasing_ids() {
        let svc = service();
        let a = svc.submit(cash_draft(1.0));
        let b = svc.submit(cash_draft(2.0));
        let c = svc.submit(cash_draft(3.0));
        assert_eq!((a.id, b.id, c.id), (1, 2, 3));
    }

    #[test]
    fn malformed_drafts_are_persisted_not_rejected() {
        let svc = service();

        // no payment method, no amount
        let order = svc.submit(OrderDraft::default());
        assert_eq!(order.status, OrderStatus::Unknown);
        assert_eq!(order.total_amount, 0.0);

        // negative credit card amount
        let order = svc.submit(OrderDraft {
            payment_method: "Credit Card".to_string(),
            total_amount: -5.0,
            ..OrderDraft::default()
        });
        assert_eq!(order.status, OrderStatus::Failed);

        assert_eq!(svc.orders.len(), 2);
    }
}
