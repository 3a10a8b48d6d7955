//! # Order Service
//!
//! The mock order accessor: volatile, memory-only, process-lifetime-scoped.
//! Orders exist so the confirmation page has something to show; nothing is
//! written to disk and a reload starts from zero.

use std::sync::Arc;

use chrono::Utc;
use tokio::sync::RwLock;
use tokio::time::sleep;
use tracing::debug;

use shopflow_core::types::{Order, OrderDraft};

use super::{product::next_id, LatencyProfile};

/// In-memory order accessor. Clones share the same order list.
#[derive(Debug, Clone)]
pub struct OrderStore {
    orders: Arc<RwLock<Vec<Order>>>,
    latency: LatencyProfile,
}

impl OrderStore {
    /// Creates an empty order store with the service's standard delays.
    pub fn new() -> Self {
        Self::with_latency(LatencyProfile::ORDERS)
    }

    /// Creates an empty order store with explicit delays (tests pass
    /// [`LatencyProfile::instant`]).
    pub fn with_latency(latency: LatencyProfile) -> Self {
        OrderStore {
            orders: Arc::new(RwLock::new(Vec::new())),
            latency,
        }
    }

    /// Returns every order, oldest first.
    pub async fn get_all(&self) -> Vec<Order> {
        sleep(self.latency.read).await;
        let orders = self.orders.read().await;
        debug!(count = orders.len(), "get_all orders");
        orders.clone()
    }

    /// Looks up one order. Absent ids are `None`, never an error.
    pub async fn get_by_id(&self, id: i64) -> Option<Order> {
        sleep(self.latency.read).await;
        let orders = self.orders.read().await;
        let found = orders.iter().find(|o| o.id == id).cloned();
        debug!(id, found = found.is_some(), "get_by_id order");
        found
    }

    /// Creates an order from the draft.
    ///
    /// The accessor stamps `created_at` and assigns the next sequential id;
    /// a draft without a status defaults to pending.
    pub async fn create(&self, draft: OrderDraft) -> Order {
        sleep(self.latency.create).await;
        let mut orders = self.orders.write().await;
        let order = Order {
            id: next_id(orders.iter().map(|o| o.id)),
            items: draft.items,
            total_cents: draft.total_cents,
            shipping: draft.shipping,
            payment: draft.payment,
            status: draft.status.unwrap_or_default(),
            created_at: Utc::now(),
        };
        orders.push(order.clone());
        debug!(id = order.id, status = ?order.status, "created order");
        order
    }

    /// Replaces an order's caller-owned fields, keeping its id and
    /// creation timestamp. A draft without a status keeps the existing one.
    /// `None` if absent.
    pub async fn update(&self, id: i64, draft: OrderDraft) -> Option<Order> {
        sleep(self.latency.write).await;
        let mut orders = self.orders.write().await;
        let slot = orders.iter_mut().find(|o| o.id == id)?;
        slot.items = draft.items;
        slot.total_cents = draft.total_cents;
        slot.shipping = draft.shipping;
        slot.payment = draft.payment;
        if let Some(status) = draft.status {
            slot.status = status;
        }
        debug!(id, "updated order");
        Some(slot.clone())
    }

    /// Removes an order, returning the removed record. `None` if absent.
    pub async fn delete(&self, id: i64) -> Option<Order> {
        sleep(self.latency.write).await;
        let mut orders = self.orders.write().await;
        let index = orders.iter().position(|o| o.id == id)?;
        let removed = orders.remove(index);
        debug!(id, "deleted order");
        Some(removed)
    }
}

impl Default for OrderStore {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use shopflow_core::cart::CartLineItem;
    use shopflow_core::types::{OrderStatus, PaymentCard, ShippingAddress};

    fn store() -> OrderStore {
        OrderStore::with_latency(LatencyProfile::instant())
    }

    fn draft(total_cents: i64, status: Option<OrderStatus>) -> OrderDraft {
        OrderDraft {
            items: vec![CartLineItem {
                product_id: 1,
                name: "Desk Lamp".to_string(),
                price_cents: total_cents,
                image: "lamp.jpg".to_string(),
                quantity: 1,
            }],
            total_cents,
            shipping: ShippingAddress::default(),
            payment: PaymentCard::default(),
            status,
        }
    }

    #[tokio::test]
    async fn test_create_defaults_status_to_pending() {
        let store = store();

        let order = store.create(draft(2000, None)).await;

        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.id, 1); // first order in an empty store
    }

    #[tokio::test]
    async fn test_create_honors_explicit_status() {
        let store = store();

        let order = store.create(draft(2000, Some(OrderStatus::Confirmed))).await;

        assert_eq!(order.status, OrderStatus::Confirmed);
    }

    #[tokio::test]
    async fn test_ids_are_sequential() {
        let store = store();

        let a = store.create(draft(100, None)).await;
        let b = store.create(draft(200, None)).await;
        let c = store.create(draft(300, None)).await;

        assert_eq!((a.id, b.id, c.id), (1, 2, 3));
    }

    #[tokio::test]
    async fn test_get_by_id_miss_is_none() {
        let store = store();
        store.create(draft(100, None)).await;

        assert!(store.get_by_id(1).await.is_some());
        assert!(store.get_by_id(42).await.is_none());
    }

    #[tokio::test]
    async fn test_update_keeps_id_and_created_at() {
        let store = store();
        let created = store.create(draft(100, None)).await;

        let updated = store
            .update(created.id, draft(500, Some(OrderStatus::Shipped)))
            .await
            .unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.created_at, created.created_at);
        assert_eq!(updated.total_cents, 500);
        assert_eq!(updated.status, OrderStatus::Shipped);

        // No status in the draft keeps the stored one
        let kept = store.update(created.id, draft(600, None)).await.unwrap();
        assert_eq!(kept.status, OrderStatus::Shipped);
    }

    #[tokio::test]
    async fn test_delete_returns_removed_record() {
        let store = store();
        store.create(draft(100, None)).await;

        let removed = store.delete(1).await.unwrap();
        assert_eq!(removed.id, 1);
        assert!(store.delete(1).await.is_none());
        assert!(store.get_all().await.is_empty());
    }
}
