use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::value_objects::OrderItem;

// ============================================================================
// Order Aggregate
// ============================================================================
//
// The order owns its line items. Totals are derived from the items on every
// call and never stored.
//
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    items: Vec<OrderItem>,
}

impl Order {
    pub fn new() -> Self {
        Self::with_id(Uuid::new_v4(), Utc::now())
    }

    /// Rebuild an order shell from stored identity; items are added afterwards.
    pub fn with_id(id: Uuid, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            created_at,
            items: Vec::new(),
        }
    }

    /// Append an item and point it back at this order
    pub fn add_item(&mut self, mut item: OrderItem) {
        item.order_id = self.id;
        self.items.push(item);
    }

    pub fn items(&self) -> &[OrderItem] {
        &self.items
    }

    pub fn total_price(&self) -> f64 {
        self.items.iter().map(OrderItem::total_price).sum()
    }

    pub fn total_shipping_cost(&self) -> f64 {
        self.items.iter().map(OrderItem::shipping_cost).sum()
    }

    pub fn grand_total(&self) -> f64 {
        self.total_price() + self.total_shipping_cost()
    }
}

impl Default for Order {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
