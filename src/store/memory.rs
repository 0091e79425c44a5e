use anyhow::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::OrderRepository;
use crate::domain::order::Order;
use crate::health::{ComponentHealth, HealthStatus};

/// Keeps orders in a process-local map. Items live inside their order, so
/// removing the order removes them too.
#[derive(Default)]
pub struct InMemoryOrderRepository {
    orders: RwLock<HashMap<Uuid, Order>>,
}

impl InMemoryOrderRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.orders.read().await.len()
    }
}

#[async_trait]
impl OrderRepository for InMemoryOrderRepository {
    async fn save(&self, order: Order) -> Result<Order> {
        let mut orders = self.orders.write().await;
        orders.insert(order.id, order.clone());

        tracing::debug!(
            order_id = %order.id,
            item_count = order.items().len(),
            "Stored order in memory"
        );

        Ok(order)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Order>> {
        Ok(self.orders.read().await.get(&id).cloned())
    }

    async fn delete(&self, id: Uuid) -> Result<bool> {
        Ok(self.orders.write().await.remove(&id).is_some())
    }

    async fn check_health(&self) -> ComponentHealth {
        let count = self.len().await;
        ComponentHealth::new("order_store", HealthStatus::Healthy)
            .with_details(format!("in-memory, {} orders", count))
    }
}
