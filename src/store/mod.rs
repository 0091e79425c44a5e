// ============================================================================
// Order Store - Persistence for Order Aggregates
// ============================================================================
//
// The order service only talks to `OrderRepository`. Two backends:
// - memory/  - process-local map, the default
// - scylla/  - ScyllaDB tables with a discriminator column per item
//
// ============================================================================

mod memory;
mod scylla;

use anyhow::Result;
use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::order::Order;
use crate::health::ComponentHealth;

pub use memory::InMemoryOrderRepository;
pub use scylla::ScyllaOrderRepository;

/// Storage for orders and the line items they own.
///
/// `save` must store an order and all of its items atomically, and
/// `find_by_id` must return items in the order they were added.
#[async_trait]
pub trait OrderRepository: Send + Sync {
    async fn save(&self, order: Order) -> Result<Order>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Order>>;

    /// Remove an order together with its items. Returns whether it existed.
    ///
    /// Store-level API: orders are never deleted over HTTP, only by whoever
    /// administers the store.
    #[allow(dead_code)]
    async fn delete(&self, id: Uuid) -> Result<bool>;

    async fn check_health(&self) -> ComponentHealth;
}
