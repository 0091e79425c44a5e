use anyhow::{anyhow, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use scylla::client::session::Session;
use scylla::client::session_builder::SessionBuilder;
use scylla::serialize::row::SerializeRow;
use scylla::statement::batch::Batch;
use std::sync::Arc;
use uuid::Uuid;

use super::OrderRepository;
use crate::domain::order::{ItemType, LineItemKind, Order, OrderItem};
use crate::health::{ComponentHealth, HealthStatus};

// ============================================================================
// ScyllaDB Order Repository
// ============================================================================
//
// Tables:
// - orders       one row per order
// - order_items  one row per line item, clustered by position so items come
//                back in insertion order. `item_type` is the discriminator,
//                variant columns are null when they don't apply.
//
// An order and its items are written in a single logged batch.
//
// ============================================================================

const CREATE_ORDERS_TABLE: &str = "CREATE TABLE IF NOT EXISTS orders (
    id uuid PRIMARY KEY,
    created_at timestamp
)";

const CREATE_ORDER_ITEMS_TABLE: &str = "CREATE TABLE IF NOT EXISTS order_items (
    order_id uuid,
    position int,
    item_id uuid,
    item_type text,
    product_name text,
    unit_price double,
    quantity int,
    shipping_weight double,
    recipient_email text,
    PRIMARY KEY (order_id, position)
) WITH CLUSTERING ORDER BY (position ASC)";

/// Items go first so a partial failure never leaves items without an order row.
const DELETE_ORDER_STATEMENTS: [&str; 2] = [
    "DELETE FROM order_items WHERE order_id = ?",
    "DELETE FROM orders WHERE id = ?",
];

/// (position, item_id, item_type, product_name, unit_price, quantity, shipping_weight, recipient_email)
type ItemRow = (i32, Uuid, String, String, f64, i32, Option<f64>, Option<String>);

pub struct ScyllaOrderRepository {
    session: Arc<Session>,
}

impl ScyllaOrderRepository {
    /// Connect, then make sure the keyspace and tables exist.
    pub async fn connect(known_node: &str, keyspace: &str) -> Result<Self> {
        tracing::info!(node = %known_node, keyspace = %keyspace, "Connecting to ScyllaDB...");

        let session: Session = SessionBuilder::new()
            .known_node(known_node)
            .build()
            .await?;

        session
            .query_unpaged(
                format!(
                    "CREATE KEYSPACE IF NOT EXISTS {} WITH REPLICATION = \
                     {{'class': 'SimpleStrategy', 'replication_factor': 1}}",
                    keyspace
                ),
                &[],
            )
            .await?;

        session.use_keyspace(keyspace, false).await?;

        session.query_unpaged(CREATE_ORDERS_TABLE, &[]).await?;
        session.query_unpaged(CREATE_ORDER_ITEMS_TABLE, &[]).await?;

        tracing::info!(keyspace = %keyspace, "✅ ScyllaDB order schema ready");

        Ok(Self::new(Arc::new(session)))
    }

    pub fn new(session: Arc<Session>) -> Self {
        Self { session }
    }

    async fn load_items(&self, order: &mut Order) -> Result<()> {
        let result = self
            .session
            .query_unpaged(
                "SELECT position, item_id, item_type, product_name, unit_price, quantity,
                        shipping_weight, recipient_email
                 FROM order_items
                 WHERE order_id = ?
                 ORDER BY position ASC",
                (order.id,),
            )
            .await?;

        let rows_result = result.into_rows_result()?;

        for row in rows_result.rows::<ItemRow>()? {
            order.add_item(item_from_row(row?)?);
        }

        Ok(())
    }
}

/// One bound value row per statement in `DELETE_ORDER_STATEMENTS`.
fn delete_values(id: Uuid) -> ((Uuid,), (Uuid,)) {
    ((id,), (id,))
}

fn item_to_row(position: i32, item: &OrderItem) -> ItemRow {
    let (shipping_weight, recipient_email) = match &item.kind {
        LineItemKind::Physical { shipping_weight } => (Some(*shipping_weight), None),
        LineItemKind::Digital => (None, None),
        LineItemKind::GiftCard { recipient_email } => (None, Some(recipient_email.clone())),
    };

    (
        position,
        item.id,
        item.item_type().as_str().to_string(),
        item.product_name.clone(),
        item.unit_price,
        item.quantity,
        shipping_weight,
        recipient_email,
    )
}

fn item_from_row(row: ItemRow) -> Result<OrderItem> {
    let (position, item_id, item_type, product_name, unit_price, quantity, shipping_weight, recipient_email) = row;

    let item_type: ItemType = item_type.parse()?;
    let kind = match item_type {
        ItemType::Physical => LineItemKind::Physical {
            shipping_weight: shipping_weight
                .ok_or_else(|| anyhow!("Stored physical item at position {} has no shipping_weight", position))?,
        },
        ItemType::Digital => LineItemKind::Digital,
        ItemType::GiftCard => LineItemKind::GiftCard {
            recipient_email: recipient_email
                .ok_or_else(|| anyhow!("Stored gift card at position {} has no recipient_email", position))?,
        },
    };

    let mut item = OrderItem::new(product_name, unit_price, quantity, kind);
    item.id = item_id;
    Ok(item)
}

#[async_trait]
impl OrderRepository for ScyllaOrderRepository {
    async fn save(&self, order: Order) -> Result<Order> {
        let mut batch = Batch::default();
        let mut values: Vec<Box<dyn SerializeRow + Send + Sync>> = vec![];

        batch.append_statement("INSERT INTO orders (id, created_at) VALUES (?, ?)");
        values.push(Box::new((order.id, order.created_at)));

        for (position, item) in order.items().iter().enumerate() {
            batch.append_statement(
                "INSERT INTO order_items (
                    order_id, position, item_id, item_type, product_name, unit_price,
                    quantity, shipping_weight, recipient_email
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)",
            );

            let (position, item_id, item_type, product_name, unit_price, quantity, shipping_weight, recipient_email) =
                item_to_row(i32::try_from(position)?, item);

            values.push(Box::new((
                order.id,
                position,
                item_id,
                item_type,
                product_name,
                unit_price,
                quantity,
                shipping_weight,
                recipient_email,
            )));
        }

        self.session.batch(&batch, values).await?;

        tracing::info!(
            order_id = %order.id,
            item_count = order.items().len(),
            "✅ Persisted order and items to ScyllaDB"
        );

        Ok(order)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Order>> {
        let result = self
            .session
            .query_unpaged("SELECT id, created_at FROM orders WHERE id = ?", (id,))
            .await?;

        let mut order = {
            let rows_result = result.into_rows_result()?;

            match rows_result.maybe_first_row::<(Uuid, DateTime<Utc>)>()? {
                Some((order_id, created_at)) => Order::with_id(order_id, created_at),
                None => return Ok(None),
            }
        };

        self.load_items(&mut order).await?;

        tracing::debug!(
            order_id = %id,
            item_count = order.items().len(),
            "Loaded order from ScyllaDB"
        );

        Ok(Some(order))
    }

    async fn delete(&self, id: Uuid) -> Result<bool> {
        if self.find_by_id(id).await?.is_none() {
            return Ok(false);
        }

        let mut batch = Batch::default();
        for statement in DELETE_ORDER_STATEMENTS {
            batch.append_statement(statement);
        }

        self.session.batch(&batch, delete_values(id)).await?;

        tracing::info!(order_id = %id, "Deleted order and its items");
        Ok(true)
    }

    async fn check_health(&self) -> ComponentHealth {
        match self
            .session
            .query_unpaged("SELECT release_version FROM system.local", &[])
            .await
        {
            Ok(_) => ComponentHealth::new("order_store", HealthStatus::Healthy).with_details("scylladb"),
            Err(e) => {
                tracing::warn!(error = %e, "ScyllaDB health check failed");
                ComponentHealth::new("order_store", HealthStatus::Unhealthy(e.to_string()))
            }
        }
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
//
// Statements against a live cluster are not covered here; these tests pin
// down the row layout.
//
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_physical_item_row() {
        let item = OrderItem::new("Box", 10.0, 2, LineItemKind::Physical { shipping_weight: 3.0 });
        let row = item_to_row(0, &item);

        assert_eq!(row.0, 0);
        assert_eq!(row.1, item.id);
        assert_eq!(row.2, "PHYSICAL");
        assert_eq!(row.6, Some(3.0));
        assert_eq!(row.7, None);
    }

    #[test]
    fn test_gift_card_row_keeps_email_and_nulls_weight() {
        let item = OrderItem::new(
            "Card",
            50.0,
            1,
            LineItemKind::GiftCard { recipient_email: "friend@example.com".to_string() },
        );
        let row = item_to_row(2, &item);

        assert_eq!(row.2, "GIFT_CARD");
        assert_eq!(row.6, None);
        assert_eq!(row.7.as_deref(), Some("friend@example.com"));
    }

    #[test]
    fn test_row_maps_back_to_same_item() {
        let item = OrderItem::new("EBook", 5.0, 1, LineItemKind::Digital);
        let restored = item_from_row(item_to_row(1, &item)).unwrap();

        assert_eq!(restored.id, item.id);
        assert_eq!(restored.kind, LineItemKind::Digital);
        assert_eq!(restored.product_name, "EBook");
        assert_eq!(restored.total_price(), 5.0);
    }

    #[test]
    fn test_row_with_unknown_discriminator_fails() {
        let row: ItemRow = (0, Uuid::new_v4(), "SUBSCRIPTION".to_string(), "X".to_string(), 1.0, 1, None, None);
        assert!(item_from_row(row).is_err());
    }

    #[test]
    fn test_delete_batch_targets_items_and_order() {
        let id = Uuid::new_v4();
        let ((items_key,), (order_key,)) = delete_values(id);

        assert_eq!(DELETE_ORDER_STATEMENTS.len(), 2);
        assert!(DELETE_ORDER_STATEMENTS[0].starts_with("DELETE FROM order_items"));
        assert!(DELETE_ORDER_STATEMENTS[0].ends_with("WHERE order_id = ?"));
        assert!(DELETE_ORDER_STATEMENTS[1].starts_with("DELETE FROM orders"));
        assert!(DELETE_ORDER_STATEMENTS[1].ends_with("WHERE id = ?"));
        assert_eq!(items_key, id);
        assert_eq!(order_key, id);
    }

    #[test]
    fn test_physical_row_without_weight_fails() {
        let row: ItemRow = (3, Uuid::new_v4(), "PHYSICAL".to_string(), "Box".to_string(), 1.0, 1, None, None);
        let err = item_from_row(row).unwrap_err();
        assert!(err.to_string().contains("position 3"));
    }
}
