use std::sync::Arc;
use uuid::Uuid;

use crate::metrics::Metrics;
use crate::store::OrderRepository;

use super::aggregate::Order;
use super::commands::OrderRequest;
use super::errors::OrderError;
use super::fulfillment::GiftCardNotifier;
use super::response::{OrderItemResponse, OrderResponse};
use super::value_objects::LineItemKind;

// ============================================================================
// Order Service
// ============================================================================
//
// Orchestrates: Request → Line Items → Order Aggregate → Repository
//          and: Order Aggregate → Response (+ gift card fulfillment)
//
// ============================================================================

pub struct OrderService {
    repository: Arc<dyn OrderRepository>,
    notifier: Arc<dyn GiftCardNotifier>,
    metrics: Arc<Metrics>,
}

impl OrderService {
    pub fn new(
        repository: Arc<dyn OrderRepository>,
        notifier: Arc<dyn GiftCardNotifier>,
        metrics: Arc<Metrics>,
    ) -> Self {
        Self {
            repository,
            notifier,
            metrics,
        }
    }

    pub fn repository(&self) -> &Arc<dyn OrderRepository> {
        &self.repository
    }

    /// Build an order from the request and persist it.
    ///
    /// Every item is built before anything is stored, so a bad item leaves
    /// the repository untouched.
    pub async fn create_order(&self, request: &OrderRequest) -> Result<Order, OrderError> {
        let order = self.build_order(request).inspect_err(|e| {
            tracing::warn!(error = %e, "Rejected order request");
            self.metrics.record_rejection(e.reason());
        })?;

        let order = self.repository.save(order).await?;

        self.metrics
            .record_order_created(order.items().iter().map(|item| item.item_type().as_str()));

        tracing::info!(
            order_id = %order.id,
            item_count = order.items().len(),
            grand_total = order.grand_total(),
            "✅ Order created"
        );

        Ok(order)
    }

    fn build_order(&self, request: &OrderRequest) -> Result<Order, OrderError> {
        if request.items.is_empty() {
            return Err(OrderError::EmptyItems);
        }

        let mut order = Order::new();
        for item_request in &request.items {
            order.add_item(item_request.to_order_item()?);
        }

        Ok(order)
    }

    pub async fn get_order(&self, id: Uuid) -> Result<Order, OrderError> {
        let found = self.repository.find_by_id(id).await?;
        self.metrics.record_lookup(found.is_some());

        found.ok_or_else(|| {
            tracing::debug!(order_id = %id, "Order not found");
            OrderError::OrderNotFound(id)
        })
    }

    /// Project an order into its response payload.
    ///
    /// Gift cards are sent every time an order is rendered, including
    /// re-reads of an order that was already rendered before.
    pub fn to_response(&self, order: &Order) -> OrderResponse {
        let items = order
            .items()
            .iter()
            .map(|item| {
                let mut response = OrderItemResponse {
                    item_type: item.item_type(),
                    product_name: item.product_name.clone(),
                    price: item.unit_price,
                    quantity: item.quantity,
                    total_price: item.total_price(),
                    shipping_cost: None,
                    download_link: None,
                    recipient_email: None,
                };

                match &item.kind {
                    LineItemKind::Physical { .. } => {
                        response.shipping_cost = Some(item.shipping_cost());
                    }
                    LineItemKind::Digital => {
                        response.download_link = item.download_link();
                    }
                    LineItemKind::GiftCard { recipient_email } => {
                        self.notifier.send_gift(item.id, recipient_email);
                        self.metrics.record_gift_card_notification();
                        response.recipient_email = Some(recipient_email.clone());
                    }
                }

                response
            })
            .collect();

        let total_price = order.total_price();
        let total_shipping_cost = order.total_shipping_cost();

        OrderResponse {
            order_id: order.id,
            items,
            total_price,
            total_shipping_cost,
            grand_total: total_price + total_shipping_cost,
        }
    }

    /// Create an order and render it, as `POST /orders` does.
    pub async fn place_order(&self, request: &OrderRequest) -> Result<OrderResponse, OrderError> {
        let order = self.create_order(request).await?;
        Ok(self.to_response(&order))
    }

    /// Look up an order and render it, as `GET /order/{id}` does.
    pub async fn find_order_response(&self, id: Uuid) -> Result<OrderResponse, OrderError> {
        let order = self.get_order(id).await?;
        Ok(self.to_response(&order))
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
