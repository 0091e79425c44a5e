// Private module declaration
mod server;

use prometheus::{IntCounter, IntCounterVec, Opts, Registry};

// Re-export for public API
pub use server::{health_handler, metrics_handler};

// ============================================================================
// Metrics Module - Prometheus metrics for observability
// ============================================================================
//
// Tracks:
// - Orders created and the item types they carry
// - Rejected order requests by reason
// - Order lookups by outcome
// - Gift card notifications sent
//
// All metrics are registered with Prometheus and can be scraped via /metrics
// ============================================================================

pub struct Metrics {
    registry: Registry,

    pub orders_created: IntCounter,
    pub order_items: IntCounterVec,
    pub orders_rejected: IntCounterVec,
    pub order_lookups: IntCounterVec,
    pub gift_card_notifications: IntCounter,
}

impl Metrics {
    pub fn new() -> anyhow::Result<Self> {
        let registry = Registry::new();

        let orders_created = IntCounter::new("orders_created_total", "Total orders created")?;
        registry.register(Box::new(orders_created.clone()))?;

        let order_items = IntCounterVec::new(
            Opts::new("order_items_total", "Total line items in created orders"),
            &["item_type"],
        )?;
        registry.register(Box::new(order_items.clone()))?;

        let orders_rejected = IntCounterVec::new(
            Opts::new("orders_rejected_total", "Order requests rejected before persisting"),
            &["reason"],
        )?;
        registry.register(Box::new(orders_rejected.clone()))?;

        let order_lookups = IntCounterVec::new(
            Opts::new("order_lookups_total", "Order lookups by identifier"),
            &["outcome"],
        )?;
        registry.register(Box::new(order_lookups.clone()))?;

        let gift_card_notifications = IntCounter::new(
            "gift_card_notifications_total",
            "Gift card notifications sent",
        )?;
        registry.register(Box::new(gift_card_notifications.clone()))?;

        Ok(Self {
            registry,
            orders_created,
            order_items,
            orders_rejected,
            order_lookups,
            gift_card_notifications,
        })
    }

    /// Get the Prometheus registry for exposing metrics via HTTP
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn record_order_created<'a>(&self, item_types: impl IntoIterator<Item = &'a str>) {
        self.orders_created.inc();
        for item_type in item_types {
            self.order_items.with_label_values(&[item_type]).inc();
        }
    }

    pub fn record_rejection(&self, reason: &str) {
        self.orders_rejected.with_label_values(&[reason]).inc();
    }

    pub fn record_lookup(&self, found: bool) {
        let outcome = if found { "found" } else { "not_found" };
        self.order_lookups.with_label_values(&[outcome]).inc();
    }

    pub fn record_gift_card_notification(&self) {
        self.gift_card_notifications.inc();
    }
}
