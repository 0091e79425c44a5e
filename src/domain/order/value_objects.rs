use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use super::errors::OrderError;

// ============================================================================
// Order Value Objects
// ============================================================================

/// Shipping rate for physical goods, in currency minor units per kilogram.
pub const SHIPPING_RATE_PER_KG: f64 = 1000.0;

/// Base URL that digital download links are built from.
pub const DOWNLOAD_BASE_URL: &str = "https://download.example.com/";

/// Wire tag identifying a line item variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ItemType {
    Physical,
    Digital,
    GiftCard,
}

impl ItemType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemType::Physical => "PHYSICAL",
            ItemType::Digital => "DIGITAL",
            ItemType::GiftCard => "GIFT_CARD",
        }
    }
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ItemType {
    type Err = OrderError;

    /// Tags are matched case-sensitively.
    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag {
            "PHYSICAL" => Ok(ItemType::Physical),
            "DIGITAL" => Ok(ItemType::Digital),
            "GIFT_CARD" => Ok(ItemType::GiftCard),
            other => Err(OrderError::InvalidItemType(other.to_string())),
        }
    }
}

/// Variant-specific payload of a line item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LineItemKind {
    Physical { shipping_weight: f64 },
    Digital,
    GiftCard { recipient_email: String },
}

impl LineItemKind {
    pub fn item_type(&self) -> ItemType {
        match self {
            LineItemKind::Physical { .. } => ItemType::Physical,
            LineItemKind::Digital => ItemType::Digital,
            LineItemKind::GiftCard { .. } => ItemType::GiftCard,
        }
    }
}

/// One line of an order. The shared fields live here, the variant data in `kind`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub id: Uuid,
    /// Back-reference to the owning order, only used for store mapping.
    pub order_id: Uuid,
    pub product_name: String,
    pub unit_price: f64,
    pub quantity: i32,
    pub kind: LineItemKind,
}

impl OrderItem {
    pub fn new(
        product_name: impl Into<String>,
        unit_price: f64,
        quantity: i32,
        kind: LineItemKind,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            order_id: Uuid::nil(),
            product_name: product_name.into(),
            unit_price,
            quantity,
            kind,
        }
    }

    pub fn item_type(&self) -> ItemType {
        self.kind.item_type()
    }

    pub fn total_price(&self) -> f64 {
        self.unit_price * f64::from(self.quantity)
    }

    /// Zero for anything that is not shipped.
    pub fn shipping_cost(&self) -> f64 {
        match &self.kind {
            LineItemKind::Physical { shipping_weight } => shipping_weight * SHIPPING_RATE_PER_KG,
            LineItemKind::Digital | LineItemKind::GiftCard { .. } => 0.0,
        }
    }

    pub fn download_link(&self) -> Option<String> {
        match self.kind {
            LineItemKind::Digital => Some(format!("{}{}", DOWNLOAD_BASE_URL, self.id)),
            _ => None,
        }
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
