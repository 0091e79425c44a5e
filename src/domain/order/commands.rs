use serde::{Deserialize, Serialize};

use super::errors::OrderError;
use super::value_objects::{ItemType, LineItemKind, OrderItem};

// ============================================================================
// Order Requests - Incoming order payloads
// ============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderRequest {
    #[serde(default)]
    pub items: Vec<OrderItemRequest>,
}

/// A single requested line. `item_type` stays an untyped tag until the
/// order is built, so unknown values surface as `InvalidItemType`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemRequest {
    #[serde(rename = "type")]
    pub item_type: String,
    pub product_name: String,
    pub price: f64,
    pub quantity: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipping_weight: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipient_email: Option<String>,
}

impl OrderItemRequest {
    /// Build the line item variant named by the request's type tag.
    pub fn to_order_item(&self) -> Result<OrderItem, OrderError> {
        let item_type: ItemType = self.item_type.parse()?;

        let kind = match item_type {
            ItemType::Physical => {
                let shipping_weight = self.shipping_weight.ok_or(OrderError::MissingField {
                    item_type,
                    field: "shippingWeight",
                })?;
                LineItemKind::Physical { shipping_weight }
            }
            ItemType::Digital => LineItemKind::Digital,
            ItemType::GiftCard => {
                let recipient_email = self
                    .recipient_email
                    .as_deref()
                    .filter(|email| !email.is_empty())
                    .ok_or(OrderError::MissingField {
                        item_type,
                        field: "recipientEmail",
                    })?;
                LineItemKind::GiftCard {
                    recipient_email: recipient_email.to_string(),
                }
            }
        };

        Ok(OrderItem::new(self.product_name.clone(), self.price, self.quantity, kind))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(item_type: &str) -> OrderItemRequest {
        OrderItemRequest {
            item_type: item_type.to_string(),
            product_name: "Thing".to_string(),
            price: 4.5,
            quantity: 3,
            shipping_weight: None,
            recipient_email: None,
        }
    }

    #[test]
    fn test_deserialize_camel_case_payload() {
        let json = r#"{
            "items": [
                {"type": "PHYSICAL", "productName": "Box", "price": 10, "quantity": 2, "shippingWeight": 3},
                {"type": "GIFT_CARD", "productName": "Card", "price": 50, "quantity": 1, "recipientEmail": "a@b.c"}
            ]
        }"#;

        let request: OrderRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.items.len(), 2);
        assert_eq!(request.items[0].item_type, "PHYSICAL");
        assert_eq!(request.items[0].shipping_weight, Some(3.0));
        assert_eq!(request.items[1].recipient_email.as_deref(), Some("a@b.c"));
    }

    #[test]
    fn test_missing_items_defaults_to_empty() {
        let request: OrderRequest = serde_json::from_str("{}").unwrap();
        assert!(request.items.is_empty());
    }

    #[test]
    fn test_common_fields_copied_onto_every_variant() {
        let mut physical = request("PHYSICAL");
        physical.shipping_weight = Some(1.5);
        let mut gift = request("GIFT_CARD");
        gift.recipient_email = Some("friend@example.com".to_string());

        for req in [physical, request("DIGITAL"), gift] {
            let item = req.to_order_item().unwrap();
            assert_eq!(item.product_name, "Thing");
            assert_eq!(item.unit_price, 4.5);
            assert_eq!(item.quantity, 3);
            assert_eq!(item.item_type().as_str(), req.item_type);
        }
    }

    #[test]
    fn test_variant_fields_are_copied() {
        let mut physical = request("PHYSICAL");
        physical.shipping_weight = Some(2.0);
        assert_eq!(
            physical.to_order_item().unwrap().kind,
            LineItemKind::Physical { shipping_weight: 2.0 }
        );

        let mut gift = request("GIFT_CARD");
        gift.recipient_email = Some("friend@example.com".to_string());
        assert_eq!(
            gift.to_order_item().unwrap().kind,
            LineItemKind::GiftCard { recipient_email: "friend@example.com".to_string() }
        );
    }

    #[test]
    fn test_unknown_tag_is_rejected() {
        let err = request("SUBSCRIPTION").to_order_item().unwrap_err();
        assert!(matches!(err, OrderError::InvalidItemType(tag) if tag == "SUBSCRIPTION"));
    }

    #[test]
    fn test_physical_without_weight_is_rejected() {
        let err = request("PHYSICAL").to_order_item().unwrap_err();
        assert!(matches!(
            err,
            OrderError::MissingField { item_type: ItemType::Physical, field: "shippingWeight" }
        ));
    }

    #[test]
    fn test_gift_card_without_email_is_rejected() {
        let err = request("GIFT_CARD").to_order_item().unwrap_err();
        assert!(matches!(err, OrderError::MissingField { field: "recipientEmail", .. }));

        let mut blank = request("GIFT_CARD");
        blank.recipient_email = Some(String::new());
        assert!(blank.to_order_item().is_err());
    }

    #[test]
    fn test_negative_values_are_accepted() {
        let mut req = request("DIGITAL");
        req.price = -3.0;
        req.quantity = 0;

        let item = req.to_order_item().unwrap();
        assert_eq!(item.total_price(), 0.0);
    }
}
