use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::value_objects::ItemType;

// ============================================================================
// Order Responses - Outgoing order payloads
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderResponse {
    pub order_id: Uuid,
    pub items: Vec<OrderItemResponse>,
    pub total_price: f64,
    pub total_shipping_cost: f64,
    pub grand_total: f64,
}

/// Per-line view. Variant-only fields are omitted when they don't apply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemResponse {
    #[serde(rename = "type")]
    pub item_type: ItemType,
    pub product_name: String,
    pub price: f64,
    pub quantity: i32,
    pub total_price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipping_cost: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub download_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipient_email: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optional_fields_are_omitted() {
        let item = OrderItemResponse {
            item_type: ItemType::Digital,
            product_name: "EBook".to_string(),
            price: 5.0,
            quantity: 1,
            total_price: 5.0,
            shipping_cost: None,
            download_link: Some("https://download.example.com/x".to_string()),
            recipient_email: None,
        };

        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["type"], "DIGITAL");
        assert_eq!(json["productName"], "EBook");
        assert_eq!(json["totalPrice"], 5.0);
        assert!(json.get("shippingCost").is_none());
        assert!(json.get("recipientEmail").is_none());
        assert_eq!(json["downloadLink"], "https://download.example.com/x");
    }

    #[test]
    fn test_order_response_uses_camel_case() {
        let response = OrderResponse {
            order_id: Uuid::nil(),
            items: vec![],
            total_price: 1.0,
            total_shipping_cost: 2.0,
            grand_total: 3.0,
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["orderId"], Uuid::nil().to_string());
        assert_eq!(json["totalShippingCost"], 2.0);
        assert_eq!(json["grandTotal"], 3.0);
    }
}
