// ============================================================================
// Order Domain - Line items, the Order aggregate and the order service
// ============================================================================
//
// - Value objects (ItemType, LineItemKind, OrderItem)
// - Requests and responses (OrderRequest, OrderResponse)
// - Errors (OrderError enum)
// - Aggregate (Order with derived totals)
// - Fulfillment (GiftCardNotifier)
// - Service (OrderService: build, persist, render)
//
// ============================================================================

pub mod value_objects;
pub mod commands;
pub mod response;
pub mod errors;
pub mod aggregate;
pub mod fulfillment;
pub mod service;

// Re-export for convenience
pub use value_objects::*;
pub use commands::*;
pub use errors::*;
pub use aggregate::*;
pub use fulfillment::LoggingGiftCardNotifier;
pub use service::*;
