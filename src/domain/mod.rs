// ============================================================================
// Domain Layer - Business Logic
// ============================================================================
//
// - order/    line items, the Order aggregate, the order service
// - catalog/  the product list behind the /products endpoints
//
// Neither module knows about HTTP; see src/api.
//
// ============================================================================

pub mod order;
pub mod catalog;
