use uuid::Uuid;

use super::value_objects::ItemType;

// ============================================================================
// Order Errors
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum OrderError {
    #[error("Invalid item type: {0}")]
    InvalidItemType(String),

    #[error("{item_type} item is missing required field '{field}'")]
    MissingField {
        item_type: ItemType,
        field: &'static str,
    },

    #[error("Order items cannot be empty")]
    EmptyItems,

    #[error("Order not found: {0}")]
    OrderNotFound(Uuid),

    #[error(transparent)]
    Repository(#[from] anyhow::Error),
}

impl OrderError {
    /// Short label used for the rejection metric.
    pub fn reason(&self) -> &'static str {
        match self {
            OrderError::InvalidItemType(_) => "invalid_item_type",
            OrderError::MissingField { .. } => "missing_field",
            OrderError::EmptyItems => "empty_items",
            OrderError::OrderNotFound(_) => "not_found",
            OrderError::Repository(_) => "repository",
        }
    }
}
