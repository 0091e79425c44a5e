use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};

use crate::domain::catalog::CatalogError;
use crate::domain::order::OrderError;

// ============================================================================
// HTTP Error Mapping
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Order(#[from] OrderError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// Request body or path segment that could not be extracted
    #[error("{0}")]
    BadRequest(String),

    #[error("Internal error: {0}")]
    Internal(anyhow::Error),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Order(
                OrderError::InvalidItemType(_) | OrderError::MissingField { .. } | OrderError::EmptyItems,
            ) => StatusCode::BAD_REQUEST,
            ApiError::Order(OrderError::OrderNotFound(_)) => StatusCode::NOT_FOUND,
            ApiError::Order(OrderError::Repository(_)) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Catalog(CatalogError::ProductNotFound(_)) => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        }

        HttpResponse::build(status).json(serde_json::json!({ "error": self.to_string() }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::order::ItemType;
    use uuid::Uuid;

    #[test]
    fn test_client_errors_map_to_bad_request() {
        let errors = [
            ApiError::from(OrderError::InvalidItemType("SUBSCRIPTION".into())),
            ApiError::from(OrderError::EmptyItems),
            ApiError::from(OrderError::MissingField {
                item_type: ItemType::Physical,
                field: "shippingWeight",
            }),
        ];

        for error in errors {
            assert_eq!(error.status_code(), StatusCode::BAD_REQUEST);
        }
    }

    #[test]
    fn test_extractor_errors_are_bad_request() {
        let error = ApiError::BadRequest("Json deserialize error: missing field `type`".into());
        assert_eq!(error.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(error.to_string(), "Json deserialize error: missing field `type`");
    }

    #[test]
    fn test_not_found_errors() {
        assert_eq!(
            ApiError::from(OrderError::OrderNotFound(Uuid::new_v4())).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::from(CatalogError::ProductNotFound(4)).status_code(),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn test_repository_failure_is_server_error() {
        let error = ApiError::from(OrderError::from(anyhow::anyhow!("connection refused")));
        assert_eq!(error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(error.to_string(), "connection refused");
    }
}
