use actix_web::{web, HttpResponse};
use prometheus::{Encoder, TextEncoder};

use crate::api::{ApiError, AppState};

/// Prometheus text exposition of the service registry
pub async fn metrics_handler(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let encoder = TextEncoder::new();
    let metric_families = state.metrics.registry().gather();

    let mut buffer = Vec::new();
    encoder
        .encode(&metric_families, &mut buffer)
        .map_err(|e| ApiError::Internal(e.into()))?;

    Ok(HttpResponse::Ok()
        .content_type("text/plain; version=0.0.4")
        .body(buffer))
}

pub async fn health_handler(state: web::Data<AppState>) -> HttpResponse {
    let store = state.orders.repository().check_health().await;
    let healthy = store.status.is_healthy();

    let body = serde_json::json!({
        "status": if healthy { "healthy" } else { "unhealthy" },
        "service": "order-service",
        "components": [store],
    });

    if healthy {
        HttpResponse::Ok().json(body)
    } else {
        HttpResponse::ServiceUnavailable().json(body)
    }
}
