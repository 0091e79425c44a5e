// ============================================================================
// HTTP API - actix-web routes over the catalog and order service
// ============================================================================

mod errors;
mod handlers;

use actix_web::web;
use std::sync::Arc;

use crate::domain::catalog::CatalogStore;
use crate::domain::order::OrderService;
use crate::metrics::{self, Metrics};

pub use errors::ApiError;

/// Shared by every worker through `web::Data`.
pub struct AppState {
    pub orders: OrderService,
    pub catalog: CatalogStore,
    pub metrics: Arc<Metrics>,
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    // Extractor failures render the same JSON error body as handler errors
    cfg.app_data(web::JsonConfig::default().error_handler(|err, _req| {
        tracing::debug!(error = %err, "Rejected request body");
        ApiError::BadRequest(err.to_string()).into()
    }))
    .app_data(web::PathConfig::default().error_handler(|err, _req| {
        tracing::debug!(error = %err, "Rejected path parameter");
        ApiError::BadRequest(err.to_string()).into()
    }))
    .service(
        web::resource("/products")
            .route(web::get().to(handlers::list_products))
            .route(web::post().to(handlers::add_product)),
    )
    .service(
        web::resource("/product/{id}")
            .route(web::get().to(handlers::get_product))
            .route(web::put().to(handlers::update_product))
            .route(web::delete().to(handlers::delete_product)),
    )
    .service(web::resource("/orders").route(web::post().to(handlers::create_order)))
    .service(web::resource("/order/{id}").route(web::get().to(handlers::get_order)))
    .service(web::resource("/metrics").route(web::get().to(metrics::metrics_handler)))
    .service(web::resource("/health").route(web::get().to(metrics::health_handler)));
}
