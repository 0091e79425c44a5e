use actix_web::{web, HttpResponse};
use uuid::Uuid;

use super::{ApiError, AppState};
use crate::domain::catalog::Product;
use crate::domain::order::OrderRequest;

// ============================================================================
// Catalog Handlers
// ============================================================================

pub async fn list_products(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(state.catalog.get_all().await)
}

pub async fn get_product(
    state: web::Data<AppState>,
    id: web::Path<i32>,
) -> Result<HttpResponse, ApiError> {
    let product = state.catalog.get_by_id(id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(product))
}

pub async fn add_product(state: web::Data<AppState>, product: web::Json<Product>) -> HttpResponse {
    state.catalog.add(product.into_inner()).await;
    HttpResponse::Ok().finish()
}

pub async fn update_product(
    state: web::Data<AppState>,
    id: web::Path<i32>,
    product: web::Json<Product>,
) -> Result<HttpResponse, ApiError> {
    let updated = state
        .catalog
        .update(id.into_inner(), product.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(updated))
}

pub async fn delete_product(state: web::Data<AppState>, id: web::Path<i32>) -> HttpResponse {
    state.catalog.delete(id.into_inner()).await;
    HttpResponse::Ok().finish()
}

// ============================================================================
// Order Handlers
// ============================================================================

pub async fn create_order(
    state: web::Data<AppState>,
    request: web::Json<OrderRequest>,
) -> Result<HttpResponse, ApiError> {
    let response = state.orders.place_order(&request).await?;
    Ok(HttpResponse::Ok().json(response))
}

pub async fn get_order(
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let response = state.orders.find_order_response(id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(response))
}

// ============================================================================
// Tests
// ============================================================================
