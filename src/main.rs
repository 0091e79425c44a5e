use actix_web::{web, App, HttpServer};
use clap::Parser;
use std::sync::Arc;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod api;
mod config;
mod domain;
mod health;
mod metrics;
mod store;

use api::AppState;
use config::{Config, StoreKind};
use domain::catalog::CatalogStore;
use domain::order::{LoggingGiftCardNotifier, OrderService};
use store::{InMemoryOrderRepository, OrderRepository, ScyllaOrderRepository};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // RUST_LOG wins over the configured filter
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_thread_ids(true))
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_filter)),
        )
        .init();

    tracing::info!("🚀 Starting order service");

    // === 1. Metrics ===
    let metrics = Arc::new(metrics::Metrics::new()?);
    tracing::info!("📊 Metrics registry created with {} metrics", metrics.registry().gather().len());

    // === 2. Order store ===
    let repository: Arc<dyn OrderRepository> = match config.store {
        StoreKind::Memory => Arc::new(InMemoryOrderRepository::new()),
        StoreKind::Scylla => Arc::new(
            ScyllaOrderRepository::connect(&config.scylla_node, &config.scylla_keyspace).await?,
        ),
    };
    tracing::info!(store = %config.store, "Order store ready");

    // === 3. Services ===
    let state = web::Data::new(AppState {
        orders: OrderService::new(repository, Arc::new(LoggingGiftCardNotifier), metrics.clone()),
        catalog: CatalogStore::seeded(),
        metrics,
    });

    // === 4. HTTP ===
    tracing::info!("🌐 Listening on http://{}", config.bind);

    HttpServer::new(move || App::new().app_data(state.clone()).configure(api::configure))
        .bind(config.bind)?
        .run()
        .await?;

    tracing::info!("Order service stopped");
    Ok(())
}
