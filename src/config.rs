use clap::{Parser, ValueEnum};
use std::net::SocketAddr;

// ============================================================================
// Service Configuration
// ============================================================================
//
// Every flag can also be set through its environment variable.
//
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StoreKind {
    Memory,
    Scylla,
}

impl std::fmt::Display for StoreKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreKind::Memory => write!(f, "memory"),
            StoreKind::Scylla => write!(f, "scylla"),
        }
    }
}

#[derive(Debug, Clone, Parser)]
#[command(name = "order-service", about = "Product catalog and order placement service")]
pub struct Config {
    /// Address the HTTP server binds to
    #[arg(long, env = "ORDER_SERVICE_BIND", default_value = "0.0.0.0:8080")]
    pub bind: SocketAddr,

    /// Where orders are persisted
    #[arg(long, env = "ORDER_SERVICE_STORE", value_enum, default_value_t = StoreKind::Memory)]
    pub store: StoreKind,

    #[arg(long, env = "SCYLLA_NODE", default_value = "127.0.0.1:9042")]
    pub scylla_node: String,

    #[arg(long, env = "SCYLLA_KEYSPACE", default_value = "orders_ks")]
    pub scylla_keyspace: String,

    /// Fallback log filter when RUST_LOG is not set
    #[arg(long, env = "ORDER_SERVICE_LOG", default_value = "info,order_service=debug")]
    pub log_filter: String,
}
