//! Calculator API Server
//!
//! Exact decimal arithmetic (add, subtract, multiply, divide) over HTTP.
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod error;
mod handlers;

#[cfg(test)]
mod test_utils;


use adapters::{InMemoryCalculationRepository, NoopObserver, TracingObserver};
use app::CalculatorService;
use config::Config;
use domain::ports::CalculatorInputPort;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub calculator: Arc<dyn CalculatorInputPort>,
    pub default_division_scale: i64,
}

/// Build the HTTP router for the given state
pub fn build_router(state: AppState) -> Router {
    let calculator_routes = Router::new()
        .route("/add", post(handlers::add))
        .route("/subtract", post(handlers::subtract))
        .route("/multiply", post(handlers::multiply))
        .route("/divide", post(handlers::divide))
        .route("/health", get(handlers::health));

    Router::new()
        .nest("/api/v1/calculator", calculator_routes)
        // Middleware
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,calculator_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Calculator API...");

    // Load configuration
    let config = Config::from_env();

    // Create adapters and the use case
    let calculations = Arc::new(InMemoryCalculationRepository::new());
    let calculator: Arc<dyn CalculatorInputPort> = if config.trace_calculations {
        Arc::new(CalculatorService::new(
            Arc::new(TracingObserver),
            calculations,
        ))
    } else {
        tracing::info!("Calculation tracing disabled");
        Arc::new(CalculatorService::new(Arc::new(NoopObserver), calculations))
    };

    let state = AppState {
        calculator,
        default_division_scale: config.default_division_scale,
    };

    let app = build_router(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
