//! HTTP gateway exposing cart mutations, with observability.
//!
//! Provides the add-to-cart endpoint backed by the mutation coordinator,
//! with structured logging (tracing) and Prometheus metrics.

pub mod config;
pub mod error;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use metrics_exporter_prometheus::PrometheusHandle;
use orchestrator::{
    CartStore, CustomerDirectory, InMemoryCartStore, InMemoryCustomerDirectory,
    InMemoryProductCatalog, MutationCoordinator, ProductCatalog, RestCartStore,
    RestCustomerDirectory, RestProductCatalog,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use config::Config;
use routes::cart::AppState;

/// Creates the Axum application router with all routes and shared state.
pub fn create_app<D, C, S>(
    state: Arc<AppState<D, C, S>>,
    metrics_handle: PrometheusHandle,
) -> Router
where
    D: CustomerDirectory + 'static,
    C: ProductCatalog + 'static,
    S: CartStore + 'static,
{
    let metrics_router = Router::new()
        .route("/metrics", get(routes::metrics::get))
        .with_state(metrics_handle);

    Router::new()
        .route("/health", get(routes::health::check))
        .route("/cart/products", post(routes::cart::add_products::<D, C, S>))
        .with_state(state)
        .merge(metrics_router)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}

/// Creates application state backed by in-memory collaborators.
///
/// Also returns handles to the collaborators so callers can register
/// customers, stock products, and simulate outages.
pub fn create_default_state() -> (
    Arc<AppState<InMemoryCustomerDirectory, InMemoryProductCatalog, InMemoryCartStore>>,
    InMemoryCustomerDirectory,
    InMemoryProductCatalog,
    InMemoryCartStore,
) {
    let directory = InMemoryCustomerDirectory::new();
    let catalog = InMemoryProductCatalog::new();
    let cart_store = InMemoryCartStore::new();

    let coordinator =
        MutationCoordinator::new(directory.clone(), catalog.clone(), cart_store.clone());
    let state = Arc::new(AppState { coordinator });

    (state, directory, catalog, cart_store)
}

/// Creates application state wired to the REST collaborators named in the
/// configuration.
pub fn create_rest_state(
    config: &Config,
) -> Result<Arc<AppState<RestCustomerDirectory, RestProductCatalog, RestCartStore>>, reqwest::Error>
{
    let (directory, catalog, cart_store) = config.rest_config().build()?;
    let coordinator = MutationCoordinator::new(directory, catalog, cart_store)
        .with_validation_concurrency(config.validation_concurrency);
    Ok(Arc::new(AppState { coordinator }))
}
