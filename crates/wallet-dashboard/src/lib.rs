//! Thin HTTP collaborator in front of `wallet-core`: JSON-RPC forwarding,
//! static asset serving, and the two wallet endpoints.

pub mod config;
pub mod descriptor_cache;
pub mod error;
pub mod richlist;
pub mod routes;
pub mod rpc;
pub mod state;

use axum::routing::{get, post};
use axum::Router;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

pub use state::AppState;

/// Builds the full Axum router: the wallet endpoints, the generic RPC
/// passthrough, and static file serving under `config().static_dir`.
pub fn app(state: AppState) -> Router {
    let static_dir = state.config().static_dir.clone();

    Router::new()
        .route("/api/wallet/generate", post(routes::wallet::generate))
        .route("/api/wallet/newaddress", get(routes::wallet::newaddress))
        .route("/api/rpc/:method", post(routes::rpc_proxy::call))
        .fallback_service(ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
