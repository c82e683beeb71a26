//! Axum router configuration with middleware.
//!
//! Routes: `GET /` and `GET /health`. Unknown paths return 404 and other
//! methods on known paths return 405, both as `{"detail": ...}`.
//! Middleware: CORS, bare-`OPTIONS` routing, tracing. Preflight requests are
//! answered by the CORS layer and never reach a handler.

use std::sync::Arc;

use axum::middleware;
use axum::routing::{get, MethodRouter};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::http::cors::{cors_layer, route_bare_options, BareOptions};
use crate::http::error;
use crate::http::handlers;
use crate::state::AppState;

/// Build the complete router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = cors_layer(&state.config.cors);
    let cors_config = Arc::new(state.config.cors.clone());

    let routes: Router = Router::new()
        .route("/", static_get(get(handlers::root::root)))
        .route("/health", static_get(get(handlers::health::health_check)))
        .fallback(error::not_found)
        .with_state(state);

    let bare = BareOptions {
        routes: routes.clone(),
        cors: cors_config,
    };

    routes
        .layer(cors)
        .layer(middleware::from_fn_with_state(bare, route_bare_options))
        .layer(TraceLayer::new_for_http())
}

/// Attach the 405 fallback to a GET-only route.
fn static_get(route: MethodRouter<AppState>) -> MethodRouter<AppState> {
    route.fallback(error::method_not_allowed)
}
