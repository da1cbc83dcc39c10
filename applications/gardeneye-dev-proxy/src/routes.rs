use axum::{middleware, routing::any, Router};
use tower_http::{
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

use crate::allow_host;
use crate::forward::{self, AppState};

pub fn create_router(state: AppState) -> Router {
    // Everything outside /api serves the built frontend, with index.html as
    // the SPA fallback so client-side routes deep-link correctly.
    let static_dir = &state.config.static_dir;
    let spa = ServeDir::new(static_dir)
        .fallback(ServeFile::new(static_dir.join("index.html")));

    Router::new()
        // Both /api itself and everything beneath it are forwarded.
        .route("/api", any(forward::forward))
        .route("/api/{*rest}", any(forward::forward))
        .fallback_service(spa)
        .with_state(state.clone())
        .layer(middleware::from_fn_with_state(state, allow_host::allow_host))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
