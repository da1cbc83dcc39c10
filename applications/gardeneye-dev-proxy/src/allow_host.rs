use axum::{
    extract::{Request, State},
    http::{header, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use tracing::warn;

use crate::config::{Config, Mode};
use crate::forward::AppState;

/// Middleware restricting which `Host` values the dev server answers.
/// Development mode accepts everything; otherwise only localhost and the
/// configured proxy host get through.
pub async fn allow_host(State(state): State<AppState>, req: Request, next: Next) -> Response {
    let host = req
        .headers()
        .get(header::HOST)
        .and_then(|h| h.to_str().ok())
        .unwrap_or("");

    if host_allowed(&state.config, host) {
        next.run(req).await
    } else {
        warn!(%host, "rejected request for disallowed host");
        (StatusCode::FORBIDDEN, "host not allowed").into_response()
    }
}

pub fn host_allowed(config: &Config, host: &str) -> bool {
    if config.mode == Mode::Development {
        return true;
    }
    let name = hostname(host);
    name == "localhost" || name == config.proxy_host
}

/// Strip the port from a `Host` header value, handling bracketed IPv6.
fn hostname(host: &str) -> &str {
    if let Some(rest) = host.strip_prefix('[') {
        return rest.split(']').next().unwrap_or(rest);
    }
    host.split(':').next().unwrap_or(host)
}
