use std::sync::Arc;

use axum::{
    body::Body,
    extract::{Request, State},
    http::{HeaderMap, Uri},
    response::Response,
};
use tracing::debug;

use crate::config::Config;
use crate::error::{ProxyError, Result};

/// Matches the request size the original setup allowed through.
const MAX_REQUEST_BODY: usize = 10 * 1024 * 1024;

/// Shared state: startup configuration plus the reused upstream client.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub client: reqwest::Client,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self> {
        Ok(Self {
            config: Arc::new(config),
            client: upstream_client()?,
        })
    }
}

/// Client for the backend upstream. Certificate validation is disabled
/// because local dev backends run with self-signed certs; never reuse this
/// outside the dev server.
fn upstream_client() -> Result<reqwest::Client> {
    Ok(reqwest::Client::builder()
        .danger_accept_invalid_certs(true)
        .build()?)
}

/// Hop-by-hop headers that must not be forwarded in either direction.
/// `host` is excluded too so the client derives it from the upstream URL
/// (the "changeOrigin" behavior).
const SKIPPED_HEADERS: &[&str] = &[
    "connection",
    "keep-alive",
    "proxy-authenticate",
    "proxy-authorization",
    "te",
    "trailer",
    "transfer-encoding",
    "upgrade",
    "host",
];

fn is_skipped(name: &str) -> bool {
    SKIPPED_HEADERS.iter().any(|h| name.eq_ignore_ascii_case(h))
}

/// Upstream URL for a request: backend base plus the original path and
/// query, unmodified.
pub fn target_url(backend_url: &str, uri: &Uri) -> String {
    let path_and_query = uri
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or_else(|| uri.path());
    format!("{backend_url}{path_and_query}")
}

/// Forward an `/api` request to the backend and relay the response.
/// Stateless per request; failures surface to the caller as 502.
pub async fn forward(State(state): State<AppState>, req: Request) -> Result<Response> {
    let (parts, body) = req.into_parts();

    let url = target_url(&state.config.backend_url(), &parts.uri);
    debug!(method = %parts.method, %url, "forwarding request");

    let bytes = axum::body::to_bytes(body, MAX_REQUEST_BODY)
        .await
        .map_err(|e| ProxyError::RequestBody(e.to_string()))?;

    let mut upstream_headers = HeaderMap::new();
    for (name, value) in &parts.headers {
        if !is_skipped(name.as_str()) {
            upstream_headers.append(name.clone(), value.clone());
        }
    }

    let upstream = state
        .client
        .request(parts.method, url.as_str())
        .headers(upstream_headers)
        .body(bytes)
        .send()
        .await?;

    let mut builder = Response::builder().status(upstream.status());
    if let Some(headers) = builder.headers_mut() {
        for (name, value) in upstream.headers() {
            if !is_skipped(name.as_str()) {
                headers.append(name.clone(), value.clone());
            }
        }
    }

    let body = upstream.bytes().await?;
    builder
        .body(Body::from(body))
        .map_err(|e| ProxyError::UpstreamResponse(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_url_preserves_path_and_query() {
        let uri: Uri = "/api/readings?mac=aa%3Abb&period=3600".parse().unwrap();
        assert_eq!(
            target_url("http://myhost:9000", &uri),
            "http://myhost:9000/api/readings?mac=aa%3Abb&period=3600"
        );
    }

    #[test]
    fn target_url_without_query() {
        let uri: Uri = "/api/sensors".parse().unwrap();
        assert_eq!(
            target_url("http://myhost:9000", &uri),
            "http://myhost:9000/api/sensors"
        );
    }

    #[test]
    fn hop_by_hop_and_host_headers_are_skipped() {
        assert!(is_skipped("Host"));
        assert!(is_skipped("connection"));
        assert!(is_skipped("Transfer-Encoding"));
        assert!(!is_skipped("content-type"));
        assert!(!is_skipped("authorization"));
    }
}
