pub mod health;
pub mod proposals;

use axum::{
    extract::Request,
    http::{uri::PathAndQuery, HeaderMap, Uri},
    routing::get,
    Router,
};
use std::sync::Arc;

use crate::app::AppState;
use crate::error::ApiError;
use crate::middleware::RequestIdExt;

const HEALTH: &str = "/health";
/// Named after the controller the route is served for
const MAIN: &str = "/Main";

const ROUTES: [&str; 2] = [HEALTH, MAIN];

/// Build the API router with all routes
pub fn api_router() -> Router<Arc<AppState>> {
    Router::new()
        .route(HEALTH, get(health::health_check))
        .route(MAIN, get(proposals::get_proposals))
        .fallback(not_found)
}

/// Route paths match ignoring ASCII case and one or more trailing slashes.
/// A matching path is rewritten to its registered spelling; the query is kept.
pub async fn canonical_path(mut req: Request) -> Request {
    if let Some(uri) = canonical_uri(req.uri()) {
        *req.uri_mut() = uri;
    }
    req
}

fn canonical_uri(uri: &Uri) -> Option<Uri> {
    let path = uri.path();
    let trimmed = match path.trim_end_matches('/') {
        "" => "/",
        trimmed => trimmed,
    };

    let route = ROUTES
        .iter()
        .find(|route| route.eq_ignore_ascii_case(trimmed))?;
    if *route == path {
        return None;
    }

    let path_and_query = match uri.query() {
        Some(query) => format!("{route}?{query}"),
        None => route.to_string(),
    };

    let mut parts = uri.clone().into_parts();
    parts.path_and_query = Some(path_and_query.parse::<PathAndQuery>().ok()?);
    Uri::from_parts(parts).ok()
}

async fn not_found(uri: Uri, headers: HeaderMap) -> ApiError {
    tracing::debug!(
        path = %uri.path(),
        request_id = headers.request_id().unwrap_or("-"),
        "No route matched"
    );

    ApiError::NotFound(format!("No route for {}", uri.path()))
}
