use axum::{extract::State, Json};
use std::sync::Arc;

use crate::app::AppState;
use crate::domain::Proposal;
use crate::error::ApiResult;

/// List proposals (`GetProposals`)
///
/// Deliberate deviation: the controller this route replaces returned a null
/// collection, serialized as a `null` body. This handler always answers with
/// a JSON array instead. No proposal source is wired in yet, so the array is
/// empty.
pub async fn get_proposals(
    State(_state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<Proposal>>> {
    let proposals: Vec<Proposal> = Vec::new();

    tracing::debug!(count = proposals.len(), "Listing proposals");

    Ok(Json(proposals))
}

#[cfg(test)]
mod tests {
    use crate::app::tests::test_state;
    use crate::routes::api_router;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    fn get(uri: &str) -> Request<Body> {
        Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    #[tokio::test]
    async fn main_returns_empty_array() {
        let app = api_router().with_state(test_state());

        let resp = app.oneshot(get("/Main")).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            resp.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/json"
        );

        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&bytes[..], b"[]");
    }

    #[tokio::test]
    async fn main_ignores_query_string() {
        let app = api_router().with_state(test_state());

        let resp = app.oneshot(get("/Main?page=2")).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);

        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body, serde_json::json!([]));
    }

    #[tokio::test]
    async fn main_only_answers_get() {
        let app = api_router().with_state(test_state());
        let req = Request::builder()
            .method("POST")
            .uri("/Main")
            .body(Body::empty())
            .unwrap();

        let resp = app.oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
