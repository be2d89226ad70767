// src/routes.rs

use axum::{
    Router,
    http::{HeaderValue, Method, header},
    routing::{get, post},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{
    handlers::{grade, health},
    state::AppState,
};

/// Builds the CORS layer from the configured origins, dropping unparsable ones.
fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE])
}

/// Assembles the main application router.
///
/// * Grading routes under `/api/grade`.
/// * Liveness probes at `/test` and `/api/health`.
/// * Applies global middleware (Trace, CORS).
pub fn create_router(state: AppState) -> Router {
    let cors = cors_layer(&state.config.cors_origins);

    let grade_routes = Router::new()
        .route("/", post(grade::grade))
        .route("/report", post(grade::download_report));

    Router::new()
        .route("/test", get(health::health_check))
        .route("/api/health", get(health::health_check))
        .nest("/api/grade", grade_routes)
        // Global Middleware (applied from outside in)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use axum::{
        body::{Body, to_bytes},
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    fn app() -> Router {
        create_router(AppState::new(Config::default()))
    }

    fn grade_request(uri: &str, body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_probe() {
        let response = app()
            .oneshot(Request::builder().uri("/test").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn empty_key_is_bad_request() {
        let response = app()
            .oneshot(grade_request(
                "/api/grade",
                serde_json::json!({ "answer_key": "\n\n", "submissions": "Alice\n1) a" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["detail"], "Answer key has no recognizable answers");
    }

    #[tokio::test]
    async fn missing_field_is_bad_request_with_detail() {
        for uri in ["/api/grade", "/api/grade/report"] {
            let response = app()
                .oneshot(grade_request(uri, serde_json::json!({ "answer_key": "1) A" })))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::BAD_REQUEST);

            let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
            let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
            assert!(
                json["detail"]
                    .as_str()
                    .is_some_and(|d| d.contains("submissions"))
            );
        }
    }

    #[tokio::test]
    async fn report_is_an_attachment() {
        let response = app()
            .oneshot(grade_request(
                "/api/grade/report",
                serde_json::json!({ "answer_key": "AB", "submissions": "Alice\nAB" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_DISPOSITION],
            "attachment; filename=\"grading-report.txt\""
        );

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let text = String::from_utf8(body.to_vec()).unwrap();
        assert!(text.contains("Name: Alice"));
        assert!(text.contains("Score: 2/2 (100%)"));
    }
}
