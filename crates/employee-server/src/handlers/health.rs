//! Health check

use crate::error::ApiError;
use crate::AppState;
use axum::{extract::State, http::Uri, Json};
use serde_json::{json, Value};

pub async fn health(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let employees = state.service.count().await?;
    Ok(Json(json!({
        "status": "ok",
        "employees": employees,
    })))
}

/// Fallback for unmatched routes
pub async fn not_found(uri: Uri) -> ApiError {
    ApiError::not_found(format!("No route for {}", uri.path()))
}

#[cfg(test)]
mod tests {
    use crate::services::EmployeeService;
    use crate::storage::MemoryStore;
    use crate::{build_router, AppState};
    use axum::{body::Body, http::Request, http::StatusCode};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn app() -> axum::Router {
        let service = Arc::new(EmployeeService::new(Arc::new(MemoryStore::new())));
        build_router(AppState { service })
    }

    #[tokio::test]
    async fn health_reports_count() {
        let req = Request::builder()
            .uri("/health")
            .body(Body::empty())
            .unwrap();
        let resp = app().oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);

        let body = axum::body::to_bytes(resp.into_body(), 10_000)
            .await
            .unwrap();
        let parsed: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(parsed["status"], "ok");
        assert_eq!(parsed["employees"], 0);
    }

    #[tokio::test]
    async fn unknown_route_returns_json_404() {
        let req = Request::builder()
            .uri("/nonexistent")
            .body(Body::empty())
            .unwrap();
        let resp = app().oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let body = axum::body::to_bytes(resp.into_body(), 10_000)
            .await
            .unwrap();
        let parsed: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(parsed["status"], 404);
        assert_eq!(parsed["error"], "Not Found");
    }
}
