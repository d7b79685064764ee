//! Route construction for the hero service.
//!
//! One router covers every deployment shape: callers pass the set of
//! endpoints to expose, and requests outside that set fall through to the
//! 404 fallback.

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Endpoints the service can expose.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    /// `/static`: the in-memory record set.
    Static,
    /// `/dynamic`: records fetched from the database.
    Dynamic,
}

impl Endpoint {
    /// Every endpoint, in mount order.
    pub const ALL: [Endpoint; 2] = [Endpoint::Static, Endpoint::Dynamic];

    /// Request path this endpoint is mounted at.
    pub fn path(self) -> &'static str {
        match self {
            Endpoint::Static => "/static",
            Endpoint::Dynamic => "/dynamic",
        }
    }
}

/// Builds the service router exposing exactly the given endpoints.
///
/// Duplicates in `enabled` are mounted once. Requests outside the enabled
/// set receive a 404 from the fallback handler.
pub fn router(enabled: &[Endpoint]) -> Router<AppState> {
    let mut router = Router::new();
    let mut mounted: Vec<Endpoint> = Vec::new();

    for &endpoint in enabled {
        if mounted.contains(&endpoint) {
            continue;
        }
        router = match endpoint {
            Endpoint::Static => router.route(endpoint.path(), get(handlers::static_heroes)),
            Endpoint::Dynamic => router.route(endpoint.path(), get(handlers::dynamic_heroes)),
        };
        mounted.push(endpoint);
    }

    router.fallback(handlers::not_found)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use axum::response::Response;
    use common::errors::{AppError, AppResult};
    use common::models::Hero;
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use super::*;
    use crate::service::HeroServiceTrait;

    /// Stub service resolving to a fixed row set.
    struct FixedRows(Vec<Hero>);

    #[async_trait]
    impl HeroServiceTrait for FixedRows {
        async fn fetch_heroes(&self) -> AppResult<Vec<Hero>> {
            Ok(self.0.clone())
        }
    }

    /// Stub service that always fails.
    struct FailingService;

    #[async_trait]
    impl HeroServiceTrait for FailingService {
        async fn fetch_heroes(&self) -> AppResult<Vec<Hero>> {
            Err(AppError::DatabaseQuery("connection refused".to_string()))
        }
    }

    fn app(enabled: &[Endpoint], service: Arc<dyn HeroServiceTrait>) -> Router {
        router(enabled).with_state(AppState { service })
    }

    async fn send(app: Router, path: &str) -> Response {
        app.oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn body_string(response: Response) -> String {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_static_endpoint_returns_record_set() {
        let app = app(&Endpoint::ALL, Arc::new(FixedRows(vec![])));
        let response = send(app, "/static").await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/json"
        );
        assert_eq!(
            body_string(response).await,
            r#"[{"id":1,"name":"Static Hero"}]"#
        );
    }

    #[tokio::test]
    async fn test_repeated_static_requests_are_byte_identical() {
        let app = app(&Endpoint::ALL, Arc::new(FixedRows(vec![])));

        let first = body_string(send(app.clone(), "/static").await).await;
        let second = body_string(send(app, "/static").await).await;
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_dynamic_endpoint_returns_rows() {
        let service = Arc::new(FixedRows(vec![Hero::new(2, "Dynamic Hero")]));
        let app = app(&Endpoint::ALL, service);
        let response = send(app, "/dynamic").await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/json"
        );
        assert_eq!(
            body_string(response).await,
            r#"[{"id":2,"name":"Dynamic Hero"}]"#
        );
    }

    #[tokio::test]
    async fn test_dynamic_query_failure_maps_to_500() {
        let app = app(&Endpoint::ALL, Arc::new(FailingService));
        let response = send(app, "/dynamic").await;

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: serde_json::Value =
            serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(body["error"]["code"], "DATABASE_QUERY_ERROR");
    }

    #[tokio::test]
    async fn test_unknown_path_returns_404() {
        let app = app(&Endpoint::ALL, Arc::new(FixedRows(vec![])));
        let response = send(app, "/missing").await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body: serde_json::Value =
            serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_static_only_router_serves_no_dynamic() {
        let app = app(&[Endpoint::Static], Arc::new(FixedRows(vec![])));

        let response = send(app.clone(), "/static").await;
        assert_eq!(response.status(), StatusCode::OK);

        let response = send(app, "/dynamic").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_duplicate_endpoints_are_mounted_once() {
        let app = app(
            &[Endpoint::Static, Endpoint::Static],
            Arc::new(FixedRows(vec![])),
        );
        let response = send(app, "/static").await;
        assert_eq!(response.status(), StatusCode::OK);
    }
}
