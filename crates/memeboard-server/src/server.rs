use tokio::net::TcpListener;

use crate::config::ServerConfig;
use crate::error::{ServerError, ServerResult};
use crate::router::build_router;
use crate::state::AppState;

/// Memeboard HTTP server.
pub struct MemeboardServer {
    state: AppState,
}

impl MemeboardServer {
    /// A server over a fresh, empty board.
    pub fn new(config: ServerConfig) -> Self {
        Self::with_state(AppState::from_config(config))
    }

    pub fn with_state(state: AppState) -> Self {
        Self { state }
    }

    pub fn config(&self) -> &ServerConfig {
        &self.state.config
    }

    /// Build the router (useful for testing).
    pub fn router(&self) -> axum::Router {
        build_router(self.state.clone())
    }

    /// Start serving requests.
    pub async fn serve(self) -> ServerResult<()> {
        let addr = self.state.config.bind_addr;
        let app = build_router(self.state);
        let listener = TcpListener::bind(addr).await?;
        tracing::info!(%addr, "memeboard server listening");
        axum::serve(listener, app)
            .await
            .map_err(|e| ServerError::Internal(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use serde_json::Value;
    use tower::util::ServiceExt;

    async fn send(app: &axum::Router, req: Request<Body>) -> (StatusCode, Value) {
        let response = app.clone().oneshot(req).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, body)
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn create(who: &str, data: &str, timestamp: i64) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/v1/posts")
            .header("content-type", "application/json")
            .header("x-principal", who)
            .body(Body::from(
                serde_json::json!({ "data": data, "timestamp": timestamp }).to_string(),
            ))
            .unwrap()
    }

    fn upvote(who: &str, id: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(format!("/v1/posts/{id}/upvote"))
            .header("x-principal", who)
            .body(Body::empty())
            .unwrap()
    }

    fn app() -> axum::Router {
        MemeboardServer::new(ServerConfig::default()).router()
    }

    #[test]
    fn server_construction() {
        let server = MemeboardServer::new(ServerConfig::default());
        assert_eq!(server.config().bind_addr, "127.0.0.1:8420".parse().unwrap());
    }

    #[tokio::test]
    async fn health_and_info() {
        let app = app();
        let (status, body) = send(&app, get("/v1/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");

        let (status, body) = send(&app, get("/v1/info")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["posts"], 0);
    }

    #[tokio::test]
    async fn create_then_get() {
        let app = app();
        let (status, body) = send(&app, create("alice", "hello", 100)).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["id"], "1");

        let (status, post) = send(&app, get("/v1/posts/1")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(post["author"], "alice");
        assert_eq!(post["timestamp"], "100");
        assert_eq!(post["upvotes"], 0);
    }

    #[tokio::test]
    async fn invalid_create_is_bad_request() {
        let app = app();
        let (status, body) = send(&app, create("alice", "", 100)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().contains("invalid argument"));

        let (status, _) = send(&app, create("alice", "meme", -5)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn upvote_flow_status_codes() {
        let app = app();
        send(&app, create("alice", "meme", 100)).await;

        let (status, body) = send(&app, upvote("bob", "1")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["ok"], true);

        let (status, _) = send(&app, upvote("bob", "1")).await;
        assert_eq!(status, StatusCode::CONFLICT);

        let (status, _) = send(&app, upvote("bob", "99")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn list_posts_paginates_and_sorts() {
        let app = app();
        for ts in [100, 200, 300] {
            send(&app, create("alice", "meme", ts)).await;
        }

        let (status, body) =
            send(&app, get("/v1/posts?start=150&end=300&page=1&page_size=10")).await;
        assert_eq!(status, StatusCode::OK);
        let stamps: Vec<&str> = body
            .as_array()
            .unwrap()
            .iter()
            .map(|p| p["timestamp"].as_str().unwrap())
            .collect();
        assert_eq!(stamps, ["300", "200"]);

        let (status, _) =
            send(&app, get("/v1/posts?start=0&end=300&page=1&page_size=11&sort_by=UPVOTES")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn list_on_empty_board_skips_validation() {
        let app = app();
        let (status, body) = send(&app, get("/v1/posts?start=0&end=1&page=0&page_size=0")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, serde_json::json!([]));
    }

    #[tokio::test]
    async fn missing_query_field_is_json_error() {
        let app = app();
        send(&app, create("alice", "meme", 100)).await;
        let (status, body) = send(&app, get("/v1/posts?start=0&end=300&page=1")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().starts_with("malformed request"));
    }

    #[tokio::test]
    async fn malformed_body_is_json_error() {
        let app = app();
        let req = Request::builder()
            .method("POST")
            .uri("/v1/posts")
            .header("content-type", "application/json")
            .header("x-principal", "alice")
            .body(Body::from(r#"{"data": "meme", "timestamp": "#))
            .unwrap();
        let (status, body) = send(&app, req).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].is_string());

        let untyped = Request::builder()
            .method("POST")
            .uri("/v1/posts")
            .body(Body::from(r#"{"data":"meme","timestamp":1}"#))
            .unwrap();
        let (status, body) = send(&app, untyped).await;
        assert_eq!(status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn anonymous_writes_can_be_disabled() {
        let config = ServerConfig {
            allow_anonymous_writes: false,
            ..ServerConfig::default()
        };
        let app = MemeboardServer::new(config).router();
        let req = Request::builder()
            .method("POST")
            .uri("/v1/posts")
            .header("content-type", "application/json")
            .body(Body::from(r#"{"data":"meme","timestamp":1}"#))
            .unwrap();
        let (status, _) = send(&app, req).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        let (status, _) = send(&app, create("alice", "meme", 1)).await;
        assert_eq!(status, StatusCode::CREATED);
    }
}
