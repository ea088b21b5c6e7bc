use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Json};
use memeboard_query::RangeQuery;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::error::ServerResult;
use crate::state::AppState;

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct CreatePostRequest {
    pub data: String,
    pub timestamp: i64,
}

/// Health check handler.
pub async fn health_handler() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

/// Info handler.
pub async fn info_handler(State(state): State<AppState>) -> ServerResult<Json<serde_json::Value>> {
    Ok(Json(json!({
        "name": "memeboard-server",
        "version": env!("CARGO_PKG_VERSION"),
        "posts": state.board.post_count()?,
    })))
}

pub async fn create_post_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<CreatePostRequest>, JsonRejection>,
) -> ServerResult<impl IntoResponse> {
    let Json(req) = payload?;
    let author = state.writer(&headers).await?;
    let id = state.board.post_meme(&req.data, req.timestamp, &author)?;
    Ok((StatusCode::CREATED, Json(json!({ "id": id }))))
}

pub async fn upvote_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> ServerResult<Json<serde_json::Value>> {
    let voter = state.writer(&headers).await?;
    let ok = state.board.upvote(&id, &voter)?;
    Ok(Json(json!({ "ok": ok })))
}

pub async fn get_post_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ServerResult<impl IntoResponse> {
    let body = state.board.get_post(&id)?;
    Ok(json_text(body))
}

pub async fn list_posts_handler(
    State(state): State<AppState>,
    query: Result<Query<RangeQuery>, QueryRejection>,
) -> ServerResult<impl IntoResponse> {
    let Query(query) = query?;
    let body = state.board.query(&query)?;
    Ok(json_text(body))
}

/// Already-rendered JSON text with the matching content type.
fn json_text(body: String) -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "application/json")], body)
}
