//! Stand-in for the server the probe checks.
//!
//! Serves `GET /health` and `POST /api/metadata` on the same paths as the
//! real service so the probe can be exercised end to end.

use axum::{http::StatusCode, routing::get, routing::post, Json, Router};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;

/// Body accepted by `POST /api/metadata`.
#[derive(Debug, Deserialize)]
pub struct MetadataRequest {
    pub url: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Metadata {
    pub url: String,
    pub video_id: String,
    pub provider: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorBody {
    pub error: String,
}

pub fn app() -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/metadata", post(metadata))
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn health() -> &'static str {
    "OK"
}

async fn metadata(
    Json(input): Json<MetadataRequest>,
) -> Result<Json<Metadata>, (StatusCode, Json<ErrorBody>)> {
    match youtube_video_id(&input.url) {
        Some(video_id) => {
            tracing::info!(%video_id, "metadata lookup");
            Ok(Json(Metadata {
                video_id: video_id.to_string(),
                url: input.url,
                provider: "youtube".to_string(),
            }))
        }
        None => {
            tracing::info!(url = %input.url, "rejecting metadata request");
            Err((
                StatusCode::BAD_REQUEST,
                Json(ErrorBody {
                    error: "bad url".to_string(),
                }),
            ))
        }
    }
}

/// Extract the `v` query parameter from a YouTube watch URL.
pub fn youtube_video_id(url: &str) -> Option<&str> {
    let rest = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))?;
    let rest = rest.strip_prefix("www.").unwrap_or(rest);
    let query = rest.strip_prefix("youtube.com/watch?")?;
    query
        .split('&')
        .find_map(|pair| pair.strip_prefix("v="))
        .filter(|id| !id.is_empty())
}
