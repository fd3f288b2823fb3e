use axum::http::{self, Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{app, ErrorBody, Metadata};
use tower::ServiceExt;

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_bytes(response: axum::response::Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

fn json_request(uri: &str, body: &str) -> Request<String> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(body.to_string())
        .unwrap()
}

// --- health ---

#[tokio::test]
async fn health_returns_ok() {
    let resp = app()
        .oneshot(Request::builder().uri("/health").body(String::new()).unwrap())
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_bytes(resp).await;
    assert_eq!(&body[..], b"OK");
}

#[tokio::test]
async fn health_rejects_post() {
    let resp = app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/health")
                .body(String::new())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
}

// --- metadata ---

#[tokio::test]
async fn metadata_for_youtube_url() {
    let resp = app()
        .oneshot(json_request(
            "/api/metadata",
            r#"{"url":"https://www.youtube.com/watch?v=q7HnfHFJCEc"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let metadata: Metadata = body_json(resp).await;
    assert_eq!(metadata.video_id, "q7HnfHFJCEc");
    assert_eq!(metadata.provider, "youtube");
    assert_eq!(metadata.url, "https://www.youtube.com/watch?v=q7HnfHFJCEc");
}

#[tokio::test]
async fn metadata_bad_url_returns_400() {
    let resp = app()
        .oneshot(json_request("/api/metadata", r#"{"url":"ftp://nowhere"}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = body_bytes(resp).await;
    assert_eq!(&body[..], br#"{"error":"bad url"}"#);
    let parsed: ErrorBody = serde_json::from_slice(&body).unwrap();
    assert_eq!(parsed.error, "bad url");
}

#[tokio::test]
async fn metadata_missing_url_returns_422() {
    let resp = app()
        .oneshot(json_request("/api/metadata", r#"{"link":"x"}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn metadata_without_content_type_is_rejected() {
    let resp = app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/metadata")
                .body(r#"{"url":"https://www.youtube.com/watch?v=x"}"#.to_string())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
}
