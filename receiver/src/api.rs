//! HTTP endpoints for the datafeed receiver
//!
//! This module provides the axum router for the inbound feed boundary:
//! the feed endpoint itself, the capture/debug endpoint, and a liveness
//! probe.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::{HeaderMap, Method, StatusCode, Uri},
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use cartfeed_core::{decrypt_only, Feed};
use percent_encoding::percent_decode;

use crate::capture::CaptureStore;
use crate::config::ReceiverConfig;

/// POST body field carrying the URL-encoded ciphertext
pub const FEED_FIELD: &str = "FeedData";

/// Fixed token the vendor expects on successful decode-and-process
pub const ACK_TOKEN: &str = "feed.ok";

/// The shared application state
pub struct AppState {
    /// Receiver configuration
    pub config: ReceiverConfig,
}

/// Create a new router with the specified state
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/feed", post(receive_feed).fallback(not_a_post))
        .route("/feed/capture", post(capture_feed).fallback(not_a_post))
        .with_state(state)
}

/// The vendor endpoint contract answers Forbidden to any non-POST
async fn not_a_post() -> Response {
    unauthorized()
}

/// Liveness probe
async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

/// Receive, decrypt and decode one datafeed POST
///
/// Answers the fixed ack token on success and Forbidden when the expected
/// field is absent, matching the vendor's endpoint contract.
async fn receive_feed(State(state): State<Arc<AppState>>, body: Bytes) -> Response {
    let Some(ciphertext) = form_field(&body, FEED_FIELD) else {
        return unauthorized();
    };

    match Feed::from_encrypted(&ciphertext, state.config.feed_key.as_bytes()) {
        Ok(feed) => {
            tracing::info!(transactions = feed.len(), "datafeed decoded");
            process_feed(&feed);
            (StatusCode::OK, ACK_TOKEN).into_response()
        }
        Err(e) => {
            // The core never logs; the boundary does.
            tracing::warn!("datafeed decode failed: {}", e);
            crate::error::ReceiverError::Decode(e).into_response()
        }
    }
}

/// Persist one datafeed POST to disk for later replay
///
/// Writes the raw request representation (when configured), the ciphertext
/// field as received, and the decrypted plaintext, refusing to overwrite a
/// prior capture unless the configuration allows it.
async fn capture_feed(
    State(state): State<Arc<AppState>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let store = CaptureStore::from_config(&state.config);

    if state.config.save_request {
        let repr = format!("{} {}\n{:#?}", method, uri, headers);
        if let Err(e) = store.save_request(&repr) {
            tracing::error!("request capture failed: {}", e);
            return e.into_response();
        }
    }

    let Some(raw_value) = form_field_raw(&body, FEED_FIELD) else {
        return unauthorized();
    };

    let plaintext = match decrypt_only(&url_decode(raw_value), state.config.feed_key.as_bytes()) {
        Ok(plaintext) => plaintext,
        Err(e) => {
            tracing::warn!("capture decrypt failed: {}", e);
            return crate::error::ReceiverError::Decode(e).into_response();
        }
    };

    // The ciphertext file keeps the field exactly as received, still
    // URL-encoded, so a replay can POST it back verbatim.
    match store.save_payload(raw_value, &plaintext) {
        Ok(()) => {
            tracing::info!(dir = %store.dir().display(), "datafeed captured");
            (StatusCode::OK, ACK_TOKEN).into_response()
        }
        Err(e) => {
            tracing::warn!("capture refused: {}", e);
            e.into_response()
        }
    }
}

/// Processing hook for decoded transactions
///
/// Duplicate-transaction and price-verification checks belong here once
/// designed; the decode pipeline deliberately does not implement them.
// TODO: reject duplicate transaction ids and verify item pricing before
// acknowledging the feed.
fn process_feed(feed: &Feed) {
    for tx in &feed.transactions {
        tracing::info!(
            id = %tx.id,
            customer = %tx.customer_id,
            items = tx.items.len(),
            "transaction received"
        );
    }
}

fn unauthorized() -> Response {
    (StatusCode::FORBIDDEN, "Unauthorized request.").into_response()
}

/// Raw (still URL-encoded) value of a form field, if present
///
/// The generic string form extractor cannot be used here: the decoded
/// ciphertext is arbitrary binary, not UTF-8.
fn form_field_raw<'a>(body: &'a [u8], name: &str) -> Option<&'a [u8]> {
    for pair in body.split(|&b| b == b'&') {
        let (key, value) = match pair.iter().position(|&b| b == b'=') {
            Some(i) => (&pair[..i], &pair[i + 1..]),
            None => (pair, &pair[pair.len()..]),
        };
        if url_decode(key) == name.as_bytes() {
            return Some(value);
        }
    }
    None
}

/// Decoded bytes of a form field, if present
fn form_field(body: &[u8], name: &str) -> Option<Vec<u8>> {
    form_field_raw(body, name).map(url_decode)
}

/// Decode one application/x-www-form-urlencoded token to bytes
fn url_decode(input: &[u8]) -> Vec<u8> {
    let unplussed: Vec<u8> = input
        .iter()
        .map(|&b| if b == b'+' { b' ' } else { b })
        .collect();
    percent_decode(&unplussed).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use cartfeed_core::cipher;
    use http_body_util::BodyExt;
    use percent_encoding::{percent_encode, NON_ALPHANUMERIC};
    use tempfile::tempdir;
    use tower::ServiceExt;

    const TEST_KEY: &str = "abc123akp8ak7898a,.aoeueaouaoeuaoeu";

    const MARKUP: &str = "<datafeed><transaction><id>616</id>\
        <transaction_date>2007-05-04 20:53:57</transaction_date>\
        </transaction></datafeed>";

    fn encoded_feed_body(markup: &str, key: &str) -> String {
        let ciphertext = cipher::crypt(markup.as_bytes(), key.as_bytes()).unwrap();
        format!(
            "{}={}",
            FEED_FIELD,
            percent_encode(&ciphertext, NON_ALPHANUMERIC)
        )
    }

    fn test_router(capture_dir: std::path::PathBuf) -> Router {
        let config = ReceiverConfig::for_testing(TEST_KEY, capture_dir);
        create_router(Arc::new(AppState { config }))
    }

    fn form_post(uri: &str, body: String) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/x-www-form-urlencoded")
            .body(Body::from(body))
            .unwrap()
    }

    async fn body_string(response: Response) -> String {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[test]
    fn test_url_decode() {
        assert_eq!(url_decode(b"a+b%2Bc%00"), b"a b+c\x00");
        assert_eq!(
            form_field(b"other=1&FeedData=%FF%00&more=2", FEED_FIELD),
            Some(vec![0xFF, 0x00])
        );
        assert_eq!(form_field(b"other=1", FEED_FIELD), None);
    }

    #[tokio::test]
    async fn test_feed_endpoint_acks() {
        let dir = tempdir().unwrap();
        let app = test_router(dir.path().to_path_buf());

        let response = app
            .oneshot(form_post("/feed", encoded_feed_body(MARKUP, TEST_KEY)))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_string(response).await, ACK_TOKEN);
    }

    #[tokio::test]
    async fn test_feed_endpoint_rejects_missing_field() {
        let dir = tempdir().unwrap();
        let app = test_router(dir.path().to_path_buf());

        let response = app
            .oneshot(form_post("/feed", "SomethingElse=1".to_string()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        assert_eq!(body_string(response).await, "Unauthorized request.");
    }

    #[tokio::test]
    async fn test_feed_endpoint_rejects_wrong_key_ciphertext() {
        let dir = tempdir().unwrap();
        let app = test_router(dir.path().to_path_buf());

        let response = app
            .oneshot(form_post("/feed", encoded_feed_body(MARKUP, "wrong key")))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_capture_endpoint_writes_once() {
        let dir = tempdir().unwrap();
        let app = test_router(dir.path().to_path_buf());

        let response = app
            .clone()
            .oneshot(form_post(
                "/feed/capture",
                encoded_feed_body(MARKUP, TEST_KEY),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        assert_eq!(
            std::fs::read(dir.path().join("test1.plaintext")).unwrap(),
            MARKUP.as_bytes()
        );
        assert!(dir.path().join("test1.encrypted").exists());
        assert!(dir.path().join("test1.request").exists());

        // A second capture under the same name is refused
        let response = app
            .oneshot(form_post(
                "/feed/capture",
                encoded_feed_body(MARKUP, TEST_KEY),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn test_feed_endpoint_rejects_non_post() {
        let dir = tempdir().unwrap();
        let app = test_router(dir.path().to_path_buf());

        let response = app
            .oneshot(Request::builder().uri("/feed").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn test_health() {
        let dir = tempdir().unwrap();
        let app = test_router(dir.path().to_path_buf());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
