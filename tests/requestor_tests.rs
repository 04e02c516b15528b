//! Integration tests for request building, signing, and transport.
//!
//! Requests are sent either to a wiremock server or to an in-memory
//! transport that records what it was asked to send.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use coveapi::auth::{
    compute_signature, HEADER_CONSUMER_KEY, HEADER_NONCE, HEADER_SIGNATURE, HEADER_TIMESTAMP,
};
use coveapi::clients::{HttpError, HttpRequest, HttpResponseError, Transport};
use coveapi::rest::{FilterParams, ResourceLocator};
use coveapi::{Connection, CoveError, Credentials, RequestSigner, SigningError};
use serde_json::json;
use wiremock::matchers::{header_exists, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const APP_ID: &str = "test-app";
const APP_SECRET: &str = "test-secret";
const HOST: &str = "http://api.example.org";

/// Transport that records requests and replies with a fixed outcome.
#[derive(Debug)]
struct RecordingTransport {
    requests: Mutex<Vec<HttpRequest>>,
    outcome: Result<Vec<u8>, HttpResponseError>,
}

impl RecordingTransport {
    fn replying(body: &[u8]) -> Arc<Self> {
        Arc::new(Self {
            requests: Mutex::new(Vec::new()),
            outcome: Ok(body.to_vec()),
        })
    }

    fn failing(error: HttpResponseError) -> Arc<Self> {
        Arc::new(Self {
            requests: Mutex::new(Vec::new()),
            outcome: Err(error),
        })
    }

    fn sent(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    fn sent_urls(&self) -> Vec<String> {
        self.sent().into_iter().map(|r| r.url).collect()
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn send(&self, request: &HttpRequest) -> Result<Vec<u8>, HttpError> {
        self.requests.lock().unwrap().push(request.clone());
        self.outcome.clone().map_err(HttpError::Response)
    }
}

#[derive(Debug)]
struct RejectingSigner;

impl RequestSigner for RejectingSigner {
    fn sign(&self, _: HttpRequest, _: &Credentials) -> Result<HttpRequest, SigningError> {
        Err(SigningError {
            reason: "key revoked".to_string(),
        })
    }
}

fn recording_connection(transport: Arc<RecordingTransport>) -> Connection {
    Connection::connect(APP_ID, APP_SECRET, Some(HOST))
        .unwrap()
        .with_transport(transport)
}

// ============================================================================
// Locator dispatch and canonicalization
// ============================================================================

#[tokio::test]
async fn test_get_by_id_builds_endpoint_url() {
    let transport = RecordingTransport::replying(b"{}");
    let connection = recording_connection(transport.clone());

    connection
        .programs()
        .get(ResourceLocator::Id(1001), &FilterParams::new())
        .await
        .unwrap();

    assert_eq!(
        transport.sent_urls(),
        ["http://api.example.org/cove/v1/programs/1001/"]
    );
}

#[tokio::test]
async fn test_get_absolute_uri_ignores_own_host() {
    let transport = RecordingTransport::replying(b"{}");
    let connection = recording_connection(transport.clone());

    let locator: ResourceLocator = "http://other.host/path".parse().unwrap();
    connection
        .videos()
        .get(locator, &FilterParams::new())
        .await
        .unwrap();

    assert_eq!(transport.sent_urls(), ["http://other.host/path"]);
}

#[tokio::test]
async fn test_get_relative_path_joins_host() {
    let transport = RecordingTransport::replying(b"{}");
    let connection = recording_connection(transport.clone());

    let locator: ResourceLocator = "/cove/v1/programs/1001".parse().unwrap();
    connection
        .programs()
        .get(locator, &FilterParams::new())
        .await
        .unwrap();

    assert_eq!(
        transport.sent_urls(),
        ["http://api.example.org/cove/v1/programs/1001"]
    );
}

#[tokio::test]
async fn test_filter_query_is_identical_for_any_insertion_order() {
    let transport = RecordingTransport::replying(b"{}");
    let connection = recording_connection(transport.clone());
    let programs = connection.programs();

    let forward = FilterParams::new()
        .with("a", "1")
        .with("b", "2")
        .with("filter_title", "hello world");
    let backward = FilterParams::new()
        .with("filter_title", "hello world")
        .with("b", "2")
        .with("a", "1");

    programs.filter(&forward).await.unwrap();
    programs.filter(&backward).await.unwrap();

    let expected = "http://api.example.org/cove/v1/programs/?a=1&b=2&filter_title=hello+world";
    assert_eq!(transport.sent_urls(), [expected, expected]);
}

#[tokio::test]
async fn test_deleted_since_uses_graveyard_endpoint() {
    let transport = RecordingTransport::replying(br#"{"results": []}"#);
    let connection = recording_connection(transport.clone());

    let since = Utc.with_ymd_and_hms(2011, 6, 1, 12, 30, 0).unwrap();
    connection.graveyard().deleted_since_time(since).await.unwrap();

    assert_eq!(
        transport.sent_urls(),
        ["http://api.example.org/cove/v1/graveyard/?deleted_since=2011-06-01+12%3A30%3A00"]
    );
}

#[tokio::test]
async fn test_deleted_since_and_filter_build_the_same_request() {
    let transport = RecordingTransport::replying(b"{}");
    let connection = recording_connection(transport.clone());
    let graveyard = connection.graveyard();
    let params = FilterParams::new().with("deleted_since", "2011-01-01");

    graveyard.filter(&params).await.unwrap();
    graveyard.deleted_since(&params).await.unwrap();

    let urls = transport.sent_urls();
    assert_eq!(urls[0], urls[1]);
}

// ============================================================================
// Signing
// ============================================================================

#[tokio::test]
async fn test_signature_covers_the_exact_canonical_url() {
    let transport = RecordingTransport::replying(b"{}");
    let connection = recording_connection(transport.clone());

    let params = FilterParams::new().with("z", "last").with("a", "first one");
    connection.categories().filter(&params).await.unwrap();

    let sent = transport.sent();
    let request = &sent[0];
    assert_eq!(
        request.url,
        "http://api.example.org/cove/v1/categories/?a=first+one&z=last"
    );

    let timestamp = request.header(HEADER_TIMESTAMP).unwrap();
    let nonce = request.header(HEADER_NONCE).unwrap();
    assert_eq!(request.header(HEADER_CONSUMER_KEY), Some(APP_ID));

    let expected =
        compute_signature("GET", &request.url, timestamp, APP_ID, nonce, APP_SECRET).unwrap();
    assert_eq!(request.header(HEADER_SIGNATURE), Some(expected.as_str()));
}

#[tokio::test]
async fn test_signing_failure_is_surfaced_and_nothing_is_sent() {
    let transport = RecordingTransport::replying(b"{}");
    let connection = recording_connection(transport.clone()).with_signer(Arc::new(RejectingSigner));

    let result = connection.groups().filter(&FilterParams::new()).await;

    match result {
        Err(CoveError::Signing(e)) => assert_eq!(e.reason, "key revoked"),
        other => panic!("expected signing error, got {other:?}"),
    }
    assert!(transport.sent().is_empty());
}

#[tokio::test]
async fn test_signature_covers_the_normalized_url() {
    let transport = RecordingTransport::replying(b"{}");
    let connection = recording_connection(transport.clone());

    let locator: ResourceLocator = "/cove/v1/programs/a b/../1/".parse().unwrap();
    connection
        .programs()
        .get(locator, &FilterParams::new())
        .await
        .unwrap();

    let sent = transport.sent();
    let request = &sent[0];
    assert_eq!(request.url, "http://api.example.org/cove/v1/programs/1/");

    let expected = compute_signature(
        "GET",
        "http://api.example.org/cove/v1/programs/1/",
        request.header(HEADER_TIMESTAMP).unwrap(),
        APP_ID,
        request.header(HEADER_NONCE).unwrap(),
        APP_SECRET,
    )
    .unwrap();
    assert_eq!(request.header(HEADER_SIGNATURE), Some(expected.as_str()));
}

// ============================================================================
// Error propagation
// ============================================================================

#[tokio::test]
async fn test_transport_failure_propagates_unchanged() {
    let error = HttpResponseError {
        code: 503,
        message: "Service Unavailable".to_string(),
    };
    let transport = RecordingTransport::failing(error.clone());
    let connection = recording_connection(transport);

    let result = connection.programs().filter(&FilterParams::new()).await;

    match result {
        Err(CoveError::Http(HttpError::Response(e))) => assert_eq!(e, error),
        other => panic!("expected transport error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_invalid_json_is_a_decode_error() {
    let transport = RecordingTransport::replying(b"<html>not json</html>");
    let connection = recording_connection(transport);

    let result = connection.videos().filter(&FilterParams::new()).await;
    assert!(matches!(result, Err(CoveError::Decode(_))));
}

// ============================================================================
// End-to-end over HTTP
// ============================================================================

#[tokio::test]
async fn test_filter_against_mock_server() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/cove/v1/programs/"))
        .and(query_param("filter_title", "Nature Now"))
        .and(query_param("limit_stop", "5"))
        .and(header_exists(HEADER_SIGNATURE))
        .and(header_exists(HEADER_TIMESTAMP))
        .and(header_exists(HEADER_CONSUMER_KEY))
        .and(header_exists(HEADER_NONCE))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "count": 1,
            "results": [{"title": "Nature Now", "resource_uri": "/cove/v1/programs/1001/"}]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let connection = Connection::connect(APP_ID, APP_SECRET, Some(mock_server.uri().as_str())).unwrap();
    let params = FilterParams::new()
        .with("limit_stop", 5)
        .with("filter_title", "Nature Now");

    let response = connection.programs().filter(&params).await.unwrap();

    assert_eq!(response["count"], 1);
    assert_eq!(response["results"][0]["title"], "Nature Now");

    let received = mock_server.received_requests().await.unwrap();
    assert_eq!(
        received[0].url.query(),
        Some("filter_title=Nature+Now&limit_stop=5")
    );
}

#[tokio::test]
async fn test_get_follows_resource_uri_from_response() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/cove/v1/programs/1001/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"program_id": 1001})))
        .expect(2)
        .mount(&mock_server)
        .await;

    let connection = Connection::connect(APP_ID, APP_SECRET, Some(mock_server.uri().as_str())).unwrap();
    let programs = connection.programs();

    let by_id = programs
        .get(ResourceLocator::Id(1001), &FilterParams::new())
        .await
        .unwrap();
    let locator: ResourceLocator = "/cove/v1/programs/1001/".parse().unwrap();
    let by_path = programs.get(locator, &FilterParams::new()).await.unwrap();

    assert_eq!(by_id, by_path);
    assert_eq!(by_id["program_id"], 1001);
}

#[tokio::test]
async fn test_signed_url_is_the_url_received() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/cove/v1/programs/1/"))
        .and(query_param("q", "a*b~c d"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"program_id": 1})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let connection = Connection::connect(APP_ID, APP_SECRET, Some(mock_server.uri().as_str())).unwrap();
    let programs = connection.programs();
    let locator: ResourceLocator = "/cove/v1/programs/a b/../1/".parse().unwrap();
    let params = FilterParams::new().with("q", "a*b~c d");

    let signed_url = programs.build_url(&locator, &params).unwrap();
    programs.get(locator, &params).await.unwrap();

    let received = mock_server.received_requests().await.unwrap();
    let wire = &received[0].url;
    assert_eq!(
        signed_url,
        format!("{}{}?{}", mock_server.uri(), wire.path(), wire.query().unwrap())
    );
    assert_eq!(wire.path(), "/cove/v1/programs/1/");
    assert_eq!(received[0].url.query(), Some("q=a%2Ab~c+d"));
}

#[tokio::test]
async fn test_non_success_status_is_surfaced_with_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/cove/v1/videos/9/"))
        .respond_with(ResponseTemplate::new(404).set_body_string(r#"{"error":"Not found"}"#))
        .mount(&mock_server)
        .await;

    let connection = Connection::connect(APP_ID, APP_SECRET, Some(mock_server.uri().as_str())).unwrap();
    let result = connection
        .videos()
        .get(ResourceLocator::Id(9), &FilterParams::new())
        .await;

    match result {
        Err(CoveError::Http(HttpError::Response(e))) => {
            assert_eq!(e.code, 404);
            assert_eq!(e.message, r#"{"error":"Not found"}"#);
        }
        other => panic!("expected 404 response error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_server_error_is_not_retried() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/cove/v1/producers/"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&mock_server)
        .await;

    let connection = Connection::connect(APP_ID, APP_SECRET, Some(mock_server.uri().as_str())).unwrap();
    let result = connection.producers().filter(&FilterParams::new()).await;

    assert!(matches!(
        result,
        Err(CoveError::Http(HttpError::Response(HttpResponseError { code: 500, .. })))
    ));
}
