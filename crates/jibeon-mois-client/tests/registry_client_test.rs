//! End-to-end registry client tests over the live reqwest transport.
//!
//! Uses wiremock for reachable endpoints and closed ports for
//! unreachable ones. The client is blocking, so each test drives the
//! mock server from an explicit multi-thread runtime and issues requests
//! from the test thread.

use std::time::Duration;

use wiremock::matchers::{method, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use jibeon_mois_client::{ClientError, FetchPlan, RegistryClient, RegistryConfig, Scheme};

const ONE_ROW: &str = r#"{"StanReginCd":[
    {"head":[{"totalCount":1},{"numOfRows":10,"pageNo":1}]},
    {"row":[{"region_cd":"1168010300","locatadd_nm":"서울특별시 강남구 개포동","locallow_nm":""}]}
]}"#;

fn runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .expect("build runtime")
}

fn config(https: &str, http: &str) -> RegistryConfig {
    RegistryConfig {
        https_endpoint: https.parse().expect("https endpoint"),
        http_endpoint: http.parse().expect("http endpoint"),
        service_key: "test-key".to_string(),
        timeout_secs: 2,
    }
}

fn fast_plan() -> FetchPlan {
    FetchPlan {
        attempts: 2,
        backoff: Duration::ZERO,
    }
}

#[test]
fn fetch_returns_rows_from_secure_endpoint() {
    let rt = runtime();
    let server = rt.block_on(MockServer::start());
    rt.block_on(
        Mock::given(method("GET"))
            .and(query_param("locatadd_nm", "개포동"))
            .and(query_param("type", "JSON"))
            .respond_with(ResponseTemplate::new(200).set_body_string(ONE_ROW))
            .mount(&server),
    );

    let client = RegistryClient::new(config(&server.uri(), "http://127.0.0.1:1"))
        .unwrap()
        .with_plan(fast_plan());

    let outcome = client.fetch("개포동", 1, 10).unwrap();
    assert_eq!(outcome.scheme, Scheme::Https);
    assert_eq!(outcome.rows.len(), 1);
    assert_eq!(outcome.rows[0].region_cd, "1168010300");
    assert_eq!(outcome.head.total_count, Some(1));
}

#[test]
fn unreachable_secure_endpoint_falls_back() {
    let rt = runtime();
    let server = rt.block_on(MockServer::start());
    rt.block_on(
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string(ONE_ROW))
            .mount(&server),
    );

    // Secure slot points at a closed port; the fallback slot serves.
    let client = RegistryClient::new(config("http://127.0.0.1:1", &server.uri()))
        .unwrap()
        .with_plan(fast_plan());

    let outcome = client.fetch("개포동", 1, 10).unwrap();
    assert_eq!(outcome.scheme, Scheme::Http);
    assert_eq!(outcome.rows.len(), 1);
}

#[test]
fn server_error_on_secure_endpoint_falls_back() {
    let rt = runtime();
    let broken = rt.block_on(MockServer::start());
    let healthy = rt.block_on(MockServer::start());
    rt.block_on(
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&broken),
    );
    rt.block_on(
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string(ONE_ROW))
            .mount(&healthy),
    );

    let client = RegistryClient::new(config(&broken.uri(), &healthy.uri()))
        .unwrap()
        .with_plan(fast_plan());

    let outcome = client.fetch("개포동", 1, 10).unwrap();
    assert_eq!(outcome.scheme, Scheme::Http);
}

#[test]
fn malformed_body_on_secure_endpoint_falls_back() {
    let rt = runtime();
    let broken = rt.block_on(MockServer::start());
    let healthy = rt.block_on(MockServer::start());
    rt.block_on(
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
            .mount(&broken),
    );
    rt.block_on(
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string(ONE_ROW))
            .mount(&healthy),
    );

    let client = RegistryClient::new(config(&broken.uri(), &healthy.uri()))
        .unwrap()
        .with_plan(fast_plan());

    let outcome = client.fetch("개포동", 1, 10).unwrap();
    assert_eq!(outcome.scheme, Scheme::Http);
}

#[test]
fn exhausting_both_endpoints_surfaces_fetch_failure() {
    let client = RegistryClient::new(config("http://127.0.0.1:1", "http://127.0.0.1:2"))
        .unwrap()
        .with_plan(fast_plan());

    let err = client.fetch("개포동", 1, 10).unwrap_err();
    assert!(matches!(
        err,
        ClientError::FetchExhausted { attempts: 2, .. }
    ));
}

#[test]
fn service_key_is_sent_percent_encoded() {
    let rt = runtime();
    let server = rt.block_on(MockServer::start());
    rt.block_on(
        Mock::given(method("GET"))
            .and(query_param("serviceKey", "abc+def=="))
            .respond_with(ResponseTemplate::new(200).set_body_string(ONE_ROW))
            .mount(&server),
    );

    let mut cfg = config(&server.uri(), "http://127.0.0.1:1");
    cfg.service_key = "abc+def==".to_string();
    let client = RegistryClient::new(cfg).unwrap().with_plan(fast_plan());

    // The key goes out as abc%2Bdef%3D%3D and decodes back to the raw
    // form on the server side.
    let outcome = client.fetch("개포동", 1, 10).unwrap();
    assert_eq!(outcome.rows.len(), 1);
}
