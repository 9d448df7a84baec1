//! Request/response logging middleware.

use std::convert::Infallible;
use std::io;
use std::net::SocketAddr;

use axum::{
    body::Body,
    extract::ConnectInfo,
    http::{Request, Response, StatusCode},
    routing::get,
    Router,
};
use tower::{service_fn, Layer, ServiceExt};

use logutils::config::HttpLogConfig;
use logutils::http::HttpLogLayer;
use logutils::{Level, Value};

mod common;
use common::memory_logger;

fn app(layer: HttpLogLayer) -> Router {
    Router::new()
        .route("/", get(|| async { "hello" }))
        .route("/health/live", get(|| async { "ok" }))
        .route("/missing", get(|| async { (StatusCode::NOT_FOUND, "missing") }))
        .route("/boom", get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }))
        .layer(layer)
}

fn get_request(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn test_request_and_response_are_logged() {
    let (handler, logger) = memory_logger(Level::Debug);

    let res = app(HttpLogLayer::new(logger))
        .oneshot(get_request("/?page=2"))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let entries = handler.entries();
    assert_eq!(entries.len(), 2);

    let request = &entries[0];
    assert_eq!(request.level, Level::Info);
    assert_eq!(request.message, "request");
    assert_eq!(
        request.fields.names().collect::<Vec<_>>(),
        vec!["url", "method", "remoteAddr"]
    );
    assert_eq!(request.fields.get("url"), Some(&Value::from("/?page=2")));
    assert_eq!(request.fields.get("method"), Some(&Value::from("GET")));
    assert_eq!(request.fields.get("remoteAddr"), Some(&Value::from("")));

    let response = &entries[1];
    assert_eq!(response.level, Level::Info);
    assert_eq!(response.message, "response");
    assert_eq!(response.fields.get("status"), Some(&Value::from(200u16)));
    assert_eq!(response.fields.get("size"), Some(&Value::from(5u64)));
    assert!(response.fields.contains("duration"));
    assert!(response.fields.contains("url"));
}

#[tokio::test]
async fn test_response_level_follows_status() {
    let (handler, logger) = memory_logger(Level::Debug);
    let app = app(HttpLogLayer::new(logger));

    app.clone().oneshot(get_request("/missing")).await.unwrap();
    app.oneshot(get_request("/boom")).await.unwrap();

    let entries = handler.entries();
    assert_eq!(entries.len(), 4);
    assert_eq!(entries[1].level, Level::Warn);
    assert_eq!(entries[1].fields.get("status"), Some(&Value::from(404u16)));
    assert_eq!(entries[3].level, Level::Error);
    assert_eq!(entries[3].fields.get("status"), Some(&Value::from(500u16)));
}

#[tokio::test]
async fn test_excluded_prefix_is_served_but_not_logged() {
    let (handler, logger) = memory_logger(Level::Debug);
    let config = HttpLogConfig {
        exclude_path_prefixes: vec!["/health".into()],
    };

    let res = app(HttpLogLayer::from_config(logger, &config))
        .oneshot(get_request("/health/live"))
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    assert!(handler.is_empty());
}

#[tokio::test]
async fn test_remote_addr_from_connect_info() {
    let (handler, logger) = memory_logger(Level::Debug);
    let addr: SocketAddr = "10.0.0.7:51234".parse().unwrap();

    let mut req = get_request("/");
    req.extensions_mut().insert(ConnectInfo(addr));
    app(HttpLogLayer::new(logger)).oneshot(req).await.unwrap();

    assert_eq!(
        handler.entries()[0].fields.get("remoteAddr"),
        Some(&Value::from("10.0.0.7:51234"))
    );
}

#[tokio::test]
async fn test_context_from_extensions_takes_precedence() {
    let (layer_handler, layer_logger) = memory_logger(Level::Debug);
    let (request_handler, request_logger) = memory_logger(Level::Debug);

    let mut req = get_request("/");
    req.extensions_mut()
        .insert(request_logger.with_field("requestId", "abc-123"));
    app(HttpLogLayer::new(layer_logger)).oneshot(req).await.unwrap();

    assert!(layer_handler.is_empty());
    let entries = request_handler.entries();
    assert_eq!(entries.len(), 2);
    for entry in entries {
        assert_eq!(entry.fields.get("requestId"), Some(&Value::from("abc-123")));
    }
}

#[tokio::test]
async fn test_level_filter_applies() {
    let (handler, logger) = memory_logger(Level::Warn);
    let app = app(HttpLogLayer::new(logger));

    app.clone().oneshot(get_request("/")).await.unwrap();
    app.oneshot(get_request("/missing")).await.unwrap();

    let entries = handler.entries();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].message, "response");
    assert_eq!(entries[0].level, Level::Warn);
}

#[tokio::test]
async fn test_inner_error_is_logged_and_propagated() {
    let (handler, logger) = memory_logger(Level::Debug);
    let svc = HttpLogLayer::new(logger).layer(service_fn(|_req: Request<Body>| async {
        Err::<Response<Body>, _>(io::Error::other("upstream gone"))
    }));

    let err = svc.oneshot(get_request("/")).await.unwrap_err();
    assert_eq!(err.to_string(), "upstream gone");

    let entries = handler.entries();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[1].level, Level::Error);
    assert_eq!(entries[1].fields.get("error"), Some(&Value::from("upstream gone")));
}

#[tokio::test]
async fn test_plain_tower_service() {
    let (handler, logger) = memory_logger(Level::Debug);
    let svc = HttpLogLayer::new(logger).layer(service_fn(|_req: Request<Body>| async {
        let res = Response::builder()
            .status(StatusCode::CREATED)
            .body(Body::from("created"))
            .unwrap();
        Ok::<_, Infallible>(res)
    }));

    let mut req = Request::builder()
        .method("POST")
        .uri("/items")
        .body(Body::empty())
        .unwrap();
    req.extensions_mut().insert(ConnectInfo(SocketAddr::from(([127, 0, 0, 1], 9000))));
    let res = svc.oneshot(req).await.unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);

    let entries = handler.entries();
    assert_eq!(entries[0].fields.get("method"), Some(&Value::from("POST")));
    assert_eq!(entries[0].fields.get("remoteAddr"), Some(&Value::from("127.0.0.1:9000")));
    assert_eq!(entries[1].level, Level::Info);
    assert_eq!(entries[1].fields.get("size"), Some(&Value::from(7u64)));
}

#[tokio::test]
async fn test_absolute_form_uri_logs_path_and_query() {
    let (handler, logger) = memory_logger(Level::Debug);

    app(HttpLogLayer::new(logger))
        .oneshot(get_request("http://example.com/?page=2"))
        .await
        .unwrap();

    let entries = handler.entries();
    assert_eq!(entries.len(), 2);
    for entry in entries {
        assert_eq!(entry.fields.get("url"), Some(&Value::from("/?page=2")));
    }
}

#[tokio::test]
async fn test_logger_from_extensions_takes_precedence() {
    let (layer_handler, layer_logger) = memory_logger(Level::Debug);
    let (request_handler, request_logger) = memory_logger(Level::Debug);

    let mut req = get_request("/");
    req.extensions_mut().insert(request_logger);
    app(HttpLogLayer::new(layer_logger)).oneshot(req).await.unwrap();

    assert!(layer_handler.is_empty());
    assert_eq!(request_handler.len(), 2);
}

#[tokio::test]
async fn test_context_wins_over_logger_in_extensions() {
    let (logger_handler, request_logger) = memory_logger(Level::Debug);
    let (context_handler, context_logger) = memory_logger(Level::Debug);
    let (_, layer_logger) = memory_logger(Level::Debug);

    let mut req = get_request("/");
    req.extensions_mut().insert(request_logger);
    req.extensions_mut().insert(context_logger.context());
    app(HttpLogLayer::new(layer_logger)).oneshot(req).await.unwrap();

    assert!(logger_handler.is_empty());
    assert_eq!(context_handler.len(), 2);
}
