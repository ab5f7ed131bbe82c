use crate::config::Config;
use crate::handlers;
use crate::AppError;
use axum::response::{IntoResponse, Response};
use axum::{middleware, Router};
use bytes::Bytes;
use http::{HeaderMap, Request, StatusCode};
use std::time::Duration;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::classify::ServerErrorsFailureClass;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

pub fn init(config: &Config) -> Router {
    with_layers(Router::new().fallback(handlers::exchange), config)
}

fn with_layers(router: Router, config: &Config) -> Router {
    let trace = TraceLayer::new_for_http()
        .make_span_with(|_request: &Request<axum::body::Body>| {
            tracing::debug_span!("http-request")
        })
        .on_request(|request: &Request<axum::body::Body>, _span: &Span| {
            tracing::debug!("started {} {}", request.method(), request.uri().path())
        })
        .on_response(|response: &Response, latency: Duration, _span: &Span| {
            tracing::debug!("response {} generated in {:?}", response.status(), latency)
        })
        .on_body_chunk(|chunk: &Bytes, _latency: Duration, _span: &Span| {
            tracing::debug!("sending {} bytes", chunk.len())
        })
        .on_eos(|_trailers: Option<&HeaderMap>, stream_duration: Duration, _span: &Span| {
            tracing::debug!("stream closed after {:?}", stream_duration)
        })
        .on_failure(|error: ServerErrorsFailureClass, latency: Duration, _span: &Span| {
            tracing::error!("something went wrong: {error:?} latency: {latency:?}")
        });
    router
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(trace)
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            config.request_timeout,
        ))
        .layer(middleware::map_response(timeout_as_json))
}

// TimeoutLayer отвечает пустым телом, заменяем его на JSON
async fn timeout_as_json(response: Response) -> Response {
    if response.status() == StatusCode::REQUEST_TIMEOUT {
        return AppError::Timeout.into_response();
    }
    response
}

fn handle_panic(err: Box<dyn std::any::Any + Send + 'static>) -> Response {
    let details = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        String::from("unknown panic")
    };
    AppError::Internal(format!("handler panicked: {details}")).into_response()
}
