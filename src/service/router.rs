use axum::{
    http::{header::AUTHORIZATION, Method, Request, StatusCode},
    Router,
};
use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc,
};
use tower::{Layer, ServiceBuilder};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    normalize_path::{NormalizePath, NormalizePathLayer},
    request_id::{MakeRequestId, RequestId},
    sensitive_headers::SetSensitiveRequestHeadersLayer,
    services::ServeDir,
    timeout::TimeoutLayer,
    trace::{
        DefaultOnBodyChunk, DefaultOnEos, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse,
        TraceLayer,
    },
    LatencyUnit, ServiceBuilderExt,
};
use tracing::Level;

use crate::{
    config::{APIConfig, AllowedOrigins, ServiceConfig},
    errors::AppError,
};

/// Trailing slashes are trimmed before the request reaches the router.
pub type AppRouter = NormalizePath<Router>;

pub fn get_router<S>(config: &APIConfig, state: S, routes: Router<S>) -> AppRouter
where
    S: Send + Sync + Clone + 'static,
{
    let sensitive_headers: Arc<[_]> = vec![AUTHORIZATION].into();
    // Build our middleware stack
    let middleware = ServiceBuilder::new()
        .layer(SetSensitiveRequestHeadersLayer::from_shared(
            sensitive_headers.clone(),
        ))
        .set_x_request_id(CounterRequestId::default())
        // Add high level tracing/logging to all requests
        .layer(
            TraceLayer::new_for_http()
                .on_request(DefaultOnRequest::new())
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .latency_unit(LatencyUnit::Micros)
                        .include_headers(true),
                )
                .on_body_chunk(DefaultOnBodyChunk::new())
                .on_eos(DefaultOnEos::new().level(Level::INFO))
                .on_failure(DefaultOnFailure::new().level(Level::INFO)),
        )
        .sensitive_response_headers(sensitive_headers)
        .layer(cors(config.allowed_origins()))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            config.request_timeout(),
        ))
        .compression()
        .propagate_x_request_id();

    let router = Router::new()
        .merge(routes)
        .nest_service("/static", ServeDir::new(config.static_dir()))
        .fallback(error_404)
        .layer(middleware)
        .with_state(state);

    NormalizePathLayer::trim_trailing_slash().layer(router)
}

fn cors(origins: AllowedOrigins) -> CorsLayer {
    let allow_origin = if origins.is_any() {
        AllowOrigin::any()
    } else {
        AllowOrigin::list(origins.to_headers())
    };
    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
}

#[derive(Clone, Default)]
struct CounterRequestId {
    counter: Arc<AtomicU64>,
}

impl MakeRequestId for CounterRequestId {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<RequestId> {
        self.counter
            .fetch_add(1, Ordering::SeqCst)
            .to_string()
            .parse()
            .ok()
            .map(RequestId::new)
    }
}

async fn error_404() -> AppError {
    AppError::RouteNotFound
}
