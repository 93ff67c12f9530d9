//! Route table and middleware wiring.

use std::time::Duration;

use axum::{
    Router,
    routing::{delete, get, post},
};
use http::Request;
use metrics_exporter_prometheus::PrometheusHandle;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::Level;

use crate::handlers::{AppState, entries, items, tokens, users};
use crate::middleware::{AuthLayer, RequestIdLayer};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build the complete application router.
///
/// Middleware order matters: the request id must exist before tracing
/// records it, and auth runs innermost so rejected requests still carry a
/// request id and a trace span.
pub fn app(
    state: AppState,
    cors_allow_origins: Option<&str>,
    request_timeout: Duration,
    metrics: Option<PrometheusHandle>,
) -> Router {
    let auth = AuthLayer::new(state.galaxy.clone());

    let mut router = Router::new()
        .route("/", get(|| async { "galaxy-gateway" }))
        .route("/health", get(|| async { VERSION }))
        .route("/user/login", post(users::login))
        .route("/user/create", post(users::create_user))
        .route("/user/get/{id}", get(users::get_user))
        .route("/user/update", post(users::update_user))
        .route("/token/renew", post(tokens::renew_access_token))
        .route("/item/create", post(items::create_item))
        .route("/item/get/{id}", get(items::get_item))
        .route("/item/list", post(items::list_items))
        .route("/item/update", post(items::update_item))
        .route("/item/delete/{id}", delete(items::delete_item))
        .route("/entry/create", post(entries::create_entry))
        .route("/entry/get/{id}", get(entries::get_entry))
        .route("/entry/list", post(entries::list_entries))
        .route("/entry/list/user", post(entries::list_entries_by_user))
        .route("/entry/list/item", post(entries::list_entries_by_item))
        .with_state(state);

    if let Some(handle) = metrics {
        router = router.route(
            "/metrics",
            get(move || {
                let handle = handle.clone();
                async move { handle.render() }
            }),
        );
    }

    let middleware = ServiceBuilder::new()
        .layer(RequestIdLayer::new())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|req: &Request<_>| {
                    tracing::info_span!(
                        "request",
                        method = %req.method(),
                        uri = %req.uri(),
                        request_id = tracing::field::Empty,
                        user_id = tracing::field::Empty,
                    )
                })
                .on_response(tower_http::trace::DefaultOnResponse::new().level(Level::DEBUG)),
        )
        .layer(TimeoutLayer::with_status_code(
            http::StatusCode::REQUEST_TIMEOUT,
            request_timeout,
        ))
        .layer(build_cors(cors_allow_origins))
        .layer(auth);

    router.layer(middleware)
}

fn build_cors(origins: Option<&str>) -> CorsLayer {
    let cors = match origins {
        Some(o) if o.trim() == "*" => CorsLayer::permissive(),
        Some(o) => {
            let origins: Vec<_> = o.split(',').filter_map(|s| s.trim().parse().ok()).collect();
            CorsLayer::new().allow_origin(origins)
        }
        None => CorsLayer::permissive(),
    };

    cors.allow_headers(Any)
        .expose_headers(["x-request-id".parse().expect("valid header name")])
        .allow_methods(Any)
        .max_age(Duration::from_secs(3600))
}
