use axum::extract::{MatchedPath, Request};
use axum::http::{HeaderName, Method};
use axum::middleware;
use axum::routing::{get, post};
use axum::Router;
use tower::ServiceBuilder;
use tower_http::cors::{self, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info_span;

use crate::core::state::AppState;
use crate::routes::{auth, configs};
use crate::utils;

pub(crate) fn routes(state: AppState) -> Router {
    let protected = Router::new()
        .route("/api/v1/auth/getConfig/{id}", get(configs::get))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            utils::auth::authorize,
        ));

    Router::new()
        .route("/", get(|| async { "Hello, World!" }))
        .route("/api/v1/auth/login", post(auth::login))
        .merge(protected)
        .with_state(state)
        .route_layer(
            ServiceBuilder::new()
                .layer(
                    TraceLayer::new_for_http().make_span_with(|request: &Request<_>| {
                        let matched_path = request
                            .extensions()
                            .get::<MatchedPath>()
                            .map(MatchedPath::as_str);

                        info_span!(
                            "request",
                            method = ?request.method(),
                            matched_path,
                        )
                    }),
                )
                .layer(
                    CorsLayer::new()
                        .allow_methods([Method::GET, Method::POST])
                        .allow_origin(cors::Any)
                        .expose_headers([HeaderName::from_static(utils::auth::TOKEN_HEADER)]),
                ),
        )
}
