use std::time::Duration;

use axum::{error_handling::HandleErrorLayer, extract::DefaultBodyLimit, BoxError, Router};
use common::models::OutcomeKind;
use tower::{timeout::TimeoutLayer, ServiceBuilder};
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::{
    routes::{self, respond},
    state::Services,
};

pub fn create_app(services: Services, request_timeout: Duration) -> Router {
    let settings = services.settings;

    Router::new()
        .merge(routes::webhook::create_route())
        .fallback(routes::root::not_found)
        .with_state(services)
        .layer(DefaultBodyLimit::max(settings.max_body_bytes))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(HandleErrorLayer::new(move |err: BoxError| async move {
                    warn!(kind = OutcomeKind::Timeout.as_str(), "errorHandler: {}", err);
                    respond(&settings, OutcomeKind::Timeout)
                }))
                .layer(TimeoutLayer::new(request_timeout)),
        )
}
