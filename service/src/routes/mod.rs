pub mod root;
pub mod webhook;

use axum::{
    http::{HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use common::{models::OutcomeKind, util::state::WebhookSettings};

pub const OUTCOME_HEADER: &str = "x-webhook-outcome";

/// Plain-text response carrying the legacy body for `kind`. The status is
/// always 200 unless strict status codes are enabled.
pub fn respond(settings: &WebhookSettings, kind: OutcomeKind) -> Response {
    let status = if settings.strict_status_codes {
        StatusCode::from_u16(kind.strict_status()).unwrap_or(StatusCode::OK)
    } else {
        StatusCode::OK
    };
    let mut response = (status, kind.legacy_body()).into_response();
    if settings.expose_outcome {
        response.headers_mut().insert(OUTCOME_HEADER, HeaderValue::from_static(kind.as_str()));
    }
    response
}
