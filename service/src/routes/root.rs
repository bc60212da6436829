use axum::{extract::State, http::Uri, response::Response};
use common::models::OutcomeKind;
use tracing::debug;

use crate::state::Services;

use super::respond;

pub async fn not_found(State(services): State<Services>, uri: Uri) -> Response {
    debug!(path = %uri.path(), "No route for path");
    respond(&services.settings, OutcomeKind::NotFound)
}
