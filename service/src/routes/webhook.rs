use axum::{
    body::Body,
    extract::{FromRequest, Multipart, State},
    http::{header, HeaderMap, HeaderValue, Method, Request},
    response::Response,
    routing::any,
    Router,
};
use bytes::BytesMut;
use common::{
    error::WebhookError,
    models::{FormFile, OutcomeKind, WebhookForm},
    processing::process_form_data,
    util::{consts::WEBHOOK_PATH, mime},
};
use tracing::{debug, warn};

use crate::state::Services;

use super::respond;

pub fn create_route() -> Router<Services> {
    Router::new().route(WEBHOOK_PATH, any(handle_webhook))
}

pub fn is_post_method(method: &Method) -> bool {
    *method == Method::POST
}

pub fn is_multipart_form_data(headers: &HeaderMap) -> bool {
    mime::is_multipart_form_data(headers.get(header::CONTENT_TYPE).map(HeaderValue::as_bytes))
}

pub fn error_handler(err: &WebhookError) {
    warn!(kind = err.kind().as_str(), "errorHandler: {}", err);
}

#[tracing::instrument(skip(services, request), fields(method = %request.method()))]
pub async fn handle_webhook(State(services): State<Services>, request: Request<Body>) -> Response {
    if !is_post_method(request.method()) {
        return reject(&services, WebhookError::MethodNotAllowed);
    }

    if !is_multipart_form_data(request.headers()) {
        return reject(&services, WebhookError::BadContentType);
    }

    let form = match parse_form_data(request, &services).await {
        Ok(form) => form,
        Err(err) => return reject(&services, err),
    };

    let kind = match process_form_data(&form, services.image_storage.as_ref()).await {
        Ok(_) => OutcomeKind::Ok,
        Err(err) => {
            error_handler(&err);
            err.kind()
        }
    };
    respond(&services.settings, kind)
}

fn reject(services: &Services, err: WebhookError) -> Response {
    error_handler(&err);
    respond(&services.settings, err.kind())
}

/// Reads the whole multipart body up front. Every part counts towards
/// `max_body_bytes`. Parts with a non-empty filename are files, the rest
/// are fields.
pub async fn parse_form_data(request: Request<Body>, services: &Services) -> Result<WebhookForm, WebhookError> {
    let max_body_bytes = services.settings.max_body_bytes;
    let mut multipart = Multipart::from_request(request, services)
        .await
        .map_err(|rejection| WebhookError::ParseFailure(rejection.body_text()))?;

    let mut form = WebhookForm::default();
    let mut total_bytes = 0usize;
    while let Some(mut field) = multipart.next_field().await.map_err(|err| WebhookError::ParseFailure(err.to_string()))? {
        let Some(name) = field.name().map(str::to_owned) else {
            continue;
        };
        let file_name = field.file_name().filter(|file_name| !file_name.is_empty()).map(str::to_owned);
        let content_type = field.content_type().map(str::to_owned);

        let mut data = BytesMut::new();
        while let Some(chunk) = field.chunk().await.map_err(|err| WebhookError::ParseFailure(err.to_string()))? {
            total_bytes += chunk.len();
            if total_bytes > max_body_bytes {
                return Err(WebhookError::ParseFailure(format!("multipart body exceeds {} bytes", max_body_bytes)));
            }
            data.extend_from_slice(&chunk);
        }

        match file_name {
            Some(file_name) => {
                debug!(name = %name, file_name = %file_name, size = data.len(), "Received file part");
                form.add_file(name, FormFile::new(file_name, content_type, data.freeze()));
            }
            None => form.add_value(name, String::from_utf8_lossy(&data).into_owned()),
        }
    }
    Ok(form)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_post_is_accepted() {
        assert!(is_post_method(&Method::POST));
        assert!(!is_post_method(&Method::GET));
        assert!(!is_post_method(&Method::PUT));
    }

    #[test]
    fn content_type_must_mention_multipart_form_data() {
        let mut headers = HeaderMap::new();
        assert!(!is_multipart_form_data(&headers));

        headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("application/x-www-form-urlencoded"));
        assert!(!is_multipart_form_data(&headers));

        headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("multipart/form-data; boundary=xyz"));
        assert!(is_multipart_form_data(&headers));

        let raw = HeaderValue::from_bytes(b"multipart/form-data; boundary=abc; charset=\"\xe9\"").unwrap();
        headers.insert(header::CONTENT_TYPE, raw);
        assert!(is_multipart_form_data(&headers));
    }
}
