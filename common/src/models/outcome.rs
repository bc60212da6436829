/// Result of handling one request to the receiver.
///
/// Callers of the webhook only read the body text, so several kinds share
/// the same legacy body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutcomeKind {
    Ok,
    MethodNotAllowed,
    BadContentType,
    ParseFailure,
    ValidationFailure,
    IoFailure,
    Timeout,
    NotFound,
}

impl OutcomeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutcomeKind::Ok => "ok",
            OutcomeKind::MethodNotAllowed => "method_not_allowed",
            OutcomeKind::BadContentType => "bad_content_type",
            OutcomeKind::ParseFailure => "parse_failure",
            OutcomeKind::ValidationFailure => "validation_failure",
            OutcomeKind::IoFailure => "io_failure",
            OutcomeKind::Timeout => "timeout",
            OutcomeKind::NotFound => "not_found",
        }
    }

    pub fn legacy_body(&self) -> &'static str {
        match self {
            OutcomeKind::Ok | OutcomeKind::ValidationFailure | OutcomeKind::IoFailure => "OK",
            OutcomeKind::MethodNotAllowed => "Method Not Allowed",
            OutcomeKind::BadContentType => "Bad Request",
            OutcomeKind::ParseFailure | OutcomeKind::Timeout => "Internal Server Error",
            OutcomeKind::NotFound => "Not Found",
        }
    }

    /// Status code used when strict status codes are enabled.
    /// Processing failures stay at 200.
    pub fn strict_status(&self) -> u16 {
        match self {
            OutcomeKind::Ok | OutcomeKind::ValidationFailure | OutcomeKind::IoFailure => 200,
            OutcomeKind::MethodNotAllowed => 405,
            OutcomeKind::BadContentType => 400,
            OutcomeKind::ParseFailure => 500,
            OutcomeKind::Timeout => 408,
            OutcomeKind::NotFound => 404,
        }
    }
}
