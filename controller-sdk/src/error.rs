use bytes::Bytes;
use http::StatusCode;
use thiserror::Error;

use crate::version::API_VERSION;

/// Error types for controller operations.
///
/// HTTP-classified variants keep the raw response body so callers can read
/// machine-readable reasons (e.g. a 401 body) without re-issuing the call.
#[derive(Debug, Error)]
pub enum Error {
    /// The controller URL (or other connection material) is malformed.
    /// Raised at construction time, before any I/O happens.
    #[error("invalid controller endpoint: {0}")]
    InvalidEndpoint(String),

    /// The request never produced a response: DNS, connection refused,
    /// TLS handshake failure or timeout. Never retried by the SDK.
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server speaks a different API major version than this SDK.
    /// The response body must not be interpreted.
    #[error("API version mismatch: server announced v{server}, SDK is compiled against v{sdk}")]
    ApiMismatch { server: String, sdk: &'static str },

    #[error("unauthorized (401)")]
    Unauthorized { body: Bytes },

    #[error("forbidden (403)")]
    Forbidden { body: Bytes },

    #[error("not found (404)")]
    NotFound { body: Bytes },

    #[error("conflict (409)")]
    Conflict { body: Bytes },

    #[error("unprocessable (422)")]
    Unprocessable { body: Bytes },

    /// Any non-2xx status outside the mapped set, with raw status and body
    /// for diagnostics.
    #[error("unexpected status {status}")]
    Unexpected { status: StatusCode, body: Bytes },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Status code behind an HTTP-classified error, if any.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Error::Unauthorized { .. } => Some(StatusCode::UNAUTHORIZED),
            Error::Forbidden { .. } => Some(StatusCode::FORBIDDEN),
            Error::NotFound { .. } => Some(StatusCode::NOT_FOUND),
            Error::Conflict { .. } => Some(StatusCode::CONFLICT),
            Error::Unprocessable { .. } => Some(StatusCode::UNPROCESSABLE_ENTITY),
            Error::Unexpected { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Raw response body attached to an HTTP-classified error, if any.
    pub fn body(&self) -> Option<&Bytes> {
        match self {
            Error::Unauthorized { body }
            | Error::Forbidden { body }
            | Error::NotFound { body }
            | Error::Conflict { body }
            | Error::Unprocessable { body }
            | Error::Unexpected { body, .. } => Some(body),
            _ => None,
        }
    }

    pub(crate) fn api_mismatch(server: &str) -> Self {
        Error::ApiMismatch {
            server: server.to_string(),
            sdk: API_VERSION,
        }
    }
}

/// Map a response status to its semantic error kind.
///
/// The mapping is total: 2xx is not an error, the five mapped statuses get
/// their dedicated kind, everything else falls back to [`Error::Unexpected`].
pub(crate) fn classify(status: StatusCode, body: Bytes) -> Option<Error> {
    if status.is_success() {
        return None;
    }
    Some(match status.as_u16() {
        401 => Error::Unauthorized { body },
        403 => Error::Forbidden { body },
        404 => Error::NotFound { body },
        409 => Error::Conflict { body },
        422 => Error::Unprocessable { body },
        _ => Error::Unexpected { status, body },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kind(status: u16) -> Option<Error> {
        classify(StatusCode::from_u16(status).unwrap(), Bytes::from_static(b"detail"))
    }

    #[test]
    fn success_statuses_are_not_errors() {
        assert!(kind(200).is_none());
        assert!(kind(201).is_none());
        assert!(kind(204).is_none());
    }

    #[test]
    fn mapped_statuses_get_dedicated_kinds() {
        assert!(matches!(kind(401), Some(Error::Unauthorized { .. })));
        assert!(matches!(kind(403), Some(Error::Forbidden { .. })));
        assert!(matches!(kind(404), Some(Error::NotFound { .. })));
        assert!(matches!(kind(409), Some(Error::Conflict { .. })));
        assert!(matches!(kind(422), Some(Error::Unprocessable { .. })));
    }

    #[test]
    fn unmapped_statuses_fall_back_to_unexpected() {
        let err = kind(500).unwrap();
        assert!(matches!(
            err,
            Error::Unexpected {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                ..
            }
        ));
        assert_eq!(err.status(), Some(StatusCode::INTERNAL_SERVER_ERROR));
    }

    #[test]
    fn classified_errors_keep_the_response_body() {
        let err = kind(401).unwrap();
        assert_eq!(err.body().map(|b| &b[..]), Some(&b"detail"[..]));
        assert_eq!(err.status(), Some(StatusCode::UNAUTHORIZED));
    }
}
