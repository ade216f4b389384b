use bytes::Bytes;
use http::{HeaderMap, StatusCode};
use serde::de::DeserializeOwned;

use crate::error::Error;
use crate::version::Compatibility;

/// Buffered response from one controller round trip.
///
/// Responses are consumed immediately by the caller; the body is fully read
/// before an `ApiResponse` exists. The version [`Compatibility`] tier rides
/// along as metadata so callers can observe minor skew without it being an
/// error.
pub struct ApiResponse {
    status: StatusCode,
    headers: HeaderMap,
    body: Bytes,
    compatibility: Compatibility,
}

impl ApiResponse {
    pub(crate) fn new(
        status: StatusCode,
        headers: HeaderMap,
        body: Bytes,
        compatibility: Compatibility,
    ) -> Self {
        Self {
            status,
            headers,
            body,
            compatibility,
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Version compatibility tier computed from the response headers.
    pub fn compatibility(&self) -> &Compatibility {
        &self.compatibility
    }

    pub fn body(&self) -> &Bytes {
        &self.body
    }

    pub fn into_body(self) -> Bytes {
        self.body
    }

    /// Deserialize the body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, Error> {
        Ok(serde_json::from_slice(&self.body)?)
    }

    /// The body as text, with invalid UTF-8 replaced.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

impl std::fmt::Debug for ApiResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiResponse")
            .field("status", &self.status)
            .field("body_len", &self.body.len())
            .field("compatibility", &self.compatibility)
            .finish_non_exhaustive()
    }
}
