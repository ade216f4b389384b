//! The two transport primitives every resource operation funnels through.
//!
//! [`Client::request`] performs exactly one authenticated round trip;
//! [`Client::limited_request`] walks a paginated listing endpoint until a
//! caller budget or the server-declared total is satisfied. Resource modules
//! never build HTTP calls themselves.

use http::header::CONTENT_TYPE;
use http::{HeaderMap, Method};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::client::Client;
use crate::error::{Error, classify};
use crate::response::ApiResponse;
use crate::version::{self, API_VERSION, API_VERSION_HEADER, Compatibility};

/// Response header carrying the server-declared total for a listing.
pub(crate) const TOTAL_COUNT_HEADER: &str = "drycc_total_count";

/// Page size requested when the caller leaves it to the server.
pub(crate) const DEFAULT_PAGE_SIZE: usize = 100;

/// Hard bound on pages fetched in one listing, so a server reporting an
/// ever-growing total cannot keep the loop alive forever.
pub(crate) const MAX_PAGES: usize = 1000;

impl Client {
    /// Perform one authenticated round trip against the controller.
    ///
    /// `path` is relative to the configured controller URL; `body`, when
    /// present, is sent as JSON. Transport failures surface as
    /// [`Error::Transport`] and are never retried. Any received response
    /// first updates the observed versions and goes through the version
    /// compatibility check (a major-version mismatch fails the call with
    /// [`Error::ApiMismatch`] even on a 2xx status), then non-2xx statuses
    /// are classified into their semantic error kind.
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<Vec<u8>>,
    ) -> Result<ApiResponse, Error> {
        let url = self
            .controller_url
            .join(path)
            .map_err(|err| Error::InvalidEndpoint(format!("{path}: {err}")))?;
        debug!(%method, %url, "controller request");

        let mut builder = self.http.request(method, url).headers(self.auth_headers()?);
        if let Some(body) = body {
            builder = builder.header(CONTENT_TYPE, "application/json").body(body);
        }

        let res = builder.send().await?;
        let status = res.status();
        let headers = res.headers().clone();
        self.record_versions(&headers);

        let compatibility = version::check(announced_api_version(&headers).as_deref());
        match &compatibility {
            Compatibility::Incompatible { server } => return Err(Error::api_mismatch(server)),
            Compatibility::MinorSkew { server } => {
                warn!(server = %server, sdk = API_VERSION, "controller API minor version skew");
            }
            Compatibility::Compatible => {}
        }

        let body = res.bytes().await?;
        if let Some(err) = classify(status, body.clone()) {
            return Err(err);
        }
        Ok(ApiResponse::new(status, headers, body, compatibility))
    }

    /// Fetch up to `results` items from a paginated listing endpoint,
    /// hiding the server's page chunking.
    ///
    /// A `results` of zero or less requests a single page of the server's
    /// default size. Otherwise pages are fetched sequentially (each offset
    /// depends on the previous page's element count) until the budget or
    /// the server-declared total is reached, whichever is smaller. A failure
    /// on any page aborts the whole listing; no partial set is returned.
    ///
    /// Returns the accumulated items and the server-declared total (the
    /// received count when the server declares none).
    pub async fn limited_request<T: DeserializeOwned>(
        &self,
        path: &str,
        results: i64,
    ) -> Result<(Vec<T>, usize), Error> {
        if results <= 0 {
            let res = self
                .request(Method::GET, &format!("{path}?limit={DEFAULT_PAGE_SIZE}"), None)
                .await?;
            let total = declared_total(res.headers());
            let items: Vec<T> = res.json()?;
            let total = total.unwrap_or(items.len());
            return Ok((items, total));
        }

        let budget = results as usize;
        let mut items: Vec<T> = Vec::new();
        let mut total: Option<usize> = None;

        for _ in 0..MAX_PAGES {
            // Never request pages the server says cannot exist.
            let wanted = total.map_or(budget, |t| budget.min(t));
            let remaining = wanted.saturating_sub(items.len());
            if remaining == 0 {
                break;
            }

            let limit = remaining.min(DEFAULT_PAGE_SIZE);
            let offset = items.len();
            let res = self
                .request(Method::GET, &format!("{path}?limit={limit}&offset={offset}"), None)
                .await?;
            total = declared_total(res.headers()).or(total);

            let page: Vec<T> = res.json()?;
            debug!(path, offset, received = page.len(), "listing page");
            if page.is_empty() {
                break;
            }
            items.extend(page);
        }

        // A misbehaving server may return more than it was asked for.
        if items.len() > budget {
            items.truncate(budget);
        }
        let total = total.unwrap_or(items.len());
        Ok((items, total))
    }
}

fn announced_api_version(headers: &HeaderMap) -> Option<String> {
    headers
        .get(API_VERSION_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}

fn declared_total(headers: &HeaderMap) -> Option<usize> {
    headers
        .get(TOTAL_COUNT_HEADER)?
        .to_str()
        .ok()?
        .parse()
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::HeaderValue;

    #[test]
    fn declared_total_parses_the_header() {
        let mut headers = HeaderMap::new();
        headers.insert(TOTAL_COUNT_HEADER, HeaderValue::from_static("120"));
        assert_eq!(declared_total(&headers), Some(120));
    }

    #[test]
    fn declared_total_ignores_garbage() {
        let mut headers = HeaderMap::new();
        headers.insert(TOTAL_COUNT_HEADER, HeaderValue::from_static("many"));
        assert_eq!(declared_total(&headers), None);
        assert_eq!(declared_total(&HeaderMap::new()), None);
    }
}
