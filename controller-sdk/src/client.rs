use std::fmt;

use http::header::{AUTHORIZATION, USER_AGENT};
use http::{HeaderMap, HeaderValue};
use parking_lot::RwLock;
use url::Url;

use crate::error::Error;
use crate::version::{API_VERSION, API_VERSION_HEADER, PLATFORM_VERSION_HEADER};

/// Request header carrying the service key used by service-to-service
/// resources (e.g. hooks). The controller rejects requests that need one
/// and lack it; the SDK always sends the header, empty or not.
pub(crate) const SERVICE_KEY_HEADER: &str = "x-drycc-service-key";

/// Client oversees the interaction between the SDK and the controller.
///
/// A `Client` is configuration plus a shared HTTP transport; it performs no
/// I/O at construction time. Requests only read the configuration, so a
/// `Client` is safe to share across concurrent call chains. The one mutable
/// piece is the advisory [`ObservedVersions`] record, updated by every
/// response with last-writer-wins semantics.
pub struct Client {
    pub(crate) http: reqwest::Client,

    /// Whether peer certificates are verified. Should be true unless you
    /// know the controller is using untrusted SSL keys.
    pub verify_ssl: bool,

    /// Base URL used to reach the controller.
    pub controller_url: Url,

    /// User agent sent with every request.
    pub user_agent: String,

    /// Token authenticating the user against the API.
    pub token: String,

    /// Service key for the hooks resource. Not intended for end users;
    /// leave empty for user-token flows.
    pub service_key: String,

    observed: RwLock<ObservedVersions>,
}

/// Everything needed to dial a log/exec stream: the websocket endpoint,
/// the authentication headers from the transport's header contract, and the
/// first message to send after connecting. Dialing itself is left to the
/// caller's websocket implementation.
#[derive(Debug)]
pub struct StreamRequest {
    pub url: Url,
    pub headers: HeaderMap,
    pub payload: serde_json::Value,
}

/// Versions the controller announced on the most recent response.
///
/// Purely diagnostic: concurrent requests race on these fields and the last
/// writer wins, which is fine because staleness is not a correctness hazard.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObservedVersions {
    /// API version from the last response, if any was announced.
    pub api_version: Option<String>,
    /// Controller release version from the last response.
    pub platform_version: Option<String>,
}

impl Client {
    /// Create a new client for the controller at `controller_url`.
    ///
    /// A URL without an `http://`/`https://` scheme gets `http://`
    /// prepended before parsing. When `verify_ssl` is false, peer
    /// certificate validation is disabled. That is an explicit trust
    /// downgrade for controllers running with untrusted keys, never a
    /// default.
    pub fn new(verify_ssl: bool, controller_url: &str, token: &str) -> Result<Self, Error> {
        // preventing issues like missing schemes.
        let normalized = if controller_url.starts_with("http://")
            || controller_url.starts_with("https://")
        {
            controller_url.to_string()
        } else {
            format!("http://{controller_url}")
        };
        let controller_url = Url::parse(&normalized)
            .map_err(|err| Error::InvalidEndpoint(format!("{normalized}: {err}")))?;

        let http = reqwest::Client::builder()
            .danger_accept_invalid_certs(!verify_ssl)
            .build()?;

        Ok(Self {
            http,
            verify_ssl,
            controller_url,
            user_agent: format!("Drycc Rust SDK V{API_VERSION}"),
            token: token.to_string(),
            service_key: String::new(),
            observed: RwLock::default(),
        })
    }

    /// Create a client from environment variables.
    ///
    /// Reads `DRYCC_CONTROLLER_URL` (required), `DRYCC_TOKEN`,
    /// `DRYCC_SERVICE_KEY` and `DRYCC_VERIFY_SSL` (`false`/`0` disable
    /// certificate verification; anything else keeps it on).
    pub fn from_env() -> Result<Self, Error> {
        let controller_url = std::env::var("DRYCC_CONTROLLER_URL")
            .map_err(|_| Error::InvalidEndpoint("DRYCC_CONTROLLER_URL is not set".to_string()))?;
        let token = std::env::var("DRYCC_TOKEN").unwrap_or_default();
        let verify_ssl = std::env::var("DRYCC_VERIFY_SSL")
            .map(|v| v != "false" && v != "0")
            .unwrap_or(true);

        let mut client = Self::new(verify_ssl, &controller_url, &token)?;
        if let Ok(service_key) = std::env::var("DRYCC_SERVICE_KEY") {
            client.service_key = service_key;
        }
        Ok(client)
    }

    /// The authentication headers sent with every request: `User-Agent`,
    /// `Authorization` and the service key header. The service key is sent
    /// even when empty; the controller owns the decision to reject.
    ///
    /// Streaming wrappers (log/exec websockets) reuse exactly this header
    /// set; see [`Client::websocket_url`].
    pub fn auth_headers(&self) -> Result<HeaderMap, Error> {
        let mut headers = HeaderMap::new();
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&self.user_agent)
                .map_err(|err| Error::InvalidEndpoint(format!("user agent: {err}")))?,
        );
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("token {}", self.token))
                .map_err(|err| Error::InvalidEndpoint(format!("token: {err}")))?,
        );
        headers.insert(
            SERVICE_KEY_HEADER,
            HeaderValue::from_str(&self.service_key)
                .map_err(|err| Error::InvalidEndpoint(format!("service key: {err}")))?,
        );
        Ok(headers)
    }

    /// Websocket endpoint for a controller path, with the base URL's scheme
    /// mapped to `ws`/`wss`. Dialing is left to the caller.
    pub fn websocket_url(&self, path: &str) -> Result<Url, Error> {
        let mut url = self
            .controller_url
            .join(path)
            .map_err(|err| Error::InvalidEndpoint(format!("{path}: {err}")))?;
        let scheme = if url.scheme() == "https" { "wss" } else { "ws" };
        url.set_scheme(scheme)
            .map_err(|()| Error::InvalidEndpoint(format!("cannot switch {url} to {scheme}")))?;
        Ok(url)
    }

    /// Snapshot of the versions announced by the most recent response.
    pub fn observed_versions(&self) -> ObservedVersions {
        self.observed.read().clone()
    }

    pub(crate) fn record_versions(&self, headers: &HeaderMap) {
        let api = headers
            .get(API_VERSION_HEADER)
            .and_then(|v| v.to_str().ok());
        let platform = headers
            .get(PLATFORM_VERSION_HEADER)
            .and_then(|v| v.to_str().ok());
        if api.is_none() && platform.is_none() {
            return;
        }
        let mut observed = self.observed.write();
        if let Some(api) = api {
            observed.api_version = Some(api.to_string());
        }
        if let Some(platform) = platform {
            observed.platform_version = Some(platform.to_string());
        }
    }
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("verify_ssl", &self.verify_ssl)
            .field("controller_url", &self.controller_url.as_str())
            .field("user_agent", &self.user_agent)
            .field("token", &"<redacted>")
            .field("service_key", &"<redacted>")
            .field("observed", &*self.observed.read())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_scheme_defaults_to_http() {
        let client = Client::new(true, "drycc.test.io", "abc123").unwrap();
        assert_eq!(client.controller_url.as_str(), "http://drycc.test.io/");
    }

    #[test]
    fn explicit_scheme_is_preserved() {
        let client = Client::new(true, "https://drycc.test.io", "abc123").unwrap();
        assert_eq!(client.controller_url.scheme(), "https");

        let client = Client::new(true, "http://drycc.test.io", "abc123").unwrap();
        assert_eq!(client.controller_url.scheme(), "http");
    }

    #[test]
    fn unparseable_url_is_an_invalid_endpoint() {
        let err = Client::new(true, "http://drycc .test.io", "abc123").unwrap_err();
        assert!(matches!(err, Error::InvalidEndpoint(_)));
    }

    #[test]
    fn default_user_agent_embeds_the_api_version() {
        let client = Client::new(true, "drycc.test.io", "abc123").unwrap();
        assert_eq!(client.user_agent, format!("Drycc Rust SDK V{API_VERSION}"));
    }

    #[test]
    fn auth_headers_carry_the_full_contract() {
        let mut client = Client::new(true, "drycc.test.io", "abc123").unwrap();
        client.service_key = "service-key".to_string();

        let headers = client.auth_headers().unwrap();
        assert_eq!(headers.get(AUTHORIZATION).unwrap(), "token abc123");
        assert_eq!(headers.get(SERVICE_KEY_HEADER).unwrap(), "service-key");
        assert_eq!(
            headers.get(USER_AGENT).unwrap(),
            &format!("Drycc Rust SDK V{API_VERSION}")
        );
    }

    #[test]
    fn auth_headers_send_an_empty_service_key() {
        let client = Client::new(true, "drycc.test.io", "abc123").unwrap();
        let headers = client.auth_headers().unwrap();
        assert_eq!(headers.get(SERVICE_KEY_HEADER).unwrap(), "");
    }

    #[test]
    fn websocket_url_follows_the_base_scheme() {
        let client = Client::new(true, "https://drycc.test.io", "abc123").unwrap();
        let url = client.websocket_url("/v2/apps/myapp/pods/web-1/logs/").unwrap();
        assert_eq!(url.as_str(), "wss://drycc.test.io/v2/apps/myapp/pods/web-1/logs/");

        let client = Client::new(true, "drycc.test.io", "abc123").unwrap();
        let url = client.websocket_url("/v2/apps/myapp/pods/web-1/exec/").unwrap();
        assert_eq!(url.scheme(), "ws");
    }

    #[test]
    fn from_env_reads_the_full_configuration() {
        temp_env::with_vars(
            [
                ("DRYCC_CONTROLLER_URL", Some("https://drycc.test.io")),
                ("DRYCC_TOKEN", Some("abc123")),
                ("DRYCC_SERVICE_KEY", Some("service-key")),
                ("DRYCC_VERIFY_SSL", Some("false")),
            ],
            || {
                let client = Client::from_env().unwrap();
                assert_eq!(client.controller_url.as_str(), "https://drycc.test.io/");
                assert_eq!(client.token, "abc123");
                assert_eq!(client.service_key, "service-key");
                assert!(!client.verify_ssl);
            },
        );
    }

    #[test]
    fn from_env_requires_the_controller_url() {
        temp_env::with_vars([("DRYCC_CONTROLLER_URL", None::<&str>)], || {
            let err = Client::from_env().unwrap_err();
            assert!(matches!(err, Error::InvalidEndpoint(_)));
        });
    }
}
