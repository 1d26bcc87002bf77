use super::common::HTTPError;
use super::http_request::request_common::HTTPRequestType;
use super::http_response::response_common::{ResponseError, unwrap_return_code};
use crate::event;
use std::time::Duration;

/// Default request timeout applied when no other value is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// A simple wrapper around `reqwest::Client` holding a base URL and a fixed request timeout.
///
/// One instance exists per upstream service (space-weather feed, cosmic ray database), so the
/// request types only need to know their endpoint path.
#[derive(Debug)]
pub struct HTTPClient {
    /// The underlying `reqwest::Client` used to perform HTTP requests.
    client: reqwest::Client,
    /// Base URL for the API, prepended to all endpoint paths.
    base_url: String,
}

impl HTTPClient {
    /// Constructs a new `HTTPClient` for the given base URL.
    ///
    /// # Arguments
    /// * `base_url` – The root URL for all requests (e.g. `"https://services.swpc.noaa.gov"`).
    ///   A trailing slash is stripped.
    /// * `timeout` – Upper bound for connecting, sending and reading a single request.
    ///
    /// # Errors
    /// Returns `HTTPError::ClientSetup` if the TLS backend cannot be initialised.
    pub fn new(base_url: &str, timeout: Duration) -> Result<HTTPClient, HTTPError> {
        let mut builder = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")));
        if is_loopback(base_url) {
            builder = builder.no_proxy();
        }
        let client =
            builder.build().map_err(|e| HTTPError::ClientSetup { reason: e.to_string() })?;
        Ok(HTTPClient { client, base_url: String::from(base_url.trim_end_matches('/')) })
    }

    /// Returns the base URL that the client was initialized with.
    pub fn url(&self) -> &str { self.base_url.as_str() }

    /// Performs a `GET` for the given request type and decodes its JSON body.
    ///
    /// # Errors
    /// Any transport failure, non-success status or undecodable body is returned as an
    /// `HTTPError::HTTPResponseError`.
    pub async fn send<R>(&self, request: &R) -> Result<R::Response, HTTPError>
    where R: HTTPRequestType {
        let url = format!("{}{}", self.base_url, request.endpoint());
        event!("GET {url} {:?}", request.query_params());
        let response = self
            .client
            .get(&url)
            .query(&request.query_params())
            .send()
            .await
            .map_err(ResponseError::from)?;
        let response = unwrap_return_code(response)?;
        Ok(response.json::<R::Response>().await.map_err(ResponseError::from)?)
    }
}

/// Local mirrors are reached directly, never through a system proxy.
fn is_loopback(base_url: &str) -> bool {
    reqwest::Url::parse(base_url).ok().is_some_and(|url| {
        matches!(url.host_str(), Some("localhost" | "127.0.0.1" | "[::1]"))
    })
}
