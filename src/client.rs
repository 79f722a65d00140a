//! Core HTTP client for the Ozon Seller REST API.
//!
//! The [`OzonClient`] struct is the main entry point for interacting with the
//! Ozon Seller endpoints. It wraps [`reqwest::Client`] with authentication
//! headers and provides a typed [`request`](OzonClient::request) method that
//! decodes the `result` payload and attaches the response envelope.
//!
//! API endpoint methods are added to `OzonClient` via `impl` blocks in the
//! [`crate::api`] module.

use reqwest::Method;
use reqwest::header::{self, HeaderMap, HeaderValue};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::constants::{API_BASE_URL, API_KEY_HEADER, CLIENT_ID_HEADER};
use crate::error::{ApiErrorBody, OzonError, Result};
use crate::types::common::{ApiResponse, CommonResponse};

/// Core HTTP client for the Ozon Seller REST API.
///
/// Wraps [`reqwest::Client`] and injects the `Client-Id` and `Api-Key`
/// headers into every request. Header values are validated and cached at
/// construction time.
///
/// Cloning is cheap: clones share the same connection pool.
///
/// # Example
///
/// ```no_run
/// use ozon_seller_rs::client::OzonClient;
///
/// # #[tokio::main]
/// # async fn main() -> ozon_seller_rs::error::Result<()> {
/// let client = OzonClient::new("123456", "your-api-key")?;
/// // client.post::<_, MyResult>("/v1/report/list", &params).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct OzonClient {
    http: reqwest::Client,
    /// Seller client identifier.
    client_id: String,
    /// Seller API key.
    api_key: String,
    /// Base URL for REST API requests (defaults to [`API_BASE_URL`]).
    base_url: String,
    auth_header_client_id: HeaderValue,
    auth_header_api_key: HeaderValue,
}

impl OzonClient {
    /// Create a new `OzonClient` with the given client ID and API key.
    ///
    /// Uses the default API base URL (`https://api-seller.ozon.ru`).
    pub fn new(client_id: impl Into<String>, api_key: impl Into<String>) -> Result<Self> {
        Self::with_base_url(client_id, api_key, API_BASE_URL)
    }

    /// Create a new `OzonClient` pointing at a custom base URL.
    ///
    /// Useful for testing against a sandbox or mock server.
    pub fn with_base_url(
        client_id: impl Into<String>,
        api_key: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Result<Self> {
        let http = reqwest::Client::builder()
            .default_headers(Self::default_headers())
            .build()?;

        let client_id = client_id.into();
        let api_key = api_key.into();

        let auth_header_client_id = header_value(&client_id, "client id")?;
        let auth_header_api_key = header_value(&api_key, "api key")?;

        Ok(Self {
            http,
            client_id,
            api_key,
            base_url: base_url.into().trim_end_matches('/').to_owned(),
            auth_header_client_id,
            auth_header_api_key,
        })
    }

    /// Returns a reference to the underlying `reqwest::Client`.
    pub fn http(&self) -> &reqwest::Client {
        &self.http
    }

    /// Returns the seller client ID.
    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    /// Returns the current API key.
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Replace the API key (e.g. after rotating it in the seller account).
    pub fn set_api_key(&mut self, api_key: impl Into<String>) -> Result<()> {
        let api_key = api_key.into();
        self.auth_header_api_key = header_value(&api_key, "api key")?;
        self.api_key = api_key;
        Ok(())
    }

    /// Returns the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // -----------------------------------------------------------------------
    // Generic HTTP helpers
    // -----------------------------------------------------------------------

    /// Send `body` as JSON to `path` and decode the `result` payload.
    ///
    /// On success the returned [`ApiResponse`] carries the response status
    /// and headers in its `common` field. Failures are returned as they
    /// occurred; nothing is retried.
    pub async fn request<B, R>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<ApiResponse<R>>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let url = self.url(path);
        tracing::debug!(%url, %method, "sending request");

        let resp = self
            .http
            .request(method, &url)
            .headers(self.auth_headers())
            .json(body)
            .send()
            .await?;

        self.handle_response(resp).await
    }

    /// Perform a POST request with a JSON body and decode the response.
    pub async fn post<B, R>(&self, path: &str, body: &B) -> Result<ApiResponse<R>>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        self.request(Method::POST, path, body).await
    }

    // -----------------------------------------------------------------------
    // Private helpers
    // -----------------------------------------------------------------------

    /// Build the full URL from a path segment.
    fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    /// Default headers applied to every request.
    fn default_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );
        headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));
        headers
    }

    /// Per-request auth headers built from the cached [`HeaderValue`]s.
    fn auth_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::with_capacity(2);
        headers.insert(CLIENT_ID_HEADER, self.auth_header_client_id.clone());
        headers.insert(API_KEY_HEADER, self.auth_header_api_key.clone());
        headers
    }

    /// Read a response, returning either the decoded body with its envelope
    /// or an `OzonError`.
    async fn handle_response<R: DeserializeOwned>(
        &self,
        resp: reqwest::Response,
    ) -> Result<ApiResponse<R>> {
        let status = resp.status();
        let common = CommonResponse::from_response(&resp);
        let bytes = resp.bytes().await?;
        tracing::debug!(%status, len = bytes.len(), "received response");

        if status.is_success() {
            let mut decoded: ApiResponse<R> = serde_json::from_slice(&bytes)?;
            decoded.common = common;
            Ok(decoded)
        } else {
            let body = String::from_utf8_lossy(&bytes);
            tracing::warn!(%status, "request failed");
            Err(self.parse_error_body(status, &body))
        }
    }

    /// Try to parse the API's JSON error structure; fall back to a raw HTTP
    /// status error.
    pub(crate) fn parse_error_body(&self, status: reqwest::StatusCode, body: &str) -> OzonError {
        if let Ok(api_err) = serde_json::from_str::<ApiErrorBody>(body) {
            if api_err.code.is_some() || api_err.message.is_some() {
                return OzonError::Api {
                    status,
                    body: api_err,
                };
            }
        }
        OzonError::HttpStatus {
            status,
            body: body.to_owned(),
        }
    }
}

fn header_value(value: &str, what: &str) -> Result<HeaderValue> {
    HeaderValue::from_str(value).map_err(|_| {
        OzonError::InvalidArgument(format!("{what} contains invalid header characters"))
    })
}
