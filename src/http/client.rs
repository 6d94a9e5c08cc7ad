//! Low-level HTTP client — `KongHttp`.
//!
//! One generic request pipeline serves every resource: build a request from a
//! verb, a path relative to the base URL and an optional JSON body, send it,
//! validate the status, and decode the body into the caller's type (or skip
//! decoding when the caller has no destination). The resource sub-clients
//! wrap this with fixed verbs and path templates.

use crate::error::HttpError;
use crate::network::DEFAULT_TIMEOUT_SECS;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::{Client, Method, Request, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

const APPLICATION_JSON: &str = "application/json";

/// A decoded response body together with the status it arrived with.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse<T> {
    pub status: StatusCode,
    pub value: T,
}

impl<T> ApiResponse<T> {
    pub fn into_value(self) -> T {
        self.value
    }
}

/// Low-level HTTP client for the Kong Admin API.
///
/// Holds only immutable configuration, so one instance (or its clones) can be
/// shared freely between tasks.
#[derive(Debug, Clone)]
pub struct KongHttp {
    base_url: String,
    client: Client,
    /// Caller headers attached to every request. Kept here rather than in
    /// the client's default headers, which hold one value per name.
    headers: HeaderMap,
}

impl KongHttp {
    /// Create a client with default settings (30s timeout, JSON `Accept` header).
    pub fn new(base_url: &str) -> Result<Self, HttpError> {
        let client = build_client(Duration::from_secs(DEFAULT_TIMEOUT_SECS))?;
        Self::from_parts(base_url, client)
    }

    /// Wrap a preconfigured `reqwest::Client`.
    ///
    /// The base URL must be absolute, with no query or fragment since
    /// resource paths are appended to it; a trailing `/` is dropped.
    pub fn from_parts(base_url: &str, client: Client) -> Result<Self, HttpError> {
        let base_url = base_url.trim_end_matches('/').to_string();
        let parsed = Url::parse(&base_url)
            .map_err(|e| HttpError::InvalidRequest(format!("invalid base URL '{}': {}", base_url, e)))?;
        if parsed.query().is_some() || parsed.fragment().is_some() {
            return Err(HttpError::InvalidRequest(format!(
                "base URL '{}' cannot carry a query or fragment",
                base_url
            )));
        }
        Ok(Self {
            base_url,
            client,
            headers: HeaderMap::new(),
        })
    }

    /// Attach `headers` to every request. Repeated names send every value,
    /// and a caller `Accept` replaces the JSON default.
    pub fn with_headers(mut self, headers: HeaderMap) -> Self {
        self.headers = headers;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Resolve a resource path (optionally carrying a query string) against the base URL.
    pub fn url(&self, path: &str) -> Result<Url, HttpError> {
        let joined = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        Url::parse(&joined)
            .map_err(|e| HttpError::InvalidRequest(format!("invalid URL '{}': {}", joined, e)))
    }

    /// Build the request without sending it.
    ///
    /// A body is JSON-encoded here and marks the request as
    /// `application/json`; without a body no content type is set. GET and
    /// DELETE never carry a body.
    pub fn build_request<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<Request, HttpError> {
        if body.is_some() && !allows_body(&method) {
            return Err(HttpError::InvalidRequest(format!(
                "{} requests cannot carry a body",
                method
            )));
        }

        let url = self.url(path)?;
        let mut req = self.client.request(method, url);
        if !self.headers.is_empty() {
            req = req.headers(self.headers.clone());
        }

        if let Some(b) = body {
            let bytes = serde_json::to_vec(b).map_err(HttpError::Encode)?;
            req = req
                .header(CONTENT_TYPE, HeaderValue::from_static(APPLICATION_JSON))
                .body(bytes);
        }

        req.build()
            .map_err(|e| HttpError::InvalidRequest(format!("failed to build request: {}", e)))
    }

    /// Send a request and decode the JSON response body into `T`.
    pub async fn execute<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<ApiResponse<T>, HttpError> {
        let request = self.build_request(method, path, body)?;
        let resp = self.send(request).await?;
        let status = resp.status();

        let text = resp.text().await?;
        let value = serde_json::from_str::<T>(&text).map_err(|source| HttpError::Decode {
            status: status.as_u16(),
            body: text,
            source,
        })?;

        Ok(ApiResponse { status, value })
    }

    /// Send a request whose response body is of no interest.
    ///
    /// The status is still validated; the body is never decoded.
    pub async fn execute_empty<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<StatusCode, HttpError> {
        let request = self.build_request(method, path, body)?;
        let resp = self.send(request).await?;
        Ok(resp.status())
    }

    // ── Verb helpers ─────────────────────────────────────────────────────

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, HttpError> {
        self.execute(Method::GET, path, None::<&()>)
            .await
            .map(ApiResponse::into_value)
    }

    pub async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, HttpError> {
        self.execute(Method::POST, path, Some(body))
            .await
            .map(ApiResponse::into_value)
    }

    pub async fn patch<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, HttpError> {
        self.execute(Method::PATCH, path, Some(body))
            .await
            .map(ApiResponse::into_value)
    }

    pub async fn delete(&self, path: &str) -> Result<StatusCode, HttpError> {
        self.execute_empty(Method::DELETE, path, None::<&()>).await
    }

    // ── Internal ─────────────────────────────────────────────────────────

    /// Send and turn non-success statuses into [`HttpError::Status`].
    async fn send(&self, request: Request) -> Result<reqwest::Response, HttpError> {
        let method = request.method().clone();
        let url = request.url().clone();
        tracing::debug!(method = %method, url = %url, "Sending admin request");

        let resp = self.client.execute(request).await.map_err(|e| {
            tracing::debug!(method = %method, url = %url, error = %e, "Admin request failed");
            HttpError::Transport(e)
        })?;
        let status = resp.status();
        tracing::debug!(method = %method, url = %url, status = status.as_u16(), "Admin response");

        if status.is_success() {
            return Ok(resp);
        }

        let body = match resp.text().await {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!("Failed to read error response body: {}", e);
                String::new()
            }
        };
        Err(HttpError::from_status(status.as_u16(), body))
    }
}

/// Build the `reqwest::Client` every `KongHttp` runs on: JSON `Accept` plus
/// the whole-request timeout, which does not apply on wasm.
pub(crate) fn build_client(timeout: Duration) -> Result<Client, HttpError> {
    let mut defaults = HeaderMap::new();
    defaults.insert(ACCEPT, HeaderValue::from_static(APPLICATION_JSON));

    let builder = Client::builder().default_headers(defaults);
    #[cfg(not(target_arch = "wasm32"))]
    let builder = builder.timeout(timeout);
    #[cfg(target_arch = "wasm32")]
    let _ = timeout;

    builder
        .build()
        .map_err(|e| HttpError::InvalidRequest(format!("failed to build HTTP client: {}", e)))
}

fn allows_body(method: &Method) -> bool {
    *method != Method::GET && *method != Method::DELETE && *method != Method::HEAD
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn http() -> KongHttp {
        KongHttp::new("http://localhost:8001/").unwrap()
    }

    #[derive(Serialize)]
    struct Body {
        cert: String,
    }

    fn body() -> Body {
        Body {
            cert: "-----BEGIN CERTIFICATE-----".to_string(),
        }
    }

    #[test]
    fn test_base_url_trailing_slash_removed() {
        assert_eq!(http().base_url(), "http://localhost:8001");
    }

    #[test]
    fn test_invalid_base_url_rejected() {
        let err = KongHttp::new("not a url").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Construction);
    }

    #[test]
    fn test_base_url_with_query_or_fragment_rejected() {
        for base in ["http://localhost:8001?x=1", "http://localhost:8001/#admin"] {
            let err = KongHttp::new(base).unwrap_err();
            assert!(matches!(err, HttpError::InvalidRequest(_)), "{}", base);
            assert_eq!(err.kind(), ErrorKind::Construction);
        }
        assert!(KongHttp::new("http://localhost:8001/admin-api/").is_ok());
    }

    #[test]
    fn test_caller_headers_keep_every_value() {
        use reqwest::header::HeaderName;

        let tag = HeaderName::from_static("x-tag");
        let mut headers = HeaderMap::new();
        headers.append(tag.clone(), HeaderValue::from_static("a"));
        headers.append(tag.clone(), HeaderValue::from_static("b"));
        headers.insert(ACCEPT, HeaderValue::from_static("text/plain"));

        let req = http()
            .with_headers(headers)
            .build_request(Method::POST, "plugins", Some(&body()))
            .unwrap();
        let tags: Vec<_> = req.headers().get_all(&tag).iter().collect();
        assert_eq!(tags, vec!["a", "b"]);
        assert_eq!(req.headers()[ACCEPT], "text/plain");
        assert_eq!(req.headers()[CONTENT_TYPE], APPLICATION_JSON);
    }

    #[test]
    fn test_url_joins_with_single_slash() {
        let client = http();
        assert_eq!(
            client.url("certificates/abc").unwrap().as_str(),
            "http://localhost:8001/certificates/abc"
        );
        assert_eq!(
            client.url("/plugins?api_id=x").unwrap().as_str(),
            "http://localhost:8001/plugins?api_id=x"
        );
    }

    #[test]
    fn test_body_sets_json_content_type() {
        for method in [Method::POST, Method::PATCH, Method::PUT] {
            let req = http()
                .build_request(method.clone(), "certificates", Some(&body()))
                .unwrap();
            assert_eq!(req.method(), &method);
            assert_eq!(req.headers()[CONTENT_TYPE], APPLICATION_JSON);
            let sent = req.body().and_then(|b| b.as_bytes()).unwrap();
            assert_eq!(sent, serde_json::to_vec(&body()).unwrap().as_slice());
        }
    }

    #[test]
    fn test_no_body_no_content_type() {
        for method in [Method::GET, Method::POST, Method::PATCH, Method::DELETE] {
            let req = http()
                .build_request(method, "plugins/enabled", None::<&()>)
                .unwrap();
            assert!(req.headers().get(CONTENT_TYPE).is_none());
            assert!(req.body().is_none());
        }
    }

    #[test]
    fn test_body_rejected_for_get_and_delete() {
        for method in [Method::GET, Method::DELETE] {
            let err = http()
                .build_request(method, "certificates/abc", Some(&body()))
                .unwrap_err();
            assert!(matches!(err, HttpError::InvalidRequest(_)));
            assert_eq!(err.kind(), ErrorKind::Construction);
        }
    }

    #[test]
    fn test_unencodable_body_is_construction_error() {
        use std::collections::HashMap;

        // JSON object keys must be strings.
        let mut bad = HashMap::new();
        bad.insert(vec![1u8], "x");
        let err = http()
            .build_request(Method::POST, "plugins", Some(&bad))
            .unwrap_err();
        assert!(matches!(err, HttpError::Encode(_)));
        assert_eq!(err.kind(), ErrorKind::Construction);
    }
}
