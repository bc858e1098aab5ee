//! Request layer: URL building, headers, status handling, JSON decoding.

use reqwest::header::{ACCEPT, CACHE_CONTROL};
use reqwest::{Method, RequestBuilder, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{ClientError, ClientResult};

/// Join the configured base URL and a resource path.
///
/// An empty base yields the path unchanged (same-origin relative URL).
pub fn build_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    if base.is_empty() {
        return path.to_string();
    }
    if path.starts_with('/') {
        format!("{base}{path}")
    } else {
        format!("{base}/{path}")
    }
}

/// Typed client for the remote project API.
///
/// Stateless between calls: no response cache, no identity map, and idle
/// connections are not kept for reuse. Clones are cheap and independent calls
/// may run concurrently.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> ClientResult<Self> {
        let http = reqwest::Client::builder()
            .pool_max_idle_per_host(0)
            .build()?;
        Ok(Self::with_http_client(base_url, http))
    }

    pub fn with_http_client(base_url: impl Into<String>, http: reqwest::Client) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url(&self, path: &str) -> String {
        build_url(&self.base_url, path)
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.http
            .request(method, self.url(path))
            .header(ACCEPT, "application/json")
            .header(CACHE_CONTROL, "no-store")
    }

    /// Send a request; `Ok(None)` means the API answered 204 No Content.
    async fn execute(&self, builder: RequestBuilder) -> ClientResult<Option<String>> {
        let response = self.http.execute(builder.build()?).await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await?;
            return Err(ClientError::RequestFailed {
                status: status.as_u16(),
                body,
            });
        }

        if status == StatusCode::NO_CONTENT {
            return Ok(None);
        }

        Ok(Some(response.text().await?))
    }

    fn decode<T: DeserializeOwned>(path: &str, body: Option<String>) -> ClientResult<T> {
        let body = body.ok_or_else(|| ClientError::MissingBody {
            path: path.to_string(),
        })?;
        serde_json::from_str(&body).map_err(|source| ClientError::Decode {
            path: path.to_string(),
            source,
        })
    }

    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&'static str, String)],
    ) -> ClientResult<T> {
        let mut builder = self.request(Method::GET, path);
        if !query.is_empty() {
            builder = builder.query(query);
        }
        let body = self.execute(builder).await?;
        Self::decode(path, body)
    }

    pub(crate) async fn send_json<B, T>(&self, method: Method, path: &str, payload: &B) -> ClientResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let builder = self.request(method, path).json(payload);
        let body = self.execute(builder).await?;
        Self::decode(path, body)
    }

    /// `DELETE` a resource. A 204 is the expected answer; any other success
    /// body must still be valid JSON and is discarded.
    pub(crate) async fn delete(&self, path: &str) -> ClientResult<()> {
        let body = self.execute(self.request(Method::DELETE, path)).await?;
        match body {
            Some(text) if !text.trim().is_empty() => {
                Self::decode::<serde_json::Value>(path, Some(text)).map(|_| ())
            }
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_base_yields_relative_paths() {
        assert_eq!(build_url("", "/v1/ping"), "/v1/ping");
    }

    #[test]
    fn trailing_slash_on_base_is_dropped() {
        assert_eq!(build_url("http://api.local/", "/v1/ping"), "http://api.local/v1/ping");
        assert_eq!(build_url("http://api.local", "v1/ping"), "http://api.local/v1/ping");
    }

    #[test]
    fn decode_reports_missing_body_for_no_content() {
        let err = ApiClient::decode::<serde_json::Value>("/v1/projects/1", None).unwrap_err();
        assert!(matches!(err, ClientError::MissingBody { .. }));
    }

    #[test]
    fn decode_reports_path_on_invalid_json() {
        let err = ApiClient::decode::<serde_json::Value>("/v1/ping", Some("<html>".to_string()))
            .unwrap_err();
        assert!(err.to_string().starts_with("invalid JSON from /v1/ping"));
    }

    #[tokio::test]
    async fn relative_url_without_base_fails_as_transport_error() {
        let client = ApiClient::new("").unwrap();
        let err = client.get::<serde_json::Value>("/v1/ping", &[]).await.unwrap_err();
        assert!(matches!(err, ClientError::Transport(_)));
    }
}
