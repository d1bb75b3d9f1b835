//! Blocking HTTP client for the pawject API

use std::fmt;
use std::time::Duration;

use reqwest::blocking::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::ApiError;

/// Base URL used when `PAWJECT_API_URL` is unset
pub const DEFAULT_API_URL: &str = "http://localhost:3000";

const GET_TIMEOUT: Duration = Duration::from_secs(10);
const POST_TIMEOUT: Duration = Duration::from_secs(30);
const PATCH_TIMEOUT: Duration = Duration::from_secs(10);

/// HTTP methods the CLI issues
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Patch,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Patch => "PATCH",
        }
    }

    /// Per-request timeout
    pub fn timeout(&self) -> Duration {
        match self {
            Method::Get => GET_TIMEOUT,
            Method::Post => POST_TIMEOUT,
            Method::Patch => PATCH_TIMEOUT,
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Client bound to one API base URL
pub struct ApiClient {
    base_url: String,
    http: Client,
}

impl ApiClient {
    /// Creates a client for `base_url` (a trailing `/` is ignored)
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let http = Client::builder().build().map_err(ApiError::Client)?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
        })
    }

    /// Full URL for an API path such as `/api/tasks`
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// `GET path?query`, decoding the JSON response
    pub fn get<T: DeserializeOwned>(&self, path: &str, query: &[(&str, &str)]) -> Result<T, ApiError> {
        let request = self.http.get(self.url(path)).query(query);
        self.send(Method::Get, path, request)
    }

    /// `POST path` with a JSON body
    pub fn post<T: DeserializeOwned, B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<T, ApiError> {
        let request = self.http.post(self.url(path)).json(body);
        self.send(Method::Post, path, request)
    }

    /// `PATCH path` with a JSON body
    pub fn patch<T: DeserializeOwned, B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<T, ApiError> {
        let request = self.http.patch(self.url(path)).json(body);
        self.send(Method::Patch, path, request)
    }

    fn send<T: DeserializeOwned>(&self, method: Method, path: &str, request: RequestBuilder) -> Result<T, ApiError> {
        let response = request
            .timeout(method.timeout())
            .send()
            .map_err(|e| ApiError::connection(&e, self.connection_hint(method)))?;

        let status = response.status();
        if status.as_u16() >= 400 {
            let body = response.text().unwrap_or_default();
            return Err(ApiError::Http {
                status: status.as_u16(),
                body,
            });
        }

        let body = response
            .text()
            .map_err(|e| ApiError::connection(&e, self.connection_hint(method)))?;

        serde_json::from_str(&body).map_err(|source| ApiError::Decode {
            url: self.url(path),
            source,
        })
    }

    /// Reads get an extra line pointing at the likely cause
    fn connection_hint(&self, method: Method) -> Option<String> {
        (method == Method::Get).then(|| format!("Is the pawject server running at {}?", self.base_url))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let client = ApiClient::new("http://localhost:3000/").unwrap();
        assert_eq!(client.url("/api/tasks"), "http://localhost:3000/api/tasks");
    }

    #[test]
    fn timeouts_per_method() {
        assert_eq!(Method::Get.timeout(), Duration::from_secs(10));
        assert_eq!(Method::Post.timeout(), Duration::from_secs(30));
        assert_eq!(Method::Patch.timeout(), Duration::from_secs(10));
    }

    #[test]
    fn only_get_carries_hint() {
        let client = ApiClient::new(DEFAULT_API_URL).unwrap();
        assert_eq!(
            client.connection_hint(Method::Get).as_deref(),
            Some("Is the pawject server running at http://localhost:3000?")
        );
        assert!(client.connection_hint(Method::Post).is_none());
        assert!(client.connection_hint(Method::Patch).is_none());
    }
}
