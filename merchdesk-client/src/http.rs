//! HTTP client for the Sales Reporting API

use crate::{ClientConfig, ClientError, ClientResult};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use shared::auth::TokenResponse;
use std::sync::{Arc, RwLock};

/// HTTP client for making authenticated requests to the Sales Reporting API
///
/// Cloning is cheap; clones share the same token slot, so a login (or a 401
/// logout) through one handle is visible to all of them.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
    token: Arc<RwLock<Option<String>>>,
}

impl HttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: Arc::new(RwLock::new(config.token.clone())),
        })
    }

    /// Get the current token
    pub fn token(&self) -> Option<String> {
        self.token.read().ok().and_then(|t| t.clone())
    }

    /// Whether a bearer token is currently held
    pub fn is_logged_in(&self) -> bool {
        self.token().is_some()
    }

    fn set_token(&self, token: Option<String>) {
        if let Ok(mut slot) = self.token.write() {
            *slot = token;
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Build authorization header value
    fn auth_header(&self) -> Option<String> {
        self.token().map(|t| format!("Bearer {}", t))
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self.auth_header() {
            Some(auth) => request.header(reqwest::header::AUTHORIZATION, auth),
            None => request,
        }
    }

    /// Make a GET request
    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let request = self.authorize(self.client.get(self.url(path)));
        let response = request.send().await?;
        self.handle_response(response).await
    }

    /// Make a GET request with query-string pairs
    pub(crate) async fn get_with_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> ClientResult<T> {
        let request = self.authorize(self.client.get(self.url(path)).query(query));
        let response = request.send().await?;
        self.handle_response(response).await
    }

    /// Make a POST request with JSON body
    pub(crate) async fn post<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let request = self.authorize(self.client.post(self.url(path)).json(body));
        let response = request.send().await?;
        self.handle_response(response).await
    }

    /// Make a PATCH request with JSON body, ignoring the response body
    pub(crate) async fn patch<B: serde::Serialize>(&self, path: &str, body: &B) -> ClientResult<()> {
        let request = self.authorize(self.client.patch(self.url(path)).json(body));
        let response = request.send().await?;
        self.check_status(response).await?;
        Ok(())
    }

    /// Handle the HTTP response, deserializing the success body
    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> ClientResult<T> {
        let response = self.check_status(response).await?;
        response.json().await.map_err(Into::into)
    }

    /// Map a non-2xx response to an error; a 401 discards the stored token
    async fn check_status(&self, response: reqwest::Response) -> ClientResult<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let detail = extract_detail(&response.text().await.unwrap_or_default());
        Err(match status {
            StatusCode::UNAUTHORIZED => {
                // Global logout: the session is gone, stop sending a dead token
                tracing::warn!("received 401, discarding stored token");
                self.set_token(None);
                ClientError::Unauthorized
            }
            StatusCode::FORBIDDEN => ClientError::Forbidden(detail),
            StatusCode::NOT_FOUND => ClientError::NotFound(detail),
            StatusCode::CONFLICT => ClientError::Conflict(detail),
            StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
                ClientError::Validation(detail)
            }
            _ => ClientError::Server {
                status: status.as_u16(),
                detail,
            },
        })
    }

    // ========== Auth API ==========

    /// Login with username and password
    ///
    /// The login endpoint takes a form-encoded OAuth2 password grant. On
    /// success the returned bearer token is stored and attached to all
    /// subsequent requests. A 401 here means bad credentials and does not
    /// touch any existing token.
    pub async fn login(&self, username: &str, password: &str) -> ClientResult<TokenResponse> {
        let form = [("username", username), ("password", password)];
        let response = self
            .client
            .post(self.url("/auth/login"))
            .form(&form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let detail = extract_detail(&response.text().await.unwrap_or_default());
            return Err(match status {
                StatusCode::UNAUTHORIZED => ClientError::Validation(detail),
                _ => ClientError::Server {
                    status: status.as_u16(),
                    detail,
                },
            });
        }

        let token: TokenResponse = response.json().await?;
        self.set_token(Some(token.access_token.clone()));
        tracing::debug!("login succeeded, bearer token stored");
        Ok(token)
    }

    /// Logout: discard the stored token
    pub fn logout(&self) {
        self.set_token(None);
    }
}

/// Pull the human-readable message out of an error body.
///
/// The API reports errors as `{"detail": "..."}`; anything else is passed
/// through as-is so the caller still sees something useful.
fn extract_detail(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("detail").cloned())
        .and_then(|d| match d {
            serde_json::Value::String(s) => Some(s),
            other => Some(other.to_string()),
        })
        .unwrap_or_else(|| body.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extract_detail_prefers_detail_field() {
        assert_eq!(extract_detail(r#"{"detail": "Report not found"}"#), "Report not found");
    }

    #[test]
    fn extract_detail_falls_back_to_raw_body() {
        assert_eq!(extract_detail("Internal Server Error"), "Internal Server Error");
        assert_eq!(extract_detail(""), "");
    }

    #[test]
    fn extract_detail_stringifies_structured_detail() {
        let detail = extract_detail(r#"{"detail": {"field": "status"}}"#);
        assert!(detail.contains("status"));
    }

    #[test]
    fn clones_share_the_token_slot() {
        let client = HttpClient::new(&ClientConfig::new("http://localhost:8000")).unwrap();
        let clone = client.clone();

        client.set_token(Some("tok".to_string()));
        assert_eq!(clone.token().as_deref(), Some("tok"));

        clone.logout();
        assert!(!client.is_logged_in());
    }

    #[test]
    fn url_joins_without_double_slash() {
        let client = HttpClient::new(&ClientConfig::new("http://localhost:8000/")).unwrap();
        assert_eq!(
            client.url("/sales/daily-sales-reports"),
            "http://localhost:8000/sales/daily-sales-reports"
        );
    }
}
