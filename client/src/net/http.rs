//! API client: base URL + bearer token + JSON/multipart helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every domain service goes through [`ApiClient`]. It reads the token from the
//! session store on each request, so a login or logout takes effect on the very
//! next call without rebuilding the client.

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use super::transport::{ApiRequest, ApiResponse, FormPart, Method, RequestBody, Transport};
use crate::state::session::SessionStore;

#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    transport: Arc<dyn Transport>,
    session: SessionStore,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient").field("base_url", &self.base_url).finish_non_exhaustive()
    }
}

impl ApiClient {
    pub fn new(base_url: &str, transport: Arc<dyn Transport>, session: SessionStore) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_owned(),
            transport,
            session,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Assemble a request with the bearer header when a token is stored.
    pub fn request(&self, method: Method, path: &str, body: RequestBody) -> ApiRequest {
        let mut headers = vec![("Accept".to_owned(), "application/json".to_owned())];
        if let Some(token) = self.session.token() {
            headers.push(("Authorization".to_owned(), format!("Bearer {token}")));
        }
        ApiRequest { method, url: self.url(path), headers, body }
    }

    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let resp = self.transport.send(request).await?;
        if !resp.is_success() {
            return Err(ApiError::from_status(resp.status, &resp.body));
        }
        Ok(resp)
    }

    fn decode<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
        serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    fn encode<B: Serialize>(body: &B) -> Result<RequestBody, ApiError> {
        serde_json::to_string(body)
            .map(RequestBody::Json)
            .map_err(|e| ApiError::Encode(e.to_string()))
    }

    /// `GET` and parse the JSON response.
    ///
    /// # Errors
    ///
    /// Propagates transport, HTTP status and decode failures.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let resp = self.execute(self.request(Method::Get, path, RequestBody::Empty)).await?;
        Self::decode(&resp.body)
    }

    /// Send a JSON body and parse the JSON response.
    ///
    /// # Errors
    ///
    /// Propagates encode, transport, HTTP status and decode failures.
    pub async fn send_json<B: Serialize, T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let resp = self.execute(self.request(method, path, Self::encode(body)?)).await?;
        Self::decode(&resp.body)
    }

    /// Send a JSON body; an empty response body (204) yields `None`.
    ///
    /// # Errors
    ///
    /// Propagates encode, transport, HTTP status and decode failures.
    pub async fn send_optional_json<B: Serialize, T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<Option<T>, ApiError> {
        let resp = self.execute(self.request(method, path, Self::encode(body)?)).await?;
        if resp.body.trim().is_empty() {
            return Ok(None);
        }
        Self::decode(&resp.body).map(Some)
    }

    /// Send a body-less request and parse the JSON response.
    ///
    /// # Errors
    ///
    /// Propagates transport, HTTP status and decode failures.
    pub async fn send_empty_json<T: DeserializeOwned>(&self, method: Method, path: &str) -> Result<T, ApiError> {
        let resp = self.execute(self.request(method, path, RequestBody::Empty)).await?;
        Self::decode(&resp.body)
    }

    /// Send a body-less request and ignore the response body.
    ///
    /// # Errors
    ///
    /// Propagates transport and HTTP status failures.
    pub async fn send_empty(&self, method: Method, path: &str) -> Result<(), ApiError> {
        self.execute(self.request(method, path, RequestBody::Empty)).await?;
        Ok(())
    }

    /// Send a JSON body and return the plain-text response.
    ///
    /// # Errors
    ///
    /// Propagates encode, transport and HTTP status failures.
    pub async fn send_text<B: Serialize>(&self, method: Method, path: &str, body: &B) -> Result<String, ApiError> {
        let resp = self.execute(self.request(method, path, Self::encode(body)?)).await?;
        Ok(resp.body)
    }

    /// Send a multipart body and parse the JSON response.
    ///
    /// # Errors
    ///
    /// Propagates transport, HTTP status and decode failures.
    pub async fn send_multipart<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        parts: Vec<FormPart>,
    ) -> Result<T, ApiError> {
        let resp = self.execute(self.request(method, path, RequestBody::Multipart(parts))).await?;
        Self::decode(&resp.body)
    }
}

/// Percent-encode one path segment (emails, free-form tags).
pub fn path_segment(raw: &str) -> String {
    urlencoding::encode(raw).into_owned()
}
