//! Request/response plumbing beneath the API client.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR) and native builds: `BrowserTransport` answers
//! [`ApiError::Unavailable`], since the storefront only talks to the backend
//! from the browser. Tests swap in their own [`Transport`].

#![allow(clippy::unused_async)]

use async_trait::async_trait;

use super::error::ApiError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }
}

/// One named part of a `multipart/form-data` body.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormPart {
    pub name: String,
    pub content_type: String,
    /// Present for file parts; the browser sends `blob` otherwise.
    pub filename: Option<String>,
    pub bytes: Vec<u8>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RequestBody {
    Empty,
    /// Pre-encoded JSON text.
    Json(String),
    Multipart(Vec<FormPart>),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: RequestBody,
}

impl ApiRequest {
    /// First header value matching `name` (case-insensitive).
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends one request and returns the raw response.
///
/// Futures are `?Send`: browser fetch handles are single-threaded.
#[async_trait(?Send)]
pub trait Transport: Send + Sync {
    /// # Errors
    ///
    /// Returns [`ApiError::Transport`] when no response was received.
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError>;
}

/// `fetch`-backed transport.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTransport;

#[async_trait(?Send)]
impl Transport for BrowserTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            browser::send(request).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            Err(ApiError::Unavailable)
        }
    }
}

#[cfg(feature = "hydrate")]
mod browser {
    use gloo_net::http::{Method as HttpMethod, RequestBuilder};
    use wasm_bindgen::JsValue;

    use super::{ApiError, ApiRequest, ApiResponse, FormPart, Method, RequestBody};

    fn js_error(value: JsValue) -> ApiError {
        ApiError::Encode(format!("{value:?}"))
    }

    fn http_method(method: Method) -> HttpMethod {
        match method {
            Method::Get => HttpMethod::GET,
            Method::Post => HttpMethod::POST,
            Method::Put => HttpMethod::PUT,
            Method::Patch => HttpMethod::PATCH,
            Method::Delete => HttpMethod::DELETE,
        }
    }

    fn form_data(parts: &[FormPart]) -> Result<web_sys::FormData, ApiError> {
        let form = web_sys::FormData::new().map_err(js_error)?;
        for part in parts {
            let chunks = js_sys::Array::new();
            chunks.push(&js_sys::Uint8Array::from(part.bytes.as_slice()));
            let options = web_sys::BlobPropertyBag::new();
            options.set_type(&part.content_type);
            let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&chunks, &options).map_err(js_error)?;
            match &part.filename {
                Some(filename) => form.append_with_blob_and_filename(&part.name, &blob, filename),
                None => form.append_with_blob(&part.name, &blob),
            }
            .map_err(js_error)?;
        }
        Ok(form)
    }

    pub(super) async fn send(request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let mut builder = RequestBuilder::new(&request.url).method(http_method(request.method));
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }
        // Multipart bodies get their boundary Content-Type from the browser.
        let built = match request.body {
            RequestBody::Empty => builder.build(),
            RequestBody::Json(text) => builder.header("Content-Type", "application/json").body(text),
            RequestBody::Multipart(parts) => builder.body(form_data(&parts)?),
        }
        .map_err(|e| ApiError::Encode(e.to_string()))?;

        let resp = built.send().await.map_err(|e| ApiError::Transport(e.to_string()))?;
        let status = resp.status();
        let body = resp.text().await.map_err(|e| ApiError::Transport(e.to_string()))?;
        Ok(ApiResponse { status, body })
    }
}
