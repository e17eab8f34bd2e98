//! Scripted transport shared by the service and state tests.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, PoisonError};

use async_trait::async_trait;

use super::error::ApiError;
use super::http::ApiClient;
use super::transport::{ApiRequest, ApiResponse, Transport};
use crate::state::session::SessionStore;
use crate::util::storage::MemoryStorage;

pub const BASE: &str = "http://test.local/api";

/// Records every request and answers from a queue; an empty queue answers `200 {}`.
#[derive(Default)]
pub struct StubTransport {
    requests: Mutex<Vec<ApiRequest>>,
    responses: Mutex<VecDeque<Result<ApiResponse, ApiError>>>,
}

impl StubTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn respond(&self, status: u16, body: &str) {
        self.responses
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push_back(Ok(ApiResponse { status, body: body.to_owned() }));
    }

    pub fn fail(&self, err: ApiError) {
        self.responses.lock().unwrap_or_else(PoisonError::into_inner).push_back(Err(err));
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    pub fn last(&self) -> ApiRequest {
        self.requests().pop().expect("no request recorded")
    }

    pub fn count(&self) -> usize {
        self.requests.lock().unwrap_or_else(PoisonError::into_inner).len()
    }
}

#[async_trait(?Send)]
impl Transport for StubTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        self.requests.lock().unwrap_or_else(PoisonError::into_inner).push(request);
        self.responses
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pop_front()
            .unwrap_or_else(|| Ok(ApiResponse { status: 200, body: "{}".to_owned() }))
    }
}

/// Client over a stub transport and fresh in-memory storage.
pub fn client() -> (Arc<StubTransport>, ApiClient) {
    let stub = StubTransport::new();
    let session = SessionStore::new(Arc::new(MemoryStorage::new()));
    let api = ApiClient::new(BASE, stub.clone(), session);
    (stub, api)
}

pub fn url(path: &str) -> String {
    format!("{BASE}{path}")
}
