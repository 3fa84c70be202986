//! Stateless request builder and response parser for the resource store.
//!
//! # Design
//! `StoreClient` holds the base URL and the collection (table) name, both
//! injected at construction so tests and multiple instances can target
//! different collections. Each of the four operations is split into a
//! `build_*` method producing an [`HttpRequest`] and a `parse_*` method
//! consuming an [`HttpResponse`]; a [`Transport`](crate::transport::Transport)
//! sits between the two.

use crate::error::TransportError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{Todo, TodoDraft, TodoPatch};

/// Builds and parses the four CRUD operations against one collection.
#[derive(Debug, Clone)]
pub struct StoreClient {
    base_url: String,
    collection: String,
}

impl StoreClient {
    pub fn new(base_url: &str, collection: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            collection: collection.to_string(),
        }
    }

    fn collection_url(&self) -> String {
        format!("{}/{}", self.base_url, self.collection)
    }

    fn row_url(&self, id: i64) -> String {
        format!("{}/{}/{id}", self.base_url, self.collection)
    }

    pub fn build_list(&self) -> HttpRequest {
        HttpRequest::bare(HttpMethod::Get, self.collection_url())
    }

    pub fn build_create(&self, draft: &TodoDraft) -> Result<HttpRequest, TransportError> {
        let body =
            serde_json::to_string(draft).map_err(|e| TransportError::Serialize(e.to_string()))?;
        Ok(HttpRequest::json(HttpMethod::Post, self.collection_url(), body))
    }

    pub fn build_update(&self, id: i64, patch: &TodoPatch) -> Result<HttpRequest, TransportError> {
        let body =
            serde_json::to_string(patch).map_err(|e| TransportError::Serialize(e.to_string()))?;
        Ok(HttpRequest::json(HttpMethod::Put, self.row_url(id), body))
    }

    pub fn build_delete(&self, id: i64) -> HttpRequest {
        HttpRequest::bare(HttpMethod::Delete, self.row_url(id))
    }

    pub fn parse_list(&self, response: HttpResponse) -> Result<Vec<Todo>, TransportError> {
        expect_status(&response, 200)?;
        serde_json::from_str(&response.body).map_err(|e| TransportError::Deserialize(e.to_string()))
    }

    pub fn parse_create(&self, response: HttpResponse) -> Result<Todo, TransportError> {
        expect_status(&response, 201)?;
        serde_json::from_str(&response.body).map_err(|e| TransportError::Deserialize(e.to_string()))
    }

    pub fn parse_update(&self, response: HttpResponse) -> Result<Todo, TransportError> {
        expect_status(&response, 200)?;
        serde_json::from_str(&response.body).map_err(|e| TransportError::Deserialize(e.to_string()))
    }

    pub fn parse_delete(&self, response: HttpResponse) -> Result<(), TransportError> {
        expect_status(&response, 204)?;
        Ok(())
    }
}

/// Map a non-expected status to the matching `TransportError` variant.
fn expect_status(response: &HttpResponse, expected: u16) -> Result<(), TransportError> {
    if response.status == expected {
        return Ok(());
    }
    if response.status == 404 {
        return Err(TransportError::NotFound);
    }
    Err(TransportError::Http {
        status: response.status,
        body: response.body.clone(),
    })
}
