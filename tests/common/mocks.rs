//! Mock transport for driving the chat flow without a browser.

use std::cell::RefCell;
use std::collections::HashMap;

use async_trait::async_trait;
use resource_finder_ui::api::{RawResponse, Transport};
use resource_finder_ui::types::SearchRequest;

/// Scripted transport: each URL either answers with a fixed response or
/// fails as if unreachable. Unscripted URLs are unreachable.
#[derive(Default)]
pub struct MockTransport {
    routes: HashMap<String, Result<RawResponse, String>>,
    calls: RefCell<Vec<(String, SearchRequest)>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `url` with `status` and a JSON body
    pub fn respond(mut self, url: &str, status: u16, body: serde_json::Value) -> Self {
        let status_text = if (200..300).contains(&status) { "OK" } else { "Error" };
        self.routes.insert(
            url.to_string(),
            Ok(RawResponse {
                status,
                status_text: status_text.to_string(),
                body: body.to_string(),
            }),
        );
        self
    }

    /// Make `url` fail at the transport level
    pub fn unreachable(mut self, url: &str) -> Self {
        self.routes
            .insert(url.to_string(), Err("Failed to fetch".to_string()));
        self
    }

    pub fn calls(&self) -> Vec<(String, SearchRequest)> {
        self.calls.borrow().clone()
    }

    pub fn called_urls(&self) -> Vec<String> {
        self.calls.borrow().iter().map(|(url, _)| url.clone()).collect()
    }
}

#[async_trait(?Send)]
impl Transport for MockTransport {
    async fn post_json(&self, url: &str, body: &SearchRequest) -> Result<RawResponse, String> {
        self.calls
            .borrow_mut()
            .push((url.to_string(), body.clone()));
        self.routes
            .get(url)
            .cloned()
            .unwrap_or_else(|| Err("Failed to fetch".to_string()))
    }
}
