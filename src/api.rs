//! API client for the search backend

use async_trait::async_trait;
use gloo_net::http::Request;

use crate::error::{ChatError, Result};
use crate::types::{ApiError, QueryInfo, SearchOutcome, SearchRequest, SearchResponse, SearchResult};

/// Status, status text and body of a completed HTTP exchange.
#[derive(Debug, Clone, PartialEq)]
pub struct RawResponse {
    pub status: u16,
    pub status_text: String,
    pub body: String,
}

impl RawResponse {
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Something that can POST a JSON body and hand back the raw response.
///
/// `Err` means no response was received at all (DNS, refused connection,
/// CORS, ...). Any HTTP status, including 4xx/5xx, is an `Ok`.
#[async_trait(?Send)]
pub trait Transport {
    async fn post_json(&self, url: &str, body: &SearchRequest) -> std::result::Result<RawResponse, String>;
}

/// Browser fetch via gloo-net
#[derive(Debug, Clone, Copy, Default)]
pub struct GlooTransport;

#[async_trait(?Send)]
impl Transport for GlooTransport {
    async fn post_json(&self, url: &str, body: &SearchRequest) -> std::result::Result<RawResponse, String> {
        let req = Request::post(url)
            .header("Content-Type", "application/json")
            .json(body)
            .map_err(|e| format!("Failed to serialize request: {}", e))?;

        let resp = req
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        let status = resp.status();
        let status_text = resp.status_text();
        // A body we cannot read is treated like an empty one; the status still counts.
        let body = resp.text().await.unwrap_or_default();

        Ok(RawResponse {
            status,
            status_text,
            body,
        })
    }
}

/// Try each endpoint in order until one answers.
///
/// Only transport failures move on to the next endpoint; the first response
/// received is final, whatever its status.
pub async fn post_with_fallback<T>(
    transport: &T,
    endpoints: &[String],
    request: &SearchRequest,
) -> Result<RawResponse>
where
    T: Transport + ?Sized,
{
    let mut last_err = None;

    for url in endpoints {
        match transport.post_json(url, request).await {
            Ok(resp) => {
                tracing::debug!("{} answered with status {}", url, resp.status);
                return Ok(resp);
            }
            Err(e) => {
                tracing::warn!("Endpoint {} unreachable: {}", url, e);
                last_err = Some(e);
            }
        }
    }

    Err(ChatError::Transport(
        last_err.unwrap_or_else(|| "no endpoints configured".to_string()),
    ))
}

/// Turn a raw response into results, or the error the user should see.
pub fn decode_response(resp: &RawResponse) -> Result<SearchOutcome> {
    if !resp.ok() {
        let detail = match serde_json::from_str::<ApiError>(&resp.body) {
            Ok(err) => err.detail,
            Err(_) => Some(resp.status_text.clone()),
        }
        .filter(|d| !d.is_empty())
        .unwrap_or_else(|| "Server error".to_string());

        return Err(ChatError::Http {
            status: resp.status,
            detail,
        });
    }

    let data: SearchResponse =
        serde_json::from_str(&resp.body).map_err(|e| ChatError::Decode(e.to_string()))?;

    let results = match data.results {
        serde_json::Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match serde_json::from_value::<SearchResult>(item) {
                Ok(result) => Some(result),
                Err(e) => {
                    tracing::warn!("Skipping malformed result: {}", e);
                    None
                }
            })
            .collect(),
        serde_json::Value::Null => Vec::new(),
        other => {
            tracing::warn!("Expected a results array, got {}", other);
            Vec::new()
        }
    };

    let echo = QueryInfo::from_value(&data.query_info)
        .echo()
        .unwrap_or_default()
        .to_string();

    Ok(SearchOutcome { results, echo })
}

/// Run one search: fallback POST, then decode.
pub async fn search<T>(
    transport: &T,
    endpoints: &[String],
    request: &SearchRequest,
) -> Result<SearchOutcome>
where
    T: Transport + ?Sized,
{
    let resp = post_with_fallback(transport, endpoints, request).await?;
    decode_response(&resp)
}
