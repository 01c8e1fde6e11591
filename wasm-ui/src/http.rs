//! HTTP transport over the browser's fetch.

use gloo::net::http::{Request, Response};
use shei_deli::{HttpReply, Transport, TransportError};

/// Sends requests with `fetch`. Any completed exchange is a reply; only a
/// request that never got an answer is an error.
#[derive(Debug, Clone, Copy, Default)]
pub struct FetchTransport;

async fn into_reply(response: Response) -> Result<HttpReply, TransportError> {
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| TransportError(e.to_string()))?;
    Ok(HttpReply::new(status, body))
}

impl Transport for FetchTransport {
    async fn post_json(&self, url: &str, body: String) -> Result<HttpReply, TransportError> {
        let response = Request::post(url)
            .header("Content-Type", "application/json; charset=utf-8")
            .header("Accept", "application/json")
            .body(body)
            .map_err(|e| TransportError(e.to_string()))?
            .send()
            .await
            .map_err(|e| TransportError(e.to_string()))?;
        into_reply(response).await
    }

    async fn get(&self, url: &str) -> Result<HttpReply, TransportError> {
        let response = Request::get(url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| TransportError(e.to_string()))?;
        into_reply(response).await
    }
}
