//! Forwarding of inbound requests to the backend origin.

use axum::{
    http::{HeaderMap, Method, StatusCode},
    response::{IntoResponse, Response},
};
use dioxus_logger::tracing;
use reqwest::{
    header::{ACCEPT_ENCODING, CONTENT_LENGTH, HOST},
    Url,
};

/// Headers scoped to a single connection that a proxy must not pass on.
fn is_hop_by_hop_header(name: &str) -> bool {
    matches!(
        name.to_lowercase().as_str(),
        "connection"
            | "keep-alive"
            | "proxy-authenticate"
            | "proxy-authorization"
            | "proxy-connection"
            | "te"
            | "trailer"
            | "trailers"
            | "transfer-encoding"
            | "upgrade"
    )
}

/// Copy the inbound headers that may be sent on to the backend.
///
/// `host` and `content-length` describe the inbound connection and body, and `accept-encoding`
/// is dropped so the backend answers with a body that can be relayed as text.
pub fn forwardable_request_headers(headers: &HeaderMap) -> HeaderMap {
    let mut forwarded = HeaderMap::with_capacity(headers.len());

    for (name, value) in headers {
        if is_hop_by_hop_header(name.as_str())
            || name == HOST
            || name == CONTENT_LENGTH
            || name == ACCEPT_ENCODING
        {
            continue;
        }

        forwarded.append(name.clone(), value.clone());
    }

    forwarded
}

/// Copy the backend response headers that may be relayed to the caller.
pub fn relayable_response_headers(headers: &HeaderMap) -> HeaderMap {
    let mut relayed = HeaderMap::with_capacity(headers.len());

    for (name, value) in headers {
        if is_hop_by_hop_header(name.as_str()) || name == CONTENT_LENGTH {
            continue;
        }

        relayed.append(name.clone(), value.clone());
    }

    relayed
}

/// A backend response ready to be returned to the caller unchanged.
#[derive(Debug)]
pub struct ProxiedResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl IntoResponse for ProxiedResponse {
    fn into_response(self) -> Response {
        (self.status, self.headers, self.body).into_response()
    }
}

/// HTTP client bound to the backend origin.
#[derive(Clone, Debug)]
pub struct ProxyClient {
    http: reqwest::Client,
    origin: Url,
}

impl ProxyClient {
    pub fn new(origin: Url, http: reqwest::Client) -> Self {
        Self { http, origin }
    }

    pub fn origin(&self) -> &Url {
        &self.origin
    }

    /// Send `method` with the forwardable subset of `headers` to the origin, without a body.
    ///
    /// # Returns
    /// - `Ok(ProxiedResponse)` - The backend's status, relayable headers and body text
    /// - `Err(reqwest::Error)` - The origin could not be reached or the body could not be read
    pub async fn forward(
        &self,
        method: Method,
        headers: &HeaderMap,
    ) -> Result<ProxiedResponse, reqwest::Error> {
        let response = self
            .http
            .request(method.clone(), self.origin.clone())
            .headers(forwardable_request_headers(headers))
            .send()
            .await?;

        let status = response.status();
        let headers = relayable_response_headers(response.headers());
        let body = response.text().await?;

        tracing::debug!(
            method = %method,
            status = %status.as_u16(),
            "Backend response: {}",
            body
        );

        Ok(ProxiedResponse {
            status,
            headers,
            body,
        })
    }
}
