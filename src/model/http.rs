/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::application::rate_limiter::RateLimiter;
use crate::constants::SOAP_CONTENT_TYPE;
use crate::error::AppError;
use crate::model::requests::SoapRequest;
use crate::model::soap::SoapReply;
use reqwest::header::{HeaderMap, SET_COOKIE};
use reqwest::{Body, Client, Method, Response, StatusCode};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, error};

/// Result of one SOAP round trip
#[derive(Debug, Clone, PartialEq)]
pub struct SoapExchange {
    /// Session cookie set by the response, if any
    pub session_cookie: Option<String>,
    /// Decoded response body
    pub reply: SoapReply,
}

/// Makes an HTTP request through the shared rate limiter
///
/// # Arguments
///
/// * `client` - The HTTP client to use for the request
/// * `rate_limiter` - Shared rate limiter to control request rate
/// * `method` - HTTP method
/// * `url` - Full URL to request
/// * `headers` - Vector of (header_name, header_value) tuples
/// * `body` - Optional raw request body
///
/// # Returns
///
/// * `Ok(Response)` - for successful responses and for `500 Internal Server Error`,
///   which is how SOAP servers deliver faults
/// * `Err(AppError::Unauthorized)` - for `401` and `403`
/// * `Err(AppError)` - for transport failures and any other status
pub async fn make_http_request<B: Into<Body>>(
    client: &Client,
    rate_limiter: Arc<RwLock<RateLimiter>>,
    method: Method,
    url: &str,
    headers: Vec<(&str, &str)>,
    body: Option<B>,
) -> Result<Response, AppError> {
    {
        let limiter = rate_limiter.read().await;
        limiter.wait().await;
    }

    debug!("{} {}", method, url);

    let mut request = client.request(method, url);
    for (name, value) in &headers {
        request = request.header(*name, *value);
    }
    if let Some(b) = body {
        request = request.body(b);
    }

    let response = request.send().await.inspect_err(|e| {
        error!("Problem with request to {}: {}", url, e);
    })?;
    let status = response.status();
    debug!("Response status: {}", status);

    if status.is_success() || status == StatusCode::INTERNAL_SERVER_ERROR {
        return Ok(response);
    }

    let body_text = response.text().await.unwrap_or_default();
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            error!("Unauthorized: {}", body_text);
            Err(AppError::Unauthorized)
        }
        _ => {
            error!("Request failed with status {}: {}", status, body_text);
            Err(AppError::Unexpected(status))
        }
    }
}

/// Sends a SOAP request to `{base_url}/{method}` and decodes the reply
///
/// # Arguments
///
/// * `cookie` - Session cookie to attach, if the caller holds one
pub async fn send_soap(
    client: &Client,
    rate_limiter: Arc<RwLock<RateLimiter>>,
    base_url: &str,
    request: &SoapRequest,
    cookie: Option<&str>,
) -> Result<SoapExchange, AppError> {
    let url = format!(
        "{}{}",
        base_url.trim_end_matches('/'),
        request.method().path()
    );

    let mut headers = vec![("Content-Type", SOAP_CONTENT_TYPE)];
    if let Some(cookie) = cookie {
        headers.push(("Cookie", cookie));
    }

    let response = make_http_request(
        client,
        rate_limiter,
        Method::POST,
        &url,
        headers,
        Some(request.envelope()),
    )
    .await?;

    let status = response.status();
    let session_cookie = session_cookie(response.headers());
    let text = response.text().await?;

    let reply = SoapReply::parse(&text).map_err(|e| {
        error!("Unreadable SOAP response ({}) from {}: {}", status, url, e);
        if status.is_success() {
            e
        } else {
            AppError::Unexpected(status)
        }
    })?;

    Ok(SoapExchange {
        session_cookie,
        reply,
    })
}

/// Builds a `Cookie` header value from the `Set-Cookie` headers of a response
///
/// Only the `name=value` part of each cookie is kept; attributes such as `path`
/// or `HttpOnly` are dropped. Returns `None` when no cookie was set.
#[must_use]
pub fn session_cookie(headers: &HeaderMap) -> Option<String> {
    let cookies: Vec<&str> = headers
        .get_all(SET_COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .filter_map(|value| value.split(';').next())
        .map(str::trim)
        .filter(|pair| !pair.is_empty())
        .collect();

    if cookies.is_empty() {
        None
    } else {
        Some(cookies.join("; "))
    }
}
