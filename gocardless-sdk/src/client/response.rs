//! Response classification, decoding and rate-limit headers.

use bytes::Bytes;
use reqwest::StatusCode;
use reqwest::header::HeaderMap;
use serde::de::DeserializeOwned;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc2822;

use super::ClientError;
use crate::objects::ErrorEnvelope;

/// Requests allowed per window (currently 1000 per minute).
pub const RATE_LIMIT_HEADER: &str = "RateLimit-Limit";
/// Requests left in the current window.
pub const RATE_LIMIT_REMAINING_HEADER: &str = "RateLimit-Remaining";
/// RFC 1123 time at which the window resets.
pub const RATE_LIMIT_RESET_HEADER: &str = "RateLimit-Reset";

/// A fully read response.
///
/// The body stream is drained and released by [`ApiResponse::read`], so
/// binding never holds a connection open whichever path it takes.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    status: StatusCode,
    headers: HeaderMap,
    body: Bytes,
}

impl ApiResponse {
    pub fn new(status: StatusCode, headers: HeaderMap, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            headers,
            body: body.into(),
        }
    }

    /// Consume a `reqwest` response, reading its body once.
    pub async fn read(response: reqwest::Response) -> Result<Self, ClientError> {
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.bytes().await?;
        Ok(Self::new(status, headers, body))
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn body(&self) -> &Bytes {
        &self.body
    }

    pub fn rate_limit(&self) -> RateLimit {
        RateLimit::from_headers(&self.headers)
    }

    /// Classify the status and decode a 2xx body into `T`.
    ///
    /// * `429` → [`ClientError::RateLimited`], whatever the body says.
    /// * other non-2xx → the body's `error` object as [`ClientError::Api`].
    /// * 2xx → the body decoded as `T`.
    pub fn bind<T: DeserializeOwned>(self) -> Result<T, ClientError> {
        self.check_status()?;
        Ok(serde_json::from_slice(&self.body)?)
    }

    /// Like [`bind`](Self::bind) for calls without a response payload: the
    /// status is checked and a 2xx body is ignored.
    pub fn bind_empty(self) -> Result<(), ClientError> {
        self.check_status()
    }

    fn check_status(&self) -> Result<(), ClientError> {
        if self.status == StatusCode::TOO_MANY_REQUESTS {
            let rate_limit = self.rate_limit();
            tracing::warn!(
                limit = rate_limit.limit,
                reset = ?rate_limit.reset,
                "GoCardless rate limit exceeded"
            );
            return Err(ClientError::RateLimited(rate_limit));
        }

        if !self.status.is_success() {
            let ErrorEnvelope { error } = serde_json::from_slice(&self.body)?;
            tracing::debug!(
                status = self.status.as_u16(),
                error_type = %error.error_type,
                request_id = %error.request_id,
                "GoCardless API error"
            );
            return Err(ClientError::Api(error));
        }

        Ok(())
    }
}

/// Rate-limit state reported by the server with each response.
///
/// Missing or malformed headers read as zero / `None`; parsing never fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RateLimit {
    pub limit: u32,
    pub remaining: u32,
    pub reset: Option<OffsetDateTime>,
}

impl RateLimit {
    pub fn from_headers(headers: &HeaderMap) -> Self {
        Self {
            limit: parse_count(headers, RATE_LIMIT_HEADER),
            remaining: parse_count(headers, RATE_LIMIT_REMAINING_HEADER),
            reset: parse_reset(headers),
        }
    }
}

fn header_str<'h>(headers: &'h HeaderMap, name: &str) -> Option<&'h str> {
    headers.get(name)?.to_str().ok().map(str::trim)
}

fn parse_count(headers: &HeaderMap, name: &str) -> u32 {
    header_str(headers, name)
        .and_then(|value| value.parse().ok())
        .unwrap_or(0)
}

fn parse_reset(headers: &HeaderMap) -> Option<OffsetDateTime> {
    OffsetDateTime::parse(header_str(headers, RATE_LIMIT_RESET_HEADER)?, &Rfc2822).ok()
}
