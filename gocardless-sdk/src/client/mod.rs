//! HTTP client for the GoCardless Pro API.
//!
//! Gated behind the `client` cargo feature so downstream crates that only
//! need the shared types do not pull in `reqwest`.
//!
//! Every call is one awaited round trip: [`Client::build_request`] produces
//! the authenticated request, [`Client::send`] executes it and
//! [`ApiResponse::bind`] classifies the status and decodes the body. Nothing
//! is retried; a `429` comes back as [`ClientError::RateLimited`] and the
//! caller decides when to try again, e.g. after [`RateLimit::reset`].

mod request;
mod resource;
mod response;

pub use request::{
    ACCEPT_JSON, IDEMPOTENCY_KEY_HEADER, SUPPORTED_METHODS, VERSION_HEADER,
};
pub use resource::ResourceApi;
pub use response::{
    ApiResponse, RATE_LIMIT_HEADER, RATE_LIMIT_REMAINING_HEADER, RATE_LIMIT_RESET_HEADER,
    RateLimit,
};

use reqwest::Method;

use crate::config::{ClientConfig, ConfigError, Environment};
use crate::objects::{
    ApiError, Customer, CustomerBankAccount, Mandate, Payment, Resource,
};

/// Errors produced by the client.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The client could not be configured.
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    /// Only GET, POST, PUT and DELETE are used by the API.
    #[error("the request method {0} is invalid")]
    InvalidMethod(Method),

    /// Transport-level failure (DNS, TLS, connection reset, …).
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered `429 Too Many Requests`.
    #[error("rate limit exceeded ({} of {} remaining)", .0.remaining, .0.limit)]
    RateLimited(RateLimit),

    /// The server returned a non-2xx status with an error body.
    #[error("api error: {0}")]
    Api(ApiError),

    /// Response body could not be deserialized.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// Request body could not be serialized.
    #[error("failed to encode request body: {0}")]
    Serialize(serde_json::Error),

    /// Base URL and endpoint path do not form a valid URL.
    #[error("invalid url: {0}")]
    Url(#[from] url::ParseError),

    /// The entity has no identifier yet, so it cannot be addressed.
    #[error("{0} has no id; create it first")]
    MissingId(&'static str),
}

impl ClientError {
    /// The structured API error, if the server sent one.
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            ClientError::Api(error) => Some(error),
            _ => None,
        }
    }
}

/// Typed HTTP client for the GoCardless Pro API.
///
/// Holds no mutable state, so one instance can be cloned or shared across
/// tasks. Timeouts and proxies belong to the underlying
/// [`reqwest::Client`]; install a configured one with
/// [`with_http_client`](Self::with_http_client).
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    config: ClientConfig,
}

impl Client {
    /// Create a client for `environment` authenticated with `access_token`.
    pub fn new(access_token: impl Into<String>, environment: Environment) -> Self {
        Self::with_config(ClientConfig::new(access_token, environment))
    }

    pub fn with_config(config: ClientConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// Build a client from `GOCARDLESS_ACCESS_TOKEN` and
    /// `GOCARDLESS_ENVIRONMENT`.
    pub fn from_env() -> Result<Self, ClientError> {
        Ok(Self::with_config(ClientConfig::from_env()?))
    }

    /// Replace the default `reqwest::Client` with a custom one (e.g. to
    /// configure timeouts or a proxy).
    pub fn with_http_client(mut self, client: reqwest::Client) -> Self {
        self.http = client;
        self
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Generic CRUD access to any [`Resource`].
    pub fn resource<R: Resource>(&self) -> ResourceApi<'_, R> {
        ResourceApi::new(self)
    }

    /// `/customers`.
    pub fn customers(&self) -> ResourceApi<'_, Customer> {
        self.resource()
    }

    /// `/customer_bank_accounts`.
    pub fn customer_bank_accounts(&self) -> ResourceApi<'_, CustomerBankAccount> {
        self.resource()
    }

    /// `/mandates`, including the cancel and reinstate actions.
    pub fn mandates(&self) -> ResourceApi<'_, Mandate> {
        self.resource()
    }

    /// `/payments`, including the cancel and retry actions.
    pub fn payments(&self) -> ResourceApi<'_, Payment> {
        self.resource()
    }

    /// Execute a request built by [`build_request`](Self::build_request) and
    /// read the whole response.
    pub async fn send(&self, request: reqwest::Request) -> Result<ApiResponse, ClientError> {
        tracing::debug!(
            method = %request.method(),
            url = %request.url(),
            idempotent = request.headers().contains_key(IDEMPOTENCY_KEY_HEADER),
            "sending GoCardless request"
        );
        let response = self.http.execute(request).await?;
        ApiResponse::read(response).await
    }

    /// `DELETE` `path` and discard the response body.
    pub async fn delete(&self, path: &str) -> Result<(), ClientError> {
        let request = self.build_request(path, Method::DELETE, None::<&()>)?;
        self.send(request).await?.bind_empty()
    }

    async fn call<B, T>(&self, method: Method, path: &str, body: Option<&B>) -> Result<T, ClientError>
    where
        B: serde::Serialize + ?Sized,
        T: serde::de::DeserializeOwned,
    {
        let request = self.build_request(path, method, body)?;
        self.send(request).await?.bind()
    }

    async fn call_with_query<T>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ClientError>
    where
        T: serde::de::DeserializeOwned,
    {
        let mut request = self.build_request(path, Method::GET, None::<&()>)?;
        if !query.is_empty() {
            request.url_mut().query_pairs_mut().extend_pairs(query);
        }
        self.send(request).await?.bind()
    }
}
