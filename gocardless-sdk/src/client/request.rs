//! Outbound request construction.

use reqwest::Method;
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use serde::Serialize;
use url::Url;
use uuid::Uuid;

use super::{Client, ClientError};

/// Header carrying the pinned API version.
pub const VERSION_HEADER: &str = "GoCardless-Version";

/// Header carrying the per-call deduplication token on `POST`.
pub const IDEMPOTENCY_KEY_HEADER: &str = "Idempotency-Key";

/// Value of both `Accept` and `Content-Type`.
pub const ACCEPT_JSON: &str = "application/json";

/// The verbs the API uses. Anything else, `PATCH` included, is rejected
/// before a request is built.
pub const SUPPORTED_METHODS: [Method; 4] = [Method::GET, Method::POST, Method::PUT, Method::DELETE];

impl Client {
    /// Build an authenticated request for `path` relative to the base URL.
    ///
    /// * `path` is appended to the base URL as-is.
    /// * `body`, when present, is sent as JSON; otherwise the body is empty.
    /// * `POST` requests get a fresh `Idempotency-Key` so the server can
    ///   deduplicate a retried create.
    ///
    /// No I/O happens here.
    pub fn build_request<B: Serialize + ?Sized>(
        &self,
        path: &str,
        method: Method,
        body: Option<&B>,
    ) -> Result<reqwest::Request, ClientError> {
        if !SUPPORTED_METHODS.contains(&method) {
            return Err(ClientError::InvalidMethod(method));
        }

        let url = Url::parse(&format!("{}{}", self.config.base_url(), path))?;

        let body = match body {
            Some(body) => serde_json::to_vec(body).map_err(ClientError::Serialize)?,
            None => Vec::new(),
        };

        let mut builder = self
            .http
            .request(method.clone(), url)
            .header(AUTHORIZATION, format!("Bearer {}", self.config.access_token()))
            .header(VERSION_HEADER, self.config.api_version())
            .header(ACCEPT, ACCEPT_JSON)
            .header(CONTENT_TYPE, ACCEPT_JSON)
            .body(body);

        if method == Method::POST {
            builder = builder.header(IDEMPOTENCY_KEY_HEADER, Uuid::new_v4().to_string());
        }

        Ok(builder.build()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Environment;
    use serde::ser::Error as _;
    use std::collections::HashSet;

    fn client() -> Client {
        Client::new("tok123", Environment::Sandbox)
    }

    fn body_bytes(request: &reqwest::Request) -> &[u8] {
        request
            .body()
            .and_then(|body| body.as_bytes())
            .unwrap_or_default()
    }

    #[test]
    fn test_default_headers_for_every_supported_method() {
        let client = client();
        for method in SUPPORTED_METHODS {
            let request = client
                .build_request("customers", method.clone(), None::<&()>)
                .unwrap();

            assert_eq!(*request.method(), method);
            assert_eq!(
                request.url().as_str(),
                "https://api-sandbox.gocardless.com/customers"
            );
            let headers = request.headers();
            assert_eq!(headers[AUTHORIZATION], "Bearer tok123");
            assert_eq!(headers[VERSION_HEADER], "2015-07-06");
            assert_eq!(headers[ACCEPT], "application/json");
            assert_eq!(headers[CONTENT_TYPE], "application/json");
        }
    }

    #[test]
    fn test_rejects_unsupported_methods() {
        let client = client();
        for method in [Method::PATCH, Method::HEAD, Method::OPTIONS] {
            let err = client
                .build_request("customers", method.clone(), None::<&()>)
                .unwrap_err();
            assert!(matches!(err, ClientError::InvalidMethod(m) if m == method));
        }
    }

    #[test]
    fn test_idempotency_key_only_on_post() {
        let client = client();
        let mut keys = HashSet::new();
        for _ in 0..16 {
            let request = client
                .build_request("payments", Method::POST, Some(&serde_json::json!({})))
                .unwrap();
            let key = request.headers()[IDEMPOTENCY_KEY_HEADER]
                .to_str()
                .unwrap()
                .to_string();
            assert!(Uuid::parse_str(&key).is_ok());
            assert!(keys.insert(key), "idempotency keys must never repeat");
        }

        for method in [Method::GET, Method::PUT, Method::DELETE] {
            let request = client
                .build_request("payments/PM1", method, None::<&()>)
                .unwrap();
            assert!(!request.headers().contains_key(IDEMPOTENCY_KEY_HEADER));
        }
    }

    #[test]
    fn test_body_is_json_or_empty() {
        let client = client();

        let request = client
            .build_request("customers", Method::GET, None::<&()>)
            .unwrap();
        assert!(body_bytes(&request).is_empty());

        let body = serde_json::json!({ "customers": { "given_name": "Frank" } });
        let request = client
            .build_request("customers", Method::POST, Some(&body))
            .unwrap();
        let sent: serde_json::Value = serde_json::from_slice(body_bytes(&request)).unwrap();
        assert_eq!(sent, body);
    }

    #[test]
    fn test_path_is_appended_verbatim() {
        let config = crate::config::ClientConfig::new("tok", Environment::Live)
            .with_base_url("http://localhost:9000/")
            .unwrap();
        let client = Client::with_config(config);
        let request = client
            .build_request("/mandates//MD1", Method::GET, None::<&()>)
            .unwrap();
        assert_eq!(request.url().as_str(), "http://localhost:9000//mandates//MD1");
    }

    struct Unencodable;

    impl Serialize for Unencodable {
        fn serialize<S: serde::Serializer>(&self, _: S) -> Result<S::Ok, S::Error> {
            Err(S::Error::custom("cannot encode"))
        }
    }

    #[test]
    fn test_encode_failure_is_reported() {
        let err = client()
            .build_request("customers", Method::POST, Some(&Unencodable))
            .unwrap_err();
        assert!(matches!(err, ClientError::Serialize(_)));
    }
}
