use crate::domain::{AuthProvider, AuthReply, Credentials, UpstreamError};
use async_trait::async_trait;
use hyper::ext::ReasonPhrase;
use reqwest::{Client, header::CONTENT_TYPE};

// Thin wrapper around reqwest for auth service calls.
#[derive(Clone)]
pub struct AuthClient {
    http: Client,
    pub login_url: String,
}

impl AuthClient {
    pub fn new(http: Client, login_url: impl Into<String>) -> Self {
        Self {
            http,
            login_url: login_url.into(),
        }
    }
}

#[async_trait]
impl AuthProvider for AuthClient {
    async fn authenticate(&self, credentials: Credentials) -> Result<AuthReply, UpstreamError> {
        // POST the credentials as JSON, exactly as received.
        let res = self
            .http
            .post(&self.login_url)
            .json(&credentials)
            .send()
            .await
            .map_err(|err| UpstreamError::Transport(err.to_string()))?;

        let status = res.status();
        // hyper only records the phrase when it differs from the canonical one.
        let status_text = match res.extensions().get::<ReasonPhrase>() {
            Some(reason) => String::from_utf8_lossy(reason.as_bytes()).into_owned(),
            None => status.canonical_reason().unwrap_or_default().to_string(),
        };
        let content_type = res
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);

        // Keep the raw body so a successful login is relayed byte-for-byte.
        let body = res
            .bytes()
            .await
            .map_err(|err| UpstreamError::Decode(err.to_string()))?;

        Ok(AuthReply {
            status: status.as_u16(),
            status_text,
            content_type,
            body: body.to_vec(),
        })
    }
}
