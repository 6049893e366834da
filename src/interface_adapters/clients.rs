use crate::domain::{
    AuthApi, AuthOutcome, Credentials, LOGIN_REJECTED, RegistrationInfo, SIGNUP_REJECTED,
    SessionToken,
};
use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;
use url::Url;

// Thin wrapper around reqwest for auth service calls.
#[derive(Clone)]
pub struct AuthClient {
    http: Client,
    base_url: String,
}

#[derive(Deserialize)]
struct LoginResponse {
    token: String,
}

#[derive(Debug)]
pub enum AuthClientError {
    InvalidBaseUrl(url::ParseError),
    Build(reqwest::Error),
    Transport(reqwest::Error),
    Decode(reqwest::Error),
}

impl fmt::Display for AuthClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthClientError::InvalidBaseUrl(err) => write!(f, "invalid auth base url: {err}"),
            AuthClientError::Build(err) => write!(f, "failed to build auth client: {err}"),
            AuthClientError::Transport(err) => write!(f, "auth transport error: {err}"),
            AuthClientError::Decode(err) => write!(f, "auth response decode error: {err}"),
        }
    }
}

impl std::error::Error for AuthClientError {}

impl AuthClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, AuthClientError> {
        let parsed = Url::parse(base_url).map_err(AuthClientError::InvalidBaseUrl)?;
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(AuthClientError::Build)?;

        Ok(Self {
            http,
            base_url: parsed.as_str().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // POST a JSON body; `.json()` also sets the content type.
    async fn post_json<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Response, AuthClientError> {
        let url = format!("{}{}", self.base_url, path);
        self.http
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(AuthClientError::Transport)
    }
}

#[async_trait]
impl AuthApi for AuthClient {
    #[tracing::instrument(name = "auth_login", skip_all)]
    async fn login(&self, credentials: &Credentials) -> AuthOutcome<SessionToken> {
        let res = match self.post_json("/login", credentials).await {
            Ok(res) => res,
            Err(err) => return AuthOutcome::TransportError(err.to_string()),
        };
        let status = res.status();
        tracing::debug!(%status, "auth login responded");

        // Only a 200 carries a token; the body of any other status is ignored.
        if status != StatusCode::OK {
            return AuthOutcome::Rejected(LOGIN_REJECTED.to_string());
        }

        match res.json::<LoginResponse>().await {
            Ok(body) => AuthOutcome::Success(SessionToken::new(body.token)),
            Err(err) => AuthOutcome::TransportError(AuthClientError::Decode(err).to_string()),
        }
    }

    #[tracing::instrument(name = "auth_signup", skip_all)]
    async fn signup(&self, info: &RegistrationInfo) -> AuthOutcome<()> {
        let res = match self.post_json("/signup", info).await {
            Ok(res) => res,
            Err(err) => return AuthOutcome::TransportError(err.to_string()),
        };
        let status = res.status();
        tracing::debug!(%status, "auth signup responded");

        if status == StatusCode::CREATED {
            AuthOutcome::Success(())
        } else {
            AuthOutcome::Rejected(SIGNUP_REJECTED.to_string())
        }
    }
}
