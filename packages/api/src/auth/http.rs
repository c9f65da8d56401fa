//! HTTP implementation of [`AuthGateway`] on top of `reqwest`.

use std::sync::Arc;

use reqwest::cookie::Jar;
use reqwest::{Client, RequestBuilder, Response, StatusCode, Url};
use serde::Serialize;
use serde_json::Value;
use store::{KeyValueStore, Storage};

use super::cookies::{set_cookie_headers, SessionCookies};
use super::{AuthError, AuthGateway, CheckAuthOutcome};
use crate::models::UserInfo;
use crate::settings::ApiSettings;

#[derive(Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct SignupRequest<'a> {
    name: &'a str,
    email: &'a str,
    password: &'a str,
}

/// Cookie-carrying client for the backend authority.
///
/// Every request shares one cookie jar, and no request is retried.
#[derive(Debug)]
pub struct HttpAuthGateway<S> {
    client: Client,
    base_url: String,
    origin: Url,
    jar: Arc<Jar>,
    cookies: SessionCookies<S>,
}

impl<S: KeyValueStore> HttpAuthGateway<S> {
    /// Create a gateway for `settings.base_url`, persisting session cookies in
    /// `storage`.
    pub fn new(settings: &ApiSettings, storage: Storage<S>) -> Result<Self, AuthError> {
        let base_url = settings.base_url.trim_end_matches('/').to_string();
        let origin = Url::parse(&base_url)
            .map_err(|e| AuthError::Config(format!("invalid base URL {base_url:?}: {e}")))?;

        let jar = Arc::new(Jar::default());
        let client = Client::builder()
            .cookie_provider(jar.clone())
            .timeout(settings.timeout())
            .build()
            .map_err(|e| AuthError::Config(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url,
            origin,
            jar,
            cookies: SessionCookies::new(storage),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Seed the cookie jar from persisted session cookies.
    pub async fn restore_cookies(&self) -> usize {
        let restored = self.cookies.restore(&self.jar, &self.origin).await;
        tracing::debug!("Restored {} session cookie(s)", restored);
        restored
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Send, remember cookies, and turn non-2xx into [`AuthError::Backend`].
    async fn send(&self, request: RequestBuilder) -> Result<Response, AuthError> {
        let response = request.send().await.map_err(AuthError::from_transport)?;
        self.cookies.remember(set_cookie_headers(&response)).await;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(AuthError::from_status(status.as_u16(), &body))
    }

    async fn credentials_call<T: Serialize>(
        &self,
        path: &str,
        body: &T,
    ) -> Result<UserInfo, AuthError> {
        let response = self.send(self.client.post(self.endpoint(path)).json(body)).await?;
        read_user(response)
            .await?
            .ok_or_else(|| AuthError::InvalidResponse("empty user payload".to_string()))
    }
}

/// Decode a user body; an empty or `null` body means "no user".
async fn read_user(response: Response) -> Result<Option<UserInfo>, AuthError> {
    let text = response
        .text()
        .await
        .map_err(|e| AuthError::InvalidResponse(e.to_string()))?;
    let value = parse_json(&text)?;
    if value.is_null() {
        return Ok(None);
    }
    serde_json::from_value(value)
        .map(Some)
        .map_err(|e| AuthError::InvalidResponse(e.to_string()))
}

fn parse_json(text: &str) -> Result<Value, AuthError> {
    if text.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(text).map_err(|e| AuthError::InvalidResponse(e.to_string()))
}

/// Any 2xx body acknowledges a logout; non-JSON text is kept as a string.
fn parse_ack(text: String) -> Value {
    parse_json(&text).unwrap_or(Value::String(text))
}

impl<S: KeyValueStore> AuthGateway for HttpAuthGateway<S> {
    async fn login(&self, email: &str, password: &str) -> Result<UserInfo, AuthError> {
        self.credentials_call("/login", &LoginRequest { email, password })
            .await
    }

    async fn signup(&self, name: &str, email: &str, password: &str) -> Result<UserInfo, AuthError> {
        self.credentials_call(
            "/signup",
            &SignupRequest {
                name,
                email,
                password,
            },
        )
        .await
    }

    async fn logout(&self) -> Result<Value, AuthError> {
        let response = self.send(self.client.post(self.endpoint("/logout"))).await?;
        let text = response
            .text()
            .await
            .map_err(|e| AuthError::InvalidResponse(e.to_string()))?;
        self.cookies.forget().await;
        Ok(parse_ack(text))
    }

    async fn check_auth(&self) -> CheckAuthOutcome {
        let result = match self.send(self.client.get(self.endpoint("/checkAuth"))).await {
            Ok(response) => read_user(response).await,
            Err(err) => Err(err),
        };
        match result {
            Ok(Some(user)) => CheckAuthOutcome::Authenticated(user),
            Ok(None) => {
                self.cookies.forget().await;
                CheckAuthOutcome::Unauthenticated
            }
            Err(AuthError::Backend { status, .. })
                if status == StatusCode::UNAUTHORIZED.as_u16()
                    || status == StatusCode::FORBIDDEN.as_u16() =>
            {
                self.cookies.forget().await;
                CheckAuthOutcome::Unauthenticated
            }
            Err(err) => {
                tracing::warn!("Session probe failed: {}", err);
                CheckAuthOutcome::ProbeFailed(err.to_string())
            }
        }
    }
}
