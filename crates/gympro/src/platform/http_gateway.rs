//! Authentication gateway backed by the GymPro REST API.

use std::time::Duration;

use gympro_core::{
    AuthError, AuthGateway, AuthOperation, AuthResponse, Credentials, Registration,
};
use reqwest::StatusCode;
use reqwest::blocking::{Client, Response};
use serde::Deserialize;

const LOGIN_PATH: &str = "/api/auth/login";
const REGISTER_PATH: &str = "/api/auth/register";

/// Error body returned by the API on non-success statuses
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

pub struct HttpAuthGateway {
    client: Client,
    base_url: String,
}

impl HttpAuthGateway {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, AuthError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AuthError::Transport(e.to_string()))?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn post<T: serde::Serialize + ?Sized>(
        &self,
        path: &str,
        body: &T,
    ) -> Result<Response, AuthError> {
        let url = self.url(path);
        tracing::debug!(url = %url, "POST");
        self.client
            .post(&url)
            .json(body)
            .send()
            .map_err(|e| AuthError::Transport(e.to_string()))
    }
}

/// Turn a non-success response into the user-facing rejection.
fn rejection(operation: AuthOperation, status: StatusCode, body: &str) -> AuthError {
    let message = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .map(|reason| format!("{} {}", status.as_u16(), reason))
                .unwrap_or_else(|| format!("HTTP {}", status.as_u16()))
        });
    AuthError::Rejected { operation, message }
}

fn parse_login_body(body: &str) -> Result<AuthResponse, AuthError> {
    let response: AuthResponse =
        serde_json::from_str(body).map_err(|e| AuthError::InvalidResponse(e.to_string()))?;
    if response.token.trim().is_empty() {
        return Err(AuthError::InvalidResponse("missing token".into()));
    }
    Ok(response)
}

fn read_body(response: Response) -> Result<(StatusCode, String), AuthError> {
    let status = response.status();
    let body = response
        .text()
        .map_err(|e| AuthError::Transport(e.to_string()))?;
    Ok((status, body))
}

impl AuthGateway for HttpAuthGateway {
    fn login(&self, credentials: &Credentials) -> Result<AuthResponse, AuthError> {
        credentials.validate()?;

        let (status, body) = read_body(self.post(LOGIN_PATH, credentials)?)?;
        if !status.is_success() {
            tracing::info!(status = status.as_u16(), "Login rejected");
            return Err(rejection(AuthOperation::Login, status, &body));
        }
        parse_login_body(&body)
    }

    fn register(&self, registration: &Registration) -> Result<(), AuthError> {
        registration.validate()?;

        let (status, body) = read_body(self.post(REGISTER_PATH, registration)?)?;
        if !status.is_success() {
            tracing::info!(status = status.as_u16(), "Registration rejected");
            return Err(rejection(AuthOperation::Register, status, &body));
        }
        Ok(())
    }
}
