//! Authentication gateway contract.
//!
//! The gateway itself lives outside the core (the front-end provides an HTTP
//! implementation); this module defines the request/response types, the
//! client-side validation done before any call, and the glue that turns a
//! successful login into a persisted session and an authenticated navigator.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{AuthError, NavigationError};
use crate::navigation::Navigator;
use crate::role::Role;
use crate::session::{KeyValueStore, Session, SessionStore};

/// Login request body
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    pub fn validate(&self) -> Result<(), AuthError> {
        require_all(&[&self.email, &self.password])
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Registration request body
#[derive(Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

impl Registration {
    pub fn validate(&self) -> Result<(), AuthError> {
        require_all(&[
            &self.first_name,
            &self.last_name,
            &self.email,
            &self.password,
        ])
    }
}

impl fmt::Debug for Registration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registration")
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("role", &self.role)
            .finish()
    }
}

fn require_all(fields: &[&String]) -> Result<(), AuthError> {
    if fields.iter().any(|f| f.trim().is_empty()) {
        Err(AuthError::MissingFields)
    } else {
        Ok(())
    }
}

/// User record nested in some login responses
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct UserInfo {
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

/// Successful login body. The role is read from `role`, falling back to
/// `user.role`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub user: Option<UserInfo>,
}

impl AuthResponse {
    pub fn role(&self) -> Role {
        let raw = self
            .role
            .as_deref()
            .or_else(|| self.user.as_ref().and_then(|u| u.role.as_deref()));
        Role::parse_or_default(raw)
    }

    pub fn session(&self) -> Session {
        Session::new(self.token.clone(), self.role())
    }
}

/// Remote authentication service. Each call is one-shot with no retries.
pub trait AuthGateway {
    fn login(&self, credentials: &Credentials) -> Result<AuthResponse, AuthError>;

    fn register(&self, registration: &Registration) -> Result<(), AuthError>;
}

impl<T: AuthGateway + ?Sized> AuthGateway for Box<T> {
    fn login(&self, credentials: &Credentials) -> Result<AuthResponse, AuthError> {
        (**self).login(credentials)
    }

    fn register(&self, registration: &Registration) -> Result<(), AuthError> {
        (**self).register(registration)
    }
}

/// Persist the session from a login response and mount the authenticated
/// navigator for its role.
///
/// A storage failure only costs the session its persistence across restarts,
/// so it is logged and the login still goes through.
pub fn establish_session<S: KeyValueStore>(
    store: &SessionStore<S>,
    navigator: &mut Navigator,
    session: &Session,
) -> Result<Role, NavigationError> {
    let role = session.role.unwrap_or_default();
    if navigator.is_authenticated() {
        return Err(NavigationError::AlreadyAuthenticated);
    }
    if let Err(e) = store.save(session) {
        tracing::warn!(error = %e, "Could not persist session, continuing without it");
    }
    navigator.login(role)?;
    Ok(role)
}
