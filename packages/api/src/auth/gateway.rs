//! # Auth Gateway contract
//!
//! [`AuthGateway`] is the seam between the session store and the backend
//! authority. It has four operations, one per lifecycle intent:
//!
//! | Operation | Backend call | Result |
//! |-----------|--------------|--------|
//! | `login` | `POST /login {email, password}` | user record or [`AuthError`] |
//! | `signup` | `POST /signup {name, email, password}` | user record or [`AuthError`] |
//! | `logout` | `POST /logout` | acknowledgement payload or [`AuthError`] |
//! | `check_auth` | `GET /checkAuth` | [`CheckAuthOutcome`], never an error |
//!
//! `check_auth` is the silent startup probe: every failure is folded into
//! [`CheckAuthOutcome::ProbeFailed`], which is kept distinct from a confirmed
//! [`CheckAuthOutcome::Unauthenticated`] answer.

use serde_json::Value;

use super::AuthError;
use crate::models::UserInfo;

/// Result of probing the backend for the current session.
#[derive(Debug, Clone, PartialEq)]
pub enum CheckAuthOutcome {
    /// The backend confirmed a session for this user.
    Authenticated(UserInfo),
    /// The backend answered and there is no session.
    Unauthenticated,
    /// The backend could not be asked (network, timeout, unexpected answer).
    ProbeFailed(String),
}

impl CheckAuthOutcome {
    pub fn user(&self) -> Option<&UserInfo> {
        match self {
            CheckAuthOutcome::Authenticated(user) => Some(user),
            _ => None,
        }
    }

    pub fn into_user(self) -> Option<UserInfo> {
        match self {
            CheckAuthOutcome::Authenticated(user) => Some(user),
            _ => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, CheckAuthOutcome::Authenticated(_))
    }

    pub fn is_probe_failure(&self) -> bool {
        matches!(self, CheckAuthOutcome::ProbeFailed(_))
    }
}

/// Transport for the four lifecycle operations.
pub trait AuthGateway {
    fn login(
        &self,
        email: &str,
        password: &str,
    ) -> impl std::future::Future<Output = Result<UserInfo, AuthError>>;
    fn signup(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> impl std::future::Future<Output = Result<UserInfo, AuthError>>;
    fn logout(&self) -> impl std::future::Future<Output = Result<Value, AuthError>>;
    fn check_auth(&self) -> impl std::future::Future<Output = CheckAuthOutcome>;
}
