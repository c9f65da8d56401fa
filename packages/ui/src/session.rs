//! # Session store
//!
//! [`SessionStore`] is the single authoritative record of who is signed in.
//! Its lifecycle operations (`login`, `signup`, `logout`, `check_auth`) and
//! `clear_error` are the only way the state changes; each one marks the
//! session as loading, awaits the [`AuthGateway`], and applies the result in
//! one update.
//!
//! Where the state lives is abstracted by [`SessionCell`]: the UI injects a
//! Dioxus signal (see [`crate::auth`]), hosts and tests use [`SharedSession`].
//!
//! Overlapping calls are not serialised. If two operations are in flight, the
//! one that finishes last wins; callers disable their controls while
//! [`SessionState::loading`] is set.

use std::sync::{Arc, Mutex, PoisonError};

use api::{AuthError, AuthGateway, CheckAuthOutcome, UserInfo};

/// Snapshot of the authentication state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    pub user: Option<UserInfo>,
    /// A lifecycle operation is in flight.
    pub loading: bool,
    /// Last human-readable failure, cleared at the start of the next
    /// login/signup/logout or by `clear_error`.
    pub error: Option<String>,
    /// Whether the last session probe reached the backend.
    pub online: bool,
}

/// Which screen graph the app should mount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    Authenticated,
    Unauthenticated,
}

impl SessionState {
    /// Derived from `user`, so it can never disagree with it.
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn status(&self) -> SessionStatus {
        if self.is_authenticated() {
            SessionStatus::Authenticated
        } else {
            SessionStatus::Unauthenticated
        }
    }
}

/// Holder of a [`SessionState`].
pub trait SessionCell {
    fn snapshot(&self) -> SessionState;
    fn update(&self, f: impl FnOnce(&mut SessionState));
}

/// Thread-safe cell for use outside a Dioxus runtime.
#[derive(Debug, Clone, Default)]
pub struct SharedSession(Arc<Mutex<SessionState>>);

impl SharedSession {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PartialEq for SharedSession {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl SessionCell for SharedSession {
    fn snapshot(&self) -> SessionState {
        self.0.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    fn update(&self, f: impl FnOnce(&mut SessionState)) {
        f(&mut self.0.lock().unwrap_or_else(PoisonError::into_inner));
    }
}

const LOGIN_FAILED: &str = "Login failed";
const SIGNUP_FAILED: &str = "Signup failed";
const LOGOUT_FAILED: &str = "Logout failed";

/// Session state plus the gateway that drives it.
#[derive(Debug)]
pub struct SessionStore<G, C> {
    gateway: Arc<G>,
    cell: C,
}

impl<G, C: Clone> Clone for SessionStore<G, C> {
    fn clone(&self) -> Self {
        Self {
            gateway: self.gateway.clone(),
            cell: self.cell.clone(),
        }
    }
}

impl<G, C: PartialEq> PartialEq for SessionStore<G, C> {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.gateway, &other.gateway) && self.cell == other.cell
    }
}

impl<G: AuthGateway, C: SessionCell> SessionStore<G, C> {
    pub fn new(gateway: G, cell: C) -> Self {
        Self {
            gateway: Arc::new(gateway),
            cell,
        }
    }

    pub fn state(&self) -> SessionState {
        self.cell.snapshot()
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<UserInfo, AuthError> {
        self.begin();
        let result = self.gateway.login(email, password).await;
        self.settle_sign_in("login", result, LOGIN_FAILED)
    }

    pub async fn signup(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<UserInfo, AuthError> {
        self.begin();
        let result = self.gateway.signup(name, email, password).await;
        self.settle_sign_in("signup", result, SIGNUP_FAILED)
    }

    /// On failure the user stays as it was; only `error` and `loading` change.
    pub async fn logout(&self) -> Result<(), AuthError> {
        self.begin();
        match self.gateway.logout().await {
            Ok(_) => {
                self.cell.update(|s| {
                    s.user = None;
                    s.loading = false;
                });
                tracing::info!("Logged out");
                Ok(())
            }
            Err(err) => {
                let message = err.message_or(LOGOUT_FAILED);
                tracing::warn!("Logout failed: {}", message);
                self.cell.update(|s| {
                    s.error = Some(message);
                    s.loading = false;
                });
                Err(err)
            }
        }
    }

    /// Ask the backend for the current session and adopt its answer.
    ///
    /// Never fails; the outcome keeps "no session" and "could not ask" apart.
    pub async fn probe(&self) -> CheckAuthOutcome {
        self.cell.update(|s| s.loading = true);
        let outcome = self.gateway.check_auth().await;
        let user = outcome.user().cloned();
        let online = !outcome.is_probe_failure();
        tracing::debug!(
            "Session probe: authenticated={}, online={}",
            user.is_some(),
            online
        );
        self.cell.update(|s| {
            s.user = user;
            s.loading = false;
            s.online = online;
        });
        outcome
    }

    /// [`probe`](Self::probe) collapsed to "is there a session".
    pub async fn check_auth(&self) -> bool {
        self.probe().await.is_authenticated()
    }

    pub fn clear_error(&self) {
        self.cell.update(|s| s.error = None);
    }

    fn begin(&self) {
        self.cell.update(|s| {
            s.loading = true;
            s.error = None;
        });
    }

    fn settle_sign_in(
        &self,
        operation: &str,
        result: Result<UserInfo, AuthError>,
        fallback: &str,
    ) -> Result<UserInfo, AuthError> {
        match result {
            Ok(user) => {
                tracing::info!("{} succeeded", operation);
                self.cell.update(|s| {
                    s.user = Some(user.clone());
                    s.loading = false;
                });
                Ok(user)
            }
            Err(err) => {
                let message = err.message_or(fallback);
                tracing::warn!("{} failed: {}", operation, message);
                self.cell.update(|s| {
                    s.error = Some(message);
                    s.loading = false;
                });
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::collections::VecDeque;

    use serde_json::{json, Value};

    use super::*;

    fn user(value: Value) -> UserInfo {
        serde_json::from_value(value).unwrap()
    }

    /// Gateway that replays queued answers and records what the session
    /// looked like while each call was in flight.
    #[derive(Default)]
    struct ScriptedGateway {
        logins: RefCell<VecDeque<Result<UserInfo, AuthError>>>,
        signups: RefCell<VecDeque<Result<UserInfo, AuthError>>>,
        logouts: RefCell<VecDeque<Result<Value, AuthError>>>,
        probes: RefCell<VecDeque<CheckAuthOutcome>>,
        observer: Option<SharedSession>,
        seen_loading: Cell<Option<bool>>,
    }

    impl ScriptedGateway {
        fn observe(&self) {
            if let Some(cell) = &self.observer {
                self.seen_loading.set(Some(cell.snapshot().loading));
            }
        }
    }

    impl AuthGateway for ScriptedGateway {
        async fn login(&self, _email: &str, _password: &str) -> Result<UserInfo, AuthError> {
            self.observe();
            self.logins.borrow_mut().pop_front().expect("unexpected login")
        }

        async fn signup(
            &self,
            _name: &str,
            _email: &str,
            _password: &str,
        ) -> Result<UserInfo, AuthError> {
            self.observe();
            self.signups.borrow_mut().pop_front().expect("unexpected signup")
        }

        async fn logout(&self) -> Result<Value, AuthError> {
            self.observe();
            self.logouts.borrow_mut().pop_front().expect("unexpected logout")
        }

        async fn check_auth(&self) -> CheckAuthOutcome {
            self.observe();
            self.probes.borrow_mut().pop_front().expect("unexpected probe")
        }
    }

    fn invalid_credentials() -> AuthError {
        AuthError::Backend {
            status: 401,
            message: "Invalid credentials".to_string(),
        }
    }

    fn store(gateway: ScriptedGateway) -> SessionStore<ScriptedGateway, SharedSession> {
        SessionStore::new(gateway, SharedSession::new())
    }

    fn assert_consistent(state: &SessionState) {
        assert_eq!(state.is_authenticated(), state.user.is_some());
        assert!(!state.loading);
    }

    #[tokio::test]
    async fn test_login_success() {
        let gateway = ScriptedGateway::default();
        gateway
            .logins
            .borrow_mut()
            .push_back(Ok(user(json!({"id": 1, "name": "A"}))));
        let session = store(gateway);

        let result = session.login("a@b.com", "secret").await;
        assert!(result.is_ok());

        let state = session.state();
        assert!(state.is_authenticated());
        assert_eq!(state.user, Some(user(json!({"id": 1, "name": "A"}))));
        assert!(!state.loading);
        assert_eq!(state.error, None);
        assert_eq!(state.status(), SessionStatus::Authenticated);
    }

    #[tokio::test]
    async fn test_repeated_logins_keep_last_user() {
        let gateway = ScriptedGateway::default();
        for id in 1..=3 {
            gateway
                .logins
                .borrow_mut()
                .push_back(Ok(user(json!({"id": id}))));
        }
        let session = store(gateway);

        for _ in 0..3 {
            session.login("a@b.com", "secret").await.unwrap();
            let state = session.state();
            assert!(state.is_authenticated());
            assert_consistent(&state);
        }
        assert_eq!(session.state().user, Some(user(json!({"id": 3}))));
    }

    #[tokio::test]
    async fn test_failed_login_keeps_prior_state() {
        let gateway = ScriptedGateway::default();
        gateway.logins.borrow_mut().push_back(Err(invalid_credentials()));
        gateway
            .logins
            .borrow_mut()
            .push_back(Ok(user(json!({"id": 1}))));
        gateway.logins.borrow_mut().push_back(Err(invalid_credentials()));
        let session = store(gateway);

        // Unauthenticated stays unauthenticated.
        let err = session.login("a@b.com", "wrong").await.unwrap_err();
        assert_eq!(err, invalid_credentials());
        let state = session.state();
        assert!(!state.is_authenticated());
        assert_eq!(state.error.as_deref(), Some("Invalid credentials"));
        assert_consistent(&state);

        // Authenticated stays authenticated, and the stale error is cleared.
        session.login("a@b.com", "secret").await.unwrap();
        assert_eq!(session.state().error, None);
        session.login("a@b.com", "wrong").await.unwrap_err();
        let state = session.state();
        assert_eq!(state.user, Some(user(json!({"id": 1}))));
        assert_eq!(state.error.as_deref(), Some("Invalid credentials"));
    }

    #[tokio::test]
    async fn test_failure_without_message_uses_fallback() {
        let gateway = ScriptedGateway::default();
        gateway
            .logins
            .borrow_mut()
            .push_back(Err(AuthError::Transport(String::new())));
        gateway
            .signups
            .borrow_mut()
            .push_back(Err(AuthError::Transport(String::new())));
        let session = store(gateway);

        session.login("a@b.com", "secret").await.unwrap_err();
        assert_eq!(session.state().error.as_deref(), Some("Login failed"));

        session.signup("A", "a@b.com", "secret").await.unwrap_err();
        assert_eq!(session.state().error.as_deref(), Some("Signup failed"));
    }

    #[tokio::test]
    async fn test_signup_success() {
        let gateway = ScriptedGateway::default();
        gateway
            .signups
            .borrow_mut()
            .push_back(Ok(user(json!({"id": 9, "name": "Asha"}))));
        let session = store(gateway);

        let created = session
            .signup("Asha", "asha@b.com", "password123")
            .await
            .unwrap();
        assert_eq!(created.name(), Some("Asha"));
        assert!(session.state().is_authenticated());
    }

    #[tokio::test]
    async fn test_failed_signup_keeps_signed_in_user() {
        let gateway = ScriptedGateway::default();
        gateway
            .logins
            .borrow_mut()
            .push_back(Ok(user(json!({"id": 1, "name": "A"}))));
        gateway.signups.borrow_mut().push_back(Err(AuthError::Backend {
            status: 409,
            message: "Email already registered".to_string(),
        }));
        let session = store(gateway);

        session.login("a@b.com", "secret").await.unwrap();
        let err = session
            .signup("B", "taken@b.com", "password123")
            .await
            .unwrap_err();
        assert_eq!(err.status(), Some(409));

        let state = session.state();
        assert_eq!(state.user, Some(user(json!({"id": 1, "name": "A"}))));
        assert!(state.is_authenticated());
        assert_eq!(state.error.as_deref(), Some("Email already registered"));
        assert_consistent(&state);
    }

    #[tokio::test]
    async fn test_logout_clears_user() {
        let gateway = ScriptedGateway::default();
        gateway
            .logins
            .borrow_mut()
            .push_back(Ok(user(json!({"id": 1}))));
        gateway
            .logouts
            .borrow_mut()
            .push_back(Ok(json!({"ok": true})));
        let session = store(gateway);

        session.login("a@b.com", "secret").await.unwrap();
        session.logout().await.unwrap();

        let state = session.state();
        assert!(!state.is_authenticated());
        assert_eq!(state.user, None);
        assert_consistent(&state);
    }

    #[tokio::test]
    async fn test_logout_from_unauthenticated() {
        let gateway = ScriptedGateway::default();
        gateway.logouts.borrow_mut().push_back(Ok(Value::Null));
        let session = store(gateway);

        session.logout().await.unwrap();
        assert!(!session.state().is_authenticated());
    }

    #[tokio::test]
    async fn test_logout_failure_records_error() {
        let gateway = ScriptedGateway::default();
        gateway
            .logins
            .borrow_mut()
            .push_back(Ok(user(json!({"id": 1}))));
        gateway.logouts.borrow_mut().push_back(Err(AuthError::Timeout));
        let session = store(gateway);

        session.login("a@b.com", "secret").await.unwrap();
        session.logout().await.unwrap_err();

        let state = session.state();
        assert_eq!(state.error.as_deref(), Some("Request timed out"));
        assert!(!state.loading);
        // The user record is left as it was.
        assert!(state.is_authenticated());
    }

    #[tokio::test]
    async fn test_check_auth_network_error() {
        let gateway = ScriptedGateway::default();
        gateway
            .probes
            .borrow_mut()
            .push_back(CheckAuthOutcome::ProbeFailed("connection refused".into()));
        let session = store(gateway);

        assert!(!session.check_auth().await);

        let state = session.state();
        assert!(!state.is_authenticated());
        assert_eq!(state.user, None);
        assert!(!state.online);
        assert_consistent(&state);
    }

    #[tokio::test]
    async fn test_probe_distinguishes_unauthenticated_from_failure() {
        let gateway = ScriptedGateway::default();
        gateway
            .probes
            .borrow_mut()
            .push_back(CheckAuthOutcome::Unauthenticated);
        gateway
            .probes
            .borrow_mut()
            .push_back(CheckAuthOutcome::ProbeFailed("timeout".into()));
        let session = store(gateway);

        assert_eq!(session.probe().await, CheckAuthOutcome::Unauthenticated);
        assert!(session.state().online);

        assert!(session.probe().await.is_probe_failure());
        assert!(!session.state().online);
    }

    #[tokio::test]
    async fn test_check_auth_moves_both_directions() {
        let gateway = ScriptedGateway::default();
        gateway
            .probes
            .borrow_mut()
            .push_back(CheckAuthOutcome::Authenticated(user(json!({"id": 1}))));
        gateway
            .probes
            .borrow_mut()
            .push_back(CheckAuthOutcome::Unauthenticated);
        let session = store(gateway);

        assert!(session.check_auth().await);
        assert_eq!(session.state().user, Some(user(json!({"id": 1}))));

        // Expired cookie: the backend no longer knows the session.
        assert!(!session.check_auth().await);
        let state = session.state();
        assert_eq!(state.user, None);
        assert_consistent(&state);
    }

    #[tokio::test]
    async fn test_loading_is_set_while_in_flight() {
        let cell = SharedSession::new();
        let gateway = ScriptedGateway {
            observer: Some(cell.clone()),
            ..ScriptedGateway::default()
        };
        gateway
            .logins
            .borrow_mut()
            .push_back(Ok(user(json!({"id": 1}))));
        gateway
            .probes
            .borrow_mut()
            .push_back(CheckAuthOutcome::Unauthenticated);
        let session = SessionStore::new(gateway, cell);

        session.login("a@b.com", "secret").await.unwrap();
        assert_eq!(session.gateway().seen_loading.take(), Some(true));
        assert!(!session.state().loading);

        session.check_auth().await;
        assert_eq!(session.gateway().seen_loading.take(), Some(true));
        assert!(!session.state().loading);
    }

    #[tokio::test]
    async fn test_clear_error() {
        let gateway = ScriptedGateway::default();
        gateway.logins.borrow_mut().push_back(Err(invalid_credentials()));
        let session = store(gateway);

        session.login("a@b.com", "wrong").await.unwrap_err();
        assert!(session.state().error.is_some());

        session.clear_error();
        assert_eq!(session.state().error, None);
        assert!(!session.state().is_authenticated());
    }

    #[test]
    fn test_clones_share_state() {
        let session = store(ScriptedGateway::default());
        let other = session.clone();
        other.cell.update(|s| s.error = Some("boom".into()));
        assert_eq!(session.state().error.as_deref(), Some("boom"));
        assert!(session == other);
    }
}
