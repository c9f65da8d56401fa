//! Session context and hooks for the UI.

use std::path::PathBuf;

use api::{HttpAuthGateway, Settings};
use dioxus::prelude::*;
use store::{FileStore, Storage};

use crate::session::{SessionCell, SessionState, SessionStore};

pub type AppGateway = HttpAuthGateway<FileStore>;

/// The session store as provided through context.
pub type AppSession = SessionStore<AppGateway, Signal<SessionState>>;

impl SessionCell for Signal<SessionState> {
    fn snapshot(&self) -> SessionState {
        self.read().clone()
    }

    fn update(&self, f: impl FnOnce(&mut SessionState)) {
        let mut signal = *self;
        f(&mut signal.write());
    }
}

/// Get the session store. Components that read its state re-render when it
/// changes.
pub fn use_session() -> AppSession {
    use_context::<AppSession>()
}

/// Current session state, subscribing the calling component.
pub fn use_session_state() -> SessionState {
    use_session().state()
}

fn data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("onboard")
}

fn build_session(state: Signal<SessionState>) -> Result<AppSession, String> {
    let settings = Settings::new().map_err(|e| format!("Failed to load settings: {e}"))?;
    let storage = Storage::new(FileStore::new(data_dir()));
    let gateway = HttpAuthGateway::new(&settings.api, storage).map_err(|e| e.to_string())?;
    tracing::info!("Auth backend: {}", gateway.base_url());
    Ok(SessionStore::new(gateway, state))
}

/// Provider component that owns the session.
/// Wrap your app with this component to enable authentication.
#[component]
pub fn SessionProvider(children: Element) -> Element {
    let state = use_signal(SessionState::default);
    let session = use_hook(move || build_session(state));

    match session {
        Ok(session) => rsx! {
            SessionScope { session, {children} }
        },
        Err(message) => {
            tracing::error!("{}", message);
            rsx! {
                div {
                    class: "screen screen--center",
                    p { class: "form-alert", "{message}" }
                }
            }
        }
    }
}

#[component]
fn SessionScope(session: AppSession, children: Element) -> Element {
    use_context_provider(|| session.clone());
    rsx! {
        {children}
    }
}

/// Button to log out the current user.
#[component]
pub fn LogoutButton(
    #[props(default = "Logout".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
    on_logged_out: EventHandler<()>,
) -> Element {
    let session = use_session();
    let loading = session.state().loading;

    let onclick = move |_| {
        let session = session.clone();
        async move {
            if session.logout().await.is_ok() {
                on_logged_out.call(());
            }
        }
    };

    rsx! {
        button {
            class: "{class}",
            disabled: loading,
            onclick: onclick,
            if loading {
                "Signing out..."
            } else {
                "{label}"
            }
        }
    }
}
