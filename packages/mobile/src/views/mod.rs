//! Route components. Each wraps a shared screen and decides where to go
//! next based on the session.

use std::time::Duration;

use dioxus::prelude::*;
use dioxus::router::Navigator;
use ui::views::{HomeView, LoginView, SignupView, SplashView};
use ui::{use_session, use_session_state, SessionState, SessionStatus};

use crate::Route;

/// Minimum time the splash stays up, so the branding is visible even when
/// the probe answers instantly.
const SPLASH_MIN: Duration = Duration::from_secs(2);

/// Where a session with this status belongs.
fn landing(status: SessionStatus) -> Route {
    match status {
        SessionStatus::Authenticated => Route::Home {},
        SessionStatus::Unauthenticated => Route::Login {},
    }
}

/// Send the user to their landing screen if this screen is for the other
/// status. Nothing moves while an operation is in flight.
fn require(nav: Navigator, state: &SessionState, status: SessionStatus) {
    if !state.loading && state.status() != status {
        nav.replace(landing(state.status()));
    }
}

#[component]
pub fn Splash() -> Element {
    let session = use_session();
    let nav = use_navigator();

    use_future(move || {
        let session = session.clone();
        async move {
            tokio::time::sleep(SPLASH_MIN).await;
            session.gateway().restore_cookies().await;

            session.check_auth().await;
            let state = session.state();
            if !state.online {
                tracing::warn!("Session probe failed, continuing to login");
            }
            nav.replace(landing(state.status()));
        }
    });

    rsx! {
        SplashView {}
    }
}

#[component]
pub fn Login() -> Element {
    let session = use_session();
    let state = session.state();
    let nav = use_navigator();

    require(nav, &state, SessionStatus::Unauthenticated);

    rsx! {
        LoginView {
            on_signup: move |_| {
                session.clear_error();
                nav.push(Route::Signup {});
            },
            on_authenticated: move |_| {
                nav.replace(Route::Home {});
            },
        }
    }
}

#[component]
pub fn Signup() -> Element {
    let session = use_session();
    let state = session.state();
    let nav = use_navigator();

    require(nav, &state, SessionStatus::Unauthenticated);

    rsx! {
        SignupView {
            on_back: move |_| {
                session.clear_error();
                nav.replace(Route::Login {});
            },
            on_authenticated: move |_| {
                nav.replace(Route::Home {});
            },
        }
    }
}

#[component]
pub fn Home() -> Element {
    let state = use_session_state();
    let nav = use_navigator();

    require(nav, &state, SessionStatus::Authenticated);

    rsx! {
        HomeView {
            on_logged_out: move |_| {
                nav.replace(Route::Login {});
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_landing_follows_status() {
        assert_eq!(landing(SessionStatus::Authenticated), Route::Home {});
        assert_eq!(landing(SessionStatus::Unauthenticated), Route::Login {});
    }
}
