use dioxus::prelude::*;

use crate::theme::STYLES;
use crate::{use_session_state, LogoutButton};

/// Landing screen for an authenticated user.
#[component]
pub fn HomeView(on_logged_out: EventHandler<()>) -> Element {
    let state = use_session_state();
    let greeting = state
        .user
        .as_ref()
        .and_then(|user| user.display_name())
        .unwrap_or("there")
        .to_string();

    rsx! {
        style { {STYLES} }
        div {
            class: "screen screen--center",
            h1 { class: "screen-title", "Hello, {greeting}" }
            p { class: "screen-subtitle", "You are signed in." }

            if let Some(err) = state.error.clone() {
                div { class: "form-alert", "{err}" }
            }

            LogoutButton {
                class: "btn btn-primary",
                on_logged_out: move |_| on_logged_out.call(()),
            }
        }
    }
}
