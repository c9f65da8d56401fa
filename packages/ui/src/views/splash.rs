use dioxus::prelude::*;

use crate::theme::STYLES;

/// Branding shown while the startup session probe runs.
#[component]
pub fn SplashView() -> Element {
    rsx! {
        style { {STYLES} }
        div {
            class: "screen screen--center",
            h1 { class: "screen-title", "Onboard" }
            p { class: "screen-subtitle", "Getting things ready..." }
            div { class: "spinner" }
        }
    }
}
