//! Shared session logic and screens for the onboarding app.
//!
//! | Module        | Purpose                                             |
//! |---------------|-----------------------------------------------------|
//! | `session`     | Session state and the store driving auth calls      |
//! | `validation`  | Login and signup form rules                         |
//! | `signup_flow` | Three-step signup wizard                            |
//! | `views`       | Splash, login, signup and home screens              |

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub mod session;
pub use session::{SessionCell, SessionState, SessionStatus, SessionStore, SharedSession};

pub mod signup_flow;
pub mod validation;

pub mod views;

mod theme;
pub use theme::STYLES;

mod auth;
pub use auth::{use_session, use_session_state, AppGateway, AppSession, LogoutButton, SessionProvider};
