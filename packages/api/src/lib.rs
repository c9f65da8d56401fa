//! # API crate: client side of the onboarding backend
//!
//! This crate is the only place that talks to the backend authority. The
//! session store in `ui` depends on the [`AuthGateway`] trait, and the mobile
//! app wires in [`HttpAuthGateway`].
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`auth`] | `AuthGateway` contract, `HttpAuthGateway` (reqwest + cookie jar), `AuthError`, `CheckAuthOutcome`, session cookie persistence |
//! | [`models`] | `UserInfo`, the opaque user record returned by the backend |
//! | [`settings`] | Layered client settings (defaults, `config.toml`, `ONBOARD__*` env) |
//!
//! ## Backend contract
//!
//! | Operation | Method | Path | Request body |
//! |-----------|--------|------|--------------|
//! | login | POST | `/login` | `{email, password}` |
//! | signup | POST | `/signup` | `{name, email, password}` |
//! | logout | POST | `/logout` | none |
//! | check_auth | GET | `/checkAuth` | none |

pub mod auth;
pub mod models;
pub mod settings;

pub use auth::{AuthError, AuthGateway, CheckAuthOutcome, HttpAuthGateway};
pub use models::UserInfo;
pub use settings::{ApiSettings, Settings, MAX_REQUEST_TIMEOUT};
