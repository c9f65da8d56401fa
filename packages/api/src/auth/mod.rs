//! Auth Gateway: the boundary to the backend authority.

mod cookies;
mod error;
mod gateway;
mod http;

pub use error::AuthError;
pub use gateway::{AuthGateway, CheckAuthOutcome};
pub use http::HttpAuthGateway;
