//! Well-known storage keys.

/// Session cookies issued by the backend, stored as a JSON array of
/// `Set-Cookie` header values.
pub const AUTH_TOKEN: &str = "auth_token";

/// Reserved for cached profile data. The session core never writes it.
pub const USER_DATA: &str = "user_data";
