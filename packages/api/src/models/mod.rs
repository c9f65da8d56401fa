//! Data models shared between the gateway and the session store.

mod user;

pub use user::UserInfo;
