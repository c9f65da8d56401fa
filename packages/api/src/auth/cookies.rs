//! Persistence of backend-issued session cookies.
//!
//! The reqwest cookie jar lives in memory only. To keep a session across app
//! restarts, every `Set-Cookie` header is merged by cookie name into the
//! [`keys::AUTH_TOKEN`] item, and [`SessionCookies::restore`] seeds a fresh
//! jar from it on startup.
//!
//! Each cookie is saved with the time it was received. A relative `Max-Age`
//! is counted from that moment, so restoring shortens it by the time the app
//! was closed and drops cookies that have run out.

use std::time::{SystemTime, UNIX_EPOCH};

use reqwest::cookie::Jar;
use reqwest::header::SET_COOKIE;
use reqwest::{Response, Url};
use serde::{Deserialize, Serialize};
use store::{keys, KeyValueStore, Storage};

/// A raw `Set-Cookie` value and when it arrived, in Unix seconds.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub(crate) struct SavedCookie {
    pub(crate) cookie: String,
    pub(crate) saved_at: u64,
}

impl SavedCookie {
    fn new(cookie: String, saved_at: u64) -> Self {
        Self { cookie, saved_at }
    }

    /// The cookie as it should be replayed at `now`, or `None` once its
    /// `Max-Age` has elapsed.
    fn replay_at(&self, now: u64) -> Option<String> {
        let Some(max_age) = max_age(&self.cookie) else {
            return Some(self.cookie.clone());
        };
        let elapsed = now.saturating_sub(self.saved_at);
        let remaining = max_age.saturating_sub(i64::try_from(elapsed).unwrap_or(i64::MAX));
        if remaining <= 0 {
            return None;
        }
        let rewritten: Vec<String> = self
            .cookie
            .split(';')
            .map(|part| match part.split_once('=') {
                Some((k, _)) if k.trim().eq_ignore_ascii_case("max-age") => {
                    format!(" Max-Age={remaining}")
                }
                _ => part.to_string(),
            })
            .collect();
        Some(rewritten.join(";"))
    }
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

#[derive(Clone, Debug)]
pub(crate) struct SessionCookies<S> {
    storage: Storage<S>,
}

impl<S: KeyValueStore> SessionCookies<S> {
    pub(crate) fn new(storage: Storage<S>) -> Self {
        Self { storage }
    }

    async fn load(&self) -> Vec<SavedCookie> {
        self.storage
            .get_item(keys::AUTH_TOKEN)
            .await
            .unwrap_or_default()
    }

    /// Load persisted cookies into `jar`. Returns how many were restored.
    pub(crate) async fn restore(&self, jar: &Jar, url: &Url) -> usize {
        self.restore_at(jar, url, unix_now()).await
    }

    async fn restore_at(&self, jar: &Jar, url: &Url, now: u64) -> usize {
        let mut restored = 0;
        for saved in self.load().await {
            match saved.replay_at(now) {
                Some(cookie) => {
                    jar.add_cookie_str(&cookie, url);
                    restored += 1;
                }
                None => tracing::debug!("Skipping expired cookie {:?}", cookie_name(&saved.cookie)),
            }
        }
        restored
    }

    pub(crate) async fn remember(&self, incoming: Vec<String>) {
        self.remember_at(incoming, unix_now()).await;
    }

    async fn remember_at(&self, incoming: Vec<String>, now: u64) {
        if incoming.is_empty() {
            return;
        }
        let merged = merge_cookies(self.load().await, incoming, now);
        if merged.is_empty() {
            self.storage.remove_item(keys::AUTH_TOKEN).await;
        } else {
            self.storage.set_item(keys::AUTH_TOKEN, &merged).await;
        }
    }

    pub(crate) async fn forget(&self) {
        self.storage.remove_item(keys::AUTH_TOKEN).await;
    }
}

/// Raw `Set-Cookie` header values of a response.
pub(crate) fn set_cookie_headers(response: &Response) -> Vec<String> {
    response
        .headers()
        .get_all(SET_COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .map(str::to_string)
        .collect()
}

fn cookie_name(raw: &str) -> &str {
    raw.split(';')
        .next()
        .and_then(|pair| pair.split('=').next())
        .unwrap_or("")
        .trim()
}

fn max_age(raw: &str) -> Option<i64> {
    raw.split(';').skip(1).find_map(|attr| {
        let (k, v) = attr.split_once('=')?;
        if k.trim().eq_ignore_ascii_case("max-age") {
            v.trim().parse::<i64>().ok()
        } else {
            None
        }
    })
}

/// A `Set-Cookie` that deletes its cookie: `Max-Age` <= 0 or an empty value.
fn is_removal(raw: &str) -> bool {
    let empty_value = raw
        .split(';')
        .next()
        .and_then(|pair| pair.split_once('='))
        .map_or(true, |(_, value)| value.trim().is_empty());
    empty_value || max_age(raw).is_some_and(|age| age <= 0)
}

fn merge_cookies(existing: Vec<SavedCookie>, incoming: Vec<String>, now: u64) -> Vec<SavedCookie> {
    let mut merged = existing;
    for cookie in incoming {
        let name = cookie_name(&cookie).to_string();
        merged.retain(|c| cookie_name(&c.cookie) != name);
        if !is_removal(&cookie) {
            merged.push(SavedCookie::new(cookie, now));
        }
    }
    merged
}
