//! Implements a struct that holds the state of the form-driven web app.

use axum::extract::FromRef;
use axum_extra::extract::cookie::Key;
use sha2::{Digest, Sha512};

use crate::stores::SharedStore;

/// The state of the web app.
#[derive(Clone)]
pub struct AppState {
    /// The key to be used for signing and encrypting private cookies.
    pub cookie_key: Key,

    /// The local timezone as a canonical timezone name, e.g. "Pacific/Auckland".
    pub local_timezone: String,

    /// The store holding users, categories, expenses and budgets.
    pub store: SharedStore,
}

impl AppState {
    /// Create a new [AppState].
    ///
    /// `local_timezone` should be a valid, canonical timezone name, e.g. "Pacific/Auckland".
    pub fn new(cookie_secret: &str, local_timezone: &str, store: SharedStore) -> Self {
        Self {
            cookie_key: create_cookie_key(cookie_secret),
            local_timezone: local_timezone.to_owned(),
            store,
        }
    }
}

// this impl tells `PrivateCookieJar` how to access the key from our state
impl FromRef<AppState> for Key {
    fn from_ref(state: &AppState) -> Self {
        state.cookie_key.clone()
    }
}

/// Create a signing key for cookies from a `secret`s string.
pub fn create_cookie_key(secret: &str) -> Key {
    let hash = Sha512::digest(secret);

    Key::from(&hash)
}

/// The state shared by the entry handlers: the record store and the timezone
/// used for default form values.
#[derive(Clone)]
pub struct EntryState {
    pub store: SharedStore,
    pub local_timezone: String,
}

impl FromRef<AppState> for EntryState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            store: state.store.clone(),
            local_timezone: state.local_timezone.clone(),
        }
    }
}
