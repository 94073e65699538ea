use std::sync::Arc;

use axum_extra::extract::PrivateCookieJar;

use crate::{
    app_state::{AppState, EntryState, create_cookie_key},
    stores::MemoryStore,
};

pub(crate) const TEST_SECRET: &str = "nafstenoas";

pub(crate) fn get_test_app_state() -> AppState {
    AppState::new(TEST_SECRET, "Etc/UTC", Arc::new(MemoryStore::new()))
}

pub(crate) fn get_test_entry_state() -> EntryState {
    EntryState {
        store: Arc::new(MemoryStore::new()),
        local_timezone: "Etc/UTC".to_owned(),
    }
}

pub(crate) fn get_test_cookie_jar() -> PrivateCookieJar {
    PrivateCookieJar::new(create_cookie_key(TEST_SECRET))
}
