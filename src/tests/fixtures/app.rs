// Application state wired with in-memory adapters for router tests.

use crate::modules::time_entries::adapters::outbound::time_entry_store_in_memory::InMemoryTimeEntryStore;
use crate::shared::core::clock::ManualClock;
use crate::shared::core::identity::{Identity, Role};
use crate::shared::infrastructure::identity::in_memory::InMemoryIdentityResolver;
use crate::shell::state::AppState;
use crate::tests::fixtures::entries::at;
use std::sync::Arc;

pub const USER_TOKEN: &str = "user-token";
pub const OTHER_USER_TOKEN: &str = "other-user-token";
pub const ADMIN_TOKEN: &str = "admin-token";

pub const USER_ID: i64 = 1;
pub const OTHER_USER_ID: i64 = 2;

pub fn identities() -> InMemoryIdentityResolver {
    InMemoryIdentityResolver::new()
        .with_token(USER_TOKEN, Identity::new(USER_ID, Role::User))
        .with_token(OTHER_USER_TOKEN, Identity::new(OTHER_USER_ID, Role::User))
        .with_token(ADMIN_TOKEN, Identity::new(99, Role::Admin))
}

pub fn state_with(store: InMemoryTimeEntryStore) -> (AppState, Arc<InMemoryTimeEntryStore>, Arc<ManualClock>) {
    let store = Arc::new(store);
    let clock = Arc::new(ManualClock::new(at("08:00")));
    let state = AppState::new(store.clone(), clock.clone(), Arc::new(identities()));
    (state, store, clock)
}

pub fn make_test_state() -> (AppState, Arc<InMemoryTimeEntryStore>, Arc<ManualClock>) {
    state_with(InMemoryTimeEntryStore::new())
}

pub fn make_offline_store_state() -> AppState {
    let mut store = InMemoryTimeEntryStore::new();
    store.toggle_offline();
    state_with(store).0
}

pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}
