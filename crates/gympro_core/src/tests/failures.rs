//! Storage failure handling
//!
//! Storage errors must never escape as crashes: reads degrade to "no
//! session", logout still resets navigation, login still mounts the app.

use std::cell::Cell;

use crate::auth::establish_session;
use crate::bootstrap::{BootstrapSequencer, InitialRoute};
use crate::error::{NavigationError, StoreError};
use crate::logout::logout;
use crate::navigation::{Navigator, Route};
use crate::role::Role;
use crate::session::{KeyValueStore, MemoryStore, ROLE_KEY, Session, SessionStore, TOKEN_KEY};

/// Wraps a memory store and fails selected operations
#[derive(Default)]
struct FlakyStore {
    inner: MemoryStore,
    fail_reads: bool,
    fail_writes: bool,
    /// Fail only the removal of this key
    fail_remove_key: Option<&'static str>,
    remove_calls: Cell<usize>,
}

impl KeyValueStore for FlakyStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        if self.fail_reads {
            return Err(StoreError::Io("disk unavailable".into()));
        }
        self.inner.get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError> {
        if self.fail_writes {
            return Err(StoreError::Io("read-only".into()));
        }
        self.inner.set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> Result<(), StoreError> {
        self.remove_calls.set(self.remove_calls.get() + 1);
        if self.fail_remove_key == Some(key) {
            return Err(StoreError::Io("locked".into()));
        }
        self.inner.remove_item(key)
    }
}

fn seeded(store: FlakyStore) -> FlakyStore {
    store.inner.set_item(TOKEN_KEY, "t1").unwrap();
    store.inner.set_item(ROLE_KEY, "admin").unwrap();
    store
}

#[test]
fn test_read_failure_boots_to_login() {
    let store = SessionStore::new(seeded(FlakyStore {
        fail_reads: true,
        ..Default::default()
    }));

    let mut bootstrap = BootstrapSequencer::new();
    let nav = bootstrap.run(&store);

    assert_eq!(store.load(), Session::empty());
    assert_eq!(bootstrap.initial_route(), Some(InitialRoute::Login));
    assert_eq!(nav.current_route(), Route::Login);
}

#[test]
fn test_partial_clear_failure_still_logs_out() {
    let store = SessionStore::new(seeded(FlakyStore {
        fail_remove_key: Some(TOKEN_KEY),
        ..Default::default()
    }));
    let mut nav = Navigator::authenticated(Role::Admin);

    let report = logout(&mut nav, &store).unwrap();

    assert!(!report.storage_cleared);
    assert_eq!(nav.history(), &[Route::Login]);
    // Both keys were attempted even though the first removal failed
    assert_eq!(store.backend().remove_calls.get(), 2);
    assert_eq!(store.backend().inner.get_item(ROLE_KEY).unwrap(), None);
    // The orphaned token alone does not count as a session
    assert_eq!(store.load(), Session::empty());
}

#[test]
fn test_logout_when_signed_out_touches_nothing() {
    let store = SessionStore::new(seeded(FlakyStore::default()));
    let mut nav = Navigator::unauthenticated();

    assert_eq!(
        logout(&mut nav, &store),
        Err(NavigationError::NotAuthenticated)
    );
    assert_eq!(store.backend().remove_calls.get(), 0);
    assert_eq!(store.load(), Session::new("t1", Role::Admin));
}

#[test]
fn test_write_failure_still_mounts_app() {
    let store = SessionStore::new(FlakyStore {
        fail_writes: true,
        ..Default::default()
    });
    let mut nav = Navigator::unauthenticated();

    let role = establish_session(&store, &mut nav, &Session::new("t", Role::Trainer)).unwrap();

    assert_eq!(role, Role::Trainer);
    assert!(nav.is_authenticated());
    assert_eq!(store.load(), Session::empty());
}

#[test]
fn test_clear_twice_on_empty_store() {
    let store = SessionStore::new(FlakyStore::default());
    assert_eq!(store.clear(), Ok(()));
    assert_eq!(store.clear(), Ok(()));
    assert_eq!(store.load(), Session::empty());
}
