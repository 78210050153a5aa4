//! Session persistence over a key-value backend.
//!
//! The session is two string entries under fixed keys. Both are written
//! together and removed together; a store holding only one of them reads
//! back as no session at all.

use std::sync::Mutex;

use rustc_hash::FxHashMap;

use crate::error::StoreError;
use crate::role::Role;

/// Storage key for the opaque auth token
pub const TOKEN_KEY: &str = "authToken";
/// Storage key for the role string
pub const ROLE_KEY: &str = "userRole";

/// Minimal string key-value storage, in the shape of a device-local store.
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError>;

    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Removing a missing key is not an error
    fn remove_item(&self, key: &str) -> Result<(), StoreError>;

    /// Write several entries. Backends that can commit atomically should
    /// override this.
    fn set_items(&self, entries: &[(&str, &str)]) -> Result<(), StoreError> {
        for (key, value) in entries {
            self.set_item(key, value)?;
        }
        Ok(())
    }

    /// Remove several entries, attempting every key even if one fails.
    /// The first error is returned.
    fn remove_items(&self, keys: &[&str]) -> Result<(), StoreError> {
        let mut first_err = None;
        for key in keys {
            if let Err(e) = self.remove_item(key) {
                first_err.get_or_insert(e);
            }
        }
        match first_err {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for std::sync::Arc<T> {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> Result<(), StoreError> {
        (**self).remove_item(key)
    }

    fn set_items(&self, entries: &[(&str, &str)]) -> Result<(), StoreError> {
        (**self).set_items(entries)
    }

    fn remove_items(&self, keys: &[&str]) -> Result<(), StoreError> {
        (**self).remove_items(keys)
    }
}

/// In-process store. Nothing survives a restart.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<FxHashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, FxHashMap<String, String>>, StoreError> {
        self.entries
            .lock()
            .map_err(|_| StoreError::Io("memory store lock poisoned".to_string()))
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.lock()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StoreError> {
        self.lock()?.remove(key);
        Ok(())
    }

    fn set_items(&self, entries: &[(&str, &str)]) -> Result<(), StoreError> {
        let mut map = self.lock()?;
        for (key, value) in entries {
            map.insert(key.to_string(), value.to_string());
        }
        Ok(())
    }
}

/// Persisted authentication state.
///
/// `token` and `role` are either both present or both absent when read back
/// through [`SessionStore::load`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub token: Option<String>,
    pub role: Option<Role>,
}

impl Session {
    pub fn new(token: impl Into<String>, role: Role) -> Self {
        Self {
            token: Some(token.into()),
            role: Some(role),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some() && self.role.is_some()
    }

    /// The role when the session is complete
    pub fn authenticated_role(&self) -> Option<Role> {
        match (&self.token, self.role) {
            (Some(_), Some(role)) => Some(role),
            _ => None,
        }
    }
}

/// The single session service handed to every consumer.
#[derive(Debug)]
pub struct SessionStore<S> {
    backend: S,
}

impl<S: KeyValueStore> SessionStore<S> {
    pub fn new(backend: S) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    /// Read the persisted session. Any read failure yields an empty session.
    pub fn load(&self) -> Session {
        let token = match self.backend.get_item(TOKEN_KEY) {
            Ok(token) => token,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read auth token, treating as signed out");
                return Session::empty();
            }
        };
        let role = match self.backend.get_item(ROLE_KEY) {
            Ok(role) => role,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read role, treating as signed out");
                return Session::empty();
            }
        };

        match (token, role) {
            (Some(token), Some(role)) if !token.is_empty() => {
                Session::new(token, Role::parse_or_default(Some(&role)))
            }
            (None, None) => Session::empty(),
            _ => {
                tracing::warn!("Partial session found in storage, treating as signed out");
                Session::empty()
            }
        }
    }

    /// Persist token and role together.
    pub fn save(&self, session: &Session) -> Result<(), StoreError> {
        let (Some(token), Some(role)) = (&session.token, session.role) else {
            return Err(StoreError::IncompleteSession);
        };
        self.backend
            .set_items(&[(TOKEN_KEY, token.as_str()), (ROLE_KEY, role.as_str())])?;
        tracing::info!(role = %role, "Session saved");
        Ok(())
    }

    /// Remove both session entries. Clearing an empty store succeeds.
    pub fn clear(&self) -> Result<(), StoreError> {
        self.backend.remove_items(&[TOKEN_KEY, ROLE_KEY])?;
        tracing::info!("Session cleared");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_basic_operations() {
        let store = MemoryStore::new();
        assert_eq!(store.get_item("k").unwrap(), None);
        store.set_item("k", "v").unwrap();
        assert_eq!(store.get_item("k").unwrap(), Some("v".to_string()));
        store.remove_item("k").unwrap();
        store.remove_item("k").unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let store = SessionStore::new(MemoryStore::new());
        let session = Session::new("tok-123", Role::Trainer);
        store.save(&session).unwrap();
        assert_eq!(store.load(), session);
    }

    #[test]
    fn test_save_rejects_incomplete_session() {
        let store = SessionStore::new(MemoryStore::new());
        let partial = Session {
            token: Some("abc".to_string()),
            role: None,
        };
        assert_eq!(store.save(&partial), Err(StoreError::IncompleteSession));
        assert!(store.backend().is_empty());
    }

    #[test]
    fn test_clear_is_idempotent() {
        let store = SessionStore::new(MemoryStore::new());
        store.save(&Session::new("t", Role::Admin)).unwrap();
        store.clear().unwrap();
        store.clear().unwrap();
        assert_eq!(store.load(), Session::empty());
        assert!(store.backend().is_empty());
    }

    #[test]
    fn test_partial_session_loads_as_empty() {
        let backend = MemoryStore::new();
        backend.set_item(TOKEN_KEY, "orphan").unwrap();
        let store = SessionStore::new(backend);
        assert_eq!(store.load(), Session::empty());
    }

    #[test]
    fn test_unknown_stored_role_loads_as_member() {
        let backend = MemoryStore::new();
        backend.set_item(TOKEN_KEY, "t").unwrap();
        backend.set_item(ROLE_KEY, "Janitor").unwrap();
        let store = SessionStore::new(backend);
        assert_eq!(store.load(), Session::new("t", Role::Member));
    }

    #[test]
    fn test_stored_role_is_case_insensitive() {
        let backend = MemoryStore::new();
        backend.set_item(TOKEN_KEY, "t").unwrap();
        backend.set_item(ROLE_KEY, "ADMIN").unwrap();
        let store = SessionStore::new(backend);
        assert_eq!(store.load().authenticated_role(), Some(Role::Admin));
    }
}
