//! Logout flow.
//!
//! Precondition: the navigator is authenticated.
//! Postcondition: history is `[Login]`, even if clearing storage failed.

use crate::error::NavigationError;
use crate::navigation::Navigator;
use crate::session::{KeyValueStore, SessionStore};

/// What happened during a logout
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogoutReport {
    /// False when the session store could not be fully cleared
    pub storage_cleared: bool,
}

/// Clear the session and reset the navigator to the Login entry point.
///
/// Storage clearing is best-effort; staying in the authenticated UI without a
/// valid session is worse than leaving stale entries behind.
pub fn logout<S: KeyValueStore>(
    navigator: &mut Navigator,
    store: &SessionStore<S>,
) -> Result<LogoutReport, NavigationError> {
    if !navigator.is_authenticated() {
        return Err(NavigationError::NotAuthenticated);
    }

    let storage_cleared = match store.clear() {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(error = %e, "Failed to clear session during logout, continuing");
            false
        }
    };

    navigator.reset_to_login()?;
    tracing::info!(storage_cleared, "Logged out");

    Ok(LogoutReport { storage_cleared })
}
