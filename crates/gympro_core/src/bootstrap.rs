//! Cold-start sequencing.
//!
//! The sequencer starts in [`BootstrapState::Loading`] and only hands out a
//! [`Navigator`] once the persisted session has been read. There is no
//! navigator value while loading, so the wrong first screen can't be mounted.

use crate::navigation::{Navigator, Route};
use crate::role::Role;
use crate::session::{KeyValueStore, Session, SessionStore};

/// Where the navigator starts after bootstrap
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitialRoute {
    Login,
    MainApp(Role),
}

impl InitialRoute {
    /// Both token and role present → authenticated, anything else → Login.
    pub fn from_session(session: &Session) -> Self {
        match session.authenticated_role() {
            Some(role) => InitialRoute::MainApp(role),
            None => InitialRoute::Login,
        }
    }

    pub fn route(&self) -> Route {
        match *self {
            InitialRoute::Login => Route::Login,
            InitialRoute::MainApp(role) => Route::MainApp { role },
        }
    }

    pub fn navigator(&self) -> Navigator {
        match *self {
            InitialRoute::Login => Navigator::unauthenticated(),
            InitialRoute::MainApp(role) => Navigator::authenticated(role),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootstrapState {
    /// Session read in flight; only a loading indicator may be shown
    Loading,
    Ready(InitialRoute),
}

#[derive(Debug)]
pub struct BootstrapSequencer {
    state: BootstrapState,
}

impl BootstrapSequencer {
    pub fn new() -> Self {
        Self {
            state: BootstrapState::Loading,
        }
    }

    pub fn state(&self) -> BootstrapState {
        self.state
    }

    pub fn is_loading(&self) -> bool {
        self.state == BootstrapState::Loading
    }

    pub fn initial_route(&self) -> Option<InitialRoute> {
        match self.state {
            BootstrapState::Loading => None,
            BootstrapState::Ready(route) => Some(route),
        }
    }

    /// Finish bootstrap with the session that was read and mount the navigator.
    ///
    /// Bootstrap is one-shot: a second call keeps the first decision.
    pub fn complete(&mut self, session: Session) -> Navigator {
        let route = match self.state {
            BootstrapState::Loading => {
                let route = InitialRoute::from_session(&session);
                tracing::info!(route = route.route().name(), "Bootstrap complete");
                self.state = BootstrapState::Ready(route);
                route
            }
            BootstrapState::Ready(route) => {
                tracing::warn!("Bootstrap already completed, ignoring second session read");
                route
            }
        };
        route.navigator()
    }

    /// Read the session synchronously and complete in one step.
    pub fn run<S: KeyValueStore>(&mut self, store: &SessionStore<S>) -> Navigator {
        let session = store.load();
        self.complete(session)
    }
}

impl Default for BootstrapSequencer {
    fn default() -> Self {
        Self::new()
    }
}
