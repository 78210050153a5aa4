//! GymPro navigation and session core
//!
//! This crate holds the UI-free half of the GymPro front-end:
//! - A session store over a pluggable key-value backend (token + role)
//! - A closed [`Role`] type and the role → navigation table
//! - A three-layer navigator (outer stack, drawer, tabs)
//! - The cold-start bootstrap sequencer and the logout flow
//! - The authentication gateway contract consumed by the front-end
//!
//! # Example
//!
//! ```ignore
//! use gympro_core::{BootstrapSequencer, MemoryStore, SessionStore};
//!
//! let store = SessionStore::new(MemoryStore::new());
//! let mut bootstrap = BootstrapSequencer::new();
//! let navigator = bootstrap.complete(store.load());
//! assert!(!navigator.is_authenticated());
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod auth;
pub mod bootstrap;
pub mod logout;
pub mod navigation;
pub mod session;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod error;
pub mod role;
pub mod screen;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use auth::{
    AuthGateway, AuthResponse, Credentials, Registration, UserInfo, establish_session,
};
pub use bootstrap::{BootstrapSequencer, BootstrapState, InitialRoute};
pub use error::{AuthError, AuthOperation, NavigationError, StoreError};
pub use logout::{LogoutReport, logout};
pub use navigation::{
    DrawerAction, DrawerItem, DrawerOutcome, NavigationConfig, Navigator, Route, resolve,
};
pub use role::Role;
pub use screen::ScreenRef;
pub use session::{KeyValueStore, MemoryStore, Session, SessionStore};
