//! End-to-end scenarios
//!
//! Each test drives bootstrap → navigation → logout the way the front-end does.

use crate::auth::{AuthResponse, establish_session};
use crate::bootstrap::{BootstrapSequencer, InitialRoute};
use crate::logout::logout;
use crate::navigation::{DrawerOutcome, Route};
use crate::role::Role;
use crate::screen::ScreenRef;
use crate::session::{KeyValueStore, MemoryStore, ROLE_KEY, Session, SessionStore, TOKEN_KEY};

fn store_with(token: &str, role: &str) -> SessionStore<MemoryStore> {
    let backend = MemoryStore::new();
    backend.set_item(TOKEN_KEY, token).unwrap();
    backend.set_item(ROLE_KEY, role).unwrap();
    SessionStore::new(backend)
}

#[test]
fn test_empty_storage_boots_to_login() {
    let store = SessionStore::new(MemoryStore::new());
    let mut bootstrap = BootstrapSequencer::new();

    let nav = bootstrap.run(&store);

    assert_eq!(bootstrap.initial_route(), Some(InitialRoute::Login));
    assert_eq!(nav.history(), &[Route::Login]);
    assert!(!nav.is_authenticated());
}

#[test]
fn test_admin_session_boots_into_admin_tabs() {
    let store = store_with("t1", "admin");
    let mut bootstrap = BootstrapSequencer::new();

    let nav = bootstrap.run(&store);

    assert_eq!(
        nav.current_route(),
        Route::MainApp { role: Role::Admin }
    );
    let labels: Vec<_> = nav.drawer_items().iter().map(|i| i.label).collect();
    assert_eq!(labels, vec!["Admin", "Settings", "Logout"]);
    assert_eq!(
        nav.tabs(),
        &[ScreenRef::Dashboard, ScreenRef::Members, ScreenRef::Reports]
    );
}

#[test]
fn test_trainer_session_never_routes_to_login() {
    let store = store_with("abc", "trainer");
    let mut bootstrap = BootstrapSequencer::new();

    // Nothing is mounted while the read is outstanding
    assert!(bootstrap.is_loading());
    assert_eq!(bootstrap.initial_route(), None);

    let session = store.load();
    assert!(bootstrap.is_loading());
    let nav = bootstrap.complete(session);

    assert_eq!(
        bootstrap.initial_route(),
        Some(InitialRoute::MainApp(Role::Trainer))
    );
    assert_eq!(nav.history().len(), 1);
    assert_eq!(
        nav.current_route(),
        Route::MainApp {
            role: Role::Trainer
        }
    );
}

#[test]
fn test_logout_from_authenticated_state() {
    let store = store_with("t1", "member");
    let mut nav = BootstrapSequencer::new().run(&store);
    nav.select_tab(2).unwrap();
    nav.open_drawer().unwrap();

    let report = logout(&mut nav, &store).unwrap();

    assert!(report.storage_cleared);
    assert_eq!(store.load(), Session::empty());
    assert!(store.backend().is_empty());
    assert_eq!(nav.history().len(), 1);
    assert_eq!(nav.current_route(), Route::Login);
}

#[test]
fn test_logout_via_drawer_from_settings() {
    let store = store_with("t1", "trainer");
    let mut nav = BootstrapSequencer::new().run(&store);

    nav.open_screen(ScreenRef::Settings).unwrap();
    nav.open_drawer().unwrap();
    nav.move_drawer_selection(2);
    let outcome = nav.activate_selected_drawer_item().unwrap();
    assert_eq!(outcome, DrawerOutcome::LogoutRequested);

    logout(&mut nav, &store).unwrap();
    assert_eq!(nav.history(), &[Route::Login]);
    assert!(!nav.back());
}

#[test]
fn test_login_persists_session_for_next_cold_start() {
    let store = SessionStore::new(MemoryStore::new());
    let mut nav = BootstrapSequencer::new().run(&store);
    nav.push_sign_up().unwrap();
    assert!(nav.back());

    let response: AuthResponse =
        serde_json::from_str(r#"{"token":"fresh","role":"TRAINER"}"#).unwrap();
    let role = establish_session(&store, &mut nav, &response.session()).unwrap();

    assert_eq!(role, Role::Trainer);
    assert_eq!(nav.history(), &[Route::MainApp { role: Role::Trainer }]);

    // Next cold start picks the session back up
    let restarted = BootstrapSequencer::new().run(&store);
    assert_eq!(restarted.role(), Some(Role::Trainer));
}

#[test]
fn test_relogin_after_logout_with_different_role() {
    let store = store_with("t1", "admin");
    let mut nav = BootstrapSequencer::new().run(&store);
    logout(&mut nav, &store).unwrap();

    establish_session(&store, &mut nav, &Session::new("t2", Role::Member)).unwrap();

    assert_eq!(nav.role(), Some(Role::Member));
    assert_eq!(nav.tabs().len(), 4);
    assert_eq!(store.load(), Session::new("t2", Role::Member));
}
