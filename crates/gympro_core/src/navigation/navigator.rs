//! Navigator state machine.
//!
//! Three coupled layers:
//! - Outer stack: `Login`/`SignUp` (unauthenticated) or a single `MainApp`
//!   entry carrying the role (authenticated). The history is never empty.
//! - Drawer: exists only while authenticated. Lists the role entry, Settings
//!   and Logout in configuration order.
//! - Tabs: the role's tab set, in configuration order.
//!
//! Moving between the two outer states always replaces the history, so
//! `back()` can never cross from one side to the other.

use crate::error::NavigationError;
use crate::role::Role;
use crate::screen::ScreenRef;

use super::config::{DrawerAction, DrawerItem, NavigationConfig, resolve};

/// Outer stack entries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Login,
    SignUp,
    MainApp { role: Role },
}

impl Route {
    pub fn name(&self) -> &'static str {
        match self {
            Route::Login => "Login",
            Route::SignUp => "SignUp",
            Route::MainApp { .. } => "MainApp",
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Route::MainApp { .. })
    }
}

/// Result of activating a drawer entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawerOutcome {
    /// The tab view is showing
    ShowTabs,
    /// A common screen is showing over the tab view
    ShowScreen(ScreenRef),
    /// The user asked to log out; the caller runs the logout flow
    LogoutRequested,
}

/// State of the authenticated subtree. Dropped on logout.
#[derive(Debug, Clone)]
struct MainState {
    config: NavigationConfig,
    drawer_open: bool,
    drawer_selection: usize,
    active_tab: usize,
    /// Screen opened from the drawer (Settings, Profile), shown instead of the tabs
    overlay: Option<ScreenRef>,
}

impl MainState {
    fn new(role: Role) -> Self {
        Self {
            config: resolve(role),
            drawer_open: false,
            drawer_selection: 0,
            active_tab: 0,
            overlay: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Navigator {
    history: Vec<Route>,
    main: Option<MainState>,
}

impl Navigator {
    /// Entry point for a signed-out user: history `[Login]`
    pub fn unauthenticated() -> Self {
        Self {
            history: vec![Route::Login],
            main: None,
        }
    }

    /// Mount the authenticated subtree directly: history `[MainApp{role}]`
    pub fn authenticated(role: Role) -> Self {
        Self {
            history: vec![Route::MainApp { role }],
            main: Some(MainState::new(role)),
        }
    }

    // ========== Outer stack ==========

    pub fn history(&self) -> &[Route] {
        &self.history
    }

    pub fn current_route(&self) -> Route {
        // History is never empty
        self.history.last().copied().unwrap_or(Route::Login)
    }

    pub fn is_authenticated(&self) -> bool {
        self.main.is_some()
    }

    pub fn role(&self) -> Option<Role> {
        self.main.as_ref().map(|m| m.config.role)
    }

    pub fn config(&self) -> Option<&NavigationConfig> {
        self.main.as_ref().map(|m| &m.config)
    }

    /// Push the sign-up form on top of Login.
    pub fn push_sign_up(&mut self) -> Result<(), NavigationError> {
        if self.is_authenticated() {
            return Err(NavigationError::AlreadyAuthenticated);
        }
        if self.current_route() != Route::SignUp {
            self.history.push(Route::SignUp);
        }
        Ok(())
    }

    /// Pop one entry. Returns false if there was nothing to go back to.
    ///
    /// Inside the authenticated subtree this first dismisses the drawer,
    /// then any drawer-opened screen; the `MainApp` entry itself is never popped.
    pub fn back(&mut self) -> bool {
        if let Some(main) = self.main.as_mut() {
            if main.drawer_open {
                main.drawer_open = false;
                return true;
            }
            return main.overlay.take().is_some();
        }
        if self.history.len() > 1 {
            self.history.pop();
            return true;
        }
        false
    }

    /// Replace the unauthenticated stack with `[Login]`, e.g. after a
    /// successful registration.
    pub fn back_to_login(&mut self) -> Result<(), NavigationError> {
        if self.is_authenticated() {
            return Err(NavigationError::AlreadyAuthenticated);
        }
        self.history = vec![Route::Login];
        Ok(())
    }

    /// Unauthenticated → Authenticated after a successful login.
    pub fn login(&mut self, role: Role) -> Result<(), NavigationError> {
        if self.is_authenticated() {
            return Err(NavigationError::AlreadyAuthenticated);
        }
        self.history = vec![Route::MainApp { role }];
        self.main = Some(MainState::new(role));
        tracing::debug!(role = %role, "Navigator mounted authenticated subtree");
        Ok(())
    }

    /// Authenticated → Unauthenticated. Postcondition: history is `[Login]`.
    pub fn reset_to_login(&mut self) -> Result<(), NavigationError> {
        if !self.is_authenticated() {
            return Err(NavigationError::NotAuthenticated);
        }
        self.history = vec![Route::Login];
        self.main = None;
        Ok(())
    }

    fn main_mut(&mut self) -> Result<&mut MainState, NavigationError> {
        self.main.as_mut().ok_or(NavigationError::NotAuthenticated)
    }

    // ========== Drawer ==========

    pub fn drawer_items(&self) -> &[DrawerItem] {
        self.main
            .as_ref()
            .map(|m| m.config.drawer_items.as_slice())
            .unwrap_or(&[])
    }

    pub fn is_drawer_open(&self) -> bool {
        self.main.as_ref().is_some_and(|m| m.drawer_open)
    }

    pub fn open_drawer(&mut self) -> Result<(), NavigationError> {
        let main = self.main_mut()?;
        main.drawer_open = true;
        main.drawer_selection = 0;
        Ok(())
    }

    pub fn close_drawer(&mut self) {
        if let Some(main) = self.main.as_mut() {
            main.drawer_open = false;
        }
    }

    pub fn toggle_drawer(&mut self) -> Result<(), NavigationError> {
        if self.is_drawer_open() {
            self.close_drawer();
            Ok(())
        } else {
            self.open_drawer()
        }
    }

    pub fn drawer_selection(&self) -> Option<usize> {
        self.main
            .as_ref()
            .filter(|m| m.drawer_open)
            .map(|m| m.drawer_selection)
    }

    /// Move the highlighted drawer entry, wrapping at both ends.
    pub fn move_drawer_selection(&mut self, delta: isize) {
        if let Some(main) = self.main.as_mut().filter(|m| m.drawer_open) {
            let len = main.config.drawer_items.len() as isize;
            if len > 0 {
                let next = (main.drawer_selection as isize + delta).rem_euclid(len);
                main.drawer_selection = next as usize;
            }
        }
    }

    /// Activate a drawer entry by index. The drawer closes afterwards.
    pub fn activate_drawer_item(&mut self, index: usize) -> Result<DrawerOutcome, NavigationError> {
        let main = self.main_mut()?;
        let len = main.config.drawer_items.len();
        let item = *main
            .config
            .drawer_items
            .get(index)
            .ok_or(NavigationError::IndexOutOfRange { index, len })?;

        main.drawer_open = false;
        let outcome = match item.action {
            DrawerAction::OpenTabs(_) => {
                main.overlay = None;
                DrawerOutcome::ShowTabs
            }
            DrawerAction::Open(screen) => {
                main.overlay = Some(screen);
                DrawerOutcome::ShowScreen(screen)
            }
            DrawerAction::Logout => DrawerOutcome::LogoutRequested,
        };
        Ok(outcome)
    }

    pub fn activate_selected_drawer_item(&mut self) -> Result<DrawerOutcome, NavigationError> {
        let index = self.main_mut()?.drawer_selection;
        self.activate_drawer_item(index)
    }

    /// Show a common screen (Settings, Profile) from anywhere in the
    /// authenticated subtree. Screens in the tab set select their tab.
    pub fn open_screen(&mut self, screen: ScreenRef) -> Result<(), NavigationError> {
        let main = self.main_mut()?;
        main.drawer_open = false;
        match main.config.tab_set.iter().position(|s| *s == screen) {
            Some(index) => {
                main.active_tab = index;
                main.overlay = None;
            }
            None => main.overlay = Some(screen),
        }
        Ok(())
    }

    // ========== Tabs ==========

    pub fn tabs(&self) -> &[ScreenRef] {
        self.main
            .as_ref()
            .map(|m| m.config.tab_set.as_slice())
            .unwrap_or(&[])
    }

    pub fn active_tab_index(&self) -> Option<usize> {
        self.main.as_ref().map(|m| m.active_tab)
    }

    pub fn active_tab(&self) -> Option<ScreenRef> {
        self.main
            .as_ref()
            .and_then(|m| m.config.tab_set.get(m.active_tab).copied())
    }

    pub fn select_tab(&mut self, index: usize) -> Result<(), NavigationError> {
        let main = self.main_mut()?;
        let len = main.config.tab_set.len();
        if index >= len {
            return Err(NavigationError::IndexOutOfRange { index, len });
        }
        main.active_tab = index;
        main.overlay = None;
        Ok(())
    }

    pub fn next_tab(&mut self) -> Result<(), NavigationError> {
        self.step_tab(1)
    }

    pub fn previous_tab(&mut self) -> Result<(), NavigationError> {
        self.step_tab(-1)
    }

    fn step_tab(&mut self, delta: isize) -> Result<(), NavigationError> {
        let main = self.main_mut()?;
        let len = main.config.tab_set.len() as isize;
        if len > 0 {
            main.active_tab = (main.active_tab as isize + delta).rem_euclid(len) as usize;
        }
        main.overlay = None;
        Ok(())
    }

    /// The screen rendered in the authenticated subtree: a drawer-opened
    /// screen if any, else the active tab.
    pub fn current_screen(&self) -> Option<ScreenRef> {
        let main = self.main.as_ref()?;
        main.overlay
            .or_else(|| main.config.tab_set.get(main.active_tab).copied())
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::unauthenticated()
    }
}
