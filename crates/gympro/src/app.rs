use std::path::PathBuf;
use std::sync::Arc;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use gympro_core::{AuthGateway, Role, Route, ScreenRef};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Direction, Layout, Rect},
};

use crate::components::{
    Component, EventResult, drawer::Drawer, header::render_header, status_bar::StatusBar,
    tab_bar::TabBar,
};
use crate::config::AppConfig;
use crate::modals::{ModalResult, handle_modal_key, render_modal};
use crate::platform::{AuthWorker, HttpAuthGateway, WorkerRequest};
use crate::screens::{
    FeatureScreens, loading::render_loading, login::LoginScreen, signup::SignUpScreen,
};
use crate::state::{AppState, ModalState};

pub struct App {
    state: AppState,
    worker: AuthWorker,
    tab_bar: TabBar,
    status_bar: StatusBar,
    drawer: Drawer,
    login_screen: LoginScreen,
    signup_screen: SignUpScreen,
    screens: FeatureScreens,
}

impl App {
    /// Create the app against the HTTP auth API named in `config`.
    pub fn with_data_dir(data_dir: PathBuf, config: AppConfig) -> color_eyre::Result<Self> {
        let gateway = HttpAuthGateway::new(&config.api_base_url, config.request_timeout())?;
        tracing::info!(
            data_dir = %data_dir.display(),
            api = %gateway.base_url(),
            "Starting GymPro"
        );
        Ok(Self::with_gateway(data_dir, config, Box::new(gateway)))
    }

    /// Create the app with any auth gateway and request the persisted session.
    pub fn with_gateway(
        data_dir: PathBuf,
        config: AppConfig,
        gateway: Box<dyn AuthGateway + Send>,
    ) -> Self {
        let state = AppState::new(data_dir, config);
        let worker = AuthWorker::new(Arc::clone(&state.store), gateway);

        let mut app = Self {
            state,
            worker,
            tab_bar: TabBar::new(),
            status_bar: StatusBar::new(),
            drawer: Drawer::new(),
            login_screen: LoginScreen::new(),
            signup_screen: SignUpScreen::new(),
            screens: FeatureScreens::new(),
        };

        // Bootstrap: nothing but the loading screen mounts until this returns
        app.state.submit(WorkerRequest::LoadSession);
        app.flush_outgoing();
        app
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }
}

impl App {
    /// runs the application's main loop until the user quits
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        let tick_rate = self.state.config.tick_rate();

        while !self.state.exit {
            self.drain_worker();
            terminal.draw(|frame| self.draw(frame))?;

            if event::poll(tick_rate)? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        self.handle_key_event(key)
                    }
                    _ => {}
                }
            }
        }

        Ok(())
    }

    /// Apply every response the worker has ready
    pub fn drain_worker(&mut self) {
        while let Some(response) = self.worker.try_recv() {
            self.state.apply_response(response);
        }
    }

    fn flush_outgoing(&mut self) {
        if let Some(request) = self.state.outgoing.take()
            && !self.worker.send(request)
        {
            self.state.submit_failed();
        }
    }

    pub fn draw(&mut self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),    // Content
                Constraint::Length(2), // Status bar
            ])
            .split(frame.area());

        match self.state.current_route() {
            None => render_loading(frame, chunks[0]),
            Some(Route::Login) => self.login_screen.render(frame, chunks[0], &self.state),
            Some(Route::SignUp) => self.signup_screen.render(frame, chunks[0], &self.state),
            Some(Route::MainApp { role }) => self.draw_main(frame, chunks[0], role),
        }

        self.status_bar.render(frame, chunks[1], &self.state);

        render_modal(frame, &self.state);
    }

    fn draw_main(&mut self, frame: &mut Frame, area: Rect, role: Role) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Header
                Constraint::Length(2), // Tab bar
                Constraint::Min(0),    // Screen
            ])
            .split(area);

        let (drawer_open, screen) = match self.state.navigator.as_ref() {
            Some(navigator) => (navigator.is_drawer_open(), navigator.current_screen()),
            None => (false, None),
        };

        render_header(frame, chunks[0], role, drawer_open);
        self.tab_bar.render(frame, chunks[1], &self.state);
        if let Some(screen) = screen {
            self.screens
                .get_mut(screen)
                .render(frame, chunks[2], &self.state);
        }

        // Drawer overlays the tab bar and screen
        let below_header = Rect {
            y: chunks[1].y,
            height: chunks[1].height + chunks[2].height,
            ..chunks[1]
        };
        self.drawer.render(frame, below_header, &self.state);
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.state.exit = true;
            return;
        }

        if self.state.modal.is_open() {
            match handle_modal_key(key, &self.state) {
                ModalResult::Confirmed(action) => {
                    self.state.modal = ModalState::None;
                    self.state.confirm(action);
                }
                ModalResult::Cancelled => self.state.modal = ModalState::None,
                ModalResult::Continue => {}
            }
            return;
        }

        self.state.clear_error();

        let result = match self.state.current_route() {
            None => match key.code {
                KeyCode::Char('q') => EventResult::Exit,
                _ => EventResult::NotHandled,
            },
            Some(Route::Login) => self.login_screen.handle_key(key, &mut self.state),
            Some(Route::SignUp) => self.signup_screen.handle_key(key, &mut self.state),
            Some(Route::MainApp { .. }) => self.handle_main_key(key),
        };

        if result == EventResult::Exit {
            self.state.exit = true;
        }
        self.flush_outgoing();
    }

    fn handle_main_key(&mut self, key: KeyEvent) -> EventResult {
        if self.drawer.handle_key(key, &mut self.state) == EventResult::Handled
            || self.tab_bar.handle_key(key, &mut self.state) == EventResult::Handled
        {
            return EventResult::Handled;
        }

        let screen = self
            .state
            .navigator
            .as_ref()
            .and_then(|n| n.current_screen());
        if let Some(screen) = screen
            && self.screens.get_mut(screen).handle_key(key, &mut self.state)
                == EventResult::Handled
        {
            return EventResult::Handled;
        }

        match key.code {
            KeyCode::Char('q') => return EventResult::Exit,
            KeyCode::Char('L') => {
                self.state.request_logout();
                return EventResult::Handled;
            }
            _ => {}
        }

        let Some(navigator) = self.state.navigator.as_mut() else {
            return EventResult::NotHandled;
        };
        let result = match key.code {
            KeyCode::Char('m') => navigator.toggle_drawer(),
            KeyCode::Char('p') => navigator.open_screen(ScreenRef::Profile),
            KeyCode::Char('s') => navigator.open_screen(ScreenRef::Settings),
            KeyCode::Esc => {
                navigator.back();
                Ok(())
            }
            _ => return EventResult::NotHandled,
        };

        if let Err(e) = result {
            tracing::warn!(error = %e, "Navigation rejected");
        }
        EventResult::Handled
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use gympro_core::{
        AuthError, AuthOperation, AuthResponse, Credentials, KeyValueStore, Registration, Session,
        SessionStore,
    };
    use ratatui::{Terminal, backend::TestBackend};

    use super::*;
    use crate::platform::FileStore;

    struct FakeGateway;

    impl AuthGateway for FakeGateway {
        fn login(&self, credentials: &Credentials) -> Result<AuthResponse, AuthError> {
            credentials.validate()?;
            if credentials.password != "pw" {
                return Err(AuthError::Rejected {
                    operation: AuthOperation::Login,
                    message: "Invalid credentials".into(),
                });
            }
            Ok(serde_json::from_str(r#"{"token":"tok","user":{"role":"ADMIN"}}"#).unwrap())
        }

        fn register(&self, registration: &Registration) -> Result<(), AuthError> {
            registration.validate()
        }
    }

    fn app_in(dir: &tempfile::TempDir) -> App {
        App::with_gateway(
            dir.path().to_path_buf(),
            AppConfig::default(),
            Box::new(FakeGateway),
        )
    }

    /// Pump the worker until no request is outstanding
    fn settle(app: &mut App) {
        for _ in 0..300 {
            app.drain_worker();
            if app.state.in_flight.is_none() && !app.state.is_loading() {
                return;
            }
            std::thread::sleep(Duration::from_millis(10));
        }
        panic!("worker did not settle");
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn ctrl(app: &mut App, c: char) {
        app.handle_key_event(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL));
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn screen_text(app: &mut App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|frame| app.draw(frame)).unwrap();
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_cold_start_without_session_shows_login() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_in(&dir);
        settle(&mut app);

        assert_eq!(app.state.current_route(), Some(Route::Login));
        let text = screen_text(&mut app);
        assert!(text.contains("Welcome Back"));
        assert!(text.contains("Ctrl+N"));
    }

    #[test]
    fn test_cold_start_with_saved_trainer_session() {
        let dir = tempfile::tempdir().unwrap();
        SessionStore::new(FileStore::new(dir.path()))
            .save(&Session::new("abc", Role::Trainer))
            .unwrap();

        let mut app = app_in(&dir);
        settle(&mut app);

        assert_eq!(
            app.state.current_route(),
            Some(Route::MainApp {
                role: Role::Trainer
            })
        );
        let text = screen_text(&mut app);
        assert!(text.contains("Trainer Dashboard"));
        assert!(text.contains("[1] Dashboard"));
        assert!(text.contains("[3] Clients"));
        assert!(text.contains("Today's Schedule"));
    }

    #[test]
    fn test_login_flow_mounts_role_from_nested_user() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_in(&dir);
        settle(&mut app);

        type_text(&mut app, "admin@gym.com");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "pw");
        press(&mut app, KeyCode::Enter);
        settle(&mut app);

        assert_eq!(
            app.state.current_route(),
            Some(Route::MainApp { role: Role::Admin })
        );
        assert!(screen_text(&mut app).contains("Login Successful!"));

        // Dismiss the alert, then the admin tabs are live
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('2'));
        let text = screen_text(&mut app);
        assert!(text.contains("Members (4 active of 5)"));

        assert_eq!(
            app.state.store.backend().get_item("userRole").unwrap(),
            Some("admin".to_string())
        );
    }

    #[test]
    fn test_blank_login_is_rejected_locally() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_in(&dir);
        settle(&mut app);

        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.state.in_flight, None);
        assert!(screen_text(&mut app).contains("All fields are required."));
    }

    #[test]
    fn test_wrong_password_shows_alert() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_in(&dir);
        settle(&mut app);

        type_text(&mut app, "a@b.c");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "nope");
        press(&mut app, KeyCode::Enter);
        settle(&mut app);

        assert_eq!(app.state.current_route(), Some(Route::Login));
        let text = screen_text(&mut app);
        assert!(text.contains("Login Failed"));
        assert!(text.contains("Login failed: Invalid credentials"));
    }

    #[test]
    fn test_q_types_into_login_form() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_in(&dir);
        settle(&mut app);

        type_text(&mut app, "q");
        assert!(!app.state.exit);
        assert_eq!(app.state.login_form.email.value, "q");

        ctrl(&mut app, 'c');
        assert!(app.state.exit);
    }

    #[test]
    fn test_sign_up_then_back_to_login() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_in(&dir);
        settle(&mut app);

        ctrl(&mut app, 'n');
        assert_eq!(app.state.current_route(), Some(Route::SignUp));
        assert!(screen_text(&mut app).contains("Create Account"));

        for value in ["Ada", "Lovelace", "ada@example.com", "pw"] {
            type_text(&mut app, value);
            press(&mut app, KeyCode::Tab);
        }
        press(&mut app, KeyCode::Right);
        assert_eq!(app.state.signup_form.role, Role::Trainer);
        press(&mut app, KeyCode::Enter);
        settle(&mut app);

        assert_eq!(
            app.state.navigator.as_ref().unwrap().history(),
            &[Route::Login]
        );
        assert!(screen_text(&mut app).contains("Registration Successful!"));
    }

    #[test]
    fn test_drawer_logout_returns_to_login() {
        let dir = tempfile::tempdir().unwrap();
        SessionStore::new(FileStore::new(dir.path()))
            .save(&Session::new("t1", Role::Admin))
            .unwrap();
        let mut app = app_in(&dir);
        settle(&mut app);

        press(&mut app, KeyCode::Char('m'));
        let text = screen_text(&mut app);
        assert!(text.contains("ADMIN"));
        assert!(text.contains("Settings"));
        assert!(text.contains("Logout"));

        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);

        assert_eq!(
            app.state.navigator.as_ref().unwrap().history(),
            &[Route::Login]
        );
        assert_eq!(app.state.store.load(), Session::empty());
    }

    #[test]
    fn test_logout_shortcut_asks_first() {
        let dir = tempfile::tempdir().unwrap();
        SessionStore::new(FileStore::new(dir.path()))
            .save(&Session::new("t1", Role::Member))
            .unwrap();
        let mut app = app_in(&dir);
        settle(&mut app);

        press(&mut app, KeyCode::Char('L'));
        assert!(screen_text(&mut app).contains("Are you sure you want to log out?"));

        press(&mut app, KeyCode::Char('n'));
        assert!(app.state.navigator.as_ref().unwrap().is_authenticated());

        press(&mut app, KeyCode::Char('L'));
        press(&mut app, KeyCode::Char('y'));
        assert_eq!(app.state.current_route(), Some(Route::Login));
    }

    #[test]
    fn test_settings_from_drawer_and_escape_back() {
        let dir = tempfile::tempdir().unwrap();
        SessionStore::new(FileStore::new(dir.path()))
            .save(&Session::new("t1", Role::Member))
            .unwrap();
        let mut app = app_in(&dir);
        settle(&mut app);

        press(&mut app, KeyCode::Char('m'));
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);
        assert_eq!(
            app.state.navigator.as_ref().unwrap().current_screen(),
            Some(ScreenRef::Settings)
        );
        assert!(screen_text(&mut app).contains("http://localhost:5000"));

        press(&mut app, KeyCode::Esc);
        assert_eq!(
            app.state.navigator.as_ref().unwrap().current_screen(),
            Some(ScreenRef::Dashboard)
        );
        assert!(screen_text(&mut app).contains("My Fitness Journey"));
    }

    #[test]
    fn test_q_quits_from_dashboard() {
        let dir = tempfile::tempdir().unwrap();
        SessionStore::new(FileStore::new(dir.path()))
            .save(&Session::new("t1", Role::Member))
            .unwrap();
        let mut app = app_in(&dir);
        settle(&mut app);

        press(&mut app, KeyCode::Char('q'));
        assert!(app.state.exit);
    }
}
