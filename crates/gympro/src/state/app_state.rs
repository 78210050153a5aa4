use std::path::PathBuf;
use std::sync::Arc;

use gympro_core::{
    AuthError, BootstrapSequencer, Navigator, Route, SessionStore, establish_session, logout,
};

use crate::config::AppConfig;
use crate::logging::LOG_FILE_NAME;
use crate::platform::{FileStore, WorkerRequest, WorkerResponse};

use super::forms::{LoginForm, SignUpForm};
use super::modal::{ConfirmAction, ConfirmModal, MessageModal, ModalState};

/// The auth operation currently waiting on the worker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InFlight {
    Session,
    Login,
    Register,
}

impl InFlight {
    fn of(request: &WorkerRequest) -> Option<InFlight> {
        match request {
            WorkerRequest::LoadSession => Some(InFlight::Session),
            WorkerRequest::Login(_) => Some(InFlight::Login),
            WorkerRequest::Register(_) => Some(InFlight::Register),
            WorkerRequest::Shutdown => None,
        }
    }
}

pub struct AppState {
    pub data_dir: PathBuf,
    pub config: AppConfig,
    pub store: Arc<SessionStore<FileStore>>,
    pub bootstrap: BootstrapSequencer,
    /// `None` until the persisted session has been read
    pub navigator: Option<Navigator>,
    pub login_form: LoginForm,
    pub signup_form: SignUpForm,
    pub modal: ModalState,
    pub in_flight: Option<InFlight>,
    /// Request queued for the worker by the last key press
    pub outgoing: Option<WorkerRequest>,
    pub error_message: Option<String>,
    pub exit: bool,
}

impl AppState {
    pub fn new(data_dir: PathBuf, config: AppConfig) -> Self {
        let store = Arc::new(SessionStore::new(FileStore::new(&data_dir)));
        Self {
            data_dir,
            config,
            store,
            bootstrap: BootstrapSequencer::new(),
            navigator: None,
            login_form: LoginForm::default(),
            signup_form: SignUpForm::default(),
            modal: ModalState::None,
            in_flight: None,
            outgoing: None,
            error_message: None,
            exit: false,
        }
    }

    pub fn log_path(&self) -> PathBuf {
        self.data_dir.join(LOG_FILE_NAME)
    }

    pub fn is_loading(&self) -> bool {
        self.navigator.is_none()
    }

    pub fn current_route(&self) -> Option<Route> {
        self.navigator.as_ref().map(Navigator::current_route)
    }

    pub fn is_pending(&self, kind: InFlight) -> bool {
        self.in_flight == Some(kind)
    }

    /// Queue a worker request. Refused while another request is in flight.
    pub fn submit(&mut self, request: WorkerRequest) -> bool {
        if self.in_flight.is_some() {
            tracing::debug!(in_flight = ?self.in_flight, "Ignoring submit while a request is pending");
            return false;
        }
        self.in_flight = InFlight::of(&request);
        self.outgoing = Some(request);
        true
    }

    /// The worker could not accept the queued request
    pub fn submit_failed(&mut self) {
        let kind = self.in_flight.take();
        tracing::error!(kind = ?kind, "Auth worker is unavailable");
        if kind == Some(InFlight::Session) {
            // Without a worker the session cannot be read, fall back to Login
            self.finish_bootstrap(gympro_core::Session::empty());
        }
        self.show_error("Error", "Background worker is unavailable.");
    }

    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.error_message = Some(msg.into());
    }

    pub fn clear_error(&mut self) {
        self.error_message = None;
    }

    pub fn show_info(&mut self, title: &str, message: &str) {
        self.modal = ModalState::Message(MessageModal::info(title, message));
    }

    pub fn show_error(&mut self, title: &str, message: &str) {
        self.modal = ModalState::Message(MessageModal::error(title, message));
    }

    /// Alert for an auth failure; blank-field errors share one title across forms
    pub fn show_auth_error(&mut self, title: &str, error: &AuthError) {
        match error {
            AuthError::MissingFields => self.show_error("Error", &error.to_string()),
            _ => self.show_error(title, &error.to_string()),
        }
    }

    fn finish_bootstrap(&mut self, session: gympro_core::Session) {
        let navigator = self.bootstrap.complete(session);
        if self.navigator.is_none() {
            self.navigator = Some(navigator);
        }
    }

    /// Apply a response from the auth worker.
    pub fn apply_response(&mut self, response: WorkerResponse) {
        match response {
            WorkerResponse::SessionLoaded(session) => {
                if self.in_flight == Some(InFlight::Session) {
                    self.in_flight = None;
                }
                self.finish_bootstrap(session);
            }

            WorkerResponse::LoginSucceeded(session) => {
                self.in_flight = None;
                let Some(navigator) = self.navigator.as_mut() else {
                    return;
                };
                match establish_session(&*self.store, navigator, &session) {
                    Ok(role) => {
                        tracing::info!(role = %role, "Signed in");
                        self.login_form.reset();
                        self.show_info("Success", "Login Successful!");
                    }
                    Err(e) => tracing::warn!(error = %e, "Login response ignored"),
                }
            }

            WorkerResponse::LoginFailed(error) => {
                self.in_flight = None;
                self.login_form.password.clear();
                self.show_auth_error("Login Failed", &error);
            }

            WorkerResponse::Registered => {
                self.in_flight = None;
                if let Some(navigator) = self.navigator.as_mut()
                    && let Err(e) = navigator.back_to_login()
                {
                    tracing::warn!(error = %e, "Could not return to login after registration");
                }
                self.signup_form.reset();
                self.show_info("Success", "Registration Successful! You can now log in.");
            }

            WorkerResponse::RegisterFailed(error) => {
                self.in_flight = None;
                self.show_auth_error("Registration Failed", &error);
            }
        }
    }

    /// Ask before logging out
    pub fn request_logout(&mut self) {
        if self.navigator.as_ref().is_some_and(Navigator::is_authenticated) {
            self.modal = ModalState::Confirm(ConfirmModal::logout());
        }
    }

    pub fn confirm(&mut self, action: ConfirmAction) {
        match action {
            ConfirmAction::Logout => self.logout_now(),
        }
    }

    /// Clear the persisted session and return to Login.
    pub fn logout_now(&mut self) {
        let Some(navigator) = self.navigator.as_mut() else {
            return;
        };
        match logout(navigator, &*self.store) {
            Ok(report) if !report.storage_cleared => {
                self.set_error("Signed out, but the saved session could not be removed");
            }
            Ok(_) => self.clear_error(),
            Err(e) => tracing::debug!(error = %e, "Logout ignored"),
        }
    }
}

#[cfg(test)]
mod tests {
    use gympro_core::{AuthOperation, KeyValueStore, Role, Session};

    use super::*;

    fn state_in(dir: &tempfile::TempDir) -> AppState {
        AppState::new(dir.path().to_path_buf(), AppConfig::default())
    }

    fn booted(dir: &tempfile::TempDir, session: Session) -> AppState {
        let mut state = state_in(dir);
        assert!(state.submit(WorkerRequest::LoadSession));
        state.outgoing.take();
        state.apply_response(WorkerResponse::SessionLoaded(session));
        state
    }

    #[test]
    fn test_loading_until_session_arrives() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = state_in(&dir);
        assert!(state.is_loading());
        assert!(state.submit(WorkerRequest::LoadSession));
        assert!(state.is_pending(InFlight::Session));

        state.apply_response(WorkerResponse::SessionLoaded(Session::new("t", Role::Admin)));

        assert!(!state.is_loading());
        assert_eq!(state.in_flight, None);
        assert_eq!(state.current_route(), Some(Route::MainApp { role: Role::Admin }));
    }

    #[test]
    fn test_single_request_in_flight() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = booted(&dir, Session::empty());

        assert!(state.submit(WorkerRequest::Login(gympro_core::Credentials::new("a", "b"))));
        assert!(!state.submit(WorkerRequest::Login(gympro_core::Credentials::new("a", "b"))));
        assert!(state.is_pending(InFlight::Login));
    }

    #[test]
    fn test_login_success_persists_and_mounts() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = booted(&dir, Session::empty());
        state.login_form.email.value = "a@b.c".into();

        state.submit(WorkerRequest::Login(state.login_form.credentials()));
        state.apply_response(WorkerResponse::LoginSucceeded(Session::new(
            "tok",
            Role::Trainer,
        )));

        assert_eq!(
            state.current_route(),
            Some(Route::MainApp {
                role: Role::Trainer
            })
        );
        assert_eq!(state.store.load(), Session::new("tok", Role::Trainer));
        assert_eq!(state.login_form, LoginForm::default());
        match &state.modal {
            ModalState::Message(m) => {
                assert_eq!(m.message, "Login Successful!");
                assert!(!m.is_error);
            }
            other => panic!("unexpected modal: {other:?}"),
        }
    }

    #[test]
    fn test_login_failure_shows_server_message() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = booted(&dir, Session::empty());

        state.apply_response(WorkerResponse::LoginFailed(AuthError::Rejected {
            operation: AuthOperation::Login,
            message: "Invalid credentials".into(),
        }));

        assert_eq!(state.current_route(), Some(Route::Login));
        match &state.modal {
            ModalState::Message(m) => {
                assert_eq!(m.title, "Login Failed");
                assert_eq!(m.message, "Login failed: Invalid credentials");
                assert!(m.is_error);
            }
            other => panic!("unexpected modal: {other:?}"),
        }
    }

    #[test]
    fn test_registration_returns_to_login() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = booted(&dir, Session::empty());
        state.navigator.as_mut().unwrap().push_sign_up().unwrap();
        state.signup_form.first_name.value = "Ada".into();

        state.apply_response(WorkerResponse::Registered);

        assert_eq!(state.navigator.as_ref().unwrap().history(), &[Route::Login]);
        assert_eq!(state.signup_form, SignUpForm::default());
        match &state.modal {
            ModalState::Message(m) => {
                assert_eq!(m.message, "Registration Successful! You can now log in.")
            }
            other => panic!("unexpected modal: {other:?}"),
        }
    }

    #[test]
    fn test_missing_fields_uses_generic_title() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = booted(&dir, Session::empty());

        state.apply_response(WorkerResponse::RegisterFailed(AuthError::MissingFields));

        match &state.modal {
            ModalState::Message(m) => {
                assert_eq!(m.title, "Error");
                assert_eq!(m.message, "All fields are required.");
            }
            other => panic!("unexpected modal: {other:?}"),
        }
    }

    #[test]
    fn test_confirmed_logout_clears_file_store() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = booted(&dir, Session::new("t1", Role::Member));
        state.store.save(&Session::new("t1", Role::Member)).unwrap();

        state.request_logout();
        let action = match &state.modal {
            ModalState::Confirm(c) => c.action,
            other => panic!("unexpected modal: {other:?}"),
        };
        state.modal = ModalState::None;
        state.confirm(action);

        assert_eq!(state.current_route(), Some(Route::Login));
        assert_eq!(state.store.backend().get_item("authToken").unwrap(), None);
        assert_eq!(state.error_message, None);
    }

    #[test]
    fn test_logout_request_ignored_when_signed_out() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = booted(&dir, Session::empty());
        state.request_logout();
        assert!(!state.modal.is_open());
    }

    #[test]
    fn test_worker_unavailable_during_bootstrap_falls_back_to_login() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = state_in(&dir);
        state.submit(WorkerRequest::LoadSession);
        state.outgoing.take();

        state.submit_failed();

        assert_eq!(state.current_route(), Some(Route::Login));
        assert!(state.modal.is_open());
    }
}
