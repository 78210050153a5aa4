//! Background worker for session loading and auth calls.
//!
//! The UI thread never blocks on disk or network: it sends a request and
//! drains responses with [`AuthWorker::try_recv`] once per tick.

use std::sync::Arc;
use std::sync::mpsc::{Receiver, Sender, channel};
use std::thread::{self, JoinHandle};

use gympro_core::{
    AuthError, AuthGateway, Credentials, KeyValueStore, Registration, Session, SessionStore,
};

/// Request sent to the background worker
#[derive(Debug)]
pub enum WorkerRequest {
    /// Read the persisted session for bootstrap
    LoadSession,
    Login(Credentials),
    Register(Registration),
    /// Graceful shutdown
    Shutdown,
}

/// Response from the background worker
#[derive(Debug)]
pub enum WorkerResponse {
    SessionLoaded(Session),
    LoginSucceeded(Session),
    LoginFailed(AuthError),
    Registered,
    RegisterFailed(AuthError),
}

pub struct AuthWorker {
    request_tx: Sender<WorkerRequest>,
    response_rx: Receiver<WorkerResponse>,
    thread: Option<JoinHandle<()>>,
}

impl AuthWorker {
    /// Spawn the worker thread. The store is shared with the UI thread.
    pub fn new<S>(store: Arc<SessionStore<S>>, gateway: Box<dyn AuthGateway + Send>) -> Self
    where
        S: KeyValueStore + Send + Sync + 'static,
    {
        let (request_tx, request_rx) = channel();
        let (response_tx, response_rx) = channel();

        let ctx = WorkerContext {
            store,
            gateway,
            response_tx,
        };

        let thread = thread::Builder::new()
            .name("gympro-auth".into())
            .spawn(move || ctx.run(request_rx))
            .map_err(|e| tracing::error!(error = %e, "Failed to spawn auth worker"))
            .ok();

        Self {
            request_tx,
            response_rx,
            thread,
        }
    }

    /// Queue a request. Returns false when the worker is gone.
    pub fn send(&self, request: WorkerRequest) -> bool {
        self.thread.is_some() && self.request_tx.send(request).is_ok()
    }

    /// Try to receive a response (non-blocking)
    pub fn try_recv(&self) -> Option<WorkerResponse> {
        self.response_rx.try_recv().ok()
    }

    pub fn shutdown(&self) {
        let _ = self.request_tx.send(WorkerRequest::Shutdown);
    }
}

impl Drop for AuthWorker {
    fn drop(&mut self) {
        self.shutdown();
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
    }
}

struct WorkerContext<S> {
    store: Arc<SessionStore<S>>,
    gateway: Box<dyn AuthGateway + Send>,
    response_tx: Sender<WorkerResponse>,
}

impl<S: KeyValueStore> WorkerContext<S> {
    fn run(&self, request_rx: Receiver<WorkerRequest>) {
        while let Ok(request) = request_rx.recv() {
            let response = match request {
                WorkerRequest::Shutdown => break,

                WorkerRequest::LoadSession => {
                    let session = self.store.load();
                    tracing::debug!(authenticated = session.is_authenticated(), "Session loaded");
                    WorkerResponse::SessionLoaded(session)
                }

                WorkerRequest::Login(credentials) => {
                    tracing::info!(email = %credentials.email, "Logging in");
                    match self.gateway.login(&credentials) {
                        Ok(response) => WorkerResponse::LoginSucceeded(response.session()),
                        Err(e) => {
                            tracing::warn!(error = %e, "Login failed");
                            WorkerResponse::LoginFailed(e)
                        }
                    }
                }

                WorkerRequest::Register(registration) => {
                    tracing::info!(
                        email = %registration.email,
                        role = %registration.role,
                        "Registering account"
                    );
                    match self.gateway.register(&registration) {
                        Ok(()) => WorkerResponse::Registered,
                        Err(e) => {
                            tracing::warn!(error = %e, "Registration failed");
                            WorkerResponse::RegisterFailed(e)
                        }
                    }
                }
            };

            if self.response_tx.send(response).is_err() {
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use gympro_core::{AuthOperation, MemoryStore, Role};

    use super::*;

    struct FakeGateway;

    impl AuthGateway for FakeGateway {
        fn login(
            &self,
            credentials: &Credentials,
        ) -> Result<gympro_core::AuthResponse, AuthError> {
            credentials.validate()?;
            if credentials.password != "letmein" {
                return Err(AuthError::Rejected {
                    operation: AuthOperation::Login,
                    message: "Invalid credentials".into(),
                });
            }
            Ok(serde_json::from_str(r#"{"token":"tok","role":"trainer"}"#).unwrap())
        }

        fn register(&self, registration: &Registration) -> Result<(), AuthError> {
            registration.validate()
        }
    }

    fn recv(worker: &AuthWorker) -> WorkerResponse {
        for _ in 0..200 {
            if let Some(response) = worker.try_recv() {
                return response;
            }
            std::thread::sleep(Duration::from_millis(10));
        }
        panic!("worker did not respond");
    }

    fn worker_with(store: Arc<SessionStore<MemoryStore>>) -> AuthWorker {
        AuthWorker::new(store, Box::new(FakeGateway))
    }

    #[test]
    fn test_load_session_reads_shared_store() {
        let store = Arc::new(SessionStore::new(MemoryStore::new()));
        store.save(&Session::new("t1", Role::Admin)).unwrap();
        let worker = worker_with(Arc::clone(&store));

        assert!(worker.send(WorkerRequest::LoadSession));
        match recv(&worker) {
            WorkerResponse::SessionLoaded(session) => {
                assert_eq!(session, Session::new("t1", Role::Admin))
            }
            other => panic!("unexpected response: {other:?}"),
        }
    }

    #[test]
    fn test_login_success_and_failure() {
        let worker = worker_with(Arc::new(SessionStore::new(MemoryStore::new())));

        worker.send(WorkerRequest::Login(Credentials::new("a@b.c", "letmein")));
        match recv(&worker) {
            WorkerResponse::LoginSucceeded(session) => {
                assert_eq!(session, Session::new("tok", Role::Trainer))
            }
            other => panic!("unexpected response: {other:?}"),
        }

        worker.send(WorkerRequest::Login(Credentials::new("a@b.c", "nope")));
        match recv(&worker) {
            WorkerResponse::LoginFailed(e) => {
                assert_eq!(e.to_string(), "Login failed: Invalid credentials")
            }
            other => panic!("unexpected response: {other:?}"),
        }
    }

    #[test]
    fn test_register_reports_validation_error() {
        let worker = worker_with(Arc::new(SessionStore::new(MemoryStore::new())));

        worker.send(WorkerRequest::Register(Registration {
            first_name: String::new(),
            last_name: "Lovelace".into(),
            email: "ada@example.com".into(),
            password: "pw".into(),
            role: Role::Member,
        }));
        match recv(&worker) {
            WorkerResponse::RegisterFailed(e) => assert_eq!(e, AuthError::MissingFields),
            other => panic!("unexpected response: {other:?}"),
        }
    }

    #[test]
    fn test_drop_joins_thread() {
        let worker = worker_with(Arc::new(SessionStore::new(MemoryStore::new())));
        worker.send(WorkerRequest::LoadSession);
        drop(worker);
    }
}
