//! Platform services: session persistence on disk, the HTTP auth gateway,
//! and the background worker that runs both off the UI thread.

mod file_store;
mod http_gateway;
mod worker;

pub use file_store::{FileStore, SESSION_FILE_NAME};
pub use http_gateway::HttpAuthGateway;
pub use worker::{AuthWorker, WorkerRequest, WorkerResponse};
