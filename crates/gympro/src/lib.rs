//! GymPro terminal front-end
//!
//! Renders the role-based dashboards of the GymPro gym management product in
//! the terminal. Routing, session persistence and the auth contract come from
//! `gympro_core`; this crate supplies:
//! - The ratatui event loop with loading, login, sign-up and dashboard screens
//! - A file-backed key-value store for the session
//! - An HTTP gateway for the authentication API, run on a background worker
//! - Configuration and file logging

pub mod app;
pub mod components;
pub mod config;
pub mod data;
pub mod logging;
pub mod modals;
pub mod platform;
pub mod screens;
pub mod state;
pub mod util;

pub use app::App;
pub use config::AppConfig;
pub use logging::init_logging;
