//! Scenario tests for the navigation and session core
//!
//! Tests are organized by topic:
//! - `scenarios` - Cold start to logout, end to end over a memory store
//! - `roles` - Role normalisation feeding the resolver and navigator
//! - `failures` - Storage failures during bootstrap, login and logout

mod failures;
mod scenarios;
