//! Role-scoped navigation: the role → configuration table and the
//! three-layer navigator built on top of it.

mod config;
mod navigator;

pub use config::{DrawerAction, DrawerItem, NavigationConfig, resolve};
pub use navigator::{DrawerOutcome, Navigator, Route};
