//! `aipm-web` — server side of the web front end.
//!
//! Wires configuration, the role guard and the API client together into page
//! loaders. Markup, routing and cookie transport live outside this crate.

pub mod config;
pub mod error;
pub mod pages;

pub use config::{AppConfig, AuthProvider, ConfigError};
pub use error::PageError;
pub use pages::console::{ConsoleView, console_gate};
pub use pages::dashboard::{DashboardQuery, ProjectsDashboard, load_projects_dashboard};
pub use pages::health::{HealthView, load_health};
pub use pages::project::{
    IntakePage, ProjectPage, load_project_intake, load_project_personas, load_project_settings,
};
