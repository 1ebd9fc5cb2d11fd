//! STMS Portal Kernel Library
//!
//! Role-filtered navigation for the Student Management System portal, the
//! shell that renders it, and the tooling around its configuration.
//! The main entry point for running the server is the `stms` binary.

pub mod cli;
pub mod config;
pub mod error;
pub mod menu;
pub mod models;
pub mod routes;
pub mod state;
pub mod theme;

pub use config::Config;
pub use error::{AppError, AppResult};
pub use state::AppState;
