//! # Blogsite API Server
//!
//! REST API for accounts, blog posts, likes and comments.

pub mod app;
pub mod config;
pub mod forms;
pub mod handlers;
pub mod middleware;
pub mod observability;
pub mod presenter;
pub mod state;
pub mod telemetry;

pub use app::{configure_app, cors};
pub use config::AppConfig;
pub use state::AppState;
