//! Layoff Insights - an HTTP server for tech layoff analytics
//!
//! Requests pass through a middleware chain and a fixed route table to
//! handlers that delegate to a [`services::LayoffAnalytics`] backend. The
//! bundled backend serves constant figures.

pub mod api;
pub mod config;
pub mod error;
pub mod services;
pub mod state;
pub mod utils;

// Re-export commonly used types
pub use api::create_router;
pub use config::Config;
pub use error::ServiceError;
pub use state::AppState;
pub use utils::signals::shutdown_signal;
