//! State management module
//!
//! Holds the per-process handles that request handlers share.

pub mod app_state;

pub use app_state::AppState;
