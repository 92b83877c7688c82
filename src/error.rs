//! Error types raised by the analytics service layer

use thiserror::Error;

/// Failures an analytics backend can report to the controllers
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("Data source unavailable: {0}")]
    Unavailable(String),

    #[error("Trend analysis failed: {0}")]
    Analysis(String),
}

impl ServiceError {
    pub fn unavailable(msg: impl Into<String>) -> Self {
        ServiceError::Unavailable(msg.into())
    }

    pub fn analysis(msg: impl Into<String>) -> Self {
        ServiceError::Analysis(msg.into())
    }
}
