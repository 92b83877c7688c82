//! Shared application state handed to every request

use std::{fmt, sync::Arc};

use crate::services::{LayoffAnalytics, MockLayoffAnalytics};

/// State shared by all handlers; read-only after startup
#[derive(Clone)]
pub struct AppState {
    /// Backend answering the analytics endpoints
    pub analytics: Arc<dyn LayoffAnalytics>,
}

impl AppState {
    /// Create state around the given analytics backend
    pub fn new(analytics: Arc<dyn LayoffAnalytics>) -> Self {
        Self { analytics }
    }

    /// State backed by the constant-data backend
    pub fn with_mock_data() -> Self {
        Self::new(Arc::new(MockLayoffAnalytics::new()))
    }
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState").finish_non_exhaustive()
    }
}
