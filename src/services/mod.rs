//! Analytics service layer
//!
//! Controllers talk to the analytics backend only through the
//! [`LayoffAnalytics`] trait, so a real data source can replace the
//! constant-data backend without touching the HTTP layer.

pub mod mock;
pub mod models;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::ServiceError;

pub use mock::MockLayoffAnalytics;
pub use models::{LayoffRecord, TrendInsight};

/// Business operations behind the `/api` endpoints
#[async_trait]
pub trait LayoffAnalytics: Send + Sync {
    /// Fetch the known tech layoff figures
    async fn fetch_tech_layoffs(&self) -> Result<Vec<LayoffRecord>, ServiceError>;

    /// Analyze caller-supplied data and report the layoff trend
    async fn analyze_trends(&self, data: Value) -> Result<TrendInsight, ServiceError>;
}
