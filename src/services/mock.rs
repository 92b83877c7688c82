//! Constant-data analytics backend

use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

use super::{LayoffAnalytics, LayoffRecord, TrendInsight};
use crate::error::ServiceError;

/// Backend that answers every call with fixed figures
#[derive(Debug, Clone, Copy, Default)]
pub struct MockLayoffAnalytics;

impl MockLayoffAnalytics {
    pub fn new() -> Self {
        Self
    }

    /// The fixed layoff figures, in reporting order
    pub fn layoff_records() -> Vec<LayoffRecord> {
        vec![
            LayoffRecord::new("Google", 2023, 12000),
            LayoffRecord::new("Meta", 2023, 10000),
            LayoffRecord::new("Amazon", 2023, 18000),
        ]
    }

    /// The fixed insight returned for any analysis input
    pub fn trend_insight() -> TrendInsight {
        TrendInsight {
            trend: "Increasing Layoffs".to_string(),
            predictions: "Expected rise in layoffs by 5% next quarter".to_string(),
        }
    }
}

#[async_trait]
impl LayoffAnalytics for MockLayoffAnalytics {
    async fn fetch_tech_layoffs(&self) -> Result<Vec<LayoffRecord>, ServiceError> {
        debug!("Serving fixed layoff records");
        Ok(Self::layoff_records())
    }

    async fn analyze_trends(&self, data: Value) -> Result<TrendInsight, ServiceError> {
        debug!("Analyzing trends (input ignored: {})", data);
        Ok(Self::trend_insight())
    }
}
