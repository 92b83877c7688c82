//! Records returned by the analytics service

use serde::{Deserialize, Serialize};

/// Headcount reduction announced by one company in one year
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoffRecord {
    pub company: String,
    pub year: i32,
    pub layoffs: u32,
}

impl LayoffRecord {
    pub fn new(company: impl Into<String>, year: i32, layoffs: u32) -> Self {
        Self {
            company: company.into(),
            year,
            layoffs,
        }
    }
}

/// Outcome of a trend analysis run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendInsight {
    pub trend: String,
    pub predictions: String,
}
