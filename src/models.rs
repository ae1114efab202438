use crate::interval::Interval;
use serde::{Deserialize, Serialize};

/// One day of sign-ups as returned by the upstream API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyRecord {
    pub date: String,
    pub count: u64,
}

/// A summed run of consecutive days, labelled for the chart axis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bucket {
    pub date: String,
    pub count: u64,
}

#[derive(Debug, Deserialize)]
pub struct SelectRequest {
    pub interval: String,
}

#[derive(Debug, Deserialize)]
pub struct BucketsQuery {
    pub interval: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardView {
    pub interval: Interval,
    pub series: Vec<Bucket>,
    pub total: u64,
}
