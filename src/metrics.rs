//! Metric names and recording helpers for a pipeline run.
//!
//! No exporter is installed by the binary; without a recorder these calls
//! are no-ops, so embedding applications decide where the numbers go.

use std::fmt;

use ::metrics::{counter, histogram};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetricName {
    PagesFetched,
    RecordsFetched,
    FetchDuration,
    RecordsComplete,
    RecordsInvalid,
    PipelineDuration,
}

impl fmt::Display for MetricName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MetricName::PagesFetched => "mba_fetch_pages_total",
            MetricName::RecordsFetched => "mba_fetch_records_total",
            MetricName::FetchDuration => "mba_fetch_duration_seconds",
            MetricName::RecordsComplete => "mba_partition_complete_total",
            MetricName::RecordsInvalid => "mba_partition_invalid_total",
            MetricName::PipelineDuration => "mba_pipeline_duration_seconds",
        };
        write!(f, "{}", name)
    }
}

pub mod fetch {
    use super::*;

    pub fn page_fetched(records: usize) {
        counter!(MetricName::PagesFetched.to_string()).increment(1);
        counter!(MetricName::RecordsFetched.to_string()).increment(records as u64);
    }

    pub fn duration(secs: f64) {
        histogram!(MetricName::FetchDuration.to_string()).record(secs);
    }
}

pub mod partition {
    use super::*;

    pub fn split(complete: usize, invalid: usize) {
        counter!(MetricName::RecordsComplete.to_string()).increment(complete as u64);
        counter!(MetricName::RecordsInvalid.to_string()).increment(invalid as u64);
    }
}

pub fn pipeline_duration(secs: f64) {
    histogram!(MetricName::PipelineDuration.to_string()).record(secs);
}
