//! Aggregate views over the enriched record set.
//!
//! Each view is computed independently and only reads the records.

pub mod congressional;
pub mod latency;
pub mod party_age;

use std::fmt;

use serde::Serialize;

pub use congressional::{top_congressional_district, DistrictCount};
pub use latency::{median_latency_by_district, DistrictMedian, MedianListing};
pub use party_age::PartyAgeTable;

use crate::types::EnrichedRecord;

#[derive(Debug, Clone, Serialize)]
pub struct Reports {
    pub party_age: PartyAgeTable,
    pub median_latency: Vec<DistrictMedian>,
    pub top_congressional: Option<DistrictCount>,
}

impl Reports {
    pub fn compute(records: &[EnrichedRecord]) -> Self {
        Self {
            party_age: PartyAgeTable::from_records(records),
            median_latency: median_latency_by_district(records),
            top_congressional: top_congressional_district(records),
        }
    }
}

impl fmt::Display for Reports {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "\n=== Requests by Party and Age ===")?;
        write!(f, "{}", self.party_age)?;

        writeln!(f, "\n=== Median Latency (days) by Legislative District ===")?;
        write!(f, "{}", MedianListing(&self.median_latency))?;

        let top = self
            .top_congressional
            .as_ref()
            .map(|d| d.district.as_str())
            .unwrap_or("none");
        writeln!(f, "\nTop congressional district by # of requests: {}", top)
    }
}
