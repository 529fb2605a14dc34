use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use crate::types::EnrichedRecord;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistrictMedian {
    pub district: String,
    /// `None` when no record in the district has a latency
    pub median: Option<f64>,
}

/// Median `latency_days` per legislative district, ascending by district.
pub fn median_latency_by_district(records: &[EnrichedRecord]) -> Vec<DistrictMedian> {
    let mut groups: BTreeMap<&str, Vec<i64>> = BTreeMap::new();
    for r in records {
        let values = groups.entry(r.legislative.as_str()).or_default();
        if let Some(days) = r.latency_days {
            values.push(days);
        }
    }

    groups
        .into_iter()
        .map(|(district, mut values)| DistrictMedian {
            district: district.to_string(),
            median: median(&mut values),
        })
        .collect()
}

/// Middle value, or the mean of the two middle values for even counts.
pub fn median(values: &mut [i64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    values.sort_unstable();
    let mid = values.len() / 2;
    if values.len() % 2 == 1 {
        Some(values[mid] as f64)
    } else {
        Some((values[mid - 1] as f64 + values[mid] as f64) / 2.0)
    }
}

/// Display wrapper for the per-district listing.
pub struct MedianListing<'a>(pub &'a [DistrictMedian]);

impl fmt::Display for MedianListing<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "(no records)");
        }
        let width = self.0.iter().map(|m| m.district.len()).max().unwrap_or(0);
        for m in self.0 {
            match m.median {
                Some(v) => writeln!(f, "{:<width$}  {:.1}", m.district, v)?,
                None => writeln!(f, "{:<width$}  n/a", m.district)?,
            }
        }
        Ok(())
    }
}
