use std::collections::BTreeMap;

use serde::Serialize;

use crate::types::EnrichedRecord;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DistrictCount {
    pub district: String,
    pub count: usize,
}

/// Congressional district with the most requests. Ties go to the
/// lexicographically smallest district identifier.
pub fn top_congressional_district(records: &[EnrichedRecord]) -> Option<DistrictCount> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for r in records {
        *counts.entry(r.congressional.as_str()).or_default() += 1;
    }

    let mut best: Option<(&str, usize)> = None;
    for (district, count) in counts {
        if best.map_or(true, |(_, top)| count > top) {
            best = Some((district, count));
        }
    }

    best.map(|(district, count)| DistrictCount {
        district: district.to_string(),
        count,
    })
}
