use serde_json::Value;
use tracing::{instrument, warn};

use crate::types::Record;

/// Fetched records split by completeness. Each input record lands in
/// exactly one of the two sets, in input order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Partition {
    pub complete: Vec<Record>,
    /// Records with at least one missing value, kept for inspection only
    pub invalid: Vec<Record>,
}

impl Partition {
    pub fn len(&self) -> usize {
        self.complete.len() + self.invalid.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Union of field names across all records, in order of first appearance.
pub fn columns(records: &[Record]) -> Vec<String> {
    let mut cols: Vec<String> = Vec::new();
    for record in records {
        for key in record.keys() {
            if !cols.iter().any(|c| c == key) {
                cols.push(key.clone());
            }
        }
    }
    cols
}

/// A record is complete when every column of the table is present in it
/// and not null.
pub fn is_complete(record: &Record, columns: &[String]) -> bool {
    columns
        .iter()
        .all(|c| !matches!(record.get(c), None | Some(Value::Null)))
}

#[instrument(skip(records), fields(records = records.len()))]
pub fn partition(records: Vec<Record>) -> Partition {
    let cols = columns(&records);
    let (complete, invalid): (Vec<Record>, Vec<Record>) =
        records.into_iter().partition(|r| is_complete(r, &cols));

    crate::metrics::partition::split(complete.len(), invalid.len());
    if !invalid.is_empty() {
        warn!(
            "Set aside {} records with missing values ({} complete)",
            invalid.len(),
            complete.len()
        );
    }

    Partition { complete, invalid }
}
