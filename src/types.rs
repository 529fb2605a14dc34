use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One mail-ballot application exactly as the endpoint returned it.
pub type Record = Map<String, Value>;

/// A complete record after normalization and derivation.
///
/// Field order is the serialized order, so `yr_born` sits right after
/// `date_of_birth`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrichedRecord {
    pub party: String,
    /// Senate district label in snake_case
    pub senate: String,
    pub legislative: String,
    pub congressional: String,
    pub date_of_birth: NaiveDateTime,
    pub yr_born: i32,
    pub age: i32,
    pub application_date: NaiveDateTime,
    pub ballot_returned: Option<NaiveDateTime>,
    /// Whole days from application to return; `None` when never returned
    pub latency_days: Option<i64>,
    /// Source fields not consumed by enrichment
    pub attributes: Record,
}

/// The year ages are computed against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AsOf {
    pub year: i32,
}

impl AsOf {
    pub fn new(year: i32) -> Self {
        Self { year }
    }

    /// Reads the process-local clock once.
    pub fn today() -> Self {
        use chrono::Datelike;
        Self {
            year: chrono::Local::now().year(),
        }
    }
}
