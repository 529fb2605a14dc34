//! Fixed run parameters. Nothing here is read from the environment.

// Pennsylvania mail-ballot applications on the state's open-data portal
pub const ENDPOINT_URL: &str = "https://data.pa.gov/resource/mcba-yywm.json";
pub const PAGE_SIZE: usize = 50_000;

// Socrata query parameter names
pub const LIMIT_PARAM: &str = "$limit";
pub const OFFSET_PARAM: &str = "$offset";

pub const HTTP_TIMEOUT_SECS: u64 = 300;

/// Upper bound on non-empty pages before the fetch gives up.
pub const MAX_PAGES: usize = 10_000;

// Party x age preview
pub const PREVIEW_ROWS: usize = 10;
pub const PREVIEW_COLUMNS: usize = 10;

// Source schema field names
pub const PARTY_FIELD: &str = "party";
pub const SENATE_FIELD: &str = "senate";
pub const LEGISLATIVE_FIELD: &str = "legislative";
pub const CONGRESSIONAL_FIELD: &str = "congressional";
pub const DATE_OF_BIRTH_FIELD: &str = "dateofbirth";
pub const APPLICATION_DATE_FIELD: &str = "applicationdate";
pub const BALLOT_RETURNED_FIELD: &str = "dateballotreturned";

/// Fields consumed by enrichment; everything else is carried opaquely.
pub const ENRICHMENT_FIELDS: [&str; 7] = [
    PARTY_FIELD,
    SENATE_FIELD,
    LEGISLATIVE_FIELD,
    CONGRESSIONAL_FIELD,
    DATE_OF_BIRTH_FIELD,
    APPLICATION_DATE_FIELD,
    BALLOT_RETURNED_FIELD,
];
