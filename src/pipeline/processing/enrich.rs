use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveDateTime};
use serde_json::Value;
use tracing::{debug, instrument};

use crate::constants::{
    APPLICATION_DATE_FIELD, BALLOT_RETURNED_FIELD, CONGRESSIONAL_FIELD, DATE_OF_BIRTH_FIELD,
    LEGISLATIVE_FIELD, PARTY_FIELD, SENATE_FIELD,
};
use crate::error::{AnalysisError, Result};
use crate::pipeline::processing::normalize::to_snake;
use crate::types::{AsOf, EnrichedRecord, Record};

// Timestamp layouts seen on the open-data portal, tried in order
const DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Enriches every complete record. One unparseable value fails the whole
/// batch.
#[instrument(skip(records), fields(records = records.len(), year = as_of.year))]
pub fn enrich(records: Vec<Record>, as_of: AsOf) -> Result<Vec<EnrichedRecord>> {
    let enriched = records
        .into_iter()
        .map(|r| enrich_record(r, as_of))
        .collect::<Result<Vec<_>>>()?;
    debug!("Enriched {} records", enriched.len());
    Ok(enriched)
}

pub fn enrich_record(mut record: Record, as_of: AsOf) -> Result<EnrichedRecord> {
    let party = take_text(&mut record, PARTY_FIELD)?;
    let senate = match take_required(&mut record, SENATE_FIELD)? {
        Value::String(s) => to_snake(&s),
        other => {
            return Err(AnalysisError::parse(
                SENATE_FIELD,
                other.to_string(),
                "expected text",
            ))
        }
    };
    let legislative = take_text(&mut record, LEGISLATIVE_FIELD)?;
    let congressional = take_text(&mut record, CONGRESSIONAL_FIELD)?;

    let date_of_birth = take_date(&mut record, DATE_OF_BIRTH_FIELD)?;
    let application_date = take_date(&mut record, APPLICATION_DATE_FIELD)?;
    let ballot_returned = match record.remove(BALLOT_RETURNED_FIELD) {
        None | Some(Value::Null) => None,
        Some(v) => Some(parse_date_value(BALLOT_RETURNED_FIELD, &v)?),
    };

    let yr_born = date_of_birth.year();
    let latency_days = ballot_returned.map(|returned| latency_days(application_date, returned));

    Ok(EnrichedRecord {
        party,
        senate,
        legislative,
        congressional,
        date_of_birth,
        yr_born,
        age: as_of.year - yr_born,
        application_date,
        ballot_returned,
        latency_days,
        attributes: record,
    })
}

/// Whole days between two instants, rounded toward negative infinity.
pub fn latency_days(applied: NaiveDateTime, returned: NaiveDateTime) -> i64 {
    let elapsed = returned - applied;
    // num_days truncates toward zero
    let days = elapsed.num_days();
    if elapsed < Duration::days(days) {
        days - 1
    } else {
        days
    }
}

/// Parses the date layouts the dataset uses. Offsets in RFC 3339 values are
/// dropped in favour of the written local time.
pub fn parse_date(text: &str) -> Option<NaiveDateTime> {
    let text = text.trim();
    DATETIME_FORMATS
        .iter()
        .find_map(|f| NaiveDateTime::parse_from_str(text, f).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(text, DATE_FORMAT)
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
        .or_else(|| {
            DateTime::parse_from_rfc3339(text)
                .ok()
                .map(|dt| dt.naive_local())
        })
}

fn take_required(record: &mut Record, field: &str) -> Result<Value> {
    match record.remove(field) {
        None | Some(Value::Null) => Err(AnalysisError::MissingField(field.to_string())),
        Some(v) => Ok(v),
    }
}

/// Grouping labels arrive as strings but numeric codes are accepted as text.
fn take_text(record: &mut Record, field: &str) -> Result<String> {
    match take_required(record, field)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        other => Err(AnalysisError::parse(field, other.to_string(), "expected text")),
    }
}

fn take_date(record: &mut Record, field: &str) -> Result<NaiveDateTime> {
    let value = take_required(record, field)?;
    parse_date_value(field, &value)
}

fn parse_date_value(field: &str, value: &Value) -> Result<NaiveDateTime> {
    let text = value
        .as_str()
        .ok_or_else(|| AnalysisError::parse(field, value.to_string(), "expected a date string"))?;
    parse_date(text).ok_or_else(|| AnalysisError::parse(field, text, "unrecognized date"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn rec(v: Value) -> Record {
        v.as_object().cloned().unwrap()
    }

    fn sample() -> Record {
        rec(json!({
            "countyname": "ADAMS",
            "party": "D",
            "senate": " 12th Senate District! ",
            "legislative": "91ST LEGISLATIVE DISTRICT",
            "congressional": "13TH CONGRESSIONAL DISTRICT",
            "dateofbirth": "1980-05-01",
            "applicationdate": "2020-09-01",
            "dateballotreturned": "2020-09-10"
        }))
    }

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_derived_fields() {
        let e = enrich_record(sample(), AsOf::new(2024)).unwrap();

        assert_eq!(e.senate, "12th_senate_district");
        assert_eq!(e.yr_born, 1980);
        assert_eq!(e.age, 44);
        assert_eq!(e.latency_days, Some(9));
        assert_eq!(e.date_of_birth, ymd(1980, 5, 1));
        assert_eq!(e.ballot_returned, Some(ymd(2020, 9, 10)));
        assert_eq!(e.attributes.len(), 1);
        assert_eq!(e.attributes["countyname"], "ADAMS");
    }

    #[test]
    fn test_age_tracks_as_of_year() {
        let a = enrich_record(sample(), AsOf::new(2020)).unwrap();
        let b = enrich_record(sample(), AsOf::new(2031)).unwrap();
        assert_eq!(a.age, 40);
        assert_eq!(b.age, 51);
        assert_eq!(a.yr_born, b.yr_born);
    }

    #[test]
    fn test_floating_timestamps() {
        let mut r = sample();
        r.insert("dateofbirth".into(), json!("1957-12-31T00:00:00.000"));
        r.insert("applicationdate".into(), json!("2020-10-20T00:00:00.000"));
        r.insert("dateballotreturned".into(), json!("2020-10-19T00:00:00.000"));

        let e = enrich_record(r, AsOf::new(2024)).unwrap();
        assert_eq!(e.yr_born, 1957);
        assert_eq!(e.latency_days, Some(-1));
    }

    #[test]
    fn test_latency_floors_partial_days() {
        let applied = ymd(2020, 9, 1) + chrono::Duration::hours(18);
        assert_eq!(latency_days(applied, ymd(2020, 9, 3)), 1);
        assert_eq!(latency_days(ymd(2020, 9, 3), applied), -2);
        assert_eq!(latency_days(applied, applied), 0);
        assert_eq!(latency_days(ymd(2020, 9, 3), ymd(2020, 9, 1)), -2);
    }

    #[test]
    fn test_latency_floors_sub_second_spans() {
        let applied = parse_date("2020-09-10T00:00:00.500").unwrap();
        let returned = parse_date("2020-09-10T00:00:00.000").unwrap();
        assert_eq!(latency_days(applied, returned), -1);
        assert_eq!(latency_days(returned, applied), 0);

        let mut r = sample();
        r.insert("applicationdate".into(), json!("2020-09-10T00:00:00.500"));
        r.insert("dateballotreturned".into(), json!("2020-09-10T00:00:00.000"));
        assert_eq!(enrich_record(r, AsOf::new(2024)).unwrap().latency_days, Some(-1));
    }

    #[test]
    fn test_parse_date_layouts() {
        assert_eq!(parse_date("2020-09-01"), Some(ymd(2020, 9, 1)));
        assert_eq!(parse_date("2020-09-01T00:00:00"), Some(ymd(2020, 9, 1)));
        assert_eq!(parse_date("2020-09-01 00:00:00.000"), Some(ymd(2020, 9, 1)));
        assert_eq!(parse_date("2020-09-01T00:00:00-04:00"), Some(ymd(2020, 9, 1)));
        assert_eq!(parse_date("09/01/2020"), None);
        assert_eq!(parse_date("2020-02-30"), None);
    }

    #[test]
    fn test_absent_return_date_is_tolerated() {
        let mut r = sample();
        r.remove("dateballotreturned");
        let e = enrich_record(r, AsOf::new(2024)).unwrap();
        assert_eq!(e.ballot_returned, None);
        assert_eq!(e.latency_days, None);

        let mut r = sample();
        r.insert("dateballotreturned".into(), Value::Null);
        assert_eq!(enrich_record(r, AsOf::new(2024)).unwrap().latency_days, None);
    }

    #[test]
    fn test_bad_date_fails_whole_batch() {
        let mut bad = sample();
        bad.insert("applicationdate".into(), json!("not a date"));

        let err = enrich(vec![sample(), bad, sample()], AsOf::new(2024)).unwrap_err();
        assert!(err.is_parse());
        match err {
            AnalysisError::Parse { field, value, .. } => {
                assert_eq!(field, "applicationdate");
                assert_eq!(value, "not a date");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_senate_must_be_text() {
        let mut r = sample();
        r.insert("senate".into(), json!(12));
        let err = enrich_record(r, AsOf::new(2024)).unwrap_err();
        assert!(matches!(err, AnalysisError::Parse { ref field, .. } if field == "senate"));
    }

    #[test]
    fn test_numeric_district_codes_become_text() {
        let mut r = sample();
        r.insert("congressional".into(), json!(13));
        let e = enrich_record(r, AsOf::new(2024)).unwrap();
        assert_eq!(e.congressional, "13");
    }

    #[test]
    fn test_missing_schema_field() {
        let mut r = sample();
        r.remove("party");
        let err = enrich_record(r, AsOf::new(2024)).unwrap_err();
        assert!(matches!(err, AnalysisError::MissingField(ref f) if f == "party"));
        assert!(err.is_parse());
    }

    #[test]
    fn test_yr_born_serialized_after_date_of_birth() {
        let e = enrich_record(sample(), AsOf::new(2024)).unwrap();
        let text = serde_json::to_string(&e).unwrap();
        let dob = text.find("\"date_of_birth\"").unwrap();
        let yr = text.find("\"yr_born\"").unwrap();
        let age = text.find("\"age\"").unwrap();
        assert!(dob < yr && yr < age);
    }

    #[test]
    fn test_empty_batch() {
        assert!(enrich(Vec::new(), AsOf::new(2024)).unwrap().is_empty());
    }
}
