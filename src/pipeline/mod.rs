// Data processing pipeline: fetch, partition, enrich

pub mod ingestion;
pub mod processing;

use std::time::Instant;

use tracing::{info, instrument};

use crate::app::ports::PageSource;
use crate::error::Result;
use crate::types::{AsOf, EnrichedRecord, Record};

/// Everything one run produces before reporting.
#[derive(Debug, Clone)]
pub struct PipelineOutput {
    /// Number of records fetched across all pages
    pub fetched: usize,
    pub complete: Vec<EnrichedRecord>,
    /// Records with missing values, left as fetched
    pub invalid: Vec<Record>,
}

pub struct Pipeline;

impl Pipeline {
    /// Fetches every page, splits off incomplete records, and enriches the
    /// rest. Any error aborts the run with no partial output.
    #[instrument(skip(source))]
    pub fn run<S: PageSource + ?Sized>(
        source: &S,
        page_size: usize,
        as_of: AsOf,
    ) -> Result<PipelineOutput> {
        let started = Instant::now();

        info!("Starting data pull");
        let records = ingestion::fetch_all(source, page_size)?;
        let fetched = records.len();

        let split = processing::partition(records);
        info!(
            "{} complete records, {} invalid",
            split.complete.len(),
            split.invalid.len()
        );

        let complete = processing::enrich(split.complete, as_of)?;

        crate::metrics::pipeline_duration(started.elapsed().as_secs_f64());
        Ok(PipelineOutput {
            fetched,
            complete,
            invalid: split.invalid,
        })
    }
}
