// Pipeline ingestion: paging through the remote endpoint

use std::time::Instant;

use tracing::{info, instrument};

use crate::app::ports::PageSource;
use crate::constants::MAX_PAGES;
use crate::error::{AnalysisError, Result};
use crate::types::Record;

/// Requests pages of `page_size` records at offsets 0, `page_size`,
/// `2 * page_size`, ... until a page comes back empty, and concatenates
/// them in request order. The first failing page aborts the whole fetch.
pub fn fetch_all<S: PageSource + ?Sized>(source: &S, page_size: usize) -> Result<Vec<Record>> {
    fetch_all_capped(source, page_size, MAX_PAGES)
}

#[instrument(skip(source))]
pub fn fetch_all_capped<S: PageSource + ?Sized>(
    source: &S,
    page_size: usize,
    max_pages: usize,
) -> Result<Vec<Record>> {
    let started = Instant::now();
    let mut all_records = Vec::new();
    let mut offset = 0;
    let mut pages = 0;

    loop {
        let batch = source.fetch_page(page_size, offset)?;
        if batch.is_empty() {
            break;
        }
        pages += 1;
        crate::metrics::fetch::page_fetched(batch.len());
        let got = batch.len();
        all_records.extend(batch);
        info!("got {} records (total so far: {})", got, all_records.len());

        if pages >= max_pages {
            return Err(AnalysisError::PageLimitExceeded(pages));
        }
        offset += page_size;
    }

    crate::metrics::fetch::duration(started.elapsed().as_secs_f64());
    info!(
        "Fetched {} records in {} pages ({} requests)",
        all_records.len(),
        pages,
        pages + 1
    );
    Ok(all_records)
}
