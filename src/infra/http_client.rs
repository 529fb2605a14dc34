use std::time::Duration;

use reqwest::blocking::Client;
use serde_json::Value;
use tracing::{debug, instrument};

use crate::app::ports::PageSource;
use crate::constants::{ENDPOINT_URL, HTTP_TIMEOUT_SECS, LIMIT_PARAM, OFFSET_PARAM};
use crate::error::{AnalysisError, Result};
use crate::types::Record;

/// Blocking client for a Socrata-style JSON endpoint paged with
/// `$limit`/`$offset`.
pub struct SocrataClient {
    client: Client,
    url: String,
}

impl SocrataClient {
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
            .build()?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }

    /// Client for the Pennsylvania mail-ballot dataset.
    pub fn pa_mail_ballots() -> Result<Self> {
        Self::new(ENDPOINT_URL)
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl PageSource for SocrataClient {
    #[instrument(skip(self), fields(url = %self.url))]
    fn fetch_page(&self, limit: usize, offset: usize) -> Result<Vec<Record>> {
        let resp = self
            .client
            .get(&self.url)
            .query(&[(LIMIT_PARAM, limit), (OFFSET_PARAM, offset)])
            .send()?;

        let status = resp.status();
        if !status.is_success() {
            return Err(AnalysisError::Transport {
                url: self.url.clone(),
                status: status.as_u16(),
            });
        }

        let bytes = resp.bytes()?;
        debug!("Received {} bytes", bytes.len());
        parse_page(&bytes)
    }
}

/// Decodes a page body: a JSON array of flat JSON objects.
pub fn parse_page(bytes: &[u8]) -> Result<Vec<Record>> {
    let rows: Vec<Value> = serde_json::from_slice(bytes)?;
    rows.into_iter()
        .map(|row| serde_json::from_value::<Record>(row).map_err(AnalysisError::from))
        .collect()
}
