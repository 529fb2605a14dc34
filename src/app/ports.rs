use crate::error::Result;
use crate::types::Record;

/// A paginated tabular endpoint. Implementations return one page of at most
/// `limit` records starting at row `offset`; an empty page means the data is
/// exhausted.
pub trait PageSource {
    fn fetch_page(&self, limit: usize, offset: usize) -> Result<Vec<Record>>;
}
