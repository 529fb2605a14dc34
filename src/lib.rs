pub mod app;
pub mod constants;
pub mod error;
pub mod infra;
pub mod logging;
pub mod metrics;
pub mod pipeline;
pub mod reports;
pub mod types;

pub use error::{AnalysisError, Result};
pub use pipeline::{Pipeline, PipelineOutput};
pub use reports::Reports;
pub use types::{AsOf, EnrichedRecord, Record};
