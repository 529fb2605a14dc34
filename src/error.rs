use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("Request to {url} failed with status {status}")]
    Transport { url: String, status: u16 },

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON deserialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Could not parse field '{field}' value {value:?}: {reason}")]
    Parse {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Pagination did not reach an empty page after {0} pages")]
    PageLimitExceeded(usize),
}

impl AnalysisError {
    pub fn parse(field: &str, value: impl Into<String>, reason: impl Into<String>) -> Self {
        AnalysisError::Parse {
            field: field.to_string(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Failures talking to the remote endpoint.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            AnalysisError::Transport { .. }
                | AnalysisError::Http(_)
                | AnalysisError::Json(_)
                | AnalysisError::PageLimitExceeded(_)
        )
    }

    /// Failures turning record values into typed fields. A field absent
    /// from the schema is reported in the same class.
    pub fn is_parse(&self) -> bool {
        matches!(
            self,
            AnalysisError::Parse { .. } | AnalysisError::MissingField(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, AnalysisError>;
