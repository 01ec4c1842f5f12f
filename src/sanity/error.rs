use thiserror::Error;

/// Why a CMS call produced no data. Lets callers tell an empty dataset
/// apart from an unreachable backend.
#[derive(Error, Debug)]
pub enum CmsError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("CMS responded with {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Failed to decode CMS response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("CMS request timed out after {0}s")]
    Timeout(u64),

    #[error("No CMS write token configured")]
    MissingToken,
}

impl CmsError {
    /// True when the backend could not be reached at all, as opposed to
    /// answering with something unusable.
    pub fn is_unreachable(&self) -> bool {
        matches!(self, CmsError::Network(_) | CmsError::Timeout(_))
    }
}
