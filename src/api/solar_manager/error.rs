#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// Neither the URL nor the Smart Manager ID is known.
    #[error("neither the base URL nor the Smart Manager ID is configured")]
    Configuration,

    /// Network failure, timeout, non-success status, or an unreadable body.
    #[error("failed to fetch the forecast")]
    Transport(#[from] reqwest::Error),

    /// The response is JSON, but not the expected envelope.
    #[error("unexpected response format: {0}")]
    Format(String),
}

impl FetchError {
    /// Whether a later attempt may succeed without reconfiguration.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::Transport(_))
    }
}
