use std::{sync::Arc, time::Duration};

use parking_lot::RwLock;

use crate::{
    api::{FetchError, ForecastProvider},
    core::Estimate,
    prelude::*,
};

pub const DEFAULT_REFRESH_INTERVAL: Duration = Duration::from_secs(30 * 60);

/// Keeps the last successfully fetched estimate.
///
/// Readers get the published snapshot and never wait for an in-flight fetch.
pub struct Coordinator<P> {
    provider: P,
    current: RwLock<Option<Arc<Estimate>>>,
}

impl<P: ForecastProvider> Coordinator<P> {
    pub const fn new(provider: P) -> Self {
        Self { provider, current: RwLock::new(None) }
    }

    /// Last successfully fetched estimate, if any.
    #[must_use]
    pub fn current(&self) -> Option<Arc<Estimate>> {
        self.current.read().clone()
    }

    /// Fetch a new estimate and publish it in place of the current one.
    ///
    /// On failure, the previous estimate stays in place.
    #[instrument(skip_all)]
    pub async fn refresh(&self) -> Result<Arc<Estimate>, FetchError> {
        match self.provider.fetch().await {
            Ok(estimate) => {
                info!(n_samples = estimate.watts().len(), "refreshed");
                let estimate = Arc::new(estimate);
                *self.current.write() = Some(Arc::clone(&estimate));
                Ok(estimate)
            }
            Err(error) => {
                let source = std::error::Error::source(&error).map(ToString::to_string);
                warn!(
                    retryable = error.is_retryable(),
                    has_previous = self.current.read().is_some(),
                    source = ?source,
                    "failed to refresh: {error}",
                );
                Err(error)
            }
        }
    }
}
