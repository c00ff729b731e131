use async_trait::async_trait;

use crate::{api::solar_manager::FetchError, core::Estimate};

/// Source of forecast estimates.
#[async_trait]
pub trait ForecastProvider: Send + Sync {
    /// Perform a single attempt to fetch and build a fresh estimate.
    async fn fetch(&self) -> Result<Estimate, FetchError>;
}
