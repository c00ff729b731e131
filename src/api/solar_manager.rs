//! [Solar Manager](https://www.solar-manager.ch) cloud forecast client.

mod error;

use std::{
    fmt::{Debug, Formatter},
    time::Duration,
};

use async_trait::async_trait;
use bon::bon;
use chrono_tz::Tz;
use reqwest::{Client, Url};
use serde_json::Value;

pub use self::error::FetchError;
use crate::{
    api::provider::ForecastProvider,
    core::{Estimate, RawSamples},
    prelude::*,
};

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(20);

const CLOUD_URL: &str = "https://cloud.solar-manager.ch";

/// Basic authentication credentials.
#[derive(Clone)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    fn is_complete(&self) -> bool {
        !self.username.is_empty() && !self.password.is_empty()
    }
}

impl Debug for Credentials {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

#[derive(Debug)]
pub struct Api {
    client: Client,
    url: Option<Url>,
    credentials: Option<Credentials>,
    timezone: Tz,
    timeout: Duration,
}

#[bon]
impl Api {
    /// The explicit base URL takes precedence over the Smart Manager ID.
    #[builder]
    pub fn new(
        #[builder(default)] client: Client,
        base_url: Option<Url>,
        smart_manager_id: Option<String>,
        #[builder(default = Tz::UTC)] timezone: Tz,
        credentials: Option<Credentials>,
        #[builder(default = DEFAULT_TIMEOUT)] timeout: Duration,
    ) -> Self {
        let url = base_url.or_else(|| {
            smart_manager_id.filter(|id| !id.is_empty()).and_then(|id| forecast_url(&id))
        });
        if url.is_none() {
            warn!("no base URL or Smart Manager ID configured");
        }
        let credentials = credentials.filter(Credentials::is_complete);
        Self { client, url, credentials, timezone, timeout }
    }

    #[must_use]
    pub const fn url(&self) -> Option<&Url> {
        self.url.as_ref()
    }

    #[must_use]
    pub const fn timezone(&self) -> Tz {
        self.timezone
    }
}

#[async_trait]
impl ForecastProvider for Api {
    #[instrument(skip_all)]
    async fn fetch(&self) -> Result<Estimate, FetchError> {
        let url = self.url.as_ref().ok_or(FetchError::Configuration)?;
        info!(%url, "fetching…");

        let mut request = self.client.get(url.clone()).timeout(self.timeout);
        if let Some(credentials) = &self.credentials {
            request = request.basic_auth(&credentials.username, Some(&credentials.password));
        }
        let payload: Value = request.send().await?.error_for_status()?.json().await?;

        let data = match payload {
            Value::Object(mut object) => object.remove("data"),
            _ => None,
        };
        let samples: RawSamples = match data {
            Some(data @ Value::Array(_)) => serde_json::from_value(data)
                .map_err(|error| FetchError::Format(error.to_string()))?,
            _ => {
                return Err(FetchError::Format("`data` is missing or is not a list".to_owned()));
            }
        };
        info!(n_samples = samples.0.len(), "fetched");

        Ok(Estimate::build(samples, self.timezone))
    }
}

fn forecast_url(smart_manager_id: &str) -> Option<Url> {
    let mut url = Url::parse(CLOUD_URL).ok()?;
    url.path_segments_mut().ok()?.extend(["v3", "users", smart_manager_id, "data", "forecast"]);
    Some(url)
}
