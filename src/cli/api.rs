use chrono_tz::Tz;
use clap::Parser;
use reqwest::Url;
use serde_json::{Map, Value, json};
use sunbeam::{
    api::{Credentials, ForecastProvider, SolarManager},
    core::Estimate,
    prelude::*,
};

#[derive(Parser)]
pub struct ApiArgs {
    /// Forecast endpoint, takes precedence over the Smart Manager ID.
    #[clap(long, env = "SOLAR_MANAGER_BASE_URL", global = true)]
    base_url: Option<Url>,

    #[clap(long, env = "SOLAR_MANAGER_ID", global = true)]
    smart_manager_id: Option<String>,

    #[clap(long, env = "SOLAR_MANAGER_USERNAME", global = true)]
    username: Option<String>,

    #[clap(long, env = "SOLAR_MANAGER_PASSWORD", hide_env_values = true, global = true)]
    password: Option<String>,

    /// IANA timezone to localize the forecast into.
    #[clap(long, env = "TZ_NAME", default_value = "UTC", global = true)]
    timezone: Tz,

    #[clap(long, env = "SOLAR_MANAGER_TIMEOUT", default_value = "20s", global = true)]
    timeout: humantime::Duration,
}

impl ApiArgs {
    pub fn build(&self) -> SolarManager {
        let credentials = self
            .username
            .clone()
            .zip(self.password.clone())
            .map(|(username, password)| Credentials { username, password });
        SolarManager::builder()
            .maybe_base_url(self.base_url.clone())
            .maybe_smart_manager_id(self.smart_manager_id.clone())
            .timezone(self.timezone)
            .maybe_credentials(credentials)
            .timeout(self.timeout.into())
            .build()
    }

    pub async fn fetch(&self) -> Result<Estimate> {
        Ok(self.build().fetch().await?)
    }

    /// Configuration as it appears in the diagnostics, before redaction.
    pub fn config(&self) -> Map<String, Value> {
        [
            ("base_url", json!(self.base_url.as_ref().map(Url::as_str))),
            ("smart_manager_id", json!(self.smart_manager_id)),
            ("username", json!(self.username)),
            ("password", json!(self.password)),
            ("timezone", json!(self.timezone.name())),
            ("timeout", json!(self.timeout.to_string())),
        ]
        .into_iter()
        .map(|(key, value)| (key.to_owned(), value))
        .collect()
    }
}
