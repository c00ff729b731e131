//! Serializable views over an estimate for the diagnostics dump and the energy dashboard.

use bon::bon;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::{
    core::{Estimate, Series},
    quantity::{energy::WattHours, power::Watts},
};

pub const REDACTED: &str = "**REDACTED**";

/// Configuration keys that never leave the process in clear text.
const TO_REDACT: [&str; 3] = ["username", "password", "smart_manager_id"];

#[must_use]
#[derive(Serialize)]
pub struct Diagnostics<'a> {
    entry: Entry,
    data: Option<Snapshot<'a>>,
    account: Option<Account>,
}

#[derive(Serialize)]
struct Entry {
    title: String,
    data: Map<String, Value>,
}

#[derive(Serialize)]
struct Snapshot<'a> {
    power_production_now: Watts,
    watts: &'a Series<Watts>,
    wh_period: &'a Series<WattHours>,
    wh_hours: &'a Series<WattHours>,
}

#[derive(Serialize)]
struct Account {
    timezone: String,
}

#[bon]
impl<'a> Diagnostics<'a> {
    #[builder]
    pub fn new(
        #[builder(into)] title: String,
        #[builder(default)] config: Map<String, Value>,
        estimate: Option<&'a Estimate>,
    ) -> Self {
        let data = redact(config);
        let snapshot = estimate.map(|estimate| Snapshot {
            power_production_now: estimate.power_production_now(),
            watts: estimate.watts(),
            wh_period: estimate.wh_period(),
            wh_hours: estimate.wh_hours(),
        });
        let account = estimate.map(|estimate| Account { timezone: estimate.timezone().to_string() });
        Self { entry: Entry { title, data }, data: snapshot, account }
    }
}

fn redact(mut config: Map<String, Value>) -> Map<String, Value> {
    for (key, value) in &mut config {
        if TO_REDACT.contains(&key.as_str()) {
            *value = Value::from(REDACTED);
        }
    }
    config
}

/// Hourly energy export for the energy dashboard.
#[must_use]
#[derive(Serialize)]
pub struct SolarForecast<'a> {
    wh_hours: &'a Series<WattHours>,
}

impl<'a> SolarForecast<'a> {
    /// `None` when there is nothing to export.
    pub fn from_estimate(estimate: Option<&'a Estimate>) -> Option<Self> {
        estimate
            .map(Estimate::wh_hours)
            .filter(|wh_hours| !wh_hours.is_empty())
            .map(|wh_hours| Self { wh_hours })
    }
}

#[cfg(test)]
mod tests {
    use chrono_tz::Tz;
    use serde_json::json;

    use super::*;
    use crate::{core::RawSamples, prelude::*};

    fn estimate() -> Estimate {
        let samples: RawSamples = serde_json::from_value(json!([
            {"t": "2024-01-01T10:00:00Z", "pW": 100},
            {"t": "2024-01-01T10:15:00Z", "pW": 200},
            {"t": "2024-01-01T10:30:00Z", "pW": 0},
        ]))
        .unwrap();
        Estimate::build(samples, Tz::UTC)
    }

    fn config() -> Map<String, Value> {
        let Value::Object(config) = json!({
            "username": "user",
            "password": "pass",
            "smart_manager_id": "abc123",
            "timezone": "UTC",
        }) else {
            unreachable!()
        };
        config
    }

    #[test]
    fn test_diagnostics() -> Result {
        let estimate = estimate();
        let diagnostics = Diagnostics::builder()
            .title("Solar Manager")
            .config(config())
            .estimate(&estimate)
            .build();
        assert_eq!(
            serde_json::to_value(&diagnostics)?,
            json!({
                "entry": {
                    "title": "Solar Manager",
                    "data": {
                        "username": REDACTED,
                        "password": REDACTED,
                        "smart_manager_id": REDACTED,
                        "timezone": "UTC",
                    },
                },
                "data": {
                    // The last sample is held past the end of the series:
                    "power_production_now": 0,
                    "watts": {
                        "2024-01-01T10:00:00+00:00": 100,
                        "2024-01-01T10:15:00+00:00": 200,
                        "2024-01-01T10:30:00+00:00": 0,
                    },
                    "wh_period": {
                        "2024-01-01T10:00:00+00:00": 25,
                        "2024-01-01T10:15:00+00:00": 50,
                        "2024-01-01T10:30:00+00:00": 0,
                    },
                    "wh_hours": {"2024-01-01T10:00:00+00:00": 75},
                },
                "account": {"timezone": "UTC"},
            })
        );
        Ok(())
    }

    #[test]
    fn test_diagnostics_without_estimate() -> Result {
        let diagnostics = Diagnostics::builder().title("Solar Manager").build();
        assert_eq!(
            serde_json::to_value(&diagnostics)?,
            json!({"entry": {"title": "Solar Manager", "data": {}}, "data": null, "account": null})
        );
        Ok(())
    }

    #[test]
    fn test_solar_forecast() -> Result {
        let estimate = estimate();
        let forecast = SolarForecast::from_estimate(Some(&estimate)).unwrap();
        assert_eq!(
            serde_json::to_value(&forecast)?,
            json!({"wh_hours": {"2024-01-01T10:00:00+00:00": 75}})
        );
        Ok(())
    }

    #[test]
    fn test_solar_forecast_empty() {
        let empty = Estimate::build(RawSamples::default(), Tz::UTC);
        assert!(SolarForecast::from_estimate(Some(&empty)).is_none());
        assert!(SolarForecast::from_estimate(None).is_none());
    }
}
